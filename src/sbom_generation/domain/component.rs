use super::{ComponentScope, Cpe};
use std::fmt;

/// CycloneDX component classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Application,
    Library,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Application => "application",
            Classification::Library => "library",
        }
    }
}

/// Hash algorithm of a component hash entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    Sha256,
}

impl HashAlgorithm {
    /// Algorithm name as spelled by CycloneDX
    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "SHA-256",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A name/value metadata pair attached to a component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub value: String,
}

impl Property {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A digest of the component's build output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentHash {
    pub algorithm: HashAlgorithm,
    pub content: String,
}

/// Normalized component produced for a project of the workspace
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    name: String,
    version: String,
    scope: ComponentScope,
    classification: Classification,
    bom_ref: String,
    cpe: Cpe,
    properties: Vec<Property>,
    hashes: Vec<ComponentHash>,
}

impl Component {
    /// Creates a component; the BOM reference is derived as `name@version`
    pub fn new(
        name: String,
        version: String,
        scope: ComponentScope,
        classification: Classification,
        cpe: Cpe,
        properties: Vec<Property>,
        hashes: Vec<ComponentHash>,
    ) -> Self {
        let bom_ref = format!("{}@{}", name, version);
        Self {
            name,
            version,
            scope,
            classification,
            bom_ref,
            cpe,
            properties,
            hashes,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn scope(&self) -> ComponentScope {
        self.scope
    }

    pub fn classification(&self) -> Classification {
        self.classification
    }

    pub fn bom_ref(&self) -> &str {
        &self.bom_ref
    }

    pub fn cpe(&self) -> &Cpe {
        &self.cpe
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn hashes(&self) -> &[ComponentHash] {
        &self.hashes
    }
}
