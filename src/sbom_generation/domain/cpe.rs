use std::fmt;

const CPE_PREFIX: &str = "cpe:2.3";
const WILDCARD: &str = "*";

/// Common Platform Enumeration 2.3 formatted string binding.
///
/// All eleven attributes are optional; an unset (or blank) attribute renders
/// as the `*` wildcard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cpe {
    pub part: Option<String>,
    pub vendor: Option<String>,
    pub product: Option<String>,
    pub version: Option<String>,
    pub update: Option<String>,
    pub edition: Option<String>,
    pub language: Option<String>,
    pub software_edition: Option<String>,
    pub target_software: Option<String>,
    pub target_hardware: Option<String>,
    pub other: Option<String>,
}

impl Cpe {
    /// An application (`part = "a"`) CPE with every other attribute unset
    pub fn application() -> Self {
        Self::default().with_part("a")
    }

    pub fn with_part(mut self, part: impl Into<String>) -> Self {
        self.part = Some(part.into());
        self
    }

    pub fn with_vendor(mut self, vendor: Option<String>) -> Self {
        self.vendor = vendor;
        self
    }

    pub fn with_product(mut self, product: Option<String>) -> Self {
        self.product = product;
        self
    }

    pub fn with_version(mut self, version: Option<String>) -> Self {
        self.version = version;
        self
    }

    /// Renders the canonical `cpe:2.3:part:vendor:...:other` string
    pub fn render(&self) -> String {
        let fields = [
            &self.part,
            &self.vendor,
            &self.product,
            &self.version,
            &self.update,
            &self.edition,
            &self.language,
            &self.software_edition,
            &self.target_software,
            &self.target_hardware,
            &self.other,
        ];

        let mut rendered = String::from(CPE_PREFIX);
        for field in fields {
            rendered.push(':');
            rendered.push_str(match field.as_deref().map(str::trim) {
                Some(value) if !value.is_empty() => value,
                _ => WILDCARD,
            });
        }
        rendered
    }
}

impl fmt::Display for Cpe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
