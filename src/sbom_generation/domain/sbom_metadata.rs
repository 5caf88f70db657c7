/// SbomMetadata value object: document-level information of a generated BOM
#[derive(Debug, Clone)]
pub struct SbomMetadata {
    timestamp: String,
    tool_name: String,
    tool_version: String,
    serial_number: String,
    root_component: Option<RootComponent>,
}

/// The project the BOM describes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootComponent {
    pub name: String,
    pub version: String,
}

impl SbomMetadata {
    pub fn new(
        timestamp: String,
        tool_name: String,
        tool_version: String,
        serial_number: String,
    ) -> Self {
        Self {
            timestamp,
            tool_name,
            tool_version,
            serial_number,
            root_component: None,
        }
    }

    pub fn with_root_component(mut self, name: String, version: String) -> Self {
        self.root_component = Some(RootComponent { name, version });
        self
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }

    pub fn root_component(&self) -> Option<&RootComponent> {
        self.root_component.as_ref()
    }
}
