use crate::sbom_generation::domain::SbomMetadata;
use chrono::Utc;
use uuid::Uuid;

/// Name reported in the `metadata.tools` section of generated documents
pub const TOOL_NAME: &str = "dotnet-sbom";

/// SbomGenerator service for generating SBOM metadata
///
/// Creates document metadata conforming to the CycloneDX specification.
pub struct SbomGenerator;

impl SbomGenerator {
    /// Generates SBOM metadata with current timestamp and unique serial number
    pub fn generate_metadata(tool_name: &str, tool_version: &str) -> SbomMetadata {
        let timestamp = Utc::now().to_rfc3339();
        let serial_number = format!("urn:uuid:{}", Uuid::new_v4());

        SbomMetadata::new(
            timestamp,
            tool_name.to_string(),
            tool_version.to_string(),
            serial_number,
        )
    }

    /// Generates SBOM metadata describing this tool, using the compile-time version
    pub fn generate_default_metadata() -> SbomMetadata {
        Self::generate_metadata(TOOL_NAME, env!("CARGO_PKG_VERSION"))
    }
}
