use crate::application::dto::SbomResponse;
use crate::shared::Result;

/// SbomFormatter port for serializing a resolved SBOM into a document format
pub trait SbomFormatter {
    /// Formats the response of the SBOM generation use case
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, response: &SbomResponse) -> Result<String>;
}
