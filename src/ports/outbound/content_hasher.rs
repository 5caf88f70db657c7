use crate::shared::Result;
use async_trait::async_trait;
use std::path::Path;

/// ContentHasher port computing the content identity of a build output
#[async_trait]
pub trait ContentHasher: Send + Sync {
    /// Returns the lowercase hexadecimal digest of the whole file
    ///
    /// # Errors
    /// I/O errors (missing or unreadable file) are returned unchanged
    async fn hash_file(&self, path: &Path) -> Result<String>;
}
