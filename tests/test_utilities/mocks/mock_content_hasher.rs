use async_trait::async_trait;
use std::path::Path;
use dotnet_sbom::prelude::*;

/// Mock ContentHasher deriving a fake digest from the file name
#[derive(Default)]
pub struct MockContentHasher {
    pub should_fail: bool,
}

impl MockContentHasher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure() -> Self {
        Self { should_fail: true }
    }

    pub fn digest_of(file_name: &str) -> String {
        format!("digest-{}", file_name.to_lowercase())
    }
}

#[async_trait]
impl ContentHasher for MockContentHasher {
    async fn hash_file(&self, path: &Path) -> Result<String> {
        if self.should_fail {
            anyhow::bail!("Mock hashing failure: {}", path.display());
        }
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self::digest_of(&file_name))
    }
}
