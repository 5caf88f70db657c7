use crate::ports::outbound::ContentHasher;
use crate::shared::error::SbomError;
use crate::shared::Result;
use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::path::Path;
use tokio::io::AsyncReadExt;

const CHUNK_SIZE: usize = 8 * 1024;

/// Sha256ContentHasher adapter computing the SHA-256 digest of build outputs
///
/// The file is streamed, so large assemblies are never held in memory.
/// The digest is rendered as lowercase hex.
pub struct Sha256ContentHasher;

impl Sha256ContentHasher {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Sha256ContentHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentHasher for Sha256ContentHasher {
    async fn hash_file(&self, path: &Path) -> Result<String> {
        let read_error = |e: std::io::Error| SbomError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        };

        let mut file = tokio::fs::File::open(path).await.map_err(read_error)?;
        let mut hasher = Sha256::new();
        let mut buffer = vec![0u8; CHUNK_SIZE];
        loop {
            let read = file.read(&mut buffer).await.map_err(read_error)?;
            if read == 0 {
                break;
            }
            hasher.update(&buffer[..read]);
        }

        Ok(format!("{:x}", hasher.finalize()))
    }
}
