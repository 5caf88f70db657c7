/// Filesystem adapters for file I/O operations
mod assets_file_reader;
mod content_hasher;
mod file_writer;
mod packages_config_reader;

pub use assets_file_reader::ProjectAssetsFileReader;
pub use content_hasher::Sha256ContentHasher;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use packages_config_reader::PackagesConfigReader;
