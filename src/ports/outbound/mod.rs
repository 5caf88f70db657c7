/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses to reach
/// the .NET toolchain, the file system and the console.
pub mod assets_file_reader;
pub mod content_hasher;
pub mod formatter;
pub mod output_presenter;
pub mod package_restorer;
pub mod packages_file_reader;
pub mod progress_reporter;
pub mod project_evaluator;

pub use assets_file_reader::AssetsFileReader;
pub use content_hasher::ContentHasher;
pub use formatter::SbomFormatter;
pub use output_presenter::OutputPresenter;
pub use package_restorer::{PackageRestorer, RestoreResult};
pub use packages_file_reader::PackagesFileReader;
pub use progress_reporter::ProgressReporter;
pub use project_evaluator::{EvaluatedProject, ProjectEvaluator, ProjectItem};
