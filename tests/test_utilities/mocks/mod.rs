/// Mock implementations for testing
mod mock_assets_file_reader;
mod mock_content_hasher;
mod mock_package_restorer;
mod mock_packages_file_reader;
mod mock_progress_reporter;
mod mock_project_evaluator;

pub use mock_assets_file_reader::MockAssetsFileReader;
pub use mock_content_hasher::MockContentHasher;
pub use mock_package_restorer::MockPackageRestorer;
pub use mock_packages_file_reader::MockPackagesFileReader;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_project_evaluator::MockProjectEvaluator;
