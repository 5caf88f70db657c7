/// Adapters driving the .NET SDK command line
mod dotnet_restorer;
mod msbuild_evaluator;

pub use dotnet_restorer::DotnetRestorer;
pub use msbuild_evaluator::{MsBuildEvaluator, DOTNET_EXECUTABLE};
