/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod console;
pub mod dotnet;
pub mod filesystem;
pub mod formatters;
