/// Ports module defining interfaces for hexagonal architecture
///
/// The application core only depends on these traits; the adapters layer
/// provides the implementations backed by the .NET SDK and the file system.
pub mod outbound;
