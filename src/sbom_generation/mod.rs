/// Domain layer - models and pure services for SBOM generation
///
/// Nothing in this layer performs I/O; project evaluation, restore and
/// hashing are reached through the ports.
pub mod domain;
pub mod services;
