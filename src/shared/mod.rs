/// Shared kernel - error types and helpers used by every layer
pub mod error;
pub mod result;
pub mod security;

pub use result::Result;
