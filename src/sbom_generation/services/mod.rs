mod component_assembler;
mod sbom_generator;

pub use component_assembler::{ComponentAssembler, FILENAME_PROPERTY};
pub use sbom_generator::{SbomGenerator, TOOL_NAME};
