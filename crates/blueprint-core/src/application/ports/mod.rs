//! Application ports (traits) for external dependencies.
//!
//! - **Driven (Output) Ports**: called by the application, implemented by
//!   `blueprint-adapters`
//!   - `TemplateRenderer` / `TemplateScanner`: template rendering and discovery
//!   - `Filesystem`: directory creation and file writes
//!   - `Archiver`: packaging a generated tree
//!
//! - **Driving (Input) Ports**: the CLI calls `GenerationService` directly.

pub mod output;

pub use output::{
    Archiver, Filesystem, RenderError, ScanError, TemplateModel, TemplateRef, TemplateRenderer,
    TemplateScanner,
};

#[cfg(test)]
pub use output::{MockArchiver, MockFilesystem, MockTemplateRenderer, MockTemplateScanner};
