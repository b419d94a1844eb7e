//! Infrastructure adapters for Blueprint.
//!
//! This crate implements the ports defined in
//! `blueprint-core::application::ports`. It contains all external
//! dependencies and I/O operations.

pub mod archive;
pub mod filesystem;
pub mod templates;

use std::sync::Arc;

use blueprint_core::application::{
    ConfigurationError, GenerationService, PipelineExecutor, ProfileCatalog,
    ResourceMaterializer, standard_registry,
};

// Re-export commonly used adapters
pub use archive::ZipArchiver;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use templates::{
    DirectoryTemplates, EmbeddedTemplates, MemoryTemplates, MiniJinjaRenderer, SourceScanner,
    TemplateSource,
};

/// Wire a [`GenerationService`] over `templates` with the local filesystem
/// and the zip archiver.
pub fn generation_service(
    templates: Arc<dyn TemplateSource>,
) -> Result<GenerationService, ConfigurationError> {
    let renderer = Arc::new(MiniJinjaRenderer::new(templates.clone()));
    let scanner = Arc::new(SourceScanner::new(templates));
    let registry = standard_registry(renderer, scanner);
    let executor = PipelineExecutor::new(Arc::new(registry), Arc::new(ProfileCatalog::standard()))?;

    Ok(GenerationService::new(
        Arc::new(executor),
        ResourceMaterializer::new(Arc::new(LocalFilesystem::new())),
        Arc::new(ZipArchiver::new()),
    ))
}
