//! Builds the generation service from configuration.

use std::sync::Arc;

use tracing::debug;

use blueprint_adapters::{DirectoryTemplates, EmbeddedTemplates, TemplateSource, generation_service};
use blueprint_core::application::GenerationService;

use crate::config::AppConfig;
use crate::error::{CliError, CliResult};

/// Templates from `templates.local_path` when configured, otherwise the
/// embedded set.
pub fn template_source(config: &AppConfig) -> Arc<dyn TemplateSource> {
    match &config.templates.local_path {
        Some(path) => Arc::new(DirectoryTemplates::new(path)),
        None => Arc::new(EmbeddedTemplates::new()),
    }
}

/// Wire adapters into the core. Registry/profile mismatches surface here as
/// configuration errors before any request is handled.
pub fn service(config: &AppConfig) -> CliResult<GenerationService> {
    let templates = template_source(config);
    debug!(templates = %templates.describe(), "wiring generation service");
    generation_service(templates).map_err(|e| CliError::Core(e.into()))
}
