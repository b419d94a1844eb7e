//! MiniJinja-backed [`TemplateRenderer`].

use std::sync::Arc;

use minijinja::{Environment, UndefinedBehavior};
use tracing::trace;

use blueprint_core::application::ports::{
    RenderError, TemplateModel, TemplateRef, TemplateRenderer,
};
use blueprint_core::domain::{GeneratedResource, RelativePath};

use super::source::TemplateSource;

const TEMPLATE_SUFFIX: &str = ".j2";

/// Renders `.j2` templates to UTF-8 text; any other asset is copied as-is.
///
/// Undefined variables are an error, so a template referring to a key the
/// model does not carry fails loudly instead of rendering an empty string.
pub struct MiniJinjaRenderer {
    source: Arc<dyn TemplateSource>,
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    pub fn new(source: Arc<dyn TemplateSource>) -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        Self { source, env }
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(
        &self,
        output: &RelativePath,
        template: &TemplateRef,
        model: &TemplateModel,
    ) -> Result<GeneratedResource, RenderError> {
        let name = template.as_str();
        let bytes = self.source.read(name).ok_or_else(|| RenderError::NotFound {
            template: name.to_owned(),
        })?;

        if !name.ends_with(TEMPLATE_SUFFIX) {
            trace!(template = name, "copying asset verbatim");
            return Ok(GeneratedResource::binary(output.clone(), bytes));
        }

        let source = String::from_utf8(bytes).map_err(|e| RenderError::Failed {
            template: name.to_owned(),
            reason: format!("template is not valid UTF-8: {e}"),
        })?;
        let content = self
            .env
            .render_named_str(name, &source, model)
            .map_err(|e| RenderError::Failed {
                template: name.to_owned(),
                reason: e.to_string(),
            })?;
        trace!(template = name, output = %output, "rendered template");
        Ok(GeneratedResource::text(output.clone(), content))
    }
}
