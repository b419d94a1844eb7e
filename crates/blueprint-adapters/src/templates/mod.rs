//! Template sources, discovery and rendering.

mod renderer;
mod scanner;
mod source;

pub use renderer::MiniJinjaRenderer;
pub use scanner::SourceScanner;
pub use source::{DirectoryTemplates, EmbeddedTemplates, MemoryTemplates, TemplateSource};
