use std::sync::Arc;

use blueprint_core::application::ports::{ScanError, TemplateRef, TemplateScanner};

use super::source::TemplateSource;

/// [`TemplateScanner`] over any [`TemplateSource`].
#[derive(Clone)]
pub struct SourceScanner {
    source: Arc<dyn TemplateSource>,
}

impl SourceScanner {
    pub fn new(source: Arc<dyn TemplateSource>) -> Self {
        Self { source }
    }
}

impl TemplateScanner for SourceScanner {
    fn scan(&self, root: &TemplateRef) -> Result<Vec<TemplateRef>, ScanError> {
        let mut found: Vec<TemplateRef> = self
            .source
            .list(root.as_str())?
            .into_iter()
            .map(TemplateRef::new)
            .collect();
        found.sort();
        Ok(found)
    }
}
