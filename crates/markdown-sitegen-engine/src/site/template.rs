use std::path::Path;

use crate::io::IoError;

/// A page template with `{{ Title }}` and `{{ Content }}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
}

impl Template {
    pub const TITLE: &'static str = "{{ Title }}";
    pub const CONTENT: &'static str = "{{ Content }}";

    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn load(path: &Path) -> Result<Self, IoError> {
        if !path.exists() {
            return Err(IoError::NotFound(path.to_path_buf()));
        }
        Ok(Self::new(std::fs::read_to_string(path)?))
    }

    /// Substitutes every placeholder occurrence.
    ///
    /// The title is substituted first, so a `{{ Title }}` that appears inside
    /// the rendered content is left alone.
    pub fn render(&self, title: &str, content: &str) -> String {
        self.source
            .replace(Self::TITLE, title)
            .replace(Self::CONTENT, content)
    }
}
