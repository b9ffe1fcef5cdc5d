use relative_path::{RelativePath, RelativePathBuf};

/// A file under the content directory, identified by its relative path.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SourceFile {
    relative_path: RelativePathBuf,
}

impl SourceFile {
    pub const MARKDOWN_EXTENSION: &'static str = "md";
    pub const PAGE_EXTENSION: &'static str = "html";

    pub fn new(relative_path: RelativePathBuf) -> Self {
        Self { relative_path }
    }

    /// Create from a relative path string
    pub fn from_relative_str(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }

    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// Whether this file is converted to a page rather than copied.
    pub fn is_markdown(&self) -> bool {
        self.relative_path.extension() == Some(Self::MARKDOWN_EXTENSION)
    }

    /// Where the file lands under the output directory.
    ///
    /// Markdown files become `.html` pages; everything else keeps its path.
    pub fn output_path(&self) -> RelativePathBuf {
        if self.is_markdown() {
            self.relative_path.with_extension(Self::PAGE_EXTENSION)
        } else {
            self.relative_path.clone()
        }
    }
}

impl From<RelativePathBuf> for SourceFile {
    fn from(path: RelativePathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&str> for SourceFile {
    fn from(path: &str) -> Self {
        Self::from_relative_str(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markdown_becomes_html_page() {
        let file = SourceFile::from("blog/tom/index.md");
        assert!(file.is_markdown());
        assert_eq!(file.output_path().as_str(), "blog/tom/index.html");
    }

    #[test]
    fn assets_keep_their_path() {
        let file = SourceFile::from("images/tolkien.png");
        assert!(!file.is_markdown());
        assert_eq!(file.output_path().as_str(), "images/tolkien.png");
    }

    #[test]
    fn extension_must_match_exactly() {
        assert!(!SourceFile::from("notes.markdown").is_markdown());
        assert!(!SourceFile::from("README").is_markdown());
    }
}
