use std::fmt;

use crate::error::ConvertError;

/// The closed set of inline span kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    /// Plain text, still eligible for further inline passes.
    Text,
    Bold,
    Italic,
    Code,
    /// A `[label](url)` link. Requires a URL.
    Link,
    /// A `![alt](url)` image. Requires a URL.
    Image,
}

impl SpanKind {
    /// Whether spans of this kind must carry a non-empty URL.
    pub fn requires_url(self) -> bool {
        matches!(self, SpanKind::Link | SpanKind::Image)
    }
}

impl fmt::Display for SpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SpanKind::Text => "text",
            SpanKind::Bold => "bold",
            SpanKind::Italic => "italic",
            SpanKind::Code => "code",
            SpanKind::Link => "link",
            SpanKind::Image => "image",
        };
        f.write_str(name)
    }
}

/// One typed fragment of inline content.
///
/// Fields are private so the URL invariant for links and images can only be
/// established through [`Span::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    kind: SpanKind,
    text: String,
    url: Option<String>,
}

impl Span {
    /// Builds a span, rejecting links and images without a URL.
    pub fn new(
        kind: SpanKind,
        text: impl Into<String>,
        url: Option<String>,
    ) -> Result<Self, ConvertError> {
        if kind.requires_url() && url.as_deref().is_none_or(str::is_empty) {
            return Err(ConvertError::UrlRequired { kind });
        }
        Ok(Self {
            kind,
            text: text.into(),
            url,
        })
    }

    /// Builds a plain `Text` span.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: SpanKind::Text,
            text: text.into(),
            url: None,
        }
    }

    /// Builds a span of a kind that carries no URL (text, bold, italic, code).
    ///
    /// Link and image kinds go through [`Span::new`] instead.
    pub(crate) fn plain(kind: SpanKind, text: impl Into<String>) -> Self {
        debug_assert!(!kind.requires_url());
        Self {
            kind,
            text: text.into(),
            url: None,
        }
    }

    pub fn kind(&self) -> SpanKind {
        self.kind
    }

    pub fn text_content(&self) -> &str {
        &self.text
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn is_text(&self) -> bool {
        self.kind == SpanKind::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_without_url_is_rejected() {
        let err = Span::new(SpanKind::Link, "label", None).unwrap_err();
        assert_eq!(
            err,
            ConvertError::UrlRequired {
                kind: SpanKind::Link
            }
        );
    }

    #[test]
    fn image_with_empty_url_is_rejected() {
        let err = Span::new(SpanKind::Image, "alt", Some(String::new())).unwrap_err();
        assert_eq!(err.to_string(), "URL must be provided for image span");
    }

    #[test]
    fn text_span_needs_no_url() {
        let span = Span::new(SpanKind::Bold, "loud", None).unwrap();
        assert_eq!(span.kind(), SpanKind::Bold);
        assert_eq!(span.text_content(), "loud");
        assert_eq!(span.url(), None);
    }

    #[test]
    fn equality_is_structural() {
        let a = Span::new(SpanKind::Link, "x", Some("https://a".into())).unwrap();
        let b = Span::new(SpanKind::Link, "x", Some("https://a".into())).unwrap();
        let c = Span::new(SpanKind::Link, "x", Some("https://b".into())).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
