use crate::parsing::inline::SpanKind;

/// Errors raised while converting a markdown document.
///
/// Conversion is all-or-nothing: any of these aborts the whole document and no
/// partial output is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// An inline delimiter (`**`, `*` or `` ` ``) appears an odd number of times.
    #[error("Odd or missing amount of delimiters")]
    MalformedInline { delimiter: &'static str },
    /// A link or image span was built without a target URL.
    #[error("URL must be provided for {kind} span")]
    UrlRequired { kind: SpanKind },
    /// Segmentation left no non-empty blocks.
    #[error("Empty blocks: Invalid Markdown")]
    EmptyDocument,
    /// No `# Title` line exists in the document.
    #[error("Title not found")]
    TitleNotFound,
    /// The render tree violates a structural rule.
    #[error("Invalid node: {0}")]
    InvalidNode(String),
}
