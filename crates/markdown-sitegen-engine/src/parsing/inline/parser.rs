use crate::error::ConvertError;

use super::{
    delimiter::split_delimiter,
    kinds::{CodeSpan, Emphasis},
    links::{split_images, split_links},
    types::{Span, SpanKind},
};

/// Tokenizes one unit of inline text into typed [`Span`]s.
///
/// The passes run in a fixed order over a single starting `Text` span:
/// bold, italic, code, links, images. Each pass only rewrites `Text` spans,
/// so content typed by an earlier pass is never reinterpreted. Links run
/// before images; link extraction already refuses image syntax.
///
/// # Errors
/// - [`ConvertError::MalformedInline`] for an unbalanced `**`, `*` or `` ` ``
/// - [`ConvertError::UrlRequired`] for `[label]()` or `![alt]()`
pub fn text_to_spans(text: &str) -> Result<Vec<Span>, ConvertError> {
    let spans = vec![Span::text(text)];
    let spans = split_delimiter(spans, Emphasis::BOLD, SpanKind::Bold)?;
    let spans = split_delimiter(spans, Emphasis::ITALIC, SpanKind::Italic)?;
    let spans = split_delimiter(spans, CodeSpan::TICK, SpanKind::Code)?;
    let spans = split_links(spans)?;
    split_images(spans)
}
