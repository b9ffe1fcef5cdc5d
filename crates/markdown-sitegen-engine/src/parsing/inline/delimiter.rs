use crate::error::ConvertError;

use super::types::{Span, SpanKind};

/// Splits every `Text` span on a balanced delimiter.
///
/// Segments at even positions stay `Text`, segments at odd positions (those
/// between an opening and a closing delimiter) become `kind`. Empty segments
/// are dropped. Spans that are already typed pass through untouched, so the
/// passes can be layered and re-running a pass is a no-op on its own output.
///
/// # Errors
/// [`ConvertError::MalformedInline`] if a `Text` span holds an odd number of
/// delimiters.
pub fn split_delimiter(
    spans: Vec<Span>,
    delimiter: &'static str,
    kind: SpanKind,
) -> Result<Vec<Span>, ConvertError> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_text() {
            out.push(span);
            continue;
        }

        let text = span.text_content();
        if text.matches(delimiter).count() % 2 != 0 {
            return Err(ConvertError::MalformedInline { delimiter });
        }

        for (idx, segment) in text.split(delimiter).enumerate() {
            if segment.is_empty() {
                continue;
            }
            if idx % 2 == 0 {
                out.push(Span::text(segment));
            } else {
                out.push(Span::plain(kind, segment));
            }
        }
    }

    Ok(out)
}
