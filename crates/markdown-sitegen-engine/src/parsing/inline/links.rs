use std::ops::Range;

use crate::error::ConvertError;

use super::kinds::{Image, Link};
use super::types::{Span, SpanKind};

/// A `[label](url)` or `![alt](url)` match inside a piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Found<'a> {
    range: Range<usize>,
    label: &'a str,
    url: &'a str,
}

/// Iterates over links in `text`, skipping anything that is image syntax.
fn find_links(text: &str) -> impl Iterator<Item = Found<'_>> {
    Link::regex().captures_iter(text).filter_map(move |caps| {
        let whole = caps.get(0)?;
        if text[..whole.start()].ends_with(Link::IMAGE_BANG) {
            return None;
        }
        Some(Found {
            range: whole.range(),
            label: caps.get(1)?.as_str(),
            url: caps.get(2)?.as_str(),
        })
    })
}

fn find_images(text: &str) -> impl Iterator<Item = Found<'_>> {
    Image::regex().captures_iter(text).filter_map(|caps| {
        Some(Found {
            range: caps.get(0)?.range(),
            label: caps.get(1)?.as_str(),
            url: caps.get(2)?.as_str(),
        })
    })
}

/// Returns every `(label, url)` link pair in `text`, in order.
///
/// Image syntax (`![alt](url)`) is never reported as a link.
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    find_links(text)
        .map(|f| (f.label.to_string(), f.url.to_string()))
        .collect()
}

/// Returns every `(alt, url)` image pair in `text`, in order.
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    find_images(text)
        .map(|f| (f.label.to_string(), f.url.to_string()))
        .collect()
}

/// Splits link syntax out of every `Text` span.
pub fn split_links(spans: Vec<Span>) -> Result<Vec<Span>, ConvertError> {
    split_matches(spans, SpanKind::Link, |text| find_links(text).next())
}

/// Splits image syntax out of every `Text` span.
pub fn split_images(spans: Vec<Span>) -> Result<Vec<Span>, ConvertError> {
    split_matches(spans, SpanKind::Image, |text| find_images(text).next())
}

/// Repeatedly takes the first match off the front of each `Text` span.
///
/// Empty prefixes and an empty final remainder produce no span at all, so a
/// match at either end of the text never yields an empty `Text` span.
fn split_matches(
    spans: Vec<Span>,
    kind: SpanKind,
    first_match: impl for<'a> Fn(&'a str) -> Option<Found<'a>>,
) -> Result<Vec<Span>, ConvertError> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_text() {
            out.push(span);
            continue;
        }

        let mut rest = span.text_content();
        while let Some(found) = first_match(rest) {
            let prefix = &rest[..found.range.start];
            if !prefix.is_empty() {
                out.push(Span::text(prefix));
            }
            out.push(Span::new(kind, found.label, Some(found.url.to_string()))?);
            rest = &rest[found.range.end..];
        }
        if !rest.is_empty() {
            out.push(Span::text(rest));
        }
    }

    Ok(out)
}
