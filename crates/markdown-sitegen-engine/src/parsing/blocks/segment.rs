use std::sync::OnceLock;

use regex::Regex;

use crate::error::ConvertError;

fn blank_line_regex() -> &'static Regex {
    static BLANK_LINE_REGEX: OnceLock<Regex> = OnceLock::new();
    BLANK_LINE_REGEX.get_or_init(|| Regex::new(r"(?:\r?\n){2,}").expect("Invalid block regex"))
}

/// Splits a document into blocks on runs of two or more line breaks.
///
/// Each block is trimmed; blocks left empty by trimming are discarded.
/// Line breaks inside a block are kept for the multi-line kinds.
///
/// # Errors
/// [`ConvertError::EmptyDocument`] when no non-empty block remains.
pub fn split_blocks(document: &str) -> Result<Vec<&str>, ConvertError> {
    let blocks: Vec<&str> = blank_line_regex()
        .split(document)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect();

    if blocks.is_empty() {
        return Err(ConvertError::EmptyDocument);
    }
    Ok(blocks)
}
