use crate::error::ConvertError;

use super::blocks::kinds::Heading;

/// Returns the text of the first level-1 heading line in `document`.
///
/// Any line counts, not just the first block, and deeper headings are
/// skipped: `## Sub` is not a title. Surrounding whitespace is trimmed and a
/// closing `#` run is dropped when whitespace separates it from the text.
///
/// # Errors
/// [`ConvertError::TitleNotFound`] when no `# ...` line exists.
pub fn extract_title(document: &str) -> Result<String, ConvertError> {
    document
        .lines()
        .find_map(|line| match Heading::parse(line) {
            Some((1, text)) => Some(strip_closing_sequence(text).to_string()),
            _ => None,
        })
        .ok_or(ConvertError::TitleNotFound)
}

fn strip_closing_sequence(text: &str) -> &str {
    let text = text.trim();
    let without = text.trim_end_matches(Heading::MARKER);
    if without.len() < text.len() && without.ends_with(char::is_whitespace) {
        without.trim_end()
    } else {
        text
    }
}
