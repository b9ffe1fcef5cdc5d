pub mod blocks;
pub mod inline;
pub mod title;

#[cfg(test)]
mod tests;

use crate::error::ConvertError;

use blocks::{Block, MarkdownBlockClassifier, split_blocks};

pub use title::extract_title;

#[derive(Debug)]
pub struct ParsedDoc<'a> {
    pub blocks: Vec<Block<'a>>,
}

/// Segments and classifies a document.
///
/// # Errors
/// [`ConvertError::EmptyDocument`] when the document has no content.
pub fn parse_document(document: &str) -> Result<ParsedDoc<'_>, ConvertError> {
    let classifier = MarkdownBlockClassifier;

    let blocks = split_blocks(document)?
        .into_iter()
        .map(|text| Block {
            kind: classifier.classify(text),
            text,
        })
        .collect();

    Ok(ParsedDoc { blocks })
}
