//! # HTML Output
//!
//! The render tree and the compiler that builds it from classified blocks.
//!
//! - **`node`**: `Node` (`Leaf` / `Parent`), `Attributes`, `RenderOptions`
//! - **`compile`**: `block_to_node()`, `span_to_node()`, `markdown_to_node()`

pub mod compile;
pub mod node;

pub use compile::{ROOT_TAG, block_to_node, markdown_to_node, span_to_node};
pub use node::{Attributes, LeafNode, Node, ParentNode, RenderOptions, VOID_TAGS};

use crate::error::ConvertError;

/// Converts a markdown document into one `<div>` wrapped markup fragment.
///
/// # Errors
/// Any [`ConvertError`]; no partial output is produced.
pub fn convert(document: &str) -> Result<String, ConvertError> {
    convert_with(document, &RenderOptions::default())
}

/// Like [`convert`], with explicit render options.
pub fn convert_with(document: &str, options: &RenderOptions) -> Result<String, ConvertError> {
    markdown_to_node(document)?.render_with(options)
}
