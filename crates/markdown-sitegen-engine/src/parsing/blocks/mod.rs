//! # Block Parsing
//!
//! Two-phase block parsing over blank-line separated blocks.
//!
//! ## Parsing Phases
//!
//! 1. **Segmentation** (`segment`): the document is split into trimmed block
//!    strings on runs of two or more line breaks
//!
//! 2. **Classification** (`classify`): each block is classified as a whole
//!    into a `BlockKind` by a fixed precedence of validated rules
//!
//! ## Modules
//!
//! - **`types`**: Core types (`BlockKind`, `Block`)
//! - **`kinds`**: Block-specific types with owned delimiters (Heading,
//!   CodeFence, BlockQuote, UnorderedList, OrderedList, Paragraph)
//! - **`segment`**: `split_blocks()`
//! - **`classify`**: `MarkdownBlockClassifier` producing a `BlockKind`
//!
//! ## Key Invariants
//!
//! - Blocks never start or end with whitespace
//! - Fenced code blocks are raw zones: no inline parsing inside
//! - An ordered list is numbered exactly 1, 2, 3, ... or it is a paragraph

pub mod classify;
pub mod kinds;
pub mod segment;
pub mod types;

pub use classify::{MarkdownBlockClassifier, classify};
pub use segment::split_blocks;
pub use types::{Block, BlockKind};
