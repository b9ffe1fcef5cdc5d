//! # Inline Parsing
//!
//! Flat, pass-based tokenization of one line (or one joined quote) of text
//! into typed spans.
//!
//! ## Architecture
//!
//! Each pass takes the span list produced so far and only rewrites `Text`
//! spans. Already-typed spans flow through untouched, which is what makes
//! the passes composable and keeps emphasis non-recursive.
//!
//! ## Modules
//!
//! - **`types`**: `Span` and the closed `SpanKind` enum
//! - **`kinds`**: Delimiter and pattern owners (Emphasis, CodeSpan, Link, Image)
//! - **`delimiter`**: `split_delimiter()` for balanced-pair markers
//! - **`links`**: `extract_links()`, `extract_images()` and their splitters
//! - **`parser`**: `text_to_spans()` main entry point
//!
//! ## Pass Order
//!
//! `**` → `*` → `` ` `` → links → images. Bold before italic so `**` is never
//! read as two italic markers.

pub mod delimiter;
pub mod kinds;
pub mod links;
pub mod parser;
pub mod types;

pub use delimiter::split_delimiter;
pub use links::{extract_images, extract_links, split_images, split_links};
pub use parser::text_to_spans;
pub use types::{Span, SpanKind};
