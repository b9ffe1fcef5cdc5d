//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Emphasis`**: `BOLD = "**"`, `ITALIC = "*"`
//! - **`CodeSpan`**: `TICK = "`"` - content is always literal
//! - **`Link`** / **`Image`**: `[label](url)` and `![alt](url)` patterns
//!
//! The tokenizer refers to these constants; it never hardcodes `**` or `` ` ``.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use link::{Image, Link};
