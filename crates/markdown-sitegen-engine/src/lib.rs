pub mod error;
pub mod html;
pub mod io;
pub mod models;
pub mod parsing;
pub mod site;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use error::ConvertError;
pub use html::{Node, RenderOptions, convert, convert_with, markdown_to_node};
pub use io::IoError;
pub use models::SourceFile;
pub use parsing::{
    blocks::{BlockKind, classify, split_blocks},
    extract_title,
    inline::{Span, SpanKind, extract_images, extract_links, text_to_spans},
};
pub use site::{SiteError, SiteOptions, SiteReport, Template, generate_page, generate_site};
