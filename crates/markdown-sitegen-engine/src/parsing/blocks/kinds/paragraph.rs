/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the fallback block when no other
/// kind validates. The whole block text, line breaks included, is tokenized
/// as one inline unit.
pub struct Paragraph;

impl Paragraph {
    pub const TAG: &'static str = "p";
}
