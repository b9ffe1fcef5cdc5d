/// The closed set of block kinds.
///
/// Compared only by variant; there is no equality against raw numbers or
/// names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// The default when no other kind validates.
    Paragraph,
    /// An ATX heading; `level` is in `1..=6`.
    Heading { level: u8 },
    /// A block containing a ```` ``` ```` fenced region.
    CodeBlock,
    /// Every line starts with `>`.
    Quote,
    /// Every line starts with `* ` or `- `.
    UnorderedList,
    /// Every line starts with `N. `, numbered 1, 2, 3, ...
    OrderedList,
}

/// A segmented block together with its classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    pub kind: BlockKind,
    /// Trimmed block text, internal line breaks preserved.
    pub text: &'a str,
}
