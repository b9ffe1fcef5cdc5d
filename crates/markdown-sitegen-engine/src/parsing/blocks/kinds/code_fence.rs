pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const PRE_TAG: &'static str = "pre";
    pub const CODE_TAG: &'static str = "code";
    const TRIMMED: &'static [char] = &['`', ' ', '\n', '\r'];

    /// Whether `block` holds an opening and a closing fence with at least one
    /// character between them.
    pub fn contains_fenced_region(block: &str) -> bool {
        let Some(open) = block.find(Self::BACKTICKS) else {
            return false;
        };
        let after_open = &block[open + Self::BACKTICKS.len()..];
        // Skip one character so the fenced region is never empty.
        match after_open.char_indices().nth(1) {
            Some((i, _)) => after_open[i..].contains(Self::BACKTICKS),
            None => false,
        }
    }

    /// The literal code inside a fenced block.
    ///
    /// Backticks, spaces and line breaks are trimmed from both ends; nothing
    /// inside is touched. Tabs are content.
    pub fn content(block: &str) -> &str {
        block.trim_matches(Self::TRIMMED)
    }
}
