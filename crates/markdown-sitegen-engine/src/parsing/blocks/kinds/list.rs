/// Tag of a single list item, shared by both list kinds.
pub const ITEM_TAG: &str = "li";

/// Unordered list block type: every line starts with `* ` or `- `.
pub struct UnorderedList;

impl UnorderedList {
    pub const BULLETS: [char; 2] = ['*', '-'];
    pub const TAG: &'static str = "ul";

    /// Returns the item text after the bullet and its space.
    pub fn strip_marker(line: &str) -> Option<&str> {
        line.strip_prefix(Self::BULLETS)?.strip_prefix(' ')
    }
}

/// Ordered list block type: every line starts with `N. `, numbered from 1
/// with no gaps.
pub struct OrderedList;

impl OrderedList {
    pub const DOT: char = '.';
    pub const TAG: &'static str = "ol";

    /// Parses a line into its item number and the text after `N. `.
    pub fn parse_item(line: &str) -> Option<(usize, &str)> {
        let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
        let digits = &line[..line.len() - rest.len()];
        if digits.is_empty() {
            return None;
        }
        let text = rest.strip_prefix(Self::DOT)?.strip_prefix(' ')?;
        let number = digits.parse().ok()?;
        Some((number, text))
    }

    /// Whether every line is an item and the numbers run 1, 2, 3, ...
    ///
    /// An empty sequence of lines is not a list.
    pub fn is_sequential<'a>(lines: impl IntoIterator<Item = &'a str>) -> bool {
        let mut count = 0;
        for line in lines {
            match Self::parse_item(line) {
                Some((n, _)) if n == count + 1 => count += 1,
                _ => return false,
            }
        }
        count > 0
    }
}
