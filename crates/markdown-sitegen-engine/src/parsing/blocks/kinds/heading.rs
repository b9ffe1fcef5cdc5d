/// ATX heading block type (`# Title` .. `###### Title`).
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: u8 = 6;

    /// Parses a heading line into `(level, text)`.
    ///
    /// The line must start with 1 to 6 `#`, then one space, then text that
    /// does not start with another `#`. The text is returned as written,
    /// a trailing `#` run included.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let rest = line.trim_start_matches(Self::MARKER);
        let level = line.len() - rest.len();
        if level == 0 || level > usize::from(Self::MAX_LEVEL) {
            return None;
        }
        let text = rest.strip_prefix(' ')?;
        if text.starts_with(Self::MARKER) {
            return None;
        }
        let level = u8::try_from(level).ok()?;
        Some((level, text))
    }

    /// HTML tag for a heading level (`h1`..`h6`).
    pub fn tag(level: u8) -> String {
        format!("h{level}")
    }
}
