use std::sync::OnceLock;

use regex::Regex;

/// Link inline type: `[label](url)` not preceded by `!`.
///
/// Label and URL never cross a line break.
pub struct Link;

impl Link {
    /// Marker whose presence right before `[` turns a link into an image.
    pub const IMAGE_BANG: char = '!';

    pub fn regex() -> &'static Regex {
        static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
        LINK_REGEX.get_or_init(|| {
            Regex::new(r"\[([^\[\]\n]*)\]\(([^()\n]*)\)").expect("Invalid link regex")
        })
    }
}

/// Image inline type: `![alt](url)`.
pub struct Image;

impl Image {
    pub fn regex() -> &'static Regex {
        static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
        IMAGE_REGEX.get_or_init(|| {
            Regex::new(r"!\[([^\[\]\n]*)\]\(([^()\n]*)\)").expect("Invalid image regex")
        })
    }
}
