/// Bold and italic delimiters.
///
/// `BOLD` must be consumed before `ITALIC`, otherwise every `**` would be read
/// as two empty italic markers.
pub struct Emphasis;

impl Emphasis {
    pub const BOLD: &'static str = "**";
    pub const ITALIC: &'static str = "*";
}
