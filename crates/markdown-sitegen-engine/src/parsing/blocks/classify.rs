use super::kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList};
use super::types::BlockKind;

/// Classifies whole blocks into a [`BlockKind`].
///
/// Rules are evaluated in strict precedence order and the first one that
/// fully validates wins: heading, code block, quote, unordered list, ordered
/// list, then paragraph as the fallback. Rules that apply to "every line"
/// demote the whole block to a paragraph if a single line fails.
pub struct MarkdownBlockClassifier;

impl MarkdownBlockClassifier {
    pub fn classify(&self, block: &str) -> BlockKind {
        if let Some(level) = heading_level(block) {
            return BlockKind::Heading { level };
        }
        if CodeFence::contains_fenced_region(block) {
            return BlockKind::CodeBlock;
        }
        if every_line(block, BlockQuote::is_quote_line) {
            return BlockKind::Quote;
        }
        if every_line(block, |line| UnorderedList::strip_marker(line).is_some()) {
            return BlockKind::UnorderedList;
        }
        if OrderedList::is_sequential(block.lines()) {
            return BlockKind::OrderedList;
        }
        BlockKind::Paragraph
    }
}

/// Classifies a single block with the default classifier.
pub fn classify(block: &str) -> BlockKind {
    MarkdownBlockClassifier.classify(block)
}

/// A heading must be the block's only line; a heading-shaped first line
/// followed by more text is a paragraph.
fn heading_level(block: &str) -> Option<u8> {
    if block.contains('\n') {
        return None;
    }
    Heading::parse(block).map(|(level, _)| level)
}

fn every_line(block: &str, pred: impl Fn(&str) -> bool) -> bool {
    let mut lines = block.lines().peekable();
    lines.peek().is_some() && lines.all(pred)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# heading", BlockKind::Heading { level: 1 })]
    #[case("###### heading", BlockKind::Heading { level: 6 })]
    #[case("####### heading", BlockKind::Paragraph)]
    #[case("# heading\nwith a second line", BlockKind::Paragraph)]
    #[case("```\ncode\n```", BlockKind::CodeBlock)]
    #[case("> quote\n> more quote", BlockKind::Quote)]
    #[case("> quote\nnot quote", BlockKind::Paragraph)]
    #[case("* list\n- items", BlockKind::UnorderedList)]
    #[case("- list\n-items", BlockKind::Paragraph)]
    #[case("1. one\n2. two\n3. three", BlockKind::OrderedList)]
    #[case("1. one\n2. two\n8. three", BlockKind::Paragraph)]
    #[case("1. one\n2. two\n3 three", BlockKind::Paragraph)]
    #[case("just text", BlockKind::Paragraph)]
    fn classify_blocks(#[case] block: &str, #[case] expected: BlockKind) {
        assert_eq!(classify(block), expected);
    }

    #[test]
    fn heading_beats_code_fence() {
        assert_eq!(classify("# ```a``` "), BlockKind::Heading { level: 1 });
    }

    #[test]
    fn code_fence_beats_quote() {
        assert_eq!(classify("> ```\n> x\n> ```"), BlockKind::CodeBlock);
    }

    #[test]
    fn quote_beats_list() {
        assert_eq!(classify(">- a\n>- b"), BlockKind::Quote);
    }
}
