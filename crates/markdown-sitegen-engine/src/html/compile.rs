use crate::error::ConvertError;
use crate::parsing::{
    blocks::{
        Block, BlockKind,
        kinds::{
            BlockQuote, CodeFence, Heading, OrderedList, Paragraph, UnorderedList, list::ITEM_TAG,
        },
    },
    inline::{Span, SpanKind, text_to_spans},
    parse_document,
};

use super::node::Node;

/// Tag of the container wrapping a whole document.
pub const ROOT_TAG: &str = "div";

/// Converts one span into a leaf node.
///
/// Exhaustive over [`SpanKind`]: links become `a` with `href`, images become
/// a void `img` with `src` then `alt`.
pub fn span_to_node(span: &Span) -> Node {
    let text = span.text_content();
    let url = span.url().unwrap_or_default();
    match span.kind() {
        SpanKind::Text => Node::text(text),
        SpanKind::Bold => Node::leaf("b", text),
        SpanKind::Italic => Node::leaf("i", text),
        SpanKind::Code => Node::leaf("code", text),
        SpanKind::Link => Node::leaf("a", text).with_attribute("href", url),
        SpanKind::Image => Node::leaf("img", "")
            .with_attribute("src", url)
            .with_attribute("alt", text),
    }
}

/// Tokenizes inline text and converts every span to a node.
fn inline_children(text: &str) -> Result<Vec<Node>, ConvertError> {
    Ok(text_to_spans(text)?.iter().map(span_to_node).collect())
}

/// Builds the subtree for one classified block.
///
/// # Errors
/// Propagates inline tokenizer errors ([`ConvertError::MalformedInline`],
/// [`ConvertError::UrlRequired`]).
pub fn block_to_node(block: &Block<'_>) -> Result<Node, ConvertError> {
    let text = block.text;
    match block.kind {
        BlockKind::Heading { level } => {
            let content = Heading::parse(text).map_or(text, |(_, content)| content);
            Ok(Node::parent(Heading::tag(level), vec![Node::text(content)]))
        }
        BlockKind::CodeBlock => Ok(Node::parent(
            CodeFence::PRE_TAG,
            vec![Node::leaf(CodeFence::CODE_TAG, CodeFence::content(text))],
        )),
        BlockKind::Quote => {
            let joined = text
                .lines()
                .map(BlockQuote::strip_prefix)
                .collect::<Vec<_>>()
                .join("\n");
            Ok(Node::parent(BlockQuote::TAG, inline_children(&joined)?))
        }
        BlockKind::UnorderedList => list_node(UnorderedList::TAG, text, |line| {
            UnorderedList::strip_marker(line).unwrap_or(line)
        }),
        BlockKind::OrderedList => list_node(OrderedList::TAG, text, |line| {
            OrderedList::parse_item(line).map_or(line, |(_, item)| item)
        }),
        BlockKind::Paragraph => Ok(Node::parent(Paragraph::TAG, inline_children(text)?)),
    }
}

fn list_node(
    tag: &str,
    text: &str,
    strip_marker: impl Fn(&str) -> &str,
) -> Result<Node, ConvertError> {
    let items = text
        .lines()
        .map(|line| {
            inline_children(strip_marker(line))
                .map(|children| Node::parent(ITEM_TAG, children))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Node::parent(tag, items))
}

/// Parses a whole document into a single `div` rooted render tree.
///
/// # Errors
/// [`ConvertError::EmptyDocument`] for a document with no blocks, or any
/// inline error from a block.
pub fn markdown_to_node(document: &str) -> Result<Node, ConvertError> {
    let doc = parse_document(document)?;

    let children = doc
        .blocks
        .iter()
        .map(|block| {
            log::trace!("compiling {:?} block", block.kind);
            block_to_node(block)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Node::parent(ROOT_TAG, children))
}
