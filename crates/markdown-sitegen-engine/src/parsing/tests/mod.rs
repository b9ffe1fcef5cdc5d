//! Integration tests for the parsing module.
//!
//! Fixtures (.md) live in `fixtures/` and are checked against the block
//! kinds they are expected to produce.


use crate::parsing::{
    blocks::BlockKind,
    extract_title,
    inline::{SpanKind, text_to_spans},
    parse_document,
};

// Fixture-based tests

#[test]
fn fixture_every_block_kind() {
    assert_fixture(
        "every_block_kind",
        &[
            BlockKind::Heading { level: 1 },
            BlockKind::Paragraph,
            BlockKind::Heading { level: 2 },
            BlockKind::UnorderedList,
            BlockKind::OrderedList,
            BlockKind::Quote,
            BlockKind::CodeBlock,
        ],
    );
}

#[test]
fn fixture_demoted_blocks() {
    assert_fixture(
        "demoted_blocks",
        &[
            BlockKind::Paragraph,
            BlockKind::Paragraph,
            BlockKind::Paragraph,
            BlockKind::Paragraph,
        ],
    );
}

fn assert_fixture(name: &str, expected: &[BlockKind]) {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();

    let doc = parse_document(&md).unwrap();
    invariants::check(&doc.blocks);

    let kinds: Vec<BlockKind> = doc.blocks.iter().map(|b| b.kind).collect();
    assert_eq!(kinds, expected, "block kinds for fixture {name}");
}

// Invariant tests

/// Code fences are raw zones: nothing inside them is tokenized.
#[test]
fn code_blocks_are_not_tokenized() {
    let doc = parse_document("```\nunbalanced ` and * markers\n```").unwrap();
    assert_eq!(doc.blocks.len(), 1);
    assert_eq!(doc.blocks[0].kind, BlockKind::CodeBlock);
}

/// Every paragraph in a well-formed document tokenizes.
#[test]
fn paragraphs_tokenize() {
    let md = "Some **bold** text\n\nA [link](https://example.com) here";
    let doc = parse_document(md).unwrap();
    for block in &doc.blocks {
        let spans = text_to_spans(block.text).unwrap();
        assert!(!spans.is_empty());
    }
}

/// Typed spans never come back as `Text` from the tokenizer.
#[test]
fn tokenizer_keeps_typed_spans() {
    let spans = text_to_spans("**`still bold`**").unwrap();
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].kind(), SpanKind::Bold);
}

/// The title comes from the fixture's first heading.
#[test]
fn fixture_title() {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/every_block_kind.md")).unwrap();
    assert_eq!(extract_title(&md).unwrap(), "Tolkien Fan Club");
}

/// Empty documents have no blocks.
#[test]
fn empty_document() {
    assert!(parse_document("").is_err());
}

/// Blank lines don't produce blocks.
#[test]
fn blank_lines_only() {
    assert!(parse_document("\n\n\n").is_err());
}
