use linemark::{parse, parse_str, render, to_html, Block, Inline, ListItem, RenderOptions};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn heading_level_one() {
    let doc = parse(["# Title"]);
    assert_eq!(doc.len(), 1);
    assert!(matches!(doc.blocks()[0], Block::Heading { level: 1, .. }));
    assert_eq!(doc.blocks()[0].text(), "Title");
}

#[test]
fn heading_level_two() {
    let doc = parse(["## Title"]);
    assert_eq!(doc.len(), 1);
    assert!(matches!(doc.blocks()[0], Block::Heading { level: 2, .. }));
    assert_eq!(doc.blocks()[0].text(), "Title");
}

#[test]
fn bold_and_italic_spans_in_order() {
    let doc = parse(["**bold** and *italic*"]);
    assert_eq!(
        doc.blocks(),
        &[Block::Paragraph(vec![
            Inline::strong("bold"),
            Inline::text(" and "),
            Inline::emphasis("italic"),
        ])]
    );
}

#[test]
fn numbered_run_collapses_into_one_list() {
    let doc = parse(["1. a", "2. b", "3. c"]);
    assert_eq!(
        doc.blocks(),
        &[Block::List {
            ordered: true,
            items: vec![
                ListItem::from_text("a"),
                ListItem::from_text("b"),
                ListItem::from_text("c"),
            ],
        }]
    );
}

#[test]
fn blank_line_splits_lists() {
    let doc = parse_str("* a\n\n* b");
    assert_eq!(doc.len(), 2);
}

#[test]
fn fenced_code_is_verbatim() {
    let doc = parse(["```", "code line", "```"]);
    assert_eq!(
        doc.blocks(),
        &[Block::CodeBlock {
            code: "code line".to_string(),
        }]
    );

    let doc = parse(["```", "**not bold**", "# not heading", "```"]);
    assert_eq!(
        doc.blocks(),
        &[Block::CodeBlock {
            code: "**not bold**\n# not heading".to_string(),
        }]
    );
}

#[test]
fn blank_line_separates_paragraphs() {
    let doc = parse(["first", "", "second"]);
    assert_eq!(
        doc.blocks(),
        &[
            Block::Paragraph(vec![Inline::text("first")]),
            Block::Paragraph(vec![Inline::text("second")]),
        ]
    );
}

#[test]
fn consecutive_lines_are_separate_paragraphs() {
    let doc = parse(["first", "second"]);
    assert_eq!(doc.len(), 2);
}

#[rstest]
#[case::empty("")]
#[case::only_blanks("\n   \n\t\n")]
fn blank_input_yields_empty_document(#[case] input: &str) {
    assert!(parse_str(input).is_empty());
}

#[test]
fn italic_line_wins_over_bulleted_list() {
    let doc = parse(["*word*", "* item"]);
    assert_eq!(
        doc.blocks(),
        &[
            Block::Paragraph(vec![Inline::emphasis("word")]),
            Block::List {
                ordered: false,
                items: vec![ListItem::from_text("item")],
            },
        ]
    );
}

#[test]
fn bold_only_line_is_single_strong_paragraph() {
    let doc = parse(["**bold words**"]);
    assert_eq!(
        doc.blocks(),
        &[Block::Paragraph(vec![Inline::strong("bold words")])]
    );
}

#[test]
fn empty_bold_line_yields_empty_strong() {
    // Whole-line check accepts zero words, unlike span resolution mid-line
    let doc = parse(["****"]);
    assert_eq!(doc.blocks(), &[Block::Paragraph(vec![Inline::strong("")])]);
    assert_eq!(
        render(&doc, &RenderOptions::default()),
        "<p><strong></strong></p>"
    );

    let doc = parse(["a **** b"]);
    assert_eq!(doc.blocks(), &[Block::Paragraph(vec![Inline::text("a **** b")])]);
}

#[test]
fn quote_wins_over_heading() {
    let doc = parse(["> # not a heading"]);
    assert_eq!(
        doc.blocks(),
        &[Block::BlockQuote(vec![Block::Paragraph(vec![Inline::text(
            "# not a heading"
        )])])]
    );
}

#[test]
fn mixed_document() {
    let input = "\
# Notes
Some *light* text.

1. one
2. two
* dot
---
`x = 1`
> quoted
```
raw *text*
```
## End";

    let html = to_html(input, &RenderOptions::default());

    assert_eq!(
        html,
        "<h1>Notes</h1>\
         <p>Some <em>light</em> text.</p>\
         <ol><li>one</li><li>two</li></ol>\
         <ul><li>dot</li></ul>\
         <hr>\
         <code>x = 1</code>\
         <blockquote><p>quoted</p></blockquote>\
         <pre><code>raw *text*</code></pre>\
         <h2>End</h2>"
    );
}

#[test]
fn parsing_is_deterministic() {
    let input = "# A\n* b\n* c\n\n**d** e *f*\n```\ng\n";

    let first = parse_str(input);
    let second = parse_str(input);

    assert_eq!(first, second);
    assert_eq!(
        render(&first, &RenderOptions::default()),
        render(&second, &RenderOptions::default())
    );
}

#[test]
fn terminates_on_awkward_input() {
    let input = "```\n*\n**\n`\n1.\n>\n#\n##\n---\n";
    let doc = parse_str(input);
    // Everything after the opening fence is code
    assert_eq!(
        doc.blocks(),
        &[Block::CodeBlock {
            code: "*\n**\n`\n1.\n>\n#\n##\n---".to_string(),
        }]
    );

    let doc = parse_str("*\n**\n`\n1.\n>\n#\n##\n");
    assert_eq!(doc.len(), 7);
}
