//! Integration tests for draft rendering.

use papersmith::model::Block;
use papersmith::render::to_text;
use papersmith::{
    configure, Alignment, DocumentRenderer, FormattingConfig, LineSpacing, RenderOptions,
    RenderWarning, RunKind, StyleName, StyleSet, StyledRun,
};

fn renderer() -> DocumentRenderer {
    DocumentRenderer::new(StyleSet::default())
}

fn texts(blocks: &[Block]) -> Vec<String> {
    blocks
        .iter()
        .map(|b| match b {
            Block::Paragraph(p) => p.plain_text(),
            Block::Table(t) => t.plain_text(),
            Block::PageBreak => "<break>".to_string(),
        })
        .collect()
}

#[test]
fn test_render_is_total() {
    let inputs = [
        "",
        "\n\n\n",
        "####TITLE PAGE####",
        "####END TITLE PAGE####",
        "#",
        "# ",
        "####",
        "|",
        "||",
        "|---|",
        "**",
        "*",
        "***",
        "- ",
        "1.",
        "\t|a|b\n|c|\n",
        "ünïcödé **wörds** *ñ*",
    ];

    let r = renderer();
    for input in inputs {
        let result = r.render_with_stats(input);
        // every document carries the page setup of its style set
        assert_eq!(result.document.page_setup(), &StyleSet::default().page_setup);
    }
}

#[test]
fn test_render_is_idempotent() {
    let draft = "####TITLE PAGE####\n# Paper\nAda\n####END TITLE PAGE####\n\
                 # Intro\nSome **bold** text.\n- one\n2. two\n|A|B|\n|-|-|\n|1|\n";

    let r = renderer();
    let first = r.render_with_stats(draft);
    let second = r.render_with_stats(draft);

    assert_eq!(first.document, second.document);
    assert_eq!(first.stats, second.stats);
}

#[test]
fn test_heading_round_trip() {
    let doc = renderer().render("# Title");

    assert_eq!(doc.block_count(), 1);
    let heading = doc.blocks[0].as_paragraph().unwrap();
    assert_eq!(heading.style, StyleName::Heading1Custom);
    assert_eq!(heading.plain_text(), "Title");
}

#[test]
fn test_heading_levels() {
    let doc = renderer().render("# One\n## Two\n### Three\n#### Four");
    let styles: Vec<StyleName> = doc.paragraphs().map(|p| p.style).collect();

    assert_eq!(
        styles,
        vec![
            StyleName::Heading1Custom,
            StyleName::Heading2Custom,
            StyleName::Heading3Custom,
            StyleName::Normal,
        ]
    );
}

#[test]
fn test_inline_markup_runs() {
    let doc = renderer().render("a **b** c *d* e");
    let p = doc.paragraphs().next().unwrap();

    assert_eq!(p.style, StyleName::Normal);
    assert_eq!(
        p.runs,
        vec![
            StyledRun::plain("a "),
            StyledRun::bold("b"),
            StyledRun::plain(" c "),
            StyledRun::italic("d"),
            StyledRun::plain(" e"),
        ]
    );
}

#[test]
fn test_table_divider_dropped() {
    let doc = renderer().render("|A|B|\n|-|-|\n|1|2|");

    assert_eq!(doc.block_count(), 1);
    let table = doc.blocks[0].as_table().unwrap();
    assert_eq!(table.style, StyleName::TableGrid);
    assert_eq!(table.to_strings(), vec![vec!["A", "B"], vec!["1", "2"]]);
}

#[test]
fn test_title_page() {
    let doc = renderer()
        .render("####TITLE PAGE####\n# My Paper\nJohn Doe\n####END TITLE PAGE####\nBody");

    assert_eq!(texts(&doc.blocks), vec!["My Paper", "John Doe", "<break>", "Body"]);

    let title = doc.blocks[0].as_paragraph().unwrap();
    assert_eq!(title.style, StyleName::TitleStyle);
    assert_eq!(title.alignment, Some(Alignment::Center));

    let author = doc.blocks[1].as_paragraph().unwrap();
    assert_eq!(author.style, StyleName::Normal);
    assert_eq!(author.alignment, Some(Alignment::Center));

    let body = doc.blocks[3].as_paragraph().unwrap();
    assert_eq!(body.style, StyleName::Normal);
    assert_eq!(body.alignment, None);

    assert_eq!(doc.metadata.title.as_deref(), Some("My Paper"));
}

#[test]
fn test_unterminated_title_page() {
    let result = renderer().render_with_stats("####TITLE PAGE####\n# Lost\nstill title");

    assert_eq!(texts(&result.document.blocks), vec!["Lost", "still title", "<break>"]);
    assert_eq!(result.stats.warnings, vec![RenderWarning::UnterminatedTitlePage]);
}

#[test]
fn test_bullet_normalization() {
    let doc = renderer().render("1. item\n- item");
    let bullets: Vec<_> = doc.paragraphs().collect();

    assert_eq!(bullets.len(), 2);
    for bullet in bullets {
        assert_eq!(bullet.style, StyleName::ListBullet);
        assert_eq!(bullet.plain_text(), "item");
    }
}

#[test]
fn test_bullet_inline_markup() {
    let doc = renderer().render("- a **key** point");
    let bullet = doc.paragraphs().next().unwrap();

    assert_eq!(bullet.runs[1].kind, RunKind::Bold);
    assert_eq!(bullet.runs[1].text, "key");
}

#[test]
fn test_line_spacing_from_config() {
    let config: FormattingConfig =
        serde_json::from_str(r#"{"line_spacing": "1.5 lines"}"#).unwrap();
    assert_eq!(config.line_spacing, LineSpacing::OneHalf);

    let styles = configure(&config).unwrap();
    for name in [
        StyleName::Normal,
        StyleName::TitleStyle,
        StyleName::Heading1Custom,
        StyleName::Heading2Custom,
        StyleName::Heading3Custom,
    ] {
        assert_eq!(styles.get(name).unwrap().line_spacing_pt, Some(18.0));
    }
}

#[test]
fn test_ragged_table_is_padded_and_truncated() {
    let result = renderer().render_with_stats("|a|b|c|\n|1|\n|x|y|z|w|");
    let table = result.document.blocks[0].as_table().unwrap();

    assert_eq!(
        table.to_strings(),
        vec![vec!["a", "b", "c"], vec!["1", "", ""], vec!["x", "y", "z"]]
    );
    assert_eq!(result.stats.warnings.len(), 2);
    assert_eq!(
        result.stats.warnings[0],
        RenderWarning::MalformedTable {
            table: 0,
            row: 1,
            expected: 3,
            found: 1,
        }
    );
}

#[test]
fn test_unrecognized_lines_fall_through() {
    let doc = renderer().render("#NoSpace\n-nospace\n| open\nplain");
    let styles: Vec<StyleName> = doc.paragraphs().map(|p| p.style).collect();

    assert_eq!(styles, vec![StyleName::Normal; 4]);
    assert_eq!(doc.tables().count(), 0);
}

#[test]
fn test_render_options() {
    let r = DocumentRenderer::with_options(
        StyleSet::default(),
        RenderOptions::new()
            .with_author("Ada Lovelace")
            .with_page_numbers(false),
    );
    let doc = r.render("Body");

    assert_eq!(doc.metadata.author.as_deref(), Some("Ada Lovelace"));
    assert!(doc.footer.is_none());
    assert!(renderer().render("Body").footer.is_some());
}

#[test]
fn test_plain_text_output() {
    let doc = renderer().render("# Intro\n\nHello *there*\n- item\n|a|b|");
    assert_eq!(to_text(&doc), "Intro\n\nHello there\n\n- item\n\na\tb");
}
