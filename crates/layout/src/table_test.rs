#![cfg(test)]

use crate::{LayoutConfig, LayoutElement, LayoutEngine, LayoutError, PositionedElement};
use runbook_idf::{Flowable, Story, TableBlock};
use runbook_style::{
    BuiltinFont, CellRange, LineSpec, Margins, PageLayout, PageSize, Stylesheet, TableStyle,
    TableStyleCommand, TextAlign, inch,
};
use runbook_types::Color;

fn engine() -> LayoutEngine {
    let page = PageLayout {
        size: PageSize::Letter,
        margins: Margins::symmetric(inch(0.5), inch(1.0)),
    };
    LayoutEngine::new(Stylesheet::sample(), page, LayoutConfig::default())
}

fn block(rows: &[&[&str]]) -> TableBlock {
    TableBlock {
        rows: rows
            .iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect(),
        col_widths: vec![],
        style: TableStyle::new(),
        h_align: TextAlign::Center,
        repeat_rows: 0,
    }
}

fn story(table: TableBlock) -> Story {
    [Flowable::Table(table)].into_iter().collect()
}

fn text_elements(elements: &[PositionedElement]) -> Vec<&PositionedElement> {
    elements
        .iter()
        .filter(|el| matches!(el.element, LayoutElement::Text(_)))
        .collect()
}

#[test]
fn test_columns_share_frame_equally_by_default() {
    let doc = engine().paginate(&story(block(&[&["a", "b"]]))).unwrap();
    let texts = text_elements(&doc.pages[0].elements);
    assert_eq!(texts.len(), 2);
    // 456pt frame, two 228pt columns, 6pt left padding.
    assert_eq!(texts[0].x, 84.0);
    assert_eq!(texts[1].x, 84.0 + 228.0);
}

#[test]
fn test_explicit_widths_are_centered() {
    let mut table = block(&[&["a", "b"]]);
    table.col_widths = vec![100.0, 200.0];
    let doc = engine().paginate(&story(table)).unwrap();
    let texts = text_elements(&doc.pages[0].elements);
    assert_eq!(texts[0].x, 78.0 + 78.0 + 6.0);
    assert_eq!(texts[1].x, 78.0 + 78.0 + 100.0 + 6.0);
}

#[test]
fn test_left_aligned_table_starts_at_frame_edge() {
    let mut table = block(&[&["a"]]);
    table.col_widths = vec![100.0];
    table.h_align = TextAlign::Left;
    let doc = engine().paginate(&story(table)).unwrap();
    assert_eq!(text_elements(&doc.pages[0].elements)[0].x, 84.0);
}

#[test]
fn test_cell_text_sits_at_bottom_by_default() {
    let doc = engine()
        .paginate(&story(block(&[&["one line", "two\nlines"]])))
        .unwrap();
    let texts = text_elements(&doc.pages[0].elements);
    // Row height: 2 lines * 12pt + 3pt + 3pt padding.
    let row_bottom = 42.0 + 30.0;
    let single = texts[0];
    assert!((single.y - (row_bottom - 3.0 - 12.0 + 7.18)).abs() < 0.01);
    // The last line of the taller cell shares the baseline.
    assert!((texts[2].y - single.y).abs() < 0.01);
}

#[test]
fn test_split_repeats_header_rows() {
    let mut rows: Vec<Vec<String>> = vec![vec!["Component".into(), "Purpose".into()]];
    rows.extend((0..80).map(|i| vec![format!("row {i}"), "text".into()]));
    let table = TableBlock {
        rows,
        col_widths: vec![],
        style: TableStyle::new(),
        h_align: TextAlign::Center,
        repeat_rows: 1,
    };
    let doc = engine().paginate(&story(table)).unwrap();
    // 18pt rows, 39 per page.
    assert_eq!(doc.page_count(), 3);
    for page in &doc.pages {
        assert!(page.text().starts_with("Component Purpose"), "{}", page.text());
    }
    assert!(doc.pages[1].text().contains("row 38"));
    assert!(!doc.pages[1].text().contains("row 37\n"));
}

#[test]
fn test_row_taller_than_frame_is_rejected() {
    let tall = vec!["x"; 80].join("\n");
    let table = block(&[&[tall.as_str()]]);
    let err = engine().paginate(&story(table)).unwrap_err();
    assert!(matches!(err, LayoutError::ElementTooLarge(_, f) if f == 708.0));
}

#[test]
fn test_grid_draws_shared_edges_once() {
    let spec = LineSpec {
        width: 1.0,
        color: Color::LIGHT_GREY,
    };
    let mut table = block(&[&["a", "b"], &["c", "d"]]);
    table.style = TableStyle::new().with(CellRange::all(), TableStyleCommand::Grid(spec));
    let doc = engine().paginate(&story(table)).unwrap();
    let lines: Vec<_> = doc.pages[0]
        .elements
        .iter()
        .filter(|el| matches!(el.element, LayoutElement::Line(_)))
        .collect();
    // Three horizontal rules and three vertical segments per row.
    assert_eq!(lines.len(), 3 + 2 * 3);
}

#[test]
fn test_header_background_and_font() {
    let header = Color::rgb(0x2E, 0x50, 0x90);
    let mut table = block(&[&["Component", "Purpose"], &["VPC", "Network isolation"]]);
    table.style = TableStyle::new()
        .with(CellRange::row(0), TableStyleCommand::Background(header))
        .with(CellRange::row(0), TableStyleCommand::TextColor(Color::WHITE_SMOKE))
        .with(
            CellRange::row(0),
            TableStyleCommand::FontName(BuiltinFont::HelveticaBold),
        );
    let doc = engine().paginate(&story(table)).unwrap();
    let elements = &doc.pages[0].elements;
    let fills: Vec<_> = elements
        .iter()
        .filter_map(|el| match &el.element {
            LayoutElement::Rectangle(r) => Some(r.fill),
            _ => None,
        })
        .collect();
    assert_eq!(fills, vec![header, header]);
    let fonts: Vec<_> = elements
        .iter()
        .filter_map(|el| match &el.element {
            LayoutElement::Text(t) => Some((t.font, t.color)),
            _ => None,
        })
        .collect();
    assert_eq!(fonts[0], (BuiltinFont::HelveticaBold, Color::WHITE_SMOKE));
    assert_eq!(fonts[2], (BuiltinFont::Helvetica, Color::BLACK));
}

#[test]
fn test_non_positive_width_is_invalid() {
    let mut table = block(&[&["a", "b"]]);
    table.col_widths = vec![100.0, 0.0];
    let err = engine().paginate(&story(table)).unwrap_err();
    assert!(matches!(err, LayoutError::InvalidTable(_)));
}

#[test]
fn test_empty_table_is_skipped() {
    let doc = engine().paginate(&story(block(&[]))).unwrap();
    assert_eq!(doc.page_count(), 1);
    assert!(doc.pages[0].elements.is_empty());
}

#[test]
fn test_short_row_is_padded_with_blank_cells() {
    let mut table = block(&[&["a", "b", "c"], &["d"]]);
    let spec = LineSpec {
        width: 0.5,
        color: Color::BLACK,
    };
    table.style = TableStyle::new().with(CellRange::all(), TableStyleCommand::Grid(spec));
    let doc = engine().paginate(&story(table)).unwrap();
    let elements = &doc.pages[0].elements;

    let texts = text_elements(elements);
    assert_eq!(texts.len(), 4);
    assert_eq!(texts[3].x, texts[0].x);
    // Both rows get a full set of column rules: 2 tops, 1 bottom, 2 x 4 verticals.
    let lines = elements
        .iter()
        .filter(|el| matches!(el.element, LayoutElement::Line(_)))
        .count();
    assert_eq!(lines, 11);
}
