//! Table styling by cell range.
//!
//! A [`TableStyle`] is an ordered list of commands, each scoped to a
//! rectangular [`CellRange`]. Coordinates are `(column, row)` and negative
//! values count from the end, so `(-1, -1)` is always the bottom-right cell.
//! When several commands touch the same attribute of a cell the last one wins.

use crate::dimension::Margins;
use crate::font::BuiltinFont;
use crate::text::{TextAlign, VerticalAlign};
use runbook_types::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRange {
    pub start: (i32, i32),
    pub end: (i32, i32),
}

impl CellRange {
    pub fn new(start: (i32, i32), end: (i32, i32)) -> Self {
        Self { start, end }
    }

    /// Every cell of the table.
    pub fn all() -> Self {
        Self::new((0, 0), (-1, -1))
    }

    /// A full row.
    pub fn row(row: i32) -> Self {
        Self::new((0, row), (-1, row))
    }

    /// A full column.
    pub fn column(col: i32) -> Self {
        Self::new((col, 0), (col, -1))
    }

    /// Resolves the range against concrete table dimensions into inclusive
    /// `(col_start, col_end, row_start, row_end)` bounds. Returns `None` when
    /// the range falls outside the table.
    pub fn bounds(&self, cols: usize, rows: usize) -> Option<(usize, usize, usize, usize)> {
        let c0 = normalize(self.start.0, cols)?;
        let c1 = normalize(self.end.0, cols)?;
        let r0 = normalize(self.start.1, rows)?;
        let r1 = normalize(self.end.1, rows)?;
        if c0 > c1 || r0 > r1 {
            return None;
        }
        Some((c0, c1, r0, r1))
    }

    pub fn contains(&self, col: usize, row: usize, cols: usize, rows: usize) -> bool {
        self.bounds(cols, rows)
            .is_some_and(|(c0, c1, r0, r1)| (c0..=c1).contains(&col) && (r0..=r1).contains(&row))
    }
}

fn normalize(index: i32, len: usize) -> Option<usize> {
    let len = len as i32;
    let resolved = if index < 0 { len + index } else { index };
    (0..len).contains(&resolved).then_some(resolved as usize)
}

/// A stroke drawn along cell edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSpec {
    pub width: f32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableStyleCommand {
    Background(Color),
    TextColor(Color),
    FontName(BuiltinFont),
    FontSize(f32),
    Leading(f32),
    Align(TextAlign),
    VAlign(VerticalAlign),
    TopPadding(f32),
    BottomPadding(f32),
    LeftPadding(f32),
    RightPadding(f32),
    /// Every edge of every cell in the range.
    Grid(LineSpec),
    /// The outline of the range.
    Box(LineSpec),
    /// The bottom edge of each row in the range.
    LineBelow(LineSpec),
}

impl TableStyleCommand {
    pub fn is_line(&self) -> bool {
        matches!(
            self,
            TableStyleCommand::Grid(_) | TableStyleCommand::Box(_) | TableStyleCommand::LineBelow(_)
        )
    }
}

/// The effective style of one cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CellStyle {
    pub background: Option<Color>,
    pub text_color: Color,
    pub font: BuiltinFont,
    pub font_size: f32,
    /// Explicit leading; `None` means 1.2 × font size.
    pub leading: Option<f32>,
    pub align: TextAlign,
    pub valign: VerticalAlign,
    pub padding: Margins,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            background: None,
            text_color: Color::BLACK,
            font: BuiltinFont::Helvetica,
            font_size: 10.0,
            leading: None,
            align: TextAlign::Left,
            valign: VerticalAlign::Bottom,
            padding: Margins {
                top: 3.0,
                right: 6.0,
                bottom: 3.0,
                left: 6.0,
            },
        }
    }
}

impl CellStyle {
    pub fn line_height(&self) -> f32 {
        self.leading.unwrap_or(self.font_size * 1.2)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableStyle {
    commands: Vec<(CellRange, TableStyleCommand)>,
}

impl TableStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, range: CellRange, command: TableStyleCommand) -> Self {
        self.commands.push((range, command));
        self
    }

    pub fn push(&mut self, range: CellRange, command: TableStyleCommand) {
        self.commands.push((range, command));
    }

    pub fn commands(&self) -> &[(CellRange, TableStyleCommand)] {
        &self.commands
    }

    /// Line-drawing commands, in declaration order.
    pub fn line_commands(&self) -> impl Iterator<Item = &(CellRange, TableStyleCommand)> {
        self.commands.iter().filter(|(_, cmd)| cmd.is_line())
    }

    /// Folds every command covering `(col, row)` into the cell's style.
    pub fn cell_style(&self, col: usize, row: usize, cols: usize, rows: usize) -> CellStyle {
        let mut style = CellStyle::default();
        for (range, command) in &self.commands {
            if !range.contains(col, row, cols, rows) {
                continue;
            }
            match command {
                TableStyleCommand::Background(c) => style.background = Some(*c),
                TableStyleCommand::TextColor(c) => style.text_color = *c,
                TableStyleCommand::FontName(f) => style.font = *f,
                TableStyleCommand::FontSize(s) => style.font_size = *s,
                TableStyleCommand::Leading(l) => style.leading = Some(*l),
                TableStyleCommand::Align(a) => style.align = *a,
                TableStyleCommand::VAlign(v) => style.valign = *v,
                TableStyleCommand::TopPadding(p) => style.padding.top = *p,
                TableStyleCommand::BottomPadding(p) => style.padding.bottom = *p,
                TableStyleCommand::LeftPadding(p) => style.padding.left = *p,
                TableStyleCommand::RightPadding(p) => style.padding.right = *p,
                TableStyleCommand::Grid(_)
                | TableStyleCommand::Box(_)
                | TableStyleCommand::LineBelow(_) => {}
            }
        }
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_indices_count_from_the_end() {
        let range = CellRange::new((0, 0), (0, -1));
        assert_eq!(range.bounds(2, 6), Some((0, 0, 0, 5)));
        assert!(range.contains(0, 5, 2, 6));
        assert!(!range.contains(1, 0, 2, 6));
    }

    #[test]
    fn out_of_range_is_empty() {
        assert_eq!(CellRange::row(4).bounds(3, 2), None);
        assert_eq!(CellRange::new((-5, 0), (0, 0)).bounds(3, 2), None);
    }

    #[test]
    fn later_commands_override_earlier_ones() {
        let style = TableStyle::new()
            .with(CellRange::all(), TableStyleCommand::FontSize(9.0))
            .with(CellRange::row(0), TableStyleCommand::FontName(BuiltinFont::HelveticaBold))
            .with(CellRange::row(0), TableStyleCommand::FontSize(12.0))
            .with(CellRange::all(), TableStyleCommand::BottomPadding(8.0));

        let header = style.cell_style(1, 0, 2, 3);
        assert_eq!(header.font, BuiltinFont::HelveticaBold);
        assert_eq!(header.font_size, 12.0);
        assert_eq!(header.padding.bottom, 8.0);

        let body = style.cell_style(1, 2, 2, 3);
        assert_eq!(body.font, BuiltinFont::Helvetica);
        assert_eq!(body.font_size, 9.0);
        assert_eq!(body.padding.top, 3.0);
    }

    #[test]
    fn line_commands_do_not_touch_cell_style() {
        let spec = LineSpec { width: 1.0, color: Color::BLACK };
        let style = TableStyle::new().with(CellRange::all(), TableStyleCommand::Grid(spec));
        assert_eq!(style.cell_style(0, 0, 1, 1), CellStyle::default());
        assert_eq!(style.line_commands().count(), 1);
    }
}
