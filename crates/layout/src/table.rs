//! Table layout: column sizing, cell wrapping and row-wise page splitting.

use crate::LayoutError;
use crate::elements::{LayoutElement, LineElement, PositionedElement, RectElement};
use crate::engine::{EPSILON, Paginator};
use crate::fonts;
use crate::text::{self, Line};
use log::{debug, warn};
use runbook_idf::TableBlock;
use runbook_style::{CellStyle, LineSpec, TableStyleCommand, TextAlign, VerticalAlign};

struct Cell {
    style: CellStyle,
    lines: Vec<Line>,
}

/// A table measured against the current frame.
struct Grid {
    /// Left edge of every column plus the right edge of the last one.
    col_x: Vec<f32>,
    heights: Vec<f32>,
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    fn width_of(&self, col: usize) -> f32 {
        self.col_x[col + 1] - self.col_x[col]
    }
}

pub(crate) fn layout_table(p: &mut Paginator<'_>, block: &TableBlock) -> Result<(), LayoutError> {
    let cols = block.column_count();
    let rows = block.row_count();
    if cols == 0 || rows == 0 {
        warn!("Skipping a table without cells");
        return Ok(());
    }

    let widths = column_widths(block, cols, p.frame.width)?;
    let total: f32 = widths.iter().sum();
    if total > p.frame.width + EPSILON {
        warn!(
            "Table is {:.1}pt wide but the frame is only {:.1}pt",
            total, p.frame.width
        );
    }
    let x0 = match block.h_align {
        _ if total >= p.frame.width => p.frame.x,
        TextAlign::Center => p.frame.x + (p.frame.width - total) / 2.0,
        TextAlign::Right => p.frame.right() - total,
        TextAlign::Left | TextAlign::Justify => p.frame.x,
    };
    let col_x: Vec<f32> = std::iter::once(x0)
        .chain(widths.iter().scan(x0, |x, w| {
            *x += w;
            Some(*x)
        }))
        .collect();

    let mut cells = Vec::with_capacity(rows);
    let mut heights = Vec::with_capacity(rows);
    for (r, row) in block.rows.iter().enumerate() {
        if row.len() < cols {
            warn!("Row {} has {} of {} cells, padding with blanks", r, row.len(), cols);
        }
        let mut measured = Vec::with_capacity(cols);
        let mut height: f32 = 0.0;
        for (c, width) in widths.iter().enumerate() {
            let style = block.style.cell_style(c, r, cols, rows);
            let content = row.get(c).map(String::as_str).unwrap_or("");
            let inner = (width - style.padding.horizontal()).max(1.0);
            let lines = text::wrap_paragraph(content, style.font, style.font_size, inner);
            height = height
                .max(lines.len() as f32 * style.line_height() + style.padding.vertical());
            measured.push(Cell { style, lines });
        }
        if height > p.frame.height + EPSILON {
            return Err(LayoutError::ElementTooLarge(height, p.frame.height));
        }
        cells.push(measured);
        heights.push(height);
    }

    let grid = Grid {
        col_x,
        heights,
        cells,
    };
    let header = block.repeat_rows.min(rows);

    let mut next = 0;
    while next < rows {
        let repeat = if next > 0 && next >= header { header } else { 0 };
        let mut fragment: Vec<usize> = (0..repeat).collect();
        let mut used: f32 = fragment.iter().map(|&r| grid.heights[r]).sum();
        let mut end = next;
        while end < rows && used + grid.heights[end] <= p.remaining() + EPSILON {
            used += grid.heights[end];
            fragment.push(end);
            end += 1;
        }

        // A first fragment holding nothing but header rows is pushed to the
        // next page as a whole.
        let header_only = next == 0 && end <= header && end < rows;
        if end == next || (header_only && !p.at_top) {
            if p.at_top {
                return Err(LayoutError::ElementTooLarge(
                    used + grid.heights[next],
                    p.frame.height,
                ));
            }
            p.new_page();
            continue;
        }

        draw_fragment(p, &grid, &fragment, block);
        p.advance(used);
        next = end;
        if next < rows {
            debug!("Splitting table at row {} of {}", next, rows);
            p.new_page();
        }
    }
    Ok(())
}

/// Explicit widths are used as given; columns without one share whatever the
/// frame has left equally.
fn column_widths(block: &TableBlock, cols: usize, frame_width: f32) -> Result<Vec<f32>, LayoutError> {
    if let Some(bad) = block.col_widths.iter().find(|w| !(w.is_finite() && **w > 0.0)) {
        return Err(LayoutError::InvalidTable(format!(
            "column widths must be positive, got {bad}"
        )));
    }
    let mut widths = block.col_widths.clone();
    let missing = cols - widths.len();
    if missing > 0 {
        let share = (frame_width - widths.iter().sum::<f32>()) / missing as f32;
        if share <= 0.0 {
            return Err(LayoutError::InvalidTable(format!(
                "no room left for {missing} columns without an explicit width"
            )));
        }
        widths.resize(cols, share);
    }
    Ok(widths)
}

fn draw_fragment(p: &mut Paginator<'_>, grid: &Grid, fragment: &[usize], block: &TableBlock) {
    let cols = grid.col_x.len() - 1;
    let rows = block.row_count();
    let row_tops: Vec<f32> = fragment
        .iter()
        .scan(p.cursor_y, |y, &r| {
            let top = *y;
            *y += grid.heights[r];
            Some(top)
        })
        .collect();

    // Backgrounds
    for (k, &r) in fragment.iter().enumerate() {
        for (c, cell) in grid.cells[r].iter().enumerate() {
            if let Some(fill) = cell.style.background {
                p.push(PositionedElement {
                    x: grid.col_x[c],
                    y: row_tops[k],
                    width: grid.width_of(c),
                    height: grid.heights[r],
                    element: LayoutElement::Rectangle(RectElement { fill }),
                });
            }
        }
    }

    // Rules
    for (range, command) in block.style.line_commands() {
        let Some((c0, c1, r0, r1)) = range.bounds(cols, rows) else {
            continue;
        };
        let visible: Vec<usize> = (0..fragment.len())
            .filter(|&k| (r0..=r1).contains(&fragment[k]))
            .collect();
        let (Some(&first), Some(&last)) = (visible.first(), visible.last()) else {
            continue;
        };
        let left = grid.col_x[c0];
        let right = grid.col_x[c1 + 1];
        let bottom_of = |k: usize| row_tops[k] + grid.heights[fragment[k]];

        match command {
            TableStyleCommand::Grid(spec) => {
                for (i, &k) in visible.iter().enumerate() {
                    push_line(p, left, row_tops[k], right, row_tops[k], *spec);
                    let next_is_adjacent = visible.get(i + 1).is_some_and(|&n| n == k + 1);
                    if !next_is_adjacent {
                        push_line(p, left, bottom_of(k), right, bottom_of(k), *spec);
                    }
                    for &x in &grid.col_x[c0..=c1 + 1] {
                        push_line(p, x, row_tops[k], x, bottom_of(k), *spec);
                    }
                }
            }
            TableStyleCommand::Box(spec) => {
                let (top, bottom) = (row_tops[first], bottom_of(last));
                push_line(p, left, top, right, top, *spec);
                push_line(p, left, bottom, right, bottom, *spec);
                push_line(p, left, top, left, bottom, *spec);
                push_line(p, right, top, right, bottom, *spec);
            }
            TableStyleCommand::LineBelow(spec) => {
                for &k in &visible {
                    push_line(p, left, bottom_of(k), right, bottom_of(k), *spec);
                }
            }
            _ => {}
        }
    }

    // Cell text
    for (k, &r) in fragment.iter().enumerate() {
        for (c, cell) in grid.cells[r].iter().enumerate() {
            let style = &cell.style;
            let pad = style.padding;
            let line_height = style.line_height();
            let content_height = cell.lines.len() as f32 * line_height;
            let top = row_tops[k];
            let first_line_top = match style.valign {
                VerticalAlign::Top => top + pad.top,
                VerticalAlign::Bottom => top + grid.heights[r] - pad.bottom - content_height,
                VerticalAlign::Middle => {
                    top + pad.top + (grid.heights[r] - pad.vertical() - content_height) / 2.0
                }
            };
            let inner = grid.width_of(c) - pad.horizontal();
            let ascent = fonts::ascent(style.font) * style.font_size;
            for (i, line) in cell.lines.iter().enumerate() {
                let (offset, word_spacing) = text::align_line(line, style.align, inner);
                p.place_line(
                    &line.text,
                    grid.col_x[c] + pad.left + offset,
                    first_line_top + i as f32 * line_height + ascent,
                    style.font,
                    style.font_size,
                    style.text_color,
                    word_spacing,
                );
            }
        }
    }
}

fn push_line(p: &mut Paginator<'_>, x1: f32, y1: f32, x2: f32, y2: f32, stroke: LineSpec) {
    p.push(PositionedElement {
        x: x1,
        y: y1,
        width: x2 - x1,
        height: y2 - y1,
        element: LayoutElement::Line(LineElement { x2, y2, stroke }),
    });
}
