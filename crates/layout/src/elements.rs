//! The output of layout: drawing primitives with absolute page positions.
//!
//! Coordinates are in points with the origin at the top-left corner of the
//! page and `y` growing downwards. Renderers flip them as needed.

use runbook_style::{BuiltinFont, LineSpec};
use runbook_types::Color;
use std::collections::BTreeSet;

/// A single drawable item and its bounding box.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionedElement {
    pub x: f32,
    /// Top of the box, or the baseline for [`LayoutElement::Text`].
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub element: LayoutElement,
}

#[derive(Clone, Debug, PartialEq)]
pub enum LayoutElement {
    Text(TextElement),
    Rectangle(RectElement),
    Line(LineElement),
}

impl std::fmt::Display for LayoutElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutElement::Text(t) => write!(f, "Text(\"{}\")", t.content),
            LayoutElement::Rectangle(_) => write!(f, "Rectangle"),
            LayoutElement::Line(_) => write!(f, "Line"),
        }
    }
}

/// A run of text set in one font on one line.
#[derive(Clone, Debug, PartialEq)]
pub struct TextElement {
    pub content: String,
    pub font: BuiltinFont,
    pub font_size: f32,
    pub color: Color,
    /// Extra width added to every space, used for justification.
    pub word_spacing: f32,
}

/// A filled rectangle covering the element's box.
#[derive(Clone, Debug, PartialEq)]
pub struct RectElement {
    pub fill: Color,
}

/// A straight line from the element's `(x, y)` to `(x2, y2)`.
#[derive(Clone, Debug, PartialEq)]
pub struct LineElement {
    pub x2: f32,
    pub y2: f32,
    pub stroke: LineSpec,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// 1-based.
    pub number: usize,
    pub elements: Vec<PositionedElement>,
}

impl Page {
    /// The page's text runs in drawing order. A change of baseline starts a
    /// new line and a horizontal gap on the same baseline becomes a space.
    pub fn text(&self) -> String {
        let mut out = String::new();
        let mut last: Option<(f32, f32)> = None;
        for el in &self.elements {
            if let LayoutElement::Text(t) = &el.element {
                match last {
                    Some((y, _)) if (y - el.y).abs() > 0.01 => out.push('\n'),
                    Some((_, end)) if el.x - end > 1.0 => out.push(' '),
                    _ => {}
                }
                out.push_str(&t.content);
                last = Some((el.y, el.x + el.width));
            }
        }
        out
    }
}

/// A bookmark pointing at a position on a page.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineEntry {
    pub title: String,
    /// Nesting depth; `0` is top level.
    pub level: u8,
    /// 0-based index into [`LaidOutDocument::pages`].
    pub page_index: usize,
    /// Top of the target paragraph.
    pub y: f32,
}

/// A fully paginated document.
#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutDocument {
    pub page_width: f32,
    pub page_height: f32,
    pub pages: Vec<Page>,
    pub outline: Vec<OutlineEntry>,
}

impl LaidOutDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Every font some text run is set in, in a stable order.
    pub fn fonts_used(&self) -> BTreeSet<BuiltinFont> {
        self.pages
            .iter()
            .flat_map(|p| &p.elements)
            .filter_map(|el| match &el.element {
                LayoutElement::Text(t) => Some(t.font),
                _ => None,
            })
            .collect()
    }
}
