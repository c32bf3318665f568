//! Content-stream drawing and outline construction, kept apart from the
//! document assembly in the renderer.

use crate::error::RenderError;
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, ObjectId, StringFormat, dictionary};
use runbook_layout::fonts;
use runbook_layout::{LayoutElement, LineElement, OutlineEntry, PositionedElement, RectElement, TextElement};
use runbook_style::BuiltinFont;
use runbook_types::Color;
use std::collections::HashMap;

/// The resource name a font is registered under, stable across documents.
pub fn font_resource_name(font: BuiltinFont) -> String {
    let index = BuiltinFont::ALL
        .iter()
        .position(|f| *f == font)
        .unwrap_or_default();
    format!("F{}", index + 1)
}

/// Encodes a PDF text string: plain literal for ASCII, UTF-16BE with a byte
/// order mark otherwise.
pub fn pdf_text_string(text: &str) -> Object {
    if text.is_ascii() {
        return Object::String(text.as_bytes().to_vec(), StringFormat::Literal);
    }
    let mut bytes = vec![0xFE, 0xFF];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    Object::String(bytes, StringFormat::Hexadecimal)
}

fn color_operands(color: Color) -> Vec<Object> {
    color.to_unit_rgb().into_iter().map(Object::Real).collect()
}

#[derive(Default, Clone, PartialEq)]
struct PageRenderState {
    font: Option<(BuiltinFont, f32)>,
    word_spacing: f32,
    fill_color: Option<Color>,
    stroke_color: Option<Color>,
    line_width: Option<f32>,
}

/// Translates positioned elements into page content operators, flipping the
/// top-down layout coordinates into PDF's bottom-up space.
pub(crate) struct PageContext {
    page_height: f32,
    content: Content,
    state: PageRenderState,
}

impl PageContext {
    pub(crate) fn new(page_height: f32) -> Self {
        Self {
            page_height,
            content: Content { operations: vec![] },
            state: PageRenderState::default(),
        }
    }

    fn flip_y(&self, y: f32) -> f32 {
        self.page_height - y
    }

    fn op(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    pub(crate) fn draw_element(&mut self, el: &PositionedElement) {
        match &el.element {
            LayoutElement::Text(text) => self.draw_text(text, el),
            LayoutElement::Rectangle(rect) => self.draw_rect(rect, el),
            LayoutElement::Line(line) => self.draw_line(line, el),
        }
    }

    pub(crate) fn finish(self) -> Result<Vec<u8>, RenderError> {
        Ok(self.content.encode()?)
    }

    fn set_fill_color(&mut self, color: Color) {
        if self.state.fill_color != Some(color) {
            self.op("rg", color_operands(color));
            self.state.fill_color = Some(color);
        }
    }

    fn set_stroke(&mut self, color: Color, width: f32) {
        if self.state.stroke_color != Some(color) {
            self.op("RG", color_operands(color));
            self.state.stroke_color = Some(color);
        }
        if self.state.line_width != Some(width) {
            self.op("w", vec![width.into()]);
            self.state.line_width = Some(width);
        }
    }

    fn set_font(&mut self, font: BuiltinFont, size: f32) {
        if self.state.font != Some((font, size)) {
            self.op(
                "Tf",
                vec![Object::Name(font_resource_name(font).into_bytes()), size.into()],
            );
            self.state.font = Some((font, size));
        }
    }

    fn set_word_spacing(&mut self, spacing: f32) {
        if self.state.word_spacing != spacing {
            self.op("Tw", vec![spacing.into()]);
            self.state.word_spacing = spacing;
        }
    }

    fn draw_text(&mut self, text: &TextElement, el: &PositionedElement) {
        if text.content.trim().is_empty() {
            return;
        }
        let baseline = self.flip_y(el.y);
        self.op("BT", vec![]);
        self.set_font(text.font, text.font_size);
        // Tw only stretches byte 32, which dingbat runs never contain.
        self.set_word_spacing(text.word_spacing);
        self.set_fill_color(text.color);
        self.op("Td", vec![el.x.into(), baseline.into()]);
        self.op(
            "Tj",
            vec![Object::String(fonts::encode(&text.content), StringFormat::Literal)],
        );
        self.op("ET", vec![]);
    }

    fn draw_rect(&mut self, rect: &RectElement, el: &PositionedElement) {
        let y = self.flip_y(el.y + el.height);
        self.set_fill_color(rect.fill);
        self.op("re", vec![el.x.into(), y.into(), el.width.into(), el.height.into()]);
        self.op("f", vec![]);
    }

    fn draw_line(&mut self, line: &LineElement, el: &PositionedElement) {
        self.set_stroke(line.stroke.color, line.stroke.width);
        let (y1, y2) = (self.flip_y(el.y), self.flip_y(line.y2));
        self.op("m", vec![el.x.into(), y1.into()]);
        self.op("l", vec![line.x2.into(), y2.into()]);
        self.op("S", vec![]);
    }
}

struct OutlineNode {
    id: ObjectId,
    title: String,
    dest: Vec<Object>,
    children: Vec<OutlineNode>,
}

/// Adds the bookmark tree for `entries` to `doc`.
///
/// Entries are nested by level: each entry becomes a child of the nearest
/// preceding entry with a lower level. Returns the id of the `Outlines`
/// dictionary, or `None` when there is nothing to add.
pub(crate) fn build_outlines(
    doc: &mut Document,
    entries: &[OutlineEntry],
    page_ids: &[ObjectId],
    page_height: f32,
) -> Option<ObjectId> {
    struct FlatItem {
        id: ObjectId,
        title: String,
        dest: Vec<Object>,
        parent: Option<usize>,
    }

    let mut flat: Vec<FlatItem> = Vec::new();
    let mut stack: Vec<(u8, usize)> = Vec::new();
    for entry in entries {
        let Some(&page_id) = page_ids.get(entry.page_index) else {
            log::warn!("Outline entry '{}' points past the last page", entry.title);
            continue;
        };
        let dest = vec![
            Object::Reference(page_id),
            "XYZ".into(),
            0.into(),
            (page_height - entry.y).into(),
            0.into(),
        ];
        while stack.last().is_some_and(|(level, _)| *level >= entry.level) {
            stack.pop();
        }
        let parent = stack.last().map(|(_, idx)| *idx);
        stack.push((entry.level, flat.len()));
        flat.push(FlatItem {
            id: doc.new_object_id(),
            title: entry.title.clone(),
            dest,
            parent,
        });
    }
    if flat.is_empty() {
        return None;
    }

    let mut children_map: HashMap<usize, Vec<OutlineNode>> = HashMap::new();
    let mut roots = Vec::new();
    for (i, item) in flat.into_iter().enumerate().rev() {
        let mut children = children_map.remove(&i).unwrap_or_default();
        children.reverse();
        let node = OutlineNode {
            id: item.id,
            title: item.title,
            dest: item.dest,
            children,
        };
        match item.parent {
            Some(parent) => children_map.entry(parent).or_default().push(node),
            None => roots.push(node),
        }
    }
    roots.reverse();

    let root_id = doc.new_object_id();
    let (first, last) = (roots.first()?.id, roots.last()?.id);
    doc.objects.insert(
        root_id,
        dictionary! {
            "Type" => "Outlines",
            "First" => first,
            "Last" => last,
            "Count" => roots.len() as i64,
        }
        .into(),
    );
    add_outline_level(doc, &roots, root_id);
    Some(root_id)
}

fn add_outline_level(doc: &mut Document, items: &[OutlineNode], parent_id: ObjectId) {
    for (i, item) in items.iter().enumerate() {
        let mut dict = dictionary! {
            "Title" => pdf_text_string(&item.title),
            "Parent" => parent_id,
            "Dest" => item.dest.clone(),
        };
        if i > 0 {
            dict.set("Prev", items[i - 1].id);
        }
        if let Some(next) = items.get(i + 1) {
            dict.set("Next", next.id);
        }
        if let (Some(first), Some(last)) = (item.children.first(), item.children.last()) {
            dict.set("First", first.id);
            dict.set("Last", last.id);
            // Negative: children start collapsed.
            dict.set("Count", -(item.children.len() as i64));
            add_outline_level(doc, &item.children, item.id);
        }
        doc.objects.insert(item.id, dict.into());
    }
}
