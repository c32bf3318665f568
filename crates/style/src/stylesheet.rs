//! Named paragraph styles with single-parent inheritance.

use crate::dimension::{Margins, PageSize, inch};
use crate::error::StyleParseError;
use crate::font::BuiltinFont;
use crate::text::TextAlign;
use runbook_types::Color;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Paper size and margins of every page of a document.
#[derive(Deserialize, Serialize, Clone, Copy, PartialEq, Debug)]
pub struct PageLayout {
    #[serde(default)]
    pub size: PageSize,
    #[serde(default = "PageLayout::default_margins")]
    pub margins: Margins,
}

impl PageLayout {
    fn default_margins() -> Margins {
        Margins::all(inch(1.0))
    }

    /// Page width and height in points.
    pub fn dimensions(&self) -> (f32, f32) {
        self.size.dimensions_pt()
    }
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            size: PageSize::default(),
            margins: Self::default_margins(),
        }
    }
}

/// A named paragraph style. Every attribute is optional; unset attributes are
/// taken from the parent style, and from [`ResolvedStyle::default`] at the root.
#[derive(Deserialize, Serialize, Default, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphStyle {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<BuiltinFont>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leading: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<TextAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_before: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_after: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_indent: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_indent: Option<f32>,
}

impl ParagraphStyle {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn parent(mut self, parent: &str) -> Self {
        self.parent = Some(parent.to_string());
        self
    }

    pub fn font(mut self, font: BuiltinFont) -> Self {
        self.font = Some(font);
        self
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn leading(mut self, leading: f32) -> Self {
        self.leading = Some(leading);
        self
    }

    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    pub fn back_color(mut self, color: Color) -> Self {
        self.back_color = Some(color);
        self
    }

    pub fn alignment(mut self, alignment: TextAlign) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn space_before(mut self, space: f32) -> Self {
        self.space_before = Some(space);
        self
    }

    pub fn space_after(mut self, space: f32) -> Self {
        self.space_after = Some(space);
        self
    }

    pub fn left_indent(mut self, indent: f32) -> Self {
        self.left_indent = Some(indent);
        self
    }

    pub fn right_indent(mut self, indent: f32) -> Self {
        self.right_indent = Some(indent);
        self
    }

    fn apply_to(&self, resolved: &mut ResolvedStyle) {
        if let Some(v) = self.font {
            resolved.font = v;
        }
        if let Some(v) = self.font_size {
            resolved.font_size = v;
        }
        if let Some(v) = self.leading {
            resolved.leading = v;
        }
        if let Some(v) = self.text_color {
            resolved.text_color = v;
        }
        if let Some(v) = self.back_color {
            resolved.back_color = Some(v);
        }
        if let Some(v) = self.alignment {
            resolved.alignment = v;
        }
        if let Some(v) = self.space_before {
            resolved.space_before = v;
        }
        if let Some(v) = self.space_after {
            resolved.space_after = v;
        }
        if let Some(v) = self.left_indent {
            resolved.left_indent = v;
        }
        if let Some(v) = self.right_indent {
            resolved.right_indent = v;
        }
    }
}

/// A paragraph style with the whole parent chain applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    pub name: String,
    pub font: BuiltinFont,
    pub font_size: f32,
    pub leading: f32,
    pub text_color: Color,
    pub back_color: Option<Color>,
    pub alignment: TextAlign,
    pub space_before: f32,
    pub space_after: f32,
    pub left_indent: f32,
    pub right_indent: f32,
}

impl Default for ResolvedStyle {
    fn default() -> Self {
        Self {
            name: String::new(),
            font: BuiltinFont::Helvetica,
            font_size: 10.0,
            leading: 12.0,
            text_color: Color::BLACK,
            back_color: None,
            alignment: TextAlign::Left,
            space_before: 0.0,
            space_after: 0.0,
            left_indent: 0.0,
            right_indent: 0.0,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Stylesheet {
    styles: HashMap<String, Arc<ParagraphStyle>>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock styles every document starts from: `Normal`, `BodyText`,
    /// `Italic`, `Title`, `Heading1`..`Heading3` and `Code`.
    pub fn sample() -> Self {
        Self::new()
            .with_style(ParagraphStyle::new("Normal").font(BuiltinFont::Helvetica).font_size(10.0).leading(12.0))
            .with_style(ParagraphStyle::new("BodyText").parent("Normal").space_before(6.0))
            .with_style(ParagraphStyle::new("Italic").parent("BodyText").font(BuiltinFont::HelveticaOblique))
            .with_style(
                ParagraphStyle::new("Title")
                    .parent("Normal")
                    .font(BuiltinFont::HelveticaBold)
                    .font_size(18.0)
                    .leading(22.0)
                    .alignment(TextAlign::Center)
                    .space_after(6.0),
            )
            .with_style(
                ParagraphStyle::new("Heading1")
                    .parent("Normal")
                    .font(BuiltinFont::HelveticaBold)
                    .font_size(18.0)
                    .leading(22.0)
                    .space_after(6.0),
            )
            .with_style(
                ParagraphStyle::new("Heading2")
                    .parent("Normal")
                    .font(BuiltinFont::HelveticaBold)
                    .font_size(14.0)
                    .leading(18.0)
                    .space_before(12.0)
                    .space_after(6.0),
            )
            .with_style(
                ParagraphStyle::new("Heading3")
                    .parent("Normal")
                    .font(BuiltinFont::HelveticaBoldOblique)
                    .font_size(12.0)
                    .leading(14.0)
                    .space_before(12.0)
                    .space_after(6.0),
            )
            .with_style(
                ParagraphStyle::new("Code")
                    .parent("Normal")
                    .font(BuiltinFont::Courier)
                    .font_size(8.0)
                    .leading(8.8)
                    .left_indent(36.0),
            )
    }

    /// Adds a style, replacing any existing style of the same name.
    pub fn with_style(mut self, style: ParagraphStyle) -> Self {
        self.insert(style);
        self
    }

    pub fn insert(&mut self, style: ParagraphStyle) {
        self.styles.insert(style.name.clone(), Arc::new(style));
    }

    pub fn get(&self, name: &str) -> Option<&Arc<ParagraphStyle>> {
        self.styles.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }

    /// Walks the parent chain of `name` and folds it, root first, into a
    /// fully-populated style.
    pub fn resolve(&self, name: &str) -> Result<ResolvedStyle, StyleParseError> {
        let mut chain: Vec<&ParagraphStyle> = Vec::new();
        let mut seen = HashSet::new();
        let mut cursor = Some(name);

        while let Some(current) = cursor {
            if !seen.insert(current) {
                return Err(StyleParseError::InheritanceCycle(current.to_string()));
            }
            let style = self
                .styles
                .get(current)
                .ok_or_else(|| StyleParseError::UnknownStyle(current.to_string()))?;
            chain.push(style);
            cursor = style.parent.as_deref();
        }

        let mut resolved = ResolvedStyle {
            name: name.to_string(),
            ..Default::default()
        };
        for style in chain.iter().rev() {
            style.apply_to(&mut resolved);
        }
        Ok(resolved)
    }
}
