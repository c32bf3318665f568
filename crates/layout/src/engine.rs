use crate::LayoutError;
use crate::config::LayoutConfig;
use crate::elements::{
    LaidOutDocument, LayoutElement, OutlineEntry, Page, PositionedElement, RectElement,
    TextElement,
};
use crate::fonts;
use crate::table;
use crate::text::{self, Line};
use log::{debug, info, trace};
use runbook_idf::{Flowable, OutlineMark, Story};
use runbook_style::{BuiltinFont, PageLayout, ResolvedStyle, Stylesheet};
use runbook_types::{Color, Rect};
use std::collections::HashMap;

pub(crate) const EPSILON: f32 = 0.01;

/// Paginates stories against one stylesheet and page geometry.
pub struct LayoutEngine {
    stylesheet: Stylesheet,
    page_layout: PageLayout,
    config: LayoutConfig,
}

impl LayoutEngine {
    pub fn new(stylesheet: Stylesheet, page_layout: PageLayout, config: LayoutConfig) -> Self {
        Self {
            stylesheet,
            page_layout,
            config,
        }
    }

    pub fn stylesheet(&self) -> &Stylesheet {
        &self.stylesheet
    }

    pub fn page_layout(&self) -> &PageLayout {
        &self.page_layout
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// The area content is laid out in: the page minus its margins, minus the
    /// frame padding.
    pub fn frame(&self) -> Rect {
        let (width, height) = self.page_layout.dimensions();
        let m = self.page_layout.margins;
        let pad = self.config.frame_padding;
        Rect::new(0.0, 0.0, width, height).inset(
            m.top + pad,
            m.right + pad,
            m.bottom + pad,
            m.left + pad,
        )
    }

    /// Lays out every flowable of `story` in order and returns the pages.
    ///
    /// Always yields at least one page, even for an empty story.
    pub fn paginate(&self, story: &Story) -> Result<LaidOutDocument, LayoutError> {
        let frame = self.frame();
        debug!(
            "Paginating {} flowables into a {:.1}x{:.1} frame",
            story.len(),
            frame.width,
            frame.height
        );

        let mut paginator = Paginator::new(self, frame);
        for (index, flowable) in story.iter().enumerate() {
            trace!("Flowable #{} ({})", index, flowable.kind());
            match flowable {
                Flowable::Paragraph {
                    text,
                    style,
                    outline,
                } => paginator.paragraph(text, style, outline.as_ref(), false)?,
                Flowable::Preformatted { text, style } => {
                    paginator.paragraph(text, style, None, true)?
                }
                Flowable::Table(block) => table::layout_table(&mut paginator, block)?,
                Flowable::Spacer { height, .. } => paginator.spacer(*height),
                Flowable::PageBreak => paginator.page_break(),
            }
        }

        let document = paginator.finish();
        info!(
            "Layout complete: {} pages, {} outline entries",
            document.pages.len(),
            document.outline.len()
        );
        Ok(document)
    }
}

/// Mutable state of one pagination pass.
pub(crate) struct Paginator<'a> {
    engine: &'a LayoutEngine,
    pub(crate) frame: Rect,
    pub(crate) cursor_y: f32,
    /// Nothing has been placed in the current frame yet.
    pub(crate) at_top: bool,
    elements: Vec<PositionedElement>,
    pages: Vec<Page>,
    outline: Vec<OutlineEntry>,
    styles: HashMap<String, ResolvedStyle>,
}

impl<'a> Paginator<'a> {
    fn new(engine: &'a LayoutEngine, frame: Rect) -> Self {
        Self {
            engine,
            frame,
            cursor_y: frame.y,
            at_top: true,
            elements: Vec::new(),
            pages: Vec::new(),
            outline: Vec::new(),
            styles: HashMap::new(),
        }
    }

    pub(crate) fn remaining(&self) -> f32 {
        self.frame.bottom() - self.cursor_y
    }

    fn is_pristine(&self) -> bool {
        self.at_top && self.elements.is_empty()
    }

    pub(crate) fn new_page(&mut self) {
        let number = self.pages.len() + 1;
        debug!("Page {} done with {} elements", number, self.elements.len());
        self.pages.push(Page {
            number,
            elements: std::mem::take(&mut self.elements),
        });
        self.cursor_y = self.frame.y;
        self.at_top = true;
    }

    pub(crate) fn push(&mut self, element: PositionedElement) {
        self.elements.push(element);
    }

    pub(crate) fn advance(&mut self, dy: f32) {
        self.cursor_y += dy;
        self.at_top = false;
    }

    fn resolve(&mut self, name: &str) -> Result<ResolvedStyle, LayoutError> {
        if let Some(style) = self.styles.get(name) {
            return Ok(style.clone());
        }
        let style = self.engine.stylesheet.resolve(name)?;
        self.styles.insert(name.to_string(), style.clone());
        Ok(style)
    }

    fn spacer(&mut self, height: f32) {
        if height > self.remaining() + EPSILON {
            debug!("Spacer of {:.1}pt does not fit, ending the page", height);
            if !self.is_pristine() {
                self.new_page();
            }
            return;
        }
        self.advance(height);
    }

    fn page_break(&mut self) {
        if self.is_pristine() {
            debug!("Ignoring page break on an empty page");
        } else {
            self.new_page();
        }
    }

    fn paragraph(
        &mut self,
        content: &str,
        style_name: &str,
        outline: Option<&OutlineMark>,
        preformatted: bool,
    ) -> Result<(), LayoutError> {
        let style = self.resolve(style_name)?;
        let available = self.frame.width - style.left_indent - style.right_indent;
        let leading = if style.leading > 0.0 {
            style.leading
        } else {
            style.font_size * 1.2
        };
        let lines = if preformatted {
            text::wrap_preformatted(
                content,
                style.font,
                style.font_size,
                available,
                self.engine.config.tab_width,
            )
        } else {
            text::wrap_paragraph(content, style.font, style.font_size, available)
        };

        // Space before is dropped at the top of a frame.
        if !self.at_top {
            if self.remaining() < style.space_before + leading - EPSILON {
                self.new_page();
            } else {
                self.cursor_y += style.space_before;
            }
        }

        let mut outline = outline;
        let mut rest: &[Line] = &lines;
        while !rest.is_empty() {
            let fit = ((self.remaining() + EPSILON) / leading).floor().max(0.0) as usize;
            if fit == 0 {
                if self.at_top {
                    return Err(LayoutError::ElementTooLarge(leading, self.frame.height));
                }
                self.new_page();
                continue;
            }
            let (chunk, tail) = rest.split_at(fit.min(rest.len()));
            if let Some(mark) = outline.take() {
                let title = mark
                    .title
                    .clone()
                    .unwrap_or_else(|| content.split_whitespace().collect::<Vec<_>>().join(" "));
                self.outline.push(OutlineEntry {
                    title,
                    level: mark.level,
                    page_index: self.pages.len(),
                    y: self.cursor_y,
                });
            }
            self.draw_lines(chunk, &style, leading, available);
            rest = tail;
            if !rest.is_empty() {
                debug!(
                    "Splitting '{}' paragraph, {} lines carried over",
                    style.name,
                    rest.len()
                );
                self.new_page();
            }
        }

        self.cursor_y += style.space_after;
        Ok(())
    }

    fn draw_lines(&mut self, lines: &[Line], style: &ResolvedStyle, leading: f32, available: f32) {
        let x = self.frame.x + style.left_indent;
        let height = lines.len() as f32 * leading;
        if let Some(fill) = style.back_color {
            self.push(PositionedElement {
                x,
                y: self.cursor_y,
                width: available,
                height,
                element: LayoutElement::Rectangle(RectElement { fill }),
            });
        }

        let ascent = fonts::ascent(style.font) * style.font_size;
        for (i, line) in lines.iter().enumerate() {
            let baseline = self.cursor_y + i as f32 * leading + ascent;
            let (offset, word_spacing) = text::align_line(line, style.alignment, available);
            self.place_line(
                &line.text,
                x + offset,
                baseline,
                style.font,
                style.font_size,
                style.text_color,
                word_spacing,
            );
        }
        self.advance(height);
    }

    /// Emits one text element per font run of `content`, left to right.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn place_line(
        &mut self,
        content: &str,
        x: f32,
        baseline: f32,
        font: BuiltinFont,
        font_size: f32,
        color: Color,
        word_spacing: f32,
    ) {
        let mut x = x;
        for (run_font, run) in fonts::segment(font, content) {
            let spaces = run.chars().filter(|c| *c == ' ').count() as f32;
            let width = fonts::string_width(run_font, &run, font_size) + spaces * word_spacing;
            self.push(PositionedElement {
                x,
                y: baseline,
                width,
                height: font_size,
                element: LayoutElement::Text(TextElement {
                    content: run,
                    font: run_font,
                    font_size,
                    color,
                    word_spacing,
                }),
            });
            x += width;
        }
    }

    fn finish(mut self) -> LaidOutDocument {
        if !self.is_pristine() || self.pages.is_empty() {
            self.new_page();
        }
        let (page_width, page_height) = self.engine.page_layout.dimensions();
        LaidOutDocument {
            page_width,
            page_height,
            pages: self.pages,
            outline: self.outline,
        }
    }
}
