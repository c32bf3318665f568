//! Line breaking for reflowed and preformatted text.

use crate::fonts::string_width;
use runbook_style::{BuiltinFont, TextAlign};

const EPSILON: f32 = 0.01;

/// One line of text after breaking.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub text: String,
    /// Natural width in points, before any justification.
    pub width: f32,
    /// The line ends at a forced break or at the end of the text. Such lines
    /// are never stretched when justifying.
    pub hard_end: bool,
}

impl Line {
    fn soft(text: String, width: f32) -> Self {
        Self {
            text,
            width,
            hard_end: false,
        }
    }

    fn hard(text: String, width: f32) -> Self {
        Self {
            text,
            width,
            hard_end: true,
        }
    }

    pub fn space_count(&self) -> usize {
        self.text.chars().filter(|c| *c == ' ').count()
    }
}

/// Breaks `text` greedily into lines no wider than `max_width`.
///
/// `\n` forces a break; every other run of whitespace collapses to a single
/// space. A word wider than the line is split between characters.
pub fn wrap_paragraph(text: &str, font: BuiltinFont, size: f32, max_width: f32) -> Vec<Line> {
    let space = string_width(font, " ", size);
    let mut lines = Vec::new();

    for logical in text.split('\n') {
        let mut current = String::new();
        let mut width = 0.0;

        for word in logical.split_whitespace() {
            let word_width = string_width(font, word, size);
            if !current.is_empty() && width + space + word_width <= max_width + EPSILON {
                current.push(' ');
                current.push_str(word);
                width += space + word_width;
                continue;
            }
            if !current.is_empty() {
                lines.push(Line::soft(std::mem::take(&mut current), width));
            }
            if word_width <= max_width + EPSILON {
                current = word.to_string();
                width = word_width;
            } else {
                let mut pieces = split_chars(word, font, size, max_width);
                if let Some((last, last_width)) = pieces.pop() {
                    lines.extend(pieces.into_iter().map(|(s, w)| Line::soft(s, w)));
                    current = last;
                    width = last_width;
                }
            }
        }
        lines.push(Line::hard(current, width));
    }
    lines
}

/// Lays out text line by line with whitespace preserved. Tabs expand to
/// `tab_width` spaces and lines wider than `max_width` wrap between characters.
pub fn wrap_preformatted(
    text: &str,
    font: BuiltinFont,
    size: f32,
    max_width: f32,
    tab_width: usize,
) -> Vec<Line> {
    let tab = " ".repeat(tab_width);
    let mut lines = Vec::new();
    for raw in text.split('\n') {
        let expanded = raw.replace('\t', &tab);
        let expanded = expanded.trim_end();
        let width = string_width(font, expanded, size);
        if width <= max_width + EPSILON {
            lines.push(Line::hard(expanded.to_string(), width));
        } else {
            lines.extend(
                split_chars(expanded, font, size, max_width)
                    .into_iter()
                    .map(|(s, w)| Line::hard(s, w)),
            );
        }
    }
    lines
}

/// Splits a string into pieces that each fit `max_width`. Every piece holds
/// at least one character, so an impossibly narrow width still terminates.
fn split_chars(text: &str, font: BuiltinFont, size: f32, max_width: f32) -> Vec<(String, f32)> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut width = 0.0;
    let mut buf = [0u8; 4];
    for ch in text.chars() {
        let ch_width = string_width(font, ch.encode_utf8(&mut buf), size);
        if !current.is_empty() && width + ch_width > max_width + EPSILON {
            pieces.push((std::mem::take(&mut current), width));
            width = 0.0;
        }
        current.push(ch);
        width += ch_width;
    }
    if !current.is_empty() {
        pieces.push((current, width));
    }
    pieces
}

/// Horizontal offset and extra per-space width for a line inside a box of
/// `available` points.
pub fn align_line(line: &Line, align: TextAlign, available: f32) -> (f32, f32) {
    let slack = (available - line.width).max(0.0);
    match align {
        TextAlign::Left => (0.0, 0.0),
        TextAlign::Right => (slack, 0.0),
        TextAlign::Center => (slack / 2.0, 0.0),
        TextAlign::Justify => {
            let spaces = line.space_count();
            if line.hard_end || spaces == 0 {
                (0.0, 0.0)
            } else {
                (0.0, slack / spaces as f32)
            }
        }
    }
}
