//! Metrics and encoding for the standard 14 PDF fonts.
//!
//! Text fonts are drawn with `WinAnsiEncoding`, so every character is mapped to
//! one byte of that code page. Check marks, crosses and arrows have no WinAnsi
//! code and are drawn from ZapfDingbats instead; box-drawing characters fall
//! back to ASCII look-alikes. Anything else becomes `?`.
//!
//! Widths are in thousandths of an em, as in the Adobe font metrics files.

use log::debug;
use runbook_style::BuiltinFont;

/// Helvetica advance widths for ASCII 32..=126.
#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// Helvetica-Bold advance widths for ASCII 32..=126.
#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

const COURIER_WIDTH: u16 = 600;

/// Unicode characters drawn from ZapfDingbats, with their code and width.
const DINGBATS: [(char, u8, u16); 7] = [
    ('✓', 0x33, 755),
    ('✔', 0x34, 846),
    ('✕', 0x35, 762),
    ('✖', 0x36, 761),
    ('✗', 0x37, 571),
    ('✘', 0x38, 677),
    ('→', 0xD5, 838),
];

/// WinAnsi codes 0x80..=0x9F, which differ from Latin-1.
const WIN_ANSI_HIGH: [(char, u8); 27] = [
    ('€', 0x80),
    ('‚', 0x82),
    ('ƒ', 0x83),
    ('„', 0x84),
    ('…', 0x85),
    ('†', 0x86),
    ('‡', 0x87),
    ('ˆ', 0x88),
    ('‰', 0x89),
    ('Š', 0x8A),
    ('‹', 0x8B),
    ('Œ', 0x8C),
    ('Ž', 0x8E),
    ('‘', 0x91),
    ('’', 0x92),
    ('“', 0x93),
    ('”', 0x94),
    ('•', 0x95),
    ('–', 0x96),
    ('—', 0x97),
    ('˜', 0x98),
    ('™', 0x99),
    ('š', 0x9A),
    ('›', 0x9B),
    ('œ', 0x9C),
    ('ž', 0x9E),
    ('Ÿ', 0x9F),
];

/// How a single character is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    /// A byte in the text font's WinAnsi encoding.
    Text(u8),
    /// A byte in the ZapfDingbats built-in encoding.
    Dingbat(u8),
}

pub fn is_dingbat(ch: char) -> bool {
    DINGBATS.iter().any(|(c, _, _)| *c == ch)
}

fn dingbat_code(ch: char) -> Option<u8> {
    DINGBATS.iter().find(|(c, _, _)| *c == ch).map(|(_, code, _)| *code)
}

fn dingbat_width(code: u8) -> u16 {
    DINGBATS
        .iter()
        .find(|(_, c, _)| *c == code)
        .map_or(788, |(_, _, w)| *w)
}

/// ASCII stand-ins for the box-drawing characters used in directory trees.
fn ascii_fallback(ch: char) -> Option<char> {
    match ch {
        '├' | '└' | '┌' | '┐' | '┘' | '┤' | '┬' | '┴' | '┼' => Some('+'),
        '│' => Some('|'),
        '─' => Some('-'),
        _ => None,
    }
}

fn win_ansi_code(ch: char) -> Option<u8> {
    match ch as u32 {
        0x20..=0x7E | 0xA0..=0xFF => Some(ch as u32 as u8),
        _ => WIN_ANSI_HIGH
            .iter()
            .find(|(c, _)| *c == ch)
            .map(|(_, code)| *code),
    }
}

/// Maps a character to the byte that draws it.
pub fn map_char(ch: char) -> Glyph {
    if let Some(code) = dingbat_code(ch) {
        return Glyph::Dingbat(code);
    }
    let ch = ascii_fallback(ch).unwrap_or(ch);
    match win_ansi_code(ch) {
        Some(code) => Glyph::Text(code),
        None => {
            debug!("No WinAnsi glyph for {:?} (U+{:04X}), drawing '?'", ch, ch as u32);
            Glyph::Text(b'?')
        }
    }
}

fn text_width(font: BuiltinFont, code: u8) -> u16 {
    if font.is_monospace() {
        return COURIER_WIDTH;
    }
    let bold = font.is_bold();
    match code {
        0x20..=0x7E => {
            let table = if bold { &HELVETICA_BOLD } else { &HELVETICA };
            table[(code - 0x20) as usize]
        }
        0x95 => 350,
        0x85 | 0x89 | 0x97 | 0x99 => 1000,
        0x91 | 0x92 | 0x82 => {
            if bold {
                278
            } else {
                222
            }
        }
        0x93 | 0x94 | 0x84 => {
            if bold {
                500
            } else {
                333
            }
        }
        0xA0 | 0xB7 => 278,
        0xA9 | 0xAE => 737,
        0xB0 => 400,
        0xD7 => 584,
        _ => 556,
    }
}

/// Advance width of `ch` in thousandths of an em.
pub fn char_width(font: BuiltinFont, ch: char) -> u16 {
    match map_char(ch) {
        Glyph::Dingbat(code) => dingbat_width(code),
        Glyph::Text(code) if font.is_symbolic() => dingbat_width(code),
        Glyph::Text(code) => text_width(font, code),
    }
}

/// Width of `text` in points when set in `font` at `size`.
pub fn string_width(font: BuiltinFont, text: &str, size: f32) -> f32 {
    let units: u32 = text.chars().map(|ch| u32::from(char_width(font, ch))).sum();
    units as f32 * size / 1000.0
}

/// Distance from the baseline to the top of the tallest glyph, per em.
pub fn ascent(font: BuiltinFont) -> f32 {
    match font {
        BuiltinFont::ZapfDingbats => 0.82,
        f if f.is_monospace() => 0.629,
        _ => 0.718,
    }
}

/// Splits `text` into maximal runs that share a font: runs of dingbat
/// characters switch to ZapfDingbats, everything else keeps `font`.
pub fn segment(font: BuiltinFont, text: &str) -> Vec<(BuiltinFont, String)> {
    let mut runs: Vec<(BuiltinFont, String)> = Vec::new();
    for ch in text.chars() {
        let run_font = if is_dingbat(ch) {
            BuiltinFont::ZapfDingbats
        } else {
            font
        };
        match runs.last_mut() {
            Some((f, s)) if *f == run_font => s.push(ch),
            _ => runs.push((run_font, ch.to_string())),
        }
    }
    runs
}

/// Encodes a single-font run into the bytes of a PDF string.
pub fn encode(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| match map_char(ch) {
            Glyph::Text(b) | Glyph::Dingbat(b) => b,
        })
        .collect()
}
