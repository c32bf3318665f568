#![allow(dead_code)]

use lopdf::{Dictionary, Document as LopdfDocument, Object};
use std::collections::HashSet;

/// Extract all text content from a PDF document
pub fn extract_text(doc: &LopdfDocument) -> String {
    let mut text = String::new();
    let pages = doc.get_pages();
    for page_num in 1..=pages.len() {
        if let Ok(page_text) = doc.extract_text(&[page_num as u32]) {
            text.push_str(&page_text);
            text.push('\n');
        }
    }
    text
}

/// Text of a single 1-based page, empty when it cannot be decoded
pub fn page_text(doc: &LopdfDocument, page_num: u32) -> String {
    doc.extract_text(&[page_num]).unwrap_or_default()
}

fn resolve_dict<'a>(doc: &'a LopdfDocument, obj: &'a Object) -> Option<&'a Dictionary> {
    match obj {
        Object::Reference(id) => doc.get_object(*id).ok()?.as_dict().ok(),
        other => other.as_dict().ok(),
    }
}

/// BaseFont names referenced from the page resources
pub fn extract_font_names(doc: &LopdfDocument) -> Vec<String> {
    let mut fonts = HashSet::new();
    for page_id in doc.get_pages().values() {
        let fonts_dict = doc
            .get_dictionary(*page_id)
            .ok()
            .and_then(|page| page.get(b"Resources").ok())
            .and_then(|res| resolve_dict(doc, res))
            .and_then(|res| res.get(b"Font").ok())
            .and_then(|font| resolve_dict(doc, font));
        let Some(fonts_dict) = fonts_dict else {
            continue;
        };
        for (_, font) in fonts_dict.iter() {
            if let Some(name) = resolve_dict(doc, font)
                .and_then(|f| f.get(b"BaseFont").ok())
                .and_then(|n| n.as_name().ok())
            {
                fonts.insert(String::from_utf8_lossy(name).to_string());
            }
        }
    }
    fonts.into_iter().collect()
}

/// Decodes a PDF text string, UTF-16BE when it carries a byte order mark
pub fn decode_text_string(bytes: &[u8]) -> String {
    match bytes {
        [0xFE, 0xFF, rest @ ..] => {
            let units: Vec<u16> = rest
                .chunks_exact(2)
                .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
                .collect();
            String::from_utf16_lossy(&units)
        }
        _ => String::from_utf8_lossy(bytes).to_string(),
    }
}

/// A string entry of the document information dictionary
pub fn info_string(doc: &LopdfDocument, key: &[u8]) -> Option<String> {
    let info = doc.trailer.get(b"Info").ok()?;
    let value = resolve_dict(doc, info)?.get(key).ok()?;
    value.as_str().ok().map(decode_text_string)
}

fn catalog_outlines(doc: &LopdfDocument) -> Option<&Dictionary> {
    let catalog = doc.catalog().ok()?;
    resolve_dict(doc, catalog.get(b"Outlines").ok()?)
}

/// `(depth, title)` of every bookmark, depth-first
pub fn outline_titles(doc: &LopdfDocument) -> Vec<(usize, String)> {
    fn walk(doc: &LopdfDocument, first: Option<&Object>, depth: usize, out: &mut Vec<(usize, String)>) {
        let mut cursor = first.and_then(|obj| obj.as_reference().ok());
        while let Some(id) = cursor {
            let Ok(item) = doc.get_dictionary(id) else {
                break;
            };
            let title = item
                .get(b"Title")
                .ok()
                .and_then(|t| t.as_str().ok())
                .map(decode_text_string)
                .unwrap_or_default();
            out.push((depth, title));
            walk(doc, item.get(b"First").ok(), depth + 1, out);
            cursor = item.get(b"Next").ok().and_then(|n| n.as_reference().ok());
        }
    }

    let mut out = Vec::new();
    if let Some(root) = catalog_outlines(doc) {
        walk(doc, root.get(b"First").ok(), 0, &mut out);
    }
    out
}

/// The `/Count` of the outline root, the number of top-level bookmarks
pub fn outline_root_count(doc: &LopdfDocument) -> Option<i64> {
    catalog_outlines(doc)?.get(b"Count").ok()?.as_i64().ok()
}

/// Assert that PDF contains specific text
#[macro_export]
macro_rules! assert_pdf_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            extracted.contains($text),
            "PDF should contain '{}', but extracted text was:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert the number of pages in a PDF
#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $pdf.page_count()
        );
    };
}

/// Assert minimum number of pages
#[macro_export]
macro_rules! assert_pdf_min_pages {
    ($pdf:expr, $min:expr) => {
        assert!(
            $pdf.page_count() >= $min,
            "Expected at least {} pages, got {}",
            $min,
            $pdf.page_count()
        );
    };
}

/// Assert that PDF contains a font matching a pattern
#[macro_export]
macro_rules! assert_pdf_has_font {
    ($pdf:expr, $pattern:expr) => {
        let fonts = $crate::common::pdf_assertions::extract_font_names(&$pdf.doc);
        assert!(
            fonts.iter().any(|f| f == $pattern),
            "PDF should contain font '{}', fonts found: {:?}",
            $pattern,
            fonts
        );
    };
}
