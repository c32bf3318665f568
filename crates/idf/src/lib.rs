//! Intermediate Document Format (IDF)
//!
//! The in-memory representation of a document after it has been assembled and
//! before layout: an ordered [`Story`] of block-level [`Flowable`]s. Styles are
//! referenced by name and resolved against a stylesheet during layout.

use runbook_style::{TableStyle, TextAlign};

/// Marks a paragraph as an entry of the document outline (PDF bookmarks).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineMark {
    /// Nesting depth; `0` is top level.
    pub level: u8,
    /// Bookmark title; the paragraph text is used when `None`.
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableBlock {
    /// Cell text, row-major.
    pub rows: Vec<Vec<String>>,
    /// Explicit column widths in points. Empty means equal shares of the frame.
    pub col_widths: Vec<f32>,
    pub style: TableStyle,
    /// Horizontal placement of the table inside the frame.
    pub h_align: TextAlign,
    /// Leading rows repeated at the top of every continuation after a split.
    pub repeat_rows: usize,
}

impl TableBlock {
    pub fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.col_widths.len()))
            .max()
            .unwrap_or(0)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// A block-level element of a document.
#[derive(Debug, Clone, PartialEq)]
pub enum Flowable {
    /// Reflowed text. `\n` forces a line break, other whitespace collapses.
    Paragraph {
        text: String,
        style: String,
        outline: Option<OutlineMark>,
    },
    /// Text laid out line by line with whitespace preserved.
    Preformatted { text: String, style: String },
    Table(TableBlock),
    /// Fixed vertical space. The width is informational only.
    Spacer { width: f32, height: f32 },
    PageBreak,
}

impl Flowable {
    pub fn kind(&self) -> &'static str {
        match self {
            Flowable::Paragraph { .. } => "Paragraph",
            Flowable::Preformatted { .. } => "Preformatted",
            Flowable::Table(_) => "Table",
            Flowable::Spacer { .. } => "Spacer",
            Flowable::PageBreak => "PageBreak",
        }
    }
}

/// The ordered content of a document. Flowables are laid out exactly in the
/// order they were pushed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Story {
    flowables: Vec<Flowable>,
}

impl Story {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, flowable: Flowable) {
        self.flowables.push(flowable);
    }

    pub fn len(&self) -> usize {
        self.flowables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flowables.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Flowable> {
        self.flowables.iter()
    }

    pub fn as_slice(&self) -> &[Flowable] {
        &self.flowables
    }
}

impl Extend<Flowable> for Story {
    fn extend<T: IntoIterator<Item = Flowable>>(&mut self, iter: T) {
        self.flowables.extend(iter);
    }
}

impl FromIterator<Flowable> for Story {
    fn from_iter<T: IntoIterator<Item = Flowable>>(iter: T) -> Self {
        Self {
            flowables: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Story {
    type Item = &'a Flowable;
    type IntoIter = std::slice::Iter<'a, Flowable>;

    fn into_iter(self) -> Self::IntoIter {
        self.flowables.iter()
    }
}

impl IntoIterator for Story {
    type Item = Flowable;
    type IntoIter = std::vec::IntoIter<Flowable>;

    fn into_iter(self) -> Self::IntoIter {
        self.flowables.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn story_preserves_push_order() {
        let mut story = Story::new();
        story.push(Flowable::Spacer { width: 1.0, height: 72.0 });
        story.push(Flowable::PageBreak);
        story.extend([Flowable::Paragraph {
            text: "after".into(),
            style: "Normal".into(),
            outline: None,
        }]);
        let kinds: Vec<_> = story.iter().map(Flowable::kind).collect();
        assert_eq!(kinds, ["Spacer", "PageBreak", "Paragraph"]);
    }

    #[test]
    fn column_count_covers_ragged_rows_and_widths() {
        let table = TableBlock {
            rows: vec![vec!["a".into()], vec!["b".into(), "c".into()]],
            col_widths: vec![],
            style: TableStyle::new(),
            h_align: TextAlign::Center,
            repeat_rows: 0,
        };
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.row_count(), 2);
    }
}
