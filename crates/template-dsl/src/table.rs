use crate::node::{FlowableBuilder, impl_clone_box};
use runbook_idf::{Flowable, TableBlock};
use runbook_style::{CellRange, TableStyle, TableStyleCommand, TextAlign};

/// Builder for a grid of text cells.
#[derive(Debug, Clone)]
pub struct Table {
    rows: Vec<Vec<String>>,
    col_widths: Vec<f32>,
    style: TableStyle,
    h_align: TextAlign,
    repeat_rows: usize,
}

impl Default for Table {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            col_widths: Vec::new(),
            style: TableStyle::new(),
            h_align: TextAlign::Center,
            repeat_rows: 0,
        }
    }
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from literal rows in one go.
    pub fn from_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        rows.into_iter().fold(Self::new(), |table, row| table.row(row))
    }

    pub fn row<C>(mut self, cells: C) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    /// Adds a row that is repeated at the top of the table after a page
    /// split. Header rows must come before body rows.
    pub fn header_row<C>(mut self, cells: C) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
    {
        self = self.row(cells);
        self.repeat_rows = self.rows.len();
        self
    }

    pub fn col_widths<W: IntoIterator<Item = f32>>(mut self, widths: W) -> Self {
        self.col_widths = widths.into_iter().collect();
        self
    }

    /// Appends one style command.
    pub fn command(mut self, range: CellRange, command: TableStyleCommand) -> Self {
        self.style.push(range, command);
        self
    }
}

impl FlowableBuilder for Table {
    fn build(self: Box<Self>) -> Vec<Flowable> {
        vec![Flowable::Table(TableBlock {
            rows: self.rows,
            col_widths: self.col_widths,
            style: self.style,
            h_align: self.h_align,
            repeat_rows: self.repeat_rows,
        })]
    }

    impl_clone_box!();
}
