//! Pagination of a [`Story`](runbook_idf::Story) onto fixed-size pages.
//!
//! The engine walks the story once, top to bottom, filling a single content
//! frame per page. Paragraphs split between lines, tables split between rows,
//! and everything is emitted as absolutely positioned primitives in top-down
//! page coordinates for a renderer to draw.

use runbook_style::StyleParseError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Element has a height of {0:.2} which exceeds the total frame height of {1:.2}.")]
    ElementTooLarge(f32, f32),
    #[error("Style error: {0}")]
    Style(#[from] StyleParseError),
    #[error("Invalid table: {0}")]
    InvalidTable(String),
}

pub mod config;
pub mod elements;
pub mod fonts;
pub mod text;

mod engine;
mod table;

pub use self::config::LayoutConfig;
pub use self::elements::{
    LaidOutDocument, LayoutElement, LineElement, OutlineEntry, Page, PositionedElement,
    RectElement, TextElement,
};
pub use self::engine::LayoutEngine;

// Frame geometry
pub use runbook_types::geometry::Rect;

#[cfg(test)]
mod table_test;
