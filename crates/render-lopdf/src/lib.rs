//! PDF renderer using lopdf.
//!
//! Turns a [`LaidOutDocument`](runbook_layout::LaidOutDocument) into a PDF 1.7
//! file that only references the standard 14 fonts, so nothing is embedded.

mod error;
mod helpers;
mod renderer;

pub use error::RenderError;
pub use helpers::{font_resource_name, pdf_text_string};
pub use renderer::{DocumentMetadata, LopdfRenderer};
