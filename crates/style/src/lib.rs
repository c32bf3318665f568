//! Styling vocabulary for runbook documents: base-14 fonts, alignment, page
//! geometry, inheritable paragraph styles and cell-range table styles.

pub mod dimension;
pub mod error;
pub mod font;
pub mod stylesheet;
pub mod table;
pub mod text;

pub use dimension::{Margins, PageSize, inch, parse_length};
pub use error::StyleParseError;
pub use font::BuiltinFont;
pub use stylesheet::{PageLayout, ParagraphStyle, ResolvedStyle, Stylesheet};
pub use table::{CellRange, CellStyle, LineSpec, TableStyle, TableStyleCommand};
pub use text::{TextAlign, VerticalAlign};
