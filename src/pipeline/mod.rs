//! Document generation pipeline.
//!
//! - [`PipelineBuilder`]: fluent configuration of page geometry, styles,
//!   metadata and compression
//! - [`DocumentPipeline`]: lays a [`Story`](runbook_idf::Story) out and writes
//!   it as PDF
//!
//! # Example
//!
//! ```ignore
//! use runbook::{PipelineBuilder, report};
//!
//! let pipeline = PipelineBuilder::new().build()?;
//! let story = report::build_story(&report::ReportContext::now());
//! pipeline.generate_to_file(&story, "guide.pdf")?;
//! ```

mod builder;
mod orchestrator;

pub use builder::PipelineBuilder;
pub use orchestrator::DocumentPipeline;
