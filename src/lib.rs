//! Builds the Terraform ALB + EC2 + Docker setup guide as a PDF.
//!
//! The content lives in [`report`]; [`PipelineBuilder`] turns it into a
//! [`DocumentPipeline`] that paginates it and writes the file.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod report;

pub use config::ReportConfig;
pub use error::PipelineError;
pub use pipeline::{DocumentPipeline, PipelineBuilder};

pub use runbook_idf::{Flowable, Story};
pub use runbook_layout::{LaidOutDocument, LayoutConfig};
pub use runbook_render_lopdf::DocumentMetadata;
pub use runbook_style::{PageLayout, Stylesheet};

use chrono::Local;

/// Generates the guide as configured and writes it to `config.output`.
///
/// `config.generated_at` fixes the date printed in the document and the PDF
/// creation date; the current local time is used otherwise. Returns the
/// number of pages written.
pub fn generate_report(config: &ReportConfig) -> Result<usize, PipelineError> {
    config.validate()?;
    let generated_at = config
        .generated_at
        .unwrap_or_else(|| Local::now().naive_local());
    let pipeline = PipelineBuilder::from_config(config, generated_at).build()?;
    let story = report::build_story(&report::ReportContext::new(generated_at));
    pipeline.generate_to_file(&story, &config.output)
}
