use super::orchestrator::DocumentPipeline;
use crate::config::ReportConfig;
use crate::error::PipelineError;
use crate::report;
use chrono::NaiveDateTime;
use runbook_layout::{LayoutConfig, LayoutEngine};
use runbook_render_lopdf::{DocumentMetadata, LopdfRenderer};
use runbook_style::{PageLayout, Stylesheet};

/// A builder for creating a `DocumentPipeline`.
pub struct PipelineBuilder {
    page_layout: PageLayout,
    metadata: DocumentMetadata,
    stylesheet: Option<Stylesheet>,
    layout_config: LayoutConfig,
    compress: bool,
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self {
            page_layout: ReportConfig::default().page,
            metadata: DocumentMetadata::default(),
            stylesheet: None,
            layout_config: LayoutConfig::default(),
            compress: true,
        }
    }
}

impl PipelineBuilder {
    /// Creates a new `PipelineBuilder` with the report's page geometry and styles.
    pub fn new() -> Self {
        Default::default()
    }

    /// Takes page geometry, metadata and compression from `config`.
    pub fn from_config(config: &ReportConfig, generated_at: NaiveDateTime) -> Self {
        Self::new()
            .with_page_layout(config.page)
            .with_metadata(config.metadata(generated_at))
            .with_compression(config.compress)
    }

    pub fn with_page_layout(mut self, page_layout: PageLayout) -> Self {
        self.page_layout = page_layout;
        self
    }

    pub fn with_metadata(mut self, metadata: DocumentMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Replaces the report stylesheet. Every style the story names must exist
    /// in it.
    pub fn with_stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.stylesheet = Some(stylesheet);
        self
    }

    pub fn with_layout_config(mut self, config: LayoutConfig) -> Self {
        self.layout_config = config;
        self
    }

    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    /// Consumes the builder and creates the `DocumentPipeline`.
    pub fn build(self) -> Result<DocumentPipeline, PipelineError> {
        let stylesheet = self.stylesheet.unwrap_or_else(report::stylesheet);
        let engine = LayoutEngine::new(stylesheet, self.page_layout, self.layout_config);

        let frame = engine.frame();
        if frame.width <= 0.0 || frame.height <= 0.0 {
            return Err(PipelineError::Config(format!(
                "Page layout leaves a {:.1}x{:.1}pt content frame",
                frame.width, frame.height
            )));
        }
        log::debug!(
            "Content frame at ({:.1}, {:.1}), {:.1}x{:.1}pt",
            frame.x,
            frame.y,
            frame.width,
            frame.height
        );

        let renderer = LopdfRenderer::new(self.metadata).with_compression(self.compress);
        Ok(DocumentPipeline::new(engine, renderer))
    }
}
