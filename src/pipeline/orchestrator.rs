use crate::error::PipelineError;
use log::{debug, info};
use runbook_idf::Story;
use runbook_layout::{LaidOutDocument, LayoutEngine};
use runbook_render_lopdf::LopdfRenderer;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

/// Runs a story through layout and PDF rendering.
pub struct DocumentPipeline {
    engine: LayoutEngine,
    renderer: LopdfRenderer,
}

impl DocumentPipeline {
    pub(super) fn new(engine: LayoutEngine, renderer: LopdfRenderer) -> Self {
        Self { engine, renderer }
    }

    pub fn engine(&self) -> &LayoutEngine {
        &self.engine
    }

    /// Paginates `story` without rendering it.
    pub fn layout(&self, story: &Story) -> Result<LaidOutDocument, PipelineError> {
        Ok(self.engine.paginate(story)?)
    }

    /// Lays out `story` and writes the PDF to `writer`. Returns the number of
    /// pages written.
    pub fn generate<W: Write>(&self, story: &Story, writer: &mut W) -> Result<usize, PipelineError> {
        let start = Instant::now();
        let laid_out = self.layout(story)?;
        info!(
            "Laid out {} flowables on {} pages in {:.2?}",
            story.len(),
            laid_out.page_count(),
            start.elapsed()
        );

        let render_start = Instant::now();
        self.renderer.render(&laid_out, writer)?;
        info!("Rendered PDF in {:.2?}", render_start.elapsed());
        Ok(laid_out.page_count())
    }

    /// Runs the pipeline in memory, then writes the PDF to `path`, creating
    /// any missing parent directories. An existing file is only replaced once
    /// the whole document has rendered.
    pub fn generate_to_file<P: AsRef<Path>>(&self, story: &Story, path: P) -> Result<usize, PipelineError> {
        let mut buffer = Vec::<u8>::new();
        let pages = self.generate(story, &mut buffer)?;

        let output_path = path.as_ref();
        if let Some(parent_dir) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent_dir)?;
        }
        fs::write(output_path, &buffer)?;
        debug!("Wrote {} bytes to {}", buffer.len(), output_path.display());
        Ok(pages)
    }
}
