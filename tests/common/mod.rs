pub mod fixtures;
pub mod pdf_assertions;

use lopdf::Document as LopdfDocument;
use runbook::{PipelineBuilder, Story};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Save PDF to a file for manual debugging
    #[allow(dead_code)]
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

/// Run `story` through a pipeline configured by `builder` into memory
pub fn generate_pdf(
    builder: PipelineBuilder,
    story: &Story,
) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let pipeline = builder.build()?;
    let mut bytes = Vec::new();
    pipeline.generate(story, &mut bytes)?;
    GeneratedPdf::from_bytes(bytes)
}

/// The full guide, generated at the fixture date
#[allow(dead_code)]
pub fn generate_report_pdf() -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let story = fixtures::report_story();
    generate_pdf(fixtures::report_builder(), &story)
}
