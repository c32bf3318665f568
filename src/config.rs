//! User-facing settings, loadable from a camelCase JSON file.

use crate::error::PipelineError;
use chrono::NaiveDateTime;
use runbook_render_lopdf::DocumentMetadata;
use runbook_style::{Margins, PageLayout, PageSize, inch};
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT: &str = "Terraform_ALB_EC2_Docker_Setup.pdf";

/// Form of the PDF `CreationDate`/`ModDate` entries.
const PDF_DATE_FORMAT: &str = "D:%Y%m%d%H%M%S";

/// Settings for one report run. Every field has a default, so an empty JSON
/// object is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportConfig {
    pub output: PathBuf,
    /// Paper size and margins. Margins left out keep the report's own.
    #[serde(deserialize_with = "deserialize_page")]
    pub page: PageLayout,
    pub title: String,
    pub author: String,
    pub subject: String,
    /// Flate-compress page content streams.
    pub compress: bool,
    /// Fixed generation time, e.g. `"2024-01-15T10:30:00"`. The current local
    /// time is used when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<NaiveDateTime>,
}

/// Half an inch top and bottom, one inch left and right.
fn report_margins() -> Margins {
    Margins::symmetric(inch(0.5), inch(1.0))
}

fn deserialize_page<'de, D>(deserializer: D) -> Result<PageLayout, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct PageSettings {
        #[serde(default)]
        size: PageSize,
        margins: Option<Margins>,
    }

    let settings = PageSettings::deserialize(deserializer)?;
    Ok(PageLayout {
        size: settings.size,
        margins: settings.margins.unwrap_or_else(report_margins),
    })
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            page: PageLayout {
                size: PageSize::Letter,
                margins: report_margins(),
            },
            title: "Terraform ALB + EC2 + Docker".to_string(),
            author: "anonymous".to_string(),
            subject: "Infrastructure as Code Setup Guide".to_string(),
            compress: true,
            generated_at: None,
        }
    }
}

impl ReportConfig {
    pub fn from_json_str(json: &str) -> Result<Self, PipelineError> {
        let config: ReportConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            PipelineError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read config from '{}': {}", path.display(), e),
            ))
        })?;
        Self::from_json_str(&json)
    }

    /// Rejects page geometry that leaves no room for content.
    pub fn validate(&self) -> Result<(), PipelineError> {
        let (width, height) = self.page.dimensions();
        let m = self.page.margins;
        if width - m.horizontal() <= 0.0 || height - m.vertical() <= 0.0 {
            return Err(PipelineError::Config(format!(
                "margins of {:.1}x{:.1}pt leave no room on a {:.1}x{:.1}pt page",
                m.horizontal(),
                m.vertical(),
                width,
                height
            )));
        }
        Ok(())
    }

    /// Info dictionary entries for a report generated at `generated_at`.
    pub fn metadata(&self, generated_at: NaiveDateTime) -> DocumentMetadata {
        DocumentMetadata {
            title: Some(self.title.clone()),
            author: Some(self.author.clone()),
            subject: Some(self.subject.clone()),
            creator: Some(env!("CARGO_PKG_NAME").to_string()),
            producer: Some(concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION")).to_string()),
            creation_date: Some(generated_at.format(PDF_DATE_FORMAT).to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Write;

    #[test]
    fn empty_object_yields_defaults() {
        let config = ReportConfig::from_json_str("{}").unwrap();
        assert_eq!(config, ReportConfig::default());
    }

    #[test]
    fn camel_case_fields_override_defaults() {
        let config = ReportConfig::from_json_str(
            r#"{
                "output": "out/guide.pdf",
                "page": { "size": "A4", "margins": "1in" },
                "compress": false,
                "generatedAt": "2024-01-15T10:30:00"
            }"#,
        )
        .unwrap();

        assert_eq!(config.output, PathBuf::from("out/guide.pdf"));
        assert_eq!(config.page.size, PageSize::A4);
        assert_eq!(config.page.margins, Margins::all(72.0));
        assert!(!config.compress);
        assert_eq!(config.title, ReportConfig::default().title);
        let expected = NaiveDate::from_ymd_opt(2024, 1, 15)
            .and_then(|d| d.and_hms_opt(10, 30, 0));
        assert_eq!(config.generated_at, expected);
    }

    #[test]
    fn missing_margins_keep_the_report_margins() {
        let config = ReportConfig::from_json_str(r#"{ "page": { "size": "Legal" } }"#).unwrap();
        assert_eq!(config.page.margins, Margins::symmetric(inch(0.5), inch(1.0)));
        assert_eq!(config.page.dimensions(), (612.0, 1008.0));

        let config = ReportConfig::from_json_str(r#"{ "page": { "margins": "2in" } }"#).unwrap();
        assert_eq!(config.page.size, PageSize::Letter);
        assert_eq!(config.page.margins, Margins::all(inch(2.0)));
    }

    #[test]
    fn margins_wider_than_the_page_are_rejected() {
        let err = ReportConfig::from_json_str(r#"{ "page": { "margins": "5in" } }"#).unwrap_err();
        assert!(matches!(err, PipelineError::Config(_)));
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        let err = ReportConfig::from_json_str("{ output: ").unwrap_err();
        assert!(matches!(err, PipelineError::Json(_)));
    }

    #[test]
    fn reads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "title": "Runbook" }}"#).unwrap();
        let config = ReportConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.title, "Runbook");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = ReportConfig::from_json_file("/nonexistent/runbook.json").unwrap_err();
        assert!(matches!(err, PipelineError::Io(_)));
    }

    #[test]
    fn metadata_uses_pdf_date_form() {
        let at = NaiveDate::from_ymd_opt(2024, 1, 15)
            .and_then(|d| d.and_hms_opt(10, 30, 0))
            .unwrap();
        let metadata = ReportConfig::default().metadata(at);
        assert_eq!(metadata.creation_date.as_deref(), Some("D:20240115103000"));
        assert_eq!(metadata.subject.as_deref(), Some("Infrastructure as Code Setup Guide"));
        assert_eq!(metadata.creator.as_deref(), Some("runbook"));
    }
}
