use chrono::NaiveDateTime;
use clap::Parser;
use runbook::{PipelineError, ReportConfig, generate_report};
use std::path::PathBuf;

/// Generates the Terraform ALB + EC2 + Docker setup guide as a PDF.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Where to write the PDF.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON file with report settings. Flags override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fixed generation time, e.g. 2024-01-15T10:30:00.
    #[arg(long, value_parser = parse_date)]
    date: Option<NaiveDateTime>,

    /// Write uncompressed content streams.
    #[arg(long)]
    no_compress: bool,
}

impl Cli {
    /// Layers the command line flags over `config`.
    fn apply(self, mut config: ReportConfig) -> ReportConfig {
        if let Some(output) = self.output {
            config.output = output;
        }
        if let Some(date) = self.date {
            config.generated_at = Some(date);
        }
        if self.no_compress {
            config.compress = false;
        }
        config
    }
}

fn parse_date(value: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .map_err(|e| format!("expected YYYY-MM-DDTHH:MM:SS: {e}"))
}

fn main() -> Result<(), PipelineError> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ReportConfig::from_json_file(path)?,
        None => ReportConfig::default(),
    };
    let config = cli.apply(config);

    let pages = generate_report(&config)?;
    log::info!("Wrote {} pages", pages);
    println!("✓ PDF created successfully: {}", config.output.display());
    Ok(())
}
