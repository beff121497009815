pub mod csv;
pub mod xlsx;
pub mod text;
pub mod json;

use crate::args::{Config, OutputFormat};
use crate::error::{Result, TermFreqError};
use crate::report::{self, Report};
use serde::{Deserialize, Serialize};
use std::io::Write;

pub enum Cell {
    String(String),
    Number(f64),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Output {
    Stdout,
    File(String),
}

pub fn output_report(config: &Config, report: &Report) -> Result<()> {
    // Create the output directory for options with path if it does not exist
    if let Output::File(path) = &config.output {
        if let Some(parent) = std::path::Path::new(path).parent() {
            std::fs::create_dir_all(parent).map_err(|e| TermFreqError::file(parent, e))?;
        }
    }
    match (config.output_format, &config.output) {
        (OutputFormat::Text, _) => text::output_report(&mut writer(config)?, report)?,
        (OutputFormat::Json, _) => json::output_report(&mut writer(config)?, report)?,
        (OutputFormat::CSV, _) => csv::output_report(&mut writer(config)?, report)?,
        (OutputFormat::XLSX, Output::File(path)) => xlsx::output_report(path, report)?,
        (OutputFormat::XLSX, Output::Stdout) => {
            return Err(TermFreqError::Config("Output format xlsx requires an output file".to_string()));
        }
    }
    report::output_markdown_report(config, report)
}

fn writer(config: &Config) -> Result<Box<dyn Write>> {
    match &config.output {
        Output::Stdout => Ok(Box::new(std::io::stdout().lock())),
        Output::File(filename) => {
            let file = std::fs::File::create(filename).map_err(|e| TermFreqError::file(filename, e))?;
            Ok(Box::new(std::io::BufWriter::new(file)))
        }
    }
}

fn build_headers() -> Vec<String> {
    vec!["rank".to_string(), "key".to_string(), "count".to_string()]
}

fn build_rows(report: &Report) -> Vec<Vec<Cell>> {
    report.ranked.entries.iter().enumerate().map(|(idx, entry)| {
        vec![
            Cell::Number((idx + 1) as f64),
            Cell::String(entry.key.clone()),
            Cell::Number(entry.count as f64),
        ]
    }).collect()
}
