//! JSON output formatter for machine-readable results.
//!
//! Emits one document per completed phase; progress events are silent so
//! stdout stays parseable.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use modpack_core::BuildResult;
use modpack_core::CleanReport;
use serde::Serialize;
use std::io::Write;
use std::io::{self};
use std::path::Path;

pub struct JsonFormatter;

#[derive(Debug, Serialize)]
struct BuildOutput {
    archive_path: String,
    archive_name: String,
    entry_count: usize,
    archive_size: u64,
    files_added: usize,
    bytes_read: u64,
    duration_ms: u128,
    warnings: Vec<String>,
}

impl From<&BuildResult> for BuildOutput {
    fn from(result: &BuildResult) -> Self {
        Self {
            archive_path: result.archive_path.display().to_string(),
            archive_name: result.archive_name.clone(),
            entry_count: result.entry_count,
            archive_size: result.archive_size,
            files_added: result.files_added,
            bytes_read: result.bytes_read,
            duration_ms: result.duration.as_millis(),
            warnings: result.warnings.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
struct CleanOutput {
    deleted: Vec<String>,
    failed: Vec<CleanFailure>,
}

#[derive(Debug, Serialize)]
struct CleanFailure {
    path: String,
    reason: String,
}

impl From<&CleanReport> for CleanOutput {
    fn from(report: &CleanReport) -> Self {
        Self {
            deleted: report
                .deleted
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            failed: report
                .failed
                .iter()
                .map(|(path, reason)| CleanFailure {
                    path: path.display().to_string(),
                    reason: reason.clone(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
struct WarningOutput {
    message: String,
}

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_start(&self) {}

    fn format_build_start(&self, _archive_name: &str, _total: usize) {}

    fn format_entry_added(&self, _path: &Path) {}

    fn format_verifying(&self, _archive: &Path) {}

    fn format_build_result(&self, result: &BuildResult) -> Result<()> {
        let output = JsonOutput::success("build", BuildOutput::from(result));
        Self::output(&output)
    }

    fn format_clean_start(&self) {}

    fn format_clean_report(&self, report: &CleanReport) -> Result<()> {
        let output = JsonOutput::success("clean", CleanOutput::from(report));
        Self::output(&output)
    }

    fn format_error(&self, error: &anyhow::Error) {
        let output = JsonOutput::<()>::error("modpack", format!("{error:#}"));
        let _ = Self::output(&output);
    }

    fn format_warning(&self, message: &str) {
        let output = JsonOutput::success(
            "warning",
            WarningOutput {
                message: message.to_string(),
            },
        );
        let _ = Self::output(&output);
    }
}
