//! Output formatter trait for CLI results.

use anyhow::Result;
use modpack_core::BuildResult;
use modpack_core::CleanReport;
use serde::Serialize;
use std::path::Path;

/// Common output formatter trait
pub trait OutputFormatter {
    /// Announce the run before anything is checked
    fn format_start(&self);

    /// Announce the archive about to be written
    fn format_build_start(&self, archive_name: &str, total: usize);

    /// Report one file added to the archive
    fn format_entry_added(&self, path: &Path);

    /// Announce read-back verification
    fn format_verifying(&self, archive: &Path);

    /// Format build result
    fn format_build_result(&self, result: &BuildResult) -> Result<()>;

    /// Announce the clean step
    fn format_clean_start(&self);

    /// Format clean result
    fn format_clean_report(&self, report: &CleanReport) -> Result<()>;

    /// Format error message
    fn format_error(&self, error: &anyhow::Error);

    /// Format warning message
    fn format_warning(&self, message: &str);
}

/// Generic JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub operation: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(operation: impl Into<String>, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Success,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(operation: impl Into<String>, error: impl Into<String>) -> JsonOutput<()> {
        JsonOutput {
            operation: operation.into(),
            status: Status::Error,
            data: None,
            error: Some(error.into()),
        }
    }
}
