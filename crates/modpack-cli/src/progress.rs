//! Build progress reporting through the active output formatter.

use crate::output::OutputFormatter;
use modpack_core::ProgressCallback;
use std::path::Path;

/// Forwards packager events to an `OutputFormatter`, one line per file.
pub struct FormatterProgress<'a> {
    formatter: &'a dyn OutputFormatter,
    bytes_written: u64,
}

impl<'a> FormatterProgress<'a> {
    pub fn new(formatter: &'a dyn OutputFormatter) -> Self {
        Self {
            formatter,
            bytes_written: 0,
        }
    }
}

impl ProgressCallback for FormatterProgress<'_> {
    fn on_build_start(&mut self, archive: &Path, total: usize) {
        let name = archive
            .file_name()
            .map_or_else(|| archive.display().to_string(), |n| n.to_string_lossy().into_owned());
        self.formatter.format_build_start(&name, total);
    }

    fn on_entry_start(&mut self, _path: &Path, _total: usize, _current: usize) {
        // Reported on completion so a failed file is never shown as added
    }

    fn on_bytes_written(&mut self, bytes: u64) {
        self.bytes_written += bytes;
    }

    fn on_entry_complete(&mut self, path: &Path) {
        self.formatter.format_entry_added(path);
    }

    fn on_complete(&mut self) {
        tracing::debug!(bytes = self.bytes_written, "archive written");
    }

    fn on_verify_start(&mut self, archive: &Path) {
        self.formatter.format_verifying(archive);
    }
}
