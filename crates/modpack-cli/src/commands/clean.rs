//! Clean command implementation.

use crate::output::OutputFormatter;
use anyhow::Context;
use anyhow::Result;
use modpack_core::CleanReport;
use modpack_core::clean_archives;
use std::path::Path;

pub fn execute(dir: &Path, formatter: &dyn OutputFormatter) -> Result<()> {
    formatter.format_clean_start();

    let report = clean_archives(dir)
        .with_context(|| format!("failed to clean archives in '{}'", dir.display()))?;

    report_failures(&report, formatter);
    formatter.format_clean_report(&report)?;

    Ok(())
}

/// Surfaces each file that could not be deleted; the build still runs.
fn report_failures(report: &CleanReport, formatter: &dyn OutputFormatter) {
    for (path, reason) in &report.failed {
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        formatter.format_warning(&format!("Could not delete {name}: {reason}"));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use modpack_core::BuildResult;
    use std::cell::RefCell;
    use std::path::PathBuf;

    #[derive(Default)]
    struct Warnings {
        messages: RefCell<Vec<String>>,
    }

    impl OutputFormatter for Warnings {
        fn format_start(&self) {}

        fn format_build_start(&self, _archive_name: &str, _total: usize) {}

        fn format_entry_added(&self, _path: &Path) {}

        fn format_verifying(&self, _archive: &Path) {}

        fn format_build_result(&self, _result: &BuildResult) -> Result<()> {
            Ok(())
        }

        fn format_clean_start(&self) {}

        fn format_clean_report(&self, _report: &CleanReport) -> Result<()> {
            Ok(())
        }

        fn format_error(&self, _error: &anyhow::Error) {}

        fn format_warning(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }
    }

    #[test]
    fn test_failures_become_warnings() {
        let report = CleanReport {
            deleted: vec![PathBuf::from("./a.zip")],
            failed: vec![
                (PathBuf::from("./b.zip"), "denied".to_string()),
                (PathBuf::from("./c.zip"), "busy".to_string()),
            ],
        };
        let formatter = Warnings::default();

        report_failures(&report, &formatter);

        assert_eq!(
            *formatter.messages.borrow(),
            ["Could not delete b.zip: denied", "Could not delete c.zip: busy"]
        );
    }

    #[test]
    fn test_complete_clean_has_no_warnings() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(temp.path().join("old.zip"), "x").unwrap();
        let formatter = Warnings::default();

        execute(temp.path(), &formatter).unwrap();

        assert!(formatter.messages.borrow().is_empty());
        assert!(!temp.path().join("old.zip").exists());
    }
}
