//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;
use modpack_core::BuildResult;
use modpack_core::CleanReport;
use std::path::Path;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
    err_term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
            err_term: Term::stderr(),
        }
    }

    fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;

        if bytes >= GB {
            format!("{:.1} GB", bytes as f64 / GB as f64)
        } else if bytes >= MB {
            format!("{:.1} MB", bytes as f64 / MB as f64)
        } else if bytes >= KB {
            format!("{:.1} KB", bytes as f64 / KB as f64)
        } else {
            format!("{bytes} B")
        }
    }

    fn format_number(n: usize) -> String {
        let s = n.to_string();
        let mut result = String::new();
        let mut count = 0;

        for c in s.chars().rev() {
            if count == 3 {
                result.push(',');
                count = 0;
            }
            result.push(c);
            count += 1;
        }

        result.chars().rev().collect()
    }

    fn file_name(path: &Path) -> String {
        path.file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
    }

    fn success_line(&self, message: &str) {
        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {message}", style("✓").green().bold()));
        } else {
            let _ = self.term.write_line(message);
        }
    }

    fn phase_line(&self, message: &str) {
        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {message}", style("»").cyan().bold()));
        } else {
            let _ = self.term.write_line(message);
        }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_start(&self) {
        if self.quiet {
            return;
        }

        self.phase_line("Starting OukaroManager module build");
    }

    fn format_build_start(&self, archive_name: &str, total: usize) {
        if self.quiet {
            return;
        }

        self.phase_line(&format!("Building package: {archive_name}"));
        if self.verbose {
            let _ = self
                .term
                .write_line(&format!("  Files to add: {}", Self::format_number(total)));
        }
    }

    fn format_entry_added(&self, path: &Path) {
        if self.quiet {
            return;
        }

        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("  {} {}", style("+").green(), path.display()));
        } else {
            let _ = self.term.write_line(&format!("  + {}", path.display()));
        }
    }

    fn format_verifying(&self, archive: &Path) {
        if self.quiet {
            return;
        }

        self.phase_line(&format!("Verifying {}", Self::file_name(archive)));
    }

    fn format_build_result(&self, result: &BuildResult) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        self.success_line(&format!("Module package created: {}", result.archive_name));
        let _ = self.term.write_line(&format!(
            "  Files:            {}",
            Self::format_number(result.entry_count)
        ));
        let _ = self.term.write_line(&format!(
            "  Archive size:     {}",
            Self::format_size(result.archive_size)
        ));

        if self.verbose {
            let _ = self.term.write_line(&format!(
                "  Source size:      {}",
                Self::format_size(result.bytes_read)
            ));
            let _ = self
                .term
                .write_line(&format!("  Duration:         {:?}", result.duration));
        }

        if result.has_warnings() {
            let _ = self.term.write_line("");
            if self.use_colors {
                let _ = self
                    .term
                    .write_line(&format!("{}", style("Warnings:").yellow().bold()));
            } else {
                let _ = self.term.write_line("Warnings:");
            }
            for warning in &result.warnings {
                let _ = self.term.write_line(&format!("  - {warning}"));
            }
        }

        Ok(())
    }

    fn format_clean_start(&self) {
        if self.quiet {
            return;
        }

        self.phase_line("Cleaning old ZIP files...");
    }

    fn format_clean_report(&self, report: &CleanReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        for path in &report.deleted {
            let _ = self
                .term
                .write_line(&format!("  Deleted {}", Self::file_name(path)));
        }
        self.success_line(&format!(
            "Cleanup complete ({} removed)",
            Self::format_number(report.deleted.len())
        ));

        Ok(())
    }

    fn format_error(&self, error: &anyhow::Error) {
        // Always show errors, even in quiet mode
        if self.use_colors {
            let _ = self
                .err_term
                .write_line(&format!("{} {error:?}", style("ERROR:").red().bold()));
        } else {
            let _ = self.err_term.write_line(&format!("ERROR: {error:?}"));
        }
    }

    fn format_warning(&self, message: &str) {
        if self.quiet {
            return;
        }

        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {message}", style("⚠").yellow().bold()));
        } else {
            let _ = self.term.write_line(&format!("WARNING: {message}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size_bytes() {
        assert_eq!(HumanFormatter::format_size(0), "0 B");
        assert_eq!(HumanFormatter::format_size(512), "512 B");
        assert_eq!(HumanFormatter::format_size(1023), "1023 B");
    }

    #[test]
    fn test_format_size_kilobytes() {
        assert_eq!(HumanFormatter::format_size(1024), "1.0 KB");
        assert_eq!(HumanFormatter::format_size(1536), "1.5 KB");
        assert_eq!(HumanFormatter::format_size(1126), "1.1 KB");
    }

    #[test]
    fn test_format_size_larger_units() {
        assert_eq!(HumanFormatter::format_size(1024 * 1024), "1.0 MB");
        assert_eq!(HumanFormatter::format_size(1536 * 1024 * 1024), "1.5 GB");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(HumanFormatter::format_number(0), "0");
        assert_eq!(HumanFormatter::format_number(999), "999");
        assert_eq!(HumanFormatter::format_number(1000), "1,000");
        assert_eq!(HumanFormatter::format_number(1_234_567), "1,234,567");
    }

    #[test]
    fn test_file_name() {
        assert_eq!(
            HumanFormatter::file_name(Path::new("./old.zip")),
            "old.zip"
        );
        assert_eq!(HumanFormatter::file_name(Path::new("/")), "/");
    }
}
