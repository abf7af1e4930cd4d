//! Build and clean reporting.

use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

/// Result of a successful build.
///
/// Produced after the archive has been closed and read back.
#[derive(Debug, Clone, Default)]
pub struct BuildResult {
    /// Full path of the written archive.
    pub archive_path: PathBuf,

    /// File name of the archive.
    pub archive_name: String,

    /// Number of entries found when the archive was read back.
    pub entry_count: usize,

    /// Size of the archive file in bytes.
    pub archive_size: u64,

    /// Number of regular files written to the archive.
    pub files_added: usize,

    /// Total bytes read from the source tree (uncompressed).
    pub bytes_read: u64,

    /// Duration of the build, verification included.
    pub duration: Duration,

    /// Warnings generated during the build.
    pub warnings: Vec<String>,
}

impl BuildResult {
    /// Adds a warning message to the result.
    pub fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    /// Returns whether any warnings were generated.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Returns the archive size in KiB.
    ///
    /// # Examples
    ///
    /// ```
    /// use modpack_core::BuildResult;
    ///
    /// let result = BuildResult {
    ///     archive_size: 1536,
    ///     ..BuildResult::default()
    /// };
    /// assert_eq!(result.archive_size_kib(), 1.5);
    /// ```
    #[must_use]
    pub fn archive_size_kib(&self) -> f64 {
        self.archive_size as f64 / 1024.0
    }
}

/// Outcome of the clean step.
#[derive(Debug, Clone, Default)]
pub struct CleanReport {
    /// Archives that were deleted.
    pub deleted: Vec<PathBuf>,

    /// Archives that could not be deleted, with the reason.
    pub failed: Vec<(PathBuf, String)>,
}

impl CleanReport {
    /// Returns `true` if every matching archive was deleted.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Callback trait for progress reporting while an archive is built.
///
/// # Examples
///
/// ```
/// use modpack_core::ProgressCallback;
/// use std::path::Path;
///
/// struct PrintProgress;
///
/// impl ProgressCallback for PrintProgress {
///     fn on_entry_start(&mut self, path: &Path, total: usize, current: usize) {
///         println!("[{current}/{total}] {}", path.display());
///     }
///
///     fn on_bytes_written(&mut self, _bytes: u64) {}
///
///     fn on_entry_complete(&mut self, _path: &Path) {}
///
///     fn on_complete(&mut self) {
///         println!("done");
///     }
/// }
/// ```
pub trait ProgressCallback {
    /// Called once the archive file has been created, before any file is
    /// added.
    fn on_build_start(&mut self, _archive: &Path, _total: usize) {}

    /// Called before a file is added.
    ///
    /// # Arguments
    ///
    /// * `path` - Path of the entry inside the archive
    /// * `total` - Total number of files to add
    /// * `current` - Current file number (1-indexed)
    fn on_entry_start(&mut self, path: &Path, total: usize, current: usize);

    /// Called for each chunk of source bytes copied into the archive.
    fn on_bytes_written(&mut self, bytes: u64);

    /// Called once a file has been fully added.
    fn on_entry_complete(&mut self, path: &Path);

    /// Called once after the archive has been finished and closed.
    fn on_complete(&mut self);

    /// Called before the closed archive is read back.
    fn on_verify_start(&mut self, _archive: &Path) {}
}

/// No-op implementation of `ProgressCallback`.
#[derive(Debug, Default)]
pub struct NoopProgress;

impl ProgressCallback for NoopProgress {
    fn on_entry_start(&mut self, _path: &Path, _total: usize, _current: usize) {}

    fn on_bytes_written(&mut self, _bytes: u64) {}

    fn on_entry_complete(&mut self, _path: &Path) {}

    fn on_complete(&mut self) {}
}
