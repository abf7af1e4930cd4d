//! Module archive creation.
//!
//! A build runs through three phases: the source tree is validated, every
//! regular file is written into a deflate-compressed ZIP, and the closed
//! archive is read back to confirm its entry count. A failure while writing
//! removes the partial archive before the error is returned.

use crate::PackError;
use crate::ProgressCallback;
use crate::Result;
use crate::config::PackConfig;
use crate::inspect::ArchiveSummary;
use crate::inspect::verify_archive;
use crate::naming::ArchiveName;
use crate::naming::Clock;
use crate::naming::SystemClock;
use crate::report::BuildResult;
use crate::report::NoopProgress;
use crate::walker::ArchiveEntry;
use crate::walker::SourceTree;
use std::fs;
use std::fs::File;
use std::io::BufWriter;
use std::io::Read;
use std::io::Seek;
use std::io::Write;
use std::path::Path;
use std::time::Instant;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Builds the module archive.
///
/// # Examples
///
/// ```no_run
/// use modpack_core::PackConfig;
/// use modpack_core::Packager;
///
/// let packager = Packager::new(PackConfig::default());
/// let result = packager.build()?;
/// println!(
///     "{}: {} files, {:.1} KB",
///     result.archive_name,
///     result.entry_count,
///     result.archive_size_kib()
/// );
/// # Ok::<(), modpack_core::PackError>(())
/// ```
pub struct Packager {
    config: PackConfig,
    clock: Box<dyn Clock>,
}

impl Packager {
    /// Creates a packager that names archives after the system clock.
    #[must_use]
    pub fn new(config: PackConfig) -> Self {
        Self {
            config,
            clock: Box::new(SystemClock),
        }
    }

    /// Replaces the clock used for archive naming.
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &PackConfig {
        &self.config
    }

    /// Builds the archive without progress reporting.
    ///
    /// # Errors
    ///
    /// See [`Packager::build_with_progress`].
    pub fn build(&self) -> Result<BuildResult> {
        self.build_with_progress(&mut NoopProgress)
    }

    /// Builds the archive, reporting each phase and file to `progress`.
    ///
    /// # Errors
    ///
    /// - `InvalidConfiguration` if the output directory is inside the source
    ///   directory
    /// - `MissingSourceTree` if the source directory does not exist; no
    ///   archive is created
    /// - `BuildFailed` if reading the source tree or writing the archive
    ///   fails, or if the archive is missing or incomplete when read back
    pub fn build_with_progress(&self, progress: &mut dyn ProgressCallback) -> Result<BuildResult> {
        let start = Instant::now();
        self.config.validate()?;

        let tree = SourceTree::new(&self.config.source_dir);
        tree.ensure_exists()?;

        let name = ArchiveName::from_clock(self.clock.as_ref());
        let archive_path = self.config.output_dir.join(name.file_name());
        tracing::info!(
            archive = %archive_path.display(),
            timestamp = %name.timestamp(),
            "building module archive"
        );

        let listing = tree
            .collect_entries()
            .map_err(|e| PackError::build_failed(&archive_path, e))?;
        tracing::debug!(
            files = listing.entries.len(),
            bytes = listing.total_size(),
            "collected source tree"
        );

        let mut result = BuildResult {
            archive_path: archive_path.clone(),
            archive_name: name.file_name(),
            ..BuildResult::default()
        };
        for skipped in &listing.skipped {
            result.add_warning(format!("Skipped non-regular file: {}", skipped.display()));
        }

        if let Err(e) = write_archive(&archive_path, &listing.entries, &mut result, progress) {
            discard_partial(&archive_path);
            return Err(PackError::build_failed(&archive_path, e));
        }
        progress.on_complete();

        progress.on_verify_start(&archive_path);
        let summary = verify_written(&archive_path, result.files_added)?;

        result.entry_count = summary.entry_count();
        result.archive_size = summary.size;
        result.duration = start.elapsed();
        tracing::info!(
            archive = %archive_path.display(),
            entries = result.entry_count,
            bytes = result.archive_size,
            "module archive verified"
        );

        Ok(result)
    }
}

/// Writes all entries to a new archive at `archive_path`.
///
/// The file is flushed and closed before this returns, on success and on
/// error alike.
fn write_archive(
    archive_path: &Path,
    entries: &[ArchiveEntry],
    result: &mut BuildResult,
    progress: &mut dyn ProgressCallback,
) -> Result<()> {
    let file = File::create(archive_path)?;
    progress.on_build_start(archive_path, entries.len());

    let mut zip = ZipWriter::new(BufWriter::new(file));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut buffer = vec![0u8; COPY_BUFFER_SIZE];

    for (idx, entry) in entries.iter().enumerate() {
        let display_path = Path::new(&entry.archive_name);
        progress.on_entry_start(display_path, entries.len(), idx + 1);
        let bytes = add_file_to_zip(&mut zip, entry, &options, progress, &mut buffer)?;
        result.files_added += 1;
        result.bytes_read += bytes;
        progress.on_entry_complete(display_path);
    }

    let mut writer = zip
        .finish()
        .map_err(|e| std::io::Error::other(format!("failed to finish ZIP archive: {e}")))?;
    writer.flush()?;

    Ok(())
}

/// Reopens the closed archive and checks that it holds `expected` entries.
fn verify_written(archive_path: &Path, expected: usize) -> Result<ArchiveSummary> {
    if !archive_path.is_file() {
        return Err(PackError::build_failed(
            archive_path,
            "archive does not exist after writing",
        ));
    }
    let summary =
        verify_archive(archive_path).map_err(|e| PackError::build_failed(archive_path, e))?;
    if summary.entry_count() != expected {
        return Err(PackError::build_failed(
            archive_path,
            format!(
                "archive holds {} entries, expected {expected}",
                summary.entry_count()
            ),
        ));
    }
    Ok(summary)
}

/// Adds one file, returning the number of source bytes copied.
fn add_file_to_zip<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    entry: &ArchiveEntry,
    options: &SimpleFileOptions,
    progress: &mut dyn ProgressCallback,
    buffer: &mut [u8],
) -> Result<u64> {
    let mut file = File::open(&entry.path)?;

    #[cfg(unix)]
    let file_options = {
        use std::os::unix::fs::PermissionsExt;
        options.unix_permissions(file.metadata()?.permissions().mode())
    };
    #[cfg(not(unix))]
    let file_options = *options;
    let file_options = file_options.large_file(entry.size >= u64::from(u32::MAX));

    zip.start_file(entry.archive_name.as_str(), file_options)
        .map_err(|e| std::io::Error::other(format!("failed to start file in ZIP: {e}")))?;

    let mut bytes_written = 0u64;
    loop {
        let bytes_read = file.read(buffer)?;
        if bytes_read == 0 {
            break;
        }
        zip.write_all(&buffer[..bytes_read])?;
        bytes_written += bytes_read as u64;
        progress.on_bytes_written(bytes_read as u64);
    }

    tracing::debug!(entry = %entry.archive_name, bytes = bytes_written, "added file");
    Ok(bytes_written)
}

fn discard_partial(archive_path: &Path) {
    if let Err(e) = fs::remove_file(archive_path)
        && e.kind() != std::io::ErrorKind::NotFound
    {
        tracing::warn!(
            archive = %archive_path.display(),
            error = %e,
            "failed to remove partial archive"
        );
    }
}
