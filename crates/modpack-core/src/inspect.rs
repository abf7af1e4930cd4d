//! Read-back of finished archives.

use crate::PackError;
use crate::Result;
use std::fs::File;
use std::path::Path;

/// What a finished archive contains.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArchiveSummary {
    /// Entry names, in central-directory order.
    pub entries: Vec<String>,

    /// Size of the archive file in bytes.
    pub size: u64,
}

impl ArchiveSummary {
    /// Returns the number of entries.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

/// Opens an archive and lists its entries without extracting anything.
///
/// # Examples
///
/// ```no_run
/// use modpack_core::verify_archive;
///
/// let summary = verify_archive("oukaromanager_v1.0.0_20250309_140507.zip")?;
/// println!("{} files, {} bytes", summary.entry_count(), summary.size);
/// # Ok::<(), modpack_core::PackError>(())
/// ```
///
/// # Errors
///
/// Returns `Io` if the file cannot be opened and `InvalidArchive` if it is
/// not a readable ZIP archive.
pub fn verify_archive<P: AsRef<Path>>(archive_path: P) -> Result<ArchiveSummary> {
    let archive_path = archive_path.as_ref();
    let file = File::open(archive_path)?;
    let size = file.metadata()?.len();

    let mut archive = zip::ZipArchive::new(file)
        .map_err(|e| PackError::InvalidArchive(format!("failed to open ZIP archive: {e}")))?;

    let mut entries = Vec::with_capacity(archive.len());
    for i in 0..archive.len() {
        let entry = archive
            .by_index(i)
            .map_err(|e| PackError::InvalidArchive(format!("failed to read ZIP entry: {e}")))?;
        entries.push(entry.name().to_string());
    }

    Ok(ArchiveSummary { entries, size })
}
