//! Source tree enumeration.
//!
//! Walks the module directory and turns every regular file into an
//! [`ArchiveEntry`] whose in-archive name is its path relative to the root.
//! Directories produce no entries; symlinks and special files are reported
//! as skipped.

use crate::PackError;
use crate::Result;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// The directory whose contents are packaged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceTree {
    root: PathBuf,
}

impl SourceTree {
    /// Creates a source tree rooted at `root`. The directory is not touched.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns `true` if the root exists and is a directory.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.root.is_dir()
    }

    /// Fails with `MissingSourceTree` unless the root is a directory.
    pub fn ensure_exists(&self) -> Result<()> {
        if self.exists() {
            Ok(())
        } else {
            Err(PackError::MissingSourceTree {
                path: self.root.clone(),
            })
        }
    }

    /// Enumerates all regular files below the root.
    ///
    /// Entries are returned in file-name order within each directory, so
    /// repeated walks over an unchanged tree yield the same sequence.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use modpack_core::SourceTree;
    ///
    /// let tree = SourceTree::new("module");
    /// let listing = tree.collect_entries()?;
    /// for entry in &listing.entries {
    ///     println!("{}", entry.archive_name);
    /// }
    /// # Ok::<(), modpack_core::PackError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the root is missing, a directory cannot be read,
    /// or a file name is not valid UTF-8.
    pub fn collect_entries(&self) -> Result<SourceListing> {
        self.ensure_exists()?;

        let mut listing = SourceListing::default();
        let walker = WalkDir::new(&self.root)
            .min_depth(1)
            .follow_links(false)
            .sort_by_file_name();

        for entry in walker {
            let entry = entry.map_err(|e| {
                PackError::Io(std::io::Error::other(format!("walkdir error: {e}")))
            })?;
            let file_type = entry.file_type();

            if file_type.is_dir() {
                continue;
            }
            if !file_type.is_file() {
                tracing::debug!(path = %entry.path().display(), "skipping non-regular entry");
                listing.skipped.push(entry.path().to_path_buf());
                continue;
            }

            let metadata = entry.metadata().map_err(|e| {
                PackError::Io(std::io::Error::other(format!(
                    "cannot read metadata for {}: {e}",
                    entry.path().display()
                )))
            })?;
            let archive_name = archive_name_for(entry.path(), &self.root)?;

            listing.entries.push(ArchiveEntry {
                path: entry.path().to_path_buf(),
                archive_name,
                size: metadata.len(),
            });
        }

        Ok(listing)
    }
}

/// One regular file scheduled for inclusion in the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Path of the file on disk.
    pub path: PathBuf,

    /// Forward-slash separated path relative to the source root.
    pub archive_name: String,

    /// Size in bytes at enumeration time.
    pub size: u64,
}

/// Everything found while walking a source tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceListing {
    /// Regular files, in walk order.
    pub entries: Vec<ArchiveEntry>,

    /// Symlinks and special files that were not packaged.
    pub skipped: Vec<PathBuf>,
}

impl SourceListing {
    /// Returns the total size of all entries in bytes.
    #[must_use]
    pub fn total_size(&self) -> u64 {
        self.entries.iter().map(|e| e.size).sum()
    }
}

/// Computes the in-archive name of `path` relative to `root`.
///
/// Components are joined with `/` regardless of the host separator.
///
/// # Examples
///
/// ```
/// use modpack_core::walker::archive_name_for;
/// use std::path::Path;
///
/// let name = archive_name_for(Path::new("module/sub/b.txt"), Path::new("module"))?;
/// assert_eq!(name, "sub/b.txt");
/// # Ok::<(), modpack_core::PackError>(())
/// ```
pub fn archive_name_for(path: &Path, root: &Path) -> Result<String> {
    let relative = path.strip_prefix(root).map_err(|_| {
        PackError::Io(std::io::Error::other(format!(
            "{} is not inside {}",
            path.display(),
            root.display()
        )))
    })?;

    let mut parts = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(part) => {
                let part = part.to_str().ok_or_else(|| {
                    PackError::Io(std::io::Error::other(format!(
                        "path is not valid UTF-8: {}",
                        path.display()
                    )))
                })?;
                parts.push(part);
            }
            Component::CurDir => {}
            _ => {
                return Err(PackError::Io(std::io::Error::other(format!(
                    "unexpected path component in {}",
                    path.display()
                ))));
            }
        }
    }

    if parts.is_empty() {
        return Err(PackError::Io(std::io::Error::other(format!(
            "{} has no name relative to {}",
            path.display(),
            root.display()
        ))));
    }

    Ok(parts.join("/"))
}
