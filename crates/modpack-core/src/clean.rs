//! Removal of previously built archives.

use crate::Result;
use crate::config::ARCHIVE_EXTENSION;
use crate::report::CleanReport;
use std::fs;
use std::path::Path;

/// Returns `true` if `file_name` looks like an archive the clean step should
/// remove: any name ending in `.zip`, hidden names included.
///
/// # Examples
///
/// ```
/// use modpack_core::clean::is_archive_file_name;
///
/// assert!(is_archive_file_name("oukaromanager_v1.0.0_20250309_140507.zip"));
/// assert!(is_archive_file_name("other.zip"));
/// assert!(!is_archive_file_name("notes.txt"));
/// assert!(is_archive_file_name(".old.zip"));
/// assert!(is_archive_file_name(".zip"));
/// assert!(!is_archive_file_name("ARCHIVE.ZIP"));
/// assert!(!is_archive_file_name("zip"));
/// ```
#[must_use]
pub fn is_archive_file_name(file_name: &str) -> bool {
    file_name
        .strip_suffix(ARCHIVE_EXTENSION)
        .is_some_and(|stem| stem.ends_with('.'))
}

/// Deletes every `*.zip` file directly inside `dir`.
///
/// Deletion is best-effort: a file that cannot be removed is recorded in
/// [`CleanReport::failed`] and the remaining files are still processed.
/// Subdirectories are neither descended into nor removed.
///
/// # Examples
///
/// ```no_run
/// use modpack_core::clean_archives;
///
/// let report = clean_archives(".")?;
/// for path in &report.deleted {
///     println!("Deleted {}", path.display());
/// }
/// # Ok::<(), modpack_core::PackError>(())
/// ```
///
/// # Errors
///
/// Returns an error only if `dir` itself cannot be read.
pub fn clean_archives<P: AsRef<Path>>(dir: P) -> Result<CleanReport> {
    let dir = dir.as_ref();
    let mut candidates = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            continue;
        }
        if entry.file_name().to_str().is_some_and(is_archive_file_name) {
            candidates.push(entry.path());
        }
    }
    candidates.sort();

    let mut report = CleanReport::default();
    for path in candidates {
        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "deleted archive");
                report.deleted.push(path);
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to delete archive");
                report.failed.push((path, e.to_string()));
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_clean_removes_only_zip_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("old_one.zip"), "x").unwrap();
        fs::write(temp.path().join("old_two.zip"), "y").unwrap();
        fs::write(temp.path().join(".hidden.zip"), "h").unwrap();
        fs::write(temp.path().join("keep.txt"), "z").unwrap();
        fs::write(temp.path().join("keep.zip.bak"), "z").unwrap();

        let report = clean_archives(temp.path()).unwrap();

        assert_eq!(
            report.deleted,
            [
                temp.path().join(".hidden.zip"),
                temp.path().join("old_one.zip"),
                temp.path().join("old_two.zip")
            ]
        );
        assert!(report.is_complete());
        assert!(!temp.path().join(".hidden.zip").exists());
        assert!(temp.path().join("keep.txt").exists());
        assert!(temp.path().join("keep.zip.bak").exists());
        assert!(!temp.path().join("old_one.zip").exists());
    }

    #[test]
    fn test_clean_does_not_recurse() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("module")).unwrap();
        fs::write(temp.path().join("module/inner.zip"), "x").unwrap();
        fs::create_dir(temp.path().join("dir.zip")).unwrap();

        let report = clean_archives(temp.path()).unwrap();

        assert!(report.deleted.is_empty());
        assert!(temp.path().join("module/inner.zip").exists());
        assert!(temp.path().join("dir.zip").is_dir());
    }

    #[test]
    fn test_clean_empty_directory() {
        let temp = TempDir::new().unwrap();
        let report = clean_archives(temp.path()).unwrap();
        assert!(report.deleted.is_empty());
        assert!(report.is_complete());
    }

    #[test]
    fn test_clean_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        assert!(clean_archives(temp.path().join("absent")).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_clean_continues_after_failure() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.zip"), "x").unwrap();
        fs::write(temp.path().join("b.zip"), "y").unwrap();
        let perms = fs::metadata(temp.path()).unwrap().permissions();
        fs::set_permissions(temp.path(), fs::Permissions::from_mode(0o555)).unwrap();

        let report = clean_archives(temp.path()).unwrap();
        fs::set_permissions(temp.path(), perms).unwrap();

        // Root ignores directory permissions and deletes both.
        assert_eq!(report.deleted.len() + report.failed.len(), 2);
        if !report.failed.is_empty() {
            assert_eq!(report.failed.len(), 2);
            assert!(temp.path().join("a.zip").exists());
            assert!(temp.path().join("b.zip").exists());
        }
    }
}
