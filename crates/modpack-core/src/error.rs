//! Error types for module packaging operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `PackError`.
pub type Result<T> = std::result::Result<T, PackError>;

/// Errors that can occur while cleaning, building or verifying an archive.
#[derive(Error, Debug)]
pub enum PackError {
    /// The source directory does not exist or is not a directory.
    #[error("source directory not found: {path}")]
    MissingSourceTree {
        /// The expected source directory.
        path: PathBuf,
    },

    /// The archive could not be written or did not survive verification.
    #[error("failed to build archive {archive}: {reason}")]
    BuildFailed {
        /// The archive that was being built.
        archive: PathBuf,
        /// What went wrong.
        reason: String,
    },

    /// An archive could not be opened for inspection.
    #[error("invalid archive: {0}")]
    InvalidArchive(String),

    /// Configuration is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// Reason for invalid configuration.
        reason: String,
    },

    /// I/O operation failed outside of archive writing.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PackError {
    /// Wraps a failure that happened while the archive was being written.
    pub(crate) fn build_failed(archive: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::BuildFailed {
            archive: archive.into(),
            reason: reason.to_string(),
        }
    }

    /// Returns `true` if the source directory was missing.
    ///
    /// # Examples
    ///
    /// ```
    /// use modpack_core::PackError;
    /// use std::path::PathBuf;
    ///
    /// let err = PackError::MissingSourceTree {
    ///     path: PathBuf::from("module"),
    /// };
    /// assert!(err.is_missing_source());
    /// ```
    #[must_use]
    pub const fn is_missing_source(&self) -> bool {
        matches!(self, Self::MissingSourceTree { .. })
    }

    /// Returns `true` if the archive failed to materialize or verify.
    #[must_use]
    pub const fn is_build_failure(&self) -> bool {
        matches!(self, Self::BuildFailed { .. })
    }
}
