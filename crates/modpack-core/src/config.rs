//! Packaging configuration.
//!
//! The product identity is fixed at compile time. Only the directories the
//! packager reads from and writes to can be changed, which keeps the CLI
//! working-directory driven while letting tests run against temp dirs.

use crate::PackError;
use crate::Result;
use std::path::Path;
use std::path::PathBuf;

/// Product identifier used as the archive name prefix.
pub const PRODUCT_NAME: &str = "oukaromanager";

/// Module version embedded in the archive name.
pub const PRODUCT_VERSION: &str = "v1.0.0";

/// Name of the directory whose contents are packaged.
pub const SOURCE_DIR_NAME: &str = "module";

/// File extension of produced archives, without the dot.
pub const ARCHIVE_EXTENSION: &str = "zip";

/// Where the packager reads the module tree and writes the archive.
///
/// # Examples
///
/// ```
/// use modpack_core::PackConfig;
/// use std::path::Path;
///
/// let config = PackConfig::in_dir("/work");
/// assert_eq!(config.source_dir, Path::new("/work/module"));
/// assert_eq!(config.output_dir, Path::new("/work"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackConfig {
    /// Root of the module tree.
    ///
    /// Default: `module`.
    pub source_dir: PathBuf,

    /// Directory the archive is written to.
    ///
    /// Default: `.` (the current working directory).
    pub output_dir: PathBuf,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self::in_dir(".")
    }
}

impl PackConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration rooted at `work_dir`: the module tree is read
    /// from `work_dir/module` and the archive is written to `work_dir`.
    #[must_use]
    pub fn in_dir(work_dir: impl AsRef<Path>) -> Self {
        let work_dir = work_dir.as_ref();
        Self {
            source_dir: work_dir.join(SOURCE_DIR_NAME),
            output_dir: work_dir.to_path_buf(),
        }
    }

    /// Sets the source directory.
    #[must_use]
    pub fn with_source_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.source_dir = dir.into();
        self
    }

    /// Sets the output directory.
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the output directory lies inside the source
    /// directory, since the archive would then be walked while it is written.
    pub fn validate(&self) -> Result<()> {
        if self.output_dir.starts_with(&self.source_dir) {
            return Err(PackError::InvalidConfiguration {
                reason: format!(
                    "output directory {} is inside source directory {}",
                    self.output_dir.display(),
                    self.source_dir.display()
                ),
            });
        }
        Ok(())
    }
}
