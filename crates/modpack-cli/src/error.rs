//! Error conversion utilities for CLI.
//!
//! Converts modpack-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use modpack_core::PackError;
use modpack_core::config::SOURCE_DIR_NAME;

/// Converts `PackError` to user-friendly anyhow error with context
pub fn convert_pack_error(err: PackError) -> anyhow::Error {
    match err {
        PackError::MissingSourceTree { path } => {
            anyhow!(
                "{SOURCE_DIR_NAME} directory does not exist: {}\n\
                 HINT: Run modpack from the directory that contains the '{SOURCE_DIR_NAME}' folder.",
                path.display()
            )
        }
        PackError::BuildFailed { archive, reason } => {
            anyhow!(
                "Build failed for '{}': {}\n\
                 HINT: Check free disk space and write permissions in the output directory.",
                archive.display(),
                reason
            )
        }
        PackError::InvalidConfiguration { reason } => {
            anyhow!("Invalid configuration: {reason}")
        }
        _ => anyhow::Error::from(err).context("Packaging failed"),
    }
}

/// Adds context to the result of a build or clean operation
pub fn add_pack_context<T>(result: Result<T, PackError>) -> anyhow::Result<T> {
    result.map_err(convert_pack_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_convert_missing_source() {
        let err = PackError::MissingSourceTree {
            path: PathBuf::from("./module"),
        };
        let msg = format!("{:?}", convert_pack_error(err));
        assert!(msg.contains("module directory does not exist"));
        assert!(msg.contains("./module"));
        assert!(msg.contains("HINT"));
    }

    #[test]
    fn test_convert_build_failed() {
        let err = PackError::BuildFailed {
            archive: PathBuf::from("out.zip"),
            reason: "archive does not exist after writing".to_string(),
        };
        let msg = format!("{:?}", convert_pack_error(err));
        assert!(msg.contains("Build failed"));
        assert!(msg.contains("out.zip"));
        assert!(msg.contains("does not exist after writing"));
    }

    #[test]
    fn test_convert_io_error_keeps_source() {
        let err = PackError::Io(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        let msg = format!("{:?}", convert_pack_error(err));
        assert!(msg.contains("Packaging failed"));
        assert!(msg.contains("denied"));
    }
}
