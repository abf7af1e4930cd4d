//! Packaging library for the OukaroManager KernelSU module.
//!
//! `modpack-core` zips every regular file below the `module` directory into
//! a timestamped, deflate-compressed archive named
//! `oukaromanager_v1.0.0_YYYYMMDD_HHMMSS.zip`, then reads the archive back
//! to confirm it. Old archives can be removed first with [`clean_archives`].
//!
//! # Examples
//!
//! ```no_run
//! use modpack_core::PackConfig;
//! use modpack_core::Packager;
//! use modpack_core::clean_archives;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! clean_archives(".")?;
//! let result = Packager::new(PackConfig::default()).build()?;
//! println!("Packaged {} files into {}", result.entry_count, result.archive_name);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod clean;
pub mod config;
pub mod error;
pub mod inspect;
pub mod naming;
pub mod packager;
pub mod report;
pub mod walker;

pub use clean::clean_archives;
pub use config::PackConfig;
pub use error::PackError;
pub use error::Result;
pub use inspect::ArchiveSummary;
pub use inspect::verify_archive;
pub use naming::ArchiveName;
pub use naming::Clock;
pub use naming::FixedClock;
pub use naming::SystemClock;
pub use packager::Packager;
pub use report::BuildResult;
pub use report::CleanReport;
pub use report::NoopProgress;
pub use report::ProgressCallback;
pub use walker::ArchiveEntry;
pub use walker::SourceListing;
pub use walker::SourceTree;
