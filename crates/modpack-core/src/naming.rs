//! Timestamped archive naming.
//!
//! Names have the shape `{product}_{version}_{YYYYMMDD_HHMMSS}.zip`. The
//! timestamp comes from a [`Clock`] so that naming stays a pure function of
//! the injected time.

use crate::config::ARCHIVE_EXTENSION;
use crate::config::PRODUCT_NAME;
use crate::config::PRODUCT_VERSION;
use chrono::Local;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use std::fmt;

/// `strftime` pattern of the timestamp component.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

const TIMESTAMP_LEN: usize = 15;

/// Source of the current local time.
pub trait Clock {
    /// Returns the current wall-clock time in the local timezone.
    fn now(&self) -> NaiveDateTime;
}

/// Clock backed by the system's local time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock that always returns the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Name of an archive produced by the packager.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use modpack_core::ArchiveName;
///
/// let time = NaiveDate::from_ymd_opt(2025, 3, 9)
///     .and_then(|d| d.and_hms_opt(14, 5, 7))
///     .unwrap();
/// let name = ArchiveName::for_module(time);
/// assert_eq!(name.file_name(), "oukaromanager_v1.0.0_20250309_140507.zip");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveName {
    product: String,
    version: String,
    timestamp: NaiveDateTime,
}

impl ArchiveName {
    /// Creates a name from its parts.
    #[must_use]
    pub fn new(
        product: impl Into<String>,
        version: impl Into<String>,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            product: product.into(),
            version: version.into(),
            timestamp,
        }
    }

    /// Creates the module archive name for the given time.
    #[must_use]
    pub fn for_module(timestamp: NaiveDateTime) -> Self {
        Self::new(PRODUCT_NAME, PRODUCT_VERSION, timestamp)
    }

    /// Creates the module archive name for the clock's current time.
    #[must_use]
    pub fn from_clock(clock: &dyn Clock) -> Self {
        Self::for_module(clock.now())
    }

    /// Returns the product identifier.
    #[must_use]
    pub fn product(&self) -> &str {
        &self.product
    }

    /// Returns the version string.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns the timestamp, truncated to whole seconds on render.
    #[must_use]
    pub const fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Renders the file name, including the `.zip` extension.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!(
            "{}_{}_{}.{ARCHIVE_EXTENSION}",
            self.product,
            self.version,
            self.timestamp.format(TIMESTAMP_FORMAT)
        )
    }

    /// Parses a file name produced by [`ArchiveName::file_name`].
    ///
    /// Returns `None` if the name does not have the expected shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use modpack_core::ArchiveName;
    ///
    /// let name = ArchiveName::parse("oukaromanager_v1.0.0_20250309_140507.zip").unwrap();
    /// assert_eq!(name.product(), "oukaromanager");
    /// assert_eq!(name.version(), "v1.0.0");
    ///
    /// assert!(ArchiveName::parse("notes.zip").is_none());
    /// ```
    #[must_use]
    pub fn parse(file_name: &str) -> Option<Self> {
        let stem = file_name
            .strip_suffix(ARCHIVE_EXTENSION)?
            .strip_suffix('.')?;

        if stem.len() < TIMESTAMP_LEN + 1 || !stem.is_char_boundary(stem.len() - TIMESTAMP_LEN) {
            return None;
        }
        let (head, stamp) = stem.split_at(stem.len() - TIMESTAMP_LEN);
        let timestamp = parse_timestamp(stamp)?;

        let (product, version) = head.strip_suffix('_')?.rsplit_once('_')?;
        if product.is_empty() || version.is_empty() {
            return None;
        }

        Some(Self::new(product, version, timestamp))
    }
}

impl fmt::Display for ArchiveName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.file_name())
    }
}

/// Parses `YYYYMMDD_HHMMSS` with exact field widths.
fn parse_timestamp(stamp: &str) -> Option<NaiveDateTime> {
    let bytes = stamp.as_bytes();
    if bytes.len() != TIMESTAMP_LEN || bytes[8] != b'_' {
        return None;
    }
    if !bytes[..8].iter().chain(&bytes[9..]).all(u8::is_ascii_digit) {
        return None;
    }

    let field = |range: std::ops::Range<usize>| stamp[range].parse::<u32>().ok();
    let year = i32::try_from(field(0..4)?).ok()?;
    NaiveDate::from_ymd_opt(year, field(4..6)?, field(6..8)?)?.and_hms_opt(
        field(9..11)?,
        field(11..13)?,
        field(13..15)?,
    )
}
