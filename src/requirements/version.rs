//! Version banner parsing and minimum-version comparison.
//!
//! Git reports itself as `git version 2.43.0` (sometimes followed by a
//! platform suffix such as `(Apple Git-146)`). Parsing is positional: the
//! major version is the single character right after the marker and the
//! minor version is the two characters after the first dot. Banners that
//! don't follow that shape are rejected (`2.1.0`, `10.2.0`) or misread
//! (`2.100.0` reads as 2.10).

use std::fmt;
use std::str::FromStr;

/// Text preceding the version number in git's banner.
pub const GIT_MARKER: &str = "git version ";

/// A (major, minor) pair read from a version banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionInfo {
    pub major: u32,
    pub minor: u32,
}

impl VersionInfo {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.major, self.minor)
    }
}

/// The oldest acceptable (major, minor) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimumVersion {
    pub major: u32,
    pub minor: u32,
}

impl MinimumVersion {
    /// Minimum git version accepted when nothing else is configured.
    pub const GIT_DEFAULT: MinimumVersion = MinimumVersion::new(2, 1);

    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Check whether `version` is at or above this minimum.
    pub fn is_met_by(&self, version: VersionInfo) -> bool {
        !(version.major < self.major
            || (version.major == self.major && version.minor < self.minor))
    }
}

impl Default for MinimumVersion {
    fn default() -> Self {
        Self::GIT_DEFAULT
    }
}

impl fmt::Display for MinimumVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.major, self.minor)
    }
}

impl FromStr for MinimumVersion {
    type Err = String;

    /// Parse `<major>.<minor>`, e.g. `2.01` or `2.1`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("expected <major>.<minor>, got '{}'", s);

        let (major, minor) = s.trim().split_once('.').ok_or_else(invalid)?;
        let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(major) || !all_digits(minor) {
            return Err(invalid());
        }

        let minor: u32 = minor.parse().map_err(|_| invalid())?;
        // Banners only carry a two-digit minor.
        if minor > 99 {
            return Err(format!("minor version must be at most 99, got '{}'", s));
        }

        Ok(Self::new(major.parse().map_err(|_| invalid())?, minor))
    }
}

/// Extract a [`VersionInfo`] from a tool's version banner.
///
/// Returns `None` when the marker is missing, the text after it is shorter
/// than three characters, or either fixed-position slice fails to parse.
pub fn parse_banner(output: &str, marker: &str) -> Option<VersionInfo> {
    let output = output.to_lowercase();
    let marker = marker.to_lowercase();
    if marker.is_empty() || !output.contains(&marker) {
        return None;
    }

    // Text between the first marker and the next one (or the end).
    let rest = output.split(marker.as_str()).nth(1)?;
    if rest.len() < 3 {
        return None;
    }

    let major = rest.get(0..1)?.parse().ok()?;
    let minor = rest.get(2..4)?.parse().ok()?;
    Some(VersionInfo::new(major, minor))
}
