//! Version increment
//!
//! Versions are `major.minor.patch` counters with a radix of 100 for minor
//! and patch. Bumping the patch may cascade into minor and then major; major
//! grows without bound.

use std::fmt;

/// Components at or above this value roll over into the next one
pub const COMPONENT_RADIX: u64 = 100;

/// Version used when the current one is missing or unusable
pub const BASELINE_VERSION: Version = Version {
    major: 1,
    minor: 0,
    patch: 0,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse `major.minor.patch`. Segments past the third are ignored; a
    /// missing, empty or non-numeric component makes the whole string unusable.
    pub fn parse(value: &str) -> Option<Self> {
        let mut segments = value.split('.').map(parse_component);
        let major = segments.next()??;
        let minor = segments.next()??;
        let patch = segments.next()??;
        Some(Self::new(major, minor, patch))
    }

    /// The version following this one
    pub fn next(self) -> Self {
        let patch = self.patch.saturating_add(1);
        let patch_overflowed = patch >= COMPONENT_RADIX;
        let patch = if patch_overflowed { 0 } else { patch };

        let minor = if patch_overflowed {
            self.minor.saturating_add(1)
        } else {
            self.minor
        };
        // Checked on every bump so an oversized minor is normalised too
        let minor_overflowed = minor >= COMPONENT_RADIX;
        let minor = if minor_overflowed { 0 } else { minor };

        let major = if minor_overflowed {
            self.major.saturating_add(1)
        } else {
            self.major
        };

        Self::new(major, minor, patch)
    }
}

impl Default for Version {
    fn default() -> Self {
        BASELINE_VERSION
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

fn parse_component(segment: &str) -> Option<u64> {
    let trimmed = segment.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok()
}

/// Next version string for the given current version.
///
/// Absent or unusable input yields the baseline `1.0.0` rather than an
/// increment of it.
pub fn increment(current: Option<&str>) -> String {
    current
        .and_then(Version::parse)
        .map(Version::next)
        .unwrap_or(BASELINE_VERSION)
        .to_string()
}
