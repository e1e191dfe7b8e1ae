//! Version catalog contract and version ordering

use std::cmp::Reverse;
use std::str::FromStr;

use crate::version::semver::parse_version;
use crate::version::types::{PackageSummary, VersionRecord};

/// Read-only view of a crate's loaded versions
///
/// The resolver only relies on this contract; loading is the caller's job.
pub trait VersionCatalog {
    fn name(&self) -> &str;

    /// All versions, ordered newest first
    fn versions(&self) -> &[VersionRecord];

    fn max_version(&self) -> &str;
}

impl VersionCatalog for PackageSummary {
    fn name(&self) -> &str {
        &self.name
    }

    fn versions(&self) -> &[VersionRecord] {
        &self.versions
    }

    fn max_version(&self) -> &str {
        &self.max_version
    }
}

/// Ordering applied to a version list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VersionOrder {
    #[default]
    Semver,
    Date,
}

impl FromStr for VersionOrder {
    type Err = std::convert::Infallible;

    /// Anything other than `date` sorts by semver
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("date") {
            Ok(VersionOrder::Date)
        } else {
            Ok(VersionOrder::Semver)
        }
    }
}

/// Sort versions newest first
///
/// Versions that do not parse (or have no publish date) go last and keep
/// their relative order.
pub fn sort_versions(versions: &mut [VersionRecord], order: VersionOrder) {
    match order {
        VersionOrder::Semver => {
            versions.sort_by_cached_key(|version| Reverse(parse_version(&version.num)))
        }
        VersionOrder::Date => versions.sort_by_key(|version| Reverse(version.created_at)),
    }
}
