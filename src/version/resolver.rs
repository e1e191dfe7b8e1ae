//! Effective version resolution
//!
//! Picks the version record a crate page should show. An explicit request is
//! looked up as-is; without one the resolver prefers, in order:
//! - the max version when it is stable
//! - the newest stable, non-yanked version
//! - the newest non-yanked version
//! - the max version itself, even if yanked
//!
//! When the chosen identifier is missing from the catalog the record for the
//! max version is returned, then the first record.

use tracing::debug;

use crate::client::notify::Notifier;
use crate::version::catalog::VersionCatalog;
use crate::version::error::VersionNotFound;
use crate::version::semver::is_prerelease;
use crate::version::types::{ALL_YANKED_MAX_VERSION, RequestedVersion, VersionRecord, VersionToken};

/// Result of resolving a request against a catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionOutcome<'a> {
    /// Always an element of the catalog's version collection
    pub record: &'a VersionRecord,
    /// Identifier looked up after applying fallbacks
    pub effective: Option<String>,
    pub not_found: Option<VersionNotFound>,
    /// Version to probe documentation for
    pub probe_version: String,
}

pub struct VersionResolver<'n> {
    notifier: &'n dyn Notifier,
}

impl<'n> VersionResolver<'n> {
    pub fn new(notifier: &'n dyn Notifier) -> Self {
        Self { notifier }
    }

    /// Resolve the current version of a crate
    ///
    /// Returns None only when the catalog has no versions at all.
    pub fn resolve<'a, C>(
        &self,
        catalog: &'a C,
        requested: &RequestedVersion,
    ) -> Option<ResolutionOutcome<'a>>
    where
        C: VersionCatalog + ?Sized,
    {
        let versions = catalog.versions();
        let max_version = catalog.max_version();

        let effective = match requested {
            RequestedVersion::Exact(token) => Some(token.clone()),
            RequestedVersion::Latest => latest_target(catalog).map(|t| t.as_num().to_string()),
        };
        debug!(
            "Resolving {} (requested: {:?}, effective: {:?})",
            catalog.name(),
            requested,
            effective
        );

        let found = effective
            .as_deref()
            .and_then(|num| find_version(versions, num));

        let not_found = match (requested.token(), found) {
            (Some(token), None) => {
                let diagnostic = VersionNotFound {
                    package: catalog.name().to_string(),
                    version: token.to_string(),
                };
                self.notifier.notify(&diagnostic.to_string());
                Some(diagnostic)
            }
            _ => None,
        };

        let record = found
            .or_else(|| find_version(versions, max_version))
            .or_else(|| versions.first())?;

        let probe_version = requested
            .token()
            .or(effective.as_deref())
            .unwrap_or(max_version)
            .to_string();

        Some(ResolutionOutcome {
            record,
            effective,
            not_found,
            probe_version,
        })
    }
}

/// Fallback target when no version was requested
///
/// None when every version is yanked; the lookup then goes straight to the
/// max version.
fn latest_target<C>(catalog: &C) -> Option<VersionToken<'_>>
where
    C: VersionCatalog + ?Sized,
{
    let max_version = catalog.max_version();
    if max_version == ALL_YANKED_MAX_VERSION {
        debug!("All versions of {} are yanked", catalog.name());
        return None;
    }

    if !is_prerelease(max_version) {
        return Some(VersionToken::Literal(max_version));
    }

    let versions = catalog.versions();
    let latest = versions
        .iter()
        .find(|v| !v.is_prerelease() && !v.yanked)
        .or_else(|| versions.iter().find(|v| !v.yanked));

    match latest {
        Some(record) => Some(VersionToken::Record(record)),
        None => {
            debug!(
                "No unyanked version of {}, falling back to {}",
                catalog.name(),
                max_version
            );
            Some(VersionToken::Literal(max_version))
        }
    }
}

fn find_version<'a>(versions: &'a [VersionRecord], num: &str) -> Option<&'a VersionRecord> {
    versions.iter().find(|v| v.num == num)
}
