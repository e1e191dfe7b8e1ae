//! Version records and crate summaries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::version::semver::is_prerelease;

/// `max_version` reported by the registry when every version has been yanked
pub const ALL_YANKED_MAX_VERSION: &str = "0.0.0";

/// Route parameter meaning "no specific version requested"
pub const ALL_VERSIONS_PARAM: &str = "all";

/// One published version of a crate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRecord {
    pub num: String,
    #[serde(default)]
    pub yanked: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl VersionRecord {
    pub fn new(num: impl Into<String>, yanked: bool) -> Self {
        Self {
            num: num.into(),
            yanked,
            created_at: None,
        }
    }

    pub fn is_prerelease(&self) -> bool {
        is_prerelease(&self.num)
    }
}

/// A crate together with its ordered version collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSummary {
    pub name: String,
    /// Highest known version, or [`ALL_YANKED_MAX_VERSION`]
    pub max_version: String,
    pub documentation: Option<String>,
    /// Ordered newest first
    pub versions: Vec<VersionRecord>,
}

impl PackageSummary {
    pub fn new(
        name: impl Into<String>,
        max_version: impl Into<String>,
        versions: Vec<VersionRecord>,
    ) -> Self {
        Self {
            name: name.into(),
            max_version: max_version.into(),
            documentation: None,
            versions,
        }
    }

    pub fn with_documentation(mut self, url: impl Into<String>) -> Self {
        self.documentation = Some(url.into());
        self
    }

    /// Apply a documentation URL discovered by a probe
    ///
    /// Later updates overwrite earlier ones. Returns false if the update
    /// belongs to another crate.
    pub fn apply_documentation_update(&mut self, update: DocumentationUpdate) -> bool {
        if update.package != self.name {
            debug!(
                "Ignoring documentation update for {} on {}",
                update.package, self.name
            );
            return false;
        }
        self.documentation = Some(update.url);
        true
    }
}

/// The version requested by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestedVersion {
    /// No specific version: resolve through the fallback chain
    Latest,
    Exact(String),
}

impl RequestedVersion {
    /// Normalize a route parameter; empty and `"all"` both mean [`RequestedVersion::Latest`]
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            None | Some("") | Some(ALL_VERSIONS_PARAM) => RequestedVersion::Latest,
            Some(token) => RequestedVersion::Exact(token.to_string()),
        }
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            RequestedVersion::Latest => None,
            RequestedVersion::Exact(token) => Some(token),
        }
    }
}

/// A version candidate, either a bare identifier or a record from the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionToken<'a> {
    Literal(&'a str),
    Record(&'a VersionRecord),
}

impl<'a> VersionToken<'a> {
    pub fn as_num(self) -> &'a str {
        match self {
            VersionToken::Literal(num) => num,
            VersionToken::Record(record) => &record.num,
        }
    }
}

/// Cache update produced by a successful documentation probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentationUpdate {
    pub package: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, RequestedVersion::Latest)]
    #[case(Some(""), RequestedVersion::Latest)]
    #[case(Some("all"), RequestedVersion::Latest)]
    #[case(Some("1.0.0"), RequestedVersion::Exact("1.0.0".to_string()))]
    #[case(Some("All"), RequestedVersion::Exact("All".to_string()))]
    fn requested_version_from_param_normalizes_sentinels(
        #[case] param: Option<&str>,
        #[case] expected: RequestedVersion,
    ) {
        assert_eq!(RequestedVersion::from_param(param), expected);
    }

    #[test]
    fn version_token_as_num_reads_literal_and_record() {
        let record = VersionRecord::new("1.2.3", false);

        assert_eq!(VersionToken::Literal("0.1.0").as_num(), "0.1.0");
        assert_eq!(VersionToken::Record(&record).as_num(), "1.2.3");
    }

    #[test]
    fn apply_documentation_update_overwrites_url() {
        let mut package =
            PackageSummary::new("foo", "1.0.0", vec![]).with_documentation("https://docs.rs/foo");

        let applied = package.apply_documentation_update(DocumentationUpdate {
            package: "foo".to_string(),
            url: "https://docs.rs/foo/1.0.0/".to_string(),
        });

        assert!(applied);
        assert_eq!(
            package.documentation.as_deref(),
            Some("https://docs.rs/foo/1.0.0/")
        );
    }

    #[test]
    fn apply_documentation_update_ignores_other_crates() {
        let mut package = PackageSummary::new("foo", "1.0.0", vec![]);

        let applied = package.apply_documentation_update(DocumentationUpdate {
            package: "bar".to_string(),
            url: "https://docs.rs/bar/1.0.0/".to_string(),
        });

        assert!(!applied);
        assert_eq!(package.documentation, None);
    }

    #[test]
    fn version_record_deserializes_registry_payload() {
        let record: VersionRecord = serde_json::from_str(
            r#"{"num": "1.0.0-alpha.1", "yanked": true, "created_at": "2024-01-02T03:04:05Z", "downloads": 10}"#,
        )
        .unwrap();

        assert_eq!(record.num, "1.0.0-alpha.1");
        assert!(record.yanked);
        assert!(record.is_prerelease());
        assert!(record.created_at.is_some());
    }
}
