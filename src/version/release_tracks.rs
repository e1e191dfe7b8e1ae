//! Highest stable version per release track
//!
//! A release track is a major version, or a minor version while the major is
//! still `0` (`0.3.x` and `0.4.x` are separate tracks).

use std::fmt;

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use crate::version::semver::parse_version;
use crate::version::types::VersionRecord;

#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct ReleaseTracks(IndexMap<ReleaseTrackName, ReleaseTrackDetails>);

impl ReleaseTracks {
    /// Build tracks from versions sorted newest first
    ///
    /// Yanked, pre-release and unparseable versions are skipped.
    pub fn from_versions(versions: &[VersionRecord]) -> Self {
        let mut map = IndexMap::new();
        for version in versions.iter().filter(|v| !v.yanked) {
            let Some(parsed) = parse_version(&version.num) else {
                continue;
            };
            if !parsed.pre.is_empty() {
                continue;
            }
            let key = ReleaseTrackName::from_semver(&parsed);
            map.entry(key).or_insert_with(|| ReleaseTrackDetails {
                highest: version.num.clone(),
            });
        }

        Self(map)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ReleaseTrackName, &ReleaseTrackDetails)> {
        self.0.iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ReleaseTrackName {
    Minor(u64),
    Major(u64),
}

impl ReleaseTrackName {
    pub fn from_semver(version: &semver::Version) -> Self {
        if version.major == 0 {
            Self::Minor(version.minor)
        } else {
            Self::Major(version.major)
        }
    }
}

impl fmt::Display for ReleaseTrackName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Minor(minor) => write!(f, "0.{minor}"),
            Self::Major(major) => write!(f, "{major}"),
        }
    }
}

impl Serialize for ReleaseTrackName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseTrackDetails {
    pub highest: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(nums: &[&str]) -> Vec<VersionRecord> {
        nums.iter().map(|n| VersionRecord::new(*n, false)).collect()
    }

    #[test]
    fn release_tracks_empty() {
        assert!(ReleaseTracks::from_versions(&[]).is_empty());
    }

    #[test]
    fn release_tracks_skip_prereleases() {
        assert!(ReleaseTracks::from_versions(&records(&["1.0.0-beta.5"])).is_empty());
    }

    #[test]
    fn release_tracks_skip_partial_versions() {
        let tracks = ReleaseTracks::from_versions(&records(&["1.1", "1.0.0", "0.3"]));

        assert_eq!(
            serde_json::to_value(&tracks).unwrap(),
            json!({ "1": { "highest": "1.0.0" } })
        );
    }

    #[test]
    fn release_tracks_skip_yanked() {
        let versions = vec![
            VersionRecord::new("1.2.0", true),
            VersionRecord::new("1.1.0", false),
        ];

        let tracks = ReleaseTracks::from_versions(&versions);

        assert_eq!(
            serde_json::to_value(&tracks).unwrap(),
            json!({ "1": { "highest": "1.1.0" } })
        );
    }

    #[test]
    fn release_tracks_multiple() {
        let versions = records(&[
            "100.1.1",
            "100.1.0",
            "1.3.5",
            "1.2.5",
            "1.1.5",
            "0.4.0-rc.1",
            "0.3.23",
            "0.3.22",
            "0.3.21-pre.0",
            "0.3.20",
            "0.3.3",
            "0.2.1",
            "0.2.0",
            "0.1.2",
            "0.1.1",
        ]);

        let tracks = ReleaseTracks::from_versions(&versions);

        let names: Vec<String> = tracks.iter().map(|(name, _)| name.to_string()).collect();
        assert_eq!(names, vec!["100", "1", "0.3", "0.2", "0.1"]);
        assert_eq!(
            serde_json::to_value(&tracks).unwrap(),
            json!({
                "100": { "highest": "100.1.1" },
                "1": { "highest": "1.3.5" },
                "0.3": { "highest": "0.3.23" },
                "0.2": { "highest": "0.2.1" },
                "0.1": { "highest": "0.1.2" }
            })
        );
    }
}
