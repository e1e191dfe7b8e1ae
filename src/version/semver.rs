use semver::Version;

/// Parse a published version number as strict semver.
///
/// Partial versions like "1" or "1.2" are rejected rather than padded, since
/// the registry only publishes full versions.
pub fn parse_version(version: &str) -> Option<Version> {
    Version::parse(version).ok()
}

/// Returns true if the version carries a pre-release component.
///
/// An unparseable version is never classified as a pre-release.
pub fn is_prerelease(version: &str) -> bool {
    parse_version(version).is_some_and(|parsed| !parsed.pre.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1.0.0", false)]
    #[case("0.0.0", false)]
    #[case("2.0.0-beta.1", true)]
    #[case("1.0.0-rc.1+build.5", true)]
    #[case("1.0.0+build.5", false)]
    #[case("1.0", false)] // not strict semver
    #[case("not-a-version", false)]
    #[case("", false)]
    fn is_prerelease_returns_expected(#[case] version: &str, #[case] expected: bool) {
        assert_eq!(is_prerelease(version), expected);
    }

    #[rstest]
    #[case("1.2.3", Some(Version::new(1, 2, 3)))]
    #[case("1", None)]
    #[case("1.2", None)]
    #[case(" 1.2.3", None)]
    #[case("invalid", None)]
    fn parse_version_is_strict(
        #[case] version: &str,
        #[case] expected: Option<Version>,
    ) {
        assert_eq!(parse_version(version), expected);
    }
}
