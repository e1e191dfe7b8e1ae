//! Registry test utilities

use std::collections::HashMap;

use async_trait::async_trait;

use crate_version_resolver::version::error::RegistryError;
use crate_version_resolver::version::registry::Registry;
use crate_version_resolver::version::types::{PackageSummary, VersionRecord};

/// Build a crate summary from `(num, yanked)` pairs, newest first
pub fn package(name: &str, max_version: &str, versions: &[(&str, bool)]) -> PackageSummary {
    PackageSummary::new(
        name,
        max_version,
        versions
            .iter()
            .map(|(num, yanked)| VersionRecord::new(*num, *yanked))
            .collect(),
    )
}

/// In-memory registry for testing
#[derive(Default)]
pub struct MockRegistry {
    packages: HashMap<String, PackageSummary>,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_package(mut self, package: PackageSummary) -> Self {
        self.packages.insert(package.name.clone(), package);
        self
    }
}

#[async_trait]
impl Registry for MockRegistry {
    async fn fetch_package(&self, crate_name: &str) -> Result<PackageSummary, RegistryError> {
        self.packages
            .get(crate_name)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(crate_name.to_string()))
    }
}
