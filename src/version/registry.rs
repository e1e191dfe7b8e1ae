//! Registry trait for fetching a crate summary

#[cfg(test)]
use mockall::automock;

use crate::version::error::RegistryError;
use crate::version::types::PackageSummary;

/// Trait for loading a crate and its versions from a registry
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Registry: Send + Sync {
    /// Fetches the crate summary together with all of its versions
    ///
    /// # Arguments
    /// * `crate_name` - The name of the crate (e.g., "serde")
    ///
    /// # Returns
    /// * `Ok(PackageSummary)` - Summary with versions ordered newest first
    /// * `Err(RegistryError)` - If the fetch fails
    async fn fetch_package(&self, crate_name: &str) -> Result<PackageSummary, RegistryError>;
}
