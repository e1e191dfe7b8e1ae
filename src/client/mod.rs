//! Registry web client layer
//!
//! # Modules
//!
//! - [`notify`]: Notification capability and flash message queue
//! - [`route`]: Crate version page model (resolution + documentation probe)
//! - [`session`]: Login state with explicit change subscriptions

pub mod notify;
pub mod route;
pub mod session;

use tracing::info;

use crate::version::catalog::{VersionOrder, sort_versions};
use crate::version::error::RegistryError;
use crate::version::registry::Registry;
use crate::version::types::PackageSummary;

/// Load a crate from the registry with its versions in the given order
pub async fn load_package(
    registry: &dyn Registry,
    crate_name: &str,
    order: VersionOrder,
) -> Result<PackageSummary, RegistryError> {
    let mut package = registry.fetch_package(crate_name).await?;
    if order != VersionOrder::Semver {
        sort_versions(&mut package.versions, order);
    }
    info!(
        "Loaded {} versions for {} (max {})",
        package.versions.len(),
        package.name,
        package.max_version
    );
    Ok(package)
}
