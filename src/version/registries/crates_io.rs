//! crates.io API implementation

use crate::endpoint::endpoint_url;
use crate::version::catalog::{VersionOrder, sort_versions};
use crate::version::error::RegistryError;
use crate::version::registry::Registry;
use crate::version::types::{PackageSummary, VersionRecord};
use serde::Deserialize;
use tracing::{debug, warn};

/// Default base URL for crates.io
pub const DEFAULT_BASE_URL: &str = "https://crates.io";

/// Response from the crates.io `/api/v1/crates/{name}` endpoint
#[derive(Debug, Deserialize)]
struct CrateResponse {
    #[serde(rename = "crate")]
    krate: CrateInfo,
    versions: Vec<VersionRecord>,
}

#[derive(Debug, Deserialize)]
struct CrateInfo {
    name: String,
    max_version: String,
    documentation: Option<String>,
}

/// Registry implementation for the crates.io API
pub struct CratesIoRegistry {
    client: reqwest::Client,
    base_url: String,
}

impl CratesIoRegistry {
    /// Creates a new CratesIoRegistry with a custom base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(concat!(
                    env!("CARGO_PKG_NAME"),
                    "/",
                    env!("CARGO_PKG_VERSION")
                ))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for CratesIoRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait::async_trait]
impl Registry for CratesIoRegistry {
    async fn fetch_package(&self, crate_name: &str) -> Result<PackageSummary, RegistryError> {
        let url = endpoint_url(&self.base_url, &["api", "v1", "crates", crate_name])
            .ok_or_else(|| RegistryError::InvalidName(crate_name.to_string()))?;
        debug!("Fetching crate: {}", url);

        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound(crate_name.to_string()));
        }

        if !status.is_success() {
            warn!("crates.io returned status {}: {}", status, url);
            return Err(RegistryError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let body: CrateResponse = response.json().await.map_err(|e| {
            warn!("Failed to parse crates.io response: {}", e);
            RegistryError::InvalidResponse(e.to_string())
        })?;

        let mut versions = body.versions;
        sort_versions(&mut versions, VersionOrder::Semver);

        Ok(PackageSummary {
            name: body.krate.name,
            max_version: body.krate.max_version,
            documentation: body.krate.documentation,
            versions,
        })
    }
}
