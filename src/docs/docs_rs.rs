//! docs.rs build status client

#[cfg(test)]
use mockall::automock;

use serde::Deserialize;
use tracing::debug;

use crate::endpoint::endpoint_url;
use crate::version::error::ProbeError;

/// Default documentation host
pub const DEFAULT_BASE_URL: &str = "https://docs.rs";

/// Outcome of the most recent documentation build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildStatus {
    pub succeeded: bool,
}

/// Trait for asking a documentation host whether a version was built
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait BuildStatusSource: Send + Sync {
    async fn check_build_status(
        &self,
        crate_name: &str,
        version: &str,
    ) -> Result<BuildStatus, ProbeError>;
}

/// Entry of the docs.rs `builds.json` response, newest first
#[derive(Debug, Deserialize)]
struct Build {
    build_status: bool,
}

pub struct DocsRsClient {
    client: reqwest::Client,
    base_url: String,
}

impl DocsRsClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for DocsRsClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait::async_trait]
impl BuildStatusSource for DocsRsClient {
    async fn check_build_status(
        &self,
        crate_name: &str,
        version: &str,
    ) -> Result<BuildStatus, ProbeError> {
        let url = endpoint_url(
            &self.base_url,
            &["crate", crate_name, version, "builds.json"],
        )
        .ok_or_else(|| ProbeError::InvalidPath(format!("{}@{}", crate_name, version)))?;
        debug!("Fetching documentation builds: {}", url);

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(ProbeError::InvalidResponse(format!(
                "docs.rs returned status {}",
                response.status()
            )));
        }

        let builds: Vec<Build> = response
            .json()
            .await
            .map_err(|e| ProbeError::InvalidResponse(e.to_string()))?;

        let latest = builds
            .first()
            .ok_or_else(|| ProbeError::NoBuilds(format!("{}@{}", crate_name, version)))?;

        Ok(BuildStatus {
            succeeded: latest.build_status,
        })
    }
}
