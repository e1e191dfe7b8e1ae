//! Documentation probe
//!
//! Checks whether hosted documentation was built for a resolved version and,
//! if so, emits a [`DocumentationUpdate`] for the caller to apply. The probe
//! only runs while the crate's documentation URL is unset or already points at
//! the documentation host. Failures leave the URL untouched and are never
//! reported to the user.

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::docs::docs_rs::BuildStatusSource;
use crate::endpoint::endpoint_url;
use crate::version::types::DocumentationUpdate;

/// Result of a single probe attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeState {
    /// Documentation URL points elsewhere; nothing was fetched
    Skipped,
    Succeeded(DocumentationUpdate),
    /// Build failed, missing, or the request errored
    NoChange,
}

pub struct DocumentationProbe {
    source: Arc<dyn BuildStatusSource>,
    base_url: String,
}

impl DocumentationProbe {
    pub fn new(source: Arc<dyn BuildStatusSource>, base_url: &str) -> Self {
        Self {
            source,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Whether the current documentation URL may be replaced
    pub fn should_probe(&self, current: Option<&str>) -> bool {
        match current {
            None => true,
            Some(url) => {
                url.is_empty()
                    || url
                        .strip_prefix(self.base_url.as_str())
                        .is_some_and(|rest| rest.starts_with('/'))
            }
        }
    }

    /// `{base}/{crate}/{version}/`, with the name and version escaped as single segments
    pub fn documentation_url(&self, crate_name: &str, version: &str) -> Option<String> {
        endpoint_url(&self.base_url, &[crate_name, version, ""]).map(String::from)
    }

    /// Probe once, without retrying
    pub async fn probe(&self, crate_name: &str, version: &str, current: Option<&str>) -> ProbeState {
        if !self.should_probe(current) {
            debug!(
                "Skipping documentation probe for {}: custom documentation {:?}",
                crate_name, current
            );
            return ProbeState::Skipped;
        }

        match self.source.check_build_status(crate_name, version).await {
            Ok(status) if status.succeeded => match self.documentation_url(crate_name, version) {
                Some(url) => ProbeState::Succeeded(DocumentationUpdate {
                    package: crate_name.to_string(),
                    url,
                }),
                None => {
                    debug!("No documentation URL for {}@{}", crate_name, version);
                    ProbeState::NoChange
                }
            },
            Ok(_) => {
                debug!("Documentation build failed for {}@{}", crate_name, version);
                ProbeState::NoChange
            }
            Err(e) => {
                debug!(
                    "Documentation probe for {}@{} failed: {}",
                    crate_name, version, e
                );
                ProbeState::NoChange
            }
        }
    }

    /// Run a probe in the background
    ///
    /// A successful update is sent on `updates`. If the receiver is gone the
    /// update is dropped. Callers may ignore the returned handle.
    pub fn spawn(
        self: &Arc<Self>,
        crate_name: String,
        version: String,
        current: Option<String>,
        updates: UnboundedSender<DocumentationUpdate>,
    ) -> JoinHandle<ProbeState> {
        let probe = Arc::clone(self);
        tokio::spawn(async move {
            let state = probe
                .probe(&crate_name, &version, current.as_deref())
                .await;
            if let ProbeState::Succeeded(update) = &state
                && updates.send(update.clone()).is_err()
            {
                debug!("Discarding documentation update for {}", crate_name);
            }
            state
        })
    }
}
