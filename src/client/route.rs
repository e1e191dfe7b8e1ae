//! Crate version page model
//!
//! Ties the resolver to its collaborators: missing versions are reported
//! through the [`Notifier`] and a documentation probe is started for every
//! resolution.

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::client::notify::Notifier;
use crate::docs::probe::{DocumentationProbe, ProbeState};
use crate::version::error::VersionNotFound;
use crate::version::resolver::VersionResolver;
use crate::version::types::{DocumentationUpdate, PackageSummary, RequestedVersion, VersionRecord};

/// Version chosen for a crate page
#[derive(Debug)]
pub struct ResolvedVersion {
    pub crate_name: String,
    pub record: VersionRecord,
    pub requested: RequestedVersion,
    pub not_found: Option<VersionNotFound>,
    /// Background documentation probe, if probing is enabled
    pub probe: Option<JoinHandle<ProbeState>>,
}

pub struct CrateVersionRoute {
    notifier: Arc<dyn Notifier>,
    probe: Option<Arc<DocumentationProbe>>,
    updates: UnboundedSender<DocumentationUpdate>,
}

impl CrateVersionRoute {
    /// Create a route; documentation updates are delivered on `updates`
    pub fn new(
        notifier: Arc<dyn Notifier>,
        probe: Option<Arc<DocumentationProbe>>,
        updates: UnboundedSender<DocumentationUpdate>,
    ) -> Self {
        Self {
            notifier,
            probe,
            updates,
        }
    }

    /// Resolve the version for a crate page
    ///
    /// `version_param` is the raw route parameter; `None`, `""` and `"all"`
    /// select the default version. Returns None if the crate has no versions.
    ///
    /// Must run inside a Tokio runtime when a probe is configured.
    pub fn model(
        &self,
        package: &PackageSummary,
        version_param: Option<&str>,
    ) -> Option<ResolvedVersion> {
        let requested = RequestedVersion::from_param(version_param);
        let outcome = VersionResolver::new(self.notifier.as_ref()).resolve(package, &requested)?;

        let probe = self.probe.as_ref().map(|probe| {
            probe.spawn(
                package.name.clone(),
                outcome.probe_version.clone(),
                package.documentation.clone(),
                self.updates.clone(),
            )
        });

        Some(ResolvedVersion {
            crate_name: package.name.clone(),
            record: outcome.record.clone(),
            requested,
            not_found: outcome.not_found,
            probe,
        })
    }

    /// Re-resolve whenever the login state changes
    ///
    /// Runs until the session is dropped.
    pub async fn follow_session<F>(
        &self,
        mut session: watch::Receiver<bool>,
        package: &PackageSummary,
        version_param: Option<&str>,
        mut on_resolved: F,
    ) where
        F: FnMut(Option<ResolvedVersion>),
    {
        while session.changed().await.is_ok() {
            let logged_in = *session.borrow_and_update();
            debug!(
                "Refreshing {} after login change (logged_in={})",
                package.name, logged_in
            );
            on_resolved(self.model(package, version_param));
        }
    }
}
