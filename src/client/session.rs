//! Login session state
//!
//! Components interested in login changes subscribe explicitly and re-run
//! their work when notified.

use tokio::sync::watch;
use tracing::info;

pub struct Session {
    logged_in: watch::Sender<bool>,
}

impl Session {
    pub fn new(logged_in: bool) -> Self {
        let (logged_in, _) = watch::channel(logged_in);
        Self { logged_in }
    }

    pub fn is_logged_in(&self) -> bool {
        *self.logged_in.borrow()
    }

    /// Update the login state; subscribers are only woken on change
    pub fn set_logged_in(&self, logged_in: bool) {
        let changed = self.logged_in.send_if_modified(|current| {
            if *current == logged_in {
                false
            } else {
                *current = logged_in;
                true
            }
        });
        if changed {
            info!("Session login state changed: logged_in={}", logged_in);
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.logged_in.subscribe()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(false)
    }
}
