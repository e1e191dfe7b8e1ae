//! User-facing notifications

use std::sync::Mutex;

#[cfg(test)]
use mockall::automock;
use tracing::warn;

/// Capability to show a message to the user
#[cfg_attr(test, automock)]
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Queue of flash messages waiting to be displayed
#[derive(Debug, Default)]
pub struct FlashMessages {
    queue: Mutex<Vec<String>>,
}

impl FlashMessages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue(&self, message: impl Into<String>) {
        match self.queue.lock() {
            Ok(mut queue) => queue.push(message.into()),
            Err(_) => warn!("Flash message queue poisoned, dropping message"),
        }
    }

    /// Take all queued messages, oldest first
    pub fn drain(&self) -> Vec<String> {
        self.queue
            .lock()
            .map(|mut queue| std::mem::take(&mut *queue))
            .unwrap_or_default()
    }
}

impl Notifier for FlashMessages {
    fn notify(&self, message: &str) {
        self.queue(message);
    }
}
