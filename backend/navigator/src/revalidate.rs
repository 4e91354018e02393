//! # Revalidation
//!
//! Explicit invalidation channel. Each mounted loader holds a [`Subscription`]; a successful
//! submission calls [`Revalidator::invalidate`] and every subscription turns stale, so the next
//! navigation re-runs all mounted loaders instead of reusing their output.
use tokio::sync::watch;

pub struct Revalidator {
    revision: watch::Sender<u64>,
}

impl Default for Revalidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Revalidator {
    pub fn new() -> Self {
        let (revision, _) = watch::channel(0);

        Self { revision }
    }

    pub fn subscribe(&self) -> Subscription {
        Subscription {
            revision: self.revision.subscribe(),
        }
    }

    pub fn invalidate(&self) {
        self.revision.send_modify(|revision| *revision += 1);
    }

    pub fn revision(&self) -> u64 {
        *self.revision.borrow()
    }
}

/// Cloning keeps the revision seen so far.
#[derive(Clone)]
pub struct Subscription {
    revision: watch::Receiver<u64>,
}

impl Subscription {
    pub fn is_stale(&self) -> bool {
        self.revision.has_changed().unwrap_or(true)
    }
}
