//! Liveness flag tying async completions to the component that issued them.
//!
//! Requests are not aborted on unmount; instead the page checks
//! [`Liveness::is_live`] before applying a late response.

#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod lifecycle_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug)]
pub struct Liveness(Arc<AtomicBool>);

impl Default for Liveness {
    fn default() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }
}

impl Liveness {
    /// A flag that flips when the current reactive owner is cleaned up.
    pub fn for_current_owner() -> Self {
        let live = Self::default();
        let handle = live.clone();
        leptos::prelude::on_cleanup(move || handle.end());
        live
    }

    pub fn is_live(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn end(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}
