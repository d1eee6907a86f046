//! Component lifetime flag for async work.
//!
//! Requests spawned by a component keep running after it unmounts. Each
//! response handler checks the flag and drops its result once the owning
//! component has been cleaned up.

#[cfg(test)]
#[path = "mount_test.rs"]
mod mount_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::on_cleanup;

/// Shared "still mounted" bit, cleared when the owner is disposed.
#[derive(Clone, Debug)]
pub struct MountFlag(Arc<AtomicBool>);

impl Default for MountFlag {
    fn default() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }
}

impl MountFlag {
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn unmount(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

/// Create a flag tied to the current reactive owner.
pub fn mount_flag() -> MountFlag {
    let flag = MountFlag::default();
    let cleanup = flag.clone();
    on_cleanup(move || cleanup.unmount());
    flag
}
