//! Global Ctrl+C handling for the preview server.

use anyhow::{Context, Result};
use std::sync::atomic::{AtomicBool, Ordering};

static SHUTDOWN: AtomicBool = AtomicBool::new(false);

/// Install the global Ctrl+C handler. Call once, before blocking operations.
pub fn setup_shutdown_handler() -> Result<()> {
    ctrlc::set_handler(|| {
        SHUTDOWN.store(true, Ordering::SeqCst);
    })
    .context("Failed to install Ctrl+C handler")
}

/// Check whether shutdown was requested.
#[inline]
pub fn is_shutdown() -> bool {
    SHUTDOWN.load(Ordering::SeqCst)
}
