//! SIGINT handling for the wizard.
//!
//! A Ctrl+C during any prompt must surface as a cancelled wizard run, not an
//! unhandled fault. The handler records the interrupt in an atomic flag that
//! the orchestrator polls between suspension points.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::{PrdGenError, Result};

/// Non-blocking SIGINT observer shared across the wizard run.
#[derive(Clone)]
pub struct SignalHandler {
    interrupted: Arc<AtomicBool>,
}

impl SignalHandler {
    /// Register the SIGINT handler.
    ///
    /// # Errors
    ///
    /// Returns an error if the handler cannot be registered (e.g. a handler
    /// is already installed in this process).
    pub fn new() -> Result<Self> {
        let interrupted = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&interrupted);

        ctrlc::set_handler(move || {
            flag.store(true, Ordering::SeqCst);
        })
        .map_err(|e| PrdGenError::SignalHandler(e.to_string()))?;

        Ok(Self { interrupted })
    }

    /// A handler that never fires, for non-interactive callers and tests.
    pub fn disabled() -> Self {
        Self {
            interrupted: Arc::new(AtomicBool::new(false)),
        }
    }

    /// True once SIGINT has been received.
    pub fn is_interrupted(&self) -> bool {
        self.interrupted.load(Ordering::SeqCst)
    }
}
