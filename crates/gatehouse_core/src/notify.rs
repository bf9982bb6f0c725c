//! Outcome notification seam.
//!
//! # Responsibility
//! - Give the roster view-model a fire-and-forget channel for user-visible
//!   outcomes.
//!
//! # Invariants
//! - Notifications carry no return value; callers never block on them.

use log::{error, info};

/// Fire-and-forget notification sink consumed by the roster view-model.
///
/// Hosts plug in a toast renderer; the default forwards to the log stream.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Notifier that emits outcomes as structured log lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn success(&self, message: &str) {
        info!("event=notify module=notify status=ok message={message}");
    }

    fn error(&self, message: &str) {
        error!("event=notify module=notify status=error message={message}");
    }
}
