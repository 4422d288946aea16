//! Transient toast notifications.
//!
//! One slot: showing a toast while another is visible replaces the content
//! and restarts the auto-hide timer, it does not queue. The timer is owned
//! by the host and aborted on replacement, manual dismissal and drop, so it
//! never fires against a torn-down component.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

/// How long a toast stays visible unless dismissed earlier.
pub const TOAST_AUTO_HIDE: Duration = Duration::from_millis(3000);

/// Visual severity of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastSeverity {
    /// Green "all good" banner.
    Success,
    /// Red failure banner.
    Danger,
}

/// A transient, auto-dismissing notification banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Message shown in the banner body.
    pub message: String,
    /// Banner severity.
    pub severity: ToastSeverity,
}

/// Owner of the single toast slot.
#[derive(Debug, Default)]
pub struct ToastHost {
    slot: Arc<Mutex<Option<Toast>>>,
    hide_timer: Option<JoinHandle<()>>,
}

impl ToastHost {
    /// Create an empty host.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a toast, replacing any current one and restarting the auto-hide
    /// timer.
    ///
    /// Must be called from within a tokio runtime.
    pub fn show(&mut self, message: impl Into<String>, severity: ToastSeverity) {
        if let Some(timer) = self.hide_timer.take() {
            timer.abort();
        }

        *lock(&self.slot) = Some(Toast {
            message: message.into(),
            severity,
        });

        let slot = Arc::clone(&self.slot);
        self.hide_timer = Some(tokio::spawn(async move {
            tokio::time::sleep(TOAST_AUTO_HIDE).await;
            *lock(&slot) = None;
        }));
    }

    /// Dismiss the current toast, if any, cancelling its timer.
    pub fn dismiss(&mut self) {
        if let Some(timer) = self.hide_timer.take() {
            timer.abort();
        }
        *lock(&self.slot) = None;
    }

    /// The currently visible toast, if any.
    #[must_use]
    pub fn current(&self) -> Option<Toast> {
        lock(&self.slot).clone()
    }
}

impl Drop for ToastHost {
    fn drop(&mut self) {
        if let Some(timer) = self.hide_timer.take() {
            timer.abort();
        }
    }
}

fn lock(slot: &Mutex<Option<Toast>>) -> std::sync::MutexGuard<'_, Option<Toast>> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}
