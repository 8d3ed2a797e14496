//! Resend cooldown for the OTP login screen.
//!
//! One second granularity, 30 seconds per cycle: while the countdown is
//! active the resend button stays disabled; on expiry it deactivates and
//! the displayed value resets to 30. The ticking task is aborted on
//! cancel or drop so a torn-down view can never leak a timer.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Seconds the user waits before the resend button re-enables.
pub const RESEND_COOLDOWN_SECS: u64 = 30;

struct Shared {
    remaining: AtomicU64,
    active: AtomicBool,
}

/// Owner of the countdown task. Must live in a tokio runtime context.
pub struct OtpCountdown {
    shared: Arc<Shared>,
    task: Option<JoinHandle<()>>,
}

impl OtpCountdown {
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Shared {
                remaining: AtomicU64::new(RESEND_COOLDOWN_SECS),
                active: AtomicBool::new(false),
            }),
            task: None,
        }
    }

    /// Begin (or restart) the cooldown at 30 seconds.
    pub fn start(&mut self) {
        self.abort_task();
        self.shared
            .remaining
            .store(RESEND_COOLDOWN_SECS, Ordering::SeqCst);
        self.shared.active.store(true, Ordering::SeqCst);

        let shared = Arc::clone(&self.shared);
        self.task = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(1));
            // The first tick of a tokio interval completes immediately.
            interval.tick().await;
            loop {
                interval.tick().await;
                let remaining = shared.remaining.load(Ordering::SeqCst);
                if remaining <= 1 {
                    shared.remaining.store(RESEND_COOLDOWN_SECS, Ordering::SeqCst);
                    shared.active.store(false, Ordering::SeqCst);
                    tracing::debug!("otp resend cooldown expired");
                    break;
                }
                shared.remaining.store(remaining - 1, Ordering::SeqCst);
            }
        }));
    }

    /// Stop ticking and reset, e.g. when the login method switches.
    pub fn cancel(&mut self) {
        self.abort_task();
        self.shared.active.store(false, Ordering::SeqCst);
        self.shared
            .remaining
            .store(RESEND_COOLDOWN_SECS, Ordering::SeqCst);
    }

    fn abort_task(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    /// Seconds left in the current cycle (30 when idle).
    pub fn remaining_secs(&self) -> u64 {
        self.shared.remaining.load(Ordering::SeqCst)
    }

    pub fn is_active(&self) -> bool {
        self.shared.active.load(Ordering::SeqCst)
    }

    /// The resend button is disabled exactly while the countdown runs.
    pub fn resend_disabled(&self) -> bool {
        self.is_active()
    }
}

impl Default for OtpCountdown {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for OtpCountdown {
    fn drop(&mut self) {
        self.abort_task();
    }
}
