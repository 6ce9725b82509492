//! Lifecycle parameters — controller timing.
//!
//! [`LifecycleParams`] groups the static parameters that control the
//! submission lifecycle in
//! [`SessionController`](crate::use_cases::session_controller::SessionController).
//! These are application-layer concerns, not domain policy.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Submission lifecycle control parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LifecycleParams {
    /// Minimum visible duration of the pending phase, in milliseconds.
    ///
    /// The phase leaves `Pending` only after both the request has settled
    /// and this floor has elapsed, so fast responses do not flicker the
    /// loading state. This is a lower bound on perceived latency, not a
    /// timeout: slow requests are never aborted.
    pub pending_floor_ms: u64,
}

impl Default for LifecycleParams {
    fn default() -> Self {
        Self {
            pending_floor_ms: 5_000,
        }
    }
}

impl LifecycleParams {
    /// Parameters with no pending floor, for non-interactive surfaces
    pub fn without_floor() -> Self {
        Self {
            pending_floor_ms: 0,
        }
    }

    pub fn with_pending_floor_ms(mut self, ms: u64) -> Self {
        self.pending_floor_ms = ms;
        self
    }

    pub fn pending_floor(&self) -> Duration {
        Duration::from_millis(self.pending_floor_ms)
    }
}
