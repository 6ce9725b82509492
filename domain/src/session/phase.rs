//! Session lifecycle phase

/// Mutually exclusive lifecycle state of a [`Session`](super::entities::Session)
///
/// Exactly one phase holds at any time. Transitions are driven solely by
/// the session's own methods:
///
/// ```text
/// Idle ──begin_submission──> Pending ──complete_success──> Ready
///   ^                           │
///   │                           └────complete_failure────> Failed
///   └───────────── reset (from any phase) ─────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    /// No submission since creation or the last reset
    #[default]
    Idle,
    /// A request is in flight, or has settled but is still waiting out the
    /// minimum visible duration
    Pending,
    /// The last submission produced a summary
    Ready,
    /// The last submission failed
    Failed,
}

impl Phase {
    pub fn is_pending(&self) -> bool {
        matches!(self, Phase::Pending)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Phase::Ready)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Phase::Failed)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Idle => "idle",
            Phase::Pending => "pending",
            Phase::Ready => "ready",
            Phase::Failed => "failed",
        };
        write!(f, "{}", name)
    }
}
