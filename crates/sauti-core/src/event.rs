//! Progress events emitted by a running job
//!
//! Ordering contract: `Started` is always first; at most one terminal event
//! (`Completed` or `Failed`) and it is always last; `Progress` percents are
//! non-decreasing and never reach 100, which belongs to `Completed` alone.

use crate::artifact::ArtifactReference;

#[derive(Debug, Clone, PartialEq)]
pub enum ProgressEvent {
    /// Synthesis accepted; carries the estimated playback duration.
    Started { duration_secs: u64 },
    /// One more unit finished; percent is capped below 100.
    Progress { percent: u8 },
    /// All units succeeded; the artifact is ready.
    Completed {
        artifact: ArtifactReference,
        duration_secs: u64,
    },
    /// A unit failed; no artifact, remaining units were dropped.
    Failed { reason: String },
}

impl ProgressEvent {
    /// Whether this event closes the stream.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ProgressEvent::Completed { .. } | ProgressEvent::Failed { .. }
        )
    }
}
