//! Deferred caret reconciliation.
//!
//! The host surface may move its caret on its own (focus changes, mouse
//! clicks the host did not route through us). Corrections are never
//! applied inside the input handler; a divergence is recorded and the
//! host drains it on its next tick. Only the surface caret is touched,
//! never session state.

use tracing::{debug, trace};

/// A host editing surface whose caret can be read and repositioned.
pub trait CaretSurface {
    fn caret(&self) -> usize;
    fn set_caret(&mut self, position: usize);
}

/// At most one correction is outstanding at any time; a newer divergence
/// replaces an older one rather than queueing behind it.
#[derive(Debug, Default)]
pub struct CursorReconciler {
    pending: bool,
}

impl CursorReconciler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_pending(&self) -> bool {
        self.pending
    }

    /// Record a caret observation. Schedules a correction only when the
    /// observed position disagrees with the session's progress.
    pub fn observe(&mut self, observed: usize, progress: usize) {
        if observed != progress {
            debug!(observed, progress, "caret diverged, correction scheduled");
            self.pending = true;
        }
    }

    pub fn clear(&mut self) {
        self.pending = false;
    }

    /// Consume the pending correction, if any. Returns the position the
    /// caret must be moved to, or `None` when nothing is to be done:
    /// no correction pending, the caret already sits at `progress`, or
    /// the surface is gone (`current_caret` is `None`).
    pub fn drain(&mut self, current_caret: Option<usize>, progress: usize) -> Option<usize> {
        if !self.pending {
            return None;
        }
        self.pending = false;

        let Some(caret) = current_caret else {
            trace!("surface gone, correction dropped");
            return None;
        };
        if caret == progress {
            trace!(progress, "caret already correct");
            return None;
        }
        debug!(from = caret, to = progress, "caret corrected");
        Some(progress)
    }

    /// Drain directly against a live surface, applying the move.
    /// Returns whether the caret was repositioned.
    pub fn reconcile<S: CaretSurface>(&mut self, surface: Option<&mut S>, progress: usize) -> bool {
        match surface {
            Some(surface) => match self.drain(Some(surface.caret()), progress) {
                Some(target) => {
                    surface.set_caret(target);
                    true
                }
                None => false,
            },
            None => {
                self.drain(None, progress);
                false
            }
        }
    }
}
