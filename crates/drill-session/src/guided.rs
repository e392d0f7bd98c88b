//! The guided typing state machine.
//!
//! One keystroke in, at most one slot annotated and at most one cursor
//! step out. The machine re-evaluates whatever slot the cursor points at,
//! so a mistake can be overwritten by the correct character without an
//! intervening backspace. Position is authoritative here, never in the
//! host surface; the host's caret is reconciled back to `progress`
//! whenever it drifts.

use serde::Serialize;
use tracing::{debug, debug_span, trace};

use drill_core::annotations::{AnnotationTable, SlotStatus};
use drill_core::classify::{classify, Intent, RawKeyEvent};
use drill_core::reference::ReferenceBuffer;

use crate::reconcile::CursorReconciler;

/// Outcome of feeding one raw event to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputResponse {
    /// Whether the host must suppress the event's default action.
    pub consumed: bool,
    /// Where the surface caret belongs after this event, when consumed.
    pub caret: Option<usize>,
}

impl InputResponse {
    fn consumed(caret: usize) -> Self {
        Self {
            consumed: true,
            caret: Some(caret),
        }
    }

    fn pass_through() -> Self {
        Self {
            consumed: false,
            caret: None,
        }
    }
}

/// Read-only snapshot for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct RenderState {
    pub progress: usize,
    pub complete: bool,
    pub slots: Vec<SlotRender>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SlotRender {
    pub index: usize,
    pub ch: char,
    pub status: SlotStatus,
}

/// One guided typing session over a fixed reference text.
pub struct GuidedSession {
    reference: ReferenceBuffer,
    annotations: AnnotationTable,
    progress: usize,
    reconciler: CursorReconciler,
}

impl GuidedSession {
    pub fn new(reference: impl Into<String>) -> Self {
        let reference = ReferenceBuffer::new(reference);
        let annotations = AnnotationTable::new(reference.len());
        Self {
            reference,
            annotations,
            progress: 0,
            reconciler: CursorReconciler::new(),
        }
    }

    pub fn reference(&self) -> &ReferenceBuffer {
        &self.reference
    }

    pub fn annotations(&self) -> &AnnotationTable {
        &self.annotations
    }

    /// Count of confirmed slots; also the only legal caret position.
    pub fn progress(&self) -> usize {
        self.progress
    }

    pub fn is_complete(&self) -> bool {
        self.progress == self.reference.len()
    }

    /// Back to the initial state over the same reference. Idempotent.
    pub fn reset(&mut self) {
        self.progress = 0;
        self.annotations.reset(self.reference.len());
        self.reconciler.clear();
        debug!(len = self.reference.len(), "session reset");
    }

    /// Swap in a new reference text; all session state starts over.
    pub fn replace_reference(&mut self, text: impl Into<String>) {
        self.reference = ReferenceBuffer::new(text);
        self.reset();
    }

    /// Feed one raw key event through classification and the transition
    /// table. Exactly one response per event.
    pub fn handle_input(&mut self, event: &RawKeyEvent) -> InputResponse {
        let span = debug_span!("handle_input", key = ?event.key);
        let _enter = span.enter();

        let intent = classify(event);
        let response = self.apply(intent);

        debug_assert!(
            self.annotations.upholds_progress_invariant(self.progress),
            "annotation table out of step with progress {}",
            self.progress
        );
        response
    }

    /// Run one already-classified intent through the transition table.
    pub fn apply(&mut self, intent: Intent) -> InputResponse {
        match intent {
            Intent::PrintableChar(c) => self.evaluate(c),
            Intent::NewlineIntent => self.evaluate('\n'),
            Intent::Backspace => self.retreat(),
            Intent::Blocked(kind) => {
                trace!(?kind, progress = self.progress, "blocked");
                InputResponse::consumed(self.progress)
            }
            Intent::PassThrough => {
                trace!("pass-through");
                InputResponse::pass_through()
            }
        }
    }

    /// Compare a typed character against the slot under the cursor.
    fn evaluate(&mut self, typed: char) -> InputResponse {
        let Some(expected) = self.reference.char_at(self.progress) else {
            // End of the reference: nothing left to evaluate against.
            trace!(progress = self.progress, "input past end of reference");
            return InputResponse::consumed(self.progress);
        };

        if typed == expected {
            self.annotations.set(self.progress, SlotStatus::Revealed);
            self.progress += 1;
            trace!(progress = self.progress, "match");
        } else {
            self.annotations.set(self.progress, SlotStatus::Incorrect);
            trace!(progress = self.progress, ?expected, ?typed, "mismatch");
        }
        InputResponse::consumed(self.progress)
    }

    /// Step the cursor back one slot, clearing whatever mark it had.
    fn retreat(&mut self) -> InputResponse {
        if self.progress > 0 {
            self.progress -= 1;
            self.annotations.set(self.progress, SlotStatus::Untouched);
            trace!(progress = self.progress, "backspace");
        } else {
            trace!("backspace at origin");
        }
        InputResponse::consumed(self.progress)
    }

    pub fn render_state(&self) -> RenderState {
        let slots = self
            .reference
            .chars()
            .iter()
            .zip(self.annotations.statuses())
            .enumerate()
            .map(|(index, (&ch, &status))| SlotRender { index, ch, status })
            .collect();
        RenderState {
            progress: self.progress,
            complete: self.is_complete(),
            slots,
        }
    }

    /// Report that the surface caret was observed somewhere other than
    /// where the session put it. Correction happens on the next drain.
    pub fn note_caret(&mut self, observed: usize) {
        self.reconciler.observe(observed, self.progress);
    }

    pub fn reconciler_mut(&mut self) -> &mut CursorReconciler {
        &mut self.reconciler
    }

    /// Drain any pending caret correction against the current progress.
    pub fn take_caret_correction(&mut self, current_caret: Option<usize>) -> Option<usize> {
        self.reconciler.drain(current_caret, self.progress)
    }
}
