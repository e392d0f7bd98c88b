//! Keystroke-driven guided typing sessions.
//!
//! [`GuidedSession`] owns the reference buffer, the per-slot annotation
//! table and the progress cursor, and advances them one classified intent
//! at a time. [`Workspace`] layers mode switching, snippet selection and
//! the free-typing buffer on top. Caret drift on the host surface is
//! repaired out-of-band by [`CursorReconciler`].

pub mod guided;
pub mod reconcile;
pub mod side_by_side;
pub mod workspace;

pub use guided::{GuidedSession, InputResponse, RenderState, SlotRender};
pub use reconcile::{CaretSurface, CursorReconciler};
pub use side_by_side::TypedBuffer;
pub use workspace::{EditorMode, Workspace};
