//! Input handling: event types and the drag state machine that converts
//! pointer and wheel events into view commands.

/// Platform-agnostic input events.
pub mod event;
/// Drag state machine and event-to-command conversion.
pub mod processor;

pub use event::InputEvent;
pub use processor::{Cursor, DragState, InputProcessor};
