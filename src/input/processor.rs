//! Converts raw pointer and wheel events into view commands.
//!
//! The interaction model has two states. A pointer-down enters
//! [`DragState::Dragging`] and remembers the pointer position; every move
//! while dragging emits a pan (or, with the modifier held, a rotate)
//! command for the delta since the last position. Pointer-up and
//! pointer-leave return to [`DragState::Idle`]. Wheel events zoom
//! regardless of drag state.

use glam::DVec2;

use super::event::InputEvent;
use crate::engine::command::ViewCommand;

/// Pointer interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No button held.
    #[default]
    Idle,
    /// Button held; `last` is the most recent pointer position.
    Dragging {
        /// Position the next move's delta is measured from.
        last: DVec2,
    },
}

/// Pointer cursor the host should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    /// Ready to drag.
    Grab,
    /// Drag in progress.
    Grabbing,
}

impl DragState {
    /// Pure transition: the next state and the command (if any) produced
    /// by `event`.
    #[must_use]
    pub fn transition(self, event: InputEvent) -> (Self, Option<ViewCommand>) {
        match (self, event) {
            (_, InputEvent::PointerDown { x, y }) => (
                Self::Dragging {
                    last: DVec2::new(x, y),
                },
                None,
            ),
            (
                Self::Dragging { last },
                InputEvent::PointerMove { x, y, modifier },
            ) => {
                let current = DVec2::new(x, y);
                let delta = current - last;
                let cmd = if modifier {
                    ViewCommand::Rotate { delta }
                } else {
                    ViewCommand::Pan { delta }
                };
                (Self::Dragging { last: current }, Some(cmd))
            }
            (Self::Idle, InputEvent::PointerMove { .. }) => (Self::Idle, None),
            (_, InputEvent::PointerUp | InputEvent::PointerLeave) => {
                (Self::Idle, None)
            }
            (state, InputEvent::Wheel { delta }) => {
                (state, Some(ViewCommand::Zoom { delta }))
            }
        }
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}

/// Owns the transient pointer state and applies [`DragState::transition`]
/// to each incoming event.
///
/// ```ignore
/// for event in host_events {
///     if let Some(cmd) = input_processor.handle_event(event) {
///         engine.execute(cmd);
///     }
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputProcessor {
    state: DragState,
}

impl InputProcessor {
    /// Create an idle processor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current drag state.
    #[must_use]
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Cursor matching the drag state.
    #[must_use]
    pub fn cursor(&self) -> Cursor {
        if self.state.is_dragging() {
            Cursor::Grabbing
        } else {
            Cursor::Grab
        }
    }

    /// Process one event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<ViewCommand> {
        let (next, cmd) = self.state.transition(event);
        self.state = next;
        cmd
    }
}
