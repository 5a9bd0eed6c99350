//! Input and command dispatch for ChainEngine

use super::command::ViewCommand;
use super::ChainEngine;
use crate::input::{Cursor, InputEvent};

impl ChainEngine {
    /// Process a platform-agnostic input event.
    ///
    /// Returns `true` when the view changed and the host should redraw.
    /// Hosts should also suppress their default handling when
    /// [`InputEvent::suppresses_default`] is set.
    ///
    /// ```ignore
    /// if engine.handle_input(InputEvent::Wheel { delta: -120.0 }) {
    ///     engine.render(&mut surface);
    /// }
    /// ```
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        self.input
            .handle_event(event)
            .is_some_and(|cmd| self.execute(cmd))
    }

    /// Cursor the host should display for the current drag state.
    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.input.cursor()
    }

    /// Execute a command. Returns `true` when a redraw is needed.
    pub fn execute(&mut self, cmd: ViewCommand) -> bool {
        match cmd {
            ViewCommand::Pan { delta } => self.camera.pan(delta),
            ViewCommand::Rotate { delta } => self.camera.rotate(delta),
            ViewCommand::Zoom { delta } => self.camera.zoom(delta),
            ViewCommand::ResetCamera => self.camera.reset(),
            ViewCommand::Regenerate => self.regenerate(),
        }
        true
    }
}
