//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation, whether triggered by a pointer gesture, a
//! wheel notch, a host button, or a programmatic call, is represented as a
//! `ViewCommand`. Consumers construct commands and pass them to
//! [`ChainEngine::execute`](super::ChainEngine::execute).

use glam::DVec2;

/// A discrete or parameterized operation the engine can perform.
///
/// ```ignore
/// engine.execute(ViewCommand::Zoom { delta: -1.0 });
/// engine.execute(ViewCommand::Regenerate);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewCommand {
    /// Pan the view by `delta` pixels of pointer movement.
    Pan {
        /// Horizontal and vertical drag delta.
        delta: DVec2,
    },

    /// Rotate the view by `delta` pixels of pointer movement.
    Rotate {
        /// Horizontal and vertical drag delta.
        delta: DVec2,
    },

    /// Zoom in (negative delta) or out (any other delta).
    Zoom {
        /// Signed wheel amount.
        delta: f64,
    },

    /// Return the camera to its initial pan, rotation, and zoom.
    ResetCamera,

    /// Build a fresh chain from the current chain options.
    Regenerate,
}
