//! Camera system for the chain viewport.
//!
//! Provides the pan/rotate/zoom view state, the controller that applies
//! pointer deltas to it, and the perspective projector.

/// Camera controller applying input deltas with configured speeds.
pub mod controller;
/// Perspective projection to surface coordinates.
pub mod projection;
/// View transform state and its pure transitions.
pub mod state;

pub use controller::CameraController;
pub use projection::{ProjectedPoint, Projection, Projector};
pub use state::{CameraState, DEFAULT_CAMERA_Z};
