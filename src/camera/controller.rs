use glam::DVec2;

use crate::camera::projection::Projector;
use crate::camera::state::CameraState;
use crate::options::{CameraOptions, ViewportOptions};

/// Owns the live [`CameraState`] and the speeds that turn raw pointer and
/// wheel deltas into state transitions.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraController {
    /// Current view transform.
    pub state: CameraState,
    options: CameraOptions,
}

impl CameraController {
    /// Controller at the initial view for `options`.
    #[must_use]
    pub fn new(options: CameraOptions) -> Self {
        Self {
            state: CameraState::at_distance(options.distance),
            options,
        }
    }

    /// Replace speeds and projection constants, keeping the current view.
    pub fn set_options(&mut self, options: CameraOptions) {
        self.options = options;
    }

    /// Active options.
    #[must_use]
    pub fn options(&self) -> &CameraOptions {
        &self.options
    }

    /// Pan by `delta` pixels of pointer movement.
    pub fn pan(&mut self, delta: DVec2) {
        self.state = self.state.panned(delta);
    }

    /// Rotate by `delta` pixels of pointer movement, scaled by the rotate
    /// speed (horizontal drag turns about the vertical axis).
    pub fn rotate(&mut self, delta: DVec2) {
        self.state = self.state.rotated(delta * self.options.rotate_speed);
    }

    /// Zoom for a wheel event: negative deltas (scroll up) zoom in, all
    /// others zoom out.
    pub fn zoom(&mut self, wheel_delta: f64) {
        let factor = if wheel_delta < 0.0 {
            self.options.zoom_in_factor
        } else {
            self.options.zoom_out_factor
        };
        self.state = self.state.zoomed(factor);
    }

    /// Return to the initial view.
    pub fn reset(&mut self) {
        self.state = CameraState::at_distance(self.options.distance);
    }

    /// Projector for the current state on a surface of the given size.
    #[must_use]
    pub fn projector(&self, viewport: &ViewportOptions) -> Projector {
        let (center_x, center_y) = viewport.center();
        Projector {
            camera: self.state,
            center: DVec2::new(center_x, center_y),
            focal_length: self.options.focal_length,
            max_scale: self.options.max_scale,
        }
    }
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(CameraOptions::default())
    }
}
