use glam::DVec2;

/// Default view distance offset.
pub const DEFAULT_CAMERA_Z: f64 = -150.0;

/// Interactive view transform applied before projection.
///
/// All updates go through the consuming transition methods below, each of
/// which returns the next state and leaves the input untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// Horizontal screen-space pan offset.
    pub x: f64,
    /// Vertical screen-space pan offset.
    pub y: f64,
    /// View distance offset (subtracted from depth before perspective
    /// division).
    pub z: f64,
    /// Accumulated rotation about the horizontal axis, radians.
    pub rotation_x: f64,
    /// Accumulated rotation about the vertical axis, radians.
    pub rotation_y: f64,
    /// Multiplicative zoom; always positive.
    pub zoom: f64,
}

impl Default for CameraState {
    fn default() -> Self {
        Self::at_distance(DEFAULT_CAMERA_Z)
    }
}

impl CameraState {
    /// Identity pan/rotation/zoom at the given view distance offset.
    #[must_use]
    pub fn at_distance(z: f64) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z,
            rotation_x: 0.0,
            rotation_y: 0.0,
            zoom: 1.0,
        }
    }

    /// Translate the screen-space pan offset by `delta`.
    #[must_use]
    pub fn panned(self, delta: DVec2) -> Self {
        Self {
            x: self.x + delta.x,
            y: self.y + delta.y,
            ..self
        }
    }

    /// Add `angles.x` to the vertical-axis rotation and `angles.y` to the
    /// horizontal-axis rotation (matching horizontal/vertical drag).
    ///
    /// Rotation is unbounded; no wraparound is applied.
    #[must_use]
    pub fn rotated(self, angles: DVec2) -> Self {
        Self {
            rotation_y: self.rotation_y + angles.x,
            rotation_x: self.rotation_x + angles.y,
            ..self
        }
    }

    /// Multiply zoom by `factor`. Non-positive or non-finite factors leave
    /// the zoom unchanged.
    #[must_use]
    pub fn zoomed(self, factor: f64) -> Self {
        if !(factor.is_finite() && factor > 0.0) {
            return self;
        }
        Self {
            zoom: self.zoom * factor,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_initial_view() {
        let cam = CameraState::default();
        assert_eq!(cam.z, -150.0);
        assert_eq!(cam.zoom, 1.0);
        assert_eq!((cam.x, cam.y), (0.0, 0.0));
        assert_eq!((cam.rotation_x, cam.rotation_y), (0.0, 0.0));
    }

    #[test]
    fn pan_leaves_rotation_alone() {
        let cam = CameraState::default().panned(DVec2::new(10.0, -5.0));
        assert_eq!((cam.x, cam.y), (10.0, -5.0));
        assert_eq!((cam.rotation_x, cam.rotation_y), (0.0, 0.0));
    }

    #[test]
    fn rotate_maps_drag_axes() {
        let cam = CameraState::default().rotated(DVec2::new(0.1, -0.05));
        assert_eq!(cam.rotation_y, 0.1);
        assert_eq!(cam.rotation_x, -0.05);
        assert_eq!((cam.x, cam.y), (0.0, 0.0));
    }

    #[test]
    fn zoom_compounds_and_rejects_bad_factors() {
        let cam = CameraState::default().zoomed(1.1).zoomed(1.1).zoomed(0.9);
        assert!((cam.zoom - 1.1 * 1.1 * 0.9).abs() < 1e-12);
        assert_eq!(cam.zoomed(0.0), cam);
        assert_eq!(cam.zoomed(-2.0), cam);
        assert_eq!(cam.zoomed(f64::NAN), cam);
    }
}
