use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::DEFAULT_CAMERA_Z;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and control parameters.
pub struct CameraOptions {
    /// Initial view distance offset (the camera's `z`).
    #[schemars(skip)]
    pub distance: f64,
    /// Perspective numerator: `scale = zoom · focal_length / depth`.
    #[schemars(skip)]
    pub focal_length: f64,
    /// Radians of rotation per pixel of modifier-drag.
    #[schemars(title = "Rotate Speed", range(min = 0.001, max = 0.05), extend("step" = 0.001))]
    pub rotate_speed: f64,
    /// Zoom multiplier for one scroll-up notch.
    #[schemars(title = "Zoom In Factor", range(min = 1.01, max = 2.0), extend("step" = 0.01))]
    pub zoom_in_factor: f64,
    /// Zoom multiplier for one scroll-down notch.
    #[schemars(title = "Zoom Out Factor", range(min = 0.5, max = 0.99), extend("step" = 0.01))]
    pub zoom_out_factor: f64,
    /// Perspective scale used (times zoom) when a point sits on the
    /// camera plane.
    #[schemars(skip)]
    pub max_scale: f64,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            distance: DEFAULT_CAMERA_Z,
            focal_length: 400.0,
            rotate_speed: 0.01,
            zoom_in_factor: 1.1,
            zoom_out_factor: 0.9,
            max_scale: 1000.0,
        }
    }
}
