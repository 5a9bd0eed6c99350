use glam::{DVec2, DVec3};

use crate::camera::state::CameraState;

/// Depth denominators closer to zero than this use the fallback scale.
pub const DEGENERATE_DEPTH: f64 = 1e-9;

/// A chain vertex mapped onto the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    /// Horizontal surface coordinate.
    pub x: f64,
    /// Vertical surface coordinate.
    pub y: f64,
    /// Depth after both rotations, before the camera offset.
    pub depth_z: f64,
    /// Perspective scale applied to this point.
    pub scale: f64,
}

/// Projected points for one redraw.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Projection {
    /// One entry per input coordinate, in order.
    pub points: Vec<ProjectedPoint>,
    /// How many points sat on the camera plane and used the fallback scale.
    pub degenerate: usize,
}

/// Snapshot of everything needed to project points for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    /// View transform.
    pub camera: CameraState,
    /// Surface center the view is anchored on.
    pub center: DVec2,
    /// Perspective numerator.
    pub focal_length: f64,
    /// Scale (before zoom) used for degenerate depths.
    pub max_scale: f64,
}

impl Projector {
    /// Project a single point. The flag is `true` when the fallback scale
    /// was used.
    #[must_use]
    pub fn project_point(&self, point: DVec3) -> (ProjectedPoint, bool) {
        let cam = &self.camera;

        // Yaw about the vertical axis.
        let rotated_x =
            point.x * cam.rotation_y.cos() - point.z * cam.rotation_y.sin();
        let rotated_z =
            point.x * cam.rotation_y.sin() + point.z * cam.rotation_y.cos();
        // Pitch about the horizontal axis, using the yawed depth.
        let rotated_y =
            point.y * cam.rotation_x.cos() + rotated_z * cam.rotation_x.sin();
        let final_z =
            -point.y * cam.rotation_x.sin() + rotated_z * cam.rotation_x.cos();

        let depth = final_z - cam.z;
        let mut scale = cam.zoom * self.focal_length / depth;
        let degenerate = depth.abs() < DEGENERATE_DEPTH || !scale.is_finite();
        if degenerate {
            let sign = if depth < 0.0 { -1.0 } else { 1.0 };
            scale = sign * (cam.zoom * self.max_scale).min(f64::MAX);
        }

        let projected = ProjectedPoint {
            x: self.center.x + rotated_x * scale + cam.x,
            y: self.center.y + rotated_y * scale + cam.y,
            depth_z: final_z,
            scale,
        };
        (projected, degenerate)
    }

    /// Project a single point, discarding the degenerate flag.
    #[must_use]
    pub fn project(&self, point: DVec3) -> ProjectedPoint {
        self.project_point(point).0
    }

    /// Project every coordinate in order.
    #[must_use]
    pub fn project_all(&self, points: &[DVec3]) -> Projection {
        let mut degenerate = 0;
        let points = points
            .iter()
            .map(|&p| {
                let (projected, fallback) = self.project_point(p);
                degenerate += usize::from(fallback);
                projected
            })
            .collect();
        Projection { points, degenerate }
    }
}
