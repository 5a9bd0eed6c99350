use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Logical size of the drawing surface.
pub struct ViewportOptions {
    /// Width in surface units.
    pub width: f64,
    /// Height in surface units.
    pub height: f64,
}

impl Default for ViewportOptions {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 500.0,
        }
    }
}

impl ViewportOptions {
    /// Projection center: half the width and height.
    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }
}
