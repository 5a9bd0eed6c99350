use glam::DVec2;

use super::DrawSurface;
use crate::chain::Rgb;

/// One recorded drawing primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Clear `(0, 0)` to `(width, height)`.
    Clear {
        /// Cleared width.
        width: f64,
        /// Cleared height.
        height: f64,
    },
    /// Stroked segment.
    Line {
        /// Start point.
        from: DVec2,
        /// End point.
        to: DVec2,
        /// Stroke color.
        color: Rgb,
        /// Stroke width.
        width: f64,
    },
    /// Filled circle.
    Circle {
        /// Center.
        center: DVec2,
        /// Radius.
        radius: f64,
        /// Fill color.
        color: Rgb,
    },
}

/// A surface that records what was drawn instead of rasterizing it.
///
/// Clearing drops everything recorded so far, so after a render the list
/// holds exactly one frame (starting with its `Clear`).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CommandList {
    /// Commands in draw order.
    pub commands: Vec<DrawCommand>,
}

impl CommandList {
    /// Recorded segments as `(from, to, color, width)`.
    pub fn lines(&self) -> impl Iterator<Item = (DVec2, DVec2, Rgb, f64)> + '_ {
        self.commands.iter().filter_map(|cmd| match *cmd {
            DrawCommand::Line {
                from,
                to,
                color,
                width,
            } => Some((from, to, color, width)),
            _ => None,
        })
    }

    /// Recorded circles as `(center, radius, color)`.
    pub fn circles(&self) -> impl Iterator<Item = (DVec2, f64, Rgb)> + '_ {
        self.commands.iter().filter_map(|cmd| match *cmd {
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => Some((center, radius, color)),
            _ => None,
        })
    }

    /// Play the recorded frame back onto another surface.
    pub fn replay<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        for cmd in &self.commands {
            match *cmd {
                DrawCommand::Clear { width, height } => {
                    surface.clear(width, height);
                }
                DrawCommand::Line {
                    from,
                    to,
                    color,
                    width,
                } => surface.stroke_line(from, to, color, width),
                DrawCommand::Circle {
                    center,
                    radius,
                    color,
                } => surface.fill_circle(center, radius, color),
            }
        }
    }
}

impl DrawSurface for CommandList {
    fn clear(&mut self, width: f64, height: f64) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn stroke_line(&mut self, from: DVec2, to: DVec2, color: Rgb, width: f64) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            width,
        });
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgb) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::RAINBOW;

    #[test]
    fn clear_starts_a_new_frame() {
        let mut list = CommandList::default();
        list.fill_circle(DVec2::ZERO, 1.0, RAINBOW[0]);
        list.clear(10.0, 10.0);
        list.fill_circle(DVec2::ONE, 2.0, RAINBOW[2]);
        assert_eq!(list.commands.len(), 2);
        assert_eq!(
            list.commands[0],
            DrawCommand::Clear {
                width: 10.0,
                height: 10.0
            }
        );
    }

    #[test]
    fn replay_reproduces_frame() {
        let mut list = CommandList::default();
        list.clear(600.0, 500.0);
        list.stroke_line(DVec2::ZERO, DVec2::X, RAINBOW[3], 2.0);
        list.fill_circle(DVec2::X, 3.0, RAINBOW[4]);

        let mut copy = CommandList::default();
        list.replay(&mut copy);
        assert_eq!(copy, list);
    }
}
