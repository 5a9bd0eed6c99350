/// Platform-agnostic pointer and wheel events.
///
/// Hosts translate their native events into these and feed them to an
/// [`InputProcessor`](super::InputProcessor), which turns them into
/// [`ViewCommand`](crate::engine::ViewCommand) values.
///
/// ```ignore
/// let cmd = input_processor.handle_event(InputEvent::PointerMove {
///     x: 100.0,
///     y: 200.0,
///     modifier: false,
/// });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed over the surface.
    PointerDown {
        /// Horizontal position.
        x: f64,
        /// Vertical position.
        y: f64,
    },
    /// Pointer moved to an absolute position.
    PointerMove {
        /// Horizontal position.
        x: f64,
        /// Vertical position.
        y: f64,
        /// Whether the rotate modifier (shift) is held.
        modifier: bool,
    },
    /// Pointer released.
    PointerUp,
    /// Pointer left the surface.
    PointerLeave,
    /// Scroll wheel (negative = scroll up = zoom in).
    Wheel {
        /// Signed scroll amount.
        delta: f64,
    },
}

impl InputEvent {
    /// Whether the host should suppress its default handling (page
    /// scrolling) for this event.
    #[must_use]
    pub fn suppresses_default(&self) -> bool {
        matches!(self, Self::Wheel { .. })
    }
}
