//! Pointer input and its normalization.
//!
//! Mouse and touch events arrive in two families with different shapes. The
//! track only cares about one horizontal coordinate and whether the event
//! starts, continues, or ends a drag, so both families are reduced to a
//! [`PointerSample`] before reaching the drag state machine.
//!
//! ```
//! use slidetrack::input::{InputEvent, PointerFamily, PointerPhase, TouchEvent, TouchPhase, TouchPoint};
//!
//! let event = InputEvent::Touch(TouchEvent::new(
//!     TouchPhase::Started,
//!     vec![TouchPoint::new(7, 120.0, 40.0)],
//! ));
//! let sample = event.sample().unwrap();
//! assert_eq!(sample.family, PointerFamily::Touch);
//! assert_eq!(sample.phase, PointerPhase::Start);
//! assert_eq!(sample.x, 120.0);
//! ```

/// What a mouse event reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEventKind {
    /// A button was pressed.
    Press,
    /// The cursor moved.
    Move,
    /// A button was released.
    Release,
}

/// A mouse event in track-wrapper coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct MouseEvent {
    /// Kind of mouse event.
    pub kind: MouseEventKind,
    /// Horizontal cursor position.
    pub x: f32,
    /// Vertical cursor position.
    pub y: f32,
    default_prevented: bool,
}

impl MouseEvent {
    /// Create a mouse event.
    pub fn new(kind: MouseEventKind, x: f32, y: f32) -> Self {
        Self {
            kind,
            x,
            y,
            default_prevented: false,
        }
    }

    /// Shorthand for a press at `x`.
    pub fn press(x: f32) -> Self {
        Self::new(MouseEventKind::Press, x, 0.0)
    }

    /// Shorthand for a move to `x`.
    pub fn moved(x: f32) -> Self {
        Self::new(MouseEventKind::Move, x, 0.0)
    }

    /// Shorthand for a release at `x`.
    pub fn release(x: f32) -> Self {
        Self::new(MouseEventKind::Release, x, 0.0)
    }
}

/// Phase of a touch event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    /// A finger touched the surface.
    Started,
    /// A finger moved.
    Moved,
    /// A finger was lifted.
    Ended,
    /// The platform cancelled the touch.
    Cancelled,
}

/// A single touch point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    /// Platform identifier of the finger.
    pub id: u64,
    /// Horizontal position.
    pub x: f32,
    /// Vertical position.
    pub y: f32,
}

impl TouchPoint {
    /// Create a touch point.
    pub fn new(id: u64, x: f32, y: f32) -> Self {
        Self { id, x, y }
    }
}

/// A touch event carrying the touches that changed.
#[derive(Debug, Clone, PartialEq)]
pub struct TouchEvent {
    /// Phase shared by all changed touches.
    pub phase: TouchPhase,
    /// Touches that changed in this event, first one first.
    pub changed_touches: Vec<TouchPoint>,
    default_prevented: bool,
}

impl TouchEvent {
    /// Create a touch event.
    pub fn new(phase: TouchPhase, changed_touches: Vec<TouchPoint>) -> Self {
        Self {
            phase,
            changed_touches,
            default_prevented: false,
        }
    }

    /// Single-finger event at `x` with touch id 0.
    pub fn single(phase: TouchPhase, x: f32) -> Self {
        Self::new(phase, vec![TouchPoint::new(0, x, 0.0)])
    }
}

/// An input event from either family.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Mouse input.
    Mouse(MouseEvent),
    /// Touch input.
    Touch(TouchEvent),
}

impl From<MouseEvent> for InputEvent {
    fn from(event: MouseEvent) -> Self {
        Self::Mouse(event)
    }
}

impl From<TouchEvent> for InputEvent {
    fn from(event: TouchEvent) -> Self {
        Self::Touch(event)
    }
}

/// The input family an event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerFamily {
    /// Mouse events.
    Mouse,
    /// Touch events.
    Touch,
}

/// Where an event sits in a drag session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    /// Begins a session.
    Start,
    /// Continues a session.
    Move,
    /// Terminates a session.
    End,
}

/// A normalized pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    /// Family the event came from.
    pub family: PointerFamily,
    /// Session phase.
    pub phase: PointerPhase,
    /// Horizontal coordinate.
    pub x: f32,
}

impl From<MouseEventKind> for PointerPhase {
    fn from(kind: MouseEventKind) -> Self {
        match kind {
            MouseEventKind::Press => Self::Start,
            MouseEventKind::Move => Self::Move,
            MouseEventKind::Release => Self::End,
        }
    }
}

impl From<TouchPhase> for PointerPhase {
    fn from(phase: TouchPhase) -> Self {
        match phase {
            TouchPhase::Started => Self::Start,
            TouchPhase::Moved => Self::Move,
            // A cancelled touch never gets an end event, so it terminates the session.
            TouchPhase::Ended | TouchPhase::Cancelled => Self::End,
        }
    }
}

impl InputEvent {
    /// The family this event belongs to.
    pub fn family(&self) -> PointerFamily {
        match self {
            Self::Mouse(_) => PointerFamily::Mouse,
            Self::Touch(_) => PointerFamily::Touch,
        }
    }

    /// Reduce this event to a pointer sample.
    ///
    /// Touch events use the first changed touch; a touch event with no
    /// changed touches yields `None`.
    pub fn sample(&self) -> Option<PointerSample> {
        match self {
            Self::Mouse(event) => Some(PointerSample {
                family: PointerFamily::Mouse,
                phase: event.kind.into(),
                x: event.x,
            }),
            Self::Touch(event) => event.changed_touches.first().map(|touch| PointerSample {
                family: PointerFamily::Touch,
                phase: event.phase.into(),
                x: touch.x,
            }),
        }
    }

    /// Ask the host to skip its default handling (native drag, text selection, scrolling).
    pub fn prevent_default(&mut self) {
        match self {
            Self::Mouse(event) => event.default_prevented = true,
            Self::Touch(event) => event.default_prevented = true,
        }
    }

    /// Whether [`prevent_default`](Self::prevent_default) was called.
    pub fn is_default_prevented(&self) -> bool {
        match self {
            Self::Mouse(event) => event.default_prevented,
            Self::Touch(event) => event.default_prevented,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mouse_sample() {
        let event = InputEvent::from(MouseEvent::new(MouseEventKind::Move, 42.0, 9.0));
        let sample = event.sample().unwrap();
        assert_eq!(sample.family, PointerFamily::Mouse);
        assert_eq!(sample.phase, PointerPhase::Move);
        assert_eq!(sample.x, 42.0);
    }

    #[test]
    fn test_touch_uses_first_changed_touch() {
        let event = InputEvent::from(TouchEvent::new(
            TouchPhase::Moved,
            vec![TouchPoint::new(1, 10.0, 0.0), TouchPoint::new(2, 99.0, 0.0)],
        ));
        assert_eq!(event.sample().unwrap().x, 10.0);
    }

    #[test]
    fn test_touch_without_points_has_no_sample() {
        let event = InputEvent::from(TouchEvent::new(TouchPhase::Ended, Vec::new()));
        assert!(event.sample().is_none());
    }

    #[test]
    fn test_cancel_ends_session() {
        assert_eq!(PointerPhase::from(TouchPhase::Cancelled), PointerPhase::End);
        assert_eq!(PointerPhase::from(MouseEventKind::Release), PointerPhase::End);
    }

    #[test]
    fn test_prevent_default() {
        let mut event = InputEvent::from(MouseEvent::press(0.0));
        assert!(!event.is_default_prevented());
        event.prevent_default();
        assert!(event.is_default_prevented());
    }
}
