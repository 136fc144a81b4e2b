#![forbid(unsafe_code)]

//! Canonical host input events.
//!
//! The host (browser glue, native shell, test harness) translates its native
//! mouse and touch notifications into [`HostEvent`] values. Coordinates are
//! page-absolute; the engine converts them into container space.
//!
//! Only the first touch point of a touch event is carried. Multi-touch
//! gestures are not recognized.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::PagePoint;

/// Kind of pointing device behind an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PointerSource {
    Mouse,
    Touch,
}

/// Mouse button identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PointerButton {
    /// Left mouse button (DOM `button == 0`).
    Primary,
    /// Right mouse button (DOM `button == 2`).
    Secondary,
    /// Middle mouse button (DOM `button == 1`).
    Middle,
}

impl PointerButton {
    /// Map a DOM `MouseEvent.button` code.
    ///
    /// Codes outside `0..=2` (back/forward buttons) have no mapping.
    #[must_use]
    pub const fn from_dom_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Primary),
            1 => Some(Self::Middle),
            2 => Some(Self::Secondary),
            _ => None,
        }
    }
}

/// Where in the host tree an event was delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EventOrigin {
    /// The divider handle (which sits inside the container).
    Handle,
    /// The container itself, outside the handle.
    Container,
    /// A viewport-level listener (window).
    Viewport,
}

/// One host input notification.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum HostEvent {
    MouseDown {
        origin: EventOrigin,
        button: PointerButton,
        point: PagePoint,
    },
    TouchStart {
        origin: EventOrigin,
        point: Option<PagePoint>,
    },
    MouseMove {
        origin: EventOrigin,
        point: PagePoint,
    },
    TouchMove {
        origin: EventOrigin,
        point: Option<PagePoint>,
    },
    MouseUp {
        origin: EventOrigin,
    },
    TouchEnd {
        origin: EventOrigin,
    },
    MouseLeave,
}

impl HostEvent {
    /// Device behind the event.
    #[must_use]
    pub const fn source(&self) -> PointerSource {
        match self {
            Self::MouseDown { .. }
            | Self::MouseMove { .. }
            | Self::MouseUp { .. }
            | Self::MouseLeave => PointerSource::Mouse,
            Self::TouchStart { .. } | Self::TouchMove { .. } | Self::TouchEnd { .. } => {
                PointerSource::Touch
            }
        }
    }

    /// Delivery origin. Leave events always originate at the container.
    #[must_use]
    pub const fn origin(&self) -> EventOrigin {
        match self {
            Self::MouseDown { origin, .. }
            | Self::TouchStart { origin, .. }
            | Self::MouseMove { origin, .. }
            | Self::TouchMove { origin, .. }
            | Self::MouseUp { origin }
            | Self::TouchEnd { origin } => *origin,
            Self::MouseLeave => EventOrigin::Container,
        }
    }

    /// Page coordinate of the event, if it carries one.
    #[must_use]
    pub const fn point(&self) -> Option<PagePoint> {
        match self {
            Self::MouseDown { point, .. } | Self::MouseMove { point, .. } => Some(*point),
            Self::TouchStart { point, .. } | Self::TouchMove { point, .. } => *point,
            Self::MouseUp { .. } | Self::TouchEnd { .. } | Self::MouseLeave => None,
        }
    }

    /// Mouse-down or touch-start.
    #[must_use]
    pub const fn is_press(&self) -> bool {
        matches!(self, Self::MouseDown { .. } | Self::TouchStart { .. })
    }

    /// Mouse-move or touch-move.
    #[must_use]
    pub const fn is_move(&self) -> bool {
        matches!(self, Self::MouseMove { .. } | Self::TouchMove { .. })
    }

    /// Mouse-up or touch-end.
    #[must_use]
    pub const fn is_release(&self) -> bool {
        matches!(self, Self::MouseUp { .. } | Self::TouchEnd { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_button_codes() {
        assert_eq!(PointerButton::from_dom_code(0), Some(PointerButton::Primary));
        assert_eq!(PointerButton::from_dom_code(1), Some(PointerButton::Middle));
        assert_eq!(PointerButton::from_dom_code(2), Some(PointerButton::Secondary));
        assert_eq!(PointerButton::from_dom_code(3), None);
        assert_eq!(PointerButton::from_dom_code(-1), None);
    }

    #[test]
    fn touch_without_point_has_no_coordinate() {
        let event = HostEvent::TouchMove {
            origin: EventOrigin::Viewport,
            point: None,
        };
        assert_eq!(event.point(), None);
        assert_eq!(event.source(), PointerSource::Touch);
        assert!(event.is_move());
    }

    #[test]
    fn classification() {
        let down = HostEvent::MouseDown {
            origin: EventOrigin::Handle,
            button: PointerButton::Primary,
            point: PagePoint::new(1.0, 2.0),
        };
        assert!(down.is_press());
        assert_eq!(down.origin(), EventOrigin::Handle);
        assert_eq!(down.point(), Some(PagePoint::new(1.0, 2.0)));

        let up = HostEvent::TouchEnd {
            origin: EventOrigin::Viewport,
        };
        assert!(up.is_release());
        assert_eq!(up.point(), None);

        assert_eq!(HostEvent::MouseLeave.origin(), EventOrigin::Container);
        assert_eq!(HostEvent::MouseLeave.source(), PointerSource::Mouse);
    }
}
