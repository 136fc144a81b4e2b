#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All values are CSS pixels as reported by the host. Bounds are read fresh
//! for every computation and never cached by the engine.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Lower end of the normalized position range.
pub const POSITION_MIN: f64 = 0.0;
/// Upper end of the normalized position range.
pub const POSITION_MAX: f64 = 100.0;
/// Position used when the embedder supplies none.
pub const POSITION_DEFAULT: f64 = 50.0;

/// Clamp a percentage into `[0, 100]`.
///
/// NaN maps to `0` so a malformed value can never escape into render output.
#[inline]
#[must_use]
pub fn clamp_percentage(value: f64) -> f64 {
    if value.is_nan() {
        return POSITION_MIN;
    }
    value.clamp(POSITION_MIN, POSITION_MAX)
}

/// Axis along which the divider travels.
///
/// `Horizontal` moves the divider left/right (X axis), `Vertical` moves it
/// up/down (Y axis, the "portrait" layout).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Map the `portrait` flag onto an orientation.
    #[inline]
    #[must_use]
    pub const fn from_portrait(portrait: bool) -> Self {
        if portrait {
            Self::Vertical
        } else {
            Self::Horizontal
        }
    }

    /// Whether this is the portrait (vertical) layout.
    #[inline]
    #[must_use]
    pub const fn is_portrait(self) -> bool {
        matches!(self, Self::Vertical)
    }

    /// Pick the component of `(x, y)` on this orientation's axis.
    #[inline]
    #[must_use]
    pub const fn primary(self, x: f64, y: f64) -> f64 {
        match self {
            Self::Horizontal => x,
            Self::Vertical => y,
        }
    }
}

/// A point in page space (or container space, depending on context).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PagePoint {
    pub x: f64,
    pub y: f64,
}

impl PagePoint {
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Page scroll offsets (`pageXOffset` / `pageYOffset`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PageScroll {
    pub x: f64,
    pub y: f64,
}

impl PageScroll {
    /// No scrolling.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Rendered box of the container in viewport pixels.
///
/// Equivalent of a DOM `getBoundingClientRect()` result: it includes any
/// visual scaling applied to the container or its ancestors.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoundingRect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingRect {
    /// Create a new rectangle.
    #[inline]
    #[must_use]
    pub const fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Rectangle anchored at the viewport origin.
    #[inline]
    #[must_use]
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Check if the rectangle has zero area.
    ///
    /// Non-positive and NaN extents count as empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Extent along the orientation's axis.
    #[inline]
    #[must_use]
    pub const fn axis_size(&self, orientation: Orientation) -> f64 {
        orientation.primary(self.width, self.height)
    }

    /// Leading edge along the orientation's axis.
    #[inline]
    #[must_use]
    pub const fn axis_origin(&self, orientation: Orientation) -> f64 {
        orientation.primary(self.left, self.top)
    }
}

/// Container geometry as read from the host at one instant.
///
/// `rect` is the rendered box; `offset_width`/`offset_height` are the logical
/// layout size before visual scaling. Their ratio is the zoom scale.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContainerBounds {
    pub rect: BoundingRect,
    pub offset_width: f64,
    pub offset_height: f64,
}

impl ContainerBounds {
    /// Bounds with no visual scaling (logical size equals rendered size).
    #[must_use]
    pub const fn unscaled(rect: BoundingRect) -> Self {
        Self {
            rect,
            offset_width: rect.width,
            offset_height: rect.height,
        }
    }

    /// Bounds with an explicit logical layout size.
    #[must_use]
    pub const fn new(rect: BoundingRect, offset_width: f64, offset_height: f64) -> Self {
        Self {
            rect,
            offset_width,
            offset_height,
        }
    }

    /// Whether the rendered box has zero area.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rect.is_empty()
    }

    /// Rendered size divided by logical size on the orientation's axis.
    ///
    /// A logical size of zero is treated as one.
    #[must_use]
    pub fn zoom_scale(&self, orientation: Orientation) -> f64 {
        let logical = orientation.primary(self.offset_width, self.offset_height);
        let logical = if logical == 0.0 || logical.is_nan() {
            1.0
        } else {
            logical
        };
        self.rect.axis_size(orientation) / logical
    }
}

/// Content-box size delivered by a resize observation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContentSize {
    pub width: f64,
    pub height: f64,
}

impl ContentSize {
    #[inline]
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Check if either extent is zero (or not a positive number).
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}
