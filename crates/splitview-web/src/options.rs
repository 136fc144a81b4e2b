#![forbid(unsafe_code)]

//! Embedder-facing configuration.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use splitview_core::{Orientation, POSITION_DEFAULT, clamp_percentage};
use splitview_layout::{PropSnapshot, TransformStyle, UpdateContext};

use crate::pointer_session::InteractiveTarget;

/// Configuration for one compare slider.
///
/// Every field has a default, so hosts passing JSON (with the `serde`
/// feature) only need to name what they change.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct SliderOptions {
    /// External position in `[0, 100]`. Changing it resets the divider.
    pub position: f64,
    pub orientation: Orientation,
    /// Pixel inset applied to the rendered divider offset.
    pub bounds_padding: f64,
    /// Only the handle (not the whole container) starts drags.
    pub only_handle_draggable: bool,
    /// Follow the pointer while hovering, without a press.
    pub change_position_on_hover: bool,
    pub transform_style: TransformStyle,
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self {
            position: POSITION_DEFAULT,
            orientation: Orientation::Horizontal,
            bounds_padding: 0.0,
            only_handle_draggable: false,
            change_position_on_hover: false,
            transform_style: TransformStyle::Translate3d,
        }
    }
}

impl SliderOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn position(mut self, position: f64) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Shorthand for a vertical (`true`) or horizontal (`false`) divider.
    #[must_use]
    pub fn portrait(self, portrait: bool) -> Self {
        self.orientation(Orientation::from_portrait(portrait))
    }

    #[must_use]
    pub fn bounds_padding(mut self, bounds_padding: f64) -> Self {
        self.bounds_padding = bounds_padding;
        self
    }

    #[must_use]
    pub fn only_handle_draggable(mut self, only_handle_draggable: bool) -> Self {
        self.only_handle_draggable = only_handle_draggable;
        self
    }

    #[must_use]
    pub fn change_position_on_hover(mut self, change_position_on_hover: bool) -> Self {
        self.change_position_on_hover = change_position_on_hover;
        self
    }

    #[must_use]
    pub fn transform_style(mut self, transform_style: TransformStyle) -> Self {
        self.transform_style = transform_style;
        self
    }

    /// Check the options.
    ///
    /// Out-of-range positions are clamped later rather than rejected; only
    /// values with no meaningful clamp are errors.
    pub fn validate(&self) -> Result<(), SliderConfigError> {
        if !self.position.is_finite() {
            return Err(SliderConfigError::NonFinitePosition {
                value: self.position,
            });
        }
        if !self.bounds_padding.is_finite() {
            return Err(SliderConfigError::NonFiniteBoundsPadding {
                value: self.bounds_padding,
            });
        }
        if self.bounds_padding < 0.0 {
            return Err(SliderConfigError::NegativeBoundsPadding {
                value: self.bounds_padding,
            });
        }
        Ok(())
    }

    /// Position clamped into `[0, 100]`.
    #[must_use]
    pub fn clamped_position(&self) -> f64 {
        clamp_percentage(self.position)
    }

    #[must_use]
    pub const fn interactive_target(&self) -> InteractiveTarget {
        InteractiveTarget::from_only_handle(self.only_handle_draggable)
    }

    /// Values whose change triggers position reconciliation.
    #[must_use]
    pub const fn prop_snapshot(&self) -> PropSnapshot {
        PropSnapshot {
            position: self.position,
            orientation: self.orientation,
            bounds_padding: self.bounds_padding,
        }
    }

    #[must_use]
    pub const fn update_context(&self) -> UpdateContext {
        UpdateContext {
            orientation: self.orientation,
            bounds_padding: self.bounds_padding,
            transform_style: self.transform_style,
        }
    }
}

/// Rejected slider configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliderConfigError {
    NonFinitePosition { value: f64 },
    NonFiniteBoundsPadding { value: f64 },
    NegativeBoundsPadding { value: f64 },
}

impl fmt::Display for SliderConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinitePosition { value } => {
                write!(f, "position must be a finite number (got {value})")
            }
            Self::NonFiniteBoundsPadding { value } => {
                write!(f, "bounds padding must be a finite number (got {value})")
            }
            Self::NegativeBoundsPadding { value } => {
                write!(f, "bounds padding must be >= 0 (got {value})")
            }
        }
    }
}

impl std::error::Error for SliderConfigError {}
