#![forbid(unsafe_code)]

//! Render output: clip region and divider translation.
//!
//! These are the only side effects the engine asks of the rendering layer.
//! The clip region masks the first pane up to the divider; the translation
//! moves the divider container by the same pixel amount. Both are CSS
//! strings so a DOM host can assign them verbatim, while native hosts can
//! read the numeric fields instead.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use splitview_core::Orientation;

/// Transform function used for the divider translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TransformStyle {
    /// `translate3d(..)`, which promotes the divider to its own layer.
    #[default]
    Translate3d,
    /// Plain 2D `translate(..)`.
    Translate2d,
}

/// Rectangular visibility mask for the first pane.
///
/// The primary axis is cut at `px`; the cross axis stays open (`auto`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipRegion {
    pub orientation: Orientation,
    pub px: f64,
}

impl fmt::Display for ClipRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.orientation {
            Orientation::Horizontal => write!(f, "rect(auto,{}px,auto,auto)", self.px),
            Orientation::Vertical => write!(f, "rect(auto,auto,{}px,auto)", self.px),
        }
    }
}

/// Translation applied to the divider container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DividerTransform {
    pub orientation: Orientation,
    pub px: f64,
    pub style: TransformStyle,
}

impl fmt::Display for DividerTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let px = self.px;
        match (self.style, self.orientation) {
            (TransformStyle::Translate3d, Orientation::Horizontal) => {
                write!(f, "translate3d({px}px,0,0)")
            }
            (TransformStyle::Translate3d, Orientation::Vertical) => {
                write!(f, "translate3d(0,{px}px,0)")
            }
            (TransformStyle::Translate2d, Orientation::Horizontal) => {
                write!(f, "translate({px}px,0)")
            }
            (TransformStyle::Translate2d, Orientation::Vertical) => {
                write!(f, "translate(0,{px}px)")
            }
        }
    }
}

/// Output of one accepted position update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOutput {
    /// Logical position in `[0, 100]`, as reported to the embedder.
    pub percentage: f64,
    /// Padded pixel offset shared by the clip and the transform.
    pub clamped_px: f64,
    pub clip: ClipRegion,
    pub transform: DividerTransform,
}

impl RenderOutput {
    /// Build the output for one resolved pixel offset.
    #[must_use]
    pub const fn new(
        orientation: Orientation,
        percentage: f64,
        clamped_px: f64,
        style: TransformStyle,
    ) -> Self {
        Self {
            percentage,
            clamped_px,
            clip: ClipRegion {
                orientation,
                px: clamped_px,
            },
            transform: DividerTransform {
                orientation,
                px: clamped_px,
                style,
            },
        }
    }

    /// CSS `clip` value for the first pane.
    #[must_use]
    pub fn clip_css(&self) -> String {
        self.clip.to_string()
    }

    /// CSS `transform` value for the divider container.
    #[must_use]
    pub fn transform_css(&self) -> String {
        self.transform.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_strings() {
        let out = RenderOutput::new(
            Orientation::Horizontal,
            25.0,
            100.0,
            TransformStyle::Translate3d,
        );
        assert_eq!(out.clip_css(), "rect(auto,100px,auto,auto)");
        assert_eq!(out.transform_css(), "translate3d(100px,0,0)");
    }

    #[test]
    fn vertical_strings() {
        let out = RenderOutput::new(Orientation::Vertical, 50.0, 37.5, TransformStyle::Translate3d);
        assert_eq!(out.clip_css(), "rect(auto,auto,37.5px,auto)");
        assert_eq!(out.transform_css(), "translate3d(0,37.5px,0)");
    }

    #[test]
    fn translate_2d_strings() {
        let h = RenderOutput::new(
            Orientation::Horizontal,
            10.0,
            40.0,
            TransformStyle::Translate2d,
        );
        assert_eq!(h.transform_css(), "translate(40px,0)");
        let v = RenderOutput::new(Orientation::Vertical, 10.0, 40.0, TransformStyle::Translate2d);
        assert_eq!(v.transform_css(), "translate(0,40px)");
    }

    #[test]
    fn clip_and_transform_share_offset() {
        let out = RenderOutput::new(Orientation::Horizontal, 80.0, 320.0, TransformStyle::default());
        assert_eq!(out.clip.px, out.transform.px);
        assert_eq!(out.clamped_px, 320.0);
    }
}
