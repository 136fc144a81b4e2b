#![forbid(unsafe_code)]

//! Divider geometry resolution.
//!
//! [`resolve`] maps one raw input coordinate onto the container's primary
//! axis and produces both the logical percentage (what gets stored and
//! reported) and the padded pixel value (what gets rendered).
//!
//! # Invariants
//!
//! 1. `percentage` is always in `[0, 100]`.
//! 2. `clamped_px` is always in `[padding, axis_px - padding]`, where the
//!    effective padding never exceeds half the axis. With oversized padding
//!    the rendered value collapses onto the axis midpoint.
//! 3. Padding never influences `percentage` or `meets_bound`.
//! 4. A zero-sized container yields `None`; nothing is divided by zero.

use crate::geometry::{ContainerBounds, Orientation, PagePoint, PageScroll, clamp_percentage};

/// Parameters of one resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolveInput {
    /// Raw coordinate. Only the component on the orientation's axis is read.
    pub coord: PagePoint,
    pub orientation: Orientation,
    /// Inset applied to the rendered value only.
    pub bounds_padding: f64,
    /// `true` when `coord` is page-absolute and must be translated into
    /// container space; `false` when it is already container-relative.
    pub is_offset: bool,
}

impl ResolveInput {
    /// Container-relative coordinate (no translation).
    #[must_use]
    pub const fn local(coord: PagePoint, orientation: Orientation, bounds_padding: f64) -> Self {
        Self {
            coord,
            orientation,
            bounds_padding,
            is_offset: false,
        }
    }

    /// Page-absolute coordinate from a pointer event.
    #[must_use]
    pub const fn offset(coord: PagePoint, orientation: Orientation, bounds_padding: f64) -> Self {
        Self {
            coord,
            orientation,
            bounds_padding,
            is_offset: true,
        }
    }
}

/// Result of resolving one coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    /// Zoom-corrected pixel offset clamped into the padded range.
    pub clamped_px: f64,
    /// Logical position in `[0, 100]`.
    pub percentage: f64,
    /// Whether the unpadded coordinate sits exactly on either container edge.
    pub meets_bound: bool,
    /// Zoom-corrected size of the primary axis.
    pub axis_px: f64,
}

/// Resolve a raw coordinate against the container bounds.
///
/// Returns `None` for a zero-sized container.
#[must_use]
pub fn resolve(
    input: ResolveInput,
    bounds: &ContainerBounds,
    scroll: PageScroll,
) -> Option<Resolution> {
    if bounds.is_empty() {
        return None;
    }

    let orientation = input.orientation;
    let axis_size = bounds.rect.axis_size(orientation);
    let raw = orientation.primary(input.coord.x, input.coord.y);
    let local = if input.is_offset {
        raw - bounds.rect.axis_origin(orientation) - orientation.primary(scroll.x, scroll.y)
    } else {
        raw
    };

    // `max` before `min` so NaN input lands on 0.
    let position_px = local.max(0.0).min(axis_size);

    let zoom_scale = bounds.zoom_scale(orientation);
    let adjusted = position_px / zoom_scale;
    let adjusted_axis = axis_size / zoom_scale;

    let percentage = clamp_percentage(adjusted / adjusted_axis * 100.0);
    let meets_bound = adjusted == 0.0 || adjusted == adjusted_axis;

    let padding = effective_padding(input.bounds_padding, adjusted_axis);
    let clamped_px = adjusted.max(padding).min(adjusted_axis - padding);

    Some(Resolution {
        clamped_px,
        percentage,
        meets_bound,
        axis_px: adjusted_axis,
    })
}

/// Pixel coordinate on the axis that corresponds to `percentage` of `axis_size`.
#[inline]
#[must_use]
pub fn percentage_to_px(axis_size: f64, percentage: f64) -> f64 {
    axis_size / 100.0 * percentage
}

fn effective_padding(padding: f64, axis: f64) -> f64 {
    if !padding.is_finite() || padding <= 0.0 {
        return 0.0;
    }
    padding.min(axis / 2.0)
}
