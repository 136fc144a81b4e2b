#![forbid(unsafe_code)]

//! Bounds tracking, position reconciliation, and render output.
//!
//! - [`bounds`]: resize observation that keeps the divider at the same
//!   logical fraction when the container changes size.
//! - [`reconcile`]: the authoritative divider position, merging external
//!   resets with drag and resize updates.
//! - [`render`]: clip-region and translation strings for the rendering layer.

pub mod bounds;
pub mod reconcile;
pub mod render;

pub use bounds::{BoundsTracker, EffectTiming, ObserverCommand};
pub use reconcile::{
    PositionReconciler, PropSnapshot, SkipReason, UpdateContext, UpdateOutcome, UpdateRequest,
};
pub use render::{ClipRegion, DividerTransform, RenderOutput, TransformStyle};
