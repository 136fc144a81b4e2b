#![forbid(unsafe_code)]

//! Core: geometry, host events, and divider position resolution.
//!
//! # Role in splitview
//! `splitview-core` is the input layer. It owns the geometric primitives
//! (container bounds, zoom scale, page scroll), the canonical host event
//! types, and the pure resolver that turns a raw coordinate into a clamped
//! pixel offset and a normalized percentage.
//!
//! # How it fits in the system
//! `splitview-layout` feeds resolver results through position
//! reconciliation, and `splitview-web` drives both from host pointer and
//! resize notifications. Nothing in this crate holds state.

pub mod event;
pub mod geometry;
pub mod logging;
pub mod resolve;

pub use geometry::{
    BoundingRect, ContainerBounds, ContentSize, Orientation, PagePoint, PageScroll,
    POSITION_DEFAULT, POSITION_MAX, POSITION_MIN, clamp_percentage,
};
pub use resolve::{Resolution, ResolveInput, percentage_to_px, resolve};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
