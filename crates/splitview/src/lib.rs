#![forbid(unsafe_code)]

//! splitview public facade crate.
//!
//! A host-driven engine for before/after compare sliders: a divider over a
//! container that the user drags (or hovers) to reveal more of one side.
//! This crate re-exports the common types from the internal crates and
//! offers a small prelude for embedding code.
//!
//! ```
//! use splitview::prelude::*;
//!
//! let host = ContainerBounds::unscaled(BoundingRect::from_size(400.0, 300.0));
//! let mut slider = CompareSlider::new(SliderOptions::default())?;
//! slider.mount(&host);
//!
//! let press = HostEvent::MouseDown {
//!     origin: EventOrigin::Container,
//!     button: PointerButton::Primary,
//!     point: PagePoint::new(100.0, 20.0),
//! };
//! let dispatch = slider.handle_event(&press, &host);
//! assert_eq!(dispatch.output().map(|o| o.clip_css()).as_deref(), Some("rect(auto,100px,auto,auto)"));
//! assert_eq!(slider.position(), 25.0);
//! # Ok::<(), splitview::Error>(())
//! ```

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use splitview_core::event::{EventOrigin, HostEvent, PointerButton, PointerSource};
pub use splitview_core::{
    BoundingRect, ContainerBounds, ContentSize, Orientation, PagePoint, PageScroll, Resolution,
    ResolveInput, clamp_percentage, resolve,
};

// --- Layout re-exports -----------------------------------------------------

pub use splitview_layout::{
    BoundsTracker, ClipRegion, DividerTransform, EffectTiming, ObserverCommand,
    PositionReconciler, RenderOutput, SkipReason, TransformStyle, UpdateOutcome, UpdateRequest,
};

// --- Web re-exports --------------------------------------------------------

#[cfg(feature = "input-parser")]
pub use splitview_web::input_parser::{InputParseError, parse_host_event};
pub use splitview_web::{
    CompareSlider, HostCommand, InteractiveTarget, LayoutHost, ListenerCommand, ListenerOptions,
    ListenerScope, ListenerSet, SessionIgnoredReason, SessionLogEntry, SessionState,
    SliderConfigError, SliderDispatch, SliderOptions,
};

// --- Logging ----------------------------------------------------------------

#[cfg(feature = "tracing-json")]
pub use splitview_core::logging::init_json_subscriber;

// --- Errors ---------------------------------------------------------------

/// Top-level error type for splitview embedders.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Rejected slider options.
    Config(SliderConfigError),
    /// Host input that could not be decoded.
    #[cfg(feature = "input-parser")]
    InputParse(InputParseError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid slider options: {err}"),
            #[cfg(feature = "input-parser")]
            Self::InputParse(err) => write!(f, "invalid host input: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            #[cfg(feature = "input-parser")]
            Self::InputParse(err) => Some(err),
        }
    }
}

impl From<SliderConfigError> for Error {
    fn from(err: SliderConfigError) -> Self {
        Self::Config(err)
    }
}

#[cfg(feature = "input-parser")]
impl From<InputParseError> for Error {
    fn from(err: InputParseError) -> Self {
        Self::InputParse(err)
    }
}

/// Standard result type for splitview APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        BoundingRect, CompareSlider, ContainerBounds, ContentSize, Error, EventOrigin,
        HostCommand, HostEvent, LayoutHost, Orientation, PagePoint, PageScroll, PointerButton,
        RenderOutput, Result, SliderDispatch, SliderOptions, TransformStyle,
    };

    pub use crate::{core, layout, web};
}

pub use splitview_core as core;
pub use splitview_layout as layout;
pub use splitview_web as web;
