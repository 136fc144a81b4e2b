#![forbid(unsafe_code)]

//! `splitview-web` drives a compare slider from host notifications.
//!
//! Design goals:
//! - **Host-driven I/O**: the embedding surface (JS glue, a native shell, a
//!   test harness) pushes pointer events, size observations and option
//!   changes; the slider answers with render output and explicit
//!   listener/observer commands.
//! - **No hidden bindings**: every listener the slider needs is requested
//!   through a [`HostCommand`] and released the same way.
//! - **No threads, no globals**: each [`CompareSlider`] owns its state.
//!
//! The crate does not bind to `wasm-bindgen`; glue code wraps
//! [`CompareSlider`] and, with the `input-parser` feature, feeds it through
//! [`input_parser::parse_host_event`].

#[cfg(feature = "input-parser")]
pub mod input_parser;
pub mod options;
pub mod pointer_session;
pub mod slider;

pub use options::{SliderConfigError, SliderOptions};
pub use pointer_session::{
    InteractiveTarget, ListenerCommand, ListenerOptions, ListenerRegistry, ListenerScope,
    ListenerSet, PointerSession, SessionDispatch, SessionIgnoredReason, SessionLogEntry,
    SessionLogOutcome, SessionPhase, SessionState,
};
pub use slider::{CompareSlider, HostCommand, LayoutHost, SliderDispatch};
