#![forbid(unsafe_code)]

//! JSON input parser for host glue that forwards DOM events as JSON.
//!
//! [`parse_host_event`] accepts objects shaped like the DOM events the glue
//! observes:
//!
//! ```json
//! {"type":"mousedown","origin":"handle","button":0,"pageX":120,"pageY":40}
//! {"type":"touchmove","origin":"viewport","touches":[{"pageX":80,"pageY":10}]}
//! ```
//!
//! `origin` is optional: presses default to the container and everything
//! else to the viewport, which is where the slider binds those listeners.
//! Event types the slider does not listen to return `Ok(None)`.

use serde::Deserialize;
use splitview_core::PagePoint;
use splitview_core::event::{EventOrigin, HostEvent, PointerButton};

/// Errors from parsing host input JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputParseError {
    /// Malformed JSON.
    Json(String),
    /// Missing required field.
    MissingField(&'static str),
    /// Unknown `origin` value.
    UnknownOrigin(String),
}

impl core::fmt::Display for InputParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Json(msg) => write!(f, "JSON parse error: {msg}"),
            Self::MissingField(field) => write!(f, "missing required field: {field}"),
            Self::UnknownOrigin(origin) => write!(f, "unknown origin: {origin}"),
        }
    }
}

impl std::error::Error for InputParseError {}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawInput {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    origin: Option<String>,
    #[serde(default)]
    button: Option<i32>,
    #[serde(default)]
    page_x: Option<f64>,
    #[serde(default)]
    page_y: Option<f64>,
    #[serde(default)]
    touches: Vec<RawTouch>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTouch {
    page_x: f64,
    page_y: f64,
}

/// Parse one JSON-encoded host event.
///
/// Returns `Ok(None)` for event types with no [`HostEvent`] mapping and for
/// mouse buttons outside the primary/middle/secondary set.
///
/// Returns `Err` for malformed JSON, a mouse event without coordinates, or an
/// unknown origin.
pub fn parse_host_event(json: &str) -> Result<Option<HostEvent>, InputParseError> {
    let raw: RawInput =
        serde_json::from_str(json).map_err(|e| InputParseError::Json(e.to_string()))?;

    let event = match raw.kind.as_str() {
        "mousedown" => {
            let Some(button) = PointerButton::from_dom_code(raw.button.unwrap_or(0)) else {
                return Ok(None);
            };
            HostEvent::MouseDown {
                origin: parse_origin(&raw, EventOrigin::Container)?,
                button,
                point: mouse_point(&raw)?,
            }
        }
        "touchstart" => HostEvent::TouchStart {
            origin: parse_origin(&raw, EventOrigin::Container)?,
            point: first_touch(&raw),
        },
        "mousemove" => HostEvent::MouseMove {
            origin: parse_origin(&raw, EventOrigin::Viewport)?,
            point: mouse_point(&raw)?,
        },
        "touchmove" => HostEvent::TouchMove {
            origin: parse_origin(&raw, EventOrigin::Viewport)?,
            point: first_touch(&raw),
        },
        "mouseup" => HostEvent::MouseUp {
            origin: parse_origin(&raw, EventOrigin::Viewport)?,
        },
        "touchend" | "touchcancel" => HostEvent::TouchEnd {
            origin: parse_origin(&raw, EventOrigin::Viewport)?,
        },
        "mouseleave" => HostEvent::MouseLeave,
        _ => return Ok(None),
    };
    Ok(Some(event))
}

fn parse_origin(raw: &RawInput, default: EventOrigin) -> Result<EventOrigin, InputParseError> {
    match raw.origin.as_deref() {
        None => Ok(default),
        Some("handle") => Ok(EventOrigin::Handle),
        Some("container") => Ok(EventOrigin::Container),
        Some("viewport" | "window") => Ok(EventOrigin::Viewport),
        Some(other) => Err(InputParseError::UnknownOrigin(other.to_owned())),
    }
}

fn mouse_point(raw: &RawInput) -> Result<PagePoint, InputParseError> {
    let x = raw.page_x.ok_or(InputParseError::MissingField("pageX"))?;
    let y = raw.page_y.ok_or(InputParseError::MissingField("pageY"))?;
    Ok(PagePoint::new(x, y))
}

fn first_touch(raw: &RawInput) -> Option<PagePoint> {
    raw.touches
        .first()
        .map(|touch| PagePoint::new(touch.page_x, touch.page_y))
}
