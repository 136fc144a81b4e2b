#![forbid(unsafe_code)]

//! Container size observation.
//!
//! [`BoundsTracker`] mirrors a resize-observation primitive: the host
//! connects it once the container exists, forwards every content-size
//! notification, and disconnects it when the container goes away. Each
//! accepted observation yields a container-relative coordinate that places
//! the divider at the same logical fraction of the new size, so resizes and
//! zoom changes never shift the divider's relative position.

use splitview_core::{BoundingRect, ContentSize, PagePoint, percentage_to_px};

/// Observer lifecycle command for the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObserverCommand {
    /// Start observing the container element.
    Observe,
    /// Stop observing and release the observer.
    Disconnect,
}

/// When layout-dependent reads may run relative to paint.
///
/// Geometry can only be read after the container is sized. Hosts that can
/// run callbacks after layout but before paint should do so to avoid a
/// visible frame with the divider in the wrong place; other hosts run
/// after mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EffectTiming {
    BeforePaint,
    #[default]
    AfterMount,
}

impl EffectTiming {
    /// Pick the earliest timing the host supports.
    #[must_use]
    pub const fn select(supports_pre_paint: bool) -> Self {
        if supports_pre_paint {
            Self::BeforePaint
        } else {
            Self::AfterMount
        }
    }
}

/// Resize-observation state for one container.
#[derive(Debug, Clone, Default)]
pub struct BoundsTracker {
    observing: bool,
    last_size: Option<ContentSize>,
}

impl BoundsTracker {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            observing: false,
            last_size: None,
        }
    }

    /// Whether the observer is currently connected.
    #[must_use]
    pub const fn is_observing(&self) -> bool {
        self.observing
    }

    /// Last content size accepted from the host.
    #[must_use]
    pub const fn last_size(&self) -> Option<ContentSize> {
        self.last_size
    }

    /// Connect the observer. Returns `None` if already connected.
    pub fn connect(&mut self) -> Option<ObserverCommand> {
        if self.observing {
            return None;
        }
        self.observing = true;
        Some(ObserverCommand::Observe)
    }

    /// Disconnect the observer. Returns `None` if already disconnected.
    pub fn disconnect(&mut self) -> Option<ObserverCommand> {
        if !self.observing {
            return None;
        }
        self.observing = false;
        self.last_size = None;
        Some(ObserverCommand::Disconnect)
    }

    /// Replace the observer binding: disconnect (if connected), then observe.
    pub fn reconnect(&mut self) -> Vec<ObserverCommand> {
        let mut commands = Vec::with_capacity(2);
        commands.extend(self.disconnect());
        commands.extend(self.connect());
        commands
    }

    /// Accept one content-size notification.
    ///
    /// `percentage` is the currently remembered position and `rendered` the
    /// container's rendered box read fresh from the host. Returns the
    /// container-relative coordinate to feed through reconciliation, or
    /// `None` when disconnected, when the size is zero, or when the size is
    /// unchanged since the last observation.
    pub fn observe(
        &mut self,
        size: ContentSize,
        percentage: f64,
        rendered: &BoundingRect,
    ) -> Option<PagePoint> {
        if !self.observing || size.is_empty() {
            return None;
        }
        if self.last_size == Some(size) {
            return None;
        }
        self.last_size = Some(size);

        // Logical size scaled back up to the rendered box.
        let x = percentage_to_px(size.width, percentage) * rendered.width / size.width;
        let y = percentage_to_px(size.height, percentage) * rendered.height / size.height;
        Some(PagePoint::new(x, y))
    }
}
