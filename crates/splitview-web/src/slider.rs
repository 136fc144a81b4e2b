#![forbid(unsafe_code)]

//! Compare-slider widget instance.
//!
//! [`CompareSlider`] is the host-facing object: the embedding surface pushes
//! lifecycle notifications, pointer events, resize observations and option
//! changes, and every call answers with a [`SliderDispatch`] describing what
//! to render and which listeners/observers to (un)bind. Geometry is read
//! from a [`LayoutHost`] at the moment it is needed, never cached across
//! calls.

use core::fmt;

use splitview_core::event::HostEvent;
use splitview_core::{ContainerBounds, ContentSize, Orientation, PageScroll};
use splitview_layout::{
    BoundsTracker, ObserverCommand, PositionReconciler, RenderOutput, UpdateOutcome,
    UpdateRequest,
};

use crate::options::{SliderConfigError, SliderOptions};
use crate::pointer_session::{
    InteractiveTarget, ListenerCommand, PointerSession, SessionLogEntry, SessionState,
};

/// Layout queries the engine needs from its host.
pub trait LayoutHost {
    /// Current container geometry, or `None` when the container is absent.
    fn bounds(&self) -> Option<ContainerBounds>;

    /// Current page scroll offsets.
    fn page_scroll(&self) -> PageScroll {
        PageScroll::ZERO
    }
}

/// Fixed geometry, for hosts that already know their layout (and tests).
impl LayoutHost for ContainerBounds {
    fn bounds(&self) -> Option<ContainerBounds> {
        Some(*self)
    }
}

/// Side-effect command for the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    Listener(ListenerCommand),
    Observer(ObserverCommand),
}

/// Result of one slider call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SliderDispatch {
    /// Reconciliation result, when a position update was attempted.
    pub outcome: Option<UpdateOutcome>,
    /// Commands to apply in order.
    pub commands: Vec<HostCommand>,
    /// Whether the host must suppress the event's default action.
    pub prevent_default: bool,
    /// Pointer session record, for event dispatches.
    pub log: Option<SessionLogEntry>,
}

impl SliderDispatch {
    /// Render output of an accepted update.
    #[must_use]
    pub fn output(&self) -> Option<&RenderOutput> {
        self.outcome.as_ref().and_then(UpdateOutcome::output)
    }

    fn with_listeners(commands: Vec<ListenerCommand>) -> Self {
        Self {
            commands: commands.into_iter().map(HostCommand::Listener).collect(),
            ..Self::default()
        }
    }
}

type PositionCallback = Box<dyn FnMut(f64)>;

/// One compare slider.
pub struct CompareSlider {
    options: SliderOptions,
    reconciler: PositionReconciler,
    tracker: BoundsTracker,
    session: PointerSession,
    on_position_change: Option<PositionCallback>,
    mounted: bool,
}

impl fmt::Debug for CompareSlider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompareSlider")
            .field("options", &self.options)
            .field("reconciler", &self.reconciler)
            .field("tracker", &self.tracker)
            .field("session", &self.session)
            .field("has_callback", &self.on_position_change.is_some())
            .field("mounted", &self.mounted)
            .finish()
    }
}

impl CompareSlider {
    /// Create an unmounted slider.
    pub fn new(options: SliderOptions) -> Result<Self, SliderConfigError> {
        options.validate()?;
        Ok(Self {
            options,
            reconciler: PositionReconciler::new(options.position),
            tracker: BoundsTracker::new(),
            session: PointerSession::new(
                options.interactive_target(),
                options.change_position_on_hover,
            ),
            on_position_change: None,
            mounted: false,
        })
    }

    /// Register the position-change notification. Replaces any previous one.
    pub fn set_on_position_change(&mut self, callback: impl FnMut(f64) + 'static) {
        self.on_position_change = Some(Box::new(callback));
    }

    /// Remove the position-change notification.
    pub fn clear_on_position_change(&mut self) {
        self.on_position_change = None;
    }

    /// The container is in the host tree and laid out.
    ///
    /// Connects the resize observer, binds root listeners and syncs the
    /// divider against the first bounds read.
    pub fn mount<H: LayoutHost + ?Sized>(&mut self, host: &H) -> SliderDispatch {
        self.mounted = true;
        let mut dispatch =
            SliderDispatch::with_listeners(self.session.target_mounted(InteractiveTarget::Root));
        if let Some(command) = self.tracker.connect() {
            dispatch.commands.push(HostCommand::Observer(command));
        }
        dispatch.outcome = self.apply(UpdateRequest::Resync, host);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "slider.mount",
            position = self.reconciler.position(),
            synced = self.reconciler.did_sync_bounds(),
        );

        dispatch
    }

    /// Replace the options.
    ///
    /// Listener bindings follow the new interactive target and hover mode.
    /// A changed external position resets the divider; any other geometric
    /// change re-derives it from the current position.
    pub fn set_options<H: LayoutHost + ?Sized>(
        &mut self,
        options: SliderOptions,
        host: &H,
    ) -> Result<SliderDispatch, SliderConfigError> {
        options.validate()?;
        let previous = self.options;
        self.options = options;

        let mut commands = self
            .session
            .set_interactive_target(options.interactive_target());
        commands.extend(
            self.session
                .set_hover_enabled(options.change_position_on_hover),
        );
        let mut dispatch = SliderDispatch::with_listeners(commands);

        let geometry_changed = previous.position != options.position
            || previous.orientation != options.orientation
            || previous.bounds_padding != options.bounds_padding
            || previous.transform_style != options.transform_style;
        if !geometry_changed {
            return Ok(dispatch);
        }

        if self.mounted {
            let request = self.reconciler.reconcile_props(&options.prop_snapshot());
            dispatch.outcome = self.apply(request, host);
        } else if previous.position != options.position {
            // Nothing rendered yet; start over from the new position.
            self.reconciler = PositionReconciler::new(options.position);
        }
        Ok(dispatch)
    }

    /// Dispatch one host pointer event.
    pub fn handle_event<H: LayoutHost + ?Sized>(
        &mut self,
        event: &HostEvent,
        host: &H,
    ) -> SliderDispatch {
        let session = self.session.handle(event);
        let outcome = session
            .request
            .and_then(|request| self.apply(request, host));
        SliderDispatch {
            outcome,
            commands: session
                .commands
                .into_iter()
                .map(HostCommand::Listener)
                .collect(),
            prevent_default: session.prevent_default,
            log: Some(session.log),
        }
    }

    /// Accept one content-size notification from the resize observer.
    pub fn observe_resize<H: LayoutHost + ?Sized>(
        &mut self,
        size: ContentSize,
        host: &H,
    ) -> SliderDispatch {
        let Some(bounds) = host.bounds() else {
            return SliderDispatch::default();
        };
        let Some(coord) = self
            .tracker
            .observe(size, self.reconciler.position(), &bounds.rect)
        else {
            return SliderDispatch::default();
        };
        SliderDispatch {
            outcome: self.apply(UpdateRequest::Local { coord }, host),
            ..SliderDispatch::default()
        }
    }

    /// An interactive element entered the host tree.
    pub fn target_mounted(&mut self, target: InteractiveTarget) -> SliderDispatch {
        SliderDispatch::with_listeners(self.session.target_mounted(target))
    }

    /// An interactive element left the host tree.
    pub fn target_unmounted(&mut self, target: InteractiveTarget) -> SliderDispatch {
        SliderDispatch::with_listeners(self.session.target_unmounted(target))
    }

    /// The container left the host tree. Releases every binding.
    pub fn unmount(&mut self) -> SliderDispatch {
        self.mounted = false;
        let mut dispatch = SliderDispatch::with_listeners(self.session.teardown());
        if let Some(command) = self.tracker.disconnect() {
            dispatch.commands.push(HostCommand::Observer(command));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(message = "slider.unmount", released = dispatch.commands.len());

        dispatch
    }

    /// Current divider position in `[0, 100]`.
    #[must_use]
    pub const fn position(&self) -> f64 {
        self.reconciler.position()
    }

    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.session.is_dragging()
    }

    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    #[must_use]
    pub const fn session_state(&self) -> SessionState {
        self.session.state()
    }

    /// Output of the most recent accepted update.
    #[must_use]
    pub const fn last_output(&self) -> Option<&RenderOutput> {
        self.reconciler.last_output()
    }

    #[must_use]
    pub const fn options(&self) -> &SliderOptions {
        &self.options
    }

    /// Cursor for the container while dragging.
    #[must_use]
    pub const fn cursor(&self) -> Option<&'static str> {
        self.session.cursor(self.options.orientation)
    }

    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.options.orientation
    }

    #[must_use]
    pub const fn session(&self) -> &PointerSession {
        &self.session
    }

    #[must_use]
    pub const fn tracker(&self) -> &BoundsTracker {
        &self.tracker
    }

    fn apply<H: LayoutHost + ?Sized>(
        &mut self,
        request: UpdateRequest,
        host: &H,
    ) -> Option<UpdateOutcome> {
        let bounds = host.bounds()?;
        let outcome = self.reconciler.apply(
            request,
            &self.options.update_context(),
            &bounds,
            host.page_scroll(),
        );
        if let (UpdateOutcome::Applied(output), Some(callback)) =
            (&outcome, self.on_position_change.as_mut())
        {
            callback(output.percentage);
        }
        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use splitview_core::event::{EventOrigin, PointerButton};
    use splitview_core::{BoundingRect, PagePoint};
    use splitview_layout::SkipReason;

    use crate::pointer_session::{ListenerScope, ListenerSet};

    fn host(width: f64, height: f64) -> ContainerBounds {
        ContainerBounds::unscaled(BoundingRect::from_size(width, height))
    }

    struct Detached;

    impl LayoutHost for Detached {
        fn bounds(&self) -> Option<ContainerBounds> {
            None
        }
    }

    fn press(x: f64) -> HostEvent {
        HostEvent::MouseDown {
            origin: EventOrigin::Container,
            button: PointerButton::Primary,
            point: PagePoint::new(x, 0.0),
        }
    }

    #[test]
    fn new_rejects_invalid_options() {
        let err = CompareSlider::new(SliderOptions::new().bounds_padding(-2.0)).unwrap_err();
        assert_eq!(err, SliderConfigError::NegativeBoundsPadding { value: -2.0 });
    }

    #[test]
    fn mount_binds_root_observes_and_renders() {
        let mut slider = CompareSlider::new(SliderOptions::default()).unwrap();
        let dispatch = slider.mount(&host(400.0, 300.0));

        let output = dispatch.output().expect("rendered");
        assert_eq!(output.clamped_px, 200.0);
        assert!(dispatch
            .commands
            .contains(&HostCommand::Observer(ObserverCommand::Observe)));
        assert_eq!(
            slider
                .session()
                .registry()
                .bound(ListenerScope::Target(InteractiveTarget::Root)),
            ListenerSet::PRESS
        );
        assert!(slider.is_mounted());
    }

    #[test]
    fn mount_without_bounds_renders_nothing() {
        let mut slider = CompareSlider::new(SliderOptions::default()).unwrap();
        let dispatch = slider.mount(&Detached);
        assert!(dispatch.outcome.is_none());
        assert_eq!(slider.last_output(), None);
    }

    #[test]
    fn zero_sized_mount_skips_then_resize_syncs() {
        let mut slider = CompareSlider::new(SliderOptions::default()).unwrap();
        let dispatch = slider.mount(&host(0.0, 0.0));
        assert_eq!(
            dispatch.outcome,
            Some(UpdateOutcome::Skipped(SkipReason::ZeroSizedContainer))
        );

        let dispatch = slider.observe_resize(ContentSize::new(600.0, 200.0), &host(600.0, 200.0));
        assert_eq!(dispatch.output().map(|o| o.clamped_px), Some(300.0));
        assert_eq!(slider.position(), 50.0);
    }

    #[test]
    fn callback_fires_on_applied_updates_only() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut slider = CompareSlider::new(SliderOptions::default()).unwrap();
        slider.set_on_position_change(move |p| sink.borrow_mut().push(p));

        let bounds = host(400.0, 100.0);
        slider.mount(&bounds);
        slider.handle_event(&press(500.0), &bounds);
        slider.handle_event(&press(600.0), &bounds);

        assert_eq!(*seen.borrow(), vec![50.0, 100.0]);
    }

    #[test]
    fn missing_callback_is_a_no_op() {
        let mut slider = CompareSlider::new(SliderOptions::default()).unwrap();
        let bounds = host(400.0, 100.0);
        slider.mount(&bounds);
        slider.clear_on_position_change();
        let dispatch = slider.handle_event(&press(100.0), &bounds);
        assert_eq!(dispatch.output().map(|o| o.percentage), Some(25.0));
    }

    #[test]
    fn set_options_before_mount_restarts_from_new_position() {
        let mut slider = CompareSlider::new(SliderOptions::default()).unwrap();
        let dispatch = slider
            .set_options(SliderOptions::new().position(80.0), &Detached)
            .unwrap();
        assert!(dispatch.outcome.is_none());
        assert_eq!(slider.position(), 80.0);

        let dispatch = slider.mount(&host(100.0, 100.0));
        assert_eq!(dispatch.output().map(|o| o.clamped_px), Some(80.0));
    }

    #[test]
    fn set_options_rejects_without_mutation() {
        let mut slider = CompareSlider::new(SliderOptions::default()).unwrap();
        let err = slider
            .set_options(SliderOptions::new().position(f64::NAN), &Detached)
            .unwrap_err();
        assert!(matches!(err, SliderConfigError::NonFinitePosition { .. }));
        assert_eq!(slider.options(), &SliderOptions::default());
    }

    #[test]
    fn unmount_releases_listeners_and_observer() {
        let mut slider = CompareSlider::new(SliderOptions::default()).unwrap();
        let bounds = host(400.0, 100.0);
        slider.mount(&bounds);
        slider.handle_event(&press(100.0), &bounds);
        assert!(slider.is_dragging());

        let dispatch = slider.unmount();
        assert!(dispatch
            .commands
            .contains(&HostCommand::Observer(ObserverCommand::Disconnect)));
        assert!(slider.session().registry().is_empty());
        assert!(!slider.is_dragging());
        assert!(!slider.tracker().is_observing());
    }

    #[test]
    fn cursor_follows_orientation_while_dragging() {
        let mut slider = CompareSlider::new(SliderOptions::new().portrait(true)).unwrap();
        let bounds = host(100.0, 400.0);
        slider.mount(&bounds);
        assert_eq!(slider.cursor(), None);
        slider.handle_event(
            &HostEvent::MouseDown {
                origin: EventOrigin::Container,
                button: PointerButton::Primary,
                point: PagePoint::new(0.0, 100.0),
            },
            &bounds,
        );
        assert_eq!(slider.cursor(), Some("ns-resize"));
        assert_eq!(slider.position(), 25.0);
    }
}
