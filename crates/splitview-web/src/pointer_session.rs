#![forbid(unsafe_code)]

//! Deterministic pointer session for divider drags.
//!
//! This module turns host mouse/touch notifications into position update
//! requests while enforcing:
//! - one drag session at a time, entered only from the interactive target,
//! - viewport-level move/release listeners bound exactly once per session
//!   and released on release or teardown,
//! - explicit bind/unbind commands for the host (never implicit), and
//! - deferred binding when the interactive target is not mounted yet.
//!
//! ```text
//! Idle --press--> Dragging --release--> Idle
//!   ^                                     |
//!   +------- leave (hover mode) ----------+
//! ```

use bitflags::bitflags;
use splitview_core::event::{EventOrigin, HostEvent, PointerButton, PointerSource};
use splitview_core::{Orientation, PagePoint};
use splitview_layout::UpdateRequest;

bitflags! {
    /// Set of host event listeners.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ListenerSet: u8 {
        const MOUSE_DOWN  = 1 << 0;
        const TOUCH_START = 1 << 1;
        const MOUSE_MOVE  = 1 << 2;
        const MOUSE_UP    = 1 << 3;
        const TOUCH_MOVE  = 1 << 4;
        const TOUCH_END   = 1 << 5;
        const MOUSE_LEAVE = 1 << 6;

        /// Drag entry on the interactive target.
        const PRESS = Self::MOUSE_DOWN.bits() | Self::TOUCH_START.bits();
        /// Viewport listeners held for the duration of a drag.
        const DRAG = Self::MOUSE_MOVE.bits()
            | Self::MOUSE_UP.bits()
            | Self::TOUCH_MOVE.bits()
            | Self::TOUCH_END.bits();
        /// Container listeners for hover-driven updates.
        const HOVER = Self::MOUSE_MOVE.bits() | Self::MOUSE_LEAVE.bits();
    }
}

/// Element that accepts drag-starting presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InteractiveTarget {
    /// The whole container (presses on the handle bubble up to it).
    #[default]
    Root,
    /// Only the divider handle.
    Handle,
}

impl InteractiveTarget {
    /// Pick the target for the `only_handle_draggable` option.
    #[must_use]
    pub const fn from_only_handle(only_handle_draggable: bool) -> Self {
        if only_handle_draggable {
            Self::Handle
        } else {
            Self::Root
        }
    }

    /// Whether a press delivered at `origin` reaches this target.
    #[must_use]
    pub const fn accepts(self, origin: EventOrigin) -> bool {
        match self {
            Self::Root => matches!(origin, EventOrigin::Handle | EventOrigin::Container),
            Self::Handle => matches!(origin, EventOrigin::Handle),
        }
    }
}

/// Element a listener set is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerScope {
    /// The whole viewport (window).
    Viewport,
    /// The root container.
    Container,
    /// The interactive target.
    Target(InteractiveTarget),
}

/// Host listener registration options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerOptions {
    pub passive: bool,
    pub capture: bool,
}

impl ListenerOptions {
    /// Passive bubbling listener; the handler never suppresses defaults.
    pub const PASSIVE: Self = Self {
        passive: true,
        capture: false,
    };
    /// Capturing, non-passive listener; the handler may suppress defaults.
    pub const CAPTURE_ACTIVE: Self = Self {
        passive: false,
        capture: true,
    };
}

/// Listener bind/unbind command for the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerCommand {
    Bind {
        scope: ListenerScope,
        events: ListenerSet,
        options: ListenerOptions,
    },
    Unbind {
        scope: ListenerScope,
        events: ListenerSet,
    },
}

/// Bookkeeping of what the host currently has bound.
///
/// Binding a scope that already holds listeners releases them first, so the
/// host never accumulates duplicate registrations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListenerRegistry {
    viewport: ListenerSet,
    container: ListenerSet,
    target: Option<(InteractiveTarget, ListenerSet)>,
}

impl ListenerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Listeners currently bound on `scope`.
    #[must_use]
    pub fn bound(&self, scope: ListenerScope) -> ListenerSet {
        match scope {
            ListenerScope::Viewport => self.viewport,
            ListenerScope::Container => self.container,
            ListenerScope::Target(target) => match self.target {
                Some((bound, events)) if bound == target => events,
                _ => ListenerSet::empty(),
            },
        }
    }

    /// Whether nothing is bound anywhere.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.viewport.is_empty() && self.container.is_empty() && self.target.is_none()
    }

    /// Bind `events` on `scope`. No-op if exactly that set is already bound.
    pub fn bind(
        &mut self,
        scope: ListenerScope,
        events: ListenerSet,
        options: ListenerOptions,
        commands: &mut Vec<ListenerCommand>,
    ) {
        if events.is_empty() || self.bound(scope) == events {
            return;
        }
        match scope {
            ListenerScope::Viewport => {
                self.unbind(scope, commands);
                self.viewport = events;
            }
            ListenerScope::Container => {
                self.unbind(scope, commands);
                self.container = events;
            }
            ListenerScope::Target(target) => {
                self.unbind_target(commands);
                self.target = Some((target, events));
            }
        }
        commands.push(ListenerCommand::Bind {
            scope,
            events,
            options,
        });
    }

    /// Release everything bound on `scope`.
    pub fn unbind(&mut self, scope: ListenerScope, commands: &mut Vec<ListenerCommand>) {
        let events = self.bound(scope);
        if events.is_empty() {
            return;
        }
        match scope {
            ListenerScope::Viewport => self.viewport = ListenerSet::empty(),
            ListenerScope::Container => self.container = ListenerSet::empty(),
            ListenerScope::Target(_) => self.target = None,
        }
        commands.push(ListenerCommand::Unbind { scope, events });
    }

    /// Release every binding.
    pub fn release_all(&mut self, commands: &mut Vec<ListenerCommand>) {
        self.unbind(ListenerScope::Viewport, commands);
        self.unbind(ListenerScope::Container, commands);
        self.unbind_target(commands);
    }

    fn unbind_target(&mut self, commands: &mut Vec<ListenerCommand>) {
        if let Some((target, _)) = self.target {
            self.unbind(ListenerScope::Target(target), commands);
        }
    }
}

/// Drag session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Dragging {
        source: PointerSource,
    },
}

/// Lifecycle phase recorded for one dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Press,
    Move,
    Release,
    Leave,
}

/// Deterministic reason why an incoming event was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionIgnoredReason {
    /// The interactive target has not been mounted, so nothing is bound.
    TargetNotMounted,
    /// The press was delivered outside the interactive target.
    OriginNotInteractive,
    ButtonNotAllowed,
    /// A touch event arrived without any touch point.
    MissingTouchPoint,
    /// Viewport move/release while no drag is active.
    NotDragging,
    /// Container move/leave while hover mode is off.
    HoverDisabled,
    /// Leaving the container never ends an active drag.
    LeaveWhileDragging,
    /// Hover only follows the mouse; container touch moves are not bound.
    TouchNotHover,
}

/// Outcome category for one dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionLogOutcome {
    /// A position update request was produced.
    UpdateForwarded,
    /// Drag state changed without a position update.
    StateUpdated,
    Ignored(SessionIgnoredReason),
}

/// Structured log record for one dispatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionLogEntry {
    pub phase: SessionPhase,
    pub sequence: u64,
    pub source: PointerSource,
    pub origin: EventOrigin,
    pub point: Option<PagePoint>,
    pub outcome: SessionLogOutcome,
}

/// Result of one event dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionDispatch {
    /// Position update to run through reconciliation.
    pub request: Option<UpdateRequest>,
    /// Listener changes the host must apply, in order.
    pub commands: Vec<ListenerCommand>,
    /// Whether the host must suppress the event's default action.
    pub prevent_default: bool,
    pub log: SessionLogEntry,
}

/// Pointer session for one widget instance.
#[derive(Debug, Clone, Default)]
pub struct PointerSession {
    state: SessionState,
    registry: ListenerRegistry,
    target: InteractiveTarget,
    hover_enabled: bool,
    root_mounted: bool,
    handle_mounted: bool,
    next_sequence: u64,
}

impl PointerSession {
    #[must_use]
    pub fn new(target: InteractiveTarget, hover_enabled: bool) -> Self {
        Self {
            target,
            hover_enabled,
            next_sequence: 1,
            ..Self::default()
        }
    }

    /// Current drag state.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self.state, SessionState::Dragging { .. })
    }

    /// Whether viewport drag listeners are currently bound.
    #[must_use]
    pub fn has_viewport_binding(&self) -> bool {
        !self.registry.bound(ListenerScope::Viewport).is_empty()
    }

    /// Current listener bookkeeping.
    #[must_use]
    pub const fn registry(&self) -> &ListenerRegistry {
        &self.registry
    }

    #[must_use]
    pub const fn interactive_target(&self) -> InteractiveTarget {
        self.target
    }

    /// Resize cursor to show on the container while dragging.
    #[must_use]
    pub const fn cursor(&self, orientation: Orientation) -> Option<&'static str> {
        if !self.is_dragging() {
            return None;
        }
        Some(match orientation {
            Orientation::Horizontal => "ew-resize",
            Orientation::Vertical => "ns-resize",
        })
    }

    /// Record that `target` now exists in the host tree and bind anything
    /// that was waiting on it.
    pub fn target_mounted(&mut self, target: InteractiveTarget) -> Vec<ListenerCommand> {
        match target {
            InteractiveTarget::Root => self.root_mounted = true,
            InteractiveTarget::Handle => self.handle_mounted = true,
        }
        self.sync_bindings()
    }

    /// Record that `target` left the host tree and release its listeners.
    pub fn target_unmounted(&mut self, target: InteractiveTarget) -> Vec<ListenerCommand> {
        match target {
            InteractiveTarget::Root => self.root_mounted = false,
            InteractiveTarget::Handle => self.handle_mounted = false,
        }
        self.sync_bindings()
    }

    /// Switch the press-interactive target.
    pub fn set_interactive_target(&mut self, target: InteractiveTarget) -> Vec<ListenerCommand> {
        if self.target == target {
            return Vec::new();
        }
        self.target = target;
        self.sync_bindings()
    }

    /// Enable or disable hover-driven updates.
    pub fn set_hover_enabled(&mut self, enabled: bool) -> Vec<ListenerCommand> {
        if self.hover_enabled == enabled {
            return Vec::new();
        }
        self.hover_enabled = enabled;
        self.sync_bindings()
    }

    /// Release every binding and return to idle.
    pub fn teardown(&mut self) -> Vec<ListenerCommand> {
        let mut commands = Vec::new();
        self.registry.release_all(&mut commands);
        self.state = SessionState::Idle;
        self.root_mounted = false;
        self.handle_mounted = false;
        commands
    }

    /// Dispatch one host event.
    pub fn handle(&mut self, event: &HostEvent) -> SessionDispatch {
        match *event {
            HostEvent::MouseDown { button, .. } if button != PointerButton::Primary => {
                self.ignored(SessionPhase::Press, event, SessionIgnoredReason::ButtonNotAllowed)
            }
            HostEvent::MouseDown { .. } | HostEvent::TouchStart { .. } => self.press(event),
            HostEvent::MouseMove { .. } | HostEvent::TouchMove { .. } => self.pointer_move(event),
            HostEvent::MouseUp { .. } | HostEvent::TouchEnd { .. } => self.release(event),
            HostEvent::MouseLeave => self.leave(event),
        }
    }

    fn press(&mut self, event: &HostEvent) -> SessionDispatch {
        let phase = SessionPhase::Press;
        if !self.target_bound() {
            return self.ignored(phase, event, SessionIgnoredReason::TargetNotMounted);
        }
        if !self.target.accepts(event.origin()) {
            return self.ignored(phase, event, SessionIgnoredReason::OriginNotInteractive);
        }
        let Some(coord) = event.point() else {
            return self.ignored(phase, event, SessionIgnoredReason::MissingTouchPoint);
        };

        self.state = SessionState::Dragging {
            source: event.source(),
        };
        let mut commands = Vec::new();
        self.registry.bind(
            ListenerScope::Viewport,
            ListenerSet::DRAG,
            ListenerOptions::PASSIVE,
            &mut commands,
        );

        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "session.press",
            source = ?event.source(),
            bound_viewport = !commands.is_empty(),
        );

        self.forwarded(phase, event, UpdateRequest::InternalDrag { coord }, commands, true)
    }

    fn pointer_move(&mut self, event: &HostEvent) -> SessionDispatch {
        let phase = SessionPhase::Move;
        match event.origin() {
            EventOrigin::Viewport if !self.is_dragging() => {
                return self.ignored(phase, event, SessionIgnoredReason::NotDragging);
            }
            EventOrigin::Handle | EventOrigin::Container if !self.hover_bound() => {
                return self.ignored(phase, event, SessionIgnoredReason::HoverDisabled);
            }
            EventOrigin::Handle | EventOrigin::Container
                if matches!(event, HostEvent::TouchMove { .. }) =>
            {
                return self.ignored(phase, event, SessionIgnoredReason::TouchNotHover);
            }
            _ => {}
        }
        let Some(coord) = event.point() else {
            return self.ignored(phase, event, SessionIgnoredReason::MissingTouchPoint);
        };
        self.forwarded(
            phase,
            event,
            UpdateRequest::InternalDrag { coord },
            Vec::new(),
            false,
        )
    }

    fn release(&mut self, event: &HostEvent) -> SessionDispatch {
        let phase = SessionPhase::Release;
        if !self.is_dragging() {
            return self.ignored(phase, event, SessionIgnoredReason::NotDragging);
        }
        self.state = SessionState::Idle;
        let mut commands = Vec::new();
        self.registry.unbind(ListenerScope::Viewport, &mut commands);

        #[cfg(feature = "tracing")]
        tracing::debug!(message = "session.release", source = ?event.source());

        self.state_updated(phase, event, commands)
    }

    fn leave(&mut self, event: &HostEvent) -> SessionDispatch {
        let phase = SessionPhase::Leave;
        if !self.hover_bound() {
            return self.ignored(phase, event, SessionIgnoredReason::HoverDisabled);
        }
        if self.is_dragging() {
            return self.ignored(phase, event, SessionIgnoredReason::LeaveWhileDragging);
        }
        self.state = SessionState::Idle;
        self.state_updated(phase, event, Vec::new())
    }

    fn target_mounted_now(&self) -> bool {
        match self.target {
            InteractiveTarget::Root => self.root_mounted,
            InteractiveTarget::Handle => self.handle_mounted,
        }
    }

    fn target_bound(&self) -> bool {
        !self
            .registry
            .bound(ListenerScope::Target(self.target))
            .is_empty()
    }

    fn hover_bound(&self) -> bool {
        !self.registry.bound(ListenerScope::Container).is_empty()
    }

    /// Bring the registry in line with mount state and options.
    fn sync_bindings(&mut self) -> Vec<ListenerCommand> {
        let mut commands = Vec::new();

        if self.target_mounted_now() {
            self.registry.bind(
                ListenerScope::Target(self.target),
                ListenerSet::PRESS,
                ListenerOptions::CAPTURE_ACTIVE,
                &mut commands,
            );
        } else if let Some((bound, _)) = self.registry.target {
            self.registry
                .unbind(ListenerScope::Target(bound), &mut commands);
        }

        if self.hover_enabled && self.root_mounted {
            self.registry.bind(
                ListenerScope::Container,
                ListenerSet::HOVER,
                ListenerOptions::PASSIVE,
                &mut commands,
            );
        } else {
            self.registry
                .unbind(ListenerScope::Container, &mut commands);
        }

        if !self.root_mounted && self.is_dragging() {
            self.state = SessionState::Idle;
            self.registry.unbind(ListenerScope::Viewport, &mut commands);
        }

        commands
    }

    fn forwarded(
        &mut self,
        phase: SessionPhase,
        event: &HostEvent,
        request: UpdateRequest,
        commands: Vec<ListenerCommand>,
        prevent_default: bool,
    ) -> SessionDispatch {
        let log = self.log(phase, event, SessionLogOutcome::UpdateForwarded);
        SessionDispatch {
            request: Some(request),
            commands,
            prevent_default,
            log,
        }
    }

    fn state_updated(
        &mut self,
        phase: SessionPhase,
        event: &HostEvent,
        commands: Vec<ListenerCommand>,
    ) -> SessionDispatch {
        let log = self.log(phase, event, SessionLogOutcome::StateUpdated);
        SessionDispatch {
            request: None,
            commands,
            prevent_default: false,
            log,
        }
    }

    fn ignored(
        &mut self,
        phase: SessionPhase,
        event: &HostEvent,
        reason: SessionIgnoredReason,
    ) -> SessionDispatch {
        #[cfg(feature = "tracing")]
        tracing::trace!(message = "session.ignored", ?phase, ?reason);
        let log = self.log(phase, event, SessionLogOutcome::Ignored(reason));
        SessionDispatch {
            request: None,
            commands: Vec::new(),
            prevent_default: false,
            log,
        }
    }

    fn log(
        &mut self,
        phase: SessionPhase,
        event: &HostEvent,
        outcome: SessionLogOutcome,
    ) -> SessionLogEntry {
        SessionLogEntry {
            phase,
            sequence: self.next_sequence(),
            source: event.source(),
            origin: event.origin(),
            point: event.point(),
            outcome,
        }
    }

    fn next_sequence(&mut self) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence = self.next_sequence.saturating_add(1);
        sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> PagePoint {
        PagePoint::new(x, y)
    }

    fn mouse_down(origin: EventOrigin, x: f64) -> HostEvent {
        HostEvent::MouseDown {
            origin,
            button: PointerButton::Primary,
            point: pt(x, 0.0),
        }
    }

    fn viewport_move(x: f64) -> HostEvent {
        HostEvent::MouseMove {
            origin: EventOrigin::Viewport,
            point: pt(x, 0.0),
        }
    }

    fn mounted_session() -> PointerSession {
        let mut session = PointerSession::new(InteractiveTarget::Root, false);
        let commands = session.target_mounted(InteractiveTarget::Root);
        assert_eq!(
            commands,
            vec![ListenerCommand::Bind {
                scope: ListenerScope::Target(InteractiveTarget::Root),
                events: ListenerSet::PRESS,
                options: ListenerOptions::CAPTURE_ACTIVE,
            }]
        );
        session
    }

    #[test]
    fn press_enters_dragging_and_binds_viewport_once() {
        let mut session = mounted_session();
        let dispatch = session.handle(&mouse_down(EventOrigin::Container, 10.0));
        assert!(dispatch.prevent_default);
        assert_eq!(
            dispatch.request,
            Some(UpdateRequest::InternalDrag { coord: pt(10.0, 0.0) })
        );
        assert_eq!(
            dispatch.commands,
            vec![ListenerCommand::Bind {
                scope: ListenerScope::Viewport,
                events: ListenerSet::DRAG,
                options: ListenerOptions::PASSIVE,
            }]
        );
        assert!(session.is_dragging());
        assert!(session.has_viewport_binding());

        // A second press during the same session must not bind again.
        let again = session.handle(&mouse_down(EventOrigin::Handle, 12.0));
        assert!(again.commands.is_empty());
        assert!(again.request.is_some());
    }

    #[test]
    fn moves_only_forward_while_dragging() {
        let mut session = mounted_session();
        let idle_move = session.handle(&viewport_move(5.0));
        assert_eq!(
            idle_move.log.outcome,
            SessionLogOutcome::Ignored(SessionIgnoredReason::NotDragging)
        );
        assert_eq!(idle_move.request, None);

        session.handle(&mouse_down(EventOrigin::Container, 10.0));
        let drag_move = session.handle(&viewport_move(50.0));
        assert_eq!(drag_move.log.outcome, SessionLogOutcome::UpdateForwarded);
        assert!(!drag_move.prevent_default);
        assert_eq!(
            drag_move.request,
            Some(UpdateRequest::InternalDrag { coord: pt(50.0, 0.0) })
        );
    }

    #[test]
    fn release_unbinds_viewport_and_returns_idle() {
        let mut session = mounted_session();
        session.handle(&mouse_down(EventOrigin::Container, 10.0));
        let up = session.handle(&HostEvent::MouseUp {
            origin: EventOrigin::Viewport,
        });
        assert_eq!(up.log.outcome, SessionLogOutcome::StateUpdated);
        assert_eq!(
            up.commands,
            vec![ListenerCommand::Unbind {
                scope: ListenerScope::Viewport,
                events: ListenerSet::DRAG,
            }]
        );
        assert_eq!(session.state(), SessionState::Idle);
        assert!(!session.has_viewport_binding());

        let stray = session.handle(&HostEvent::MouseUp {
            origin: EventOrigin::Viewport,
        });
        assert_eq!(
            stray.log.outcome,
            SessionLogOutcome::Ignored(SessionIgnoredReason::NotDragging)
        );
    }

    #[test]
    fn secondary_button_is_ignored() {
        let mut session = mounted_session();
        let dispatch = session.handle(&HostEvent::MouseDown {
            origin: EventOrigin::Container,
            button: PointerButton::Secondary,
            point: pt(1.0, 1.0),
        });
        assert_eq!(
            dispatch.log.outcome,
            SessionLogOutcome::Ignored(SessionIgnoredReason::ButtonNotAllowed)
        );
        assert!(!dispatch.prevent_default);
        assert!(!session.is_dragging());
    }

    #[test]
    fn touch_session_tracks_source() {
        let mut session = mounted_session();
        let start = session.handle(&HostEvent::TouchStart {
            origin: EventOrigin::Container,
            point: Some(pt(3.0, 4.0)),
        });
        assert!(start.prevent_default);
        assert_eq!(
            session.state(),
            SessionState::Dragging {
                source: PointerSource::Touch
            }
        );
        let empty = session.handle(&HostEvent::TouchMove {
            origin: EventOrigin::Viewport,
            point: None,
        });
        assert_eq!(
            empty.log.outcome,
            SessionLogOutcome::Ignored(SessionIgnoredReason::MissingTouchPoint)
        );
        let end = session.handle(&HostEvent::TouchEnd {
            origin: EventOrigin::Viewport,
        });
        assert_eq!(end.log.outcome, SessionLogOutcome::StateUpdated);
    }

    #[test]
    fn press_before_mount_is_deferred_noop() {
        let mut session = PointerSession::new(InteractiveTarget::Root, false);
        let dispatch = session.handle(&mouse_down(EventOrigin::Container, 10.0));
        assert_eq!(
            dispatch.log.outcome,
            SessionLogOutcome::Ignored(SessionIgnoredReason::TargetNotMounted)
        );
        assert!(!session.is_dragging());
    }

    #[test]
    fn handle_only_target_waits_for_handle_mount() {
        let mut session = PointerSession::new(InteractiveTarget::Handle, false);
        assert!(session.target_mounted(InteractiveTarget::Root).is_empty());

        let early = session.handle(&mouse_down(EventOrigin::Handle, 10.0));
        assert_eq!(
            early.log.outcome,
            SessionLogOutcome::Ignored(SessionIgnoredReason::TargetNotMounted)
        );

        let commands = session.target_mounted(InteractiveTarget::Handle);
        assert_eq!(
            commands,
            vec![ListenerCommand::Bind {
                scope: ListenerScope::Target(InteractiveTarget::Handle),
                events: ListenerSet::PRESS,
                options: ListenerOptions::CAPTURE_ACTIVE,
            }]
        );

        let outside = session.handle(&mouse_down(EventOrigin::Container, 10.0));
        assert_eq!(
            outside.log.outcome,
            SessionLogOutcome::Ignored(SessionIgnoredReason::OriginNotInteractive)
        );
        let on_handle = session.handle(&mouse_down(EventOrigin::Handle, 10.0));
        assert_eq!(on_handle.log.outcome, SessionLogOutcome::UpdateForwarded);
    }

    #[test]
    fn switching_target_unbinds_previous_first() {
        let mut session = mounted_session();
        session.target_mounted(InteractiveTarget::Handle);
        let commands = session.set_interactive_target(InteractiveTarget::Handle);
        assert_eq!(
            commands,
            vec![
                ListenerCommand::Unbind {
                    scope: ListenerScope::Target(InteractiveTarget::Root),
                    events: ListenerSet::PRESS,
                },
                ListenerCommand::Bind {
                    scope: ListenerScope::Target(InteractiveTarget::Handle),
                    events: ListenerSet::PRESS,
                    options: ListenerOptions::CAPTURE_ACTIVE,
                },
            ]
        );
        assert!(session.set_interactive_target(InteractiveTarget::Handle).is_empty());
    }

    #[test]
    fn hover_mode_ignores_container_touch_moves() {
        let mut session = mounted_session();
        session.set_hover_enabled(true);
        let touch = session.handle(&HostEvent::TouchMove {
            origin: EventOrigin::Container,
            point: Some(pt(20.0, 0.0)),
        });
        assert_eq!(touch.request, None);
        assert_eq!(
            touch.log.outcome,
            SessionLogOutcome::Ignored(SessionIgnoredReason::TouchNotHover)
        );

        // A touch drag still moves through the viewport listeners.
        session.handle(&HostEvent::TouchStart {
            origin: EventOrigin::Container,
            point: Some(pt(10.0, 0.0)),
        });
        let moved = session.handle(&HostEvent::TouchMove {
            origin: EventOrigin::Viewport,
            point: Some(pt(30.0, 0.0)),
        });
        assert_eq!(
            moved.request,
            Some(UpdateRequest::InternalDrag { coord: pt(30.0, 0.0) })
        );
    }

    #[test]
    fn hover_mode_binds_container_and_forwards_moves() {
        let mut session = mounted_session();
        let off = session.handle(&HostEvent::MouseMove {
            origin: EventOrigin::Container,
            point: pt(20.0, 0.0),
        });
        assert_eq!(
            off.log.outcome,
            SessionLogOutcome::Ignored(SessionIgnoredReason::HoverDisabled)
        );

        let commands = session.set_hover_enabled(true);
        assert_eq!(
            commands,
            vec![ListenerCommand::Bind {
                scope: ListenerScope::Container,
                events: ListenerSet::HOVER,
                options: ListenerOptions::PASSIVE,
            }]
        );
        let hover = session.handle(&HostEvent::MouseMove {
            origin: EventOrigin::Container,
            point: pt(20.0, 0.0),
        });
        assert_eq!(
            hover.request,
            Some(UpdateRequest::InternalDrag { coord: pt(20.0, 0.0) })
        );
        assert!(!session.is_dragging());

        let commands = session.set_hover_enabled(false);
        assert_eq!(
            commands,
            vec![ListenerCommand::Unbind {
                scope: ListenerScope::Container,
                events: ListenerSet::HOVER,
            }]
        );
    }

    #[test]
    fn leave_is_ignored_while_dragging() {
        let mut session = PointerSession::new(InteractiveTarget::Root, true);
        session.target_mounted(InteractiveTarget::Root);
        session.handle(&mouse_down(EventOrigin::Container, 10.0));

        let leave = session.handle(&HostEvent::MouseLeave);
        assert_eq!(
            leave.log.outcome,
            SessionLogOutcome::Ignored(SessionIgnoredReason::LeaveWhileDragging)
        );
        assert!(session.is_dragging());

        session.handle(&HostEvent::MouseUp {
            origin: EventOrigin::Viewport,
        });
        let leave = session.handle(&HostEvent::MouseLeave);
        assert_eq!(leave.log.outcome, SessionLogOutcome::StateUpdated);
        assert_eq!(leave.request, None);
    }

    #[test]
    fn teardown_releases_everything() {
        let mut session = PointerSession::new(InteractiveTarget::Root, true);
        session.target_mounted(InteractiveTarget::Root);
        session.handle(&mouse_down(EventOrigin::Container, 10.0));
        let commands = session.teardown();
        assert_eq!(commands.len(), 3);
        assert!(
            commands
                .iter()
                .all(|command| matches!(command, ListenerCommand::Unbind { .. }))
        );
        assert!(session.registry().is_empty());
        assert!(!session.is_dragging());
        assert!(session.teardown().is_empty());
    }

    #[test]
    fn cursor_follows_drag_and_orientation() {
        let mut session = mounted_session();
        assert_eq!(session.cursor(Orientation::Horizontal), None);
        session.handle(&mouse_down(EventOrigin::Container, 10.0));
        assert_eq!(session.cursor(Orientation::Horizontal), Some("ew-resize"));
        assert_eq!(session.cursor(Orientation::Vertical), Some("ns-resize"));
    }

    #[test]
    fn sequences_are_monotonic() {
        let mut session = mounted_session();
        let a = session.handle(&viewport_move(1.0)).log.sequence;
        let b = session.handle(&mouse_down(EventOrigin::Container, 1.0)).log.sequence;
        let c = session.handle(&viewport_move(2.0)).log.sequence;
        assert!(a < b && b < c);
    }

    #[test]
    fn registry_bind_is_idempotent() {
        let mut registry = ListenerRegistry::new();
        let mut commands = Vec::new();
        registry.bind(
            ListenerScope::Viewport,
            ListenerSet::DRAG,
            ListenerOptions::PASSIVE,
            &mut commands,
        );
        registry.bind(
            ListenerScope::Viewport,
            ListenerSet::DRAG,
            ListenerOptions::PASSIVE,
            &mut commands,
        );
        assert_eq!(commands.len(), 1);
        assert_eq!(registry.bound(ListenerScope::Viewport), ListenerSet::DRAG);
        assert_eq!(registry.bound(ListenerScope::Container), ListenerSet::empty());
    }
}
