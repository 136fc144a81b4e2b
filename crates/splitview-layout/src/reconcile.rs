#![forbid(unsafe_code)]

//! Position reconciliation.
//!
//! [`PositionReconciler`] owns the authoritative divider position. Every
//! source of change (an external position reset, a re-derivation after an
//! orientation/padding change, a resize, a pointer drag) is expressed as an
//! [`UpdateRequest`] and funnelled through [`PositionReconciler::apply`], so
//! clamping and dedup live in exactly one place.
//!
//! # Invariants
//!
//! 1. The internal position is always in `[0, 100]`.
//! 2. A zero-sized container never mutates state.
//! 3. Once bounds have synced, repeated pointer updates that stay pinned at
//!    0 or 100 with the coordinate on the container edge are skipped.
//!    Recomputes (resync, resize, external reset) always re-render, since the
//!    geometry behind an unchanged percentage may have moved.
//! 4. An external position that did not change since the last reconciliation
//!    never overrides the internal position.
//! 5. An external reset that could not be applied (zero-sized container) is
//!    kept pending and wins over the next recompute.
//!
//! Rapid jitter strictly inside the range (e.g. 49.999 ↔ 50.0) is not
//! deduplicated; those updates are applied as usual.

use splitview_core::{
    ContainerBounds, Orientation, PagePoint, PageScroll, ResolveInput, clamp_percentage,
    percentage_to_px, resolve,
};

use crate::render::{RenderOutput, TransformStyle};

/// One request to move the divider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UpdateRequest {
    /// The embedder supplied a new position; accept it.
    ExternalReset { value: f64 },
    /// Re-derive geometry from the remembered internal position.
    Resync,
    /// Page-absolute pointer coordinate.
    InternalDrag { coord: PagePoint },
    /// Container-relative coordinate (e.g. from a resize observation).
    Local { coord: PagePoint },
}

/// Geometry parameters in effect for one update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpdateContext {
    pub orientation: Orientation,
    pub bounds_padding: f64,
    pub transform_style: TransformStyle,
}

/// Embedder-controlled values that trigger reconciliation when they change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropSnapshot {
    pub position: f64,
    pub orientation: Orientation,
    pub bounds_padding: f64,
}

/// Why an update left state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The container reported a zero width or height.
    ZeroSizedContainer,
    /// A pointer update while pinned at 0 or 100 with the coordinate still
    /// on the edge.
    SaturatedAtBound,
}

/// Result of one [`PositionReconciler::apply`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UpdateOutcome {
    Applied(RenderOutput),
    Skipped(SkipReason),
}

impl UpdateOutcome {
    /// Render output, if the update was accepted.
    #[must_use]
    pub const fn output(&self) -> Option<&RenderOutput> {
        match self {
            Self::Applied(output) => Some(output),
            Self::Skipped(_) => None,
        }
    }

    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

/// Authoritative divider position for one widget instance.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionReconciler {
    internal: f64,
    previous_external: f64,
    pending_reset: Option<f64>,
    did_sync_bounds: bool,
    last_output: Option<RenderOutput>,
    applied_count: u64,
}

impl PositionReconciler {
    /// Create a reconciler seeded from the embedder's initial position.
    #[must_use]
    pub fn new(initial_position: f64) -> Self {
        let position = clamp_percentage(initial_position);
        Self {
            internal: position,
            previous_external: position,
            pending_reset: None,
            did_sync_bounds: false,
            last_output: None,
            applied_count: 0,
        }
    }

    /// Current internal position in `[0, 100]`.
    #[must_use]
    pub const fn position(&self) -> f64 {
        self.internal
    }

    /// Whether geometry has been computed against real bounds at least once.
    #[must_use]
    pub const fn did_sync_bounds(&self) -> bool {
        self.did_sync_bounds
    }

    /// Output of the most recent accepted update.
    #[must_use]
    pub const fn last_output(&self) -> Option<&RenderOutput> {
        self.last_output.as_ref()
    }

    /// External position accepted by [`Self::reconcile_props`] but not yet
    /// rendered.
    #[must_use]
    pub const fn pending_reset(&self) -> Option<f64> {
        self.pending_reset
    }

    /// Number of accepted updates since construction.
    #[must_use]
    pub const fn applied_count(&self) -> u64 {
        self.applied_count
    }

    /// Compare embedder props against the previous reconciliation.
    ///
    /// An unchanged external position re-derives from the internal position,
    /// preserving drag progress; a changed one is accepted as a reset and
    /// stays pending until an update is applied.
    pub fn reconcile_props(&mut self, props: &PropSnapshot) -> UpdateRequest {
        let external = clamp_percentage(props.position);
        if external != self.previous_external {
            self.previous_external = external;
            self.pending_reset = Some(external);
        }
        match self.pending_reset {
            Some(value) => UpdateRequest::ExternalReset { value },
            None => UpdateRequest::Resync,
        }
    }

    /// Apply one update request against freshly read bounds.
    pub fn apply(
        &mut self,
        request: UpdateRequest,
        context: &UpdateContext,
        bounds: &ContainerBounds,
        scroll: PageScroll,
    ) -> UpdateOutcome {
        // A recompute cannot discard a reset that never rendered.
        let request = match (request, self.pending_reset) {
            (UpdateRequest::Resync | UpdateRequest::Local { .. }, Some(value)) => {
                UpdateRequest::ExternalReset { value }
            }
            _ => request,
        };
        let is_pointer = matches!(request, UpdateRequest::InternalDrag { .. });

        let input = match request {
            UpdateRequest::ExternalReset { value } => {
                local_input(clamp_percentage(value), context, bounds)
            }
            UpdateRequest::Resync => local_input(self.internal, context, bounds),
            UpdateRequest::InternalDrag { coord } => {
                ResolveInput::offset(coord, context.orientation, context.bounds_padding)
            }
            UpdateRequest::Local { coord } => {
                ResolveInput::local(coord, context.orientation, context.bounds_padding)
            }
        };

        let Some(resolution) = resolve(input, bounds, scroll) else {
            #[cfg(feature = "tracing")]
            tracing::trace!(message = "reconcile.skip", reason = "zero_size");
            return UpdateOutcome::Skipped(SkipReason::ZeroSizedContainer);
        };

        let pinned = self.internal == 0.0 || self.internal == 100.0;
        if is_pointer
            && self.did_sync_bounds
            && resolution.percentage == self.internal
            && pinned
            && resolution.meets_bound
        {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                message = "reconcile.skip",
                reason = "saturated",
                position = self.internal
            );
            return UpdateOutcome::Skipped(SkipReason::SaturatedAtBound);
        }

        self.did_sync_bounds = true;
        self.pending_reset = None;
        self.internal = resolution.percentage;
        self.applied_count = self.applied_count.saturating_add(1);

        let output = RenderOutput::new(
            context.orientation,
            resolution.percentage,
            resolution.clamped_px,
            context.transform_style,
        );
        self.last_output = Some(output);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "reconcile.applied",
            position = output.percentage,
            clamped_px = output.clamped_px,
            portrait = context.orientation.is_portrait(),
        );

        UpdateOutcome::Applied(output)
    }
}

impl Default for PositionReconciler {
    fn default() -> Self {
        Self::new(splitview_core::POSITION_DEFAULT)
    }
}

fn local_input(percentage: f64, context: &UpdateContext, bounds: &ContainerBounds) -> ResolveInput {
    let coord = PagePoint::new(
        percentage_to_px(bounds.rect.width, percentage),
        percentage_to_px(bounds.rect.height, percentage),
    );
    ResolveInput::local(coord, context.orientation, context.bounds_padding)
}
