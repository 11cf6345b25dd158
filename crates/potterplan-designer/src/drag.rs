//! Pointer-driven drag interaction.
//!
//! The controller is an explicit state machine: `Idle` until a pointer-down
//! lands on an item, `Dragging` while the pointer moves, and back to `Idle`
//! once the drag ends with a [`DragOutcome`]. It never writes to the
//! registry; the floor plan applies committed outcomes.
//!
//! Pointer coordinates arrive in screen pixels and are converted to feet
//! with the controller's [`UnitScale`]. Everything after that is in feet.

use potterplan_core::{snap_to_increment, BoundingBox, PlanResult, Point, UnitScale};

use crate::equipment::EquipmentId;
use crate::registry::EquipmentRegistry;
use crate::validator::{PlacementValidator, Verdict};

/// Whether a drag is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

/// The most recent candidate placement of the dragged item.
#[derive(Debug, Clone, PartialEq)]
pub struct DragCandidate {
    pub x: f64,
    pub y: f64,
    pub bounds: BoundingBox,
    pub verdict: Verdict,
}

/// Why a drag ended without changing anything.
#[derive(Debug, Clone, PartialEq)]
pub enum RevertReason {
    /// The last candidate was a hard rejection.
    Rejected(Verdict),
    /// The pointer left the surface or the user pressed escape.
    Cancelled,
    /// The pointer went up without moving.
    NoMovement,
}

/// How a drag ended.
#[derive(Debug, Clone, PartialEq)]
pub enum DragOutcome {
    Committed {
        id: EquipmentId,
        x: f64,
        y: f64,
        verdict: Verdict,
    },
    Reverted {
        id: EquipmentId,
        reason: RevertReason,
    },
}

impl DragOutcome {
    /// The dragged item.
    pub fn id(&self) -> &EquipmentId {
        match self {
            Self::Committed { id, .. } | Self::Reverted { id, .. } => id,
        }
    }

    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed { .. })
    }
}

#[derive(Debug, Clone)]
struct DragSession {
    id: EquipmentId,
    /// Pointer position minus item anchor at pointer-down, in feet.
    grab_offset: Point,
    candidate: Option<DragCandidate>,
}

/// Translates pointer events into validated candidate placements.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    scale: UnitScale,
    session: Option<DragSession>,
}

impl DragController {
    pub fn new(scale: UnitScale) -> Self {
        Self {
            scale,
            session: None,
        }
    }

    pub fn scale(&self) -> UnitScale {
        self.scale
    }

    pub fn phase(&self) -> DragPhase {
        if self.session.is_some() {
            DragPhase::Dragging
        } else {
            DragPhase::Idle
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// The item being dragged, if any.
    pub fn dragged_id(&self) -> Option<&EquipmentId> {
        self.session.as_ref().map(|s| &s.id)
    }

    /// The latest candidate, once the pointer has moved.
    pub fn candidate(&self) -> Option<&DragCandidate> {
        self.session.as_ref().and_then(|s| s.candidate.as_ref())
    }

    /// Verdict of the latest candidate, for live feedback.
    pub fn live_verdict(&self) -> Option<&Verdict> {
        self.candidate().map(|c| &c.verdict)
    }

    /// Starts a drag on the topmost item under the pointer.
    ///
    /// Returns the grabbed id. Empty floor, or a drag already in progress,
    /// leaves the controller untouched and returns `None`.
    pub fn pointer_down(
        &mut self,
        registry: &EquipmentRegistry,
        pixel_x: f64,
        pixel_y: f64,
    ) -> Option<EquipmentId> {
        if self.is_dragging() {
            tracing::debug!("pointer down ignored, drag already active");
            return None;
        }
        let pointer = self.scale.pixel_to_feet(pixel_x, pixel_y);
        let id = registry.hit_test(pointer)?.id.clone();
        self.start(registry, &id, pointer).ok()?;
        Some(id)
    }

    /// Starts a drag on a known item with the pointer at `pointer` (feet).
    ///
    /// Returns `Ok(false)` without side effects if a drag is already active.
    pub fn begin(
        &mut self,
        registry: &EquipmentRegistry,
        id: &EquipmentId,
        pointer: Point,
    ) -> PlanResult<bool> {
        if self.is_dragging() {
            tracing::debug!(id = %id, "begin ignored, drag already active");
            return Ok(false);
        }
        self.start(registry, id, pointer)?;
        Ok(true)
    }

    /// Moves the dragged item under the pointer and validates the result.
    ///
    /// Returns `Ok(None)` when no drag is active.
    pub fn pointer_move(
        &mut self,
        validator: &PlacementValidator<'_>,
        pixel_x: f64,
        pixel_y: f64,
    ) -> PlanResult<Option<&DragCandidate>> {
        let pointer = self.scale.pixel_to_feet(pixel_x, pixel_y);
        let Some(session) = self.session.as_mut() else {
            return Ok(None);
        };

        let item = validator.registry().require(&session.id)?;
        let mut x = pointer.x - session.grab_offset.x;
        let mut y = pointer.y - session.grab_offset.y;
        if let Some(grid) = validator.rules().grid() {
            x = snap_to_increment(x, grid);
            y = snap_to_increment(y, grid);
        }

        let bounds = item.box_at(x, y, item.rotation);
        let verdict = validator.validate(&session.id, &bounds)?;
        session.candidate = Some(DragCandidate {
            x,
            y,
            bounds,
            verdict,
        });
        Ok(session.candidate.as_ref())
    }

    /// Ends the drag, committing the last candidate if it was accepted.
    ///
    /// Returns `None` when no drag is active.
    pub fn pointer_up(&mut self) -> Option<DragOutcome> {
        let session = self.session.take()?;
        let outcome = match session.candidate {
            None => DragOutcome::Reverted {
                id: session.id,
                reason: RevertReason::NoMovement,
            },
            Some(candidate) if candidate.verdict.is_accepted() => DragOutcome::Committed {
                id: session.id,
                x: candidate.x,
                y: candidate.y,
                verdict: candidate.verdict,
            },
            Some(candidate) => DragOutcome::Reverted {
                id: session.id,
                reason: RevertReason::Rejected(candidate.verdict),
            },
        };
        Some(outcome)
    }

    /// Abandons the drag unconditionally.
    pub fn cancel(&mut self) -> Option<DragOutcome> {
        let session = self.session.take()?;
        Some(DragOutcome::Reverted {
            id: session.id,
            reason: RevertReason::Cancelled,
        })
    }

    /// Drops the session if it belongs to `id`, returning true if it did.
    pub(crate) fn forget(&mut self, id: &EquipmentId) -> bool {
        if self.dragged_id() == Some(id) {
            self.session = None;
            return true;
        }
        false
    }

    fn start(
        &mut self,
        registry: &EquipmentRegistry,
        id: &EquipmentId,
        pointer: Point,
    ) -> PlanResult<()> {
        let item = registry.require(id)?;
        self.session = Some(DragSession {
            id: id.clone(),
            grab_offset: Point::new(pointer.x - item.x, pointer.y - item.y),
            candidate: None,
        });
        tracing::debug!(id = %id, "drag started");
        Ok(())
    }
}
