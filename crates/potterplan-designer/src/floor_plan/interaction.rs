//! Placement commits for FloorPlan: programmatic moves, rotations and the
//! pointer-driven drag.

use potterplan_core::{PlanResult, Point, Rotation};

use super::FloorPlan;
use crate::drag::{DragCandidate, DragOutcome, DragPhase, RevertReason};
use crate::equipment::EquipmentId;
use crate::events::PlanEvent;
use crate::rotation::{propose_quarter_turn, propose_rotation, RotationProposal};
use crate::validator::{PlacementValidator, Verdict};

impl FloorPlan {
    /// Moves an item to `(x, y)` at its current rotation if the placement is
    /// accepted. Returns the verdict either way.
    pub fn update_position(&mut self, id: &EquipmentId, x: f64, y: f64) -> PlanResult<Verdict> {
        self.commit_position(id, x, y)
    }

    /// Sets an item's rotation if the re-oriented footprint is accepted.
    pub fn update_rotation(&mut self, id: &EquipmentId, rotation: Rotation) -> PlanResult<Verdict> {
        let proposal = propose_rotation(&self.validator(), id, rotation)?;
        self.commit_rotation(proposal)
    }

    /// [`FloorPlan::update_rotation`] for raw degrees. Anything other than
    /// 0, 90, 180 or 270 is an error.
    pub fn update_rotation_degrees(
        &mut self,
        id: &EquipmentId,
        degrees: i64,
    ) -> PlanResult<Verdict> {
        let rotation = Rotation::from_degrees(degrees).inspect_err(|e| {
            tracing::warn!(id = %id, "{}", e);
        })?;
        self.update_rotation(id, rotation)
    }

    /// Turns an item a quarter turn clockwise if the result is accepted.
    pub fn rotate(&mut self, id: &EquipmentId) -> PlanResult<Verdict> {
        let proposal = propose_quarter_turn(&self.validator(), id)?;
        self.commit_rotation(proposal)
    }

    // ---- drag ----

    pub fn drag_phase(&self) -> DragPhase {
        self.drag.phase()
    }

    pub fn dragged_id(&self) -> Option<&EquipmentId> {
        self.drag.dragged_id()
    }

    pub fn drag_candidate(&self) -> Option<&DragCandidate> {
        self.drag.candidate()
    }

    pub fn live_verdict(&self) -> Option<&Verdict> {
        self.drag.live_verdict()
    }

    /// Grabs the topmost item under the pointer (pixels).
    pub fn pointer_down(&mut self, pixel_x: f64, pixel_y: f64) -> Option<EquipmentId> {
        self.drag.pointer_down(&self.registry, pixel_x, pixel_y)
    }

    /// Grabs a known item with the pointer at `pointer` (feet).
    ///
    /// Returns `Ok(false)` if another drag is already active.
    pub fn begin_drag(&mut self, id: &EquipmentId, pointer: Point) -> PlanResult<bool> {
        self.drag.begin(&self.registry, id, pointer)
    }

    /// Moves the dragged item under the pointer (pixels) and returns the
    /// live verdict, or `None` when nothing is being dragged.
    pub fn pointer_move(&mut self, pixel_x: f64, pixel_y: f64) -> PlanResult<Option<Verdict>> {
        // Built from fields so the drag controller can be borrowed mutably.
        let validator = PlacementValidator::new(&self.registry, &self.room, &self.rules);
        let candidate = self.drag.pointer_move(&validator, pixel_x, pixel_y)?;
        Ok(candidate.map(|c| c.verdict.clone()))
    }

    /// Releases the pointer, committing the drag if its last candidate was
    /// accepted. Returns `None` when nothing was being dragged.
    pub fn pointer_up(&mut self) -> PlanResult<Option<DragOutcome>> {
        let Some(outcome) = self.drag.pointer_up() else {
            return Ok(None);
        };
        let outcome = match outcome {
            DragOutcome::Committed { id, x, y, .. } => {
                let verdict = self.commit_position(&id, x, y)?;
                if verdict.is_accepted() {
                    DragOutcome::Committed { id, x, y, verdict }
                } else {
                    DragOutcome::Reverted {
                        id,
                        reason: RevertReason::Rejected(verdict),
                    }
                }
            }
            reverted => {
                tracing::debug!(id = %reverted.id(), "drag reverted");
                reverted
            }
        };
        Ok(Some(outcome))
    }

    /// Abandons the drag without changing anything.
    pub fn cancel_drag(&mut self) -> Option<DragOutcome> {
        let outcome = self.drag.cancel()?;
        tracing::debug!(id = %outcome.id(), "drag cancelled");
        Some(outcome)
    }

    fn commit_position(&mut self, id: &EquipmentId, x: f64, y: f64) -> PlanResult<Verdict> {
        let item = self.registry.require(id)?;
        let bounds = item.box_at(x, y, item.rotation);
        let verdict = self.validator().validate(id, &bounds)?;
        if !verdict.is_accepted() {
            tracing::warn!(id = %id, x, y, %verdict, "move rejected");
            return Ok(verdict);
        }

        self.registry.set_position(id, x, y)?;
        tracing::info!(id = %id, x, y, %verdict, "move committed");
        self.notify(PlanEvent::EquipmentMoved {
            id: id.clone(),
            x,
            y,
        });
        Ok(verdict)
    }

    fn commit_rotation(&mut self, proposal: RotationProposal) -> PlanResult<Verdict> {
        let RotationProposal { id, to, verdict, .. } = proposal;
        if !verdict.is_accepted() {
            tracing::warn!(id = %id, rotation = %to, %verdict, "rotation rejected");
            return Ok(verdict);
        }

        self.registry.set_rotation(&id, to)?;
        tracing::info!(id = %id, rotation = %to, %verdict, "rotation committed");
        self.notify(PlanEvent::EquipmentRotated { id, rotation: to });
        Ok(verdict)
    }
}
