//! Quarter-turn rotation proposals.
//!
//! A rotation keeps the item's anchor and swaps in the next orientation;
//! the resulting box is judged by the same validator a drag commit uses.

use potterplan_core::{BoundingBox, PlanResult, Rotation};

use crate::equipment::EquipmentId;
use crate::validator::{PlacementValidator, Verdict};

/// A validated, not yet applied, change of rotation.
#[derive(Debug, Clone, PartialEq)]
pub struct RotationProposal {
    pub id: EquipmentId,
    pub from: Rotation,
    pub to: Rotation,
    pub bounds: BoundingBox,
    pub verdict: Verdict,
}

impl RotationProposal {
    /// True if the proposal may be committed.
    pub fn is_accepted(&self) -> bool {
        self.verdict.is_accepted()
    }
}

/// Proposes `to` as the new rotation of `id`, at its current anchor.
pub fn propose_rotation(
    validator: &PlacementValidator<'_>,
    id: &EquipmentId,
    to: Rotation,
) -> PlanResult<RotationProposal> {
    let item = validator.registry().require(id)?;
    let bounds = item.box_at(item.x, item.y, to);
    let verdict = validator.validate(id, &bounds)?;
    Ok(RotationProposal {
        id: id.clone(),
        from: item.rotation,
        to,
        bounds,
        verdict,
    })
}

/// Proposes the next clockwise quarter turn of `id`.
pub fn propose_quarter_turn(
    validator: &PlacementValidator<'_>,
    id: &EquipmentId,
) -> PlanResult<RotationProposal> {
    let current = validator.registry().require(id)?.rotation;
    propose_rotation(validator, id, current.next())
}
