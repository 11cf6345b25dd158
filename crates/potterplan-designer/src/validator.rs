//! Placement validation.
//!
//! [`PlacementValidator`] judges one candidate box against the room, the
//! other registered items and the derived clearance zones. It never mutates
//! anything; invalid placements come back as a [`Verdict`], and only caller
//! bugs (an unknown candidate id) are errors.

use std::fmt;

use potterplan_core::{BoundingBox, PlanResult};

use crate::equipment::{Equipment, EquipmentId};
use crate::registry::EquipmentRegistry;
use crate::room::Room;
use crate::rules::{DoorPolicy, PlacementRules};

/// Soft problems that do not block a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementWarning {
    /// The item sits in the man door swing.
    DoorObstruction,
}

impl fmt::Display for PlacementWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DoorObstruction => write!(f, "blocks the door swing"),
        }
    }
}

/// Outcome of validating one candidate placement.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Accepted,
    AcceptedWithWarning(PlacementWarning),
    RejectedOutOfBounds,
    /// First item, in registry order, whose box overlaps the candidate.
    RejectedOverlap(EquipmentId),
    /// First item, in registry order, involved in a kiln clearance breach.
    RejectedClearance(EquipmentId),
    RejectedDoorObstruction,
}

impl Verdict {
    /// True for `Accepted` and `AcceptedWithWarning`.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted | Self::AcceptedWithWarning(_))
    }

    /// True for every hard rejection.
    pub fn is_rejection(&self) -> bool {
        !self.is_accepted()
    }

    /// The other item named by an overlap or clearance rejection.
    pub fn conflicting_item(&self) -> Option<&EquipmentId> {
        match self {
            Self::RejectedOverlap(id) | Self::RejectedClearance(id) => Some(id),
            _ => None,
        }
    }

    /// The warning attached to a soft accept.
    pub fn warning(&self) -> Option<PlacementWarning> {
        match self {
            Self::AcceptedWithWarning(w) => Some(*w),
            _ => None,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accepted => write!(f, "accepted"),
            Self::AcceptedWithWarning(w) => write!(f, "accepted with warning: {}", w),
            Self::RejectedOutOfBounds => write!(f, "rejected: outside the room"),
            Self::RejectedOverlap(id) => write!(f, "rejected: overlaps {}", id),
            Self::RejectedClearance(id) => {
                write!(f, "rejected: breaks kiln clearance with {}", id)
            }
            Self::RejectedDoorObstruction => write!(f, "rejected: blocks the door swing"),
        }
    }
}

/// Read-only view over the state a placement is judged against.
#[derive(Debug, Clone, Copy)]
pub struct PlacementValidator<'a> {
    registry: &'a EquipmentRegistry,
    room: &'a Room,
    rules: &'a PlacementRules,
}

impl<'a> PlacementValidator<'a> {
    pub fn new(registry: &'a EquipmentRegistry, room: &'a Room, rules: &'a PlacementRules) -> Self {
        Self {
            registry,
            room,
            rules,
        }
    }

    pub fn registry(&self) -> &'a EquipmentRegistry {
        self.registry
    }

    pub fn rules(&self) -> &'a PlacementRules {
        self.rules
    }

    /// Judges `candidate_box` as the new effective footprint of `candidate_id`.
    ///
    /// Checks run in a fixed order and the first hard rejection wins:
    /// room bounds, overlap, kiln clearance, door swing. Overlap and
    /// clearance scan the registry in order and skip the candidate itself.
    pub fn validate(
        &self,
        candidate_id: &EquipmentId,
        candidate_box: &BoundingBox,
    ) -> PlanResult<Verdict> {
        let candidate = self.registry.require(candidate_id)?;
        let verdict = self.judge(candidate, candidate_box);
        tracing::debug!(
            id = %candidate_id,
            bounds = %candidate_box,
            %verdict,
            "validated placement"
        );
        Ok(verdict)
    }

    fn judge(&self, candidate: &Equipment, candidate_box: &BoundingBox) -> Verdict {
        if !self.room.contains(candidate_box, self.rules.tolerance) {
            return Verdict::RejectedOutOfBounds;
        }

        if let Some(other) = self
            .others(&candidate.id)
            .find(|o| candidate_box.overlaps(&o.bounding_box()))
        {
            return Verdict::RejectedOverlap(other.id.clone());
        }

        if self.room.show_kiln_clearance {
            let candidate_is_kiln = candidate.is_in_category(&self.rules.kiln_category);
            let breach = self.others(&candidate.id).find(|o| {
                let other_is_kiln = o.is_in_category(&self.rules.kiln_category);
                // Inflating either box by the clearance gives the same answer,
                // so one test covers both directions.
                (candidate_is_kiln || other_is_kiln)
                    && candidate_box.overlaps(&self.rules.kiln_zone(&o.bounding_box()))
            });
            if let Some(other) = breach {
                return Verdict::RejectedClearance(other.id.clone());
            }
        }

        if candidate_box.overlaps(&self.room.door_swing_zone(self.rules)) {
            return match self.rules.door_policy {
                DoorPolicy::Advisory => {
                    Verdict::AcceptedWithWarning(PlacementWarning::DoorObstruction)
                }
                DoorPolicy::Blocking => Verdict::RejectedDoorObstruction,
            };
        }

        Verdict::Accepted
    }

    fn others<'s>(
        &'s self,
        candidate_id: &'s EquipmentId,
    ) -> impl Iterator<Item = &'a Equipment> + 's {
        self.registry
            .iter()
            .filter(move |other| &other.id != candidate_id)
    }
}
