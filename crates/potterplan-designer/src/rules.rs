//! Tunable placement parameters.

use serde::{Deserialize, Serialize};
use std::fmt;

use potterplan_core::constants::{
    CONTAINMENT_TOLERANCE, DEFAULT_GRID_INCREMENT, DOOR_SWING_DEPTH, DOOR_WIDTH, KILN_CATEGORY,
    KILN_CLEARANCE,
};
use potterplan_core::BoundingBox;

/// What happens when a placement overlaps the door swing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoorPolicy {
    /// Placement is allowed and flagged with a warning.
    #[default]
    Advisory,
    /// Placement is refused.
    Blocking,
}

impl fmt::Display for DoorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Advisory => write!(f, "advisory"),
            Self::Blocking => write!(f, "blocking"),
        }
    }
}

/// Parameters the validator and drag controller read on every evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementRules {
    /// Snap dragged anchors to the grid.
    pub snap_to_grid: bool,
    /// Grid increment for drag snapping, in feet.
    pub grid_increment: f64,
    /// Clearance kept free around every kiln, in feet.
    pub kiln_clearance: f64,
    /// Category that marks an item as a kiln.
    pub kiln_category: String,
    /// Width of the door opening along the wall, in feet.
    pub door_width: f64,
    /// How far the swing zone reaches into the room, in feet.
    pub door_swing_depth: f64,
    /// Whether door obstruction warns or blocks.
    pub door_policy: DoorPolicy,
    /// Slack for containment tests, in feet.
    pub tolerance: f64,
}

impl Default for PlacementRules {
    fn default() -> Self {
        Self {
            snap_to_grid: true,
            grid_increment: DEFAULT_GRID_INCREMENT,
            kiln_clearance: KILN_CLEARANCE,
            kiln_category: KILN_CATEGORY.to_string(),
            door_width: DOOR_WIDTH,
            door_swing_depth: DOOR_SWING_DEPTH,
            door_policy: DoorPolicy::Advisory,
            tolerance: CONTAINMENT_TOLERANCE,
        }
    }
}

impl PlacementRules {
    /// The snapping increment, if snapping is on.
    pub fn grid(&self) -> Option<f64> {
        self.snap_to_grid.then_some(self.grid_increment)
    }

    /// The clearance zone around a kiln's effective bounding box.
    pub fn kiln_zone(&self, kiln_box: &BoundingBox) -> BoundingBox {
        kiln_box.inflate(self.kiln_clearance)
    }

    /// Checks that every parameter is usable.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.grid_increment.is_finite() && self.grid_increment > 0.0) {
            return Err(format!(
                "Grid increment must be > 0, got {}",
                self.grid_increment
            ));
        }
        if !(self.kiln_clearance.is_finite() && self.kiln_clearance >= 0.0) {
            return Err(format!(
                "Kiln clearance must be >= 0, got {}",
                self.kiln_clearance
            ));
        }
        if self.kiln_category.trim().is_empty() {
            return Err("Kiln category must not be empty".to_string());
        }
        if !(self.door_width.is_finite() && self.door_width > 0.0) {
            return Err(format!("Door width must be > 0, got {}", self.door_width));
        }
        if !(self.door_swing_depth.is_finite() && self.door_swing_depth >= 0.0) {
            return Err(format!(
                "Door swing depth must be >= 0, got {}",
                self.door_swing_depth
            ));
        }
        if !(self.tolerance.is_finite() && self.tolerance >= 0.0 && self.tolerance < 0.01) {
            return Err(format!(
                "Tolerance must be in [0, 0.01), got {}",
                self.tolerance
            ));
        }
        Ok(())
    }
}
