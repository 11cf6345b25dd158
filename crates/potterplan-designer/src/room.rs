//! Room bounds, door position and the clearance zones derived from them.
//!
//! Nothing here is cached: zones are recomputed from the current room,
//! rules and registry every time they are asked for.

use serde::{Deserialize, Serialize};
use std::fmt;

use potterplan_core::constants::{
    DOOR_BOTTOM_MARGIN, MAX_ROOM_SIZE, MIN_DOOR_POSITION, MIN_ROOM_SIZE,
};
use potterplan_core::{BoundingBox, PlanError, PlanResult};

use crate::equipment::EquipmentId;
use crate::registry::EquipmentRegistry;
use crate::rules::PlacementRules;

/// Default distance of the man door from the top wall, in feet.
const DEFAULT_DOOR_POSITION: f64 = 8.0;

/// Common outbuildings people convert into studios.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomPreset {
    /// Single-car garage, 12 x 20 ft.
    Garage,
    /// Backyard shed, 16 x 20 ft.
    Shed,
}

impl RoomPreset {
    /// Width and depth in feet.
    pub fn dimensions(self) -> (f64, f64) {
        match self {
            Self::Garage => (12.0, 20.0),
            Self::Shed => (16.0, 20.0),
        }
    }
}

impl fmt::Display for RoomPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Garage => write!(f, "12x20 Garage"),
            Self::Shed => write!(f, "16x20 Shed"),
        }
    }
}

/// A kiln clearance zone and the kiln that owns it.
#[derive(Debug, Clone, PartialEq)]
pub struct ClearanceZone<'a> {
    pub owner: &'a EquipmentId,
    pub zone: BoundingBox,
}

/// The studio room.
///
/// The man door sits on the left wall (`x = 0`); its position is measured
/// from the top wall along the depth axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    width: f64,
    depth: f64,
    man_door_position: f64,
    /// Show and enforce kiln clearance zones.
    pub show_kiln_clearance: bool,
    /// Show utility markers. Display only.
    pub show_utilities: bool,
}

impl Room {
    /// Creates a room with the default door position, clamped into range.
    pub fn new(width: f64, depth: f64) -> PlanResult<Self> {
        check_size("width", width)?;
        check_size("depth", depth)?;
        let (min, max) = door_range(depth);
        Ok(Self {
            width,
            depth,
            man_door_position: DEFAULT_DOOR_POSITION.clamp(min, max),
            show_kiln_clearance: true,
            show_utilities: false,
        })
    }

    /// Creates a room from a preset.
    pub fn from_preset(preset: RoomPreset) -> Self {
        let (width, depth) = preset.dimensions();
        Self {
            width,
            depth,
            man_door_position: DEFAULT_DOOR_POSITION,
            show_kiln_clearance: true,
            show_utilities: false,
        }
    }

    /// Sets the door position, returning the room.
    pub fn with_door_position(mut self, position: f64) -> PlanResult<Self> {
        self.set_door_position(position)?;
        Ok(self)
    }

    /// Room width in feet.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Room depth in feet.
    pub fn depth(&self) -> f64 {
        self.depth
    }

    /// Door distance from the top wall in feet.
    pub fn man_door_position(&self) -> f64 {
        self.man_door_position
    }

    /// Allowed door positions for the current depth.
    pub fn door_range(&self) -> (f64, f64) {
        door_range(self.depth)
    }

    /// Moves the door. Positions outside [`Room::door_range`] are rejected.
    pub fn set_door_position(&mut self, position: f64) -> PlanResult<()> {
        let (min, max) = self.door_range();
        if !position.is_finite() || position < min || position > max {
            return Err(PlanError::InvalidRoom {
                reason: format!(
                    "door position {} outside [{}, {}]",
                    position, min, max
                ),
            });
        }
        self.man_door_position = position;
        Ok(())
    }

    /// Changes the room size, pulling the door back into range if needed.
    pub fn resize(&mut self, width: f64, depth: f64) -> PlanResult<()> {
        check_size("width", width)?;
        check_size("depth", depth)?;
        self.width = width;
        self.depth = depth;
        let (min, max) = self.door_range();
        let clamped = self.man_door_position.clamp(min, max);
        if clamped != self.man_door_position {
            tracing::debug!(
                from = self.man_door_position,
                to = clamped,
                "door position clamped after resize"
            );
            self.man_door_position = clamped;
        }
        Ok(())
    }

    /// Checks a deserialized room against the size and door contracts.
    pub fn validate(&self) -> PlanResult<()> {
        check_size("width", self.width)?;
        check_size("depth", self.depth)?;
        let (min, max) = self.door_range();
        if !(min..=max).contains(&self.man_door_position) {
            return Err(PlanError::InvalidRoom {
                reason: format!(
                    "door position {} outside [{}, {}]",
                    self.man_door_position, min, max
                ),
            });
        }
        Ok(())
    }

    /// True if `bounds` lies inside the room, within `tolerance`.
    pub fn contains(&self, bounds: &BoundingBox, tolerance: f64) -> bool {
        bounds.is_within(self.width, self.depth, tolerance)
    }

    /// Area swept by the man door, centred on the door position.
    pub fn door_swing_zone(&self, rules: &PlacementRules) -> BoundingBox {
        let half = rules.door_width / 2.0;
        BoundingBox::new(
            0.0,
            self.man_door_position - half,
            rules.door_swing_depth.min(self.width),
            self.man_door_position + half,
        )
    }

    /// Clearance zones of every kiln, in registry order.
    ///
    /// Empty when kiln clearance is switched off.
    pub fn kiln_clearance_zones<'a>(
        &self,
        registry: &'a EquipmentRegistry,
        rules: &PlacementRules,
    ) -> Vec<ClearanceZone<'a>> {
        if !self.show_kiln_clearance {
            return Vec::new();
        }
        registry
            .iter()
            .filter(|item| item.is_in_category(&rules.kiln_category))
            .map(|item| ClearanceZone {
                owner: &item.id,
                zone: rules.kiln_zone(&item.bounding_box()),
            })
            .collect()
    }
}

impl Default for Room {
    fn default() -> Self {
        Self::from_preset(RoomPreset::Garage)
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}' x {}' (door at {}')",
            self.width, self.depth, self.man_door_position
        )
    }
}

fn door_range(depth: f64) -> (f64, f64) {
    (MIN_DOOR_POSITION, depth - DOOR_BOTTOM_MARGIN)
}

fn check_size(field: &str, value: f64) -> PlanResult<()> {
    if !value.is_finite() || !(MIN_ROOM_SIZE..=MAX_ROOM_SIZE).contains(&value) {
        return Err(PlanError::InvalidRoom {
            reason: format!(
                "{} {} outside [{}, {}]",
                field, value, MIN_ROOM_SIZE, MAX_ROOM_SIZE
            ),
        });
    }
    Ok(())
}
