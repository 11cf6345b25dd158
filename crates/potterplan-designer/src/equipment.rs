//! Equipment records placed on the floor plan.

use serde::{Deserialize, Serialize};
use std::fmt;

use potterplan_core::constants::{STAGING_X, STAGING_Y};
use potterplan_core::{BoundingBox, Footprint, PlanResult, Point, Rotation};

/// Opaque, stable identifier of a placed item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EquipmentId(String);

impl EquipmentId {
    /// Wraps an existing identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh identifier for user-added equipment.
    pub fn generate() -> Self {
        Self(format!("custom-{}", uuid::Uuid::new_v4().simple()))
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EquipmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EquipmentId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for EquipmentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// How badly the studio needs an item. Only used for display grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Essential,
    Recommended,
    Optional,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Essential => write!(f, "Essential"),
            Self::Recommended => write!(f, "Recommended"),
            Self::Optional => write!(f, "Optional"),
        }
    }
}

/// One placed piece of equipment.
///
/// `width` and `depth` are the nominal footprint in feet, always measured
/// unrotated. `(x, y)` is the top left corner of that unrotated footprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub id: EquipmentId,
    pub name: String,
    pub category: String,
    pub width: f64,
    pub depth: f64,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub purchased: bool,
    pub priority: Priority,
    #[serde(default)]
    pub estimated_cost: String,
    #[serde(default)]
    pub brands: Vec<String>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub rotation: Rotation,
}

impl Equipment {
    /// Creates an item at `(x, y)` with no rotation and empty descriptive data.
    pub fn new(
        id: impl Into<EquipmentId>,
        name: impl Into<String>,
        category: impl Into<String>,
        width: f64,
        depth: f64,
        x: f64,
        y: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            width,
            depth,
            x,
            y,
            purchased: false,
            priority: Priority::Essential,
            estimated_cost: String::new(),
            brands: Vec::new(),
            notes: String::new(),
            rotation: Rotation::Deg0,
        }
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the rotation.
    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Sets the descriptive catalogue data.
    pub fn with_details(
        mut self,
        estimated_cost: impl Into<String>,
        brands: &[&str],
        notes: impl Into<String>,
    ) -> Self {
        self.estimated_cost = estimated_cost.into();
        self.brands = brands.iter().map(|b| b.to_string()).collect();
        self.notes = notes.into();
        self
    }

    /// Nominal footprint, validated.
    pub fn footprint(&self) -> PlanResult<Footprint> {
        Footprint::new(self.width, self.depth)
    }

    /// Anchor corner of the unrotated footprint.
    pub fn anchor(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Effective bounding box at the committed position and rotation.
    pub fn bounding_box(&self) -> BoundingBox {
        self.box_at(self.x, self.y, self.rotation)
    }

    /// Effective bounding box if the item were placed at `(x, y)` with `rotation`.
    pub fn box_at(&self, x: f64, y: f64, rotation: Rotation) -> BoundingBox {
        let footprint = Footprint {
            width: self.width,
            depth: self.depth,
        };
        BoundingBox::for_placement(x, y, footprint, rotation)
    }

    /// True if this item belongs to the high-heat category.
    pub fn is_in_category(&self, category: &str) -> bool {
        self.category.trim().eq_ignore_ascii_case(category.trim())
    }
}

/// Data the catalogue layer supplies when adding equipment.
///
/// Position and rotation are not part of it: new items always start at the
/// staging coordinate with no rotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEquipment {
    pub name: String,
    pub category: String,
    pub width: f64,
    pub depth: f64,
    #[serde(default)]
    pub purchased: bool,
    pub priority: Priority,
    #[serde(default)]
    pub estimated_cost: String,
    #[serde(default)]
    pub brands: Vec<String>,
    #[serde(default)]
    pub notes: String,
}

impl NewEquipment {
    /// Creates a catalogue entry with empty descriptive data.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        width: f64,
        depth: f64,
        priority: Priority,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            width,
            depth,
            purchased: false,
            priority,
            estimated_cost: String::new(),
            brands: Vec::new(),
            notes: String::new(),
        }
    }

    /// Turns the entry into a placed item at the staging coordinate.
    pub fn into_equipment(self, id: EquipmentId) -> Equipment {
        Equipment {
            id,
            name: self.name,
            category: self.category,
            width: self.width,
            depth: self.depth,
            x: STAGING_X,
            y: STAGING_Y,
            purchased: self.purchased,
            priority: self.priority,
            estimated_cost: self.estimated_cost,
            brands: self.brands,
            notes: self.notes,
            rotation: Rotation::Deg0,
        }
    }
}
