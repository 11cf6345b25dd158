//! Geometry primitives for footprints on the floor plan.
//!
//! All values are in feet, in room coordinates: `(0, 0)` is the top left
//! corner of the room, `x` grows across the room width and `y` grows down
//! the room depth.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::PlanError;

/// A position in room coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Quarter-turn rotation of an equipment footprint.
///
/// Serialized as plain degrees (`0`, `90`, `180`, `270`); any other value
/// fails to deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// All rotations in clockwise order.
    pub const ALL: [Rotation; 4] = [
        Rotation::Deg0,
        Rotation::Deg90,
        Rotation::Deg180,
        Rotation::Deg270,
    ];

    /// Rotation in degrees.
    pub fn degrees(self) -> u16 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }

    /// Parses a rotation, rejecting anything that is not exactly a quarter turn
    /// in `[0, 360)`.
    pub fn from_degrees(degrees: i64) -> Result<Self, PlanError> {
        match degrees {
            0 => Ok(Rotation::Deg0),
            90 => Ok(Rotation::Deg90),
            180 => Ok(Rotation::Deg180),
            270 => Ok(Rotation::Deg270),
            _ => Err(PlanError::InvalidRotation { degrees }),
        }
    }

    /// The next rotation, +90 degrees modulo 360.
    pub fn next(self) -> Self {
        match self {
            Rotation::Deg0 => Rotation::Deg90,
            Rotation::Deg90 => Rotation::Deg180,
            Rotation::Deg180 => Rotation::Deg270,
            Rotation::Deg270 => Rotation::Deg0,
        }
    }

    /// True when width and depth trade places (90 and 270).
    pub fn swaps_axes(self) -> bool {
        matches!(self, Rotation::Deg90 | Rotation::Deg270)
    }
}

impl TryFrom<u16> for Rotation {
    type Error = PlanError;

    fn try_from(degrees: u16) -> Result<Self, Self::Error> {
        Rotation::from_degrees(i64::from(degrees))
    }
}

impl From<Rotation> for u16 {
    fn from(rotation: Rotation) -> Self {
        rotation.degrees()
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

/// Width and depth of a footprint, in feet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    pub width: f64,
    pub depth: f64,
}

impl Footprint {
    /// Creates a footprint. Both dimensions must be positive and finite.
    pub fn new(width: f64, depth: f64) -> Result<Self, PlanError> {
        if !(width.is_finite() && width > 0.0) {
            return Err(PlanError::InvalidDimension {
                field: "width",
                value: width,
            });
        }
        if !(depth.is_finite() && depth > 0.0) {
            return Err(PlanError::InvalidDimension {
                field: "depth",
                value: depth,
            });
        }
        Ok(Self { width, depth })
    }

    /// The footprint as it lies on the floor after `rotation`.
    pub fn rotated(self, rotation: Rotation) -> Self {
        if rotation.swaps_axes() {
            Self {
                width: self.depth,
                depth: self.width,
            }
        } else {
            self
        }
    }
}

/// Axis-aligned rectangle in room coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl BoundingBox {
    /// Creates a box from its edges.
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Creates a box from its top left corner and size.
    pub fn from_origin(left: f64, top: f64, width: f64, depth: f64) -> Self {
        Self::new(left, top, left + width, top + depth)
    }

    /// Effective bounding box of a footprint anchored at `(x, y)`.
    ///
    /// The anchor is the top left corner of the unrotated footprint. Rotation
    /// pivots on the footprint centre, so at 0/180 the box starts at the
    /// anchor and at 90/270 it is re-centred with swapped dimensions.
    pub fn for_placement(x: f64, y: f64, footprint: Footprint, rotation: Rotation) -> Self {
        if !rotation.swaps_axes() {
            return Self::from_origin(x, y, footprint.width, footprint.depth);
        }
        let effective = footprint.rotated(rotation);
        let cx = x + footprint.width / 2.0;
        let cy = y + footprint.depth / 2.0;
        Self::from_origin(
            cx - effective.width / 2.0,
            cy - effective.depth / 2.0,
            effective.width,
            effective.depth,
        )
    }

    /// Horizontal extent.
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Vertical extent.
    pub fn depth(&self) -> f64 {
        self.bottom - self.top
    }

    /// Centre of the box.
    pub fn center(&self) -> Point {
        Point::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// Strict overlap test; boxes that only share an edge do not overlap.
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        self.left < other.right
            && self.right > other.left
            && self.top < other.bottom
            && self.bottom > other.top
    }

    /// True if the box lies within `[0, width] x [0, depth]`, allowing
    /// `tolerance` of slack on every edge.
    pub fn is_within(&self, width: f64, depth: f64, tolerance: f64) -> bool {
        self.left >= -tolerance
            && self.top >= -tolerance
            && self.right <= width + tolerance
            && self.bottom <= depth + tolerance
    }

    /// Inclusive point hit-test.
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x <= self.right
            && point.y >= self.top
            && point.y <= self.bottom
    }

    /// Grows the box by `distance` on all four sides.
    pub fn inflate(&self, distance: f64) -> Self {
        Self::new(
            self.left - distance,
            self.top - distance,
            self.right + distance,
            self.bottom + distance,
        )
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}] x [{}, {}]",
            self.left, self.right, self.top, self.bottom
        )
    }
}
