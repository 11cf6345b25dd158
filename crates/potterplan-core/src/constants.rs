//! Shared default values.
//!
//! Everything here can be overridden through configuration; these are the
//! values the planner ships with.

/// Screen pixels per real-world foot at 100% scale.
pub const PIXELS_PER_FOOT: f64 = 30.0;

/// Slack absorbed by containment tests, in feet.
pub const CONTAINMENT_TOLERANCE: f64 = 1e-6;

/// Default grid increment applied while dragging, in feet.
pub const DEFAULT_GRID_INCREMENT: f64 = 0.5;

/// Minimum clearance around a kiln, in feet (18 inches).
pub const KILN_CLEARANCE: f64 = 1.5;

/// Category name that marks an item as a kiln.
pub const KILN_CATEGORY: &str = "Kilns";

/// Width of the man door opening, in feet.
pub const DOOR_WIDTH: f64 = 3.0;

/// How far the door swings into the room, in feet.
pub const DOOR_SWING_DEPTH: f64 = 3.0;

/// Smallest room edge the planner accepts, in feet.
pub const MIN_ROOM_SIZE: f64 = 8.0;

/// Largest room edge the planner accepts, in feet.
pub const MAX_ROOM_SIZE: f64 = 40.0;

/// Closest the door may sit to the top wall, in feet.
pub const MIN_DOOR_POSITION: f64 = 2.0;

/// The door must stay at least this far from the bottom wall, in feet.
pub const DOOR_BOTTOM_MARGIN: f64 = 5.0;

/// Where newly added equipment is dropped before the user moves it.
pub const STAGING_X: f64 = 1.0;
/// See [`STAGING_X`].
pub const STAGING_Y: f64 = 5.0;
