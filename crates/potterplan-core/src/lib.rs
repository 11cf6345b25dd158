//! # PotterPlan Core
//!
//! Core types and utilities for PotterPlan: geometry primitives for
//! equipment footprints, feet/pixel unit conversion, shared defaults and the
//! error types used across the workspace.

pub mod constants;
pub mod error;
pub mod geometry;
pub mod types;
pub mod units;

pub use error::{PlanError, PlanResult};

pub use geometry::{BoundingBox, Footprint, Point, Rotation};

pub use units::{format_feet_inches, parse_feet, snap_to_increment, UnitScale};

// Re-export type aliases for convenience
pub use types::{thread_safe, thread_safe_vec, RefCallback, ThreadSafe, ThreadSafeVec};
