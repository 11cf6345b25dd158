//! Error handling for PotterPlan
//!
//! Placement conflicts are never errors: they are reported as verdicts by
//! the validator. The types here cover contract violations, where a caller
//! handed the planner something it should never have produced (an id that
//! is not registered, a rotation that is not a quarter turn, a room outside
//! the supported size range).
//!
//! Built on `thiserror`.

use thiserror::Error;

/// Contract violations raised by the planning core.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    /// The id is not present in the equipment registry
    #[error("Unknown equipment id: {id}")]
    UnknownEquipment {
        /// The id that was looked up.
        id: String,
    },

    /// An item with this id is already registered
    #[error("Duplicate equipment id: {id}")]
    DuplicateEquipment {
        /// The conflicting id.
        id: String,
    },

    /// Rotation is not one of 0, 90, 180, 270
    #[error("Invalid rotation {degrees}: must be one of 0, 90, 180, 270")]
    InvalidRotation {
        /// The rejected value in degrees.
        degrees: i64,
    },

    /// A footprint dimension is zero, negative or not finite
    #[error("Invalid {field}: {value}")]
    InvalidDimension {
        /// Which dimension was rejected.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Room configuration is outside the supported range
    #[error("Invalid room: {reason}")]
    InvalidRoom {
        /// What was wrong with the room.
        reason: String,
    },

    /// Placement rules hold an unusable parameter
    #[error("Invalid placement rules: {reason}")]
    InvalidRules {
        /// What was wrong with the rules.
        reason: String,
    },
}

/// Result type for operations that can only fail with a contract violation
pub type PlanResult<T> = std::result::Result<T, PlanError>;
