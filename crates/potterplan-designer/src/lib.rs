//! # PotterPlan Designer
//!
//! Layout and constraint engine for a pottery studio floor plan. Equipment
//! footprints are placed in a rectangular room, dragged and rotated, and
//! every change is checked against the room bounds, the other items, the
//! kiln clearance zones and the man door swing.
//!
//! ## Architecture
//!
//! ```text
//! FloorPlan (facade, change events)
//!   ├── Room (bounds, door, derived zones)
//!   ├── EquipmentRegistry (ordered items)
//!   ├── PlacementRules (grid, clearance, door policy)
//!   └── DragController (pointer state machine)
//!
//! PlacementValidator (pure: bounds → overlap → clearance → door)
//!   └── rotation proposals, drag candidates, audit
//!
//! PlanFile (JSON save/load)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use potterplan_designer::FloorPlan;
//!
//! let mut plan = FloorPlan::default_studio();
//! let verdict = plan.rotate(&"wheel-1".into())?;
//! for entry in plan.audit() {
//!     println!("{}", entry);
//! }
//! ```

pub mod defaults;
pub mod drag;
pub mod equipment;
pub mod events;
pub mod floor_plan;
pub mod registry;
pub mod room;
pub mod rotation;
pub mod rules;
pub mod serialization;
pub mod validator;

pub use defaults::{default_equipment, default_room};
pub use drag::{DragCandidate, DragController, DragOutcome, DragPhase, RevertReason};
pub use equipment::{Equipment, EquipmentId, NewEquipment, Priority};
pub use events::{ChangeListeners, ListenerId, PlanEvent};
pub use floor_plan::{AuditEntry, FloorPlan, PriorityCount, PrioritySummary};
pub use registry::EquipmentRegistry;
pub use room::{ClearanceZone, Room, RoomPreset};
pub use rotation::{propose_quarter_turn, propose_rotation, RotationProposal};
pub use rules::{DoorPolicy, PlacementRules};
pub use serialization::{PlanFile, PlanMetadata};
pub use validator::{PlacementValidator, PlacementWarning, Verdict};

pub use potterplan_core::{
    BoundingBox, Footprint, PlanError, PlanResult, Point, Rotation, UnitScale,
};
