//! The floor plan: room, equipment and the interaction state that moves it.

mod interaction;
mod types;

pub use types::{AuditEntry, PriorityCount, PrioritySummary};

use potterplan_core::{
    thread_safe, BoundingBox, PlanError, PlanResult, RefCallback, ThreadSafe, UnitScale,
};

use crate::defaults::{default_equipment, default_room};
use crate::drag::DragController;
use crate::equipment::{Equipment, EquipmentId, NewEquipment};
use crate::events::{ChangeListeners, ListenerId, PlanEvent};
use crate::registry::EquipmentRegistry;
use crate::room::{Room, RoomPreset};
use crate::rules::PlacementRules;
use crate::validator::{PlacementValidator, Verdict};

/// Room, equipment, placement rules and the active drag, kept together.
///
/// All registry mutations go through this type so that every change is
/// validated where it must be and reported to listeners.
#[derive(Debug)]
pub struct FloorPlan {
    room: Room,
    registry: EquipmentRegistry,
    rules: PlacementRules,
    drag: DragController,
    listeners: ChangeListeners,
}

impl FloorPlan {
    /// Creates an empty plan.
    pub fn new(room: Room, rules: PlacementRules) -> Self {
        Self {
            room,
            registry: EquipmentRegistry::new(),
            rules,
            drag: DragController::default(),
            listeners: ChangeListeners::new(),
        }
    }

    /// Creates a plan from stored records, keeping their order.
    ///
    /// Records are taken as committed; use [`FloorPlan::audit`] to find any
    /// that no longer fit.
    pub fn with_equipment(
        room: Room,
        rules: PlacementRules,
        items: Vec<Equipment>,
    ) -> PlanResult<Self> {
        room.validate()?;
        let mut plan = Self::new(room, rules);
        plan.registry = EquipmentRegistry::from_items(items)?;
        Ok(plan)
    }

    /// The starter studio with default rules.
    pub fn default_studio() -> Self {
        let mut plan = Self::new(default_room(), PlacementRules::default());
        for item in default_equipment() {
            // Seed ids are unique and footprints positive.
            if let Err(e) = plan.registry.insert(item) {
                tracing::warn!("skipping starter item: {}", e);
            }
        }
        plan
    }

    /// Uses `scale` for pointer conversion. Cancels any active drag.
    pub fn with_scale(mut self, scale: UnitScale) -> Self {
        self.drag = DragController::new(scale);
        self
    }

    /// Moves the plan behind a lock for hosts that share it across threads.
    pub fn into_thread_safe(self) -> ThreadSafe<FloorPlan> {
        thread_safe(self)
    }

    pub fn room(&self) -> &Room {
        &self.room
    }

    pub fn registry(&self) -> &EquipmentRegistry {
        &self.registry
    }

    pub fn rules(&self) -> &PlacementRules {
        &self.rules
    }

    pub fn scale(&self) -> UnitScale {
        self.drag.scale()
    }

    /// Equipment in draw order.
    pub fn equipment(&self) -> &[Equipment] {
        self.registry.as_slice()
    }

    pub fn get(&self, id: &EquipmentId) -> Option<&Equipment> {
        self.registry.get(id)
    }

    /// A validator over the current state.
    pub fn validator(&self) -> PlacementValidator<'_> {
        PlacementValidator::new(&self.registry, &self.room, &self.rules)
    }

    /// Judges `candidate_box` as the new footprint of `id` without changing anything.
    pub fn validate(&self, id: &EquipmentId, candidate_box: &BoundingBox) -> PlanResult<Verdict> {
        self.validator().validate(id, candidate_box)
    }

    /// Re-validates every item at its committed placement.
    ///
    /// Returns the items that would not be accepted, in registry order.
    /// Door warnings are not reported.
    pub fn audit(&self) -> Vec<AuditEntry> {
        let validator = self.validator();
        self.registry
            .iter()
            .filter_map(|item| {
                let verdict = validator.validate(&item.id, &item.bounding_box()).ok()?;
                verdict.is_rejection().then(|| AuditEntry {
                    id: item.id.clone(),
                    name: item.name.clone(),
                    verdict,
                })
            })
            .collect()
    }

    /// Items whose committed placement sits in the door swing.
    pub fn door_warnings(&self) -> Vec<&Equipment> {
        let zone = self.room.door_swing_zone(&self.rules);
        self.registry
            .iter()
            .filter(|item| item.bounding_box().overlaps(&zone))
            .collect()
    }

    pub fn priority_summary(&self) -> PrioritySummary {
        PrioritySummary::from_items(self.registry.iter())
    }

    // ---- equipment records ----

    /// Adds a catalogue item at the staging position and returns its new id.
    pub fn add_equipment(&mut self, entry: NewEquipment) -> PlanResult<EquipmentId> {
        let id = EquipmentId::generate();
        self.registry.insert(entry.into_equipment(id.clone()))?;
        tracing::info!(id = %id, "equipment added");
        self.notify(PlanEvent::EquipmentAdded(id.clone()));
        Ok(id)
    }

    /// Adds a fully specified item, keeping its id and placement.
    pub fn insert_equipment(&mut self, item: Equipment) -> PlanResult<()> {
        let id = item.id.clone();
        self.registry.insert(item)?;
        tracing::info!(id = %id, "equipment inserted");
        self.notify(PlanEvent::EquipmentAdded(id));
        Ok(())
    }

    /// Deletes an item. A drag of that item is dropped.
    pub fn remove_equipment(&mut self, id: &EquipmentId) -> PlanResult<Equipment> {
        let removed = self.registry.remove(id)?;
        if self.drag.forget(id) {
            tracing::debug!(id = %id, "drag dropped with its item");
        }
        tracing::info!(id = %id, "equipment removed");
        self.notify(PlanEvent::EquipmentRemoved(id.clone()));
        Ok(removed)
    }

    pub fn toggle_purchased(&mut self, id: &EquipmentId) -> PlanResult<bool> {
        let purchased = self.registry.toggle_purchased(id)?;
        self.notify(PlanEvent::PurchasedToggled {
            id: id.clone(),
            purchased,
        });
        Ok(purchased)
    }

    // ---- room and rules ----

    /// Resizes the room. Items are not moved; see [`FloorPlan::audit`].
    pub fn resize_room(&mut self, width: f64, depth: f64) -> PlanResult<()> {
        self.room.resize(width, depth)?;
        tracing::info!(room = %self.room, "room resized");
        self.notify(PlanEvent::RoomChanged);
        Ok(())
    }

    pub fn apply_preset(&mut self, preset: RoomPreset) -> PlanResult<()> {
        let (width, depth) = preset.dimensions();
        self.resize_room(width, depth)
    }

    pub fn set_door_position(&mut self, position: f64) -> PlanResult<()> {
        self.room.set_door_position(position)?;
        self.notify(PlanEvent::RoomChanged);
        Ok(())
    }

    pub fn set_show_kiln_clearance(&mut self, show: bool) {
        self.room.show_kiln_clearance = show;
        self.notify(PlanEvent::RoomChanged);
    }

    pub fn set_show_utilities(&mut self, show: bool) {
        self.room.show_utilities = show;
        self.notify(PlanEvent::RoomChanged);
    }

    /// Replaces the placement rules.
    pub fn set_rules(&mut self, rules: PlacementRules) -> PlanResult<()> {
        rules
            .validate()
            .map_err(|reason| PlanError::InvalidRules { reason })?;
        self.rules = rules;
        Ok(())
    }

    /// Swaps in a whole new room and equipment list.
    pub fn replace(&mut self, room: Room, items: Vec<Equipment>) -> PlanResult<()> {
        room.validate()?;
        let registry = EquipmentRegistry::from_items(items)?;
        if let Some(outcome) = self.drag.cancel() {
            tracing::debug!(id = %outcome.id(), "drag cancelled by plan replacement");
        }
        self.room = room;
        self.registry = registry;
        tracing::info!(items = self.registry.len(), "plan replaced");
        self.notify(PlanEvent::PlanReplaced);
        Ok(())
    }

    /// Restores the starter studio.
    pub fn reset_to_defaults(&mut self) -> PlanResult<()> {
        self.replace(default_room(), default_equipment())
    }

    // ---- listeners ----

    pub fn subscribe(&mut self, listener: RefCallback<PlanEvent>) -> ListenerId {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    fn notify(&self, event: PlanEvent) {
        self.listeners.notify(&event);
    }
}

impl Default for FloorPlan {
    fn default() -> Self {
        Self::default_studio()
    }
}
