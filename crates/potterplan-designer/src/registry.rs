//! Ordered storage for placed equipment.
//!
//! Registry order is meaningful: it is the draw order (later items are on
//! top for hit-testing) and the scan order the validator reports conflicts
//! in.

use potterplan_core::{PlanError, PlanResult, Point, Rotation};

use crate::equipment::{Equipment, EquipmentId};

/// Ordered collection of placed items with unique ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EquipmentRegistry {
    items: Vec<Equipment>,
}

impl EquipmentRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from records supplied by the persistence layer,
    /// keeping their order.
    pub fn from_items(items: Vec<Equipment>) -> PlanResult<Self> {
        let mut registry = Self::new();
        for item in items {
            registry.insert(item)?;
        }
        Ok(registry)
    }

    /// Number of registered items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates items in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &Equipment> {
        self.items.iter()
    }

    /// Items in registry order.
    pub fn as_slice(&self) -> &[Equipment] {
        &self.items
    }

    /// Looks up an item.
    pub fn get(&self, id: &EquipmentId) -> Option<&Equipment> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Looks up an item, treating a missing id as a caller bug.
    pub fn require(&self, id: &EquipmentId) -> PlanResult<&Equipment> {
        self.get(id).ok_or_else(|| unknown(id))
    }

    /// True if the id is registered.
    pub fn contains(&self, id: &EquipmentId) -> bool {
        self.get(id).is_some()
    }

    /// Appends an item. Rejects duplicate ids and degenerate footprints.
    pub fn insert(&mut self, item: Equipment) -> PlanResult<()> {
        if self.contains(&item.id) {
            return Err(PlanError::DuplicateEquipment {
                id: item.id.to_string(),
            });
        }
        item.footprint()?;
        self.items.push(item);
        Ok(())
    }

    /// Removes an item and returns it.
    pub fn remove(&mut self, id: &EquipmentId) -> PlanResult<Equipment> {
        let index = self.index_of(id).ok_or_else(|| unknown(id))?;
        Ok(self.items.remove(index))
    }

    /// Flips the purchased flag and returns the new value.
    pub fn toggle_purchased(&mut self, id: &EquipmentId) -> PlanResult<bool> {
        let item = self.get_mut(id)?;
        item.purchased = !item.purchased;
        Ok(item.purchased)
    }

    /// Topmost item whose effective footprint contains `point`.
    pub fn hit_test(&self, point: Point) -> Option<&Equipment> {
        self.items
            .iter()
            .rev()
            .find(|item| item.bounding_box().contains_point(point))
    }

    /// Writes a committed position. Only commit paths call this.
    pub(crate) fn set_position(&mut self, id: &EquipmentId, x: f64, y: f64) -> PlanResult<()> {
        let item = self.get_mut(id)?;
        item.x = x;
        item.y = y;
        Ok(())
    }

    /// Writes a committed rotation. Only commit paths call this.
    pub(crate) fn set_rotation(&mut self, id: &EquipmentId, rotation: Rotation) -> PlanResult<()> {
        self.get_mut(id)?.rotation = rotation;
        Ok(())
    }

    fn index_of(&self, id: &EquipmentId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }

    fn get_mut(&mut self, id: &EquipmentId) -> PlanResult<&mut Equipment> {
        self.items
            .iter_mut()
            .find(|item| &item.id == id)
            .ok_or_else(|| unknown(id))
    }
}

impl IntoIterator for EquipmentRegistry {
    type Item = Equipment;
    type IntoIter = std::vec::IntoIter<Equipment>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

fn unknown(id: &EquipmentId) -> PlanError {
    PlanError::UnknownEquipment { id: id.to_string() }
}
