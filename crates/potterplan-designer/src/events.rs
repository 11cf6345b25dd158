//! Change notification for the view and persistence layers.

use std::fmt;

use potterplan_core::{RefCallback, Rotation};

use crate::equipment::EquipmentId;

/// Something that changed in the plan.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanEvent {
    EquipmentAdded(EquipmentId),
    EquipmentRemoved(EquipmentId),
    EquipmentMoved { id: EquipmentId, x: f64, y: f64 },
    EquipmentRotated { id: EquipmentId, rotation: Rotation },
    PurchasedToggled { id: EquipmentId, purchased: bool },
    RoomChanged,
    /// The whole plan was replaced, e.g. by a reset or a file load.
    PlanReplaced,
}

impl PlanEvent {
    /// The item the event is about, if any.
    pub fn equipment_id(&self) -> Option<&EquipmentId> {
        match self {
            Self::EquipmentAdded(id)
            | Self::EquipmentRemoved(id)
            | Self::EquipmentMoved { id, .. }
            | Self::EquipmentRotated { id, .. }
            | Self::PurchasedToggled { id, .. } => Some(id),
            Self::RoomChanged | Self::PlanReplaced => None,
        }
    }
}

/// Handle returned by [`ChangeListeners::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Registered change listeners, called in subscription order.
#[derive(Default)]
pub struct ChangeListeners {
    next_id: u64,
    listeners: Vec<(ListenerId, RefCallback<PlanEvent>)>,
}

impl ChangeListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: RefCallback<PlanEvent>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Removes a listener. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn notify(&self, event: &PlanEvent) {
        for (_, listener) in &self.listeners {
            listener(event);
        }
    }
}

impl fmt::Debug for ChangeListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeListeners")
            .field("count", &self.listeners.len())
            .finish()
    }
}
