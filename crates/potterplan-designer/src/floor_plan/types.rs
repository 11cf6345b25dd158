//! Floor plan report types: AuditEntry, PriorityCount, PrioritySummary.

use std::fmt;

use crate::equipment::{Equipment, EquipmentId, Priority};
use crate::validator::Verdict;

/// A committed item whose placement no longer passes validation.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditEntry {
    pub id: EquipmentId,
    pub name: String,
    pub verdict: Verdict,
}

impl fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.name, self.id, self.verdict)
    }
}

/// Item counts for one priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PriorityCount {
    pub total: usize,
    pub purchased: usize,
}

impl PriorityCount {
    /// Items still to buy.
    pub fn remaining(&self) -> usize {
        self.total - self.purchased
    }
}

/// Item counts grouped by priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PrioritySummary {
    pub essential: PriorityCount,
    pub recommended: PriorityCount,
    pub optional: PriorityCount,
}

impl PrioritySummary {
    pub fn from_items<'a>(items: impl IntoIterator<Item = &'a Equipment>) -> Self {
        let mut summary = Self::default();
        for item in items {
            let count = summary.count_mut(item.priority);
            count.total += 1;
            if item.purchased {
                count.purchased += 1;
            }
        }
        summary
    }

    pub fn count(&self, priority: Priority) -> PriorityCount {
        match priority {
            Priority::Essential => self.essential,
            Priority::Recommended => self.recommended,
            Priority::Optional => self.optional,
        }
    }

    pub fn total(&self) -> usize {
        self.essential.total + self.recommended.total + self.optional.total
    }

    pub fn purchased(&self) -> usize {
        self.essential.purchased + self.recommended.purchased + self.optional.purchased
    }

    fn count_mut(&mut self, priority: Priority) -> &mut PriorityCount {
        match priority {
            Priority::Essential => &mut self.essential,
            Priority::Recommended => &mut self.recommended,
            Priority::Optional => &mut self.optional,
        }
    }
}

impl fmt::Display for PrioritySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} essential, {}/{} recommended, {}/{} optional purchased",
            self.essential.purchased,
            self.essential.total,
            self.recommended.purchased,
            self.recommended.total,
            self.optional.purchased,
            self.optional.total
        )
    }
}
