//! Plan file save and load.
//!
//! A plan file is pretty-printed JSON holding the room and the equipment
//! list with camelCase field names (`estimatedCost`, `manDoorPosition`).
//! Lengths and rotations round-trip exactly.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::equipment::Equipment;
use crate::floor_plan::FloorPlan;
use crate::room::Room;
use crate::rules::PlacementRules;

/// Plan file format version
const FILE_FORMAT_VERSION: &str = "1.0";

/// Complete plan file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanFile {
    pub version: String,
    pub metadata: PlanMetadata,
    pub room: Room,
    pub equipment: Vec<Equipment>,
}

/// Plan metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    #[serde(default)]
    pub description: String,
}

impl PlanFile {
    /// Create an empty plan file for `room`
    pub fn new(name: impl Into<String>, room: Room) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata: PlanMetadata {
                name: name.into(),
                created: now,
                modified: now,
                description: String::new(),
            },
            room,
            equipment: Vec::new(),
        }
    }

    /// Snapshot of a floor plan
    pub fn from_plan(name: impl Into<String>, plan: &FloorPlan) -> Self {
        let mut file = Self::new(name, plan.room().clone());
        file.equipment = plan.equipment().to_vec();
        file
    }

    /// Builds a floor plan from the file contents
    pub fn into_floor_plan(self, rules: PlacementRules) -> Result<FloorPlan> {
        FloorPlan::with_equipment(self.room, rules, self.equipment)
            .context("Plan file holds an invalid plan")
    }

    /// Serialize to a JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize plan")
    }

    /// Parse from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let file: PlanFile = serde_json::from_str(json).context("Failed to parse plan file")?;
        if file.version != FILE_FORMAT_VERSION {
            tracing::warn!(
                version = %file.version,
                expected = FILE_FORMAT_VERSION,
                "plan file version differs"
            );
        }
        Ok(file)
    }

    /// Save plan to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = self.to_json()?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write plan file {}", path.display()))?;
        tracing::info!(path = %path.display(), items = self.equipment.len(), "plan saved");
        Ok(())
    }

    /// Load plan from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read plan file {}", path.display()))?;

        let mut file = Self::from_json(&content)?;
        file.metadata.modified = Utc::now();

        tracing::info!(path = %path.display(), items = file.equipment.len(), "plan loaded");
        Ok(file)
    }
}
