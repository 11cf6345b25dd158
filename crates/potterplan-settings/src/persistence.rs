//! Plan storage
//!
//! Loads, saves and resets the floor plan kept in a single JSON plan file,
//! and tracks unsaved changes so the plan can be autosaved after commits.

use potterplan_designer::{FloorPlan, ListenerId, PlacementRules, PlanFile};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::config::Config;
use crate::error::{SettingsError, SettingsResult};

/// Name written into plan file metadata.
const PLAN_NAME: &str = "Pottery Studio";

/// A plan file on disk plus a dirty flag fed by plan change events.
#[derive(Debug, Clone)]
pub struct PlanStore {
    path: PathBuf,
    dirty: Arc<AtomicBool>,
}

impl PlanStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Store at the plan path named by `config`.
    pub fn from_config(config: &Config) -> SettingsResult<Self> {
        Ok(Self::new(config.plan_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Loads the stored plan, or the starter studio when nothing is stored.
    pub fn load_or_default(&self, rules: PlacementRules) -> SettingsResult<FloorPlan> {
        if !self.exists() {
            tracing::info!(path = %self.path.display(), "no stored plan, using starter studio");
            let mut plan = FloorPlan::default_studio();
            plan.set_rules(rules)
                .map_err(|e| SettingsError::LoadError(e.to_string()))?;
            return Ok(plan);
        }
        self.load(rules)
    }

    /// Loads the stored plan.
    pub fn load(&self, rules: PlacementRules) -> SettingsResult<FloorPlan> {
        let plan = PlanFile::load_from_file(&self.path)
            .and_then(|file| file.into_floor_plan(rules))
            .map_err(|e| SettingsError::LoadError(format!("{:#}", e)))?;
        self.dirty.store(false, Ordering::SeqCst);
        Ok(plan)
    }

    /// Writes `plan` to the plan file and clears the dirty flag.
    pub fn save(&self, plan: &FloorPlan) -> SettingsResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        PlanFile::from_plan(PLAN_NAME, plan)
            .save_to_file(&self.path)
            .map_err(|e| SettingsError::SaveError(format!("{:#}", e)))?;
        self.dirty.store(false, Ordering::SeqCst);
        Ok(())
    }

    /// Deletes the stored plan and returns the starter studio.
    pub fn reset(&self, rules: PlacementRules) -> SettingsResult<FloorPlan> {
        if self.exists() {
            std::fs::remove_file(&self.path)?;
            tracing::info!(path = %self.path.display(), "stored plan removed");
        }
        self.dirty.store(false, Ordering::SeqCst);
        self.load_or_default(rules)
    }

    /// Marks the store dirty whenever `plan` reports a change.
    pub fn watch(&self, plan: &mut FloorPlan) -> ListenerId {
        let dirty = Arc::clone(&self.dirty);
        plan.subscribe(Box::new(move |event| {
            tracing::trace!(?event, "plan changed");
            dirty.store(true, Ordering::SeqCst);
        }))
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Saves `plan` if a change was seen since the last load or save.
    /// Returns whether anything was written.
    pub fn autosave(&self, plan: &FloorPlan) -> SettingsResult<bool> {
        if !self.is_dirty() {
            return Ok(false);
        }
        self.save(plan)?;
        Ok(true)
    }
}
