//! # PotterPlan
//!
//! Floor planner for home pottery studios. Equipment footprints are placed
//! in a rectangular room and every move or rotation is checked against the
//! walls, the other equipment, kiln clearance and the man door swing.
//!
//! ## Architecture
//!
//! 1. **potterplan-core** - Geometry, units, shared defaults and errors
//! 2. **potterplan-designer** - Room, equipment registry, validator, drag
//!    and rotation, plan files
//! 3. **potterplan-settings** - Configuration and plan storage
//! 4. **potterplan** - Logging setup and the audit binary

pub mod args;
pub mod report;

use anyhow::Context;

pub use args::Args;
pub use report::render_report;

pub use potterplan_core::{PlanError, PlanResult};
pub use potterplan_designer::{
    AuditEntry, DoorPolicy, Equipment, EquipmentId, FloorPlan, PlacementRules, Room, Verdict,
};
pub use potterplan_settings::{Config, PlanStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, leaving stdout for the report
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to install the tracing subscriber")?;

    Ok(())
}

/// Loads configuration and plan as `args` asks, and returns the report.
pub fn run(args: &Args) -> anyhow::Result<String> {
    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => potterplan_settings::default_config_path()?,
    };
    let config = Config::load_or_default(&config_path)
        .with_context(|| format!("Failed to load config {}", config_path.display()))?;

    let store = match &args.plan {
        Some(path) => PlanStore::new(path),
        None => PlanStore::from_config(&config)?,
    };
    tracing::info!(plan = %store.path().display(), "using plan file");

    let rules = config.placement.clone();
    let plan = if args.reset {
        store.reset(rules)?
    } else {
        store.load_or_default(rules)?
    };
    let plan = plan.with_scale(config.display.scale());

    if args.save || (config.storage.autosave && !store.exists()) {
        store.save(&plan)?;
    }

    Ok(render_report(&plan, &config.display))
}
