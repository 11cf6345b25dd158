//! Text report of a floor plan: room, placement problems, door swing and
//! purchase progress.

use std::fmt::{self, Write};

use potterplan_core::format_feet_inches;
use potterplan_designer::FloorPlan;
use potterplan_settings::DisplaySettings;

fn length(feet: f64, display: &DisplaySettings) -> String {
    if display.feet_and_inches {
        format_feet_inches(feet)
    } else {
        format!("{}'", feet)
    }
}

/// Renders the report printed by the binary.
pub fn render_report(plan: &FloorPlan, display: &DisplaySettings) -> String {
    let mut out = String::new();
    // Writing into a String never fails.
    if write_report(&mut out, plan, display).is_err() {
        tracing::error!("report formatting failed");
    }
    out
}

fn write_report(out: &mut String, plan: &FloorPlan, display: &DisplaySettings) -> fmt::Result {
    let room = plan.room();
    writeln!(
        out,
        "Room: {} x {}, man door at {}",
        length(room.width(), display),
        length(room.depth(), display),
        length(room.man_door_position(), display)
    )?;
    writeln!(out, "Equipment: {} items", plan.equipment().len())?;

    let audit = plan.audit();
    if audit.is_empty() {
        writeln!(out, "Placement: all items fit")?;
    } else {
        writeln!(out, "Placement: {} problem(s)", audit.len())?;
        for entry in &audit {
            writeln!(out, "  - {}", entry)?;
        }
    }

    let blocking = plan.door_warnings();
    if blocking.is_empty() {
        writeln!(out, "Door swing: clear")?;
    } else {
        writeln!(out, "Door swing: {} item(s) in the way", blocking.len())?;
        for item in blocking {
            writeln!(out, "  - {} ({})", item.name, item.id)?;
        }
    }

    writeln!(out, "Purchases: {}", plan.priority_summary())
}
