//! The starter studio: a 12 x 20 garage with fifteen common pieces of
//! equipment in a reasonable first arrangement.
//!
//! The starter layout is loaded as-is. It is a suggestion rather than a
//! validated plan, so [`crate::FloorPlan::audit`] may flag a few items
//! (the optional pug mill and second wheel share floor, and the glaze shelf
//! sits inside the kiln clearance).

use crate::equipment::{Equipment, Priority};
use crate::room::{Room, RoomPreset};

/// Room of the starter studio.
pub fn default_room() -> Room {
    Room::from_preset(RoomPreset::Garage)
}

/// Equipment of the starter studio, in draw order.
pub fn default_equipment() -> Vec<Equipment> {
    use Priority::{Essential, Optional, Recommended};

    vec![
        Equipment::new("wheel-1", "Pottery Wheel", "Wheels", 2.0, 2.5, 1.5, 16.5)
            .with_priority(Essential)
            .with_details(
                "$800-$2000",
                &["Shimpo", "Brent", "Speedball"],
                "Shimpo VL-Whisper is quiet and reliable. Brent Model C is industry standard.",
            ),
        Equipment::new(
            "wheel-2",
            "Pottery Wheel (Optional)",
            "Wheels",
            2.0,
            2.5,
            4.5,
            16.5,
        )
        .with_priority(Optional)
        .with_details(
            "$800-$2000",
            &["Shimpo", "Brent", "Speedball"],
            "Second wheel if you plan to teach or work with others.",
        ),
        Equipment::new("kiln-1", "Electric Kiln", "Kilns", 2.5, 2.5, 9.0, 1.0)
            .with_priority(Essential)
            .with_details(
                "$1500-$4000",
                &["L&L", "Skutt", "Olympic"],
                "Skutt KM-1027 (10 cu ft) is great for home studios. Needs 240V outlet. \
                 Keep 18\" clearance.",
            ),
        Equipment::new(
            "worktable-1",
            "Wedging/Work Table",
            "Work Surfaces",
            3.0,
            2.5,
            5.0,
            7.0,
        )
        .with_priority(Essential)
        .with_details(
            "$200-$600",
            &["Custom/DIY", "Continental Clay", "Bailey"],
            "Canvas-covered plaster surface ideal for wedging. Counter height (36\").",
        ),
        Equipment::new(
            "worktable-2",
            "Hand-building Table",
            "Work Surfaces",
            4.0,
            3.0,
            1.0,
            12.5,
        )
        .with_priority(Essential)
        .with_details(
            "$150-$400",
            &["DIY", "IKEA (modified)", "Adjustable workbench"],
            "Sturdy table for slab building and handwork. 30-36\" height.",
        ),
        Equipment::new("sink-1", "Clay Sink w/ Trap", "Plumbing", 2.0, 2.0, 10.0, 10.0)
            .with_priority(Essential)
            .with_details(
                "$300-$800",
                &["Plaster trap (DIY)", "Continental Clay", "Bluebird"],
                "MUST have sediment trap to prevent clay clogging plumbing. \
                 Never wash clay down regular drain.",
            ),
        Equipment::new(
            "shelving-1",
            "Greenware Drying Shelf #1",
            "Storage",
            2.0,
            1.5,
            1.0,
            1.0,
        )
        .with_priority(Essential)
        .with_details(
            "$150-$400",
            &["Continental Clay", "Bailey", "Wire shelving (DIY)"],
            "For drying greenware. Needs good airflow between shelves. 4-6 shelves high.",
        ),
        Equipment::new(
            "shelving-2",
            "Greenware Drying Shelf #2",
            "Storage",
            2.0,
            1.5,
            4.0,
            1.0,
        )
        .with_priority(Recommended)
        .with_details(
            "$150-$400",
            &["Continental Clay", "Bailey", "Wire shelving (DIY)"],
            "Additional drying space. You can never have too many drying shelves!",
        ),
        Equipment::new("shelving-3", "Glaze/Tool Storage", "Storage", 2.0, 1.5, 7.0, 1.0)
            .with_priority(Recommended)
            .with_details(
                "$100-$300",
                &["Wire shelving", "Gladiator garage system", "Husky"],
                "Store glazes, tools, and supplies. Keep organized and labeled.",
            ),
        Equipment::new(
            "shelving-4",
            "Finished Ware Storage",
            "Storage",
            2.0,
            1.5,
            10.0,
            5.0,
        )
        .with_priority(Recommended)
        .with_details(
            "$100-$300",
            &["Wire shelving", "Metro shelving", "Gladiator"],
            "For storing bisque-fired and finished pieces. Keep separate from greenware.",
        ),
        Equipment::new("clay-storage", "Clay Storage", "Storage", 2.0, 2.0, 10.0, 14.5)
            .with_priority(Essential)
            .with_details(
                "$50-$200",
                &["Rubbermaid containers", "Trash cans with lids"],
                "Keep clay moist. Airtight containers or lined trash cans work well. \
                 Store 100-200 lbs.",
            ),
        Equipment::new(
            "reclaim-station",
            "Clay Reclaim/Slop Buckets",
            "Clay Prep",
            2.0,
            2.0,
            7.5,
            14.5,
        )
        .with_priority(Recommended)
        .with_details(
            "$30-$100",
            &["5-gallon buckets", "Rubbermaid", "Home Depot buckets"],
            "For clay scraps and throwing slurry. Let settle, pour off water, reclaim clay. \
             Get 4-6 buckets.",
        ),
        Equipment::new("pugmill", "Pug Mill (Optional)", "Clay Prep", 2.0, 3.0, 5.5, 14.5)
            .with_priority(Optional)
            .with_details(
                "$1500-$3500",
                &["Peter Pugger", "Venco", "Bluebird"],
                "For recycling clay. Not essential when starting out. Can wedge by hand.",
            ),
        Equipment::new("bat-storage", "Bat & Board Rack", "Storage", 1.5, 1.0, 7.5, 16.5)
            .with_priority(Recommended)
            .with_details(
                "$50-$150",
                &["DIY wall-mounted", "Continental Clay"],
                "Wall-mounted or standing rack for wheel bats and drying boards. \
                 Essential for throwing.",
            ),
        Equipment::new("tool-cart", "Rolling Tool Cart", "Storage", 1.5, 2.0, 1.0, 4.0)
            .with_priority(Recommended)
            .with_details(
                "$100-$300",
                &["Husky rolling cart", "IKEA Raskog", "Harbor Freight"],
                "Mobile storage for frequently used tools. Keep by your wheel/work area.",
            ),
    ]
}
