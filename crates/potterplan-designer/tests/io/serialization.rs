use potterplan_designer::{
    Equipment, FloorPlan, PlacementRules, PlanFile, Room, RoomPreset, Rotation,
};
use tempfile::TempDir;

fn odd_plan() -> FloorPlan {
    FloorPlan::with_equipment(
        Room::from_preset(RoomPreset::Shed)
            .with_door_position(7.25)
            .unwrap(),
        PlacementRules::default(),
        vec![
            Equipment::new("a", "Pottery Wheel", "Wheels", 2.1, 2.35, 1.125, 16.4)
                .with_rotation(Rotation::Deg270),
            Equipment::new("b", "Tool Cart", "Storage", 1.0 / 3.0, 0.1, 0.1 + 0.2, 9.999)
                .with_rotation(Rotation::Deg90)
                .with_details("$1", &["DIY"], "thirds"),
        ],
    )
    .unwrap()
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("studio.json");

    let plan = odd_plan();
    PlanFile::from_plan("Studio", &plan)
        .save_to_file(&path)
        .unwrap();

    let loaded = PlanFile::load_from_file(&path).unwrap();
    assert_eq!(loaded.version, "1.0");
    assert_eq!(loaded.metadata.name, "Studio");
    assert_eq!(&loaded.room, plan.room());
    assert_eq!(loaded.equipment.as_slice(), plan.equipment());

    let restored = loaded.into_floor_plan(PlacementRules::default()).unwrap();
    assert_eq!(restored.equipment(), plan.equipment());
    assert_eq!(restored.room().man_door_position(), 7.25);
}

#[test]
fn test_fractional_values_survive_json() {
    let plan = odd_plan();
    let json = PlanFile::from_plan("Studio", &plan).to_json().unwrap();
    let parsed = PlanFile::from_json(&json).unwrap();

    let b = &parsed.equipment[1];
    assert_eq!(b.width.to_bits(), (1.0_f64 / 3.0).to_bits());
    assert_eq!(b.x.to_bits(), (0.1_f64 + 0.2).to_bits());
    assert_eq!(b.rotation, Rotation::Deg90);
    assert_eq!(b.brands, vec!["DIY".to_string()]);
}

#[test]
fn test_missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.json");
    let err = PlanFile::load_from_file(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("nope.json"));
}

#[test]
fn test_duplicate_ids_fail_to_load() {
    let mut file = PlanFile::new("dupes", Room::default());
    let item = Equipment::new("x", "Shelf", "Storage", 2.0, 1.5, 1.0, 1.0);
    file.equipment = vec![item.clone(), item];
    assert!(file.into_floor_plan(PlacementRules::default()).is_err());
}
