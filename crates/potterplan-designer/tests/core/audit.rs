use potterplan_designer::{
    Equipment, FloorPlan, NewEquipment, PlacementRules, Priority, Room, RoomPreset, Verdict,
};

#[test]
fn test_starter_studio_audit() {
    let plan = FloorPlan::default_studio();
    let report: Vec<(String, Verdict)> = plan
        .audit()
        .into_iter()
        .map(|entry| (entry.id.to_string(), entry.verdict))
        .collect();

    assert_eq!(
        report,
        vec![
            ("wheel-2".to_string(), Verdict::RejectedOverlap("pugmill".into())),
            ("kiln-1".to_string(), Verdict::RejectedClearance("shelving-3".into())),
            ("shelving-3".to_string(), Verdict::RejectedClearance("kiln-1".into())),
            ("pugmill".to_string(), Verdict::RejectedOverlap("wheel-2".into())),
        ]
    );
    assert!(plan.door_warnings().is_empty());
}

#[test]
fn test_clearance_toggle_clears_kiln_findings() {
    let mut plan = FloorPlan::default_studio();
    plan.set_show_kiln_clearance(false);
    let ids: Vec<String> = plan.audit().iter().map(|e| e.id.to_string()).collect();
    assert_eq!(ids, vec!["wheel-2", "pugmill"]);
}

#[test]
fn test_shrinking_room_is_reported() {
    let mut plan = FloorPlan::with_equipment(
        Room::from_preset(RoomPreset::Shed),
        PlacementRules::default(),
        vec![Equipment::new("sink", "Clay Sink", "Plumbing", 2.0, 2.0, 13.0, 10.0)],
    )
    .unwrap();
    assert!(plan.audit().is_empty());

    plan.apply_preset(RoomPreset::Garage).unwrap();
    let report = plan.audit();
    assert_eq!(report.len(), 1);
    assert_eq!(report[0].verdict, Verdict::RejectedOutOfBounds);
    // Items are never moved by a resize.
    assert_eq!(plan.get(&"sink".into()).unwrap().x, 13.0);
}

#[test]
fn test_resize_clamps_door() {
    let mut plan = FloorPlan::default_studio();
    plan.set_door_position(15.0).unwrap();
    plan.resize_room(12.0, 10.0).unwrap();
    assert_eq!(plan.room().man_door_position(), 5.0);
    assert!(plan.resize_room(50.0, 20.0).is_err());
    assert_eq!(plan.room().width(), 12.0);
}

#[test]
fn test_added_item_starts_at_staging() {
    let mut plan = FloorPlan::default_studio();
    let id = plan
        .add_equipment(NewEquipment::new(
            "Spray Booth",
            "Glazing",
            3.0,
            2.0,
            Priority::Recommended,
        ))
        .unwrap();

    let item = plan.get(&id).unwrap();
    assert_eq!((item.x, item.y), (1.0, 5.0));
    assert!(id.as_str().starts_with("custom-"));
    assert_eq!(plan.equipment().last().unwrap().id, id);
    assert_eq!(plan.priority_summary().recommended.total, 7);
}

#[test]
fn test_reset_restores_starter_studio() {
    let mut plan = FloorPlan::default_studio();
    plan.remove_equipment(&"kiln-1".into()).unwrap();
    plan.apply_preset(RoomPreset::Shed).unwrap();

    plan.reset_to_defaults().unwrap();
    assert_eq!(plan.equipment().len(), 15);
    assert_eq!(plan.room().width(), 12.0);
    assert!(plan.get(&"kiln-1".into()).is_some());
}
