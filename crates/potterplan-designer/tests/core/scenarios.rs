use potterplan_designer::{
    BoundingBox, DoorPolicy, Equipment, EquipmentId, EquipmentRegistry, FloorPlan,
    PlacementRules, PlacementValidator, PlacementWarning, Room, RoomPreset, Verdict,
};

fn wheel(id: &str, x: f64, y: f64) -> Equipment {
    Equipment::new(id, "Pottery Wheel", "Wheels", 2.0, 2.5, x, y)
}

fn kiln(id: &str, x: f64, y: f64) -> Equipment {
    Equipment::new(id, "Electric Kiln", "Kilns", 2.5, 2.5, x, y)
}

fn plan(room: Room, items: Vec<Equipment>) -> FloorPlan {
    FloorPlan::with_equipment(room, PlacementRules::default(), items).unwrap()
}

fn candidate(plan: &FloorPlan, id: &str, x: f64, y: f64) -> BoundingBox {
    let item = plan.get(&id.into()).unwrap();
    item.box_at(x, y, item.rotation)
}

#[test]
fn test_wheel_near_the_bottom_wall() {
    let plan = plan(Room::default(), vec![wheel("a", 1.5, 16.5)]);
    let a = EquipmentId::new("a");

    let inside = candidate(&plan, "a", 1.5, 16.5);
    assert_eq!(plan.validate(&a, &inside).unwrap(), Verdict::Accepted);

    let beyond = candidate(&plan, "a", 1.5, 17.9);
    assert_eq!(
        plan.validate(&a, &beyond).unwrap(),
        Verdict::RejectedOutOfBounds
    );
}

#[test]
fn test_second_wheel_overlapping_first() {
    let plan = plan(
        Room::default(),
        vec![wheel("a", 1.5, 16.5), wheel("b", 8.0, 12.0)],
    );
    let bounds = candidate(&plan, "b", 2.0, 17.0);
    assert_eq!(
        plan.validate(&"b".into(), &bounds).unwrap(),
        Verdict::RejectedOverlap("a".into())
    );
}

#[test]
fn test_kiln_clearance_toggle() {
    let mut plan = plan(
        Room::from_preset(RoomPreset::Shed),
        vec![kiln("kiln-1", 9.0, 1.0), wheel("b", 5.0, 12.0)],
    );
    let bounds = candidate(&plan, "b", 11.6, 1.0);

    assert_eq!(
        plan.validate(&"b".into(), &bounds).unwrap(),
        Verdict::RejectedClearance("kiln-1".into())
    );

    plan.set_show_kiln_clearance(false);
    assert_eq!(plan.validate(&"b".into(), &bounds).unwrap(), Verdict::Accepted);

    // Raw overlap still applies with clearance off.
    let on_top = candidate(&plan, "b", 10.0, 1.0);
    assert_eq!(
        plan.validate(&"b".into(), &on_top).unwrap(),
        Verdict::RejectedOverlap("kiln-1".into())
    );
}

#[test]
fn test_clearance_uses_configured_category() {
    let rules = PlacementRules {
        kiln_category: "Heat".to_string(),
        ..Default::default()
    };
    let registry = EquipmentRegistry::from_items(vec![
        kiln("kiln-1", 9.0, 1.0),
        wheel("b", 5.0, 12.0),
    ])
    .unwrap();
    let room = Room::from_preset(RoomPreset::Shed);
    let bounds = registry
        .require(&"b".into())
        .unwrap()
        .box_at(11.6, 1.0, Default::default());

    let verdict = PlacementValidator::new(&registry, &room, &rules)
        .validate(&"b".into(), &bounds)
        .unwrap();
    assert_eq!(verdict, Verdict::Accepted);
}

#[test]
fn test_touching_room_edges_is_contained() {
    let plan = plan(Room::default(), vec![wheel("a", 5.0, 5.0)]);
    let a = EquipmentId::new("a");

    for (x, y) in [(10.0, 0.0), (10.0, 17.5), (0.0, 17.5), (5.0, 0.0)] {
        let bounds = candidate(&plan, "a", x, y);
        assert!(
            plan.validate(&a, &bounds).unwrap().is_accepted(),
            "({}, {}) should be inside",
            x,
            y
        );
    }

    for (x, y) in [(10.001, 0.0), (-0.001, 12.0), (5.0, 17.501), (5.0, -0.001)] {
        let bounds = candidate(&plan, "a", x, y);
        assert_eq!(
            plan.validate(&a, &bounds).unwrap(),
            Verdict::RejectedOutOfBounds,
            "({}, {}) should be outside",
            x,
            y
        );
    }
}

#[test]
fn test_door_swing_is_advisory_then_blocking() {
    let mut plan = plan(Room::default(), vec![wheel("a", 5.0, 12.0)]);
    let a = EquipmentId::new("a");
    let in_swing = candidate(&plan, "a", 1.0, 7.0);

    assert_eq!(
        plan.validate(&a, &in_swing).unwrap(),
        Verdict::AcceptedWithWarning(PlacementWarning::DoorObstruction)
    );
    assert!(plan.update_position(&a, 1.0, 7.0).unwrap().is_accepted());
    assert_eq!(plan.door_warnings().len(), 1);

    plan.set_rules(PlacementRules {
        door_policy: DoorPolicy::Blocking,
        ..Default::default()
    })
    .unwrap();
    let verdict = plan.update_position(&a, 1.0, 8.0).unwrap();
    assert_eq!(verdict, Verdict::RejectedDoorObstruction);
    assert_eq!(plan.get(&a).unwrap().y, 7.0);
}

#[test]
fn test_door_follows_door_position() {
    let mut plan = plan(Room::default(), vec![wheel("a", 1.0, 12.0)]);
    let a = EquipmentId::new("a");
    let bounds = candidate(&plan, "a", 1.0, 12.0);
    assert_eq!(plan.validate(&a, &bounds).unwrap(), Verdict::Accepted);

    plan.set_door_position(13.0).unwrap();
    assert_eq!(
        plan.validate(&a, &bounds).unwrap().warning(),
        Some(PlacementWarning::DoorObstruction)
    );
}

#[test]
fn test_unknown_ids_are_errors() {
    let mut plan = plan(Room::default(), vec![wheel("a", 1.5, 16.5)]);
    let ghost = EquipmentId::new("ghost");
    let bounds = BoundingBox::new(0.0, 0.0, 1.0, 1.0);

    assert!(plan.validate(&ghost, &bounds).is_err());
    assert!(plan.update_position(&ghost, 1.0, 1.0).is_err());
    assert!(plan.rotate(&ghost).is_err());
    assert!(plan.remove_equipment(&ghost).is_err());
    assert!(plan.toggle_purchased(&ghost).is_err());
}

#[test]
fn test_validate_is_idempotent() {
    let plan = FloorPlan::default_studio();
    let verdicts = |plan: &FloorPlan| -> Vec<Verdict> {
        plan.equipment()
            .iter()
            .map(|item| plan.validate(&item.id, &item.bounding_box()).unwrap())
            .collect()
    };
    assert_eq!(verdicts(&plan), verdicts(&plan));
}
