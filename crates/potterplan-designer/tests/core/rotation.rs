use potterplan_core::thread_safe_vec;
use potterplan_designer::{
    BoundingBox, Equipment, EquipmentId, FloorPlan, PlacementRules, PlanError, PlanEvent, Point,
    Room, Rotation, Verdict,
};

fn plan() -> FloorPlan {
    FloorPlan::with_equipment(
        Room::default(),
        PlacementRules::default(),
        vec![
            Equipment::new("table", "Wedging Table", "Work Surfaces", 4.0, 1.0, 5.0, 10.0),
            Equipment::new("wheel", "Pottery Wheel", "Wheels", 2.0, 2.0, 6.0, 11.5),
            Equipment::new("cart", "Rolling Tool Cart", "Storage", 1.5, 2.0, 9.0, 3.0),
        ],
    )
    .unwrap()
}

#[test]
fn test_rotating_into_neighbour_changes_nothing() {
    let mut plan = plan();
    let events = thread_safe_vec::<PlanEvent>();
    {
        let events = events.clone();
        plan.subscribe(Box::new(move |e| events.lock().push(e.clone())));
    }

    let verdict = plan.rotate(&"table".into()).unwrap();
    assert_eq!(verdict, Verdict::RejectedOverlap("wheel".into()));

    let table = plan.get(&"table".into()).unwrap();
    assert_eq!(table.rotation, Rotation::Deg0);
    assert_eq!(table.anchor(), Point::new(5.0, 10.0));
    assert!(events.lock().is_empty());
}

#[test]
fn test_full_cycle_returns_to_start() {
    let mut plan = plan();
    let cart = EquipmentId::new("cart");
    let start = plan.get(&cart).unwrap().bounding_box();

    let mut seen = Vec::new();
    for _ in 0..4 {
        assert!(plan.rotate(&cart).unwrap().is_accepted());
        seen.push(plan.get(&cart).unwrap().rotation.degrees());
    }
    assert_eq!(seen, vec![90, 180, 270, 0]);
    assert_eq!(plan.get(&cart).unwrap().bounding_box(), start);
}

#[test]
fn test_quarter_turn_swaps_effective_size() {
    let mut plan = plan();
    let cart = EquipmentId::new("cart");
    plan.rotate(&cart).unwrap();

    let turned = plan.get(&cart).unwrap().bounding_box();
    assert_eq!(turned, BoundingBox::new(8.75, 3.25, 10.75, 4.75));
    assert_eq!(plan.get(&cart).unwrap().width, 1.5);
    assert_eq!(plan.get(&cart).unwrap().depth, 2.0);
}

#[test]
fn test_rotation_near_wall_is_rejected() {
    let mut plan = FloorPlan::with_equipment(
        Room::default(),
        PlacementRules::default(),
        vec![Equipment::new("bench", "Bench", "Work Surfaces", 4.0, 1.0, 8.0, 0.0)],
    )
    .unwrap();
    // Turned upright around its centre (10, 0.5) it would poke through the top wall.
    assert_eq!(
        plan.rotate(&"bench".into()).unwrap(),
        Verdict::RejectedOutOfBounds
    );
    assert_eq!(plan.get(&"bench".into()).unwrap().rotation, Rotation::Deg0);
}

#[test]
fn test_update_rotation_rejects_non_quarter_turns() {
    let mut plan = plan();
    for degrees in [45, 360, -90, 1] {
        assert_eq!(
            plan.update_rotation_degrees(&"cart".into(), degrees),
            Err(PlanError::InvalidRotation { degrees })
        );
    }
    assert_eq!(
        plan.update_rotation(&"cart".into(), Rotation::Deg180).unwrap(),
        Verdict::Accepted
    );
}
