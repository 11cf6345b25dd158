use potterplan_core::thread_safe_vec;
use potterplan_designer::{
    DragOutcome, DragPhase, Equipment, EquipmentId, FloorPlan, PlacementRules, PlanEvent, Point,
    RevertReason, Room, Rotation, UnitScale, Verdict,
};

fn plan() -> FloorPlan {
    FloorPlan::with_equipment(
        Room::default(),
        PlacementRules::default(),
        vec![
            Equipment::new("a", "Pottery Wheel", "Wheels", 2.0, 2.5, 1.5, 16.5),
            Equipment::new("b", "Pottery Wheel", "Wheels", 2.0, 2.5, 8.0, 12.0),
        ],
    )
    .unwrap()
}

#[test]
fn test_live_verdict_tracks_pointer() {
    let mut plan = plan();
    plan.pointer_down(270.0, 390.0).unwrap();
    assert_eq!(plan.live_verdict(), None);

    // Over a: anchor (2, 17).
    assert_eq!(
        plan.pointer_move(90.0, 540.0).unwrap(),
        Some(Verdict::RejectedOverlap("a".into()))
    );
    // Back to open floor: anchor (5, 8).
    assert_eq!(
        plan.pointer_move(180.0, 270.0).unwrap(),
        Some(Verdict::Accepted)
    );
    assert_eq!(plan.live_verdict(), Some(&Verdict::Accepted));

    let candidate = plan.drag_candidate().unwrap();
    assert_eq!((candidate.x, candidate.y), (5.0, 8.0));
    // Nothing is written until the pointer goes up.
    assert_eq!(plan.get(&"b".into()).unwrap().anchor(), Point::new(8.0, 12.0));
}

#[test]
fn test_rejected_drop_reverts() {
    let mut plan = plan();
    plan.pointer_down(270.0, 390.0).unwrap();
    plan.pointer_move(180.0, 270.0).unwrap();
    plan.pointer_move(90.0, 540.0).unwrap();

    let outcome = plan.pointer_up().unwrap().unwrap();
    assert_eq!(
        outcome,
        DragOutcome::Reverted {
            id: "b".into(),
            reason: RevertReason::Rejected(Verdict::RejectedOverlap("a".into())),
        }
    );
    assert_eq!(plan.get(&"b".into()).unwrap().anchor(), Point::new(8.0, 12.0));
}

#[test]
fn test_out_of_room_drop_reverts() {
    let mut plan = plan();
    plan.pointer_down(270.0, 390.0).unwrap();
    plan.pointer_move(600.0, 390.0).unwrap();
    let outcome = plan.pointer_up().unwrap().unwrap();
    assert_eq!(
        outcome,
        DragOutcome::Reverted {
            id: "b".into(),
            reason: RevertReason::Rejected(Verdict::RejectedOutOfBounds),
        }
    );
}

#[test]
fn test_cancel_after_accepted_move() {
    let mut plan = plan();
    plan.pointer_down(270.0, 390.0).unwrap();
    plan.pointer_move(180.0, 270.0).unwrap();
    let outcome = plan.cancel_drag().unwrap();
    assert_eq!(
        outcome,
        DragOutcome::Reverted {
            id: "b".into(),
            reason: RevertReason::Cancelled,
        }
    );
    assert_eq!(plan.drag_phase(), DragPhase::Idle);
    assert_eq!(plan.get(&"b".into()).unwrap().anchor(), Point::new(8.0, 12.0));
}

#[test]
fn test_topmost_item_is_grabbed() {
    let mut plan = FloorPlan::with_equipment(
        Room::default(),
        PlacementRules::default(),
        vec![
            Equipment::new("under", "Table", "Work Surfaces", 4.0, 3.0, 1.0, 1.0),
            Equipment::new("over", "Cart", "Storage", 1.5, 2.0, 2.0, 2.0),
        ],
    )
    .unwrap();
    // (2.5, 2.5) ft lies in both.
    assert_eq!(plan.pointer_down(75.0, 75.0), Some("over".into()));
}

#[test]
fn test_only_commits_notify() {
    let events = thread_safe_vec::<PlanEvent>();
    let mut plan = plan();
    {
        let events = events.clone();
        plan.subscribe(Box::new(move |e| events.lock().push(e.clone())));
    }

    plan.pointer_down(270.0, 390.0).unwrap();
    plan.pointer_move(90.0, 540.0).unwrap();
    plan.pointer_up().unwrap();
    assert!(events.lock().is_empty());

    plan.pointer_down(270.0, 390.0).unwrap();
    plan.pointer_move(180.0, 270.0).unwrap();
    plan.pointer_up().unwrap();
    assert_eq!(
        *events.lock(),
        vec![PlanEvent::EquipmentMoved {
            id: "b".into(),
            x: 5.0,
            y: 8.0,
        }]
    );
}

#[test]
fn test_custom_scale() {
    let mut plan = plan().with_scale(UnitScale::new(10.0));
    // 10 px/ft: (90, 130) px is (9, 13) ft, inside b.
    assert_eq!(plan.pointer_down(90.0, 130.0), Some("b".into()));
    plan.pointer_move(60.0, 90.0).unwrap();
    let outcome = plan.pointer_up().unwrap().unwrap();
    assert!(outcome.is_committed());
    assert_eq!(plan.get(&"b".into()).unwrap().anchor(), Point::new(5.0, 8.0));
}

#[test]
fn test_begin_drag_by_id() {
    let mut plan = plan();
    assert!(plan.begin_drag(&"a".into(), Point::new(2.0, 17.0)).unwrap());
    assert!(!plan.begin_drag(&"b".into(), Point::new(9.0, 13.0)).unwrap());
    assert_eq!(plan.dragged_id(), Some(&"a".into()));

    plan.cancel_drag().unwrap();
    assert!(plan.begin_drag(&"ghost".into(), Point::new(0.0, 0.0)).is_err());
    assert_eq!(plan.drag_phase(), DragPhase::Idle);
}

#[test]
fn test_rotation_during_drag_is_seen_by_next_move() {
    let mut plan = FloorPlan::with_equipment(
        Room::default(),
        PlacementRules::default(),
        vec![Equipment::new("bench", "Bench", "Work Surfaces", 4.0, 1.0, 1.0, 5.0)],
    )
    .unwrap();
    let bench = EquipmentId::new("bench");

    assert!(plan.begin_drag(&bench, Point::new(1.0, 5.0)).unwrap());
    // Upright the bench sits at [2.5, 3.5] x [3.5, 7.5], in the door swing.
    assert!(plan.rotate(&bench).unwrap().is_accepted());
    assert_eq!(plan.get(&bench).unwrap().rotation, Rotation::Deg90);

    // Anchor (1, 18.5): fits lying flat, but upright it runs to y = 21.
    assert_eq!(
        plan.pointer_move(30.0, 555.0).unwrap(),
        Some(Verdict::RejectedOutOfBounds)
    );
    let candidate = plan.drag_candidate().unwrap();
    assert_eq!(candidate.bounds.width(), 1.0);
    assert_eq!(candidate.bounds.depth(), 4.0);

    assert_eq!(
        plan.pointer_up().unwrap(),
        Some(DragOutcome::Reverted {
            id: bench.clone(),
            reason: RevertReason::Rejected(Verdict::RejectedOutOfBounds),
        })
    );
    assert_eq!(plan.get(&bench).unwrap().anchor(), Point::new(1.0, 5.0));
}

#[test]
fn test_replayed_pointer_sequence_is_deterministic() {
    let replay = || {
        let mut plan = plan();
        plan.pointer_down(270.0, 390.0).unwrap();
        for (x, y) in [(250.0, 350.0), (90.0, 540.0), (203.0, 281.0), (186.0, 273.0)] {
            plan.pointer_move(x, y).unwrap();
        }
        let outcome = plan.pointer_up().unwrap().unwrap();
        let anchors: Vec<Point> = plan.equipment().iter().map(|e| e.anchor()).collect();
        (outcome, anchors)
    };

    let (first_outcome, first_anchors) = replay();
    let (second_outcome, second_anchors) = replay();
    assert!(first_outcome.is_committed());
    assert_eq!(first_outcome, second_outcome);
    assert_eq!(first_anchors, second_anchors);
    assert_eq!(first_anchors[1], Point::new(5.0, 8.0));
}
