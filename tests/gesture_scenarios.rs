use pretty_assertions::assert_eq;
use proptest::prelude::*;
use shift_timeline::engine::{Edge, Grab, MoveOutcome, Rejection, TimelineEditor};
use shift_timeline::model::{Role, Roster, ShiftStore, TimeOfDay};

fn t(s: &str) -> TimeOfDay {
    s.parse().unwrap()
}

fn single(start: &str, end: &str) -> (Roster, String) {
    let mut roster = Roster::default();
    let id = roster.add_member("Rin", Role::PartTime, t(start), t(end));
    (roster, id)
}

fn interval(roster: &Roster, id: &str) -> String {
    let e = roster.find_by_id(id).unwrap();
    format!("{}-{}", e.start, e.end)
}

#[test]
fn drag_one_hour_later() {
    let (mut roster, id) = single("09:00", "17:00");
    let mut editor = TimelineEditor::default();
    editor.pointer_down(&roster, &id, Grab::Body, 300.0);

    let MoveOutcome::Updated(entry) = editor.pointer_move(&mut roster, 360.0) else {
        panic!("drag by +60 should be accepted");
    };
    assert_eq!(format!("{}-{}", entry.start, entry.end), "10:00-18:00");
    assert_eq!(entry.name, "Rin");
}

#[test]
fn short_external_shift_cannot_shrink_further() {
    let (mut roster, id) = single("09:00", "09:20");
    let mut editor = TimelineEditor::default();

    editor.pointer_down(&roster, &id, Grab::Edge(Edge::End), 0.0);
    assert_eq!(editor.pointer_move(&mut roster, -5.0), MoveOutcome::Rejected(Rejection::TooShort));
    editor.pointer_up();

    editor.pointer_down(&roster, &id, Grab::Edge(Edge::Start), 0.0);
    assert_eq!(editor.pointer_move(&mut roster, 1.0), MoveOutcome::Rejected(Rejection::TooShort));
    editor.pointer_up();

    assert_eq!(interval(&roster, &id), "09:00-09:20");
}

#[test]
fn short_external_shift_can_grow_back_to_valid() {
    let (mut roster, id) = single("09:00", "09:20");
    let mut editor = TimelineEditor::default();
    editor.pointer_down(&roster, &id, Grab::Edge(Edge::End), 0.0);
    assert!(matches!(editor.pointer_move(&mut roster, 10.0), MoveOutcome::Updated(_)));
    assert_eq!(interval(&roster, &id), "09:00-09:30");
}

#[test]
fn resize_start_stops_at_half_hour_before_end() {
    let (mut roster, id) = single("09:00", "17:00");
    let mut editor = TimelineEditor::default();
    editor.pointer_down(&roster, &id, Grab::Edge(Edge::Start), 0.0);

    for x in (0..=450).step_by(15) {
        assert!(matches!(editor.pointer_move(&mut roster, x as f32), MoveOutcome::Updated(_)));
    }
    assert_eq!(interval(&roster, &id), "16:30-17:00");

    for x in [451.0, 480.0, 500.0] {
        assert_eq!(editor.pointer_move(&mut roster, x), MoveOutcome::Rejected(Rejection::TooShort));
    }
    assert_eq!(interval(&roster, &id), "16:30-17:00");
}

#[test]
fn dragging_past_midnight_stops_at_end_of_day() {
    let (mut roster, id) = single("09:00", "17:00");
    let mut editor = TimelineEditor::default();
    editor.pointer_down(&roster, &id, Grab::Body, 0.0);

    let mut last_accepted = None;
    for x in 0..=600 {
        match editor.pointer_move(&mut roster, x as f32) {
            MoveOutcome::Updated(entry) => {
                assert!(entry.end.minutes() <= 1440);
                last_accepted = Some(x);
            }
            MoveOutcome::Rejected(reason) => assert_eq!(reason, Rejection::EndsAfterMidnight),
            other => panic!("unexpected {other:?}"),
        }
    }
    assert_eq!(last_accepted, Some(420));
    assert_eq!(interval(&roster, &id), "16:00-24:00");
}

#[test]
fn sequential_gestures_compose_without_drift() {
    let (mut roster, id) = single("09:00", "17:00");
    let mut editor = TimelineEditor::default();

    editor.pointer_down(&roster, &id, Grab::Body, 100.0);
    editor.pointer_move(&mut roster, 130.0);
    editor.pointer_up();
    assert_eq!(interval(&roster, &id), "09:30-17:30");

    editor.pointer_down(&roster, &id, Grab::Body, 500.0);
    editor.pointer_move(&mut roster, 520.0);
    editor.pointer_move(&mut roster, 545.0);
    editor.pointer_leave();
    assert_eq!(interval(&roster, &id), "10:15-18:15");

    editor.pointer_down(&roster, &id, Grab::Edge(Edge::End), 0.0);
    editor.pointer_move(&mut roster, -15.0);
    editor.pointer_up();
    assert_eq!(interval(&roster, &id), "10:15-18:00");
}

proptest! {
    #[test]
    fn in_bounds_moves_preserve_duration(
        start in 0i32..1380,
        len in 30i32..600,
        delta in -1440i32..1440,
    ) {
        let end = (start + len).min(1440);
        prop_assume!(end - start >= 30);
        let mut roster = Roster::default();
        let id = roster.add_member(
            "P",
            Role::PartTime,
            TimeOfDay::from_minutes(start).unwrap(),
            TimeOfDay::from_minutes(end).unwrap(),
        );
        let mut editor = TimelineEditor::default();
        editor.pointer_down(&roster, &id, Grab::Body, 0.0);
        let outcome = editor.pointer_move(&mut roster, delta as f32);

        let in_bounds = start + delta >= 0 && end + delta <= 1440;
        match outcome {
            MoveOutcome::Updated(entry) => {
                prop_assert!(in_bounds);
                prop_assert_eq!(entry.duration_minutes(), end - start);
                prop_assert_eq!(entry.start.minutes(), start + delta);
            }
            MoveOutcome::Rejected(_) => {
                prop_assert!(!in_bounds);
                let e = roster.find_by_id(&id).unwrap();
                prop_assert_eq!((e.start.minutes(), e.end.minutes()), (start, end));
            }
            other => prop_assert!(false, "unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn resizing_never_goes_below_floor(
        start in 0i32..1000,
        len in 30i32..400,
        start_edge in any::<bool>(),
        moves in proptest::collection::vec(-900i32..900, 1..20),
    ) {
        let end = start + len;
        let mut roster = Roster::default();
        let id = roster.add_member(
            "P",
            Role::PartTime,
            TimeOfDay::from_minutes(start).unwrap(),
            TimeOfDay::from_minutes(end).unwrap(),
        );
        let edge = if start_edge { Edge::Start } else { Edge::End };
        let mut editor = TimelineEditor::default();
        editor.pointer_down(&roster, &id, Grab::Edge(edge), 0.0);

        for x in moves {
            editor.pointer_move(&mut roster, x as f32);
            let e = roster.find_by_id(&id).unwrap();
            prop_assert!(e.duration_minutes() >= 30);
            prop_assert!(e.start.minutes() >= 0 && e.end.minutes() <= 1440);
            match edge {
                Edge::Start => prop_assert_eq!(e.end.minutes(), end),
                Edge::End => prop_assert_eq!(e.start.minutes(), start),
            }
        }
    }
}
