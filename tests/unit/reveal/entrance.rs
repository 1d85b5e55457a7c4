use super::*;

#[test]
fn reveals_exactly_once_and_not_before_its_delay() {
    let mut sched = Scheduler::new();
    let mut entrance = Entrance::schedule(&mut sched, Millis(100));
    assert_eq!(entrance.state(), EntranceState::Pending);

    for firing in sched.advance_to(Millis(99)) {
        entrance.on_timer(&firing).unwrap();
    }
    assert!(!entrance.is_revealed());

    let fired = sched.advance_to(Millis(100));
    assert_eq!(fired.len(), 1);
    assert!(entrance.on_timer(&fired[0]).unwrap());
    assert!(entrance.is_revealed());

    // A foreign firing afterwards is not consumed and changes nothing.
    let other = sched.schedule_once(Millis(10));
    let fired = sched.advance_to(Millis(200));
    assert_eq!(fired[0].timer, other);
    assert!(!entrance.on_timer(&fired[0]).unwrap());
    assert!(entrance.is_revealed());
}

#[test]
fn teardown_cancels_the_pending_timer() {
    let mut sched = Scheduler::new();
    let mut entrance = Entrance::schedule(&mut sched, Millis(100));
    assert_eq!(sched.pending(), 1);

    entrance.teardown(&mut sched);
    assert_eq!(sched.pending(), 0);
    assert!(sched.advance_to(Millis(500)).is_empty());
    assert!(!entrance.is_revealed());
}

#[test]
fn routing_after_teardown_is_a_lifecycle_error() {
    let mut sched = Scheduler::new();
    let mut entrance = Entrance::schedule(&mut sched, Millis(10));
    let decoy = sched.schedule_once(Millis(10));

    entrance.teardown(&mut sched);
    let fired = sched.advance_to(Millis(10));
    assert_eq!(fired.len(), 1);
    assert_eq!(fired[0].timer, decoy);
    let err = entrance.on_timer(&fired[0]).unwrap_err();
    assert!(matches!(err, VitrineError::Lifecycle(_)));
}

#[test]
fn scroll_indicator_rehides_without_mutating_state() {
    let mut sched = Scheduler::new();
    let mut entrance = Entrance::schedule(&mut sched, Millis(0));
    for firing in sched.advance_to(Millis(10)) {
        entrance.on_timer(&firing).unwrap();
    }
    assert!(entrance.is_revealed());

    assert!(scroll_indicator_visible(&entrance, 0.0));
    assert!(scroll_indicator_visible(&entrance, SCROLL_INDICATOR_MAX_OFFSET));
    assert!(!scroll_indicator_visible(&entrance, SCROLL_INDICATOR_MAX_OFFSET + 1.0));

    // The derived rule never touches the choreography state.
    assert_eq!(entrance.state(), EntranceState::Revealed);
    assert!(scroll_indicator_visible(&entrance, 0.0));
}

#[test]
fn pending_entrance_is_hidden_regardless_of_scroll() {
    let mut sched = Scheduler::new();
    let entrance = Entrance::schedule(&mut sched, Millis(100));
    assert!(!scroll_indicator_visible(&entrance, 0.0));
}
