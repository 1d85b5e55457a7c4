use super::*;

/// Advance to `target`, routing every firing, and record a snapshot after
/// each firing the reveal consumed.
fn pump(sched: &mut Scheduler, reveal: &mut TextReveal, target: Millis) -> Vec<RevealState> {
    let mut observed = Vec::new();
    while let Some(firing) = sched.pop_due(target) {
        if reveal.on_timer(sched, &firing).unwrap() {
            observed.push(reveal.snapshot());
        }
    }
    observed
}

#[test]
fn emits_every_prefix_exactly_once_before_completing() {
    let mut sched = Scheduler::new();
    let mut reveal =
        TextReveal::start(&mut sched, "hello", Millis::ZERO, DEFAULT_TICK_INTERVAL).unwrap();

    let observed = pump(&mut sched, &mut reveal, Millis(5_000));

    // Prefix lengths 0..=5, the transition tick, then the settle firing.
    let prefixes: Vec<usize> = observed.iter().map(|s| s.revealed_chars).collect();
    assert_eq!(prefixes, vec![0, 1, 2, 3, 4, 5, 5, 5]);

    // `complete` is false for every emission but the last.
    let completes: Vec<bool> = observed.iter().map(|s| s.complete).collect();
    assert_eq!(completes.iter().filter(|c| **c).count(), 1);
    assert!(observed.last().unwrap().complete);

    assert!(reveal.is_complete());
    assert!(!reveal.caret_visible());
    assert_eq!(reveal.visible_prefix(), "hello");
    assert_eq!(sched.pending(), 0);
}

#[test]
fn revealed_length_is_monotonic() {
    let mut sched = Scheduler::new();
    let mut reveal =
        TextReveal::start(&mut sched, "monotone", Millis(120), DEFAULT_TICK_INTERVAL).unwrap();

    let observed = pump(&mut sched, &mut reveal, Millis(5_000));
    let mut last = 0usize;
    for state in &observed {
        assert!(state.revealed_chars >= last);
        last = state.revealed_chars;
    }
}

#[test]
fn empty_text_settles_after_one_zero_length_tick() {
    let mut sched = Scheduler::new();
    let mut reveal =
        TextReveal::start(&mut sched, "", Millis::ZERO, DEFAULT_TICK_INTERVAL).unwrap();

    let observed = pump(&mut sched, &mut reveal, Millis(2_000));
    let prefixes: Vec<usize> = observed.iter().map(|s| s.revealed_chars).collect();
    assert_eq!(prefixes, vec![0, 0, 0]);
    assert!(reveal.is_complete());
    assert_eq!(reveal.visible_prefix(), "");
}

#[test]
fn prefixes_stay_on_character_boundaries() {
    let mut sched = Scheduler::new();
    let mut reveal =
        TextReveal::start(&mut sched, "héllo", Millis::ZERO, DEFAULT_TICK_INTERVAL).unwrap();

    // Two ticks: prefix lengths 0 then 1; the second char is multibyte.
    for firing in sched.advance_to(Millis(DEFAULT_TICK_INTERVAL.0 * 2)) {
        reveal.on_timer(&mut sched, &firing).unwrap();
    }
    assert_eq!(reveal.visible_prefix(), "h");
    for firing in sched.advance_to(Millis(DEFAULT_TICK_INTERVAL.0 * 3)) {
        reveal.on_timer(&mut sched, &firing).unwrap();
    }
    assert_eq!(reveal.visible_prefix(), "hé");
}

#[test]
fn name_reveal_timing_walkthrough() {
    // "Marten Mrfc" is 11 characters: 12 prefix ticks, one transition tick,
    // then the settle pause.
    let text = "Marten Mrfc";
    let initial_delay = Millis(300);
    let mut sched = Scheduler::new();
    let mut reveal =
        TextReveal::start(&mut sched, text, initial_delay, DEFAULT_TICK_INTERVAL).unwrap();

    let full_at = Millis(300 + 12 * 60); // prefix 11 lands here
    let observed = pump(&mut sched, &mut reveal, full_at);
    assert_eq!(observed.len(), 12);
    assert_eq!(reveal.visible_prefix(), text);
    assert!(!reveal.is_complete());
    assert!(reveal.caret_visible());

    // The transition tick arms the settle pause; completion waits for it.
    let transition_at = full_at.saturating_add(DEFAULT_TICK_INTERVAL);
    pump(&mut sched, &mut reveal, transition_at);
    assert!(!reveal.is_complete());

    let before_settle = transition_at.saturating_add(Millis(SETTLE_DELAY.0 - 1));
    pump(&mut sched, &mut reveal, before_settle);
    assert!(!reveal.is_complete());

    pump(&mut sched, &mut reveal, transition_at.saturating_add(SETTLE_DELAY));
    assert!(reveal.is_complete());
}

#[test]
fn restart_cancels_the_prior_run() {
    let mut sched = Scheduler::new();
    let mut reveal =
        TextReveal::start(&mut sched, "first", Millis::ZERO, DEFAULT_TICK_INTERVAL).unwrap();
    pump(&mut sched, &mut reveal, Millis(180));
    assert!(reveal.snapshot().revealed_chars > 0);

    reveal
        .restart(&mut sched, "second", Millis::ZERO)
        .unwrap();
    assert_eq!(reveal.snapshot().revealed_chars, 0);
    assert_eq!(reveal.source_text(), "second");

    // No stale tick from the first run survives the restart.
    let observed = pump(&mut sched, &mut reveal, Millis(10_000));
    assert_eq!(observed.iter().filter(|s| s.complete).count(), 1);
    assert_eq!(reveal.visible_prefix(), "second");
    assert_eq!(sched.pending(), 0);
}

#[test]
fn teardown_freezes_the_state_mid_reveal() {
    let mut sched = Scheduler::new();
    let mut reveal =
        TextReveal::start(&mut sched, "frozen in place", Millis::ZERO, DEFAULT_TICK_INTERVAL)
            .unwrap();
    pump(&mut sched, &mut reveal, Millis(240));
    let at_teardown = reveal.snapshot();
    assert!(!at_teardown.complete);

    reveal.teardown(&mut sched);
    assert_eq!(sched.pending(), 0);
    assert!(sched.advance_to(Millis(60_000)).is_empty());
    assert_eq!(reveal.snapshot(), at_teardown);

    // Routing anything afterwards is a loud programming error.
    let decoy = sched.schedule_once(Millis(10));
    let fired = sched.advance_to(Millis(60_010));
    assert_eq!(fired[0].timer, decoy);
    let err = reveal.on_timer(&mut sched, &fired[0]).unwrap_err();
    assert!(matches!(err, VitrineError::Lifecycle(_)));
    assert_eq!(reveal.snapshot(), at_teardown);
}

#[test]
fn concurrent_reveals_do_not_interfere() {
    let mut sched = Scheduler::new();
    let mut fast =
        TextReveal::start(&mut sched, "ab", Millis::ZERO, Millis(10)).unwrap();
    let mut slow =
        TextReveal::start(&mut sched, "xy", Millis::ZERO, Millis(100)).unwrap();

    while let Some(firing) = sched.pop_due(Millis(45)) {
        let consumed_fast = fast.on_timer(&mut sched, &firing).unwrap();
        let consumed_slow = slow.on_timer(&mut sched, &firing).unwrap();
        assert!(consumed_fast != consumed_slow || !consumed_fast);
    }
    assert_eq!(fast.visible_prefix(), "ab");
    assert_eq!(slow.visible_prefix(), "");
}

#[test]
fn zero_tick_interval_is_rejected() {
    let mut sched = Scheduler::new();
    assert!(TextReveal::start(&mut sched, "x", Millis::ZERO, Millis::ZERO).is_err());
}
