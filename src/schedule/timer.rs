use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::collections::HashMap;

use crate::foundation::core::Millis;
use crate::foundation::error::{VitrineError, VitrineResult};

/// Stable identifier for a scheduled timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(pub u64);

/// A timer that came due during an advance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Firing {
    /// The timer that fired.
    pub timer: TimerId,
    /// The deadline the timer fired at (not the advance target).
    pub due: Millis,
}

#[derive(Clone, Copy, Debug)]
enum Repeat {
    Once,
    Every(Millis),
}

#[derive(Clone, Copy, Debug)]
struct Entry {
    due: Millis,
    repeat: Repeat,
}

/// Deterministic, manually advanced timer queue.
///
/// The engine is single-threaded and cooperative: the host owns real time,
/// drains due timers with [`Scheduler::pop_due`] whenever its clock moves,
/// and routes each [`Firing`] to the component that owns the timer before
/// popping the next one.
///
/// Determinism rule: due timers fire in non-decreasing deadline order; timers
/// sharing a deadline fire in creation order.
#[derive(Debug, Default)]
pub struct Scheduler {
    now: Millis,
    next_id: u64,
    // Min-heap over (deadline, timer id). Cancelled and re-armed timers leave
    // stale heap entries behind; they are skipped when popped.
    queue: BinaryHeap<Reverse<(u64, u64)>>,
    entries: HashMap<u64, Entry>,
}

impl Scheduler {
    /// Create an empty scheduler at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current time on the scheduler's axis.
    pub fn now(&self) -> Millis {
        self.now
    }

    /// Number of armed timers.
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    /// Whether `id` is armed (scheduled and not yet fired or cancelled).
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.entries.contains_key(&id.0)
    }

    /// Arm a one-shot timer due `delay` from now.
    pub fn schedule_once(&mut self, delay: Millis) -> TimerId {
        self.arm(delay, Repeat::Once)
    }

    /// Arm a repeating timer: first firing after `initial_delay`, then every
    /// `interval`.
    pub fn schedule_repeating(
        &mut self,
        initial_delay: Millis,
        interval: Millis,
    ) -> VitrineResult<TimerId> {
        if interval == Millis::ZERO {
            return Err(VitrineError::scheduling(
                "repeating timer interval must be > 0",
            ));
        }
        Ok(self.arm(initial_delay, Repeat::Every(interval)))
    }

    /// Disarm a timer. Returns `false` if it already fired or was cancelled.
    ///
    /// A cancelled timer never fires, including within an advance window that
    /// has already begun.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        self.entries.remove(&id.0).is_some()
    }

    /// Pop the next timer due at or before `target`, advancing now to its
    /// deadline.
    ///
    /// Returns `None` once nothing is due inside the window, leaving now at
    /// `target`. Because now sits on the popped deadline while the host
    /// handles the firing, timers armed by the handler are measured from the
    /// moment the firing logically happened; the cadence a chain of timers
    /// produces is independent of how far the host advances at once.
    ///
    /// Time is monotonic: a target earlier than [`Scheduler::now`] yields
    /// `None` and moves nothing.
    pub fn pop_due(&mut self, target: Millis) -> Option<Firing> {
        if target < self.now {
            return None;
        }

        while let Some(&Reverse((due_ms, id))) = self.queue.peek() {
            if due_ms > target.0 {
                break;
            }
            self.queue.pop();

            // Skip stale heap entries left behind by cancel or re-arm.
            let Some(entry) = self.entries.get(&id) else {
                continue;
            };
            if entry.due.0 != due_ms {
                continue;
            }

            match entry.repeat {
                Repeat::Once => {
                    self.entries.remove(&id);
                }
                Repeat::Every(interval) => {
                    let next = Millis(due_ms).saturating_add(interval);
                    self.entries.insert(
                        id,
                        Entry {
                            due: next,
                            repeat: Repeat::Every(interval),
                        },
                    );
                    self.queue.push(Reverse((next.0, id)));
                }
            }

            self.now = Millis(due_ms).max(self.now);
            return Some(Firing {
                timer: TimerId(id),
                due: Millis(due_ms),
            });
        }

        self.now = target;
        None
    }

    /// Advance time by `delta`, collecting every firing in order.
    pub fn advance(&mut self, delta: Millis) -> Vec<Firing> {
        self.advance_to(self.now.saturating_add(delta))
    }

    /// Advance time to `target`, collecting every firing in order.
    ///
    /// Convenience for flows that only observe firings. When a handler arms
    /// new timers in response to a firing, drain with [`Scheduler::pop_due`]
    /// instead so the new deadlines are measured from the firing, not from
    /// `target`.
    pub fn advance_to(&mut self, target: Millis) -> Vec<Firing> {
        let mut fired = Vec::new();
        while let Some(firing) = self.pop_due(target) {
            fired.push(firing);
        }
        fired
    }

    fn arm(&mut self, delay: Millis, repeat: Repeat) -> TimerId {
        let id = self.next_id;
        self.next_id += 1;
        let due = self.now.saturating_add(delay);
        self.entries.insert(id, Entry { due, repeat });
        self.queue.push(Reverse((due.0, id)));
        TimerId(id)
    }
}
