use crate::foundation::core::Millis;
use crate::foundation::error::{VitrineError, VitrineResult};
use crate::schedule::timer::{Firing, Scheduler, TimerId};

/// Scroll offset past which the scroll indicator visually re-hides.
pub const SCROLL_INDICATOR_MAX_OFFSET: f64 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
/// Entrance choreography state. One-way: `Pending -> Revealed`.
pub enum EntranceState {
    /// Waiting for the entrance delay to elapse.
    Pending,
    /// Revealed. Terminal; never reverts.
    Revealed,
}

/// One-shot entrance choreography for a section or a nested element.
///
/// An entrance arms a single delay timer on construction and flips to
/// `Revealed` permanently when that timer is routed back to it. Tearing the
/// owning section down before the timer fires cancels it; routing a firing to
/// a torn-down entrance is a programming error and returns
/// [`VitrineError::Lifecycle`].
#[derive(Debug)]
pub struct Entrance {
    state: EntranceState,
    timer: Option<TimerId>,
    torn_down: bool,
}

impl Entrance {
    /// Arm the entrance: `Revealed` fires `delay` after now.
    pub fn schedule(sched: &mut Scheduler, delay: Millis) -> Self {
        Self {
            state: EntranceState::Pending,
            timer: Some(sched.schedule_once(delay)),
            torn_down: false,
        }
    }

    /// Route a timer firing. Returns whether it belonged to this entrance.
    pub fn on_timer(&mut self, firing: &Firing) -> VitrineResult<bool> {
        if self.torn_down {
            return Err(VitrineError::lifecycle(
                "timer routed to a torn-down entrance",
            ));
        }
        if self.timer != Some(firing.timer) {
            return Ok(false);
        }
        self.timer = None;
        self.state = EntranceState::Revealed;
        Ok(true)
    }

    /// Current choreography state.
    pub fn state(&self) -> EntranceState {
        self.state
    }

    /// Whether the entrance has fired.
    pub fn is_revealed(&self) -> bool {
        self.state == EntranceState::Revealed
    }

    /// Cancel the pending timer and freeze the entrance. Idempotent.
    pub fn teardown(&mut self, sched: &mut Scheduler) {
        if let Some(timer) = self.timer.take() {
            sched.cancel(timer);
        }
        self.torn_down = true;
    }
}

/// Derived visibility for the hero scroll indicator.
///
/// The indicator re-hides once the viewer scrolls past
/// [`SCROLL_INDICATOR_MAX_OFFSET`]. This is a presentation rule layered on top
/// of the choreography: the underlying [`EntranceState`] stays `Revealed`.
pub fn scroll_indicator_visible(entrance: &Entrance, scroll_offset: f64) -> bool {
    entrance.is_revealed() && scroll_offset <= SCROLL_INDICATOR_MAX_OFFSET
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/entrance.rs"]
mod tests;
