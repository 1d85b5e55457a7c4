use crate::foundation::core::Millis;
use crate::foundation::error::{VitrineError, VitrineResult};
use crate::schedule::timer::{Firing, Scheduler, TimerId};

/// Default cadence between prefix emissions.
pub const DEFAULT_TICK_INTERVAL: Millis = Millis(60);

/// Pause between the final prefix and `complete` (the caret keeps blinking
/// through the settle window, then stops).
pub const SETTLE_DELAY: Millis = Millis(500);

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
/// Snapshot of a text reveal.
pub struct RevealState {
    /// Number of characters currently revealed, in `[0, char_count]`.
    /// Monotonically non-decreasing until `complete`.
    pub revealed_chars: usize,
    /// Whether the reveal has settled. Once set, the state is frozen.
    pub complete: bool,
}

/// Character-by-character text reveal driven by cancellable timers.
///
/// After an initial delay the reveal emits successive prefixes of the source
/// text (lengths 0, 1, ..., N in characters) at a fixed cadence. The tick
/// after the full string is out disarms the cadence timer and arms a one-shot
/// settle timer ([`SETTLE_DELAY`]); its firing marks the reveal `complete`,
/// which tells the host to stop rendering the blinking caret.
///
/// Every instance owns its timers independently; concurrent reveals do not
/// interfere. Teardown cancels all pending timers and freezes the state.
#[derive(Debug)]
pub struct TextReveal {
    text: String,
    char_count: usize,
    next_prefix: usize,
    revealed_chars: usize,
    complete: bool,
    tick_interval: Millis,
    tick: Option<TimerId>,
    settle: Option<TimerId>,
    torn_down: bool,
}

impl TextReveal {
    /// Start a reveal: first prefix one cadence after `initial_delay`.
    pub fn start(
        sched: &mut Scheduler,
        text: impl Into<String>,
        initial_delay: Millis,
        tick_interval: Millis,
    ) -> VitrineResult<Self> {
        let text = text.into();
        let char_count = text.chars().count();
        let tick =
            sched.schedule_repeating(initial_delay.saturating_add(tick_interval), tick_interval)?;
        Ok(Self {
            text,
            char_count,
            next_prefix: 0,
            revealed_chars: 0,
            complete: false,
            tick_interval,
            tick: Some(tick),
            settle: None,
            torn_down: false,
        })
    }

    /// Replace the source text and restart the sequence from scratch.
    ///
    /// All pending timers of the prior run are cancelled first, so no stale
    /// tick can advance the new run.
    pub fn restart(
        &mut self,
        sched: &mut Scheduler,
        text: impl Into<String>,
        initial_delay: Millis,
    ) -> VitrineResult<()> {
        if self.torn_down {
            return Err(VitrineError::lifecycle("restart after teardown"));
        }
        self.disarm(sched);
        *self = Self::start(sched, text, initial_delay, self.tick_interval)?;
        Ok(())
    }

    /// Route a timer firing. Returns whether it belonged to this reveal.
    pub fn on_timer(&mut self, sched: &mut Scheduler, firing: &Firing) -> VitrineResult<bool> {
        if self.torn_down {
            return Err(VitrineError::lifecycle(
                "timer routed to a torn-down text reveal",
            ));
        }

        if self.tick == Some(firing.timer) {
            if self.next_prefix <= self.char_count {
                self.revealed_chars = self.next_prefix;
                self.next_prefix += 1;
            } else {
                // Full string is out: stop the cadence, arm the settle pause.
                sched.cancel(firing.timer);
                self.tick = None;
                self.settle = Some(sched.schedule_once(SETTLE_DELAY));
            }
            return Ok(true);
        }

        if self.settle == Some(firing.timer) {
            self.settle = None;
            self.complete = true;
            return Ok(true);
        }

        Ok(false)
    }

    /// The full source text.
    pub fn source_text(&self) -> &str {
        &self.text
    }

    /// The currently revealed prefix (on a character boundary).
    pub fn visible_prefix(&self) -> &str {
        match self.text.char_indices().nth(self.revealed_chars) {
            Some((byte, _)) => &self.text[..byte],
            None => &self.text,
        }
    }

    /// Snapshot of the reveal state.
    pub fn snapshot(&self) -> RevealState {
        RevealState {
            revealed_chars: self.revealed_chars,
            complete: self.complete,
        }
    }

    /// Whether the reveal has settled.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Whether the host should render the blinking caret.
    pub fn caret_visible(&self) -> bool {
        !self.complete
    }

    /// Cancel all pending timers and freeze the state. Idempotent.
    pub fn teardown(&mut self, sched: &mut Scheduler) {
        self.disarm(sched);
        self.torn_down = true;
    }

    fn disarm(&mut self, sched: &mut Scheduler) {
        if let Some(tick) = self.tick.take() {
            sched.cancel(tick);
        }
        if let Some(settle) = self.settle.take() {
            sched.cancel(settle);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/typewriter.rs"]
mod tests;
