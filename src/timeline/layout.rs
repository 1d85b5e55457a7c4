use crate::catalog::model::ProjectRecord;
use crate::foundation::core::Millis;

/// Stagger between consecutive entry entrances.
pub const ENTRY_STAGGER: Millis = Millis(200);

/// Vertical space reserved per entry; the connecting guide scales with it.
pub const ENTRY_HEIGHT_PX: f64 = 300.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
/// Which side of the center guide an entry sits on.
pub enum TimelineSide {
    /// Even positions, starting with the first entry.
    Left,
    /// Odd positions.
    Right,
}

#[derive(Clone, Copy, Debug)]
/// One placed timeline entry.
pub struct TimelineEntry<'a> {
    /// The record behind this entry.
    pub record: &'a ProjectRecord,
    /// 0-based position within the filtered view.
    pub index: usize,
    /// Alternating placement relative to the center guide.
    pub side: TimelineSide,
    /// Entrance delay for the staged reveal, measured from (re-)layout.
    pub entrance_delay: Millis,
}

/// Place a filtered view on the timeline.
///
/// Entry `i` alternates `Left`/`Right` starting with `Left` at 0 and enters
/// after `i * 200ms`. Deterministic: the output order is the input order, and
/// re-running layout on the same view yields the same placement. The engine
/// re-derives the whole sequence from scratch on every filter change: a
/// fresh reveal, not an in-place transition.
pub fn layout<'a>(records: &[&'a ProjectRecord]) -> Vec<TimelineEntry<'a>> {
    records
        .iter()
        .enumerate()
        .map(|(index, &record)| TimelineEntry {
            record,
            index,
            side: side_for(index),
            entrance_delay: entrance_delay(index),
        })
        .collect()
}

/// Side for a 0-based entry position.
pub fn side_for(index: usize) -> TimelineSide {
    if index % 2 == 0 {
        TimelineSide::Left
    } else {
        TimelineSide::Right
    }
}

/// Entrance delay for a 0-based entry position.
pub fn entrance_delay(index: usize) -> Millis {
    ENTRY_STAGGER.saturating_mul(index as u64)
}

/// Rendered length of the connecting guide, linear in entry count.
pub fn guide_height_px(entry_count: usize) -> f64 {
    entry_count as f64 * ENTRY_HEIGHT_PX
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/layout.rs"]
mod tests;
