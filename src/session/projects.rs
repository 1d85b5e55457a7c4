use kurbo::{Point, Rect};

use crate::catalog::filter::{FilterSelection, category_count, count, filter};
use crate::catalog::model::{Catalog, Category, ProjectRecord};
use crate::foundation::core::Millis;
use crate::foundation::error::{VitrineError, VitrineResult};
use crate::pointer::field::{PARALLAX_RATE, Parallax, PointerField};
use crate::reveal::entrance::Entrance;
use crate::schedule::timer::{Firing, Scheduler};
use crate::session::nav::{Navigator, ROUTE_CONTACT};
use crate::timeline::layout::{TimelineSide, entrance_delay, guide_height_px, side_for};

/// Entrance delay of the page header.
pub const HEADER_DELAY: Millis = Millis(300);
/// Entrance delay of the filter bar.
pub const FILTER_BAR_DELAY: Millis = Millis(500);
/// Entrance delay of the footer call-to-action.
pub const FOOTER_DELAY: Millis = Millis(800);

#[derive(Debug)]
struct EntrySlot {
    side: TimelineSide,
    entrance_delay: Millis,
    entrance: Entrance,
}

#[derive(Clone, Copy, Debug)]
/// One timeline entry in a [`ProjectsFrame`].
pub struct EntryFrame<'a> {
    /// The record behind this entry.
    pub record: &'a ProjectRecord,
    /// 0-based position within the filtered view.
    pub index: usize,
    /// Alternating placement relative to the center guide.
    pub side: TimelineSide,
    /// Whether the entry's entrance has fired.
    pub visible: bool,
    /// The staged delay this entry entered (or will enter) with.
    pub entrance_delay: Millis,
}

#[derive(Clone, Debug)]
/// Pure render snapshot of the projects section for one frame.
pub struct ProjectsFrame<'a> {
    /// Page header entrance state.
    pub header_visible: bool,
    /// Filter bar entrance state.
    pub filter_bar_visible: bool,
    /// Footer call-to-action entrance state.
    pub footer_visible: bool,
    /// Active filter selection.
    pub selection: FilterSelection,
    /// Total catalog size (the "All" button badge), independent of selection.
    pub total_count: usize,
    /// Per-category record counts, in [`Category::ALL`] order.
    pub category_counts: [usize; 4],
    /// Placed entries of the filtered view, in order.
    pub entries: Vec<EntryFrame<'a>>,
    /// Rendered length of the center guide.
    pub guide_height_px: f64,
    /// Pointer-relative background focus.
    pub pointer: PointerField,
    /// Vertical shift of the slow decorative orb.
    pub orb_shift_px: f64,
    /// Vertical shift of the counter-drifting orb.
    pub counter_orb_shift_px: f64,
}

/// The filterable project timeline section.
///
/// Owns the catalog, the active filter selection, and one entrance per placed
/// entry. A filter change throws the previous placement away and re-runs the
/// whole entry choreography from `Pending`: filtering is a fresh reveal, not
/// an in-place transition.
#[derive(Debug)]
pub struct ProjectsSection {
    catalog: Catalog,
    selection: FilterSelection,
    header: Entrance,
    filter_bar: Entrance,
    footer: Entrance,
    entries: Vec<EntrySlot>,
    pointer: PointerField,
    parallax: Parallax,
    torn_down: bool,
}

impl ProjectsSection {
    /// Mount the section over a catalog with the default (`All`) selection.
    #[tracing::instrument(skip(sched, catalog))]
    pub fn mount(sched: &mut Scheduler, catalog: Catalog) -> Self {
        let mut section = Self {
            catalog,
            selection: FilterSelection::All,
            header: Entrance::schedule(sched, HEADER_DELAY),
            filter_bar: Entrance::schedule(sched, FILTER_BAR_DELAY),
            footer: Entrance::schedule(sched, FOOTER_DELAY),
            entries: Vec::new(),
            pointer: PointerField::centered(),
            parallax: Parallax::default(),
            torn_down: false,
        };
        section.arm_entries(sched);
        section
    }

    /// Active filter selection.
    pub fn selection(&self) -> FilterSelection {
        self.selection
    }

    /// The catalog this section renders.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Switch the filter selection.
    ///
    /// On an actual change the section re-derives the filtered view and its
    /// layout from scratch: every previous entry timer is cancelled and every
    /// entry of the new view re-enters from `Pending` with its staged delay.
    /// Selecting the already-active filter is a no-op.
    #[tracing::instrument(skip(sched, self))]
    pub fn set_filter(
        &mut self,
        sched: &mut Scheduler,
        selection: FilterSelection,
    ) -> VitrineResult<()> {
        if self.torn_down {
            return Err(VitrineError::lifecycle(
                "filter change on a torn-down projects section",
            ));
        }
        if selection == self.selection {
            return Ok(());
        }
        self.selection = selection;
        for slot in &mut self.entries {
            slot.entrance.teardown(sched);
        }
        self.arm_entries(sched);
        Ok(())
    }

    /// Route a scheduler firing to whichever child owns it.
    pub fn on_timer(&mut self, firing: &Firing) -> VitrineResult<bool> {
        if self.torn_down {
            return Err(VitrineError::lifecycle(
                "timer routed to a torn-down projects section",
            ));
        }
        for entrance in [&mut self.header, &mut self.filter_bar, &mut self.footer] {
            if entrance.on_timer(firing)? {
                return Ok(true);
            }
        }
        for slot in &mut self.entries {
            if slot.entrance.on_timer(firing)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Feed a pointer-move event. Returns whether the field changed.
    pub fn on_pointer_move(&mut self, client: Point, bounds: Rect) -> VitrineResult<bool> {
        if self.torn_down {
            return Err(VitrineError::lifecycle(
                "pointer event delivered to a torn-down projects section",
            ));
        }
        Ok(self.pointer.update(client, bounds))
    }

    /// Feed a scroll event.
    pub fn on_scroll(&mut self, offset: f64) -> VitrineResult<()> {
        if self.torn_down {
            return Err(VitrineError::lifecycle(
                "scroll event delivered to a torn-down projects section",
            ));
        }
        self.parallax.on_scroll(offset);
        Ok(())
    }

    /// Snapshot the section for rendering.
    pub fn frame(&self) -> ProjectsFrame<'_> {
        let filtered = filter(&self.catalog, self.selection);
        debug_assert_eq!(filtered.len(), self.entries.len());
        let entries = filtered
            .iter()
            .zip(&self.entries)
            .enumerate()
            .map(|(index, (&record, slot))| EntryFrame {
                record,
                index,
                side: slot.side,
                visible: slot.entrance.is_revealed(),
                entrance_delay: slot.entrance_delay,
            })
            .collect::<Vec<_>>();

        let mut category_counts = [0usize; 4];
        for (slot, category) in category_counts.iter_mut().zip(Category::ALL) {
            *slot = category_count(&self.catalog, category);
        }

        ProjectsFrame {
            header_visible: self.header.is_revealed(),
            filter_bar_visible: self.filter_bar.is_revealed(),
            footer_visible: self.footer.is_revealed(),
            selection: self.selection,
            total_count: count(&self.catalog),
            category_counts,
            guide_height_px: guide_height_px(entries.len()),
            entries,
            pointer: self.pointer,
            orb_shift_px: self.parallax.layer_shift(PARALLAX_RATE),
            counter_orb_shift_px: self.parallax.layer_shift(-PARALLAX_RATE),
        }
    }

    /// Open the source-repository link of a filtered entry, if it has one.
    ///
    /// Returns whether a link was opened. Out-of-bounds indices are
    /// validation errors.
    pub fn open_code(&self, entry_index: usize, nav: &mut dyn Navigator) -> VitrineResult<bool> {
        let record = self.filtered_record(entry_index)?;
        match &record.github_url {
            Some(url) => {
                nav.open_external(url);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Open the live-deployment link of a filtered entry, if it has one.
    pub fn open_live(&self, entry_index: usize, nav: &mut dyn Navigator) -> VitrineResult<bool> {
        let record = self.filtered_record(entry_index)?;
        match &record.live_url {
            Some(url) => {
                nav.open_external(url);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// "Get in Touch": route to the contact page.
    pub fn contact(&self, nav: &mut dyn Navigator) {
        nav.navigate(ROUTE_CONTACT);
    }

    /// Release every timer and registration. Idempotent; the last frame
    /// stays frozen.
    pub fn teardown(&mut self, sched: &mut Scheduler) {
        self.header.teardown(sched);
        self.filter_bar.teardown(sched);
        self.footer.teardown(sched);
        for slot in &mut self.entries {
            slot.entrance.teardown(sched);
        }
        self.torn_down = true;
    }

    fn arm_entries(&mut self, sched: &mut Scheduler) {
        let len = filter(&self.catalog, self.selection).len();
        self.entries = (0..len)
            .map(|index| EntrySlot {
                side: side_for(index),
                entrance_delay: entrance_delay(index),
                entrance: Entrance::schedule(sched, entrance_delay(index)),
            })
            .collect();
    }

    fn filtered_record(&self, entry_index: usize) -> VitrineResult<&ProjectRecord> {
        if self.torn_down {
            return Err(VitrineError::lifecycle(
                "link activation on a torn-down projects section",
            ));
        }
        filter(&self.catalog, self.selection)
            .get(entry_index)
            .copied()
            .ok_or_else(|| {
                VitrineError::validation(format!("timeline entry index {entry_index} out of range"))
            })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/projects.rs"]
mod tests;
