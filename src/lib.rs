//! Vitrine is an interactive reveal and timeline presentation engine.
//!
//! Vitrine drives a presentational site (a hero landing section and a
//! filterable project timeline) from pure local UI state: staged entrance
//! choreography, a pointer-relative background field, a character-by-character
//! text reveal, and an alternating timeline layout over a filtered catalog.
//!
//! # Pipeline overview
//!
//! 1. **Load**: `JSON -> Catalog` (validated, immutable project records)
//! 2. **Mount**: a section arms its entrance and reveal timers on a
//!    [`Scheduler`]
//! 3. **Advance**: the host moves time and routes [`Firing`]s and input
//!    events (pointer move, scroll, filter clicks) back to the section
//! 4. **Frame**: `Section -> Frame` (a pure snapshot the host renders)
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: the scheduler fires in deadline order with
//!   creation-order tie-breaks; filtering and layout are pure projections.
//! - **Single-threaded, cooperative**: no timer callback runs behind the
//!   host's back; the host owns real time and advances it explicitly.
//! - **Scoped lifetimes**: every timer and input registration a section
//!   creates is released by its `teardown`; late routing is a loud
//!   [`VitrineError::Lifecycle`] error, never a silent no-op.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod catalog;
mod foundation;
mod pointer;
mod reveal;
mod schedule;
mod session;
mod timeline;

pub use catalog::filter::{FilterSelection, category_count, count, filter};
pub use catalog::model::{Catalog, Category, ProjectRecord, Status};
pub use foundation::core::{Millis, Point, Rect};
pub use foundation::error::{VitrineError, VitrineResult};
pub use pointer::field::{PARALLAX_RATE, Parallax, PointerField};
pub use reveal::entrance::{
    Entrance, EntranceState, SCROLL_INDICATOR_MAX_OFFSET, scroll_indicator_visible,
};
pub use reveal::typewriter::{DEFAULT_TICK_INTERVAL, RevealState, SETTLE_DELAY, TextReveal};
pub use schedule::timer::{Firing, Scheduler, TimerId};
pub use session::hero::{
    BADGE_DELAY, CTA_DELAY, HEADLINE_DELAY, HeroContent, HeroFrame, HeroSection, INTRO_DELAY,
    NAME_REVEAL_DELAY, ROLE_LINE_DELAY, ROLE_REVEAL_DELAY, SCROLL_INDICATOR_DELAY,
};
pub use session::nav::{Navigator, ROUTE_CONTACT, ROUTE_PROJECTS};
pub use session::projects::{
    EntryFrame, FILTER_BAR_DELAY, FOOTER_DELAY, HEADER_DELAY, ProjectsFrame, ProjectsSection,
};
pub use timeline::layout::{
    ENTRY_HEIGHT_PX, ENTRY_STAGGER, TimelineEntry, TimelineSide, entrance_delay, guide_height_px,
    layout, side_for,
};
