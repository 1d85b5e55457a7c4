use kurbo::{Point, Rect};

use crate::foundation::core::Millis;
use crate::foundation::error::{VitrineError, VitrineResult};
use crate::pointer::field::{PARALLAX_RATE, Parallax, PointerField};
use crate::reveal::entrance::{Entrance, scroll_indicator_visible};
use crate::reveal::typewriter::{DEFAULT_TICK_INTERVAL, TextReveal};
use crate::schedule::timer::{Firing, Scheduler};
use crate::session::nav::{Navigator, ROUTE_CONTACT, ROUTE_PROJECTS};

/// Entrance delay of the hero section frame itself (the availability badge).
pub const BADGE_DELAY: Millis = Millis(100);
/// Entrance delay of the headline block.
pub const HEADLINE_DELAY: Millis = Millis(300);
/// Entrance delay of the scroll indicator.
pub const SCROLL_INDICATOR_DELAY: Millis = Millis(400);
/// Entrance delay of the role line.
pub const ROLE_LINE_DELAY: Millis = Millis(600);
/// Entrance delay of the intro paragraph.
pub const INTRO_DELAY: Millis = Millis(800);
/// Entrance delay of the call-to-action row.
pub const CTA_DELAY: Millis = Millis(1000);

/// Initial delay before the name typewriter starts.
pub const NAME_REVEAL_DELAY: Millis = Millis(300);
/// Initial delay before the role typewriter starts.
pub const ROLE_REVEAL_DELAY: Millis = Millis(800);

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Display strings for the hero section.
pub struct HeroContent {
    /// Availability badge text.
    pub badge: String,
    /// The name revealed by the headline typewriter.
    pub name: String,
    /// The role line revealed by the second typewriter.
    pub role: String,
    /// Intro paragraph under the headline.
    pub intro: String,
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            badge: "Available for new projects".to_owned(),
            name: "Marten Mrfc".to_owned(),
            role: "Full-Stack & Plugin Developer".to_owned(),
            intro: "Specialized in crafting seamless web experiences and innovative \
                    Minecraft plugins."
                .to_owned(),
        }
    }
}

impl HeroContent {
    /// Replace the badge text.
    pub fn badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = badge.into();
        self
    }

    /// Replace the typed name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Replace the typed role line.
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Replace the intro paragraph.
    pub fn intro(mut self, intro: impl Into<String>) -> Self {
        self.intro = intro.into();
        self
    }
}

#[derive(Clone, Copy, Debug)]
/// Pure render snapshot of the hero section for one frame.
pub struct HeroFrame<'a> {
    /// Availability badge entrance state.
    pub badge_visible: bool,
    /// Headline block entrance state.
    pub headline_visible: bool,
    /// Role line entrance state.
    pub role_line_visible: bool,
    /// Intro paragraph entrance state.
    pub intro_visible: bool,
    /// Call-to-action row entrance state.
    pub cta_visible: bool,
    /// Derived scroll-indicator visibility (re-hides past the threshold).
    pub scroll_indicator_visible: bool,
    /// Revealed prefix of the name typewriter.
    pub name_prefix: &'a str,
    /// Whether the name caret still blinks.
    pub name_caret: bool,
    /// Revealed prefix of the role typewriter.
    pub role_prefix: &'a str,
    /// Whether the role caret still blinks.
    pub role_caret: bool,
    /// Badge text.
    pub badge_text: &'a str,
    /// Intro paragraph text.
    pub intro_text: &'a str,
    /// Pointer-relative background focus.
    pub pointer: PointerField,
    /// Vertical shift of the slow decorative orb.
    pub orb_shift_px: f64,
    /// Vertical shift of the counter-drifting orb.
    pub counter_orb_shift_px: f64,
}

/// The landing section: staged entrances, two typewriters, and the
/// pointer-reactive background.
///
/// The section owns every timer and input registration it creates and
/// releases all of them in [`HeroSection::teardown`]; events routed to a
/// torn-down section are [`VitrineError::Lifecycle`] errors.
#[derive(Debug)]
pub struct HeroSection {
    content: HeroContent,
    badge: Entrance,
    headline: Entrance,
    role_line: Entrance,
    intro: Entrance,
    cta: Entrance,
    scroll_indicator: Entrance,
    name_reveal: TextReveal,
    role_reveal: TextReveal,
    pointer: PointerField,
    parallax: Parallax,
    torn_down: bool,
}

impl HeroSection {
    /// Mount the section: arm every entrance and both typewriters.
    #[tracing::instrument(skip(sched, content))]
    pub fn mount(sched: &mut Scheduler, content: HeroContent) -> VitrineResult<Self> {
        let name_reveal = TextReveal::start(
            sched,
            content.name.clone(),
            NAME_REVEAL_DELAY,
            DEFAULT_TICK_INTERVAL,
        )?;
        let role_reveal = TextReveal::start(
            sched,
            content.role.clone(),
            ROLE_REVEAL_DELAY,
            DEFAULT_TICK_INTERVAL,
        )?;
        Ok(Self {
            badge: Entrance::schedule(sched, BADGE_DELAY),
            headline: Entrance::schedule(sched, HEADLINE_DELAY),
            role_line: Entrance::schedule(sched, ROLE_LINE_DELAY),
            intro: Entrance::schedule(sched, INTRO_DELAY),
            cta: Entrance::schedule(sched, CTA_DELAY),
            scroll_indicator: Entrance::schedule(sched, SCROLL_INDICATOR_DELAY),
            name_reveal,
            role_reveal,
            pointer: PointerField::centered(),
            parallax: Parallax::default(),
            content,
            torn_down: false,
        })
    }

    /// Route a scheduler firing to whichever child owns it.
    pub fn on_timer(&mut self, sched: &mut Scheduler, firing: &Firing) -> VitrineResult<bool> {
        if self.torn_down {
            return Err(VitrineError::lifecycle(
                "timer routed to a torn-down hero section",
            ));
        }
        for entrance in [
            &mut self.badge,
            &mut self.headline,
            &mut self.role_line,
            &mut self.intro,
            &mut self.cta,
            &mut self.scroll_indicator,
        ] {
            if entrance.on_timer(firing)? {
                return Ok(true);
            }
        }
        if self.name_reveal.on_timer(sched, firing)? {
            return Ok(true);
        }
        self.role_reveal.on_timer(sched, firing)
    }

    /// Feed a pointer-move event. Returns whether the field changed.
    pub fn on_pointer_move(&mut self, client: Point, bounds: Rect) -> VitrineResult<bool> {
        if self.torn_down {
            return Err(VitrineError::lifecycle(
                "pointer event delivered to a torn-down hero section",
            ));
        }
        Ok(self.pointer.update(client, bounds))
    }

    /// Feed a scroll event.
    pub fn on_scroll(&mut self, offset: f64) -> VitrineResult<()> {
        if self.torn_down {
            return Err(VitrineError::lifecycle(
                "scroll event delivered to a torn-down hero section",
            ));
        }
        self.parallax.on_scroll(offset);
        Ok(())
    }

    /// Snapshot the section for rendering.
    pub fn frame(&self) -> HeroFrame<'_> {
        HeroFrame {
            badge_visible: self.badge.is_revealed(),
            headline_visible: self.headline.is_revealed(),
            role_line_visible: self.role_line.is_revealed(),
            intro_visible: self.intro.is_revealed(),
            cta_visible: self.cta.is_revealed(),
            scroll_indicator_visible: scroll_indicator_visible(
                &self.scroll_indicator,
                self.parallax.scroll_offset(),
            ),
            name_prefix: self.name_reveal.visible_prefix(),
            name_caret: self.name_reveal.caret_visible(),
            role_prefix: self.role_reveal.visible_prefix(),
            role_caret: self.role_reveal.caret_visible(),
            badge_text: &self.content.badge,
            intro_text: &self.content.intro,
            pointer: self.pointer,
            orb_shift_px: self.parallax.layer_shift(PARALLAX_RATE),
            counter_orb_shift_px: self.parallax.layer_shift(-PARALLAX_RATE),
        }
    }

    /// "View My Work": route to the projects timeline.
    pub fn view_work(&self, nav: &mut dyn Navigator) {
        nav.navigate(ROUTE_PROJECTS);
    }

    /// "Let's Connect": route to the contact page.
    pub fn connect(&self, nav: &mut dyn Navigator) {
        nav.navigate(ROUTE_CONTACT);
    }

    /// Release every timer and registration. Idempotent; the last frame
    /// stays frozen.
    pub fn teardown(&mut self, sched: &mut Scheduler) {
        self.badge.teardown(sched);
        self.headline.teardown(sched);
        self.role_line.teardown(sched);
        self.intro.teardown(sched);
        self.cta.teardown(sched);
        self.scroll_indicator.teardown(sched);
        self.name_reveal.teardown(sched);
        self.role_reveal.teardown(sched);
        self.torn_down = true;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/hero.rs"]
mod tests;
