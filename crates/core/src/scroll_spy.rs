//! Scroll-spy: which page section the viewport is currently in.
//!
//! The hit test is a pure function over section bounds. Reading those bounds
//! is left to a [`SectionGeometry`] implementation so the logic can be tested
//! without a layout engine.

use crate::config::ScrollConfig;
use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionId {
    #[default]
    Hero,
    HowItWorks,
    WhyChooseUs,
    Testimonials,
    Contact,
}

impl SectionId {
    /// Page order, top to bottom
    pub const ALL: [Self; 5] = [
        Self::Hero,
        Self::HowItWorks,
        Self::WhyChooseUs,
        Self::Testimonials,
        Self::Contact,
    ];

    /// In-page anchor (`id` attribute)
    #[must_use]
    pub const fn anchor(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::HowItWorks => "how-it-works",
            Self::WhyChooseUs => "why-choose-us",
            Self::Testimonials => "testimonials",
            Self::Contact => "contact",
        }
    }

    /// Navigation label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::HowItWorks => "How It Works",
            Self::WhyChooseUs => "Why Choose Us",
            Self::Testimonials => "Testimonials",
            Self::Contact => "Contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

impl FromStr for SectionId {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        Self::ALL
            .into_iter()
            .find(|section| section.anchor() == s)
            .ok_or_else(|| CoreError::unknown_section(s))
    }
}

/// Vertical extent of a section in document coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub id: SectionId,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    #[must_use]
    pub fn contains(&self, offset: f64) -> bool {
        offset >= self.top && offset < self.top + self.height
    }
}

/// Source of section positions, e.g. the live DOM
pub trait SectionGeometry {
    fn bounds(&self, id: SectionId) -> CoreResult<SectionBounds>;
}

/// First section, in the order given, whose bounds contain the header-adjusted offset
#[must_use]
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<SectionId> {
    let position = scroll_y + ScrollConfig::HEADER_OFFSET_PX;
    sections
        .iter()
        .find(|bounds| bounds.contains(position))
        .map(|bounds| bounds.id)
}

#[must_use]
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > ScrollConfig::SCROLLED_THRESHOLD_PX
}

/// Header state derived from scroll position
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollSpy {
    pub active: SectionId,
    pub is_scrolled: bool,
}

impl ScrollSpy {
    /// Recompute from a scroll offset.
    ///
    /// Sections missing from `geometry` are skipped. When no section contains
    /// the offset the previous active section is kept.
    #[must_use]
    pub fn update(self, scroll_y: f64, geometry: &impl SectionGeometry) -> Self {
        let sections: Vec<SectionBounds> = SectionId::ALL
            .into_iter()
            .filter_map(|id| match geometry.bounds(id) {
                Ok(bounds) => Some(bounds),
                Err(err) => {
                    tracing::trace!(%err, "skipping section");
                    None
                }
            })
            .collect();

        Self {
            active: active_section(scroll_y, &sections).unwrap_or(self.active),
            is_scrolled: is_scrolled(scroll_y),
        }
    }

    /// Mark a section active directly, e.g. after a nav click
    #[must_use]
    pub const fn select(self, active: SectionId) -> Self {
        Self {
            active,
            is_scrolled: self.is_scrolled,
        }
    }
}

/// What the scroll handler should do with an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrottleDecision {
    /// Read the scroll offset now
    Handle,
    /// First event inside the interval: read the offset once `after_ms` from now
    /// and report it with [`Throttle::flush`]
    Defer { after_ms: u32 },
    /// A trailing read is already scheduled
    Skip,
}

/// Rate-limits scroll handling to one reading per `interval_ms`.
///
/// Events inside the interval collapse into a single trailing reading so the
/// position the user stops at is always applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Throttle {
    interval_ms: f64,
    last: Option<f64>,
    trailing: bool,
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new(ScrollConfig::THROTTLE_MS)
    }
}

impl Throttle {
    #[must_use]
    pub const fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last: None,
            trailing: false,
        }
    }

    /// Classify an event at `now_ms`
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn accept(&mut self, now_ms: f64) -> ThrottleDecision {
        match self.last {
            Some(last) if now_ms - last < self.interval_ms => {
                if self.trailing {
                    ThrottleDecision::Skip
                } else {
                    self.trailing = true;
                    let remaining = (self.interval_ms - (now_ms - last)).max(0.0);
                    ThrottleDecision::Defer {
                        after_ms: remaining.ceil() as u32,
                    }
                }
            }
            _ => {
                self.last = Some(now_ms);
                self.trailing = false;
                ThrottleDecision::Handle
            }
        }
    }

    /// Record the deferred reading taken at `now_ms`
    pub fn flush(&mut self, now_ms: f64) {
        self.last = Some(now_ms);
        self.trailing = false;
    }

    #[must_use]
    pub const fn has_trailing(&self) -> bool {
        self.trailing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct FixedLayout(HashMap<SectionId, SectionBounds>);

    impl FixedLayout {
        /// Sections stacked back to back, each `height` tall, starting at `start`
        fn stacked(start: f64, height: f64) -> Self {
            let mut map = HashMap::new();
            for (i, id) in SectionId::ALL.into_iter().enumerate() {
                let top = start + height * i as f64;
                map.insert(id, SectionBounds { id, top, height });
            }
            Self(map)
        }
    }

    impl SectionGeometry for FixedLayout {
        fn bounds(&self, id: SectionId) -> CoreResult<SectionBounds> {
            self.0
                .get(&id)
                .copied()
                .ok_or_else(|| CoreError::section_not_found(id.anchor()))
        }
    }

    fn bounds(id: SectionId, top: f64, height: f64) -> SectionBounds {
        SectionBounds { id, top, height }
    }

    #[test]
    fn test_top_of_page_is_hero() {
        let layout = FixedLayout::stacked(0.0, 800.0);
        let spy = ScrollSpy::default().update(0.0, &layout);
        assert_eq!(spy.active, SectionId::Hero);
        assert!(!spy.is_scrolled);
    }

    #[test]
    fn test_header_offset_is_applied() {
        let sections = [
            bounds(SectionId::Hero, 0.0, 800.0),
            bounds(SectionId::HowItWorks, 800.0, 800.0),
        ];
        // 700 + 100 lands exactly on the second section's top edge
        assert_eq!(active_section(699.0, &sections), Some(SectionId::Hero));
        assert_eq!(active_section(700.0, &sections), Some(SectionId::HowItWorks));
    }

    #[test]
    fn test_first_matching_section_wins_on_overlap() {
        let sections = [
            bounds(SectionId::Testimonials, 0.0, 1000.0),
            bounds(SectionId::Contact, 500.0, 1000.0),
        ];
        assert_eq!(active_section(600.0, &sections), Some(SectionId::Testimonials));
    }

    #[test]
    fn test_no_match_keeps_previous_section() {
        let layout = FixedLayout::stacked(0.0, 100.0);
        let spy = ScrollSpy::default().update(350.0, &layout);
        assert_eq!(spy.active, SectionId::Contact);

        let spy = spy.update(10_000.0, &layout);
        assert_eq!(spy.active, SectionId::Contact);
        assert!(spy.is_scrolled);
    }

    #[test]
    fn test_missing_sections_are_skipped() {
        let mut layout = FixedLayout::stacked(0.0, 500.0);
        layout.0.remove(&SectionId::Hero);
        let spy = ScrollSpy::default()
            .select(SectionId::Contact)
            .update(0.0, &layout);
        assert_eq!(spy.active, SectionId::Contact);
    }

    #[test]
    fn test_scrolled_threshold() {
        assert!(!is_scrolled(10.0));
        assert!(is_scrolled(10.5));
    }

    #[test]
    fn test_anchor_round_trip_and_unknown() {
        assert_eq!("why-choose-us".parse::<SectionId>().unwrap(), SectionId::WhyChooseUs);
        assert!(matches!(
            "pricing".parse::<SectionId>(),
            Err(CoreError::UnknownSection { .. })
        ));
    }

    #[test]
    fn test_throttle_collapses_events_inside_interval() {
        let mut throttle = Throttle::new(50.0);
        assert_eq!(throttle.accept(0.0), ThrottleDecision::Handle);
        assert_eq!(throttle.accept(20.0), ThrottleDecision::Defer { after_ms: 30 });
        assert_eq!(throttle.accept(49.9), ThrottleDecision::Skip);
        assert!(throttle.has_trailing());

        throttle.flush(50.0);
        assert!(!throttle.has_trailing());
        assert_eq!(throttle.accept(60.0), ThrottleDecision::Defer { after_ms: 40 });
        assert_eq!(throttle.accept(120.0), ThrottleDecision::Handle);
        assert!(!throttle.has_trailing());
    }

    #[test]
    fn test_fast_scroll_then_rest_applies_final_position() {
        let layout = FixedLayout::stacked(0.0, 800.0);
        let mut throttle = Throttle::default();
        let mut spy = ScrollSpy::default();
        let mut trailing_at = None;

        for (now, scroll_y) in [(0.0, 2500.0), (16.0, 1200.0), (32.0, 400.0), (48.0, 0.0)] {
            match throttle.accept(now) {
                ThrottleDecision::Handle => spy = spy.update(scroll_y, &layout),
                ThrottleDecision::Defer { after_ms } => {
                    trailing_at = Some(now + f64::from(after_ms));
                }
                ThrottleDecision::Skip => {}
            }
        }
        assert_eq!(spy.active, SectionId::Testimonials);

        // The page came to rest at the top before the trailing read fired
        let due = trailing_at.expect("a trailing read is scheduled");
        throttle.flush(due);
        spy = spy.update(0.0, &layout);

        assert_eq!(spy.active, SectionId::Hero);
        assert!(!spy.is_scrolled);
    }
}
