//! Scroll and click effects.
//!
//! The presentational half of the client scripts: the sticky header's
//! background switch, the reading progress bar, one-shot fade-ins, and the
//! button ripple.

use std::collections::HashSet;

/// Scroll offset above which the header switches to its opaque preset.
pub const HEADER_SCROLL_THRESHOLD: f64 = 100.0;

/// Lifetime of a ripple element before it is removed.
pub const RIPPLE_DURATION_MS: u64 = 600;

/// The two header background presets. No hysteresis; the switch happens
/// exactly at the threshold crossing in either direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderPreset {
    /// Card background, light blur (at or near the top).
    Resting,
    /// Secondary background, heavy blur.
    Scrolled,
}

impl HeaderPreset {
    pub fn for_offset(scroll_y: f64) -> Self {
        if scroll_y > HEADER_SCROLL_THRESHOLD {
            HeaderPreset::Scrolled
        } else {
            HeaderPreset::Resting
        }
    }
}

/// Percentage of vertical scroll completed.
///
/// Intentionally unclamped: if the page height changes mid-scroll the value
/// may transiently exceed 100, which only overdraws the bar for a frame.
/// A page that cannot scroll reports 0.
pub fn reading_progress(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let range = scroll_height - client_height;
    if range <= 0.0 {
        return 0.0;
    }
    scroll_top / range * 100.0
}

/// What kind of element a fade-in candidate is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeTarget {
    Card,
    GalleryItem,
    HeroCard,
}

/// One-shot fade-in bookkeeping for viewport intersections.
///
/// Elements inside a gallery section never fade in here (they carry their
/// own CSS animation), and hero cards are skipped only on the page that has
/// a hero section.
#[derive(Debug, Default)]
pub struct ScrollFadeIn {
    /// Whether the current page contains a hero section (home layout).
    pub has_hero_section: bool,
    revealed: HashSet<u64>,
}

impl ScrollFadeIn {
    pub fn new(has_hero_section: bool) -> Self {
        Self {
            has_hero_section,
            revealed: HashSet::new(),
        }
    }

    /// Whether an element should be observed at all.
    pub fn should_observe(&self, target: FadeTarget, in_gallery_section: bool) -> bool {
        if in_gallery_section {
            return false;
        }
        match target {
            FadeTarget::HeroCard => !self.has_hero_section,
            FadeTarget::Card | FadeTarget::GalleryItem => true,
        }
    }

    /// Record an intersection. Returns `true` the first time an element
    /// intersects, meaning: reveal it and stop observing.
    pub fn intersected(&mut self, element: u64) -> bool {
        self.revealed.insert(element)
    }
}

/// Geometry of one ripple, relative to the button's box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    /// Diameter: the larger of the button's width and height.
    pub size: f64,
    pub x: f64,
    pub y: f64,
}

/// Compute ripple geometry for a click at `(click_x, click_y)` within a
/// button of the given size, centering the ripple on the click point.
pub fn ripple(width: f64, height: f64, click_x: f64, click_y: f64) -> Ripple {
    let size = width.max(height);
    Ripple {
        size,
        x: click_x - size / 2.0,
        y: click_y - size / 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn header_switches_exactly_at_threshold() {
        assert_eq!(HeaderPreset::for_offset(99.0), HeaderPreset::Resting);
        assert_eq!(HeaderPreset::for_offset(101.0), HeaderPreset::Scrolled);
        assert_eq!(HeaderPreset::for_offset(50.0), HeaderPreset::Resting);
        // The boundary itself stays resting; only strictly past it switches.
        assert_eq!(HeaderPreset::for_offset(100.0), HeaderPreset::Resting);
    }

    #[test]
    fn progress_is_proportional_and_unclamped() {
        assert_eq!(reading_progress(0.0, 2000.0, 1000.0), 0.0);
        assert_eq!(reading_progress(500.0, 2000.0, 1000.0), 50.0);
        assert_eq!(reading_progress(1000.0, 2000.0, 1000.0), 100.0);
        // Page shrank mid-scroll: transiently over 100 is accepted.
        assert!(reading_progress(1200.0, 2000.0, 1000.0) > 100.0);
    }

    #[test]
    fn unscrollable_page_reports_zero() {
        assert_eq!(reading_progress(0.0, 800.0, 800.0), 0.0);
        assert_eq!(reading_progress(0.0, 600.0, 800.0), 0.0);
    }

    #[test]
    fn gallery_sections_are_never_observed() {
        let fade = ScrollFadeIn::new(false);

        assert!(!fade.should_observe(FadeTarget::GalleryItem, true));
        assert!(!fade.should_observe(FadeTarget::Card, true));
        assert!(fade.should_observe(FadeTarget::GalleryItem, false));
    }

    #[test]
    fn hero_cards_skip_observation_only_on_the_hero_page() {
        let home = ScrollFadeIn::new(true);
        let other = ScrollFadeIn::new(false);

        assert!(!home.should_observe(FadeTarget::HeroCard, false));
        assert!(other.should_observe(FadeTarget::HeroCard, false));
    }

    #[test]
    fn fade_in_is_one_shot_per_element() {
        let mut fade = ScrollFadeIn::new(false);

        assert!(fade.intersected(7));
        assert!(!fade.intersected(7));
        assert!(fade.intersected(8));
    }

    #[test]
    fn ripple_centers_on_the_click() {
        let r = ripple(120.0, 40.0, 60.0, 20.0);

        assert_eq!(r.size, 120.0);
        assert_eq!(r.x, 0.0);
        assert_eq!(r.y, -40.0);
    }
}
