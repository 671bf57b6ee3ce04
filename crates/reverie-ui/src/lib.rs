//! Headless state for the site's client-side behaviors.
//!
//! Each module here is the state machine behind one of the scripts the
//! generated site ships: theme switching, the animated visitor counters,
//! scroll-triggered fade-ins, the reading progress bar, the sticky header
//! background, and the button ripple. The shipped JavaScript mirrors these
//! rules; keeping them here makes the behavior testable without a browser.

pub mod counter;
pub mod effects;
pub mod stats;
pub mod theme;

pub use counter::CounterAnimation;
pub use effects::{ripple, FadeTarget, HeaderPreset, Ripple, ScrollFadeIn, RIPPLE_DURATION_MS};
pub use stats::VisitorStats;
pub use theme::{MemoryStore, Theme, ThemeManager, ThemeStore};
