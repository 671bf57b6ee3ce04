//! Animated numeric counters.
//!
//! The stat counters on the home page tick from a start value to an end
//! value in fixed ±1 steps on a repeating timer and stop exactly on the
//! end value.

/// Plan for one counter animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterAnimation {
    pub start: i64,
    pub end: i64,
    pub duration_ms: u64,
}

impl CounterAnimation {
    pub fn new(start: i64, end: i64, duration_ms: u64) -> Self {
        Self {
            start,
            end,
            duration_ms,
        }
    }

    /// Milliseconds between ticks, or `None` when there is nothing to
    /// animate. A zero range previously divided by zero; it now means the
    /// final value is shown immediately.
    pub fn step_interval_ms(&self) -> Option<u64> {
        let range = self.start.abs_diff(self.end);
        if range == 0 {
            return None;
        }
        Some(self.duration_ms / range)
    }

    /// The value displayed after each tick, ending exactly on `end`.
    pub fn steps(&self) -> impl Iterator<Item = i64> {
        let (start, end) = (self.start, self.end);
        let delta: i64 = if end >= start { 1 } else { -1 };
        let count = start.abs_diff(end);
        (1..=count).map(move |i| start + delta * i as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn counts_up_by_one_and_stops_on_end() {
        let anim = CounterAnimation::new(0, 10, 1000);

        let values: Vec<i64> = anim.steps().collect();

        assert_eq!(values, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
        assert_eq!(values.last(), Some(&10));
        assert!(values.iter().all(|v| *v <= 10));
        assert_eq!(anim.step_interval_ms(), Some(100));
    }

    #[test]
    fn counts_down_when_end_is_below_start() {
        let anim = CounterAnimation::new(3, 0, 300);

        assert_eq!(anim.steps().collect::<Vec<_>>(), vec![2, 1, 0]);
    }

    #[test]
    fn zero_range_skips_the_animation() {
        let anim = CounterAnimation::new(5, 5, 2000);

        assert_eq!(anim.step_interval_ms(), None);
        assert_eq!(anim.steps().count(), 0);
    }
}
