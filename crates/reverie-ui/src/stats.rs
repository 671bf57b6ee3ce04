//! Visitor stat constants.
//!
//! The home page shows three numbers: days the site has been running and
//! fixed thoughts/photos counts. They come from site configuration, not
//! from real analytics.

use chrono::NaiveDate;
use serde::Deserialize;

fn default_start_date() -> NaiveDate {
    // Matches the original site's launch date.
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

/// Stat figures shown by the animated counters.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct VisitorStats {
    /// Date the site went live.
    #[serde(default = "default_start_date")]
    pub start_date: NaiveDate,

    /// Number of posts to display.
    #[serde(default)]
    pub thoughts: u32,

    /// Number of gallery photos to display.
    #[serde(default)]
    pub moments: u32,
}

impl Default for VisitorStats {
    fn default() -> Self {
        Self {
            start_date: default_start_date(),
            thoughts: 0,
            moments: 0,
        }
    }
}

impl VisitorStats {
    /// Whole days since launch, never negative.
    pub fn days_running(&self, today: NaiveDate) -> i64 {
        (today - self.start_date).num_days().max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_days_since_launch() {
        let stats = VisitorStats {
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            thoughts: 25,
            moments: 48,
        };

        let today = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(stats.days_running(today), 64);
    }

    #[test]
    fn launch_in_the_future_reads_as_zero() {
        let stats = VisitorStats {
            start_date: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
            ..Default::default()
        };

        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(stats.days_running(today), 0);
    }
}
