//! The run's calendar window.
//!
//! Every engine receives a DateWindow explicitly at construction — no
//! generator carries global date state, so two runs with different
//! windows can coexist in one process.

use crate::rng::GeneratorRng;
use chrono::{Duration, NaiveDate};
use serde::Serialize;

/// Calendar boundaries for one generation run.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DateWindow {
    /// Earliest allowed created_date.
    pub start: NaiveDate,
    /// Dataset horizon and the synthetic "today". No close_date or
    /// activity_date may fall after this.
    pub end: NaiveDate,
    /// Open deals must be created on or after this date so an active
    /// pipeline snapshot never contains stale opportunities.
    pub active_window_start: NaiveDate,
    /// Open deals are forced to show activity on or after this date.
    pub recent_cutoff: NaiveDate,
}

impl DateWindow {
    /// Window ending at `end` covering `years` (1, 2, or 3) of history.
    /// The active window is the final six months; the recent cutoff is
    /// the final two weeks.
    pub fn years_back(end: NaiveDate, years: u32) -> Self {
        let start = end - Duration::days(365 * years.clamp(1, 3) as i64);
        Self {
            start,
            end,
            active_window_start: end - Duration::days(184),
            recent_cutoff: end - Duration::days(14),
        }
    }

    /// The window the original dataset ships with: 2023-01-01 through
    /// 2026-02-01, active window from 2025-08-01.
    pub fn default_three_year() -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
            active_window_start: NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
            recent_cutoff: NaiveDate::from_ymd_opt(2026, 1, 18).unwrap(),
        }
    }

    /// A date uniform in [start, end] inclusive. Collapsed ranges return
    /// `start`.
    pub fn random_date(rng: &mut GeneratorRng, start: NaiveDate, end: NaiveDate) -> NaiveDate {
        if start >= end {
            return start;
        }
        let span = (end - start).num_days();
        start + Duration::days(rng.int_in(0, span))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{RngBank, StageSlot};

    #[test]
    fn random_date_inclusive_bounds() {
        let mut rng = RngBank::new(3).for_stage(StageSlot::Deal);
        let lo = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let hi = NaiveDate::from_ymd_opt(2024, 1, 4).unwrap();
        let mut seen = [false; 4];
        for _ in 0..200 {
            let d = DateWindow::random_date(&mut rng, lo, hi);
            assert!(d >= lo && d <= hi);
            seen[(d - lo).num_days() as usize] = true;
        }
        assert!(seen.iter().all(|s| *s), "all days in range should occur");
    }

    #[test]
    fn collapsed_range_returns_start() {
        let mut rng = RngBank::new(3).for_stage(StageSlot::Deal);
        let d = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(DateWindow::random_date(&mut rng, d, d), d);
    }

    #[test]
    fn years_back_layout() {
        let end = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        let w = DateWindow::years_back(end, 2);
        assert_eq!((w.end - w.start).num_days(), 730);
        assert_eq!((w.end - w.active_window_start).num_days(), 184);
        assert_eq!((w.end - w.recent_cutoff).num_days(), 14);
    }
}
