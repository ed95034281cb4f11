//! Daily Visit Streak
//!
//! Flat record stored under a fixed local-storage key and rewritten wholesale
//! on every page load.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{decode_record, DomainResult};

/// Local storage key for the streak record
pub const STREAK_STORAGE_KEY: &str = "streakData";

/// Streak length shown as a full "mastery" ring
pub const MASTERY_DAYS: u32 = 30;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StreakData {
    pub total_visits: u32,
    pub current_daily_streak: u32,
    pub best_streak: u32,
    pub last_visit_date: Option<NaiveDate>,
}

/// How a visit related to the previous one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitKind {
    First,
    SameDay,
    Consecutive,
    /// One or more days were missed (or the clock went backwards)
    Reset,
}

impl StreakData {
    /// Decode a stored record; missing or malformed data yields the default
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            None => Self::default(),
            Some(json) => decode_record(json).unwrap_or_else(|e| {
                log::warn!("discarding malformed streak record: {}", e);
                Self::default()
            }),
        }
    }

    pub fn to_json(&self) -> DomainResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Record a visit on `today`
    pub fn record_visit(&mut self, today: NaiveDate) -> VisitKind {
        let kind = match self.last_visit_date {
            None => VisitKind::First,
            Some(last) => match (today - last).num_days() {
                0 => VisitKind::SameDay,
                1 => VisitKind::Consecutive,
                _ => VisitKind::Reset,
            },
        };

        self.total_visits += 1;
        match kind {
            VisitKind::SameDay => {}
            VisitKind::Consecutive => self.current_daily_streak += 1,
            VisitKind::First | VisitKind::Reset => self.current_daily_streak = 1,
        }
        self.best_streak = self.best_streak.max(self.current_daily_streak);
        self.last_visit_date = Some(today);

        log::info!(
            "visit recorded ({:?}): streak {}, best {}, total {}",
            kind,
            self.current_daily_streak,
            self.best_streak,
            self.total_visits
        );
        kind
    }

    /// Percentage toward the mastery streak, capped at 100
    pub fn mastery_progress(&self) -> f64 {
        (self.current_daily_streak as f64 / MASTERY_DAYS as f64 * 100.0).min(100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, d).unwrap()
    }

    #[test]
    fn test_visit_flow() {
        let mut streak = StreakData::default();

        assert_eq!(streak.record_visit(day(1)), VisitKind::First);
        assert_eq!((streak.total_visits, streak.current_daily_streak, streak.best_streak), (1, 1, 1));

        assert_eq!(streak.record_visit(day(1)), VisitKind::SameDay);
        assert_eq!((streak.total_visits, streak.current_daily_streak, streak.best_streak), (2, 1, 1));

        assert_eq!(streak.record_visit(day(2)), VisitKind::Consecutive);
        assert_eq!((streak.total_visits, streak.current_daily_streak, streak.best_streak), (3, 2, 2));

        assert_eq!(streak.record_visit(day(5)), VisitKind::Reset);
        assert_eq!((streak.total_visits, streak.current_daily_streak, streak.best_streak), (4, 1, 2));
        assert_eq!(streak.last_visit_date, Some(day(5)));
    }

    #[test]
    fn test_clock_going_backwards_resets() {
        let mut streak = StreakData::default();
        streak.record_visit(day(10));
        streak.record_visit(day(11));
        assert_eq!(streak.record_visit(day(11) - TimeDelta::days(3)), VisitKind::Reset);
        assert_eq!(streak.best_streak, 2);
    }

    #[test]
    fn test_stored_format_and_fallback() {
        let mut streak = StreakData::default();
        streak.record_visit(day(3));
        let json = streak.to_json().unwrap();
        assert!(json.contains("\"currentDailyStreak\":1"));
        assert!(json.contains("\"lastVisitDate\":\"2025-10-03\""));
        assert_eq!(StreakData::from_stored(Some(&json)), streak);

        assert_eq!(StreakData::from_stored(None), StreakData::default());
        assert_eq!(StreakData::from_stored(Some("{not json")), StreakData::default());
        assert_eq!(StreakData::from_stored(Some("{\"totalVisits\":\"x\"}")), StreakData::default());
        // positional arrays are not records
        assert_eq!(StreakData::from_stored(Some("[5,4,9]")), StreakData::default());
    }

    #[test]
    fn test_mastery_progress_caps() {
        let mut streak = StreakData { current_daily_streak: 15, ..Default::default() };
        assert!((streak.mastery_progress() - 50.0).abs() < 1e-9);
        streak.current_daily_streak = 45;
        assert_eq!(streak.mastery_progress(), 100.0);
    }
}
