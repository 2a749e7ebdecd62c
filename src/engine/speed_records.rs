use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Best typing speed per exercise plus the daily practice streak.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SpeedRecords {
    #[serde(default)]
    pub wpm_records: BTreeMap<String, u32>,
    #[serde(default)]
    pub streak: u32,
    #[serde(default)]
    pub last_practice_date: Option<NaiveDate>,
}

impl SpeedRecords {
    /// Keep `wpm` only if it beats the stored record for the exercise.
    /// A new record also counts as practice for the streak.
    pub fn save_wpm(&mut self, exercise_id: &str, wpm: u32, today: NaiveDate) -> bool {
        let current = self.wpm(exercise_id).unwrap_or(0);
        if wpm <= current {
            return false;
        }
        self.wpm_records.insert(exercise_id.to_string(), wpm);
        self.update_streak(today);
        true
    }

    pub fn wpm(&self, exercise_id: &str) -> Option<u32> {
        self.wpm_records.get(exercise_id).copied()
    }

    pub fn update_streak(&mut self, today: NaiveDate) {
        match self.last_practice_date {
            Some(last) if last == today => return,
            Some(last) if Some(last) == today.pred_opt() => self.streak += 1,
            _ => self.streak = 1,
        }
        self.last_practice_date = Some(today);
    }

    /// Zero the streak when the last practice is older than yesterday.
    /// Called once after loading.
    pub fn check_streak(&mut self, today: NaiveDate) {
        let Some(last) = self.last_practice_date else {
            return;
        };
        if last != today && Some(last) != today.pred_opt() {
            self.streak = 0;
        }
    }

    pub fn best_wpm(&self) -> u32 {
        self.wpm_records.values().copied().max().unwrap_or(0)
    }

    pub fn average_wpm(&self) -> u32 {
        if self.wpm_records.is_empty() {
            return 0;
        }
        let total: u64 = self.wpm_records.values().map(|&w| u64::from(w)).sum();
        (total as f64 / self.wpm_records.len() as f64).round() as u32
    }

    pub fn completed_count(&self) -> usize {
        self.wpm_records.len()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, d).unwrap()
    }

    #[test]
    fn only_improvements_are_saved() {
        let mut records = SpeedRecords::default();
        assert!(records.save_wpm("review-0", 20, day(1)));
        assert!(!records.save_wpm("review-0", 18, day(1)));
        assert!(!records.save_wpm("review-0", 20, day(1)));
        assert!(records.save_wpm("review-0", 25, day(1)));
        assert_eq!(records.wpm("review-0"), Some(25));
        assert_eq!(records.wpm("review-1"), None);
    }

    #[test]
    fn zero_wpm_is_never_a_record() {
        let mut records = SpeedRecords::default();
        assert!(!records.save_wpm("review-0", 0, day(1)));
        assert_eq!(records.streak, 0);
    }

    #[test]
    fn streak_counts_consecutive_days() {
        let mut records = SpeedRecords::default();
        records.update_streak(day(1));
        assert_eq!(records.streak, 1);
        records.update_streak(day(1));
        assert_eq!(records.streak, 1);
        records.update_streak(day(2));
        records.update_streak(day(3));
        assert_eq!(records.streak, 3);
        records.update_streak(day(5));
        assert_eq!(records.streak, 1);
        assert_eq!(records.last_practice_date, Some(day(5)));
    }

    #[test]
    fn check_streak_breaks_after_missed_day() {
        let mut records = SpeedRecords {
            streak: 4,
            last_practice_date: Some(day(10)),
            ..Default::default()
        };
        records.check_streak(day(11));
        assert_eq!(records.streak, 4);
        records.check_streak(day(12));
        assert_eq!(records.streak, 0);
    }

    #[test]
    fn aggregates() {
        let mut records = SpeedRecords::default();
        assert_eq!(records.best_wpm(), 0);
        assert_eq!(records.average_wpm(), 0);
        records.save_wpm("review-0", 20, day(1));
        records.save_wpm("review-1", 31, day(1));
        assert_eq!(records.best_wpm(), 31);
        assert_eq!(records.average_wpm(), 26);
        assert_eq!(records.completed_count(), 2);
        records.reset();
        assert_eq!(records, SpeedRecords::default());
    }
}
