//! Simplified SM-2 scheduling.
//!
//! Intervals run 1 day, 3 days, then grow by the item's ease factor on every
//! correct answer. A miss drops the item back to a one day interval and
//! makes future growth slower.

use std::borrow::Borrow;
use std::cmp::Ordering;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_EASE_FACTOR: f64 = 2.5;
pub const MIN_EASE_FACTOR: f64 = 1.3;
pub const MAX_EASE_FACTOR: f64 = 3.0;
const EASE_ADJUSTMENT: f64 = 0.15;
const MASTERED_INTERVAL: u32 = 21;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScheduleState {
    pub item_id: String,
    pub ease_factor: f64,
    /// Days until the next review; 0 until the first answer.
    pub interval: u32,
    pub due_date: NaiveDate,
    pub review_count: u32,
    pub correct_count: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    New,
    Learning,
    Reviewing,
    Mastered,
}

impl ReviewStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ReviewStatus::New => "new",
            ReviewStatus::Learning => "learning",
            ReviewStatus::Reviewing => "reviewing",
            ReviewStatus::Mastered => "mastered",
        }
    }
}

fn add_days(date: NaiveDate, days: u32) -> NaiveDate {
    date.checked_add_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MAX)
}

pub fn create_initial(item_id: &str, today: NaiveDate) -> ScheduleState {
    ScheduleState {
        item_id: item_id.to_string(),
        ease_factor: DEFAULT_EASE_FACTOR,
        interval: 0,
        due_date: today,
        review_count: 0,
        correct_count: 0,
    }
}

/// Next schedule after answering `state` on `today`.
pub fn record_outcome(state: &ScheduleState, correct: bool, today: NaiveDate) -> ScheduleState {
    if correct {
        let interval = match state.interval {
            0 => 1,
            1 => 3,
            n => (f64::from(n) * state.ease_factor).round() as u32,
        };
        ScheduleState {
            item_id: state.item_id.clone(),
            ease_factor: (state.ease_factor + EASE_ADJUSTMENT).min(MAX_EASE_FACTOR),
            interval,
            due_date: add_days(today, interval),
            review_count: state.review_count.saturating_add(1),
            correct_count: state.correct_count.saturating_add(1),
        }
    } else {
        ScheduleState {
            item_id: state.item_id.clone(),
            ease_factor: (state.ease_factor - EASE_ADJUSTMENT * 2.0).max(MIN_EASE_FACTOR),
            interval: 1,
            due_date: add_days(today, 1),
            review_count: state.review_count.saturating_add(1),
            correct_count: state.correct_count,
        }
    }
}

impl ScheduleState {
    pub fn is_due(&self, today: NaiveDate) -> bool {
        self.due_date <= today
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.due_date < today
    }

    /// Whether the state could have come out of `record_outcome`: ease
    /// inside its bounds and no more correct answers than reviews.
    pub fn is_consistent(&self) -> bool {
        (MIN_EASE_FACTOR..=MAX_EASE_FACTOR).contains(&self.ease_factor)
            && self.correct_count <= self.review_count
    }

    pub fn is_mastered(&self) -> bool {
        self.interval >= MASTERED_INTERVAL
    }

    pub fn status(&self) -> ReviewStatus {
        if self.review_count == 0 {
            ReviewStatus::New
        } else if self.is_mastered() {
            ReviewStatus::Mastered
        } else if self.interval <= 1 {
            ReviewStatus::Learning
        } else {
            ReviewStatus::Reviewing
        }
    }

    pub fn accuracy_percent(&self) -> u8 {
        if self.review_count == 0 {
            return 0;
        }
        (f64::from(self.correct_count) / f64::from(self.review_count) * 100.0).round() as u8
    }
}

/// Overdue first, then earliest due date, then shortest interval.
pub fn priority_cmp(a: &ScheduleState, b: &ScheduleState, today: NaiveDate) -> Ordering {
    b.is_overdue(today)
        .cmp(&a.is_overdue(today))
        .then_with(|| a.due_date.cmp(&b.due_date))
        .then_with(|| a.interval.cmp(&b.interval))
}

/// Stable sort into review order.
pub fn sort_by_priority<T: Borrow<ScheduleState>>(states: &mut [T], today: NaiveDate) {
    states.sort_by(|a, b| priority_cmp(a.borrow(), b.borrow(), today));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    fn days_from_today(offset: i64) -> NaiveDate {
        today() + chrono::Duration::days(offset)
    }

    fn state_with(interval: u32, ease_factor: f64) -> ScheduleState {
        ScheduleState {
            interval,
            ease_factor,
            review_count: 4,
            correct_count: 3,
            ..create_initial("v001", today())
        }
    }

    #[test]
    fn initial_state_is_new_and_due() {
        let s = create_initial("v001", today());
        assert_eq!(s.ease_factor, DEFAULT_EASE_FACTOR);
        assert_eq!(s.interval, 0);
        assert!(s.is_due(today()));
        assert_eq!(s.status(), ReviewStatus::New);
        assert_eq!(s.accuracy_percent(), 0);
    }

    #[test]
    fn three_correct_answers_grow_interval() {
        let mut s = create_initial("v001", today());
        let mut intervals = vec![s.interval];
        for _ in 0..3 {
            s = record_outcome(&s, true, today());
            intervals.push(s.interval);
        }
        assert_eq!(intervals, vec![0, 1, 3, 8]);
        assert!((s.ease_factor - 2.95).abs() < 1e-9);
        assert_eq!(s.due_date, days_from_today(8));
        assert_eq!(s.review_count, 3);
        assert_eq!(s.correct_count, 3);
        assert_eq!(s.status(), ReviewStatus::Reviewing);
    }

    #[test]
    fn miss_resets_interval_and_lowers_ease() {
        let s = record_outcome(&state_with(10, 2.0), false, today());
        assert_eq!(s.interval, 1);
        assert!((s.ease_factor - 1.7).abs() < 1e-9);
        assert_eq!(s.due_date, days_from_today(1));
        assert_eq!(s.review_count, 5);
        assert_eq!(s.correct_count, 3);
        assert_eq!(s.status(), ReviewStatus::Learning);
    }

    #[test]
    fn ease_stays_in_bounds() {
        let mut s = create_initial("v001", today());
        for _ in 0..20 {
            s = record_outcome(&s, true, today());
            assert!(s.ease_factor <= MAX_EASE_FACTOR);
        }
        for _ in 0..20 {
            s = record_outcome(&s, false, today());
            assert!(s.ease_factor >= MIN_EASE_FACTOR);
            assert_eq!(s.interval, 1);
        }
        assert!(s.correct_count <= s.review_count);
    }

    #[test]
    fn mixed_outcomes_keep_invariants() {
        let pattern = [true, false, true, true, false, false, true, true, true];
        let mut s = create_initial("v002", today());
        for &correct in pattern.iter().cycle().take(60) {
            s = record_outcome(&s, correct, today());
            assert!(s.interval >= 1);
            assert!((MIN_EASE_FACTOR..=MAX_EASE_FACTOR).contains(&s.ease_factor));
            assert!(s.correct_count <= s.review_count);
        }
    }

    #[test]
    fn long_interval_is_mastered() {
        let s = state_with(21, 2.5);
        assert!(s.is_mastered());
        assert_eq!(s.status(), ReviewStatus::Mastered);
        assert!(!state_with(20, 2.5).is_mastered());
    }

    #[test]
    fn accuracy_rounds() {
        let s = state_with(3, 2.5);
        assert_eq!(s.accuracy_percent(), 75);
        let s = ScheduleState {
            review_count: 3,
            correct_count: 2,
            ..s
        };
        assert_eq!(s.accuracy_percent(), 67);
    }

    #[test]
    fn most_overdue_sorts_first() {
        let mut states: Vec<ScheduleState> = [-2, 0, -1]
            .iter()
            .map(|&offset| ScheduleState {
                due_date: days_from_today(offset),
                ..state_with(3, 2.5)
            })
            .collect();
        sort_by_priority(&mut states, today());
        let order: Vec<NaiveDate> = states.iter().map(|s| s.due_date).collect();
        assert_eq!(
            order,
            vec![days_from_today(-2), days_from_today(-1), days_from_today(0)]
        );
    }

    #[test]
    fn equal_due_dates_prefer_shorter_interval() {
        let a = ScheduleState {
            item_id: "a".into(),
            ..state_with(8, 2.5)
        };
        let b = ScheduleState {
            item_id: "b".into(),
            ..state_with(3, 2.5)
        };
        let mut refs = vec![&a, &b];
        sort_by_priority(&mut refs, today());
        assert_eq!(refs[0].item_id, "b");
    }

    #[test]
    fn state_serializes_with_plain_dates() {
        let s = create_initial("v010", today());
        let json = serde_json::to_string(&s).unwrap();
        assert!(json.contains("\"due_date\":\"2025-03-10\""));
        let back: ScheduleState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn consistency_rejects_out_of_range_ease_and_counts() {
        assert!(state_with(3, MIN_EASE_FACTOR).is_consistent());
        assert!(state_with(3, MAX_EASE_FACTOR).is_consistent());
        assert!(!state_with(3, 0.5).is_consistent());
        assert!(!state_with(3, f64::NAN).is_consistent());
        let inflated = ScheduleState {
            correct_count: 5,
            ..state_with(3, 2.5)
        };
        assert!(!inflated.is_consistent());
    }

    #[test]
    fn counters_saturate() {
        let s = ScheduleState {
            review_count: u32::MAX,
            correct_count: u32::MAX,
            ..state_with(3, 2.5)
        };
        let next = record_outcome(&s, true, today());
        assert_eq!(next.review_count, u32::MAX);
        assert_eq!(next.correct_count, u32::MAX);
        assert!(next.is_consistent());
    }
}
