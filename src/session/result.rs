use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::session::drill::DrillState;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DrillResult {
    pub exercise_id: String,
    pub wpm: f64,
    pub cpm: f64,
    pub accuracy: u8,
    pub correct: usize,
    pub incorrect: usize,
    pub total_chars: usize,
    pub elapsed_secs: f64,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub partial: bool,
}

impl DrillResult {
    pub fn from_drill(drill: &DrillState, exercise_id: &str) -> Self {
        Self {
            exercise_id: exercise_id.to_string(),
            wpm: drill.wpm(),
            cpm: drill.cpm(),
            accuracy: drill.accuracy(),
            correct: drill.correct_count(),
            incorrect: drill.incorrect_count(),
            total_chars: drill.target.len(),
            elapsed_secs: drill.elapsed_secs(),
            timestamp: Utc::now(),
            partial: !drill.is_complete(),
        }
    }

    /// WPM as stored in speed records.
    pub fn rounded_wpm(&self) -> u32 {
        self.wpm.round().max(0.0) as u32
    }
}
