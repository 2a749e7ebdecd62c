use std::time::Instant;

use crate::session::input::{self, LetterState};

/// One typing exercise: an immutable target and the prefix typed so far.
/// `typed` never grows past `target`.
pub struct DrillState {
    pub target: Vec<char>,
    pub typed: Vec<char>,
    pub started_at: Option<Instant>,
    pub finished_at: Option<Instant>,
}

impl DrillState {
    pub fn new(text: &str) -> Self {
        Self {
            target: text.chars().collect(),
            typed: Vec::new(),
            started_at: None,
            finished_at: None,
        }
    }

    pub fn target_text(&self) -> String {
        self.target.iter().collect()
    }

    pub fn typed_text(&self) -> String {
        self.typed.iter().collect()
    }

    pub fn cursor(&self) -> usize {
        self.typed.len()
    }

    /// The char the learner should type next.
    pub fn expected(&self) -> Option<char> {
        input::current_index(&self.target, &self.typed).map(|i| self.target[i])
    }

    pub fn is_complete(&self) -> bool {
        input::is_complete(&self.target, &self.typed)
    }

    pub fn letter_states(&self) -> Vec<LetterState> {
        input::classify(&self.target, &self.typed)
    }

    pub fn correct_count(&self) -> usize {
        input::correct_count(&self.target, &self.typed)
    }

    pub fn incorrect_count(&self) -> usize {
        self.typed.len() - self.correct_count()
    }

    pub fn accuracy(&self) -> u8 {
        input::accuracy(&self.target, &self.typed)
    }

    pub fn reset(&mut self) {
        self.typed.clear();
        self.started_at = None;
        self.finished_at = None;
    }

    pub fn elapsed_secs(&self) -> f64 {
        match (self.started_at, self.finished_at) {
            (Some(start), Some(end)) => end.duration_since(start).as_secs_f64(),
            (Some(start), None) => start.elapsed().as_secs_f64(),
            _ => 0.0,
        }
    }

    pub fn wpm(&self) -> f64 {
        let elapsed = self.elapsed_secs();
        if elapsed < 0.1 {
            return 0.0;
        }
        let chars = self.correct_count() as f64;
        (chars / 5.0) / (elapsed / 60.0)
    }

    pub fn cpm(&self) -> f64 {
        let elapsed = self.elapsed_secs();
        if elapsed < 0.1 {
            return 0.0;
        }
        self.correct_count() as f64 / (elapsed / 60.0)
    }

    pub fn progress(&self) -> f64 {
        if self.target.is_empty() {
            return 0.0;
        }
        self.cursor() as f64 / self.target.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::session::input::CharStatus;

    #[test]
    fn test_new_drill() {
        let drill = DrillState::new("שלום");
        assert_eq!(drill.target.len(), 4);
        assert_eq!(drill.cursor(), 0);
        assert_eq!(drill.expected(), Some('ש'));
        assert!(!drill.is_complete());
        assert_eq!(drill.target_text(), "שלום");
        assert_eq!(drill.progress(), 0.0);
    }

    #[test]
    fn test_accuracy_starts_at_100() {
        let drill = DrillState::new("test");
        assert_eq!(drill.accuracy(), 100);
    }

    #[test]
    fn test_empty_drill_progress() {
        let drill = DrillState::new("");
        assert!(drill.is_complete());
        assert_eq!(drill.progress(), 0.0);
        assert_eq!(drill.expected(), None);
    }

    #[test]
    fn test_wrong_char_counts_against_accuracy() {
        let mut drill = DrillState::new("abcd");
        for ch in "axc".chars() {
            input::process_char(&mut drill, ch);
        }
        assert_eq!(drill.correct_count(), 2);
        assert_eq!(drill.incorrect_count(), 1);
        assert_eq!(drill.accuracy(), 67);
        assert_eq!(drill.letter_states()[3].status, CharStatus::Current);
    }

    #[test]
    fn test_backspace_restores_accuracy() {
        let mut drill = DrillState::new("ab");
        input::process_char(&mut drill, 'x');
        input::process_backspace(&mut drill);
        input::process_char(&mut drill, 'a');
        assert_eq!(drill.accuracy(), 100);
    }

    #[test]
    fn test_wpm_from_fixed_timing() {
        let mut drill = DrillState::new("כחכחכחכחכח");
        for ch in "כחכחכחכחכח".chars() {
            input::process_char(&mut drill, ch);
        }
        let start = Instant::now();
        drill.started_at = Some(start);
        drill.finished_at = Some(start + Duration::from_secs(6));
        // 10 correct chars = 2 words in a tenth of a minute
        assert!((drill.wpm() - 20.0).abs() < 1e-9);
        assert!((drill.cpm() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_reset_clears_progress() {
        let mut drill = DrillState::new("ab");
        input::process_char(&mut drill, 'a');
        drill.reset();
        assert_eq!(drill.cursor(), 0);
        assert!(drill.started_at.is_none());
    }
}
