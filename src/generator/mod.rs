pub mod exercise;
pub mod random_words;

use crate::error::TutorResult;

pub trait TextGenerator {
    /// Produce `line_count` lines built only from `letters`.
    fn generate(&mut self, letters: &[char], line_count: usize) -> TutorResult<Vec<String>>;
}
