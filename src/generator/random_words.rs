use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::config::Config;
use crate::error::{TutorError, TutorResult};
use crate::generator::TextGenerator;

const MIN_WORD_LENGTH: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineShape {
    pub line_length: usize,
    pub average_word_length: usize,
}

impl Default for LineShape {
    fn default() -> Self {
        Self {
            line_length: 25,
            average_word_length: 5,
        }
    }
}

impl LineShape {
    pub fn from_config(config: &Config) -> Self {
        Self {
            line_length: config.line_length,
            average_word_length: config.average_word_length.max(1),
        }
    }

    pub fn words_per_line(&self) -> usize {
        self.line_length.div_ceil(self.average_word_length)
    }
}

/// Nonsense words of random length over a restricted letter set.
pub struct RandomWordGenerator {
    shape: LineShape,
    rng: SmallRng,
}

impl RandomWordGenerator {
    pub fn new(shape: LineShape, rng: SmallRng) -> Self {
        Self { shape, rng }
    }

    pub fn from_entropy(shape: LineShape) -> Self {
        Self::new(shape, SmallRng::from_entropy())
    }

    /// Uniform in `1..=average`, raised to the two-letter minimum.
    fn word_length(&mut self) -> usize {
        self.rng
            .gen_range(1..=self.shape.average_word_length)
            .max(MIN_WORD_LENGTH)
    }

    fn word(&mut self, letters: &[char]) -> String {
        let len = self.word_length();
        (0..len)
            .map(|_| letters[self.rng.gen_range(0..letters.len())])
            .collect()
    }

    fn line(&mut self, letters: &[char], is_last: bool) -> String {
        let words: Vec<String> = (0..self.shape.words_per_line())
            .map(|_| self.word(letters))
            .collect();
        let mut line = words.join(" ");
        // Lines flow into each other when joined, so all but the last keep a
        // separating space.
        if !is_last {
            line.push(' ');
        }
        line
    }
}

impl TextGenerator for RandomWordGenerator {
    fn generate(&mut self, letters: &[char], line_count: usize) -> TutorResult<Vec<String>> {
        if letters.is_empty() {
            return Err(TutorError::EmptyLetterSet);
        }
        if line_count == 0 {
            return Err(TutorError::ZeroLineCount);
        }
        Ok((0..line_count)
            .map(|i| self.line(letters, i + 1 == line_count))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> RandomWordGenerator {
        RandomWordGenerator::new(LineShape::default(), SmallRng::seed_from_u64(seed))
    }

    #[test]
    fn default_shape_has_five_words() {
        assert_eq!(LineShape::default().words_per_line(), 5);
        let odd = LineShape {
            line_length: 26,
            average_word_length: 5,
        };
        assert_eq!(odd.words_per_line(), 6);
    }

    #[test]
    fn empty_letter_set_is_rejected() {
        let mut generator = seeded(1);
        assert_eq!(generator.generate(&[], 3), Err(TutorError::EmptyLetterSet));
    }

    #[test]
    fn zero_lines_is_rejected() {
        let mut generator = seeded(1);
        assert_eq!(generator.generate(&['א'], 0), Err(TutorError::ZeroLineCount));
    }

    #[test]
    fn single_letter_words_are_at_least_two_long() {
        for seed in 0..50 {
            let mut generator = seeded(seed);
            let lines = generator.generate(&['ש'], 3).unwrap();
            for line in &lines {
                for word in line.split_whitespace() {
                    let len = word.chars().count();
                    assert!((2..=5).contains(&len), "word {word:?} has length {len}");
                    assert!(word.chars().all(|c| c == 'ש'));
                }
            }
        }
    }

    #[test]
    fn only_last_line_lacks_trailing_space() {
        let mut generator = seeded(7);
        let lines = generator.generate(&['כ', 'ח'], 4).unwrap();
        assert_eq!(lines.len(), 4);
        for line in &lines[..3] {
            assert!(line.ends_with(' '));
        }
        assert!(!lines[3].ends_with(' '));
        for line in &lines {
            assert_eq!(line.split_whitespace().count(), 5);
            assert!(!line.contains("  "));
        }
    }

    #[test]
    fn output_uses_only_given_letters() {
        let mut generator = seeded(42);
        let letters = ['ג', 'ל', 'ד'];
        let lines = generator.generate(&letters, 3).unwrap();
        assert!(
            lines
                .concat()
                .chars()
                .all(|c| c == ' ' || letters.contains(&c))
        );
    }
}
