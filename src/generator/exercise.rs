use crate::curriculum::lessons::{self, ExerciseMode};
use crate::error::TutorResult;
use crate::generator::TextGenerator;

/// Lines drawn only from a curriculum entry's new pair.
pub fn review_exercise<G: TextGenerator>(
    generator: &mut G,
    new_letters: [char; 2],
    line_count: usize,
) -> TutorResult<Vec<String>> {
    generator.generate(&new_letters, line_count)
}

/// Lines drawn from every letter learned up to and including `index`.
pub fn practice_exercise<G: TextGenerator>(
    generator: &mut G,
    index: usize,
    line_count: usize,
) -> TutorResult<Vec<String>> {
    let letters = lessons::letters_up_to(index)?;
    generator.generate(&letters, line_count)
}

pub fn exercise_text<G: TextGenerator>(
    generator: &mut G,
    index: usize,
    line_count: usize,
) -> TutorResult<Vec<String>> {
    let descriptor = lessons::descriptor(index)?;
    match descriptor.mode {
        ExerciseMode::Review => review_exercise(generator, descriptor.new_letters, line_count),
        ExerciseMode::Practice => practice_exercise(generator, index, line_count),
    }
}

/// The exercise as one target string. Lines already carry their separating
/// spaces, so they are concatenated as-is.
pub fn exercise_text_string<G: TextGenerator>(
    generator: &mut G,
    index: usize,
    line_count: usize,
) -> TutorResult<String> {
    Ok(exercise_text(generator, index, line_count)?.concat())
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;
    use crate::error::TutorError;
    use crate::generator::random_words::{LineShape, RandomWordGenerator};

    fn generator() -> RandomWordGenerator {
        RandomWordGenerator::new(LineShape::default(), SmallRng::seed_from_u64(3))
    }

    fn letters_of(text: &str) -> Vec<char> {
        let mut chars: Vec<char> = text.chars().filter(|&c| c != ' ').collect();
        chars.sort_unstable();
        chars.dedup();
        chars
    }

    #[test]
    fn review_entry_uses_only_its_pair() {
        // Entry 3 reviews ד ך even though earlier pairs are known.
        let text = exercise_text_string(&mut generator(), 3, 3).unwrap();
        for c in letters_of(&text) {
            assert!(c == 'ד' || c == 'ך', "unexpected {c}");
        }
    }

    #[test]
    fn practice_entry_draws_from_cumulative_set() {
        let allowed = lessons::letters_up_to(4).unwrap();
        let text = exercise_text_string(&mut generator(), 4, 20).unwrap();
        for c in letters_of(&text) {
            assert!(allowed.contains(&c), "unexpected {c}");
        }
    }

    #[test]
    fn index_past_curriculum_fails() {
        let err = exercise_text(&mut generator(), 29, 3).unwrap_err();
        assert_eq!(err, TutorError::ExerciseOutOfRange { index: 29, len: 29 });
    }
}
