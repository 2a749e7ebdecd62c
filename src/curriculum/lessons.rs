use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{TutorError, TutorResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseMode {
    /// Text drawn only from the newly introduced pair.
    Review,
    /// Text drawn from every pair introduced so far.
    Practice,
}

impl ExerciseMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ExerciseMode::Review => "review",
            ExerciseMode::Practice => "practice",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExerciseMode::Review => "Review",
            ExerciseMode::Practice => "Practice",
        }
    }
}

impl fmt::Display for ExerciseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LetterExerciseDescriptor {
    pub new_letters: [char; 2],
    pub mode: ExerciseMode,
}

const fn review(a: char, b: char) -> LetterExerciseDescriptor {
    LetterExerciseDescriptor {
        new_letters: [a, b],
        mode: ExerciseMode::Review,
    }
}

const fn practice(a: char, b: char) -> LetterExerciseDescriptor {
    LetterExerciseDescriptor {
        new_letters: [a, b],
        mode: ExerciseMode::Practice,
    }
}

/// Letter pairs in teaching order. Each pair is typed by mirrored fingers,
/// starting from the home row index fingers and working outwards.
pub const CURRICULUM: &[LetterExerciseDescriptor] = &[
    review('כ', 'ח'),
    review('ג', 'ל'),
    practice('ג', 'ל'),
    review('ד', 'ך'),
    practice('ד', 'ך'),
    review('ש', 'ף'),
    practice('ש', 'ף'),
    review('ע', 'י'),
    practice('ע', 'י'),
    review('ר', 'ו'),
    practice('ר', 'ו'),
    review('ק', 'ן'),
    practice('ק', 'ן'),
    review('ם', '\''),
    practice('ם', '\''),
    review('/', 'ט'),
    practice('/', 'ט'),
    review('פ', 'א'),
    practice('פ', 'א'),
    review('ה', 'צ'),
    practice('ה', 'צ'),
    review('ב', 'ת'),
    practice('ב', 'ת'),
    review('ס', 'ץ'),
    practice('ס', 'ץ'),
    review('ז', '.'),
    practice('ז', '.'),
    review('נ', 'מ'),
    practice('נ', 'מ'),
];

pub fn descriptor(index: usize) -> TutorResult<&'static LetterExerciseDescriptor> {
    CURRICULUM.get(index).ok_or(TutorError::ExerciseOutOfRange {
        index,
        len: CURRICULUM.len(),
    })
}

/// Every letter introduced at or before `index`, flattened in curriculum
/// order. Pairs repeated between review and practice entries stay repeated.
pub fn letters_up_to(index: usize) -> TutorResult<Vec<char>> {
    descriptor(index)?;
    Ok(CURRICULUM[..=index]
        .iter()
        .flat_map(|d| d.new_letters)
        .collect())
}

pub fn exercise_id(index: usize, mode: ExerciseMode) -> String {
    format!("{mode}-{index}")
}

impl LetterExerciseDescriptor {
    pub fn label(&self) -> String {
        let [a, b] = self.new_letters;
        format!("{a} {b} ({})", self.mode.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curriculum_opens_with_review() {
        assert_eq!(CURRICULUM.len(), 29);
        assert_eq!(CURRICULUM[0].mode, ExerciseMode::Review);
        assert_eq!(CURRICULUM[0].new_letters, ['כ', 'ח']);
    }

    #[test]
    fn letters_up_to_is_cumulative() {
        assert_eq!(letters_up_to(0).unwrap(), vec!['כ', 'ח']);
        assert_eq!(letters_up_to(2).unwrap(), vec!['כ', 'ח', 'ג', 'ל', 'ג', 'ל']);
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        assert_eq!(
            descriptor(29),
            Err(TutorError::ExerciseOutOfRange { index: 29, len: 29 })
        );
        assert!(letters_up_to(100).is_err());
    }

    #[test]
    fn ids_and_labels() {
        assert_eq!(exercise_id(3, ExerciseMode::Review), "review-3");
        assert_eq!(exercise_id(4, ExerciseMode::Practice), "practice-4");
        assert_eq!(CURRICULUM[2].label(), "ג ל (Practice)");
    }
}
