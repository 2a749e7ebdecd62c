pub mod lessons;
pub mod letters;

pub use lessons::{CURRICULUM, ExerciseMode, LetterExerciseDescriptor};
