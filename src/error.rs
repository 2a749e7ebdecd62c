use thiserror::Error;

/// Precondition violations raised by the core. These are fatal to the
/// calling operation and never silently defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TutorError {
    #[error("cannot generate practice text from an empty letter set")]
    EmptyLetterSet,

    #[error("practice text needs at least one line")]
    ZeroLineCount,

    #[error("exercise index {index} is outside the curriculum (0..{len})")]
    ExerciseOutOfRange { index: usize, len: usize },

    #[error("keyboard legend has no {what} for {ch:?}")]
    IncompleteLegend { ch: char, what: &'static str },
}

pub type TutorResult<T> = Result<T, TutorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_index_and_length() {
        let err = TutorError::ExerciseOutOfRange { index: 40, len: 29 };
        let msg = err.to_string();
        assert!(msg.contains("40"));
        assert!(msg.contains("29"));
    }
}
