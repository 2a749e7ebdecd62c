pub mod finger;
pub mod layout;

use crate::curriculum::CURRICULUM;
use crate::curriculum::letters::HEBREW_LETTERS;
use crate::error::{TutorError, TutorResult};

/// Every char the tutor can ask for: the alphabet, each curriculum letter
/// and the space bar.
fn expected_chars() -> impl Iterator<Item = char> {
    HEBREW_LETTERS
        .iter()
        .copied()
        .chain(CURRICULUM.iter().flat_map(|d| d.new_letters))
        .chain([' '])
}

/// Check that the finger and keycap tables cover every expected char.
/// Run once at startup.
pub fn validate_legend() -> TutorResult<()> {
    for ch in expected_chars() {
        if finger::hebrew_finger(ch).is_none() {
            return Err(TutorError::IncompleteLegend { ch, what: "finger" });
        }
        if layout::keycap_for(ch).is_none() {
            return Err(TutorError::IncompleteLegend { ch, what: "keycap" });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legend_covers_alphabet_and_curriculum() {
        assert_eq!(validate_legend(), Ok(()));
    }
}
