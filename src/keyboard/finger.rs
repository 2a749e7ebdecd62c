#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hand {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Finger {
    Pinky,
    Ring,
    Middle,
    Index,
    Thumb,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FingerAssignment {
    pub hand: Hand,
    pub finger: Finger,
}

impl FingerAssignment {
    pub const fn new(hand: Hand, finger: Finger) -> Self {
        Self { hand, finger }
    }

    /// Identifier of the finger in the hand illustration, e.g. `left-ring-finger`.
    pub fn element_id(self) -> &'static str {
        use Finger::*;
        use Hand::*;

        match (self.hand, self.finger) {
            (Left, Pinky) => "left-pinky",
            (Left, Ring) => "left-ring-finger",
            (Left, Middle) => "left-middle-finger",
            (Left, Index) => "left-index-finger",
            (Left, Thumb) => "left-thumb",
            (Right, Pinky) => "right-pinky",
            (Right, Ring) => "right-ring-finger",
            (Right, Middle) => "right-middle-finger",
            (Right, Index) => "right-index-finger",
            (Right, Thumb) => "right-thumb",
        }
    }

    pub fn describe(self) -> String {
        let hand = match self.hand {
            Hand::Left => "left",
            Hand::Right => "right",
        };
        let finger = match self.finger {
            Finger::Pinky => "pinky",
            Finger::Ring => "ring",
            Finger::Middle => "middle",
            Finger::Index => "index",
            Finger::Thumb => "thumb",
        };
        format!("{hand} {finger}")
    }
}

/// Finger that types `ch` on the standard Hebrew (SI-1452) layout.
pub fn hebrew_finger(ch: char) -> Option<FingerAssignment> {
    use Finger::*;
    use Hand::*;

    let assignment = match ch {
        '/' | 'ש' | 'ז' => FingerAssignment::new(Left, Pinky),
        '\'' | 'ד' | 'ס' => FingerAssignment::new(Left, Ring),
        'ק' | 'ג' | 'ב' => FingerAssignment::new(Left, Middle),
        'ר' | 'כ' | 'ה' | 'נ' | 'ע' | 'א' => FingerAssignment::new(Left, Index),
        ' ' => FingerAssignment::new(Left, Thumb),
        'ו' | 'ח' | 'צ' | 'מ' | 'י' | 'ט' => FingerAssignment::new(Right, Index),
        'ן' | 'ל' | 'ת' => FingerAssignment::new(Right, Middle),
        'ם' | 'ך' | 'ץ' => FingerAssignment::new(Right, Ring),
        'פ' | 'ף' | '.' | ']' | ',' | '[' | '\\' => FingerAssignment::new(Right, Pinky),
        _ => return None,
    };
    Some(assignment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_row_index_fingers() {
        assert_eq!(
            hebrew_finger('כ'),
            Some(FingerAssignment::new(Hand::Left, Finger::Index))
        );
        assert_eq!(
            hebrew_finger('ח'),
            Some(FingerAssignment::new(Hand::Right, Finger::Index))
        );
    }

    #[test]
    fn space_is_left_thumb() {
        let space = hebrew_finger(' ').unwrap();
        assert_eq!(space.element_id(), "left-thumb");
        assert_eq!(space.describe(), "left thumb");
    }

    #[test]
    fn latin_letters_have_no_finger() {
        assert_eq!(hebrew_finger('a'), None);
    }
}
