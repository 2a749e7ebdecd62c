use std::time::Instant;

use crate::curriculum::letters::{normalize_geresh, normalize_geresh_char};
use crate::session::drill::DrillState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharStatus {
    Pending,
    Current,
    Correct,
    Incorrect,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LetterState {
    pub ch: char,
    pub status: CharStatus,
}

/// Status of every target char against the typed prefix. Positions before
/// the cursor are judged, the cursor position is `Current`, the rest wait.
pub fn classify(target: &[char], typed: &[char]) -> Vec<LetterState> {
    let cursor = typed.len();
    target
        .iter()
        .enumerate()
        .map(|(i, &ch)| {
            let status = if i < cursor {
                if typed[i] == ch {
                    CharStatus::Correct
                } else {
                    CharStatus::Incorrect
                }
            } else if i == cursor {
                CharStatus::Current
            } else {
                CharStatus::Pending
            };
            LetterState { ch, status }
        })
        .collect()
}

/// Positions where typed and target agree, over their overlap.
pub fn correct_count(target: &[char], typed: &[char]) -> usize {
    typed
        .iter()
        .zip(target.iter())
        .filter(|(a, b)| a == b)
        .count()
}

/// Whole-percent accuracy of the typed prefix. Nothing typed is a perfect
/// score.
pub fn accuracy(target: &[char], typed: &[char]) -> u8 {
    if typed.is_empty() {
        return 100;
    }
    let correct = correct_count(target, typed) as f64;
    (correct / typed.len() as f64 * 100.0).round() as u8
}

pub fn is_complete(target: &[char], typed: &[char]) -> bool {
    typed.len() >= target.len()
}

/// Index of the `Current` char, if any remains.
pub fn current_index(target: &[char], typed: &[char]) -> Option<usize> {
    (typed.len() < target.len()).then_some(typed.len())
}

/// Replace the whole typed value, as a text field reports it. The value is
/// geresh-normalized first; a value longer than the target is ignored.
/// Returns whether the value was accepted.
pub fn handle_input(drill: &mut DrillState, value: &str) -> bool {
    let normalized: Vec<char> = normalize_geresh(value).chars().collect();
    if normalized.len() > drill.target.len() {
        return false;
    }
    if drill.started_at.is_none() && !normalized.is_empty() {
        drill.started_at = Some(Instant::now());
    }
    drill.typed = normalized;
    mark_finished(drill);
    true
}

/// Append one keystroke. Ignored once the target is fully typed.
pub fn process_char(drill: &mut DrillState, ch: char) -> bool {
    if drill.is_complete() {
        return false;
    }
    if drill.started_at.is_none() {
        drill.started_at = Some(Instant::now());
    }
    drill.typed.push(normalize_geresh_char(ch));
    mark_finished(drill);
    true
}

pub fn process_backspace(drill: &mut DrillState) {
    if drill.typed.pop().is_some() {
        drill.finished_at = None;
    }
}

fn mark_finished(drill: &mut DrillState) {
    if drill.is_complete() {
        if drill.finished_at.is_none() {
            drill.finished_at = Some(Instant::now());
        }
    } else {
        drill.finished_at = None;
    }
}
