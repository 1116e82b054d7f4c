//! Candidate matching predicate
//!
//! Pure test of one dictionary word against a branch's constraint state.
//! The solution row is consulted for two checks that the constraint state
//! alone cannot express: an open (yellow-restricted) position must not
//! coincide with the true solution letter, and a candidate repeating a
//! letter the solution contains is rejected outright.

use super::ConstraintSet;
use crate::core::{WORD_LEN, Word};

/// Check whether `word` satisfies `con` for the current turn
///
/// For each position:
/// - A non-empty `must_be` entry requires membership; when the entry has
///   more than one letter the position is still yellow-open, and the
///   candidate letter must additionally differ from the solution letter
///   there (a coincidence would have been marked green).
/// - An empty entry requires the letter to be outside `cannot_be`.
///
/// Finally, a letter repeated within the candidate is rejected whenever the
/// solution contains that letter. This blanket rejection is deliberately
/// simpler than official Wordle's count-based duplicate feedback.
#[must_use]
pub fn matches(word: &Word, con: &ConstraintSet, solution: &Word) -> bool {
    for i in 0..WORD_LEN {
        let letter = word.char_at(i);
        let allowed = con.must_be(i);

        if allowed.is_empty() {
            if con.cannot_be().contains(letter) {
                return false;
            }
        } else {
            if !allowed.contains(letter) {
                return false;
            }
            if allowed.len() > 1 && letter == solution.char_at(i) {
                return false;
            }
        }

        // Duplicate-letter guard
        if word.positions_of(letter).len() > 1 && solution.has_letter(letter) {
            return false;
        }
    }

    true
}
