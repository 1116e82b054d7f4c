//! Constraint derivation for one turn
//!
//! Folds one feedback row into a parent constraint state, producing the
//! constraint set candidates for that turn are matched against. The parent
//! is never mutated; each branch owns its own copy.

use super::ConstraintSet;
use crate::core::{FeedbackRow, Mark, Word};

/// The previous turn's guess and the feedback it received
///
/// For the first guess turn there is no previous guess; the solution scored
/// all-green plays that role.
#[derive(Debug, Clone, Copy)]
pub struct TurnContext<'a> {
    pub word: &'a Word,
    pub marks: FeedbackRow,
}

impl<'a> TurnContext<'a> {
    /// The synthetic context for turn 1: the solution against itself
    #[must_use]
    pub const fn root(solution: &'a Word) -> Self {
        Self {
            word: solution,
            marks: FeedbackRow::ALL_GREEN,
        }
    }
}

/// Derive the constraint set for one turn
///
/// Applies the turn's feedback row to a copy of `parent`, in the fixed
/// order: green pins first (so later rules see the pinned positions), then
/// yellow restrictions, then the end-of-turn sweep of the previous word's
/// letters into `cannot_be`.
#[must_use]
pub fn derive(
    parent: &ConstraintSet,
    feedback: &FeedbackRow,
    previous: &TurnContext<'_>,
    solution: &Word,
) -> ConstraintSet {
    let mut con = parent.clone();

    for (i, mark) in feedback.iter() {
        if mark == Mark::Green {
            con.set_green(solution.char_at(i), i);
        }
    }

    for (i, mark) in feedback.iter() {
        if mark == Mark::Yellow {
            con.set_yellow(i, previous.word, &previous.marks);
        }
    }

    con.add_to_cannot_be(previous.word);

    con
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn row(s: &str) -> FeedbackRow {
        FeedbackRow::parse(s).unwrap()
    }

    #[test]
    fn parent_is_not_mutated() {
        let solution = word("crane");
        let parent = ConstraintSet::new();
        let snapshot = parent.clone();

        let _ = derive(&parent, &row("ggggg"), &TurnContext::root(&solution), &solution);

        assert_eq!(parent, snapshot);
    }

    #[test]
    fn greens_pin_solution_letters() {
        let solution = word("crane");
        let con = derive(
            &ConstraintSet::new(),
            &row("gbbbg"),
            &TurnContext::root(&solution),
            &solution,
        );

        assert!(con.must_be(0).contains(b'c'));
        assert_eq!(con.must_be(0).len(), 1);
        assert!(con.must_be(4).contains(b'e'));
        assert_eq!(con.must_be(4).len(), 1);
    }

    #[test]
    fn first_turn_yellow_allows_other_solution_letters() {
        let solution = word("crane");
        let con = derive(
            &ConstraintSet::new(),
            &row("ybbbb"),
            &TurnContext::root(&solution),
            &solution,
        );

        let allowed = con.must_be(0);
        assert!(!allowed.contains(b'c'));
        assert!(allowed.contains(b'r'));
        assert!(allowed.contains(b'e'));
        assert_eq!(allowed.len(), 4);
    }

    #[test]
    fn sweep_forbids_unpinned_previous_letters() {
        let solution = word("crane");
        let con = derive(
            &ConstraintSet::new(),
            &row("bgggg"),
            &TurnContext::root(&solution),
            &solution,
        );

        // r, a, n, e pinned by greens; only c reaches the forbidden set
        assert!(con.cannot_be().contains(b'c'));
        assert!(!con.cannot_be().contains(b'r'));
        assert!(!con.cannot_be().contains(b'e'));
        assert_eq!(con.cannot_be().len(), 1);
    }

    #[test]
    fn all_black_forbids_whole_previous_word() {
        let solution = word("crane");
        let con = derive(
            &ConstraintSet::new(),
            &row("bbbbb"),
            &TurnContext::root(&solution),
            &solution,
        );

        for letter in *b"crane" {
            assert!(con.cannot_be().contains(letter));
        }
        assert_eq!(con.cannot_be().len(), 5);
    }

    #[test]
    fn later_turn_uses_previous_guess_evidence() {
        // Turn 2: previous guess "brane" scored bgggg, current row has a
        // yellow at position 0. Evidenced-present letters are r, a, n, e.
        let solution = word("crane");
        let brane = word("brane");
        let parent = ConstraintSet::new().next_turn();
        let previous = TurnContext {
            word: &brane,
            marks: row("bgggg"),
        };

        let con = derive(&parent, &row("ybbbb"), &previous, &solution);

        let allowed = con.must_be(0);
        assert!(!allowed.contains(b'b'));
        assert!(allowed.contains(b'r'));
        assert_eq!(allowed.len(), 4);
        // Sweep covers the previous guess, not the solution
        assert!(con.cannot_be().contains(b'b'));
    }

    #[test]
    fn forbidden_set_accumulates_across_turns() {
        let solution = word("crane");
        let turn1 = derive(
            &ConstraintSet::new(),
            &row("bgggg"),
            &TurnContext::root(&solution),
            &solution,
        );
        let carried = turn1.next_turn();

        let brane = word("brane");
        let previous = TurnContext {
            word: &brane,
            marks: row("bgggg"),
        };
        let turn2 = derive(&carried, &row("bgggg"), &previous, &solution);

        // c from turn 1 persists; b joins in turn 2
        assert!(turn2.cannot_be().contains(b'c'));
        assert!(turn2.cannot_be().contains(b'b'));
    }
}
