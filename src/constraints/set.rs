//! Per-branch constraint state
//!
//! A `ConstraintSet` is the accumulated knowledge along one branch of the
//! search: for each position, a set of letters the position may hold, plus a
//! global set of letters known absent from all still-open positions.
//!
//! Each tree node owns exactly one `ConstraintSet`, produced as a value copy
//! of its parent's plus the current turn's updates. Sets are never shared
//! between siblings, so no backtracking undo is needed.

use crate::core::{FeedbackRow, Mark, WORD_LEN, Word};
use std::fmt;

/// Number of letters in the alphabet (`a` through `z`).
pub const ALPHABET_SIZE: usize = 26;

/// A set of lowercase letters, stored as a 26-bit mask
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    const fn bit(letter: u8) -> u32 {
        debug_assert!(letter.is_ascii_lowercase());
        1 << (letter - b'a')
    }

    /// Create a set from an iterator of letters
    pub fn from_letters(letters: impl IntoIterator<Item = u8>) -> Self {
        let mut set = Self::EMPTY;
        for letter in letters {
            set.insert(letter);
        }
        set
    }

    /// Add a letter to the set
    #[inline]
    pub const fn insert(&mut self, letter: u8) {
        self.0 |= Self::bit(letter);
    }

    /// Remove a letter from the set (no-op if absent)
    #[inline]
    pub const fn remove(&mut self, letter: u8) {
        self.0 &= !Self::bit(letter);
    }

    /// Check whether a letter is in the set
    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        self.0 & Self::bit(letter) != 0
    }

    /// Number of letters in the set
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Check whether the set is empty
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate over the letters in the set, in alphabetical order
    pub fn letters(self) -> impl Iterator<Item = u8> {
        (0..ALPHABET_SIZE)
            .map(|i| b'a' + i as u8)
            .filter(move |&l| self.contains(l))
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for letter in self.letters() {
            write!(f, "{}", letter as char)?;
        }
        write!(f, "}}")
    }
}

/// The per-branch knowledge state
///
/// - `must_be[i]`: when non-empty, the letters position `i` may hold. A
///   singleton means the position is pinned by a green mark; a larger set
///   records a yellow-derived restriction (the position is open but at least
///   one letter is excluded from it).
/// - `cannot_be`: letters known absent from all positions with an empty
///   `must_be` entry.
///
/// Constraints only narrow as turns accumulate along a branch: `cannot_be`
/// grows each turn, and positional entries are replaced, never relaxed,
/// within the turn they govern.
#[derive(Clone, PartialEq, Eq)]
pub struct ConstraintSet {
    must_be: [LetterSet; WORD_LEN],
    cannot_be: LetterSet,
}

impl ConstraintSet {
    /// An empty constraint set: every position open, no letters forbidden
    #[must_use]
    pub const fn new() -> Self {
        Self {
            must_be: [LetterSet::EMPTY; WORD_LEN],
            cannot_be: LetterSet::EMPTY,
        }
    }

    /// The allowed-letter set for a position
    #[inline]
    #[must_use]
    pub const fn must_be(&self, position: usize) -> LetterSet {
        self.must_be[position]
    }

    /// The global forbidden-letter set
    #[inline]
    #[must_use]
    pub const fn cannot_be(&self) -> LetterSet {
        self.cannot_be
    }

    /// Pin a position to a single letter (green mark)
    ///
    /// The pinned letter is dropped from `cannot_be`: a letter required at a
    /// pinned position is never simultaneously forbidden. Dropping it does
    /// not widen the match set, because a pinned letter occurs in the
    /// solution and the duplicate-letter guard already rejects candidates
    /// repeating it at any other position.
    pub fn set_green(&mut self, letter: u8, position: usize) {
        let mut set = LetterSet::EMPTY;
        set.insert(letter);
        self.must_be[position] = set;
        self.cannot_be.remove(letter);
    }

    /// Record a yellow mark at `position`
    ///
    /// The allowed letters for the position become the letters of the
    /// previous turn's word that its feedback confirmed present (green or
    /// yellow marks), minus the previous word's letter at this position when
    /// that mark was green - a yellow here can never coincide with the known
    /// solution letter. For the first turn the previous word is the solution
    /// itself scored all-green, so the set is every solution letter except
    /// the one at this position.
    pub fn set_yellow(&mut self, position: usize, prev_word: &Word, prev_marks: &FeedbackRow) {
        let present = prev_word
            .chars()
            .iter()
            .zip(prev_marks.marks())
            .filter(|&(_, &mark)| mark != Mark::Black)
            .map(|(&letter, _)| letter);
        let mut set = LetterSet::from_letters(present);

        if prev_marks.mark(position) == Mark::Green {
            set.remove(prev_word.char_at(position));
        }

        self.must_be[position] = set;
    }

    /// Sweep a whole word into the forbidden set (end-of-turn black rule)
    ///
    /// Every letter of `word` joins `cannot_be` except letters currently
    /// pinned as the sole member of some position.
    pub fn add_to_cannot_be(&mut self, word: &Word) {
        for &letter in word.chars() {
            if !self.is_pinned(letter) {
                self.cannot_be.insert(letter);
            }
        }
    }

    /// A copy carrying knowledge forward to the next turn
    ///
    /// Positional `must_be` restrictions are turn-scoped: they validate only
    /// the turn they were derived for. `cannot_be` persists for the rest of
    /// the branch.
    #[must_use]
    pub const fn next_turn(&self) -> Self {
        Self {
            must_be: [LetterSet::EMPTY; WORD_LEN],
            cannot_be: self.cannot_be,
        }
    }

    /// Whether a letter is the sole allowed letter at some position
    fn is_pinned(&self, letter: u8) -> bool {
        self.must_be
            .iter()
            .any(|set| set.len() == 1 && set.contains(letter))
    }
}

impl Default for ConstraintSet {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConstraintSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstraintSet")
            .field("must_be", &self.must_be)
            .field("cannot_be", &self.cannot_be)
            .finish()
    }
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
    fn letter_set_insert_contains() {
        let mut set = LetterSet::EMPTY;
        assert!(set.is_empty());

        set.insert(b'a');
        set.insert(b'z');
        assert!(set.contains(b'a'));
        assert!(set.contains(b'z'));
        assert!(!set.contains(b'm'));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn letter_set_remove() {
        let mut set = LetterSet::from_letters([b'c', b'r', b'a']);
        set.remove(b'r');
        assert!(!set.contains(b'r'));
        assert_eq!(set.len(), 2);

        // Removing an absent letter is a no-op
        set.remove(b'q');
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn letter_set_letters_in_order() {
        let set = LetterSet::from_letters([b'z', b'a', b'm']);
        let letters: Vec<u8> = set.letters().collect();
        assert_eq!(letters, vec![b'a', b'm', b'z']);
    }

    #[test]
    fn letter_set_spans_whole_alphabet() {
        let set = LetterSet::from_letters(b'a'..=b'z');
        assert_eq!(set.len(), ALPHABET_SIZE);
        assert_eq!(set.letters().count(), ALPHABET_SIZE);
    }

    #[test]
    fn letter_set_dedupes() {
        let set = LetterSet::from_letters(*b"eerie");
        assert_eq!(set.len(), 3); // e, r, i
    }

    #[test]
    fn new_constraints_are_unrestricted() {
        let con = ConstraintSet::new();
        for i in 0..WORD_LEN {
            assert!(con.must_be(i).is_empty());
        }
        assert!(con.cannot_be().is_empty());
    }

    #[test]
    fn set_green_pins_position() {
        let mut con = ConstraintSet::new();
        con.set_green(b'c', 0);

        assert_eq!(con.must_be(0).len(), 1);
        assert!(con.must_be(0).contains(b'c'));
        assert!(con.must_be(1).is_empty());
    }

    #[test]
    fn set_green_clears_forbidden_letter() {
        let mut con = ConstraintSet::new();
        con.add_to_cannot_be(&word("crane"));
        assert!(con.cannot_be().contains(b'c'));

        con.set_green(b'c', 0);
        assert!(!con.cannot_be().contains(b'c'));
        assert!(con.cannot_be().contains(b'r'));
    }

    #[test]
    fn set_yellow_first_turn_excludes_solution_letter() {
        // Previous turn is the solution scored all-green, so a yellow at
        // position 0 allows every solution letter except the one at 0.
        let mut con = ConstraintSet::new();
        con.set_yellow(0, &word("crane"), &FeedbackRow::ALL_GREEN);

        let allowed = con.must_be(0);
        assert!(!allowed.contains(b'c'));
        assert!(allowed.contains(b'r'));
        assert!(allowed.contains(b'a'));
        assert!(allowed.contains(b'n'));
        assert!(allowed.contains(b'e'));
    }

    #[test]
    fn set_yellow_uses_only_present_letters() {
        // Previous guess "brane" scored bgggg: only r, a, n, e confirmed.
        let mut con = ConstraintSet::new();
        con.set_yellow(0, &word("brane"), &row("bgggg"));

        let allowed = con.must_be(0);
        assert!(!allowed.contains(b'b'));
        assert_eq!(allowed.len(), 4);
        assert!(allowed.contains(b'r'));
        assert!(allowed.contains(b'e'));
    }

    #[test]
    fn set_yellow_keeps_letter_when_previous_mark_not_green() {
        // Previous mark at position 0 was yellow, so the letter there is not
        // known to be the solution letter at 0 and stays allowed.
        let mut con = ConstraintSet::new();
        con.set_yellow(0, &word("react"), &row("ygggg"));

        assert!(con.must_be(0).contains(b'r'));
    }

    #[test]
    fn add_to_cannot_be_skips_pinned_letters() {
        let mut con = ConstraintSet::new();
        con.set_green(b'r', 1);
        con.add_to_cannot_be(&word("crane"));

        assert!(!con.cannot_be().contains(b'r'));
        assert!(con.cannot_be().contains(b'c'));
        assert!(con.cannot_be().contains(b'a'));
        assert!(con.cannot_be().contains(b'n'));
        assert!(con.cannot_be().contains(b'e'));
    }

    #[test]
    fn pinned_letter_never_forbidden() {
        // Invariant: the sole member of a must_be entry is not in cannot_be.
        let mut con = ConstraintSet::new();
        con.add_to_cannot_be(&word("crane"));
        con.set_green(b'a', 2);
        con.add_to_cannot_be(&word("about"));

        for i in 0..WORD_LEN {
            let set = con.must_be(i);
            if set.len() == 1 {
                let letter = set.letters().next().unwrap();
                assert!(!con.cannot_be().contains(letter));
            }
        }
    }

    #[test]
    fn next_turn_clears_positions_keeps_forbidden() {
        let mut con = ConstraintSet::new();
        con.set_green(b'c', 0);
        con.set_yellow(1, &word("crane"), &FeedbackRow::ALL_GREEN);
        con.add_to_cannot_be(&word("moist"));

        let next = con.next_turn();
        for i in 0..WORD_LEN {
            assert!(next.must_be(i).is_empty());
        }
        assert_eq!(next.cannot_be(), con.cannot_be());
    }

    #[test]
    fn clone_is_independent() {
        let mut parent = ConstraintSet::new();
        parent.add_to_cannot_be(&word("crane"));

        let snapshot = parent.clone();
        let mut child = parent.clone();
        child.set_green(b'z', 4);
        child.add_to_cannot_be(&word("moist"));

        assert_eq!(parent, snapshot);
        assert_ne!(parent, child);
    }
}
