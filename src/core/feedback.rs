//! Feedback row representation
//!
//! One row of recorded Wordle feedback, one mark per letter position:
//! - Green: the guessed letter is correct and in the correct position
//! - Yellow: the letter is in the solution but at a different position
//! - Black: the letter does not appear in the solution
//!
//! Rows are parsed from puzzle files where each character is one of
//! `g` (green), `y` (yellow), or `b`/`-` (black).

use super::WORD_LEN;
use std::fmt;

/// A single feedback mark for one letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Green,
    Yellow,
    Black,
}

/// A full row of feedback marks for one guess turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackRow([Mark; WORD_LEN]);

/// Error type for invalid feedback rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    InvalidLength(usize),
    InvalidMark(char),
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Feedback row must be exactly {WORD_LEN} marks, got {len}")
            }
            Self::InvalidMark(ch) => {
                write!(f, "Invalid feedback mark '{ch}' (expected g, y, b, or -)")
            }
        }
    }
}

impl std::error::Error for FeedbackError {}

impl FeedbackRow {
    /// The row a solution scores against itself: all green.
    ///
    /// Used as the synthetic previous-turn feedback when deriving constraints
    /// for the first guess turn.
    pub const ALL_GREEN: Self = Self([Mark::Green; WORD_LEN]);

    /// Parse a row from a string like `"gybbg"` or `"gy--g"`
    ///
    /// Accepts `g`/`G` for green, `y`/`Y` for yellow, and `b`/`B`/`-`/`_`
    /// for black.
    ///
    /// # Errors
    /// Returns `FeedbackError` if the string is not exactly `WORD_LEN`
    /// characters or contains an unrecognized mark.
    ///
    /// # Examples
    /// ```
    /// use reverse_wordle::core::{FeedbackRow, Mark};
    ///
    /// let row = FeedbackRow::parse("gybbg").unwrap();
    /// assert_eq!(row.mark(0), Mark::Green);
    /// assert_eq!(row.mark(1), Mark::Yellow);
    /// assert_eq!(row.mark(2), Mark::Black);
    /// ```
    pub fn parse(s: &str) -> Result<Self, FeedbackError> {
        let chars: Vec<char> = s.chars().collect();

        if chars.len() != WORD_LEN {
            return Err(FeedbackError::InvalidLength(chars.len()));
        }

        let mut marks = [Mark::Black; WORD_LEN];
        for (i, ch) in chars.into_iter().enumerate() {
            marks[i] = match ch {
                'g' | 'G' => Mark::Green,
                'y' | 'Y' => Mark::Yellow,
                'b' | 'B' | '-' | '_' => Mark::Black,
                _ => return Err(FeedbackError::InvalidMark(ch)),
            };
        }

        Ok(Self(marks))
    }

    /// Get the mark at a specific position (0-based)
    ///
    /// # Panics
    /// Panics if position >= `WORD_LEN`
    #[inline]
    #[must_use]
    pub const fn mark(&self, position: usize) -> Mark {
        self.0[position]
    }

    /// Get all marks as an array
    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LEN] {
        &self.0
    }

    /// Iterate over (position, mark) pairs
    pub fn iter(&self) -> impl Iterator<Item = (usize, Mark)> + '_ {
        self.0.iter().copied().enumerate()
    }

    /// Check if every mark is green
    #[must_use]
    pub fn is_all_green(&self) -> bool {
        self.0.iter().all(|&m| m == Mark::Green)
    }
}

impl std::str::FromStr for FeedbackRow {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for FeedbackRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in self.0 {
            f.write_str(match mark {
                Mark::Green => "g",
                Mark::Yellow => "y",
                Mark::Black => "b",
            })?;
        }
        Ok(())
    }
}
