//! Puzzle grid loading
//!
//! A puzzle file holds the observed game: line 0 is the solution word,
//! every following line is one turn's feedback row. Both `\n` and `\r\n`
//! line endings are accepted. Validation happens here, at the boundary, so
//! the search itself can assume well-formed rows.

use crate::core::{FeedbackError, FeedbackRow, Word, WordError};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// The observed puzzle: solution plus feedback history
///
/// Row numbering follows the source grid: row 0 is the solution, rows
/// `1..num_rows` are feedback rows, one per guess turn. Immutable once
/// loaded; the search only reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    solution: Word,
    feedback: Vec<FeedbackRow>,
}

/// Error type for malformed puzzle files
#[derive(Debug)]
pub enum PuzzleError {
    Io(io::Error),
    MissingSolution,
    InvalidSolution(WordError),
    InvalidFeedback { line: usize, source: FeedbackError },
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "Failed to read puzzle file: {err}"),
            Self::MissingSolution => write!(f, "Puzzle file is empty (no solution row)"),
            Self::InvalidSolution(err) => write!(f, "Invalid solution row: {err}"),
            Self::InvalidFeedback { line, source } => {
                write!(f, "Invalid feedback row on line {line}: {source}")
            }
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::InvalidSolution(err) => Some(err),
            Self::InvalidFeedback { source, .. } => Some(source),
            Self::MissingSolution => None,
        }
    }
}

impl From<io::Error> for PuzzleError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl Puzzle {
    /// Assemble a puzzle from already-validated parts
    #[must_use]
    pub const fn new(solution: Word, feedback: Vec<FeedbackRow>) -> Self {
        Self { solution, feedback }
    }

    /// Parse a puzzle from file contents
    ///
    /// # Errors
    /// Fails fast on the first malformed row, reporting its line number
    /// (1-based, matching the file).
    pub fn parse(text: &str) -> Result<Self, PuzzleError> {
        let mut lines = text.lines();

        let solution_line = lines.next().ok_or(PuzzleError::MissingSolution)?;
        let solution = Word::new(solution_line).map_err(PuzzleError::InvalidSolution)?;

        let mut feedback = Vec::new();
        for (i, line) in lines.enumerate() {
            let row = FeedbackRow::parse(line)
                .map_err(|source| PuzzleError::InvalidFeedback { line: i + 2, source })?;
            feedback.push(row);
        }

        Ok(Self { solution, feedback })
    }

    /// Load a puzzle from a file
    ///
    /// # Errors
    /// Returns `PuzzleError::Io` if the file cannot be read, otherwise any
    /// parse error from [`Puzzle::parse`].
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, PuzzleError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// The solution word (row 0)
    #[inline]
    #[must_use]
    pub const fn solution(&self) -> &Word {
        &self.solution
    }

    /// Total row count, solution included
    #[inline]
    #[must_use]
    pub const fn num_rows(&self) -> usize {
        self.feedback.len() + 1
    }

    /// The feedback row for a guess turn (1-based)
    ///
    /// # Panics
    /// Panics if `turn` is 0 or >= `num_rows`
    #[inline]
    #[must_use]
    pub fn feedback_row(&self, turn: usize) -> &FeedbackRow {
        &self.feedback[turn - 1]
    }

    /// All feedback rows in turn order
    #[inline]
    #[must_use]
    pub fn feedback_rows(&self) -> &[FeedbackRow] {
        &self.feedback
    }
}
