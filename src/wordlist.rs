//! Dictionary loading
//!
//! Reads the candidate word list, one fixed-length lowercase word per line.
//! The in-memory order is the *reverse* of file order: the original list
//! was built by O(1) prepending, and enumeration order is defined in terms
//! of that reversed order, so it is preserved here. Callers that care about
//! output ordering should order their word files accordingly.

use crate::core::{Word, WordError};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// An ordered, read-only collection of candidate words
///
/// Scanned in full once per search-tree node; children of a node appear in
/// this order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<Word>,
}

/// Error type for malformed word lists
#[derive(Debug)]
pub enum WordlistError {
    Io(io::Error),
    InvalidWord { line: usize, source: WordError },
}

impl fmt::Display for WordlistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "Failed to read word list: {err}"),
            Self::InvalidWord { line, source } => {
                write!(f, "Invalid word on line {line}: {source}")
            }
        }
    }
}

impl std::error::Error for WordlistError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::InvalidWord { source, .. } => Some(source),
        }
    }
}

impl From<io::Error> for WordlistError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl Dictionary {
    /// Build a dictionary from already-validated words, in the given order
    #[must_use]
    pub const fn from_words(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Parse file contents into a dictionary
    ///
    /// Blank lines are skipped (a trailing newline is common); any other
    /// malformed line is a fatal error carrying its 1-based line number.
    /// The resulting word order is the reverse of file order.
    ///
    /// # Errors
    /// Returns `WordlistError::InvalidWord` on the first line that is not a
    /// valid word.
    pub fn parse(text: &str) -> Result<Self, WordlistError> {
        let mut words = Vec::new();

        for (i, line) in text.lines().enumerate() {
            if line.is_empty() {
                continue;
            }
            let word = Word::new(line)
                .map_err(|source| WordlistError::InvalidWord { line: i + 1, source })?;
            words.push(word);
        }

        words.reverse();
        Ok(Self { words })
    }

    /// Load a dictionary from a file
    ///
    /// # Errors
    /// Returns `WordlistError::Io` if the file cannot be read, otherwise any
    /// parse error from [`Dictionary::parse`].
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, WordlistError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// The words, in scan order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.words.len()
    }

    /// Check whether the dictionary is empty
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
