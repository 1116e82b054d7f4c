//! Core domain types for reverse-Wordle enumeration
//!
//! Fundamental types shared by the constraint engine and the search tree.
//! Everything here is pure data with no I/O.

mod feedback;
mod word;

pub use feedback::{FeedbackError, FeedbackRow, Mark};
pub use word::{Word, WordError};

/// Fixed length of every solution, guess, and feedback row.
pub const WORD_LEN: usize = 5;
