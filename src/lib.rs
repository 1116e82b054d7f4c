//! Reverse Wordle
//!
//! Reconstructs every plausible sequence of dictionary guesses consistent
//! with an observed Wordle feedback history against a known solution.
//!
//! # Quick Start
//!
//! ```rust
//! use reverse_wordle::puzzle::Puzzle;
//! use reverse_wordle::solver::{SearchConfig, SolverTree, collect_paths};
//! use reverse_wordle::wordlist::Dictionary;
//!
//! // Solution "crane"; one turn where every mark came back green
//! let puzzle = Puzzle::parse("crane\nggggg\n").unwrap();
//! let dictionary = Dictionary::parse("crane\ncease\n").unwrap();
//!
//! let tree = SolverTree::build(&puzzle, &dictionary, &SearchConfig::default());
//! let paths = collect_paths(&tree);
//!
//! assert_eq!(paths.len(), 1);
//! assert_eq!(paths[0][0].text(), "crane");
//! ```

// Core domain types
pub mod core;

// Constraint derivation and matching
pub mod constraints;

// Search tree construction and path enumeration
pub mod solver;

// Puzzle grid loading
pub mod puzzle;

// Dictionary loading
pub mod wordlist;

// Sequence printing
pub mod output;
