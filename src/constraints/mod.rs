//! Constraint engine
//!
//! Turns accumulated feedback into per-position and per-letter restrictions
//! (`ConstraintSet`), tests candidates against them (`matcher`), and folds
//! each turn's feedback row into a new per-branch state (`deriver`).

mod deriver;
mod matcher;
mod set;

pub use deriver::{TurnContext, derive};
pub use matcher::matches;
pub use set::{ALPHABET_SIZE, ConstraintSet, LetterSet};
