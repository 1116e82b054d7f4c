//! Search tree construction and traversal
//!
//! The backtracking builder that grows every feedback-consistent guess
//! sequence, and the depth-first enumerator that walks the finished tree.

mod paths;
mod tree;

pub use paths::{collect_paths, for_each_path};
pub use tree::{NodeKind, SearchConfig, SolverNode, SolverTree};
