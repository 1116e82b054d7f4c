//! Path enumeration
//!
//! Depth-first, pre-order walk of a built search tree, yielding every
//! root-to-leaf sequence of accepted guesses. The synthetic root is not part
//! of any sequence; a path holds one word per feedback row. Branches that
//! died before the final turn (internal nodes with no children) contribute
//! nothing.
//!
//! Traversal is read-only and restartable: repeated walks over the same
//! tree yield the same sequences in the same order, which is dictionary
//! order at each level, nested by turn.

use super::tree::{SolverNode, SolverTree};
use crate::core::Word;

/// Invoke `visit` once per complete guess sequence, in traversal order
pub fn for_each_path<'t, F>(tree: &'t SolverTree, mut visit: F)
where
    F: FnMut(&[&'t Word]),
{
    let mut buffer: Vec<&Word> = Vec::with_capacity(tree.num_rows().saturating_sub(1));
    for child in tree.root().children() {
        walk(child, &mut buffer, &mut visit);
    }
}

/// Collect every complete guess sequence, in traversal order
#[must_use]
pub fn collect_paths(tree: &SolverTree) -> Vec<Vec<&Word>> {
    let mut paths = Vec::new();
    for_each_path(tree, |path| paths.push(path.to_vec()));
    paths
}

fn walk<'t, F>(node: &'t SolverNode, buffer: &mut Vec<&'t Word>, visit: &mut F)
where
    F: FnMut(&[&'t Word]),
{
    buffer.push(node.word());
    if node.is_leaf() {
        // Leaves only occur at the final turn, so the buffer is complete
        visit(buffer);
    } else {
        for child in node.children() {
            walk(child, buffer, visit);
        }
    }
    buffer.pop();
}
