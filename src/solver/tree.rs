//! Backtracking search tree
//!
//! Builds the full tree of dictionary guesses consistent with the puzzle's
//! feedback history. Each node owns its accepted word, its constraint state,
//! and its children; the whole tree is torn down in one ownership-rooted
//! drop when the caller releases it.

use crate::constraints::{ConstraintSet, TurnContext, derive, matches};
use crate::core::Word;
use crate::puzzle::Puzzle;
use crate::wordlist::Dictionary;
use colored::Colorize;

/// Build-time options for the search
///
/// Replaces the original global verbose flag: diagnostics are configured
/// per build call, not process-wide.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchConfig {
    /// Print a stderr line for every subtree expansion
    pub trace: bool,
}

/// Node role in the search tree
///
/// `Leaf` marks a successfully terminal node (the final turn was reached);
/// an `Internal` node with no children is a pruned dead end, which is a
/// different situation. Internal nodes keep the constraint state used to
/// validate the next turn's candidates; leaves retain none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Internal { constraints: ConstraintSet },
    Leaf,
}

/// One accepted guess in the search tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverNode {
    word: Word,
    kind: NodeKind,
    children: Vec<SolverNode>,
}

impl SolverNode {
    fn internal(word: Word, constraints: ConstraintSet) -> Self {
        Self {
            word,
            kind: NodeKind::Internal { constraints },
            children: Vec::new(),
        }
    }

    /// The accepted guess at this node (the solution, at the root)
    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    /// Whether this node terminated at the final turn
    #[inline]
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf)
    }

    /// The constraint state in effect after this guess (internal nodes only)
    #[must_use]
    pub const fn constraints(&self) -> Option<&ConstraintSet> {
        match &self.kind {
            NodeKind::Internal { constraints } => Some(constraints),
            NodeKind::Leaf => None,
        }
    }

    /// Accepted guesses for the next turn, in dictionary order
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[SolverNode] {
        &self.children
    }

    fn count(&self) -> usize {
        1 + self.children.iter().map(SolverNode::count).sum::<usize>()
    }
}

/// The fully built search tree
///
/// The root is synthetic: it carries the puzzle's solution as its word and
/// an empty constraint set, and is never part of an enumerated sequence.
/// Its children are the accepted turn-1 guesses.
#[derive(Debug)]
pub struct SolverTree {
    root: SolverNode,
    num_rows: usize,
}

impl SolverTree {
    /// Build the complete tree for a puzzle against a dictionary
    ///
    /// For each turn along each branch: derive the turn's constraints from
    /// the parent state, scan the dictionary in order, and attach a child
    /// (with a positional-reset copy of the derived state) for every word
    /// the constraints accept. A turn with zero matches simply prunes that
    /// branch.
    #[must_use]
    pub fn build(puzzle: &Puzzle, dictionary: &Dictionary, config: &SearchConfig) -> Self {
        let mut root = SolverNode::internal(puzzle.solution().clone(), ConstraintSet::new());
        expand(&mut root, 1, puzzle, dictionary, config);

        Self {
            root,
            num_rows: puzzle.num_rows(),
        }
    }

    /// The synthetic root node
    #[inline]
    #[must_use]
    pub const fn root(&self) -> &SolverNode {
        &self.root
    }

    /// Row count of the puzzle the tree was built from, solution included
    #[inline]
    #[must_use]
    pub const fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Total number of nodes, root included
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.root.count()
    }
}

fn expand(
    node: &mut SolverNode,
    turn: usize,
    puzzle: &Puzzle,
    dictionary: &Dictionary,
    config: &SearchConfig,
) {
    if config.trace {
        eprintln!(
            "{} turn {turn}: expanding under '{}'",
            "trace".dimmed(),
            node.word()
        );
    }

    // Base case: every feedback row has been consumed along this branch
    if turn == puzzle.num_rows() {
        node.kind = NodeKind::Leaf;
        return;
    }

    let derived = {
        let NodeKind::Internal { constraints } = &node.kind else {
            return;
        };

        // Turn 1 has no previous guess; the solution scored all-green
        // stands in for it. Later turns score against this branch's
        // previous word and its recorded feedback.
        let previous = if turn == 1 {
            TurnContext::root(puzzle.solution())
        } else {
            TurnContext {
                word: &node.word,
                marks: *puzzle.feedback_row(turn - 1),
            }
        };

        derive(
            constraints,
            puzzle.feedback_row(turn),
            &previous,
            puzzle.solution(),
        )
    };

    let mut children = Vec::new();
    for candidate in dictionary.words() {
        if matches(candidate, &derived, puzzle.solution()) {
            // The positional restrictions were only for this turn's
            // validation; the forbidden set carries forward.
            let mut child = SolverNode::internal(candidate.clone(), derived.next_turn());
            expand(&mut child, turn + 1, puzzle, dictionary, config);
            children.push(child);
        }
    }
    node.children = children;
}
