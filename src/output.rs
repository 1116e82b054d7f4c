//! Output formatting
//!
//! Streams enumerated guess sequences to a writer, one sequence per line of
//! space-separated words, in traversal order. Nothing else goes to the
//! sequence stream; diagnostics use stderr.

use crate::core::Word;
use crate::solver::{SolverTree, for_each_path};
use colored::Colorize;
use std::io::{self, Write};

/// Write every enumerated sequence to `out`
///
/// Returns the number of sequences written.
///
/// # Errors
/// Returns the first I/O error raised by `out`; enumeration stops there.
pub fn write_paths<W: Write>(tree: &SolverTree, out: &mut W) -> io::Result<usize> {
    let mut count = 0usize;
    let mut status = Ok(());

    for_each_path(tree, |path| {
        if status.is_ok() {
            status = write_line(out, path);
            if status.is_ok() {
                count += 1;
            }
        }
    });

    status.map(|()| count)
}

fn write_line<W: Write>(out: &mut W, path: &[&Word]) -> io::Result<()> {
    for (i, word) in path.iter().enumerate() {
        if i > 0 {
            out.write_all(b" ")?;
        }
        out.write_all(word.text().as_bytes())?;
    }
    out.write_all(b"\n")
}

/// Print a run summary to stderr
pub fn print_summary(tree: &SolverTree, sequences: usize, dictionary_size: usize) {
    eprintln!(
        "{} {} consistent with {} feedback rows ({} dictionary words, {} tree nodes)",
        "found".green().bold(),
        format!("{sequences} sequence(s)").bright_yellow(),
        tree.num_rows() - 1,
        dictionary_size,
        tree.node_count()
    );
}
