//! Reverse Wordle - CLI
//!
//! Loads a puzzle grid and a dictionary, builds the tree of all guess
//! sequences consistent with the recorded feedback, and prints one sequence
//! per line to stdout.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

use reverse_wordle::output::{print_summary, write_paths};
use reverse_wordle::puzzle::Puzzle;
use reverse_wordle::solver::{SearchConfig, SolverTree};
use reverse_wordle::wordlist::Dictionary;

#[derive(Parser)]
#[command(
    name = "reverse_wordle",
    about = "Enumerate all dictionary guess sequences consistent with a Wordle feedback history",
    version,
    author
)]
struct Cli {
    /// Puzzle file: solution on line 1, one feedback row (g/y/b marks) per guess turn
    puzzle: PathBuf,

    /// Dictionary file: one five-letter word per line
    dictionary: PathBuf,

    /// Trace subtree expansion and print a run summary to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let puzzle = Puzzle::load_from_file(&cli.puzzle)
        .with_context(|| format!("loading puzzle {}", cli.puzzle.display()))?;
    let dictionary = Dictionary::load_from_file(&cli.dictionary)
        .with_context(|| format!("loading dictionary {}", cli.dictionary.display()))?;

    if cli.verbose {
        eprintln!(
            "Loaded {} dictionary words; puzzle has {} feedback rows",
            dictionary.len(),
            puzzle.num_rows() - 1
        );
    }

    let config = SearchConfig { trace: cli.verbose };
    let tree = SolverTree::build(&puzzle, &dictionary, &config);

    let mut stdout = io::stdout().lock();
    let count = write_paths(&tree, &mut stdout).context("writing sequences")?;
    stdout.flush().context("flushing stdout")?;

    if cli.verbose {
        print_summary(&tree, count, dictionary.len());
    }

    Ok(())
}
