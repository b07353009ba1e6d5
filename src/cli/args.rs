//! CLI argument definitions using clap

use clap::Parser;

/// Compare the cost of testing all permutations with a tree search, on a log-scale chart.
///
/// Prints `(base, tree search cost)` for every base from 2 to 29, then shows
/// both growth curves.
#[derive(Parser, Debug)]
#[command(name = "plot-scaling")]
#[command(author, version, about)]
pub struct Cli {}
