//! Growth of exhaustive permutation testing vs. a pruned tree search.
//!
//! Layers, innermost first: `domain` (pure numerics), `application`
//! (report and chart description), `infrastructure` (rendering and display),
//! `cli` (argument parsing and the command driver).

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
