//! Domain layer: growth models and the data they produce
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod error;
pub mod growth;

pub use entities::{Domain, GrowthModel, Series};
pub use error::{DomainError, DomainResult};
pub use growth::{factorial, naive, tree, MAX_FACTORIAL_BASE};
