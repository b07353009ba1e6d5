//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the numeric model.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("factorial of {base} does not fit in 128 bits (max base: {max})")]
    FactorialOverflow { base: u32, max: u32 },

    #[error("empty domain: start {start} is greater than end {end}")]
    EmptyDomain { start: u32, end: u32 },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
