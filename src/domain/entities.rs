//! Domain entities: input range, growth models, computed series

use std::fmt;
use std::ops::RangeInclusive;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::growth;

/// Contiguous, inclusive range of bases the models are evaluated over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Domain {
    start: u32,
    end: u32,
}

impl Domain {
    /// Smallest base of the default run.
    pub const DEFAULT_START: u32 = 2;
    /// Largest base of the default run (inclusive).
    pub const DEFAULT_END: u32 = 29;

    /// Create a domain `start..=end`. Rejects `start > end`.
    pub fn new(start: u32, end: u32) -> DomainResult<Self> {
        if start > end {
            return Err(DomainError::EmptyDomain { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    /// Bases in ascending order.
    pub fn values(&self) -> RangeInclusive<u32> {
        self.start..=self.end
    }

    pub fn len(&self) -> usize {
        (self.end - self.start) as usize + 1
    }

    /// Always false: construction rejects empty ranges.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self {
            start: Self::DEFAULT_START,
            end: Self::DEFAULT_END,
        }
    }
}

/// The two cost models being compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrowthModel {
    /// Factorial: every permutation is tested.
    AllPermutations,
    /// Pruned tree search recurrence.
    TreeSearch,
}

impl GrowthModel {
    /// Legend label.
    pub fn label(&self) -> &'static str {
        match self {
            GrowthModel::AllPermutations => "all permutations",
            GrowthModel::TreeSearch => "tree search",
        }
    }

    /// Evaluate the model at `base` as a real number.
    ///
    /// The factorial is exact up to the `u128` bound and rounded to `f64` once.
    pub fn evaluate(&self, base: u32) -> DomainResult<f64> {
        match self {
            GrowthModel::AllPermutations => growth::naive(base).map(|v| v as f64),
            GrowthModel::TreeSearch => Ok(growth::tree(base)),
        }
    }
}

impl fmt::Display for GrowthModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Values of one model, positionally aligned with a `Domain`.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub model: GrowthModel,
    pub domain: Domain,
    pub values: Vec<f64>,
}

impl Series {
    /// Evaluate `model` once per base, preserving domain order.
    pub fn evaluate(model: GrowthModel, domain: Domain) -> DomainResult<Self> {
        let values = domain
            .values()
            .map(|base| model.evaluate(base))
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(Self {
            model,
            domain,
            values,
        })
    }

    /// `(base, value)` pairs in domain order.
    pub fn points(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.domain.values().zip(self.values.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
