//! Scaling report: evaluates both growth models over a domain

use std::io::Write;

use tracing::{debug, info};

use crate::application::{ApplicationResult, IoResultExt};
use crate::domain::{Domain, GrowthModel, Series};

/// Both series computed over the same domain.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalingReport {
    pub domain: Domain,
    /// Factorial ("all permutations") series.
    pub naive: Series,
    /// Recurrence ("tree search") series.
    pub tree: Series,
}

impl ScalingReport {
    /// Evaluate every model once per base.
    pub fn compute(domain: Domain) -> ApplicationResult<Self> {
        info!(
            "computing series over bases {}..={}",
            domain.start(),
            domain.end()
        );
        let naive = Series::evaluate(GrowthModel::AllPermutations, domain)?;
        let tree = Series::evaluate(GrowthModel::TreeSearch, domain)?;
        debug!("naive: {:?}", naive.values);
        debug!("tree: {:?}", tree.values);
        Ok(Self {
            domain,
            naive,
            tree,
        })
    }

    /// Series in legend order.
    pub fn series(&self) -> [&Series; 2] {
        [&self.naive, &self.tree]
    }

    /// Write one `(base, tree value)` line per base, ascending, no header.
    pub fn write_pairs<W: Write>(&self, out: &mut W) -> ApplicationResult<()> {
        for (base, value) in self.tree.points() {
            writeln!(out, "({}, {:?})", base, value).with_context("write report line")?;
        }
        out.flush().with_context("flush report")
    }
}
