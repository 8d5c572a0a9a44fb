//! Build-and-check runs comparing the tree median with the sorted reference.

use serde::Serialize;
use tracing::{info, warn};

use crate::avl::{AvlTree, TreeSnapshot};
use crate::fuzzer::Fuzzer;
use crate::median::{reference_median, MedianError};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioReport {
    /// Input values in insertion order.
    pub input: Vec<i32>,
    pub tree: TreeSnapshot,
    pub median: f64,
    pub reference: f64,
}

impl ScenarioReport {
    pub fn succeeded(&self) -> bool {
        self.median == self.reference
    }
}

/// Builds a tree from `values` and checks its median against the reference.
pub fn run_scenario(values: &[i32]) -> Result<ScenarioReport, MedianError> {
    let tree = AvlTree::from_values(values.iter().copied());
    let median = tree.median()?;
    let reference = reference_median(values)?;
    let report = ScenarioReport {
        input: values.to_vec(),
        tree: tree.snapshot(),
        median,
        reference,
    };
    if report.succeeded() {
        info!(elements = tree.element_count(), median, "scenario succeeded");
    } else {
        warn!(median, reference, "median disagrees with reference");
    }
    Ok(report)
}

/// Runs `tests` scenarios of `len` random distinct values each.
pub fn run_random(
    fuzzer: &mut Fuzzer,
    tests: usize,
    len: usize,
) -> Result<Vec<ScenarioReport>, MedianError> {
    info!(seed = fuzzer.seed, tests, len, "running random scenarios");
    (0..tests)
        .map(|_| run_scenario(&fuzzer.unique_values(len)))
        .collect()
}
