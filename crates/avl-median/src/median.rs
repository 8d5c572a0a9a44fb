//! Order-statistics median over an in-order walk.
//!
//! The walk keeps a running 1-based rank and only collects the one or two
//! central values; it stops descending as soon as they are all held.

use thiserror::Error;
use tracing::debug;

use crate::types::ValueNode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MedianError {
    #[error("median of an empty tree is undefined")]
    EmptyTree,
    /// The element counter claims more values than the tree holds.
    #[error("tree holds {found} values, expected {expected}")]
    CountMismatch { expected: usize, found: usize },
}

/// The central value(s) of an ascending sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CentralValues {
    /// Odd count: the single middle value.
    One(i32),
    /// Even count: the lower and upper middle values.
    Two(i32, i32),
}

impl CentralValues {
    pub fn median(self) -> f64 {
        match self {
            CentralValues::One(v) => f64::from(v),
            CentralValues::Two(a, b) => (f64::from(a) + f64::from(b)) / 2.0,
        }
    }
}

/// 1-based ranks of the central values for `elements` values.
///
/// Both ranks are equal when `elements` is odd.
fn central_ranks(elements: usize) -> (usize, usize) {
    let position = elements / 2 + 1;
    if elements % 2 == 1 {
        (position, position)
    } else {
        (position - 1, position)
    }
}

fn collect<N: ValueNode>(
    arena: &[N],
    node: Option<u32>,
    ranks: (usize, usize),
    needed: usize,
    rank: &mut usize,
    out: &mut Vec<i32>,
) {
    let Some(i) = node else {
        return;
    };
    if out.len() == needed {
        return;
    }
    let n = &arena[i as usize];
    collect(arena, n.l(), ranks, needed, rank, out);
    if out.len() == needed {
        return;
    }
    *rank += 1;
    if *rank == ranks.0 || *rank == ranks.1 {
        out.push(n.value());
    }
    collect(arena, n.r(), ranks, needed, rank, out);
}

/// Collects the central value(s) of the tree at `root` holding `elements`
/// nodes.
pub fn central_values<N: ValueNode>(
    arena: &[N],
    root: Option<u32>,
    elements: usize,
) -> Result<CentralValues, MedianError> {
    if elements == 0 {
        return Err(MedianError::EmptyTree);
    }
    let ranks = central_ranks(elements);
    let needed = 2 - elements % 2;
    let mut rank = 0;
    let mut out = Vec::with_capacity(needed);
    collect(arena, root, ranks, needed, &mut rank, &mut out);
    debug!(elements, visited = rank, ?out, "collected central values");

    match out[..] {
        [v] => Ok(CentralValues::One(v)),
        [a, b] => Ok(CentralValues::Two(a, b)),
        _ => Err(MedianError::CountMismatch {
            expected: elements,
            found: rank,
        }),
    }
}

/// Median of the tree at `root` holding `elements` nodes.
pub fn median<N: ValueNode>(
    arena: &[N],
    root: Option<u32>,
    elements: usize,
) -> Result<f64, MedianError> {
    central_values(arena, root, elements).map(CentralValues::median)
}

/// Ground-truth median: sorts the values, collapses duplicates and applies
/// the same odd/even rule.
pub fn reference_median(values: &[i32]) -> Result<f64, MedianError> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    let len = sorted.len();
    if len == 0 {
        return Err(MedianError::EmptyTree);
    }
    let mid = len / 2;
    let central = if len % 2 == 1 {
        CentralValues::One(sorted[mid])
    } else {
        CentralValues::Two(sorted[mid - 1], sorted[mid])
    };
    Ok(central.median())
}
