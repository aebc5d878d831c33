//! Deterministic top-k ranking.

use crate::data::Term;
use crate::error::{EdaError, Result};
use crate::frequency::table::FrequencyTable;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A term with its count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedTerm {
    pub term: Term,
    pub count: u64,
}

impl fmt::Display for RankedTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.term, self.count)
    }
}

/// The `k` most frequent terms of a table.
///
/// Sorted by count descending. Equal counts keep first-encounter order, so
/// the ranking is the same on every call. When `k` exceeds the number of
/// distinct terms every term is returned.
///
/// # Errors
/// `InvalidArgument` when `k` is negative.
pub fn top_k(table: &FrequencyTable, k: i64) -> Result<Vec<RankedTerm>> {
    let k = usize::try_from(k).map_err(|_| {
        EdaError::InvalidArgument(format!("Top-k count must be non-negative, got {}", k))
    })?;

    let mut ranked: Vec<RankedTerm> = table
        .iter()
        .map(|(term, count)| RankedTerm {
            term: term.clone(),
            count,
        })
        .collect();

    // Stable: ties stay in encounter order
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(k);

    Ok(ranked)
}
