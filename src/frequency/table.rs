//! Frequency tables keyed by term.

use crate::data::Term;
use crate::error::Result;
use crate::frequency::rank::{top_k, RankedTerm};
use indexmap::IndexMap;

/// Counts per term, remembering the order in which terms were first seen.
///
/// Every present term has a count of at least 1; absent terms count 0.
/// Build one with [`count_frequencies`] or by collecting terms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: IndexMap<Term, u64>,
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count for a term (0 if absent).
    pub fn get(&self, term: &Term) -> u64 {
        self.counts.get(term).copied().unwrap_or(0)
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Terms with their counts, in first-encounter order.
    pub fn iter(&self) -> impl Iterator<Item = (&Term, u64)> + '_ {
        self.counts.iter().map(|(term, &count)| (term, count))
    }

    /// Number of terms seen exactly once.
    pub fn n_hapax(&self) -> usize {
        self.counts.values().filter(|&&c| c == 1).count()
    }

    /// The `k` most frequent terms. See [`top_k`].
    pub fn top_k(&self, k: i64) -> Result<Vec<RankedTerm>> {
        top_k(self, k)
    }

    /// Counts keyed by term labels joined with `separator`.
    ///
    /// Terms that render to the same label are merged. Order follows the
    /// first encounter of each label.
    pub fn labelled(&self, separator: &str) -> IndexMap<String, u64> {
        let mut labelled: IndexMap<String, u64> = IndexMap::with_capacity(self.len());
        for (term, count) in self.iter() {
            *labelled.entry(term.label(separator)).or_insert(0) += count;
        }
        labelled
    }

    fn increment(&mut self, term: Term) {
        *self.counts.entry(term).or_insert(0) += 1;
    }
}

impl FromIterator<Term> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        let mut table = Self::new();
        for term in iter {
            table.increment(term);
        }
        table
    }
}

/// Count terms in input order.
pub fn count_frequencies<I: IntoIterator<Item = Term>>(terms: I) -> FrequencyTable {
    terms.into_iter().collect()
}
