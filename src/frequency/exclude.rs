//! Removal of a single excluded term.

use crate::data::Term;

/// Remove every occurrence of `excluded` from `terms`.
///
/// Only one value is excluded; `None` leaves the terms untouched.
pub fn filter_excluded(terms: Vec<Term>, excluded: Option<&Term>) -> Vec<Term> {
    match excluded {
        Some(excluded) => terms.into_iter().filter(|t| t != excluded).collect(),
        None => terms,
    }
}
