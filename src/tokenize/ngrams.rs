//! Sliding-window n-grams over token sequences.

use crate::data::Term;
use crate::error::{EdaError, Result};

/// Build the n-grams of a token sequence.
///
/// For `n == 1` every token becomes a one-word term, in order. For `n > 1`
/// the result is every contiguous window of `n` tokens, sliding by one.
/// Sequences shorter than `n` produce no n-grams.
///
/// # Arguments
/// * `tokens` - Ordered tokens
/// * `n` - Window length, at least 1
///
/// # Returns
/// `max(0, tokens.len() - n + 1)` terms.
pub fn build_ngrams<S: AsRef<str>>(tokens: &[S], n: usize) -> Result<Vec<Term>> {
    if n == 0 {
        return Err(EdaError::InvalidArgument(
            "N-gram size must be at least 1".to_string(),
        ));
    }

    let ngrams = if n == 1 {
        tokens.iter().map(|t| Term::word(as_str(t))).collect()
    } else {
        tokens
            .windows(n)
            .map(|window| Term::from_words(window.iter().map(as_str)))
            .collect()
    };

    Ok(ngrams)
}

fn as_str<S: AsRef<str>>(token: &S) -> &str {
    token.as_ref()
}
