//! Terms: single words or fixed-length word tuples (n-grams).

use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered tuple of one or more words.
///
/// A unigram is a one-word term. Equality, ordering and hashing are by value,
/// so `("a", "b")` and `("a", "b")` collected from different rows count as
/// the same term.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Term(Vec<String>);

impl Term {
    /// A single-word term.
    pub fn word(word: impl Into<String>) -> Self {
        Self(vec![word.into()])
    }

    /// Build a term from an ordered sequence of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(words.into_iter().map(Into::into).collect())
    }

    /// Parse a term from whitespace-separated words.
    ///
    /// `"great product"` becomes the bigram `("great", "product")`.
    pub fn parse(text: &str) -> Self {
        Self::from_words(text.split_whitespace())
    }

    /// The words of this term, in order.
    pub fn words(&self) -> &[String] {
        &self.0
    }

    /// Number of words (the n of the n-gram).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for a term with no words.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Join the words with `separator`.
    pub fn label(&self, separator: &str) -> String {
        self.0.join(separator)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label(" "))
    }
}

impl<const N: usize> From<[&str; N]> for Term {
    fn from(words: [&str; N]) -> Self {
        Self::from_words(words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_on_whitespace() {
        let term = Term::parse("  great   product ");
        assert_eq!(term.words(), &["great", "product"]);
        assert_eq!(term.len(), 2);
    }

    #[test]
    fn test_label_and_display() {
        let term = Term::from(["new", "york", "city"]);
        assert_eq!(term.label("_"), "new_york_city");
        assert_eq!(term.to_string(), "new york city");
    }

    #[test]
    fn test_value_equality() {
        assert_eq!(Term::word("a"), Term::from(["a"]));
        assert_ne!(Term::from(["a", "b"]), Term::from(["b", "a"]));
    }
}
