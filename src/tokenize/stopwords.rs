//! Stop word removal.
//!
//! Lists come from the `stop-words` crate; custom lists can be used instead
//! of, or on top of, a language list.

use crate::error::{EdaError, Result};
use std::collections::HashSet;
use stop_words::{get, LANGUAGE};

/// A set of words to drop from token sequences.
///
/// Words are stored as given, with a lowercased copy for case-insensitive
/// lookups, so the case mode can be changed at any point without losing
/// the original spelling.
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    /// Stop words as added.
    stopwords: HashSet<String>,
    /// Lowercased stop words.
    folded: HashSet<String>,
    /// Whether lookups are case-sensitive.
    case_sensitive: bool,
}

impl StopwordFilter {
    /// Create a filter for a language code or name (`"es"`, `"english"`).
    ///
    /// Supported: en, es, de, fr, it, pt, nl, ru, sv, no, da, fi, hu, tr,
    /// pl, ar.
    pub fn new(language: &str) -> Result<Self> {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "es" | "spanish" => LANGUAGE::Spanish,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "hu" | "hungarian" => LANGUAGE::Hungarian,
            "tr" | "turkish" => LANGUAGE::Turkish,
            "pl" | "polish" => LANGUAGE::Polish,
            "ar" | "arabic" => LANGUAGE::Arabic,
            other => {
                return Err(EdaError::InvalidArgument(format!(
                    "Unsupported stop word language '{}'",
                    other
                )))
            }
        };

        let words: Vec<String> = get(lang).iter().map(|w| w.to_string()).collect();
        Ok(Self::from_list(&words))
    }

    /// Create an empty filter (no filtering).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a filter from a custom list.
    pub fn from_list<S: AsRef<str>>(words: &[S]) -> Self {
        let mut filter = Self::empty();
        filter.add_stopwords(words);
        filter
    }

    /// Set case sensitivity. Applies to every word, whenever it was added.
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Add words to the filter.
    pub fn add_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            let word = word.as_ref();
            self.folded.insert(word.to_lowercase());
            self.stopwords.insert(word.to_string());
        }
    }

    /// Remove words from the filter.
    ///
    /// A case-insensitive filter drops every spelling of each word.
    pub fn remove_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            let word = word.as_ref();
            if self.case_sensitive {
                self.stopwords.remove(word);
            } else {
                let lowered = word.to_lowercase();
                self.stopwords.retain(|w| w.to_lowercase() != lowered);
            }
        }
        self.folded = self.stopwords.iter().map(|w| w.to_lowercase()).collect();
    }

    /// Check if a word is a stop word.
    pub fn is_stopword(&self, word: &str) -> bool {
        if self.case_sensitive {
            self.stopwords.contains(word)
        } else {
            self.folded.contains(&word.to_lowercase())
        }
    }

    /// Number of stop words, counting each spelling once.
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty.
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}

/// Keep the tokens that are not stop words, in their original order.
pub fn remove_stop_words<S: AsRef<str>>(tokens: &[S], filter: &StopwordFilter) -> Vec<String> {
    tokens
        .iter()
        .map(|t| t.as_ref())
        .filter(|t| !filter.is_stopword(t))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_stopwords() {
        let filter = StopwordFilter::new("en").unwrap();

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("The"));
        assert!(!filter.is_stopword("delivery"));
    }

    #[test]
    fn test_spanish_stopwords() {
        let filter = StopwordFilter::new("spanish").unwrap();

        assert!(filter.is_stopword("de"));
        assert!(filter.is_stopword("que"));
        assert!(!filter.is_stopword("producto"));
    }

    #[test]
    fn test_unknown_language() {
        assert!(matches!(
            StopwordFilter::new("klingon"),
            Err(EdaError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_custom_stopwords() {
        let mut filter = StopwordFilter::from_list(&["custom", "Words"]);

        assert!(filter.is_stopword("custom"));
        assert!(filter.is_stopword("words"));
        assert!(!filter.is_stopword("the"));

        filter.add_stopwords(&["extra"]);
        assert!(filter.is_stopword("extra"));

        filter.remove_stopwords(&["custom"]);
        assert!(!filter.is_stopword("custom"));
        assert_eq!(filter.len(), 2);
    }

    #[test]
    fn test_case_sensitive() {
        let filter = StopwordFilter::from_list(&["the"]).with_case_sensitive(true);
        assert!(filter.is_stopword("the"));
        assert!(!filter.is_stopword("The"));

        let mut filter = StopwordFilter::empty().with_case_sensitive(true);
        filter.add_stopwords(&["Muy"]);
        assert!(filter.is_stopword("Muy"));
        assert!(!filter.is_stopword("muy"));
    }

    #[test]
    fn test_case_mode_set_after_adding_words() {
        let filter = StopwordFilter::from_list(&["Muy"]).with_case_sensitive(true);
        assert!(filter.is_stopword("Muy"));
        assert!(!filter.is_stopword("muy"));

        let filter = filter.with_case_sensitive(false);
        assert!(filter.is_stopword("Muy"));
        assert!(filter.is_stopword("muy"));
    }

    #[test]
    fn test_remove_ignores_case_unless_case_sensitive() {
        let mut filter = StopwordFilter::from_list(&["Muy", "muy", "buen"]);
        filter.remove_stopwords(&["MUY"]);
        assert!(!filter.is_stopword("muy"));
        assert_eq!(filter.len(), 1);

        let mut filter = StopwordFilter::from_list(&["Muy", "muy"]).with_case_sensitive(true);
        filter.remove_stopwords(&["muy"]);
        assert!(filter.is_stopword("Muy"));
        assert!(!filter.is_stopword("muy"));
    }

    #[test]
    fn test_remove_stop_words_keeps_order() {
        let filter = StopwordFilter::from_list(&["the", "a", "is"]);
        let tokens = ["The", "battery", "is", "a", "disaster", "the", "end"];
        assert_eq!(
            remove_stop_words(&tokens, &filter),
            vec!["battery", "disaster", "end"]
        );
    }

    #[test]
    fn test_empty_filter_is_noop() {
        let filter = StopwordFilter::empty();
        assert!(filter.is_empty());
        assert_eq!(remove_stop_words(&["a", "b"], &filter), vec!["a", "b"]);
    }
}
