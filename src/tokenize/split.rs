//! Splitting raw text into tokens.

use crate::data::Cell;
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// How raw text cells are split into tokens.
///
/// Pre-tokenized cells keep their stored tokens whichever is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tokenizer {
    /// Split on whitespace; punctuation and case are kept.
    #[default]
    Whitespace,
    /// Unicode word boundaries, lowercased, punctuation dropped.
    UnicodeWords,
}

impl Tokenizer {
    /// Tokens of a raw text.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        match self {
            Tokenizer::Whitespace => split_whitespace_tokens(text),
            Tokenizer::UnicodeWords => unicode_words(text, true),
        }
    }

    /// Tokens of a cell: stored tokens as-is, text through this tokenizer,
    /// nothing for a missing cell.
    pub fn cell_tokens(&self, cell: &Cell) -> Vec<String> {
        match cell {
            Cell::Text(text) => self.tokenize(text),
            Cell::Tokens(tokens) => tokens.clone(),
            Cell::Missing => Vec::new(),
        }
    }
}

/// Split on runs of whitespace. Punctuation stays attached to words.
pub fn split_whitespace_tokens(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Split on Unicode word boundaries, dropping punctuation and whitespace.
///
/// With `lowercase`, tokens are lowercased.
pub fn unicode_words(text: &str, lowercase: bool) -> Vec<String> {
    text.unicode_words()
        .map(|w| if lowercase { w.to_lowercase() } else { w.to_string() })
        .collect()
}
