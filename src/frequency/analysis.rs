//! Column-level term analysis: tokens -> n-grams -> exclusion -> counts -> top-k.

use crate::data::{ColumnTable, Term};
use crate::error::{EdaError, Result};
use crate::frequency::{count_frequencies, filter_excluded, RankedTerm};
use crate::tokenize::{
    build_ngrams, filter_by_pos, parse_tagged, remove_stop_words, StopwordFilter, Tokenizer,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Builder for ranking the terms of one table column.
///
/// Each row's tokens are windowed separately, so n-grams never span two
/// rows. Terms are collected in row order, which fixes the tie-break order
/// of the ranking.
#[derive(Debug, Clone)]
pub struct TermAnalysis {
    column: String,
    ngram_size: usize,
    top_k: i64,
    tokenizer: Tokenizer,
    exclude: Option<Term>,
    stopwords: Option<StopwordFilter>,
    pos_tags: Option<Vec<String>>,
}

impl TermAnalysis {
    /// Analyse `column`, ranking the 20 most frequent unigrams.
    pub fn new(column: &str) -> Self {
        Self {
            column: column.to_string(),
            ngram_size: 1,
            top_k: 20,
            tokenizer: Tokenizer::default(),
            exclude: None,
            stopwords: None,
            pos_tags: None,
        }
    }

    /// Set the n-gram size (1 for words, 2 for bigrams, ...).
    pub fn ngram_size(mut self, n: usize) -> Self {
        self.ngram_size = n;
        self
    }

    /// Set how many terms to keep.
    pub fn top_k(mut self, k: i64) -> Self {
        self.top_k = k;
        self
    }

    /// Set how raw text cells are tokenized.
    pub fn tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Exclude one term or n-gram from the counts.
    pub fn exclude(mut self, term: Option<Term>) -> Self {
        self.exclude = term;
        self
    }

    /// Remove stop words from each row before windowing.
    pub fn stopwords(mut self, filter: StopwordFilter) -> Self {
        self.stopwords = Some(filter);
        self
    }

    /// Treat cells as `word/TAG` tokens and keep only the given tags.
    pub fn pos_tags<S: AsRef<str>>(mut self, tags: &[S]) -> Self {
        self.pos_tags = Some(tags.iter().map(|t| t.as_ref().to_string()).collect());
        self
    }

    /// Run the analysis on a table.
    pub fn run<T: ColumnTable + ?Sized>(&self, table: &T) -> Result<TermRanking> {
        if self.ngram_size == 0 {
            return Err(EdaError::InvalidArgument(
                "N-gram size must be at least 1".to_string(),
            ));
        }
        if self.top_k < 0 {
            return Err(EdaError::InvalidArgument(format!(
                "Top-k count must be non-negative, got {}",
                self.top_k
            )));
        }

        let cells = table.column(&self.column)?;
        let n_documents = cells.iter().filter(|c| !c.is_missing()).count();

        let mut terms = Vec::new();
        for cell in &cells {
            let tokens = self.prepare_tokens(self.tokenizer.cell_tokens(cell))?;
            terms.extend(build_ngrams(&tokens, self.ngram_size)?);
        }
        let terms = filter_excluded(terms, self.exclude.as_ref());

        let table = count_frequencies(terms);
        let ranked = table.top_k(self.top_k)?;

        log::debug!(
            "Ranked {} of {} distinct {}-grams in column '{}'",
            ranked.len(),
            table.len(),
            self.ngram_size,
            self.column
        );

        Ok(TermRanking {
            column: self.column.clone(),
            ngram_size: self.ngram_size,
            n_documents,
            total_terms: table.total(),
            distinct_terms: table.len(),
            terms: ranked,
        })
    }

    fn prepare_tokens(&self, tokens: Vec<String>) -> Result<Vec<String>> {
        let mut tokens = match &self.pos_tags {
            Some(tags) => filter_by_pos(&parse_tagged(&tokens)?, tags),
            None => tokens,
        };
        if let Some(filter) = &self.stopwords {
            tokens = remove_stop_words(&tokens, filter);
        }
        Ok(tokens)
    }
}

/// Ranked terms of one column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermRanking {
    /// Column the terms came from.
    pub column: String,
    /// N-gram size.
    pub ngram_size: usize,
    /// Non-missing cells in the column.
    pub n_documents: usize,
    /// Terms counted after exclusion.
    pub total_terms: u64,
    /// Distinct terms counted.
    pub distinct_terms: usize,
    /// Top terms, most frequent first.
    pub terms: Vec<RankedTerm>,
}

impl TermRanking {
    /// Term labels, words joined by a space.
    pub fn labels(&self) -> Vec<String> {
        self.terms.iter().map(|r| r.term.label(" ")).collect()
    }

    /// Counts, aligned with [`labels`](Self::labels).
    pub fn counts(&self) -> Vec<u64> {
        self.terms.iter().map(|r| r.count).collect()
    }
}

impl fmt::Display for TermRanking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Top {}-grams in '{}'", self.ngram_size, self.column)?;
        writeln!(f, "  Documents:      {}", self.n_documents)?;
        writeln!(f, "  Terms counted:  {}", self.total_terms)?;
        writeln!(f, "  Distinct terms: {}", self.distinct_terms)?;
        for (rank, r) in self.terms.iter().enumerate() {
            writeln!(f, "  {:>3}. {}", rank + 1, r)?;
        }
        Ok(())
    }
}
