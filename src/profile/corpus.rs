//! Corpus profiling for a text column.

use crate::data::{ColumnTable, Term};
use crate::error::Result;
use crate::frequency::count_frequencies;
use serde::{Deserialize, Serialize};

/// Token statistics of one column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusProfile {
    /// Column profiled.
    pub column: String,
    /// Number of rows.
    pub n_rows: usize,
    /// Rows with a value.
    pub n_documents: usize,
    /// Rows without a value.
    pub n_missing: usize,
    /// Total tokens across documents.
    pub n_tokens: u64,
    /// Distinct tokens.
    pub vocabulary_size: usize,
    /// Tokens seen exactly once.
    pub n_hapax: usize,
    /// Mean tokens per document.
    pub mean_tokens: f64,
    /// Median tokens per document.
    pub median_tokens: f64,
    /// Shortest document, in tokens.
    pub min_tokens: usize,
    /// Longest document, in tokens.
    pub max_tokens: usize,
    /// Distinct tokens / total tokens.
    pub type_token_ratio: f64,
}

impl std::fmt::Display for CorpusProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Corpus Profile ({})", self.column)?;
        writeln!(f, "  Rows:          {}", self.n_rows)?;
        writeln!(f, "  Documents:     {}", self.n_documents)?;
        writeln!(f, "  Missing:       {}", self.n_missing)?;
        writeln!(f, "  Tokens:        {}", self.n_tokens)?;
        writeln!(f, "  Vocabulary:    {}", self.vocabulary_size)?;
        writeln!(f, "  Hapax legomena: {}", self.n_hapax)?;
        writeln!(f, "  Tokens per document:")?;
        writeln!(f, "    Mean:   {:.2}", self.mean_tokens)?;
        writeln!(f, "    Median: {:.1}", self.median_tokens)?;
        writeln!(f, "    Range:  {} - {}", self.min_tokens, self.max_tokens)?;
        writeln!(f, "  Type/token ratio: {:.3}", self.type_token_ratio)?;
        Ok(())
    }
}

/// Profile the tokens of a table column.
pub fn profile_corpus<T: ColumnTable + ?Sized>(table: &T, column: &str) -> Result<CorpusProfile> {
    let cells = table.column(column)?;
    let n_rows = cells.len();

    let documents: Vec<Vec<&str>> = cells
        .iter()
        .filter(|c| !c.is_missing())
        .map(|c| c.tokens())
        .collect();
    let n_documents = documents.len();
    let lengths: Vec<usize> = documents.iter().map(Vec::len).collect();

    let vocabulary = count_frequencies(
        documents
            .iter()
            .flat_map(|doc| doc.iter().map(|t| Term::word(*t))),
    );
    let n_tokens = vocabulary.total();

    let mean_tokens = if n_documents > 0 {
        n_tokens as f64 / n_documents as f64
    } else {
        0.0
    };
    let type_token_ratio = if n_tokens > 0 {
        vocabulary.len() as f64 / n_tokens as f64
    } else {
        0.0
    };

    Ok(CorpusProfile {
        column: column.to_string(),
        n_rows,
        n_documents,
        n_missing: n_rows - n_documents,
        n_tokens,
        vocabulary_size: vocabulary.len(),
        n_hapax: vocabulary.n_hapax(),
        mean_tokens,
        median_tokens: median(&lengths),
        min_tokens: lengths.iter().copied().min().unwrap_or(0),
        max_tokens: lengths.iter().copied().max().unwrap_or(0),
        type_token_ratio,
    })
}

fn median(values: &[usize]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let n = sorted.len();
    if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) as f64 / 2.0
    } else {
        sorted[n / 2] as f64
    }
}
