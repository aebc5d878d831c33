//! Exploratory Text Analysis Library
//!
//! This library provides composable primitives for exploring tokenized text
//! held in tabular records: term and n-gram frequencies with deterministic
//! top-k ranking, record printing, stop words, POS tags, and chart and
//! word-cloud specifications.
//!
//! # Overview
//!
//! The library is organized into composable modules:
//!
//! - **data**: Core data structures (Records, Cell, Term)
//! - **tokenize**: Splitting, n-grams, stop words and POS-tagged tokens
//! - **frequency**: Frequency tables, exclusion and top-k ranking
//! - **display**: Record printing with explicit display settings
//! - **plot**: Bar chart and word cloud specifications and renderers
//! - **profile**: Corpus profiling of text columns
//! - **pipeline**: Pipeline composition and execution
//!
//! # Example
//!
//! ```no_run
//! use text_eda::prelude::*;
//!
//! let reviews = Records::from_csv("reviews.csv").unwrap();
//!
//! let ranking = TermAnalysis::new("tokens")
//!     .ngram_size(2)
//!     .top_k(10)
//!     .exclude(Some(Term::parse("muy buen")))
//!     .run(&reviews)
//!     .unwrap();
//!
//! for term in &ranking.terms {
//!     println!("{}", term);
//! }
//! ```

pub mod data;
pub mod display;
pub mod error;
pub mod frequency;
pub mod pipeline;
pub mod plot;
pub mod profile;
pub mod tokenize;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::data::{Cell, ColumnTable, Records, Term};
    pub use crate::display::{print_records, render_records, DisplayConfig, Separator};
    pub use crate::error::{EdaError, Result};
    pub use crate::frequency::{
        count_frequencies, filter_excluded, top_k, FrequencyTable, RankedTerm, TermAnalysis,
        TermRanking,
    };
    pub use crate::pipeline::{Pipeline, PipelineConfig, PipelineStep, Report, StopwordConfig};
    pub use crate::plot::{
        bigram_wordcloud, column_bigram_wordcloud, frequent_terms_chart, BarChart,
        ChartRenderer, FigureSize, FrequentTermsSpec, JsonChartRenderer, JsonWordCloudRenderer,
        TextBarRenderer, TextWordCloudRenderer, WordCloudRenderer, WordCloudSpec,
    };
    pub use crate::profile::{profile_corpus, CorpusProfile};
    pub use crate::tokenize::{
        build_ngrams, filter_by_pos, parse_tagged, remove_stop_words, split_whitespace_tokens,
        strip_tags, unicode_words, StopwordFilter, TaggedToken, Tokenizer,
    };
}
