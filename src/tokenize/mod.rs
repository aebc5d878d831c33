//! Tokenization primitives: splitting, n-grams, stop words and POS tags.

pub mod ngrams;
pub mod pos;
pub mod split;
pub mod stopwords;

pub use ngrams::build_ngrams;
pub use pos::{filter_by_pos, parse_tagged, strip_tags, TaggedToken};
pub use split::{split_whitespace_tokens, unicode_words, Tokenizer};
pub use stopwords::{remove_stop_words, StopwordFilter};
