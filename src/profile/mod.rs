//! Data profiling primitives for understanding text columns.

mod corpus;

pub use corpus::{profile_corpus, CorpusProfile};
