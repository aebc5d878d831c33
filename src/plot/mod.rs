//! Chart and word-cloud specifications plus the renderers that consume them.
//!
//! Building a specification is pure; drawing is delegated to a
//! [`ChartRenderer`] or [`WordCloudRenderer`].

pub mod chart;
pub mod wordcloud;

pub use chart::{
    frequent_terms_chart, Bar, BarChart, ChartRenderer, FigureSize, FrequentTermsSpec,
    JsonChartRenderer, TextBarRenderer,
};
pub use wordcloud::{
    bigram_wordcloud, column_bigram_wordcloud, JsonWordCloudRenderer, TextWordCloudRenderer,
    WordCloudRenderer, WordCloudSpec,
};
