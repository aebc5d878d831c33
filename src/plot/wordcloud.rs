//! Word clouds over bigram frequencies.
//!
//! Layout is left to the renderer; this module only prepares frequencies and
//! the fixed rendering settings.

use crate::data::{ColumnTable, Term};
use crate::error::Result;
use crate::frequency::{count_frequencies, filter_excluded};
use crate::tokenize::{build_ngrams, split_whitespace_tokens};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::io::Write;

pub const WORDCLOUD_WIDTH: u32 = 800;
pub const WORDCLOUD_HEIGHT: u32 = 400;
pub const WORDCLOUD_BACKGROUND: &str = "white";
pub const WORDCLOUD_COLORMAP: &str = "cividis";

/// Joins the words of a bigram into one cloud label.
const BIGRAM_JOINER: &str = "_";

/// A word cloud ready to hand to a [`WordCloudRenderer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCloudSpec {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub background_color: String,
    pub colormap: String,
    /// Label -> frequency, in first-seen order.
    pub frequencies: IndexMap<String, u64>,
}

impl WordCloudSpec {
    /// A cloud with the standard 800x400 white/cividis settings.
    pub fn new(title: &str, frequencies: IndexMap<String, u64>) -> Self {
        Self {
            title: title.to_string(),
            width: WORDCLOUD_WIDTH,
            height: WORDCLOUD_HEIGHT,
            background_color: WORDCLOUD_BACKGROUND.to_string(),
            colormap: WORDCLOUD_COLORMAP.to_string(),
            frequencies,
        }
    }

    /// Labels sorted by frequency, ties in first-seen order.
    pub fn most_frequent(&self, n: usize) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self
            .frequencies
            .iter()
            .map(|(label, &count)| (label.as_str(), count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(n);
        entries
    }
}

/// Bigram word cloud of a whole text.
///
/// The text is split on whitespace, bigrams equal to `exclude` are dropped
/// and each remaining bigram is labelled `first_second`.
pub fn bigram_wordcloud(text: &str, title: &str, exclude: Option<&Term>) -> Result<WordCloudSpec> {
    let tokens = split_whitespace_tokens(text);
    let bigrams = filter_excluded(build_ngrams(&tokens, 2)?, exclude);
    let table = count_frequencies(bigrams);

    log::debug!("Word cloud '{}' has {} distinct bigrams", title, table.len());
    Ok(WordCloudSpec::new(title, table.labelled(BIGRAM_JOINER)))
}

/// Bigram word cloud of a table column.
///
/// Cells are joined with spaces into one text first, as if the column were a
/// single document.
pub fn column_bigram_wordcloud<T: ColumnTable + ?Sized>(
    table: &T,
    column: &str,
    title: &str,
    exclude: Option<&Term>,
) -> Result<WordCloudSpec> {
    let text = table
        .column(column)?
        .iter()
        .filter(|c| !c.is_missing())
        .map(|c| c.joined_text())
        .collect::<Vec<_>>()
        .join(" ");
    bigram_wordcloud(&text, title, exclude)
}

/// Something that can draw a word cloud.
pub trait WordCloudRenderer {
    fn render_wordcloud(&mut self, spec: &WordCloudSpec) -> Result<()>;
}

/// Writes word clouds as JSON for an external renderer.
#[derive(Debug)]
pub struct JsonWordCloudRenderer<W: Write> {
    out: W,
    pretty: bool,
}

impl<W: Write> JsonWordCloudRenderer<W> {
    pub fn new(out: W, pretty: bool) -> Self {
        Self { out, pretty }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> WordCloudRenderer for JsonWordCloudRenderer<W> {
    fn render_wordcloud(&mut self, spec: &WordCloudSpec) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.out, spec)?;
        } else {
            serde_json::to_writer(&mut self.out, spec)?;
        }
        writeln!(self.out)?;
        Ok(())
    }
}

/// Lists the most frequent cloud labels as text.
#[derive(Debug)]
pub struct TextWordCloudRenderer<W: Write> {
    out: W,
    limit: usize,
}

impl<W: Write> TextWordCloudRenderer<W> {
    pub fn new(out: W, limit: usize) -> Self {
        Self { out, limit }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> WordCloudRenderer for TextWordCloudRenderer<W> {
    fn render_wordcloud(&mut self, spec: &WordCloudSpec) -> Result<()> {
        writeln!(self.out, "{}", spec.title)?;
        writeln!(self.out, "{}", "=".repeat(spec.title.chars().count()))?;
        writeln!(
            self.out,
            "{} labels ({}x{}, {} on {})",
            spec.frequencies.len(),
            spec.width,
            spec.height,
            spec.colormap,
            spec.background_color
        )?;
        for (label, count) in spec.most_frequent(self.limit) {
            writeln!(self.out, "  {} {}", label, count)?;
        }
        writeln!(self.out)?;
        Ok(())
    }
}
