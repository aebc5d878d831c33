//! Bar charts of the most frequent terms.

use crate::data::{ColumnTable, Term};
use crate::error::Result;
use crate::frequency::{TermAnalysis, TermRanking};
use crate::tokenize::Tokenizer;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Figure size in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FigureSize {
    pub width: f64,
    pub height: f64,
}

impl Default for FigureSize {
    fn default() -> Self {
        Self {
            width: 10.0,
            height: 6.0,
        }
    }
}

/// One bar: a label and its value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bar {
    pub label: String,
    pub value: u64,
}

/// A bar chart ready to hand to a [`ChartRenderer`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Bars in display order.
    pub bars: Vec<Bar>,
    pub figure_size: FigureSize,
    /// Rotation of the x tick labels, in degrees.
    pub x_tick_rotation: f64,
}

impl BarChart {
    /// Chart a term ranking, one bar per term.
    ///
    /// N-gram labels join their words with a space. The x axis reads
    /// `Terms` for single words and `{n}-Grams` otherwise.
    pub fn from_ranking(ranking: &TermRanking, title: &str, figure_size: FigureSize) -> Self {
        let x_label = if ranking.ngram_size == 1 {
            "Terms".to_string()
        } else {
            format!("{}-Grams", ranking.ngram_size)
        };

        Self {
            title: title.to_string(),
            x_label,
            y_label: "Frequency".to_string(),
            bars: ranking
                .terms
                .iter()
                .map(|r| Bar {
                    label: r.term.label(" "),
                    value: r.count,
                })
                .collect(),
            figure_size,
            x_tick_rotation: 45.0,
        }
    }

    /// Largest bar value (0 without bars).
    pub fn max_value(&self) -> u64 {
        self.bars.iter().map(|b| b.value).max().unwrap_or(0)
    }
}

fn default_ngram_size() -> usize {
    1
}

/// What to chart: column, number of terms, title and term options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequentTermsSpec {
    /// Column holding tokenized text.
    pub column: String,
    /// Number of terms to show.
    pub term_count: i64,
    /// Chart title.
    pub title: String,
    /// Term or n-gram to leave out.
    #[serde(default)]
    pub exclude: Option<Term>,
    /// 1 for words, 2 for bigrams, and so on.
    #[serde(default = "default_ngram_size")]
    pub ngram_size: usize,
    /// How raw text cells are tokenized.
    #[serde(default)]
    pub tokenizer: Tokenizer,
    #[serde(default)]
    pub figure_size: FigureSize,
    /// Keep only these POS tags (cells hold `word/TAG` tokens).
    #[serde(default)]
    pub pos_tags: Option<Vec<String>>,
}

impl FrequentTermsSpec {
    pub fn new(column: &str, term_count: i64, title: &str) -> Self {
        Self {
            column: column.to_string(),
            term_count,
            title: title.to_string(),
            exclude: None,
            ngram_size: 1,
            tokenizer: Tokenizer::default(),
            figure_size: FigureSize::default(),
            pos_tags: None,
        }
    }

    /// Set the n-gram size.
    pub fn ngram_size(mut self, n: usize) -> Self {
        self.ngram_size = n;
        self
    }

    /// Set the tokenizer for raw text cells.
    pub fn tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Set the excluded term.
    pub fn exclude(mut self, term: Term) -> Self {
        self.exclude = Some(term);
        self
    }

    /// The term analysis this chart is built from.
    pub fn analysis(&self) -> TermAnalysis {
        let analysis = TermAnalysis::new(&self.column)
            .ngram_size(self.ngram_size)
            .top_k(self.term_count)
            .tokenizer(self.tokenizer)
            .exclude(self.exclude.clone());
        match &self.pos_tags {
            Some(tags) => analysis.pos_tags(tags),
            None => analysis,
        }
    }
}

/// Chart the most frequent terms or n-grams of a table column.
///
/// Terms are collected row by row, the excluded term is dropped, and the
/// `term_count` most frequent are charted (ties in first-seen order).
pub fn frequent_terms_chart<T: ColumnTable + ?Sized>(
    table: &T,
    spec: &FrequentTermsSpec,
) -> Result<BarChart> {
    let ranking = spec.analysis().run(table)?;
    Ok(BarChart::from_ranking(&ranking, &spec.title, spec.figure_size))
}

/// Something that can draw a bar chart.
pub trait ChartRenderer {
    fn render_chart(&mut self, chart: &BarChart) -> Result<()>;
}

/// Draws horizontal text bars.
#[derive(Debug)]
pub struct TextBarRenderer<W: Write> {
    out: W,
    bar_width: usize,
}

impl<W: Write> TextBarRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, bar_width: 40 }
    }

    /// Width of the longest bar, in characters.
    pub fn with_bar_width(mut self, bar_width: usize) -> Self {
        self.bar_width = bar_width;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ChartRenderer for TextBarRenderer<W> {
    fn render_chart(&mut self, chart: &BarChart) -> Result<()> {
        writeln!(self.out, "{}", chart.title)?;
        writeln!(self.out, "{}", "=".repeat(chart.title.chars().count()))?;

        if chart.bars.is_empty() {
            writeln!(self.out, "(no terms)")?;
            writeln!(self.out)?;
            return Ok(());
        }

        let label_width = chart
            .bars
            .iter()
            .map(|b| b.label.chars().count())
            .chain(std::iter::once(chart.x_label.chars().count()))
            .max()
            .unwrap_or(0);
        let max_value = chart.max_value().max(1);

        writeln!(
            self.out,
            "{:<width$}  {}",
            chart.x_label,
            chart.y_label,
            width = label_width
        )?;
        for bar in &chart.bars {
            let scaled = (bar.value as f64 / max_value as f64 * self.bar_width as f64).round();
            let length = (scaled as usize).max(usize::from(bar.value > 0));
            writeln!(
                self.out,
                "{:<width$}  {} {}",
                bar.label,
                "█".repeat(length),
                bar.value,
                width = label_width
            )?;
        }
        writeln!(self.out)?;
        Ok(())
    }
}

/// Writes charts as JSON, one document per chart.
#[derive(Debug)]
pub struct JsonChartRenderer<W: Write> {
    out: W,
    pretty: bool,
}

impl<W: Write> JsonChartRenderer<W> {
    pub fn new(out: W, pretty: bool) -> Self {
        Self { out, pretty }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ChartRenderer for JsonChartRenderer<W> {
    fn render_chart(&mut self, chart: &BarChart) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.out, chart)?;
        } else {
            serde_json::to_writer(&mut self.out, chart)?;
        }
        writeln!(self.out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Cell;
    use indexmap::IndexMap;

    fn reviews() -> IndexMap<String, Vec<Cell>> {
        let mut table = IndexMap::new();
        table.insert(
            "tokens".to_string(),
            vec![
                Cell::Text("fast shipping good price".to_string()),
                Cell::Text("good price fast shipping".to_string()),
                Cell::Text("good quality".to_string()),
            ],
        );
        table
    }

    #[test]
    fn test_unigram_chart() {
        let spec = FrequentTermsSpec::new("tokens", 2, "Top words");
        let chart = frequent_terms_chart(&reviews(), &spec).unwrap();

        assert_eq!(chart.title, "Top words");
        assert_eq!(chart.x_label, "Terms");
        assert_eq!(chart.y_label, "Frequency");
        assert_eq!(chart.x_tick_rotation, 45.0);
        assert_eq!(chart.figure_size, FigureSize { width: 10.0, height: 6.0 });
        assert_eq!(
            chart.bars,
            vec![
                Bar { label: "good".to_string(), value: 3 },
                Bar { label: "fast".to_string(), value: 2 },
            ]
        );
    }

    #[test]
    fn test_bigram_chart_with_exclusion() {
        let spec = FrequentTermsSpec::new("tokens", 3, "Top bigrams")
            .ngram_size(2)
            .exclude(Term::parse("fast shipping"));
        let chart = frequent_terms_chart(&reviews(), &spec).unwrap();

        assert_eq!(chart.x_label, "2-Grams");
        let labels: Vec<&str> = chart.bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["good price", "shipping good", "price fast"]);
        assert_eq!(chart.bars[0].value, 2);
    }

    #[test]
    fn test_unicode_tokenizer_merges_punctuated_words() {
        let mut table: IndexMap<String, Vec<Cell>> = IndexMap::new();
        table.insert(
            "review".to_string(),
            vec![
                Cell::Text("Fast shipping. Good price!".to_string()),
                Cell::Text("good price, fast shipping".to_string()),
            ],
        );
        let spec = FrequentTermsSpec::new("review", 2, "Top bigrams")
            .ngram_size(2)
            .tokenizer(Tokenizer::UnicodeWords);
        let chart = frequent_terms_chart(&table, &spec).unwrap();

        let labels: Vec<&str> = chart.bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["fast shipping", "good price"]);
        assert_eq!(chart.bars[0].value, 2);
        assert_eq!(chart.bars[1].value, 2);
    }

    #[test]
    fn test_tokenizer_defaults_to_whitespace_in_yaml() {
        let spec: FrequentTermsSpec =
            serde_yaml::from_str("column: review\nterm_count: 5\ntitle: Words\n").unwrap();
        assert_eq!(spec.tokenizer, Tokenizer::Whitespace);

        let spec: FrequentTermsSpec = serde_yaml::from_str(
            "column: review\nterm_count: 5\ntitle: Words\ntokenizer: unicode_words\n",
        )
        .unwrap();
        assert_eq!(spec.tokenizer, Tokenizer::UnicodeWords);
    }

    #[test]
    fn test_empty_chart_renders() {
        let mut table: IndexMap<String, Vec<Cell>> = IndexMap::new();
        table.insert("tokens".to_string(), vec![]);
        let chart =
            frequent_terms_chart(&table, &FrequentTermsSpec::new("tokens", 5, "Nothing")).unwrap();
        assert!(chart.bars.is_empty());

        let mut renderer = TextBarRenderer::new(Vec::new());
        renderer.render_chart(&chart).unwrap();
        let out = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(out.contains("(no terms)"));
    }

    #[test]
    fn test_text_renderer_scales_bars() {
        let chart = frequent_terms_chart(
            &reviews(),
            &FrequentTermsSpec::new("tokens", 3, "Words"),
        )
        .unwrap();

        let mut renderer = TextBarRenderer::new(Vec::new()).with_bar_width(6);
        renderer.render_chart(&chart).unwrap();
        let out = String::from_utf8(renderer.into_inner()).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "Words");
        assert_eq!(lines[1], "=====");
        assert_eq!(lines[2], "Terms     Frequency");
        assert_eq!(lines[3], "good      ██████ 3");
        assert_eq!(lines[4], "fast      ████ 2");
        assert_eq!(lines[5], "shipping  ████ 2");
    }

    #[test]
    fn test_json_renderer() {
        let chart = frequent_terms_chart(
            &reviews(),
            &FrequentTermsSpec::new("tokens", 1, "Words"),
        )
        .unwrap();

        let mut renderer = JsonChartRenderer::new(Vec::new(), false);
        renderer.render_chart(&chart).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&renderer.into_inner()).unwrap();
        assert_eq!(value["bars"][0]["label"], "good");
        assert_eq!(value["bars"][0]["value"], 3);
        assert_eq!(value["x_tick_rotation"], 45.0);
    }
}
