//! Pipeline runner for composing and executing analysis steps.

use crate::data::{ColumnTable, Term};
use crate::display::{render_records, DisplayConfig};
use crate::error::{EdaError, Result};
use crate::plot::{
    column_bigram_wordcloud, BarChart, ChartRenderer, FrequentTermsSpec, TextBarRenderer,
    TextWordCloudRenderer, WordCloudRenderer, WordCloudSpec,
};
use crate::profile::{profile_corpus, CorpusProfile};
use crate::tokenize::StopwordFilter;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// A step in the analysis pipeline. Each step produces one [`Report`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PipelineStep {
    /// Print records with the pipeline's display settings.
    PrintRecords {
        /// Columns to print; all when absent.
        #[serde(default)]
        fields: Option<Vec<String>>,
        /// Print only the first rows.
        #[serde(default)]
        limit: Option<usize>,
    },
    /// Bar chart of the most frequent terms or n-grams.
    FrequentTerms(FrequentTermsSpec),
    /// Word cloud over the bigrams of a column.
    WordCloudBigrams {
        column: String,
        title: String,
        #[serde(default)]
        exclude: Option<Term>,
    },
    /// Token statistics of a column.
    ProfileCorpus { column: String },
}

/// Stop word settings, applied to frequent-term steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopwordConfig {
    /// Language list to start from (`"en"`, `"es"`, ...).
    #[serde(default)]
    pub language: Option<String>,
    /// Extra stop words.
    #[serde(default)]
    pub words: Vec<String>,
    #[serde(default)]
    pub case_sensitive: bool,
}

impl StopwordConfig {
    /// Build the filter these settings describe.
    pub fn to_filter(&self) -> Result<StopwordFilter> {
        let mut filter = match &self.language {
            Some(language) => StopwordFilter::new(language)?,
            None => StopwordFilter::empty(),
        }
        .with_case_sensitive(self.case_sensitive);
        filter.add_stopwords(&self.words);
        Ok(filter)
    }
}

/// Pipeline configuration for serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Name of the pipeline.
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Record display settings.
    #[serde(default)]
    pub display: DisplayConfig,
    /// Stop word removal for frequent-term steps.
    #[serde(default)]
    pub stopwords: Option<StopwordConfig>,
    /// Steps to execute.
    pub steps: Vec<PipelineStep>,
}

impl PipelineConfig {
    /// Load from YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(EdaError::from)
    }

    /// Save to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(EdaError::from)
    }
}

/// Output of one pipeline step.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Report {
    Records { text: String },
    Chart(BarChart),
    WordCloud(WordCloudSpec),
    Profile(CorpusProfile),
}

impl Report {
    /// Render as plain text: records as printed, charts as text bars, word
    /// clouds as their most frequent labels.
    pub fn render_text<W: Write>(&self, out: &mut W) -> Result<()> {
        match self {
            Report::Records { text } => write!(out, "{}", text)?,
            Report::Chart(chart) => TextBarRenderer::new(out).render_chart(chart)?,
            Report::WordCloud(cloud) => {
                TextWordCloudRenderer::new(out, 20).render_wordcloud(cloud)?
            }
            Report::Profile(profile) => writeln!(out, "{}", profile)?,
        }
        Ok(())
    }
}

/// Builder for constructing and running analysis pipelines.
#[derive(Debug, Clone)]
pub struct Pipeline {
    steps: Vec<PipelineStep>,
    name: String,
    display: DisplayConfig,
    stopwords: Option<StopwordConfig>,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Pipeline {
    /// Create a new empty pipeline.
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            name: "unnamed".to_string(),
            display: DisplayConfig::default(),
            stopwords: None,
        }
    }

    /// Create from a config.
    pub fn from_config(config: &PipelineConfig) -> Self {
        Self {
            steps: config.steps.clone(),
            name: config.name.clone(),
            display: config.display.clone(),
            stopwords: config.stopwords.clone(),
        }
    }

    /// Set the pipeline name.
    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Set the record display settings.
    pub fn display(mut self, display: DisplayConfig) -> Self {
        self.display = display;
        self
    }

    /// Remove stop words before counting frequent terms.
    pub fn stopwords(mut self, stopwords: StopwordConfig) -> Self {
        self.stopwords = Some(stopwords);
        self
    }

    /// Print records.
    pub fn print_records(mut self, fields: Option<Vec<String>>, limit: Option<usize>) -> Self {
        self.steps.push(PipelineStep::PrintRecords { fields, limit });
        self
    }

    /// Chart the most frequent terms.
    pub fn frequent_terms(mut self, spec: FrequentTermsSpec) -> Self {
        self.steps.push(PipelineStep::FrequentTerms(spec));
        self
    }

    /// Build a bigram word cloud.
    pub fn wordcloud_bigrams(mut self, column: &str, title: &str, exclude: Option<Term>) -> Self {
        self.steps.push(PipelineStep::WordCloudBigrams {
            column: column.to_string(),
            title: title.to_string(),
            exclude,
        });
        self
    }

    /// Profile a column.
    pub fn profile_corpus(mut self, column: &str) -> Self {
        self.steps.push(PipelineStep::ProfileCorpus {
            column: column.to_string(),
        });
        self
    }

    /// Get the steps.
    pub fn steps(&self) -> &[PipelineStep] {
        &self.steps
    }

    /// Export to a serializable config.
    pub fn to_config(&self, description: Option<&str>) -> PipelineConfig {
        PipelineConfig {
            name: self.name.clone(),
            description: description.map(String::from),
            display: self.display.clone(),
            stopwords: self.stopwords.clone(),
            steps: self.steps.clone(),
        }
    }

    /// Run every step against `table`, in order.
    pub fn run<T: ColumnTable + ?Sized>(&self, table: &T) -> Result<Vec<Report>> {
        if self.steps.is_empty() {
            return Err(EdaError::Pipeline(format!(
                "Pipeline '{}' has no steps",
                self.name
            )));
        }

        let stopwords = self
            .stopwords
            .as_ref()
            .map(StopwordConfig::to_filter)
            .transpose()?;

        log::info!(
            "Running pipeline '{}' ({} steps) on {} rows",
            self.name,
            self.steps.len(),
            table.n_rows()
        );

        self.steps
            .iter()
            .map(|step| self.apply(step, table, stopwords.as_ref()))
            .collect()
    }

    fn apply<T: ColumnTable + ?Sized>(
        &self,
        step: &PipelineStep,
        table: &T,
        stopwords: Option<&StopwordFilter>,
    ) -> Result<Report> {
        log::debug!("Applying step {:?}", step);
        let report = match step {
            PipelineStep::PrintRecords { fields, limit } => {
                let text = match limit {
                    Some(limit) => render_records(
                        &RowLimit { table, limit: *limit },
                        fields.as_deref(),
                        &self.display,
                    )?,
                    None => render_records(table, fields.as_deref(), &self.display)?,
                };
                Report::Records { text }
            }
            PipelineStep::FrequentTerms(spec) => {
                let mut analysis = spec.analysis();
                if let Some(filter) = stopwords {
                    analysis = analysis.stopwords(filter.clone());
                }
                let ranking = analysis.run(table)?;
                Report::Chart(BarChart::from_ranking(&ranking, &spec.title, spec.figure_size))
            }
            PipelineStep::WordCloudBigrams {
                column,
                title,
                exclude,
            } => Report::WordCloud(column_bigram_wordcloud(
                table,
                column,
                title,
                exclude.as_ref(),
            )?),
            PipelineStep::ProfileCorpus { column } => {
                Report::Profile(profile_corpus(table, column)?)
            }
        };
        Ok(report)
    }
}

/// The first `limit` rows of a table.
struct RowLimit<'a, T: ?Sized> {
    table: &'a T,
    limit: usize,
}

impl<T: ColumnTable + ?Sized> ColumnTable for RowLimit<'_, T> {
    fn column_names(&self) -> Vec<&str> {
        self.table.column_names()
    }

    fn n_rows(&self) -> usize {
        self.table.n_rows().min(self.limit)
    }

    fn cell(&self, row: usize, column: &str) -> Option<&crate::data::Cell> {
        if row < self.limit {
            self.table.cell(row, column)
        } else {
            None
        }
    }
}
