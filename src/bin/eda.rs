//! EDA - Exploratory Text Analysis CLI
//!
//! Command-line interface for term frequencies, record printing and word clouds.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use text_eda::data::{ColumnTable, Records, Term};
use text_eda::display::{print_records, DisplayConfig, Separator};
use text_eda::error::Result;
use text_eda::frequency::TermAnalysis;
use text_eda::pipeline::{Pipeline, PipelineConfig, StopwordConfig};
use text_eda::plot::{
    bigram_wordcloud, column_bigram_wordcloud, BarChart, ChartRenderer, FigureSize,
    FrequentTermsSpec, JsonChartRenderer, JsonWordCloudRenderer, TextBarRenderer,
    TextWordCloudRenderer, WordCloudRenderer,
};
use text_eda::profile::profile_corpus;
use text_eda::tokenize::{StopwordFilter, Tokenizer};

/// CLI-friendly tokenizer choice
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliTokenizer {
    /// Split raw text on whitespace
    Whitespace,
    /// Unicode word boundaries, lowercased, punctuation dropped
    Unicode,
}

impl From<CliTokenizer> for Tokenizer {
    fn from(tokenizer: CliTokenizer) -> Self {
        match tokenizer {
            CliTokenizer::Whitespace => Tokenizer::Whitespace,
            CliTokenizer::Unicode => Tokenizer::UnicodeWords,
        }
    }
}

/// Output format for charts, clouds and reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
    /// YAML
    Yaml,
}

/// Exploratory Text Analysis
#[derive(Parser)]
#[command(name = "eda")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print records field by field
    Print {
        /// Path to a CSV or TSV file
        #[arg(short, long)]
        input: PathBuf,

        /// Comma-separated columns to print (default: all)
        #[arg(short, long, value_delimiter = ',')]
        fields: Option<Vec<String>>,

        /// Wrap width for long values
        #[arg(long, default_value = "100")]
        wrap_width: usize,

        /// Truncate values instead of wrapping them
        #[arg(long)]
        truncate: bool,

        /// Maximum value width when truncating
        #[arg(long, default_value = "50")]
        max_colwidth: usize,

        /// Separator character printed after each record
        #[arg(long, default_value = "-")]
        sep_char: char,

        /// Separator length
        #[arg(long, default_value = "100")]
        sep_count: usize,

        /// Print only the first N records
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Rank the most frequent terms or n-grams of a column
    Top {
        /// Path to a CSV or TSV file
        #[arg(short, long)]
        input: PathBuf,

        /// Column holding tokens or text
        #[arg(short, long)]
        column: String,

        /// Number of terms to show (default: 20)
        #[arg(short = 'k', long, default_value = "20", allow_hyphen_values = true)]
        count: i64,

        /// N-gram size (default: 1)
        #[arg(short = 'n', long, default_value = "1")]
        ngram: usize,

        /// Term or n-gram to exclude, words separated by spaces
        #[arg(short, long)]
        exclude: Option<String>,

        /// Chart title
        #[arg(short, long, default_value = "Most frequent terms")]
        title: String,

        /// Remove stop words for this language (e.g. "en", "es")
        #[arg(long)]
        stopwords: Option<String>,

        /// Comma-separated POS tags to keep (cells hold word/TAG tokens)
        #[arg(long, value_delimiter = ',')]
        pos: Option<Vec<String>>,

        /// How raw text cells are tokenized; token-list cells are kept as-is
        #[arg(long, value_enum, default_value = "whitespace")]
        tokenizer: CliTokenizer,

        /// Output format: text, json, or yaml
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Build a bigram word cloud
    Wordcloud {
        /// Path to a CSV/TSV file, or a plain text file when no column is given
        #[arg(short, long)]
        input: PathBuf,

        /// Column holding tokens or text
        #[arg(short, long)]
        column: Option<String>,

        /// Cloud title
        #[arg(short, long, default_value = "Most frequent bigrams")]
        title: String,

        /// Bigram to exclude, words separated by a space
        #[arg(short, long)]
        exclude: Option<String>,

        /// Write the cloud as JSON to this path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format: text, json, or yaml
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Profile the tokens of a column
    Profile {
        /// Path to a CSV or TSV file
        #[arg(short, long)]
        input: PathBuf,

        /// Column holding tokens or text
        #[arg(short, long)]
        column: String,

        /// Output format: text, json, or yaml
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Run a pipeline from a YAML configuration file
    Run {
        /// Path to pipeline configuration YAML
        #[arg(short, long)]
        config: PathBuf,

        /// Path to a CSV or TSV file
        #[arg(short, long)]
        input: PathBuf,

        /// Output format: text, json, or yaml
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Generate an example pipeline configuration
    Example {
        /// Output path for example YAML
        #[arg(short, long, default_value = "analysis.yaml")]
        output: PathBuf,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Print {
            input,
            fields,
            wrap_width,
            truncate,
            max_colwidth,
            sep_char,
            sep_count,
            limit,
        } => {
            let config = DisplayConfig {
                wrap_width,
                truncate,
                max_colwidth,
                separator: Separator {
                    ch: sep_char,
                    count: sep_count,
                },
            };
            cmd_print(&input, fields.as_deref(), &config, limit)
        }

        Commands::Top {
            input,
            column,
            count,
            ngram,
            exclude,
            title,
            stopwords,
            pos,
            tokenizer,
            format,
        } => cmd_top(
            &input,
            &column,
            count,
            ngram,
            exclude.as_deref(),
            &title,
            stopwords.as_deref(),
            pos.as_deref(),
            tokenizer.into(),
            format,
        ),

        Commands::Wordcloud {
            input,
            column,
            title,
            exclude,
            output,
            format,
        } => cmd_wordcloud(
            &input,
            column.as_deref(),
            &title,
            exclude.as_deref(),
            output.as_deref(),
            format,
        ),

        Commands::Profile {
            input,
            column,
            format,
        } => cmd_profile(&input, &column, format),

        Commands::Run {
            config,
            input,
            format,
        } => cmd_run(&config, &input, format),

        Commands::Example { output } => cmd_example(&output),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_records(path: &Path) -> Result<Records> {
    log::info!("Loading records from {:?}...", path);
    let records = Records::from_path(path)?;
    log::info!(
        "Loaded {} rows x {} columns",
        records.n_rows(),
        records.n_columns()
    );
    Ok(records)
}

/// Print records
fn cmd_print(
    input: &Path,
    fields: Option<&[String]>,
    config: &DisplayConfig,
    limit: Option<usize>,
) -> Result<()> {
    let mut records = load_records(input)?;
    if let Some(limit) = limit {
        records = records.head(limit);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    print_records(&records, fields, config, &mut out)
}

/// Rank frequent terms and draw them as a chart
#[allow(clippy::too_many_arguments)]
fn cmd_top(
    input: &Path,
    column: &str,
    count: i64,
    ngram: usize,
    exclude: Option<&str>,
    title: &str,
    stopwords: Option<&str>,
    pos: Option<&[String]>,
    tokenizer: Tokenizer,
    format: OutputFormat,
) -> Result<()> {
    let records = load_records(input)?;

    let mut analysis = TermAnalysis::new(column)
        .ngram_size(ngram)
        .top_k(count)
        .tokenizer(tokenizer)
        .exclude(exclude.map(Term::parse));
    if let Some(language) = stopwords {
        analysis = analysis.stopwords(StopwordFilter::new(language)?);
    }
    if let Some(tags) = pos {
        analysis = analysis.pos_tags(tags);
    }

    log::info!("Counting {}-grams in column '{}'...", ngram, column);
    let ranking = analysis.run(&records)?;
    log::info!(
        "{} distinct terms, {} counted",
        ranking.distinct_terms,
        ranking.total_terms
    );

    let chart = BarChart::from_ranking(&ranking, title, FigureSize::default());
    let stdout = std::io::stdout();
    match format {
        OutputFormat::Json => JsonChartRenderer::new(stdout.lock(), true).render_chart(&chart),
        OutputFormat::Yaml => {
            println!("{}", serde_yaml::to_string(&chart)?);
            Ok(())
        }
        OutputFormat::Text => TextBarRenderer::new(stdout.lock()).render_chart(&chart),
    }
}

/// Build a bigram word cloud
fn cmd_wordcloud(
    input: &Path,
    column: Option<&str>,
    title: &str,
    exclude: Option<&str>,
    output: Option<&Path>,
    format: OutputFormat,
) -> Result<()> {
    let exclude = exclude.map(Term::parse);

    let cloud = match column {
        Some(column) => {
            let records = load_records(input)?;
            column_bigram_wordcloud(&records, column, title, exclude.as_ref())?
        }
        None => {
            log::info!("Reading text from {:?}...", input);
            let text = std::fs::read_to_string(input)?;
            bigram_wordcloud(&text, title, exclude.as_ref())?
        }
    };
    log::info!("{} distinct bigrams", cloud.frequencies.len());

    if let Some(path) = output {
        let file = std::fs::File::create(path)?;
        JsonWordCloudRenderer::new(file, true).render_wordcloud(&cloud)?;
        log::info!("Wrote word cloud to {:?}", path);
    }

    let stdout = std::io::stdout();
    match format {
        OutputFormat::Json => JsonWordCloudRenderer::new(stdout.lock(), true).render_wordcloud(&cloud),
        OutputFormat::Yaml => {
            println!("{}", serde_yaml::to_string(&cloud)?);
            Ok(())
        }
        OutputFormat::Text => TextWordCloudRenderer::new(stdout.lock(), 20).render_wordcloud(&cloud),
    }
}

/// Profile a text column
fn cmd_profile(input: &Path, column: &str, format: OutputFormat) -> Result<()> {
    let records = load_records(input)?;

    log::info!("Profiling column '{}'...", column);
    let profile = profile_corpus(&records, column)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&profile)?),
        OutputFormat::Yaml => println!("{}", serde_yaml::to_string(&profile)?),
        OutputFormat::Text => print!("{}", profile),
    }

    Ok(())
}

/// Run a pipeline from configuration
fn cmd_run(config_path: &Path, input: &Path, format: OutputFormat) -> Result<()> {
    log::info!("Loading pipeline configuration from {:?}...", config_path);
    let config_str = std::fs::read_to_string(config_path)?;
    let config = PipelineConfig::from_yaml(&config_str)?;

    let records = load_records(input)?;

    log::info!("Running pipeline '{}'...", config.name);
    let reports = Pipeline::from_config(&config).run(&records)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
        OutputFormat::Yaml => println!("{}", serde_yaml::to_string(&reports)?),
        OutputFormat::Text => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            for report in &reports {
                report.render_text(&mut out)?;
            }
        }
    }

    log::info!("Done! {} reports", reports.len());
    Ok(())
}

/// Generate an example pipeline configuration
fn cmd_example(output_path: &Path) -> Result<()> {
    let pipeline = Pipeline::new()
        .name("example-reviews")
        .stopwords(StopwordConfig {
            language: Some("en".to_string()),
            ..Default::default()
        })
        .print_records(Some(vec!["title".to_string(), "review".to_string()]), Some(3))
        .profile_corpus("tokens")
        .frequent_terms(FrequentTermsSpec::new("tokens", 20, "Most frequent words"))
        .frequent_terms(FrequentTermsSpec::new("tokens", 20, "Most frequent bigrams").ngram_size(2))
        .wordcloud_bigrams("tokens", "Bigram cloud", None);

    let config = pipeline.to_config(Some(
        "Example exploration of tokenized product reviews",
    ));
    let yaml = config.to_yaml()?;

    std::fs::write(output_path, &yaml)?;
    log::info!("Wrote example pipeline to {:?}", output_path);
    println!("{}", yaml);

    Ok(())
}
