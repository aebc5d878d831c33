//! Basic example demonstrating term frequency exploration.
//!
//! This example shows how to:
//! 1. Build a small table of tokenized reviews
//! 2. Print records
//! 3. Rank frequent words and bigrams
//! 4. Build a bigram word cloud

use indexmap::IndexMap;
use text_eda::prelude::*;

fn main() -> Result<()> {
    println!("=== Text EDA Example ===\n");

    let reviews = create_example_data();

    println!("=== Records ===\n");
    let config = DisplayConfig {
        separator: Separator { ch: '-', count: 40 },
        ..Default::default()
    };
    print_records(&reviews, None, &config, &mut std::io::stdout())?;

    println!("=== Corpus Profile ===\n");
    println!("{}", profile_corpus(&reviews, "tokens")?);

    println!("=== Frequent Terms ===\n");
    let words = TermAnalysis::new("tokens")
        .top_k(5)
        .stopwords(StopwordFilter::new("en")?)
        .run(&reviews)?;
    println!("{}", words);

    let bigrams = FrequentTermsSpec::new("tokens", 5, "Most frequent bigrams")
        .ngram_size(2)
        .exclude(Term::parse("battery life"));
    let chart = frequent_terms_chart(&reviews, &bigrams)?;
    TextBarRenderer::new(std::io::stdout()).render_chart(&chart)?;

    println!("=== Word Cloud ===\n");
    let cloud = column_bigram_wordcloud(&reviews, "tokens", "Bigram cloud", None)?;
    TextWordCloudRenderer::new(std::io::stdout(), 10).render_wordcloud(&cloud)?;

    Ok(())
}

/// Create a few reviews with a raw text column and a token column.
fn create_example_data() -> IndexMap<String, Vec<Cell>> {
    let reviews = [
        "The battery life is great and the screen is bright",
        "Battery life could be better but the sound is great",
        "Great sound, great price",
        "",
        "The screen cracked after a week",
    ];

    let mut table = IndexMap::new();
    table.insert(
        "review".to_string(),
        reviews.iter().map(|r| Cell::parse(r)).collect(),
    );
    table.insert(
        "tokens".to_string(),
        reviews
            .iter()
            .map(|r| match unicode_words(r, true) {
                words if words.is_empty() => Cell::Missing,
                words => Cell::Tokens(words),
            })
            .collect(),
    );
    table
}
