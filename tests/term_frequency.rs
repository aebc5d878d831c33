//! Integration tests for term frequency analysis over CSV and TSV records.

use std::io::Write;
use tempfile::NamedTempFile;
use text_eda::prelude::*;

/// Write product reviews with a pre-tokenized column to a temporary CSV.
fn create_reviews_csv() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "id,title,review,tokens").unwrap();
    writeln!(
        file,
        "1,Great value,Muy buen producto. Muy buen precio.,\"[\"\"muy\"\",\"\"buen\"\",\"\"producto\"\",\"\"muy\"\",\"\"buen\"\",\"\"precio\"\"]\""
    )
    .unwrap();
    writeln!(
        file,
        "2,Arrived late,El envio tardo mucho.,\"[\"\"envio\"\",\"\"tardo\"\",\"\"mucho\"\"]\""
    )
    .unwrap();
    writeln!(file, "3,No text,,NA").unwrap();
    writeln!(
        file,
        "4,Good,Buen precio y envio rapido.,\"[\"\"buen\"\",\"\"precio\"\",\"\"envio\"\",\"\"rapido\"\"]\""
    )
    .unwrap();
    file.flush().unwrap();
    file
}

fn words(tokens: &[&str]) -> Vec<Term> {
    build_ngrams(tokens, 1).unwrap()
}

#[test]
fn test_unigram_top_k() {
    let table = count_frequencies(words(&["a", "b", "a", "c", "b", "a"]));
    assert_eq!(table.get(&Term::word("a")), 3);
    assert_eq!(table.get(&Term::word("b")), 2);
    assert_eq!(table.get(&Term::word("c")), 1);

    let ranked = top_k(&table, 2).unwrap();
    assert_eq!(
        ranked,
        vec![
            RankedTerm {
                term: Term::word("a"),
                count: 3
            },
            RankedTerm {
                term: Term::word("b"),
                count: 2
            },
        ]
    );
}

#[test]
fn test_bigram_tie_keeps_first_encountered() {
    let bigrams = build_ngrams(&["x", "y", "z"], 2).unwrap();
    assert_eq!(bigrams, vec![Term::from(["x", "y"]), Term::from(["y", "z"])]);

    let ranked = top_k(&count_frequencies(bigrams), 1).unwrap();
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].term, Term::from(["x", "y"]));
    assert_eq!(ranked[0].count, 1);
}

#[test]
fn test_filter_excluded_removes_every_occurrence() {
    let terms = vec![
        Term::from(["a", "b"]),
        Term::from(["c", "d"]),
        Term::from(["a", "b"]),
    ];
    let kept = filter_excluded(terms, Some(&Term::from(["a", "b"])));
    assert_eq!(kept, vec![Term::from(["c", "d"])]);
}

#[test]
fn test_top_k_edge_cases() {
    let empty = count_frequencies(Vec::new());
    assert!(top_k(&empty, 5).unwrap().is_empty());

    let table = count_frequencies(words(&["a", "b"]));
    assert!(top_k(&table, 0).unwrap().is_empty());
    assert_eq!(top_k(&table, 10).unwrap().len(), 2);
    assert!(matches!(top_k(&table, -1), Err(EdaError::InvalidArgument(_))));
}

#[test]
fn test_column_analysis_from_csv() {
    let file = create_reviews_csv();
    let records = Records::from_path(file.path()).unwrap();
    assert_eq!(records.n_rows(), 4);

    let ranking = TermAnalysis::new("tokens")
        .ngram_size(2)
        .top_k(3)
        .run(&records)
        .unwrap();

    assert_eq!(ranking.n_documents, 3);
    assert_eq!(ranking.labels(), vec!["muy buen", "buen precio", "buen producto"]);
    assert_eq!(ranking.counts(), vec![2, 2, 1]);

    let excluded = TermAnalysis::new("tokens")
        .ngram_size(2)
        .top_k(1)
        .exclude(Some(Term::parse("muy buen")))
        .run(&records)
        .unwrap();
    assert_eq!(excluded.labels(), vec!["buen precio"]);
}

#[test]
fn test_frequent_terms_chart_from_tsv() {
    let mut file = tempfile::Builder::new().suffix(".tsv").tempfile().unwrap();
    writeln!(file, "id\ttext").unwrap();
    writeln!(file, "1\tthe screen is bright").unwrap();
    writeln!(file, "2\tthe battery is weak").unwrap();
    file.flush().unwrap();

    let records = Records::from_path(file.path()).unwrap();
    let spec = FrequentTermsSpec::new("text", 2, "Words");
    let chart = frequent_terms_chart(&records, &spec).unwrap();

    let labels: Vec<&str> = chart.bars.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, vec!["the", "is"]);
    assert_eq!(chart.x_label, "Terms");
}

#[test]
fn test_unicode_tokenizer_on_raw_review_column() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "id,review").unwrap();
    writeln!(file, "1,\"Great value, great value.\"").unwrap();
    writeln!(file, "2,value").unwrap();
    file.flush().unwrap();
    let records = Records::from_path(file.path()).unwrap();

    let whitespace = TermAnalysis::new("review").run(&records).unwrap();
    assert_eq!(
        whitespace.labels(),
        vec!["Great", "value,", "great", "value.", "value"]
    );

    let spec = FrequentTermsSpec::new("review", 5, "Words").tokenizer(Tokenizer::UnicodeWords);
    let chart = frequent_terms_chart(&records, &spec).unwrap();
    let bars: Vec<(&str, u64)> = chart.bars.iter().map(|b| (b.label.as_str(), b.value)).collect();
    assert_eq!(bars, vec![("value", 3), ("great", 2)]);
}

#[test]
fn test_wordcloud_and_profile() {
    let file = create_reviews_csv();
    let records = Records::from_path(file.path()).unwrap();

    let cloud = column_bigram_wordcloud(&records, "tokens", "Bigrams", None).unwrap();
    assert_eq!(cloud.frequencies["muy_buen"], 2);
    assert_eq!(cloud.width, 800);
    assert_eq!(cloud.height, 400);

    let profile = profile_corpus(&records, "tokens").unwrap();
    assert_eq!(profile.n_rows, 4);
    assert_eq!(profile.n_missing, 1);
    assert_eq!(profile.n_tokens, 13);
    assert_eq!(profile.max_tokens, 6);
}

#[test]
fn test_print_records_selected_fields() {
    let file = create_reviews_csv();
    let records = Records::from_path(file.path()).unwrap();

    let fields = vec!["title".to_string(), "review".to_string()];
    let out = render_records(&records.head(2), Some(&fields), &DisplayConfig::default()).unwrap();

    assert!(out.contains("Great value"));
    assert!(out.contains("Arrived late"));
    assert!(!out.contains("tokens"));
    assert_eq!(out.matches(&"-".repeat(100)).count(), 2);
}

#[test]
fn test_pipeline_from_yaml() {
    let file = create_reviews_csv();
    let records = Records::from_path(file.path()).unwrap();

    let yaml = r#"
name: reviews
description: Spanish product reviews
stopwords:
  words: [muy]
steps:
  - kind: profile_corpus
    column: tokens
  - kind: frequent_terms
    column: tokens
    term_count: 2
    title: Most frequent words
"#;
    let config = PipelineConfig::from_yaml(yaml).unwrap();
    let reports = Pipeline::from_config(&config).run(&records).unwrap();
    assert_eq!(reports.len(), 2);

    match &reports[1] {
        Report::Chart(chart) => {
            assert_eq!(chart.title, "Most frequent words");
            assert!(chart.bars.iter().all(|b| b.label != "muy"));
            assert_eq!(chart.bars[0].label, "buen");
            assert_eq!(chart.bars[0].value, 3);
        }
        other => panic!("expected chart, got {:?}", other),
    }

    let json = serde_json::to_value(&reports).unwrap();
    assert_eq!(json[0]["kind"], "profile");
    assert_eq!(json[1]["kind"], "chart");
}

#[test]
fn test_missing_column() {
    let file = create_reviews_csv();
    let records = Records::from_path(file.path()).unwrap();

    assert!(matches!(
        TermAnalysis::new("body").run(&records),
        Err(EdaError::MissingColumn(_))
    ));
}
