use std::fs;
use std::path::PathBuf;

use soccer_datagen::catalog;
use soccer_datagen::export;
use soccer_datagen::generator::{self, GeneratorConfig};
use soccer_datagen::score::{self, ScoreWeights};
use soccer_datagen::summary::{self, PlayerSummaryRow};
use soccer_datagen::tier::{self, FactRecord, TierCuts};

fn build_tables(seed: u64) -> (Vec<FactRecord>, Vec<PlayerSummaryRow>) {
    let cfg = GeneratorConfig {
        rows: 200,
        seed,
        ..GeneratorConfig::default()
    };
    let records =
        generator::generate(catalog::default_catalog(), &cfg).expect("generation should succeed");
    let scored = score::derive_scores(records, &ScoreWeights::default(), &cfg.ranges)
        .expect("derivation should succeed");
    let facts =
        tier::classify_all(scored, &TierCuts::default()).expect("classification should succeed");
    let rows = summary::summarize(&facts);
    (facts, rows)
}

fn temp_output(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!("soccer_datagen_{tag}_{}.xlsx", std::process::id()))
}

#[test]
fn identical_runs_export_byte_identical_workbooks() {
    let (facts_a, summary_a) = build_tables(42);
    let (facts_b, summary_b) = build_tables(42);

    let buffer_a = export::build_workbook(&facts_a, &summary_a)
        .expect("workbook should build")
        .save_to_buffer()
        .expect("workbook should serialize");
    let buffer_b = export::build_workbook(&facts_b, &summary_b)
        .expect("workbook should build")
        .save_to_buffer()
        .expect("workbook should serialize");

    assert!(!buffer_a.is_empty());
    assert_eq!(buffer_a, buffer_b);
}

#[test]
fn export_writes_one_file_and_reports_row_counts() {
    let (facts, summary_rows) = build_tables(7);
    let path = temp_output("report");

    let report =
        export::export_workbook(&path, &facts, &summary_rows).expect("export should succeed");
    assert_eq!(report.fact_rows, facts.len());
    assert_eq!(report.summary_rows, summary_rows.len());

    let written = fs::metadata(&path).expect("workbook file should exist");
    assert!(written.len() > 0);
    let _ = fs::remove_file(&path);
}

#[test]
fn unwritable_destination_propagates_with_path_context() {
    let (facts, summary_rows) = build_tables(7);
    let path = PathBuf::from("/nonexistent-dir/soccer_datagen.xlsx");

    let err = export::export_workbook(&path, &facts, &summary_rows).unwrap_err();
    assert!(err.to_string().contains("/nonexistent-dir"));
}

#[test]
fn empty_fact_table_exports_well_formed_sheets() {
    let facts: Vec<FactRecord> = Vec::new();
    let summary_rows = summary::summarize(&facts);
    assert!(summary_rows.is_empty());

    let buffer = export::build_workbook(&facts, &summary_rows)
        .expect("empty workbook should build")
        .save_to_buffer()
        .expect("empty workbook should serialize");
    assert!(!buffer.is_empty());
}
