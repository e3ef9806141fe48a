use std::path::PathBuf;

use anyhow::{Context, Result};

use soccer_datagen::generator::GeneratorConfig;
use soccer_datagen::score::ScoreWeights;
use soccer_datagen::tier::TierCuts;
use soccer_datagen::{catalog, export, generator, score, summary, tier};

const DEFAULT_OUTPUT: &str = "Soccer_Analytics_Report_Data.xlsx";

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env");

    let mut cfg = GeneratorConfig::default();
    if let Some(rows) = parse_rows_arg()? {
        cfg.rows = rows;
    }
    if let Some(seed) = parse_seed_arg()? {
        cfg.seed = seed;
    }
    let out_path = parse_out_arg()
        .or_else(output_path_from_env)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    let catalog = catalog::default_catalog();
    let records = generator::generate(catalog, &cfg)?;
    let scored = score::derive_scores(records, &ScoreWeights::default(), &cfg.ranges)?;
    let facts = tier::classify_all(scored, &TierCuts::default())?;
    let summary_rows = summary::summarize(&facts);
    let report = export::export_workbook(&out_path, &facts, &summary_rows)?;

    println!("Report dataset complete");
    println!("Workbook: {}", out_path.display());
    println!(
        "1. {}: {} rows (raw match-level data)",
        export::FACTS_SHEET,
        report.fact_rows
    );
    println!(
        "2. {}: {} rows (aggregated player data)",
        export::SUMMARY_SHEET,
        report.summary_rows
    );

    Ok(())
}

fn parse_rows_arg() -> Result<Option<usize>> {
    flag_value("--rows")
        .map(|raw| {
            raw.parse::<usize>()
                .with_context(|| format!("invalid --rows value '{raw}'"))
        })
        .transpose()
}

fn parse_seed_arg() -> Result<Option<u64>> {
    flag_value("--seed")
        .map(|raw| {
            raw.parse::<u64>()
                .with_context(|| format!("invalid --seed value '{raw}'"))
        })
        .transpose()
}

fn parse_out_arg() -> Option<PathBuf> {
    flag_value("--out").map(PathBuf::from)
}

fn output_path_from_env() -> Option<PathBuf> {
    let raw = std::env::var("REPORT_OUT").ok()?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(PathBuf::from(trimmed))
}

fn flag_value(name: &str) -> Option<String> {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    for (idx, arg) in args.iter().enumerate() {
        if let Some(rest) = arg.strip_prefix(name)
            && let Some(value) = rest.strip_prefix('=')
        {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
        if arg == name
            && let Some(next) = args.get(idx + 1)
            && !next.trim().is_empty()
        {
            return Some(next.trim().to_string());
        }
    }
    None
}
