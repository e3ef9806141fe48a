use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{DocProperties, ExcelDateTime, Workbook, Worksheet};

use crate::summary::PlayerSummaryRow;
use crate::tier::FactRecord;

pub const FACTS_SHEET: &str = "Match_Performance_Facts";
pub const SUMMARY_SHEET: &str = "Player_Summary_Dim";

#[derive(Debug)]
pub struct ExportReport {
    pub fact_rows: usize,
    pub summary_rows: usize,
}

enum Cell {
    Text(String),
    Number(f64),
    Empty,
}

impl Cell {
    fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    fn int(value: u32) -> Self {
        Cell::Number(f64::from(value))
    }

    fn opt(value: Option<f64>) -> Self {
        match value {
            Some(v) => Cell::Number(v),
            None => Cell::Empty,
        }
    }
}

pub fn export_workbook(
    path: &Path,
    facts: &[FactRecord],
    summary: &[PlayerSummaryRow],
) -> Result<ExportReport> {
    let mut workbook = build_workbook(facts, summary)?;
    workbook
        .save(path)
        .with_context(|| format!("failed writing workbook to {}", path.display()))?;
    Ok(ExportReport {
        fact_rows: facts.len(),
        summary_rows: summary.len(),
    })
}

/// Assembles the full two-sheet workbook in memory; nothing touches disk
/// until the caller saves it, so a failed save leaves no partial output.
pub fn build_workbook(facts: &[FactRecord], summary: &[PlayerSummaryRow]) -> Result<Workbook> {
    let mut workbook = Workbook::new();

    // Pinned creation stamp: repeated runs of the same seed and config must
    // produce byte-identical files.
    let creation = ExcelDateTime::from_ymd(2024, 1, 1)?;
    let properties = DocProperties::new().set_creation_datetime(&creation);
    workbook.set_properties(&properties);

    {
        let sheet = workbook.add_worksheet();
        sheet.set_name(FACTS_SHEET)?;
        write_rows(sheet, &fact_rows(facts))?;
    }
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name(SUMMARY_SHEET)?;
        write_rows(sheet, &summary_rows(summary))?;
    }

    Ok(workbook)
}

fn fact_rows(facts: &[FactRecord]) -> Vec<Vec<Cell>> {
    let mut rows = vec![vec![
        Cell::text("Match_ID"),
        Cell::text("Player_ID"),
        Cell::text("Team_Name"),
        Cell::text("Position"),
        Cell::text("Opponent_Strength"),
        Cell::text("Minutes_Played"),
        Cell::text("Goals"),
        Cell::text("Assists"),
        Cell::text("Shots_On_Target"),
        Cell::text("Pass_Completion_Rate"),
        Cell::text("Tackles"),
        Cell::text("Interceptions"),
        Cell::text("Performance_Score"),
        Cell::text("Efficiency_Tier"),
    ]];

    for fact in facts {
        let record = &fact.record;
        rows.push(vec![
            Cell::int(record.match_id),
            Cell::text(record.player_id.clone()),
            Cell::text(record.team_name.clone()),
            Cell::text(record.position.label()),
            Cell::text(record.opponent_strength.label()),
            Cell::int(record.minutes_played),
            Cell::int(record.goals),
            Cell::int(record.assists),
            Cell::int(record.shots_on_target),
            Cell::Number(record.pass_completion_rate),
            Cell::int(record.tackles),
            Cell::int(record.interceptions),
            Cell::Number(fact.performance_score),
            Cell::text(fact.efficiency_tier.label()),
        ]);
    }

    rows
}

fn summary_rows(summary: &[PlayerSummaryRow]) -> Vec<Vec<Cell>> {
    let mut rows = vec![vec![
        Cell::text("Player_ID"),
        Cell::text("Avg_Score_vs_Strong"),
        Cell::text("Avg_Score_vs_Average"),
        Cell::text("Avg_Score_vs_Weak"),
    ]];

    for row in summary {
        rows.push(vec![
            Cell::text(row.player_id.clone()),
            Cell::opt(row.avg_vs_strong),
            Cell::opt(row.avg_vs_average),
            Cell::opt(row.avg_vs_weak),
        ]);
    }

    rows
}

fn write_rows(worksheet: &mut Worksheet, rows: &[Vec<Cell>]) -> Result<()> {
    for (row_idx, row) in rows.iter().enumerate() {
        for (col_idx, cell) in row.iter().enumerate() {
            let result = match cell {
                Cell::Text(value) => worksheet.write_string(row_idx as u32, col_idx as u16, value),
                Cell::Number(value) => {
                    worksheet.write_number(row_idx as u32, col_idx as u16, *value)
                }
                Cell::Empty => continue,
            };
            result.with_context(|| format!("write cell ({row_idx},{col_idx})"))?;
        }
    }
    Ok(())
}
