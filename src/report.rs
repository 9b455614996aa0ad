use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rust_xlsxwriter::{Workbook, Worksheet};

use crate::forecast::ForecastResult;
use crate::store::RatingStore;

pub struct ExportReport {
    pub teams: usize,
    pub predictions: usize,
}

/// Prints the leaderboard, strongest team first.
pub fn print_ratings(store: &RatingStore) {
    println!("\nCurrent Elo Ratings:");
    println!("{:<26} {:>9}", "Team", "Rating");
    for (team, rating) in store.leaderboard() {
        println!("{team:<26} {rating:>9.2}");
    }
}

/// Prints one table per day of forecasts, in date order.
pub fn print_forecasts(by_date: &BTreeMap<NaiveDate, Vec<ForecastResult>>) {
    if by_date.is_empty() {
        println!("\nNo games scheduled in the selected range.");
        return;
    }
    println!("\nPredictions for the Selected Date Range:");
    for (date, results) in by_date {
        println!("\n=== {date} ===");
        println!(
            "{:<26} {:<26} {:<26} {:>9}",
            "Home", "Away", "Predicted Winner", "P(home)"
        );
        for r in results {
            println!(
                "{:<26} {:<26} {:<26} {:>9.3}",
                r.fixture.home, r.fixture.away, r.winner, r.home_win_prob
            );
        }
    }
}

/// Writes a workbook with a Ratings sheet and a Predictions sheet.
pub fn export_xlsx(
    path: &Path,
    store: &RatingStore,
    by_date: &BTreeMap<NaiveDate, Vec<ForecastResult>>,
) -> Result<ExportReport> {
    let mut ratings_rows = vec![vec!["Team".to_string(), "Elo Rating".to_string()]];
    for (team, rating) in store.leaderboard() {
        ratings_rows.push(vec![team.to_string(), format!("{rating:.2}")]);
    }

    let mut prediction_rows = vec![vec![
        "Date".to_string(),
        "Home".to_string(),
        "Away".to_string(),
        "Home Rating".to_string(),
        "Away Rating".to_string(),
        "Predicted Winner".to_string(),
        "Home Win Probability".to_string(),
    ]];
    for (date, results) in by_date {
        for r in results {
            prediction_rows.push(prediction_row(date, r));
        }
    }

    let mut workbook = Workbook::new();
    let ratings_sheet = workbook.add_worksheet();
    ratings_sheet.set_name("Ratings").context("name sheet")?;
    write_rows(ratings_sheet, &ratings_rows)?;

    let predictions_sheet = workbook.add_worksheet();
    predictions_sheet
        .set_name("Predictions")
        .context("name sheet")?;
    write_rows(predictions_sheet, &prediction_rows)?;

    workbook
        .save(path)
        .with_context(|| format!("save workbook {}", path.display()))?;

    Ok(ExportReport {
        teams: ratings_rows.len().saturating_sub(1),
        predictions: prediction_rows.len().saturating_sub(1),
    })
}

fn prediction_row(date: &NaiveDate, r: &ForecastResult) -> Vec<String> {
    vec![
        date.to_string(),
        r.fixture.home.clone(),
        r.fixture.away.clone(),
        format!("{:.2}", r.home_rating),
        format!("{:.2}", r.away_rating),
        r.winner.clone(),
        format!("{:.3}", r.home_win_prob),
    ]
}

fn write_rows(worksheet: &mut Worksheet, rows: &[Vec<String>]) -> Result<()> {
    for (row_idx, row) in rows.iter().enumerate() {
        for (col_idx, value) in row.iter().enumerate() {
            worksheet
                .write_string(row_idx as u32, col_idx as u16, value)
                .with_context(|| format!("write cell ({row_idx},{col_idx})"))?;
        }
    }
    Ok(())
}
