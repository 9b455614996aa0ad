use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Days, Local, NaiveDate};
use log::info;

use courtcast::elo::EloConfig;
use courtcast::forecast::forecast;
use courtcast::history_fetch::{fetch_season_history, season_label};
use courtcast::replay::replay;
use courtcast::report::{export_xlsx, print_forecasts, print_ratings};
use courtcast::roster::Roster;
use courtcast::schedule_fetch::fetch_fixtures;
use courtcast::store::RatingStore;

const DEFAULT_RANGE_DAYS: u64 = 5;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let cfg = EloConfig {
        k: env_f64("ELO_K", 20.0),
        home_adv_pts: env_f64("HOME_ADVANTAGE", 100.0),
    };
    let ratings_path = PathBuf::from(
        std::env::var("RATINGS_FILE").unwrap_or_else(|_| "elo_ratings.json".to_string()),
    );

    let today = Local::now().date_naive();
    let (start, end) = date_range(today)?;
    println!("Predicting games from {start} to {end}...");

    let roster = Roster::nba();
    let mut store = RatingStore::load(&ratings_path)?;

    let season = std::env::var("SEASON").unwrap_or_else(|_| season_label(today));
    info!("initializing ratings from {season} game log");
    let history = fetch_season_history(&season)?;
    replay(&history, &mut store, &roster, cfg);
    store.save(&ratings_path)?;

    print_ratings(&store);

    let fixtures = fetch_fixtures(start, end, &roster);
    let by_date = forecast(&fixtures, &store, cfg);
    print_forecasts(&by_date);

    if let Some(path) = std::env::var("EXPORT_XLSX")
        .ok()
        .filter(|p| !p.trim().is_empty())
    {
        let report = export_xlsx(PathBuf::from(&path).as_path(), &store, &by_date)?;
        println!(
            "\nExported {} ratings and {} predictions to {path}",
            report.teams, report.predictions
        );
    }

    // Forecasting leaves the store untouched; this is the same state the
    // post-replay save wrote.
    store.save(&ratings_path)?;

    Ok(())
}

fn date_range(today: NaiveDate) -> Result<(NaiveDate, NaiveDate)> {
    let mut args = std::env::args().skip(1);
    let start = match args.next() {
        Some(raw) => parse_date(&raw)?,
        None => today,
    };
    let end = match args.next() {
        Some(raw) => parse_date(&raw)?,
        None => start
            .checked_add_days(Days::new(DEFAULT_RANGE_DAYS))
            .unwrap_or(start),
    };
    anyhow::ensure!(start <= end, "start date {start} is after end date {end}");
    Ok((start, end))
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .with_context(|| format!("invalid date '{raw}', expected YYYY-MM-DD"))
}

fn env_f64(name: &str, default: f64) -> f64 {
    std::env::var(name)
        .ok()
        .and_then(|val| val.parse::<f64>().ok())
        .unwrap_or(default)
}
