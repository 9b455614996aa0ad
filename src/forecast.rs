use std::collections::BTreeMap;

use chrono::NaiveDate;
use rayon::prelude::*;

use crate::elo::{EloConfig, expected_score};
use crate::store::RatingStore;

/// An upcoming game: date plus the two canonical team names. Never carries
/// a score and never touches the rating store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    pub date: NaiveDate,
    pub home: String,
    pub away: String,
}

#[derive(Debug, Clone)]
pub struct ForecastResult {
    pub fixture: Fixture,
    /// Stored (advantage-free) ratings at forecast time.
    pub home_rating: f64,
    pub away_rating: f64,
    pub winner: String,
    pub home_win_prob: f64,
}

/// Win-probability call for a single fixture. Reads the store, never
/// writes it; unseen teams default to the 1500 baseline.
///
/// Winner is the home side only on a strict `p > 0.5`; an exact 0.5 goes
/// to the away team. That tie-break is deliberate, documented behavior.
pub fn predict(home: &str, away: &str, store: &RatingStore, cfg: EloConfig) -> (String, f64) {
    let home_rating = store.rating(home) + cfg.home_adv_pts;
    let away_rating = store.rating(away);
    let home_win_prob = expected_score(home_rating, away_rating);
    let winner = if home_win_prob > 0.5 { home } else { away };
    (winner.to_string(), home_win_prob)
}

/// Runs the prediction over a batch of fixtures and groups the results by
/// date, keeping each date's fixtures in their input order. Predictions
/// fan out on rayon; the store is a frozen read-only snapshot here.
pub fn forecast(
    fixtures: &[Fixture],
    store: &RatingStore,
    cfg: EloConfig,
) -> BTreeMap<NaiveDate, Vec<ForecastResult>> {
    let results: Vec<ForecastResult> = fixtures
        .par_iter()
        .map(|fixture| {
            let (winner, home_win_prob) = predict(&fixture.home, &fixture.away, store, cfg);
            ForecastResult {
                fixture: fixture.clone(),
                home_rating: store.rating(&fixture.home),
                away_rating: store.rating(&fixture.away),
                winner,
                home_win_prob,
            }
        })
        .collect();

    let mut by_date: BTreeMap<NaiveDate, Vec<ForecastResult>> = BTreeMap::new();
    for result in results {
        by_date.entry(result.fixture.date).or_default().push(result);
    }
    by_date
}
