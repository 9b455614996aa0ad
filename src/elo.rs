pub const BASELINE_RATING: f64 = 1500.0;

#[derive(Debug, Clone, Copy)]
pub struct EloConfig {
    pub k: f64,
    pub home_adv_pts: f64,
}

impl Default for EloConfig {
    fn default() -> Self {
        Self {
            k: 20.0,
            home_adv_pts: 100.0,
        }
    }
}

/// Logistic win probability implied by a rating gap: a 400-point edge is
/// roughly a 10:1 expected-win ratio.
pub fn expected_score(r_team: f64, r_opponent: f64) -> f64 {
    1.0 / (1.0 + 10.0_f64.powf((r_opponent - r_team) / 400.0))
}

/// One side's post-game rating. `outcome` is 1.0 for a win, 0.0 for a loss.
pub fn update(r_team: f64, r_opponent: f64, outcome: f64, cfg: EloConfig) -> f64 {
    let expected = expected_score(r_team, r_opponent);
    r_team + cfg.k * (outcome - expected)
}

/// Applies one finished game to both participants and returns the new
/// `(home, away)` pair, un-rounded.
///
/// The home-court bonus is added to the home rating before either expected
/// score is computed and subtracted back out of the result, so stored
/// ratings stay advantage-free. Both updates read the pre-game ratings.
pub fn apply_game(r_home: f64, r_away: f64, home_won: bool, cfg: EloConfig) -> (f64, f64) {
    let adj_home = r_home + cfg.home_adv_pts;
    let outcome = if home_won { 1.0 } else { 0.0 };

    let new_home = update(adj_home, r_away, outcome, cfg);
    let new_away = update(r_away, adj_home, 1.0 - outcome, cfg);

    (new_home - cfg.home_adv_pts, new_away)
}

/// Ratings are persisted to 2 decimals; intermediates keep full precision.
pub fn round_for_storage(rating: f64) -> f64 {
    (rating * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expected_score_is_half_for_equal_ratings() {
        assert_eq!(expected_score(1500.0, 1500.0), 0.5);
        assert_eq!(expected_score(1234.5, 1234.5), 0.5);
    }

    #[test]
    fn expected_scores_are_complementary() {
        let a = expected_score(1620.0, 1480.0);
        let b = expected_score(1480.0, 1620.0);
        assert!((a + b - 1.0).abs() < 1e-12);
    }

    #[test]
    fn four_hundred_point_gap_is_roughly_ten_to_one() {
        let p = expected_score(1900.0, 1500.0);
        assert!((p - 10.0 / 11.0).abs() < 1e-12);
    }

    #[test]
    fn game_update_is_zero_sum() {
        let cfg = EloConfig::default();
        let (h, a) = apply_game(1545.0, 1610.0, true, cfg);
        let home_delta = h - 1545.0;
        let away_delta = a - 1610.0;
        assert!((home_delta + away_delta).abs() < 1e-9);
    }

    #[test]
    fn winning_beats_losing_against_the_same_opponent() {
        let cfg = EloConfig::default();
        let (won, _) = apply_game(1500.0, 1500.0, true, cfg);
        let (lost, _) = apply_game(1500.0, 1500.0, false, cfg);
        assert!(won > lost);
    }

    #[test]
    fn even_matchup_home_win_moves_both_sides_as_expected() {
        // Home at 1500 hosts away at 1500 and wins. With the 100-point
        // bonus the pre-game home probability is expected(1600, 1500)
        // ~= 0.64, so home gains ~7.2 and away loses the same.
        let cfg = EloConfig::default();
        let p = expected_score(1600.0, 1500.0);
        assert!((p - 0.64).abs() < 0.001);

        let (h, a) = apply_game(1500.0, 1500.0, true, cfg);
        assert!((h - 1507.2).abs() < 0.05);
        assert!((a - 1492.8).abs() < 0.05);
    }

    #[test]
    fn storage_rounding_is_two_decimals() {
        assert_eq!(round_for_storage(1507.1999), 1507.2);
        assert_eq!(round_for_storage(1492.875), 1492.88);
        assert_eq!(round_for_storage(1500.0), 1500.0);
    }
}
