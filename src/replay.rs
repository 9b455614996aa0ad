use std::collections::BTreeMap;

use log::info;

use crate::elo::{EloConfig, apply_game};
use crate::roster::Roster;
use crate::store::RatingStore;

/// One team's row in the league game log. Each finished game produces two
/// rows sharing a game id; the matchup string tells home ("vs.") from
/// away ("@"). Points are missing for games without a final score.
#[derive(Debug, Clone)]
pub struct GameRow {
    pub game_id: String,
    pub date: String,
    pub team: String,
    pub matchup: String,
    pub points: Option<u32>,
}

impl GameRow {
    pub fn is_home(&self) -> bool {
        self.matchup.contains("vs.")
    }

    pub fn is_away(&self) -> bool {
        self.matchup.contains('@')
    }
}

/// Folds a season of game-log rows through the rating update rule.
///
/// Rows are paired by game id before anything is written, so one game's
/// two updates always read the same pre-game ratings and no other game
/// interleaves between them. A game that cannot be fully resolved (a
/// missing side, a missing score, an off-roster team) is skipped whole.
pub fn replay(rows: &[GameRow], store: &mut RatingStore, roster: &Roster, cfg: EloConfig) {
    store.align_to_roster(roster);

    let mut by_game: BTreeMap<&str, Vec<&GameRow>> = BTreeMap::new();
    for row in rows {
        by_game.entry(row.game_id.as_str()).or_default().push(row);
    }

    let mut applied = 0usize;
    for (game_id, group) in &by_game {
        if group.len() < 2 {
            info!("game {game_id}: fewer than two rows, skipping");
            continue;
        }
        let Some(home) = group.iter().find(|r| r.is_home()) else {
            info!("game {game_id}: no home row, skipping");
            continue;
        };
        let Some(away) = group.iter().find(|r| r.is_away()) else {
            info!("game {game_id}: no away row, skipping");
            continue;
        };
        let (Some(home_pts), Some(away_pts)) = (home.points, away.points) else {
            info!("game {game_id}: missing score, skipping");
            continue;
        };
        if !roster.contains(&home.team) || !roster.contains(&away.team) {
            info!(
                "game {game_id}: {} vs {} not fully in roster, skipping",
                home.team, away.team
            );
            continue;
        }

        let home_won = home_pts > away_pts;
        let (new_home, new_away) =
            apply_game(store.rating(&home.team), store.rating(&away.team), home_won, cfg);
        store.set_rating(&home.team, new_home);
        store.set_rating(&away.team, new_away);
        applied += 1;
    }

    info!("replayed {applied} of {} games", by_game.len());
}
