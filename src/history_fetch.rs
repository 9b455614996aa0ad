use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use serde_json::Value;

use crate::http_client::http_client;
use crate::replay::GameRow;

const GAME_FINDER_URL: &str = "https://stats.nba.com/stats/leaguegamefinder";

/// Season label the stats endpoints expect, for the season that ends in
/// `today`'s year: 2025-03-11 -> "2024-25".
pub fn season_label(today: NaiveDate) -> String {
    let end_year = today.year();
    format!("{}-{:02}", end_year - 1, end_year % 100)
}

/// Pulls the full team game log for one season. Every finished game shows
/// up as two rows (one per team) sharing a game id.
pub fn fetch_season_history(season: &str) -> Result<Vec<GameRow>> {
    let client = http_client()?;
    let url =
        format!("{GAME_FINDER_URL}?PlayerOrTeam=T&LeagueID=00&SeasonType=Regular%20Season&Season={season}");
    let body = client
        .get(&url)
        .send()
        .context("game finder request failed")?
        .text()
        .context("game finder body unreadable")?;
    parse_game_log_json(&body)
}

/// Parses the stats envelope (`resultSets` -> `headers` + `rowSet`) into
/// game-log rows. Column positions are resolved by header name, not index.
pub fn parse_game_log_json(raw: &str) -> Result<Vec<GameRow>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(Vec::new());
    }
    let root: Value = serde_json::from_str(trimmed).context("invalid game finder json")?;

    let Some(result_set) = root
        .get("resultSets")
        .and_then(|v| v.as_array())
        .and_then(|sets| sets.first())
    else {
        return Ok(Vec::new());
    };

    let headers: Vec<&str> = result_set
        .get("headers")
        .and_then(|v| v.as_array())
        .map(|arr| arr.iter().filter_map(|h| h.as_str()).collect())
        .unwrap_or_default();
    let col = |name: &str| headers.iter().position(|h| *h == name);

    let (Some(game_id), Some(date), Some(team), Some(matchup), Some(pts)) = (
        col("GAME_ID"),
        col("GAME_DATE"),
        col("TEAM_NAME"),
        col("MATCHUP"),
        col("PTS"),
    ) else {
        anyhow::bail!("game finder response missing expected columns");
    };

    let mut out = Vec::new();
    if let Some(rows) = result_set.get("rowSet").and_then(|v| v.as_array()) {
        for row in rows {
            if let Some(parsed) = parse_row(row, game_id, date, team, matchup, pts) {
                out.push(parsed);
            }
        }
    }
    Ok(out)
}

fn parse_row(
    row: &Value,
    game_id: usize,
    date: usize,
    team: usize,
    matchup: usize,
    pts: usize,
) -> Option<GameRow> {
    let cells = row.as_array()?;
    let game_id = cells.get(game_id)?.as_str()?.to_string();
    let date = cells.get(date)?.as_str()?.to_string();
    let team = cells.get(team)?.as_str()?.to_string();
    let matchup = cells.get(matchup)?.as_str()?.to_string();
    // PTS is null for games without a final score; keep the row, the
    // replay skips the game as a whole. A value that does not fit a u32
    // is treated the same way rather than replayed truncated.
    let points = cells
        .get(pts)
        .and_then(|v| v.as_u64())
        .and_then(|p| u32::try_from(p).ok());

    Some(GameRow {
        game_id,
        date,
        team,
        matchup,
        points,
    })
}
