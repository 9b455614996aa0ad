use anyhow::{Context, Result};
use chrono::{Days, NaiveDate};
use log::warn;
use serde_json::Value;

use crate::forecast::Fixture;
use crate::http_client::http_client;
use crate::roster::Roster;

const SCOREBOARD_URL: &str = "https://stats.nba.com/stats/scoreboardv2";

/// Fixtures for an inclusive date range, one scoreboard request per day.
/// A day that fails to fetch degrades to an empty day with a warning; the
/// roster maps team ids to canonical names and anything it cannot resolve
/// is dropped.
pub fn fetch_fixtures(start: NaiveDate, end: NaiveDate, roster: &Roster) -> Vec<Fixture> {
    let mut fixtures = Vec::new();
    let mut cursor = start;
    while cursor <= end {
        match fetch_day(cursor) {
            Ok(body) => fixtures.extend(parse_scoreboard_json(&body, cursor, roster)),
            Err(err) => warn!("scoreboard fetch for {cursor} failed: {err:#}"),
        }
        let Some(next) = cursor.checked_add_days(Days::new(1)) else {
            break;
        };
        cursor = next;
    }
    fixtures
}

fn fetch_day(date: NaiveDate) -> Result<String> {
    let client = http_client()?;
    let url = format!(
        "{SCOREBOARD_URL}?GameDate={}&LeagueID=00&DayOffset=0",
        date.format("%Y-%m-%d")
    );
    client
        .get(&url)
        .send()
        .context("scoreboard request failed")?
        .text()
        .context("scoreboard body unreadable")
}

/// Parses one day's scoreboard envelope. The game header result set names
/// the two sides by team id only.
pub fn parse_scoreboard_json(raw: &str, date: NaiveDate, roster: &Roster) -> Vec<Fixture> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Vec::new();
    }
    let Ok(root) = serde_json::from_str::<Value>(trimmed) else {
        warn!("scoreboard for {date}: invalid json");
        return Vec::new();
    };

    let Some(result_set) = root
        .get("resultSets")
        .and_then(|v| v.as_array())
        .and_then(|sets| sets.first())
    else {
        return Vec::new();
    };

    let headers: Vec<&str> = result_set
        .get("headers")
        .and_then(|v| v.as_array())
        .map(|arr| arr.iter().filter_map(|h| h.as_str()).collect())
        .unwrap_or_default();
    let col = |name: &str| headers.iter().position(|h| *h == name);
    let (Some(home_col), Some(away_col)) = (col("HOME_TEAM_ID"), col("VISITOR_TEAM_ID")) else {
        warn!("scoreboard for {date}: missing team id columns");
        return Vec::new();
    };

    let mut fixtures = Vec::new();
    if let Some(rows) = result_set.get("rowSet").and_then(|v| v.as_array()) {
        for row in rows {
            let Some(cells) = row.as_array() else {
                continue;
            };
            let home_id = cells.get(home_col).and_then(|v| v.as_u64());
            let away_id = cells.get(away_col).and_then(|v| v.as_u64());
            let (Some(home_id), Some(away_id)) = (home_id, away_id) else {
                continue;
            };
            let (Some(home), Some(away)) =
                (roster.name_for_id(home_id), roster.name_for_id(away_id))
            else {
                warn!("scoreboard for {date}: unknown team id in {home_id} vs {away_id}");
                continue;
            };
            fixtures.push(Fixture {
                date,
                home: home.to_string(),
                away: away.to_string(),
            });
        }
    }
    fixtures
}
