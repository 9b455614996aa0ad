use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;

use courtcast::history_fetch::parse_game_log_json;
use courtcast::roster::Roster;
use courtcast::schedule_fetch::parse_scoreboard_json;

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

#[test]
fn parses_game_finder_fixture() {
    let raw = read_fixture("game_finder.json");
    let rows = parse_game_log_json(&raw).expect("fixture should parse");
    assert_eq!(rows.len(), 7);

    assert_eq!(rows[0].game_id, "0022400001");
    assert_eq!(rows[0].team, "Boston Celtics");
    assert!(rows[0].is_home());
    assert_eq!(rows[0].points, Some(120));

    assert_eq!(rows[1].team, "New York Knicks");
    assert!(rows[1].is_away());

    // In-progress game: the away row has no final score yet.
    assert_eq!(rows[5].game_id, "0022400003");
    assert_eq!(rows[5].points, None);
}

#[test]
fn game_log_without_expected_columns_is_an_error() {
    let raw = r#"{"resultSets":[{"headers":["FOO"],"rowSet":[]}]}"#;
    assert!(parse_game_log_json(raw).is_err());
}

#[test]
fn parses_scoreboard_fixture_through_the_roster() {
    let raw = read_fixture("scoreboard.json");
    let roster = Roster::nba();
    let date = NaiveDate::from_ymd_opt(2025, 3, 11).unwrap();
    let fixtures = parse_scoreboard_json(&raw, date, &roster);

    // The third row's visitor id is not a roster team and is dropped.
    assert_eq!(fixtures.len(), 2);
    assert_eq!(fixtures[0].home, "Boston Celtics");
    assert_eq!(fixtures[0].away, "New York Knicks");
    assert_eq!(fixtures[1].home, "Denver Nuggets");
    assert_eq!(fixtures[1].away, "LA Clippers");
    assert!(fixtures.iter().all(|f| f.date == date));
}

#[test]
fn empty_scoreboard_body_yields_no_fixtures() {
    let roster = Roster::nba();
    let date = NaiveDate::from_ymd_opt(2025, 3, 11).unwrap();
    assert!(parse_scoreboard_json("", date, &roster).is_empty());
    assert!(parse_scoreboard_json("null", date, &roster).is_empty());
}
