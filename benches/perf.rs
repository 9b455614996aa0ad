use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use courtcast::elo::EloConfig;
use courtcast::history_fetch::parse_game_log_json;
use courtcast::replay::{GameRow, replay};
use courtcast::roster::{NBA_TEAMS, Roster};
use courtcast::store::RatingStore;

fn synthetic_season(games: usize) -> Vec<GameRow> {
    let mut rows = Vec::with_capacity(games * 2);
    for i in 0..games {
        let home = NBA_TEAMS[i % NBA_TEAMS.len()];
        let away = NBA_TEAMS[(i * 7 + 1) % NBA_TEAMS.len()];
        if home.id == away.id {
            continue;
        }
        let game_id = format!("00224{i:05}");
        let date = format!("2025-01-{:02}", (i % 28) + 1);
        let (home_pts, away_pts) = if i % 3 == 0 { (98, 104) } else { (112, 105) };
        rows.push(GameRow {
            game_id: game_id.clone(),
            date: date.clone(),
            team: home.full_name.to_string(),
            matchup: format!("{} vs. {}", home.abbrev, away.abbrev),
            points: Some(home_pts),
        });
        rows.push(GameRow {
            game_id,
            date,
            team: away.full_name.to_string(),
            matchup: format!("{} @ {}", away.abbrev, home.abbrev),
            points: Some(away_pts),
        });
    }
    rows
}

fn game_log_json(games: usize) -> String {
    let rows: Vec<String> = synthetic_season(games)
        .into_iter()
        .map(|r| {
            format!(
                r#"["22024",0,"XXX","{}","{}","{}","{}","W",240,{}]"#,
                r.team,
                r.game_id,
                r.date,
                r.matchup,
                r.points.unwrap_or(0)
            )
        })
        .collect();
    format!(
        r#"{{"resultSets":[{{"name":"LeagueGameFinderResults","headers":["SEASON_ID","TEAM_ID","TEAM_ABBREVIATION","TEAM_NAME","GAME_ID","GAME_DATE","MATCHUP","WL","MIN","PTS"],"rowSet":[{}]}}]}}"#,
        rows.join(",")
    )
}

fn bench_game_log_parse(c: &mut Criterion) {
    let raw = game_log_json(600);
    c.bench_function("game_log_parse", |b| {
        b.iter(|| {
            let rows = parse_game_log_json(black_box(&raw)).unwrap();
            black_box(rows.len());
        })
    });
}

fn bench_season_replay(c: &mut Criterion) {
    let rows = synthetic_season(1230);
    let roster = Roster::nba();
    let cfg = EloConfig::default();
    c.bench_function("season_replay", |b| {
        b.iter(|| {
            let mut store = RatingStore::new();
            replay(black_box(&rows), &mut store, &roster, cfg);
            black_box(store.len());
        })
    });
}

criterion_group!(benches, bench_game_log_parse, bench_season_replay);
criterion_main!(benches);
