use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};

use crate::elo::{BASELINE_RATING, round_for_storage};
use crate::roster::Roster;

/// Current rating per canonical team name. A team missing from the map
/// reads as the 1500 baseline; that is the cold-start policy, not an error.
///
/// Serializes transparently as the flat name-to-rating map, which is the
/// persisted file format.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RatingStore {
    ratings: HashMap<String, f64>,
}

impl RatingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rating(&self, team: &str) -> f64 {
        self.ratings.get(team).copied().unwrap_or(BASELINE_RATING)
    }

    /// Writes a rating, rounded to the 2-decimal storage precision.
    pub fn set_rating(&mut self, team: &str, rating: f64) {
        self.ratings
            .insert(team.to_string(), round_for_storage(rating));
    }

    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    /// Prepares a loaded store for a replay run: an empty store is seeded
    /// with every roster team at baseline, a non-empty one keeps its values
    /// but drops entries whose key is no longer in the canonical roster.
    pub fn align_to_roster(&mut self, roster: &Roster) {
        if self.ratings.is_empty() {
            for team in roster.team_names() {
                self.ratings.insert(team.to_string(), BASELINE_RATING);
            }
            return;
        }
        let before = self.ratings.len();
        self.ratings.retain(|team, _| roster.contains(team));
        let dropped = before - self.ratings.len();
        if dropped > 0 {
            info!("dropped {dropped} stale rating entries not in the roster");
        }
    }

    /// Teams sorted by rating, strongest first; name breaks ties.
    pub fn leaderboard(&self) -> Vec<(&str, f64)> {
        let mut rows: Vec<(&str, f64)> = self
            .ratings
            .iter()
            .map(|(team, rating)| (team.as_str(), *rating))
            .collect();
        rows.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        rows
    }

    /// Loads persisted ratings. A missing file is "no prior state" and
    /// yields an empty store; a corrupt file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::new());
            }
            Err(err) => {
                return Err(err).with_context(|| format!("read ratings file {}", path.display()));
            }
        };
        serde_json::from_str(&raw).context("invalid ratings json")
    }

    /// Persists via write-then-rename so a crash mid-write cannot clobber
    /// the previous valid file. A failed save is fatal for the run.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("create ratings dir {}", parent.display()))?;
            }
        }
        let json = serde_json::to_string_pretty(self).context("serialize ratings")?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json).with_context(|| format!("write ratings to {}", tmp.display()))?;
        fs::rename(&tmp, path).context("swap ratings file")?;
        Ok(())
    }
}
