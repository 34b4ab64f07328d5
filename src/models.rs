use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// How often a habit is meant to be done. Streaks are counted per calendar
/// day for daily habits and per ISO week for weekly ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[default]
    Daily,
    Weekly,
}

/// A trackable habit plus its completion history.
///
/// `streak`, `longest_streak`, `total_completions` and `last_completed` are
/// caches over `completions`: the ledger recomputes them on every mutation,
/// and read paths re-derive them against the current date before serving.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub frequency: Frequency,
    #[serde(default)]
    pub completions: BTreeSet<NaiveDate>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub last_completed: Option<NaiveDate>,
    #[serde(default)]
    pub streak: u32,
    #[serde(default)]
    pub longest_streak: u32,
    #[serde(default)]
    pub total_completions: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    pub habits: Vec<Habit>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewHabit {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub frequency: Frequency,
}

/// Partial update; `None` leaves a field untouched.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HabitChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub frequency: Option<Frequency>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogRequest {
    pub habit_id: Uuid,
    #[serde(default = "default_completed")]
    pub completed: bool,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

fn default_completed() -> bool {
    true
}

#[derive(Debug, Serialize)]
pub struct DayPoint {
    pub day: String,
    pub completions: u64,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_habits: usize,
    pub max_streak: u32,
    pub total_streak: u64,
    pub total_completions: u64,
    pub weekly_data: Vec<DayPoint>,
}
