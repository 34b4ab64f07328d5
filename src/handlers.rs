use crate::errors::AppError;
use crate::ledger;
use crate::models::{Frequency, Habit, HabitChanges, LogRequest, NewHabit, StatsResponse};
use crate::state::AppState;
use crate::stats::build_stats;
use crate::storage::persist_data;
use crate::store;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use tracing::warn;
use uuid::Uuid;

pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Habits API" }))
}

pub async fn list_habits(State(state): State<AppState>) -> Result<Json<Vec<Habit>>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(store::list_habits_at(ledger::today(), &data)))
}

pub async fn create_habit(
    State(state): State<AppState>,
    Json(payload): Json<NewHabit>,
) -> Result<Json<Habit>, AppError> {
    let mut data = state.data.lock().await;
    let habit = store::create_habit(&mut data, payload)?;
    persist_data(&state.data_path, &data).await?;
    Ok(Json(habit))
}

pub async fn update_habit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<HabitChanges>,
) -> Result<Json<Habit>, AppError> {
    let mut data = state.data.lock().await;
    let habit = store::update_habit(&mut data, id, payload)?;
    persist_data(&state.data_path, &data).await?;
    Ok(Json(habit))
}

pub async fn delete_habit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let mut data = state.data.lock().await;
    store::delete_habit(&mut data, id)?;
    persist_data(&state.data_path, &data).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn log_habit(
    State(state): State<AppState>,
    Json(payload): Json<LogRequest>,
) -> Result<Json<Habit>, AppError> {
    let mut data = state.data.lock().await;
    let habit = ledger::set_completion(
        &mut data,
        payload.habit_id,
        payload.date,
        payload.completed,
        state.window,
    )?;
    persist_data(&state.data_path, &data).await?;
    Ok(Json(habit))
}

pub async fn bulk_log_habits(
    State(state): State<AppState>,
    Json(ids): Json<Vec<Uuid>>,
) -> Result<Json<Vec<Habit>>, AppError> {
    let mut data = state.data.lock().await;
    let outcome = ledger::bulk_set_completion(&mut data, &ids, state.window);
    if !outcome.skipped.is_empty() {
        warn!("bulk log skipped unknown habits: {:?}", outcome.skipped);
    }
    persist_data(&state.data_path, &data).await?;
    Ok(Json(outcome.updated))
}

pub async fn get_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(build_stats(&data)))
}

const SAMPLE_HABITS: [(&str, &str); 5] = [
    ("Morning Meditation", "5 minutes of mindful breathing"),
    ("Read 10 Pages", "Read 10 pages of a book"),
    ("Evening Walk", "30-minute walk in nature"),
    ("Gratitude Journal", "Write 3 things I'm grateful for"),
    ("Drink 8 Glasses of Water", "Stay hydrated throughout the day"),
];

pub async fn seed(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let mut data = state.data.lock().await;
    if !data.habits.is_empty() {
        return Ok(Json(json!({ "message": "data already exists" })));
    }

    for (name, description) in SAMPLE_HABITS {
        store::create_habit(
            &mut data,
            NewHabit {
                name: name.to_string(),
                description: description.to_string(),
                frequency: Frequency::Daily,
            },
        )?;
    }
    persist_data(&state.data_path, &data).await?;

    Ok(Json(json!({ "message": "sample data created" })))
}
