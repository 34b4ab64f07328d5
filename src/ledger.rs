use crate::errors::HabitError;
use crate::models::{AppData, Habit};
use crate::streak;
use chrono::{Duration, NaiveDate, Utc};
use uuid::Uuid;

/// How far back a completion may be logged or unlogged. Dates after today
/// are always rejected.
#[derive(Debug, Clone, Copy)]
pub struct EditWindow {
    pub backfill_days: i64,
}

impl Default for EditWindow {
    fn default() -> Self {
        Self { backfill_days: 30 }
    }
}

/// The canonical calendar date: completions are interpreted on the UTC
/// calendar regardless of where the caller lives.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn set_completion(
    data: &mut AppData,
    id: Uuid,
    date: Option<NaiveDate>,
    completed: bool,
    window: EditWindow,
) -> Result<Habit, HabitError> {
    set_completion_at(today(), data, id, date, completed, window)
}

/// Marks `date` (default: today) complete or incomplete for one habit and
/// recomputes its derived fields. Validation runs before any mutation, so a
/// rejected call leaves the habit untouched. Logging an already-logged date
/// or unlogging an absent one is a no-op on the set.
pub fn set_completion_at(
    today: NaiveDate,
    data: &mut AppData,
    id: Uuid,
    date: Option<NaiveDate>,
    completed: bool,
    window: EditWindow,
) -> Result<Habit, HabitError> {
    let date = date.unwrap_or(today);
    check_window(today, date, window)?;

    let habit = data
        .habits
        .iter_mut()
        .find(|habit| habit.id == id)
        .ok_or(HabitError::NotFound(id))?;

    if completed {
        habit.completions.insert(date);
    } else {
        habit.completions.remove(&date);
    }
    refresh_derived_at(today, habit);

    Ok(habit.clone())
}

fn check_window(today: NaiveDate, date: NaiveDate, window: EditWindow) -> Result<(), HabitError> {
    if date > today {
        return Err(HabitError::Validation(format!(
            "date {date} is in the future"
        )));
    }
    if today - date > Duration::days(window.backfill_days) {
        return Err(HabitError::Validation(format!(
            "date {date} is more than {} days in the past",
            window.backfill_days
        )));
    }
    Ok(())
}

/// Re-derives every cached field from the completion set.
pub fn refresh_derived_at(today: NaiveDate, habit: &mut Habit) {
    let summary = streak::compute_streaks_at(today, &habit.completions, habit.frequency);
    habit.streak = summary.current;
    habit.longest_streak = summary.longest;
    habit.total_completions = habit.completions.len() as u64;
    habit.last_completed = habit.completions.iter().next_back().copied();
}

#[derive(Debug, Default)]
pub struct BulkOutcome {
    pub updated: Vec<Habit>,
    pub skipped: Vec<Uuid>,
}

pub fn bulk_set_completion(data: &mut AppData, ids: &[Uuid], window: EditWindow) -> BulkOutcome {
    bulk_set_completion_at(today(), data, ids, window)
}

/// Logs today as complete for every habit in `ids`. Ids are deduplicated
/// and processed in sorted order; unknown ids are skipped and reported
/// rather than failing the batch.
pub fn bulk_set_completion_at(
    today: NaiveDate,
    data: &mut AppData,
    ids: &[Uuid],
    window: EditWindow,
) -> BulkOutcome {
    let mut ids = ids.to_vec();
    ids.sort_unstable();
    ids.dedup();

    let mut outcome = BulkOutcome::default();
    for id in ids {
        match set_completion_at(today, data, id, Some(today), true, window) {
            Ok(habit) => outcome.updated.push(habit),
            Err(_) => outcome.skipped.push(id),
        }
    }
    outcome
}
