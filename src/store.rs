use crate::errors::HabitError;
use crate::ledger;
use crate::models::{AppData, Habit, HabitChanges, NewHabit};
use chrono::{NaiveDate, Utc};
use std::collections::BTreeSet;
use uuid::Uuid;

pub fn create_habit(data: &mut AppData, input: NewHabit) -> Result<Habit, HabitError> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(HabitError::Validation("name must not be empty".into()));
    }

    let habit = Habit {
        id: Uuid::new_v4(),
        name: name.to_string(),
        description: input.description,
        frequency: input.frequency,
        completions: BTreeSet::new(),
        created_at: Utc::now(),
        last_completed: None,
        streak: 0,
        longest_streak: 0,
        total_completions: 0,
    };
    data.habits.push(habit.clone());
    Ok(habit)
}

pub fn update_habit(
    data: &mut AppData,
    id: Uuid,
    changes: HabitChanges,
) -> Result<Habit, HabitError> {
    update_habit_at(ledger::today(), data, id, changes)
}

/// Partial update of name, description or frequency. Never touches the
/// completion set; a frequency change re-derives the cached streak fields
/// since the unit of consecutiveness changed. All validation happens before
/// the first field is assigned.
pub fn update_habit_at(
    today: NaiveDate,
    data: &mut AppData,
    id: Uuid,
    changes: HabitChanges,
) -> Result<Habit, HabitError> {
    if changes.name.is_none() && changes.description.is_none() && changes.frequency.is_none() {
        return Err(HabitError::Validation("no update fields provided".into()));
    }

    let name = match changes.name {
        Some(name) => {
            let trimmed = name.trim().to_string();
            if trimmed.is_empty() {
                return Err(HabitError::Validation("name must not be empty".into()));
            }
            Some(trimmed)
        }
        None => None,
    };

    let habit = data
        .habits
        .iter_mut()
        .find(|habit| habit.id == id)
        .ok_or(HabitError::NotFound(id))?;

    if let Some(name) = name {
        habit.name = name;
    }
    if let Some(description) = changes.description {
        habit.description = description;
    }
    if let Some(frequency) = changes.frequency {
        habit.frequency = frequency;
        ledger::refresh_derived_at(today, habit);
    }

    Ok(habit.clone())
}

/// Removes the habit and its completion history permanently.
pub fn delete_habit(data: &mut AppData, id: Uuid) -> Result<(), HabitError> {
    let index = data
        .habits
        .iter()
        .position(|habit| habit.id == id)
        .ok_or(HabitError::NotFound(id))?;
    data.habits.remove(index);
    Ok(())
}

pub fn get_habit(data: &AppData, id: Uuid) -> Result<&Habit, HabitError> {
    data.habits
        .iter()
        .find(|habit| habit.id == id)
        .ok_or(HabitError::NotFound(id))
}

/// Habits in insertion order, with the cached streak fields re-derived
/// against `today` so a habit never reports a streak computed on an earlier
/// day.
pub fn list_habits_at(today: NaiveDate, data: &AppData) -> Vec<Habit> {
    data.habits
        .iter()
        .map(|habit| {
            let mut habit = habit.clone();
            ledger::refresh_derived_at(today, &mut habit);
            habit
        })
        .collect()
}
