use crate::models::{AppData, DayPoint, StatsResponse};
use crate::streak;
use chrono::{Duration, NaiveDate};

pub fn build_stats(data: &AppData) -> StatsResponse {
    build_stats_at(crate::ledger::today(), data)
}

/// Cross-habit rollups over a store snapshot. Streaks are recomputed from
/// the completion sets rather than read from the caches, so the numbers are
/// correct for `today` no matter when each habit was last mutated.
pub fn build_stats_at(today: NaiveDate, data: &AppData) -> StatsResponse {
    let mut max_streak = 0u32;
    let mut total_streak = 0u64;
    let mut total_completions = 0u64;
    for habit in &data.habits {
        let summary = streak::compute_streaks_at(today, &habit.completions, habit.frequency);
        max_streak = max_streak.max(summary.current);
        total_streak += u64::from(summary.current);
        total_completions += habit.completions.len() as u64;
    }

    // One bucket per day for the last 7 calendar days ending today,
    // oldest first; a habit counts at most once per day.
    let mut weekly_data = Vec::with_capacity(7);
    for offset in (0..7).rev() {
        let date = today - Duration::days(offset);
        let completions = data
            .habits
            .iter()
            .filter(|habit| habit.completions.contains(&date))
            .count() as u64;
        weekly_data.push(DayPoint {
            day: date.format("%a").to_string(),
            completions,
        });
    }

    StatsResponse {
        total_habits: data.habits.len(),
        max_streak,
        total_streak,
        total_completions,
        weekly_data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{self, EditWindow};
    use crate::models::{Frequency, NewHabit};
    use crate::store;
    use uuid::Uuid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn new_habit(data: &mut AppData, name: &str) -> Uuid {
        store::create_habit(
            data,
            NewHabit {
                name: name.to_string(),
                description: String::new(),
                frequency: Frequency::Daily,
            },
        )
        .unwrap()
        .id
    }

    #[test]
    fn empty_store_yields_zeroed_histogram() {
        let stats = build_stats_at(date(2026, 1, 5), &AppData::default());

        assert_eq!(stats.total_habits, 0);
        assert_eq!(stats.max_streak, 0);
        assert_eq!(stats.total_streak, 0);
        assert_eq!(stats.total_completions, 0);
        assert_eq!(stats.weekly_data.len(), 7);
        assert!(stats.weekly_data.iter().all(|day| day.completions == 0));
    }

    #[test]
    fn histogram_is_chronological_and_ends_today() {
        let mut data = AppData::default();
        let id = new_habit(&mut data, "Meditation");
        let today = date(2026, 1, 5);
        ledger::set_completion_at(today, &mut data, id, None, true, EditWindow::default())
            .unwrap();

        let stats = build_stats_at(today, &data);
        assert_eq!(stats.weekly_data.len(), 7);
        // 2026-01-05 is a Monday, so the window runs Tue..Mon.
        assert_eq!(stats.weekly_data[0].day, "Tue");
        assert_eq!(stats.weekly_data[6].day, "Mon");
        assert_eq!(stats.weekly_data[6].completions, 1);
        assert!(stats.weekly_data[..6].iter().all(|day| day.completions == 0));
    }

    #[test]
    fn histogram_counts_each_habit_once_per_day() {
        let mut data = AppData::default();
        let a = new_habit(&mut data, "Meditation");
        let b = new_habit(&mut data, "Reading");
        let today = date(2026, 1, 5);
        let window = EditWindow::default();

        ledger::set_completion_at(today, &mut data, a, None, true, window).unwrap();
        ledger::set_completion_at(today, &mut data, b, None, true, window).unwrap();
        ledger::set_completion_at(today, &mut data, b, Some(date(2026, 1, 3)), true, window)
            .unwrap();

        let stats = build_stats_at(today, &data);
        assert_eq!(stats.weekly_data[6].completions, 2);
        assert_eq!(stats.weekly_data[4].completions, 1);
    }

    #[test]
    fn rollups_sum_across_habits() {
        let mut data = AppData::default();
        let a = new_habit(&mut data, "Meditation");
        let b = new_habit(&mut data, "Reading");
        new_habit(&mut data, "Walking");
        let today = date(2026, 1, 5);
        let window = EditWindow::default();

        ledger::set_completion_at(today, &mut data, a, None, true, window).unwrap();
        ledger::set_completion_at(today, &mut data, a, Some(date(2026, 1, 4)), true, window)
            .unwrap();
        ledger::set_completion_at(today, &mut data, b, None, true, window).unwrap();

        let stats = build_stats_at(today, &data);
        assert_eq!(stats.total_habits, 3);
        assert_eq!(stats.max_streak, 2);
        assert_eq!(stats.total_streak, 3);
        assert_eq!(stats.total_completions, 3);
    }

    #[test]
    fn rollups_use_streaks_recomputed_for_today() {
        let mut data = AppData::default();
        let id = new_habit(&mut data, "Meditation");
        let logged = date(2026, 1, 5);
        ledger::set_completion_at(logged, &mut data, id, None, true, EditWindow::default())
            .unwrap();

        let stats = build_stats_at(date(2026, 1, 9), &data);
        assert_eq!(stats.max_streak, 0);
        assert_eq!(stats.total_completions, 1);
    }
}
