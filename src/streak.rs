use crate::models::Frequency;
use chrono::{Datelike, Duration, NaiveDate};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StreakSummary {
    pub current: u32,
    pub longest: u32,
}

/// Computes the current and longest streak for a completion history.
///
/// Pure over its inputs: callers pass `today` so the same history always
/// yields the same summary. The current streak walks backwards from `today`
/// (daily) or the ISO week containing it (weekly); a period with no
/// completion yet does not break the streak until it has fully passed, so
/// the walk starts one period back when the anchor itself is unlogged.
pub fn compute_streaks_at(
    today: NaiveDate,
    completions: &BTreeSet<NaiveDate>,
    frequency: Frequency,
) -> StreakSummary {
    match frequency {
        Frequency::Daily => period_streaks(today, completions, 1),
        Frequency::Weekly => {
            let weeks: BTreeSet<NaiveDate> =
                completions.iter().map(|date| week_start(*date)).collect();
            period_streaks(week_start(today), &weeks, 7)
        }
    }
}

/// Shared walk over qualifying periods. Daily habits use the dates
/// themselves with a one-day step; weekly habits collapse each date to its
/// week's Monday and step by seven days.
fn period_streaks(anchor: NaiveDate, periods: &BTreeSet<NaiveDate>, step_days: i64) -> StreakSummary {
    if periods.is_empty() {
        return StreakSummary::default();
    }
    let step = Duration::days(step_days);

    let mut cursor = if periods.contains(&anchor) {
        anchor
    } else {
        anchor - step
    };
    let mut current = 0u32;
    while periods.contains(&cursor) {
        current += 1;
        cursor = cursor - step;
    }

    let mut longest = 0u32;
    let mut run = 0u32;
    let mut prev: Option<NaiveDate> = None;
    for &period in periods {
        run = match prev {
            Some(previous) if period - previous == step => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        prev = Some(period);
    }

    StreakSummary { current, longest }
}

pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}
