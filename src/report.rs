use crate::models::{FlatRecord, Habit, MissSummary, Status};
use crate::range::{day_key, parse_day_key};
use chrono::{Duration, NaiveDate};

/// Per-habit count of days in the range without a completed log, sorted by
/// count descending. Ties keep creation order (the sort is stable).
pub fn miss_summary(habits: &[Habit], days: &[String]) -> Vec<MissSummary> {
    let mut misses: Vec<MissSummary> = habits
        .iter()
        .map(|habit| MissSummary {
            name: habit.name.clone(),
            count: days.iter().filter(|day| !habit.is_done(day)).count(),
        })
        .collect();
    misses.sort_by(|a, b| b.count.cmp(&a.count));
    misses
}

/// Every habit resolved against every day in the range, sorted by day key
/// descending (lexicographic on `YYYY-MM-DD` is chronological).
pub fn flatten(habits: &[Habit], days: &[String]) -> Vec<FlatRecord> {
    let mut records = Vec::with_capacity(habits.len() * days.len());
    for habit in habits {
        for day in days {
            records.push(FlatRecord {
                date: day.clone(),
                target: habit.name.clone(),
                status: if habit.is_done(day) {
                    Status::Done
                } else {
                    Status::Missed
                },
            });
        }
    }
    records.sort_by(|a, b| b.date.cmp(&a.date));
    records
}

/// Consecutive run of "met" days around today, where a day is met when at
/// least half the habits (rounded up) have a completed log on it.
///
/// If today is met the run starts at 1 and extends in both directions;
/// otherwise only the backward run from yesterday counts. The backward scan
/// stops at the earliest habit's creation day and the forward scan at the
/// latest logged day, so both loops terminate.
pub fn current_streak(habits: &[Habit], today: NaiveDate) -> u32 {
    if habits.is_empty() {
        return 0;
    }

    let threshold = habits.len().div_ceil(2);
    let met = |day: NaiveDate| {
        let key = day_key(day);
        habits.iter().filter(|h| h.is_done(&key)).count() >= threshold
    };

    let floor = habits
        .iter()
        .map(Habit::created_day)
        .min()
        .unwrap_or(today);

    let mut streak = 0u32;

    if met(today) {
        streak = 1;
        if let Some(ceiling) = latest_logged_day(habits) {
            let mut day = today + Duration::days(1);
            while day <= ceiling && met(day) {
                streak += 1;
                day = day + Duration::days(1);
            }
        }
    }

    let mut day = today - Duration::days(1);
    while day >= floor && met(day) {
        streak += 1;
        day = day - Duration::days(1);
    }

    streak
}

fn latest_logged_day(habits: &[Habit]) -> Option<NaiveDate> {
    habits
        .iter()
        .filter_map(|h| h.logs.keys().next_back())
        .filter_map(|key| parse_day_key(key))
        .max()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone, Utc};
    use std::collections::BTreeMap;

    fn habit(id: u64, name: &str, created: NaiveDate, done_days: &[&str]) -> Habit {
        let mut logs = BTreeMap::new();
        for day in done_days {
            logs.insert(day.to_string(), true);
        }
        Habit {
            id,
            name: name.to_string(),
            created_at: Utc
                .with_ymd_and_hms(created.year(), created.month(), created.day(), 0, 0, 0)
                .unwrap(),
            logs,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn keys(days: &[&str]) -> Vec<String> {
        days.iter().map(|d| d.to_string()).collect()
    }

    #[test]
    fn misses_plus_dones_cover_the_whole_range() {
        let habits = vec![
            habit(1, "Read", date(2024, 1, 1), &["2024-01-01", "2024-01-03"]),
            habit(2, "Run", date(2024, 1, 1), &[]),
        ];
        let days = keys(&["2024-01-01", "2024-01-02", "2024-01-03"]);

        for habit in &habits {
            let dones = days.iter().filter(|d| habit.is_done(d)).count();
            let misses = miss_summary(std::slice::from_ref(habit), &days)[0].count;
            assert_eq!(dones + misses, days.len());
        }
    }

    #[test]
    fn miss_summary_sorts_descending_with_stable_ties() {
        let habits = vec![
            habit(1, "Read", date(2024, 1, 1), &["2024-01-01", "2024-01-02"]),
            habit(2, "Run", date(2024, 1, 1), &[]),
            habit(3, "Row", date(2024, 1, 1), &[]),
        ];
        let days = keys(&["2024-01-01", "2024-01-02"]);

        let misses = miss_summary(&habits, &days);
        let names: Vec<&str> = misses.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Run", "Row", "Read"]);
        assert_eq!(misses[0].count, 2);
        assert_eq!(misses[2].count, 0);
    }

    #[test]
    fn flattened_table_covers_the_cartesian_product_descending() {
        let habits = vec![
            habit(1, "Read", date(2024, 1, 1), &[]),
            habit(2, "Run", date(2024, 1, 1), &[]),
        ];
        let days = keys(&["2024-01-01", "2024-01-02", "2024-01-03"]);

        let records = flatten(&habits, &days);
        assert_eq!(records.len(), habits.len() * days.len());
        assert!(records.windows(2).all(|w| w[0].date >= w[1].date));
    }

    #[test]
    fn history_worked_example() {
        let habits = vec![habit(1, "Read", date(2024, 1, 1), &["2024-01-01"])];
        let days = keys(&["2024-01-01", "2024-01-02"]);

        let misses = miss_summary(&habits, &days);
        assert_eq!(misses.len(), 1);
        assert_eq!(misses[0].name, "Read");
        assert_eq!(misses[0].count, 1);

        let records = flatten(&habits, &days);
        assert_eq!(records[0].date, "2024-01-02");
        assert_eq!(records[0].status, Status::Missed);
        assert_eq!(records[1].date, "2024-01-01");
        assert_eq!(records[1].status, Status::Done);
    }

    #[test]
    fn streak_is_zero_without_habits() {
        assert_eq!(current_streak(&[], date(2026, 1, 5)), 0);
    }

    #[test]
    fn streak_counts_today_under_majority_rule() {
        // Two habits: threshold is ceil(2/2) = 1, so one completion meets it.
        let habits = vec![
            habit(1, "Read", date(2026, 1, 1), &["2026-01-05"]),
            habit(2, "Run", date(2026, 1, 1), &[]),
        ];
        assert_eq!(current_streak(&habits, date(2026, 1, 5)), 1);
    }

    #[test]
    fn streak_extends_backward_from_yesterday() {
        let habits = vec![habit(
            1,
            "Read",
            date(2026, 1, 1),
            &["2026-01-02", "2026-01-03", "2026-01-04"],
        )];
        // Today unmet: only the backward run counts.
        assert_eq!(current_streak(&habits, date(2026, 1, 5)), 3);
        // Today met: the backward run plus today.
        assert_eq!(current_streak(&habits, date(2026, 1, 4)), 3);
    }

    #[test]
    fn streak_breaks_on_the_first_unmet_day() {
        let habits = vec![habit(
            1,
            "Read",
            date(2026, 1, 1),
            &["2026-01-01", "2026-01-03", "2026-01-04"],
        )];
        assert_eq!(current_streak(&habits, date(2026, 1, 4)), 2);
    }

    #[test]
    fn streak_backward_scan_stops_at_creation_day() {
        // Logs before the habit existed must not extend the run.
        let mut h = habit(1, "Read", date(2026, 1, 10), &["2026-01-08", "2026-01-09", "2026-01-10"]);
        h.created_at = Utc.with_ymd_and_hms(2026, 1, 10, 8, 30, 0).unwrap();
        assert_eq!(current_streak(&[h], date(2026, 1, 10)), 1);
    }
}
