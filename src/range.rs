use chrono::{Duration, NaiveDate};

/// Which slice of the calendar a page is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Week,
    Month,
    Year,
    All,
}

impl ViewMode {
    /// Unrecognized selector values fall back to the month view.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("week") => ViewMode::Week,
            Some("year") => ViewMode::Year,
            Some("all") => ViewMode::All,
            _ => ViewMode::Month,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Week => "week",
            ViewMode::Month => "month",
            ViewMode::Year => "year",
            ViewMode::All => "all",
        }
    }

    fn dashboard_days(self) -> i64 {
        match self {
            ViewMode::Week => 7,
            ViewMode::Year => 365,
            _ => 30,
        }
    }

    // The history view anchors on today, so the lookback is one day shorter
    // than the dashboard span for the same selector.
    fn history_lookback(self) -> i64 {
        match self {
            ViewMode::Week => 6,
            ViewMode::Year => 364,
            _ => 29,
        }
    }
}

pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_day_key(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Day keys for the dashboard grid: a fixed-length ascending run starting at
/// `today + offset`. The `all` view instead starts at the earliest habit's
/// creation day and runs through today plus a 30-day horizon (never fewer
/// than 30 days); with no habits it behaves like `month`.
pub fn dashboard_range(
    view: ViewMode,
    offset: i64,
    earliest: Option<NaiveDate>,
    today: NaiveDate,
) -> Vec<String> {
    let mut start = today + Duration::days(offset);
    let mut count = view.dashboard_days();

    if view == ViewMode::All {
        if let Some(first) = earliest {
            start = first;
            count = ((today + Duration::days(30)) - first).num_days() + 1;
            count = count.max(30);
        }
    }

    sequence(start, count)
}

/// Day keys for the history report: the inclusive run from `from` (default:
/// today minus the view lookback) to `to` (default: today). The `all` view
/// starts at the earliest habit's creation day, taking precedence over an
/// explicit `from`. Empty when the end precedes the start.
pub fn history_range(
    view: ViewMode,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    earliest: Option<NaiveDate>,
    today: NaiveDate,
) -> Vec<String> {
    let mut start = from.unwrap_or_else(|| today - Duration::days(view.history_lookback()));
    if view == ViewMode::All {
        if let Some(first) = earliest {
            start = first;
        }
    }

    let end = to.unwrap_or(today);
    let count = ((end - start).num_days() + 1).max(0);
    sequence(start, count)
}

fn sequence(start: NaiveDate, count: i64) -> Vec<String> {
    (0..count)
        .map(|i| day_key(start + Duration::days(i)))
        .collect()
}
