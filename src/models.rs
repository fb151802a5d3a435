use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A tracked target with its per-day completion log.
///
/// Logs are keyed by day key (`YYYY-MM-DD`), so there is at most one entry
/// per habit per calendar day and upserts are idempotent by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    pub id: u64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub logs: BTreeMap<String, bool>,
}

impl Habit {
    /// A day counts as done only with an explicit completed log; absence of
    /// a log is equivalent to not completed.
    pub fn is_done(&self, day: &str) -> bool {
        self.logs.get(day).copied().unwrap_or(false)
    }

    pub fn created_day(&self) -> NaiveDate {
        self.created_at.date_naive()
    }
}

/// The whole record store: habits in creation order plus the id counter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerData {
    pub next_id: u64,
    pub habits: Vec<Habit>,
}

impl Default for TrackerData {
    fn default() -> Self {
        Self {
            next_id: 1,
            habits: Vec::new(),
        }
    }
}

impl TrackerData {
    /// Create a habit. Blank names are a silent no-op and return `None`.
    pub fn create_habit(&mut self, name: &str, created_at: DateTime<Utc>) -> Option<&Habit> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let id = self.next_id;
        self.next_id += 1;
        self.habits.push(Habit {
            id,
            name: name.to_string(),
            created_at,
            logs: BTreeMap::new(),
        });
        self.habits.last()
    }

    /// Rename a habit. Returns `false` when the id is unknown; a blank name
    /// leaves the current name in place.
    pub fn rename_habit(&mut self, id: u64, name: &str) -> bool {
        let Some(habit) = self.habits.iter_mut().find(|h| h.id == id) else {
            return false;
        };
        let name = name.trim();
        if !name.is_empty() {
            habit.name = name.to_string();
        }
        true
    }

    /// Delete a habit and, with it, every log it owns. Returns `false` when
    /// the id is unknown.
    pub fn delete_habit(&mut self, id: u64) -> bool {
        let before = self.habits.len();
        self.habits.retain(|h| h.id != id);
        self.habits.len() != before
    }

    /// Set the completion flag for `(id, day)`, replacing any existing log
    /// for that day. Returns `false` when the id is unknown.
    pub fn upsert_log(&mut self, id: u64, day: &str, completed: bool) -> bool {
        let Some(habit) = self.habits.iter_mut().find(|h| h.id == id) else {
            return false;
        };
        habit.logs.insert(day.to_string(), completed);
        true
    }

    /// Creation day of the oldest habit. Habits are kept in creation order.
    pub fn earliest_created_day(&self) -> Option<NaiveDate> {
        self.habits.first().map(Habit::created_day)
    }
}

// ---- API payloads ----

#[derive(Debug, Deserialize)]
pub struct NewTargetForm {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateTargetRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct RenameTargetRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct UpsertLogRequest {
    pub habit_id: u64,
    pub date: String,
    pub completed: bool,
}

#[derive(Debug, Deserialize)]
pub struct DashboardParams {
    pub view: Option<String>,
    pub offset: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct HistoryParams {
    pub view: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub key: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TargetSummary {
    pub id: u64,
    pub name: String,
    pub created: String,
}

#[derive(Debug, Serialize)]
pub struct TargetListResponse {
    pub targets: Vec<TargetSummary>,
}

#[derive(Debug, Serialize)]
pub struct LogResponse {
    pub habit_id: u64,
    pub date: String,
    pub completed: bool,
}

#[derive(Debug, Serialize)]
pub struct DashboardRow {
    pub id: u64,
    pub name: String,
    pub done: Vec<bool>,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub view: String,
    pub offset: i64,
    pub today: String,
    pub days: Vec<String>,
    pub targets: Vec<DashboardRow>,
    pub streak: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    Done,
    Missed,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Done => "Done",
            Status::Missed => "Missed",
        }
    }
}

/// One cell of the flattened history table. Field names match the report
/// column headers.
#[derive(Debug, Clone, Serialize)]
pub struct FlatRecord {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Target")]
    pub target: String,
    #[serde(rename = "Status")]
    pub status: Status,
}

#[derive(Debug, Clone, Serialize)]
pub struct MissSummary {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub view: String,
    pub day_count: usize,
    pub misses: Vec<MissSummary>,
    pub records: Vec<FlatRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data_with(names: &[&str]) -> TrackerData {
        let mut data = TrackerData::default();
        for name in names {
            data.create_habit(name, Utc::now());
        }
        data
    }

    #[test]
    fn create_assigns_stable_ids_in_creation_order() {
        let data = data_with(&["Read", "Run"]);
        let ids: Vec<u64> = data.habits.iter().map(|h| h.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(data.next_id, 3);
    }

    #[test]
    fn create_with_blank_name_is_a_no_op() {
        let mut data = TrackerData::default();
        assert!(data.create_habit("  ", Utc::now()).is_none());
        assert!(data.habits.is_empty());
        assert_eq!(data.next_id, 1);
    }

    #[test]
    fn repeated_upsert_keeps_one_log_per_day() {
        let mut data = data_with(&["Read"]);
        assert!(data.upsert_log(1, "2024-01-01", true));
        assert!(data.upsert_log(1, "2024-01-01", true));
        assert!(data.upsert_log(1, "2024-01-01", false));
        assert_eq!(data.habits[0].logs.len(), 1);
        assert!(!data.habits[0].is_done("2024-01-01"));
    }

    #[test]
    fn upsert_on_unknown_id_reports_not_found() {
        let mut data = data_with(&["Read"]);
        assert!(!data.upsert_log(99, "2024-01-01", true));
    }

    #[test]
    fn rename_keeps_current_name_on_blank_input() {
        let mut data = data_with(&["Read"]);
        assert!(data.rename_habit(1, ""));
        assert_eq!(data.habits[0].name, "Read");
        assert!(data.rename_habit(1, "Read more"));
        assert_eq!(data.habits[0].name, "Read more");
        assert!(!data.rename_habit(42, "Ghost"));
    }

    #[test]
    fn delete_cascades_logs_with_the_habit() {
        let mut data = data_with(&["Read", "Run"]);
        data.upsert_log(1, "2024-01-01", true);
        assert!(data.delete_habit(1));
        assert_eq!(data.habits.len(), 1);
        assert_eq!(data.habits[0].name, "Run");
        assert!(!data.delete_habit(1));
    }
}
