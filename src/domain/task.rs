use super::enums::{Category, Priority};
use chrono::{DateTime, Duration, Local, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike};
use tracing::warn;

/// Task identifier, derived from the creation timestamp in milliseconds
pub type TaskId = u64;

/// Raw field values collected by the input form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub name: String,
    /// "YYYY-MM-DD", empty or absent when no due date was given
    pub due_date: Option<String>,
    /// "HH:MM", empty or absent when no due time was given
    pub due_time: Option<String>,
    pub timezone: String,
    pub priority: Priority,
    pub category: Category,
}

/// A tracked task
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    pub due_date: Option<NaiveDate>,
    pub due_time: Option<NaiveTime>,
    /// Advisory only; due instants are always built in local time
    pub timezone: String,
    pub priority: Priority,
    pub category: Category,
    pub completed: bool,
    /// Set iff `completed` is true
    pub completion_time: Option<DateTime<Local>>,
    /// Display-only creation date
    pub created_at: String,
    /// Once true, never reset for this task
    pub notification_shown: bool,
}

impl Task {
    /// Build a fresh, pending task from form input
    pub fn from_draft(id: TaskId, draft: TaskDraft, now: DateTime<Local>) -> Self {
        let due_date = draft.due_date.as_deref().and_then(parse_due_date);
        let due_time = draft.due_time.as_deref().and_then(parse_due_time);

        Self {
            id,
            name: draft.name.trim().to_string(),
            due_date,
            due_time,
            timezone: draft.timezone,
            priority: draft.priority,
            category: draft.category,
            completed: false,
            completion_time: None,
            created_at: now.format("%m/%d/%Y").to_string(),
            notification_shown: false,
        }
    }

    /// Due instant as local wall-clock time, if both date and time are set
    pub fn due_instant(&self) -> Option<DateTime<Local>> {
        let date = self.due_date?;
        let time = self.due_time?;
        local_instant(NaiveDateTime::new(date, time))
    }

    /// Copy of this task with completion flipped
    pub fn toggled(&self, now: DateTime<Local>) -> Self {
        let completed = !self.completed;
        Self {
            completed,
            completion_time: if completed { Some(now) } else { None },
            ..self.clone()
        }
    }

    /// Copy of this task with the due-soon notification recorded
    pub fn notified(&self) -> Self {
        Self {
            notification_shown: true,
            ..self.clone()
        }
    }

    /// Human-readable due label, e.g. "2024-05-01 14:30"
    pub fn due_label(&self) -> Option<String> {
        match (self.due_date, self.due_time) {
            (Some(date), Some(time)) => Some(format!("{} {}", date.format("%Y-%m-%d"), time.format("%H:%M"))),
            (Some(date), None) => Some(date.format("%Y-%m-%d").to_string()),
            _ => None,
        }
    }
}

/// Parse a form date ("YYYY-MM-DD"). Empty input means "no date".
pub fn parse_due_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(e) => {
            warn!(input = raw, error = %e, "ignoring malformed due date");
            None
        }
    }
}

/// Parse a form time ("HH:MM"). Seconds are accepted but dropped, due times
/// have minute resolution. Empty input means "no time".
pub fn parse_due_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .map_err(|e| warn!(input = raw, error = %e, "ignoring malformed due time"))
        .ok()
        .and_then(|time| time.with_second(0))
}

fn local_instant(naive: NaiveDateTime) -> Option<DateTime<Local>> {
    resolve_wall_clock(&Local, naive)
}

/// Resolve a wall-clock datetime in `tz`. Ambiguous times (DST fall-back)
/// take the earlier instant; times inside a DST gap move forward by an hour
/// (02:30 becomes 03:30 on spring-forward day).
pub fn resolve_wall_clock<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> Option<DateTime<Tz>> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(earliest, _) => Some(earliest),
        LocalResult::None => tz.from_local_datetime(&(naive + Duration::hours(1))).earliest(),
    }
}
