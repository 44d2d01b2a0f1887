use crate::domain::{Task, TaskId};
use crate::notifications::{notify, Notification, NotificationHost};
use crate::store::TaskStore;
use chrono::{DateTime, Local};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default UI tick interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 250;

/// Default period between due-soon scans
pub const DEFAULT_SCAN_SECS: u64 = 60;

/// Default due-soon window
pub const DEFAULT_WINDOW_MINS: i64 = 60;

/// Get tick duration
pub fn tick_duration() -> Duration {
    Duration::from_millis(DEFAULT_TICK_MS)
}

/// Fixed-period timer driven by the event loop.
///
/// Nothing fires until `start`; `stop` cancels any pending fire.
#[derive(Debug, Clone)]
pub struct ScanTimer {
    period: Duration,
    next_due: Option<Instant>,
}

impl ScanTimer {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Arm the timer; the first fire is one period after `now`. A period too
    /// long to represent leaves the timer idle.
    pub fn start(&mut self, now: Instant) {
        self.next_due = now.checked_add(self.period);
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Returns true when the period elapsed, and re-arms from `now`
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = now.checked_add(self.period);
                true
            }
            _ => false,
        }
    }
}

/// Whether a task should get its due-soon notification at `now`
pub fn is_due_soon(task: &Task, now: DateTime<Local>, window: chrono::Duration) -> bool {
    if task.completed || task.notification_shown {
        return false;
    }
    let Some(due) = task.due_instant() else {
        return false;
    };
    let time_diff = due.signed_duration_since(now);
    time_diff > chrono::Duration::zero() && time_diff <= window
}

/// Notify every pending task whose due instant falls inside the window,
/// then record the notification so it never fires twice.
///
/// Returns the ids that crossed into "notified" during this scan.
pub fn scan_due_soon(
    store: &mut TaskStore,
    host: &mut dyn NotificationHost,
    now: DateTime<Local>,
    window: chrono::Duration,
) -> Vec<TaskId> {
    let snapshot = store.snapshot();
    let mut notified = Vec::new();

    for task in snapshot.iter().filter(|t| is_due_soon(t, now, window)) {
        let sent = notify(host, &Notification::due_soon(task));
        debug!(id = task.id, sent, "due-soon reminder");
        store.mark_notified(task.id);
        notified.push(task.id);
    }

    if !notified.is_empty() {
        info!(count = notified.len(), "due-soon scan marked tasks");
    }
    notified
}

/// Periodic due-soon scanner with explicit start/stop
#[derive(Debug, Clone)]
pub struct DueSoonNotifier {
    timer: ScanTimer,
    window: chrono::Duration,
}

impl DueSoonNotifier {
    pub fn new(period: Duration, window: chrono::Duration) -> Self {
        Self {
            timer: ScanTimer::new(period),
            window,
        }
    }

    pub fn start(&mut self, now: Instant) {
        debug!(period_secs = self.timer.period().as_secs(), "due-soon scanner started");
        self.timer.start(now);
    }

    pub fn stop(&mut self) {
        if self.timer.is_running() {
            debug!("due-soon scanner stopped");
        }
        self.timer.stop();
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.timer.is_running()
    }

    /// Scan if the period elapsed. `instant` drives the timer, `now` is the
    /// wall clock used against due instants.
    pub fn tick(
        &mut self,
        store: &mut TaskStore,
        host: &mut dyn NotificationHost,
        instant: Instant,
        now: DateTime<Local>,
    ) -> Vec<TaskId> {
        if !self.timer.poll(instant) {
            return Vec::new();
        }
        scan_due_soon(store, host, now, self.window)
    }
}

impl Default for DueSoonNotifier {
    fn default() -> Self {
        Self::new(
            Duration::from_secs(DEFAULT_SCAN_SECS),
            chrono::Duration::minutes(DEFAULT_WINDOW_MINS),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Priority, TaskDraft};
    use crate::notifications::{Permission, RecordingHost};

    fn window() -> chrono::Duration {
        chrono::Duration::minutes(DEFAULT_WINDOW_MINS)
    }

    fn add_due(store: &mut TaskStore, name: &str, due: DateTime<Local>, now: DateTime<Local>) -> TaskId {
        store
            .add_task_at(
                TaskDraft {
                    name: name.to_string(),
                    due_date: Some(due.format("%Y-%m-%d").to_string()),
                    due_time: Some(due.format("%H:%M").to_string()),
                    timezone: "Local".to_string(),
                    priority: Priority::High,
                    category: Category::TakeAction,
                },
                now,
            )
            .unwrap()
    }

    #[test]
    fn test_tick_duration() {
        let duration = tick_duration();
        assert_eq!(duration, Duration::from_millis(250));
    }

    #[test]
    fn test_timer_does_not_fire_until_started() {
        let mut timer = ScanTimer::new(Duration::from_secs(60));
        let t0 = Instant::now();
        assert!(!timer.is_running());
        assert!(!timer.poll(t0 + Duration::from_secs(600)));
    }

    #[test]
    fn test_timer_fires_once_per_period() {
        let mut timer = ScanTimer::new(Duration::from_secs(60));
        let t0 = Instant::now();
        timer.start(t0);

        assert!(!timer.poll(t0 + Duration::from_secs(59)));
        assert!(timer.poll(t0 + Duration::from_secs(60)));
        assert!(!timer.poll(t0 + Duration::from_secs(61)));
        assert!(timer.poll(t0 + Duration::from_secs(120)));
    }

    #[test]
    fn test_timer_with_unrepresentable_period_stays_idle() {
        let mut timer = ScanTimer::new(Duration::MAX);
        let t0 = Instant::now();
        timer.start(t0);
        assert!(!timer.is_running());
        assert!(!timer.poll(t0 + Duration::from_secs(3600)));
    }

    #[test]
    fn test_timer_stop_cancels() {
        let mut timer = ScanTimer::new(Duration::from_secs(60));
        let t0 = Instant::now();
        timer.start(t0);
        timer.stop();
        assert!(!timer.is_running());
        assert!(!timer.poll(t0 + Duration::from_secs(60)));
    }

    #[test]
    fn test_due_in_30_minutes_notifies_once() {
        let now = Local::now();
        let mut store = TaskStore::new();
        let id = add_due(&mut store, "Pay bills", now + chrono::Duration::minutes(30), now);
        let mut host = RecordingHost::granted();

        let first = scan_due_soon(&mut store, &mut host, now, window());
        assert_eq!(first, vec![id]);
        assert_eq!(host.sent.len(), 1);
        assert_eq!(host.sent[0].tag, format!("task-{}", id));
        assert!(store.get(id).unwrap().notification_shown);

        let second = scan_due_soon(&mut store, &mut host, now + chrono::Duration::minutes(1), window());
        assert!(second.is_empty());
        assert_eq!(host.sent.len(), 1);
    }

    #[test]
    fn test_reopened_task_is_not_notified_again() {
        let now = Local::now();
        let mut store = TaskStore::new();
        let id = add_due(&mut store, "Call back", now + chrono::Duration::minutes(30), now);
        let mut host = RecordingHost::granted();

        assert_eq!(scan_due_soon(&mut store, &mut host, now, window()), vec![id]);

        store.toggle_task_at(id, now);
        store.toggle_task_at(id, now + chrono::Duration::minutes(1));
        let task = store.get(id).unwrap();
        assert!(!task.completed);
        assert!(task.notification_shown);

        let rescan = scan_due_soon(&mut store, &mut host, now + chrono::Duration::minutes(2), window());
        assert!(rescan.is_empty());
        assert_eq!(host.sent.len(), 1);
    }

    #[test]
    fn test_due_in_two_hours_is_ignored() {
        let now = Local::now();
        let mut store = TaskStore::new();
        let id = add_due(&mut store, "Later", now + chrono::Duration::hours(2), now);
        let mut host = RecordingHost::granted();

        assert!(scan_due_soon(&mut store, &mut host, now, window()).is_empty());
        assert!(host.sent.is_empty());
        assert!(!store.get(id).unwrap().notification_shown);
    }

    #[test]
    fn test_overdue_is_never_notified() {
        let now = Local::now();
        let mut store = TaskStore::new();
        let id = add_due(&mut store, "Missed", now - chrono::Duration::minutes(10), now);
        let mut host = RecordingHost::granted();

        assert!(scan_due_soon(&mut store, &mut host, now, window()).is_empty());
        assert!(!store.get(id).unwrap().notification_shown);
    }

    #[test]
    fn test_completed_and_undated_are_skipped() {
        let now = Local::now();
        let mut store = TaskStore::new();
        let done = add_due(&mut store, "Done", now + chrono::Duration::minutes(20), now);
        store.toggle_task_at(done, now);
        store
            .add_task_at(
                TaskDraft {
                    name: "Undated".to_string(),
                    due_date: None,
                    due_time: Some("10:00".to_string()),
                    timezone: "Local".to_string(),
                    priority: Priority::Low,
                    category: Category::SelfWork,
                },
                now,
            )
            .unwrap();
        let mut host = RecordingHost::granted();

        assert!(scan_due_soon(&mut store, &mut host, now, window()).is_empty());
        assert!(host.sent.is_empty());
    }

    #[test]
    fn test_without_permission_still_marks_notified() {
        let now = Local::now();
        let mut store = TaskStore::new();
        let id = add_due(&mut store, "Quiet", now + chrono::Duration::minutes(15), now);
        let mut host = RecordingHost {
            permission: Permission::Denied,
            ..RecordingHost::default()
        };

        assert_eq!(scan_due_soon(&mut store, &mut host, now, window()), vec![id]);
        assert!(host.sent.is_empty());
        assert!(store.get(id).unwrap().notification_shown);
    }

    #[test]
    fn test_every_eligible_task_notified_in_one_scan() {
        let now = Local::now();
        let mut store = TaskStore::new();
        let a = add_due(&mut store, "A", now + chrono::Duration::minutes(5), now);
        let b = add_due(&mut store, "B", now + chrono::Duration::minutes(45), now);
        add_due(&mut store, "C", now + chrono::Duration::hours(3), now);
        let mut host = RecordingHost::granted();

        let mut notified = scan_due_soon(&mut store, &mut host, now, window());
        notified.sort_unstable();
        assert_eq!(notified, vec![a, b]);
        assert_eq!(host.sent.len(), 2);
    }

    #[test]
    fn test_notifier_scans_only_on_period() {
        let now = Local::now();
        let t0 = Instant::now();
        let mut store = TaskStore::new();
        let id = add_due(&mut store, "Soon", now + chrono::Duration::minutes(30), now);
        let mut host = RecordingHost::granted();
        let mut notifier = DueSoonNotifier::default();

        notifier.start(t0);
        assert!(notifier.tick(&mut store, &mut host, t0 + Duration::from_secs(30), now).is_empty());
        assert_eq!(
            notifier.tick(&mut store, &mut host, t0 + Duration::from_secs(60), now),
            vec![id]
        );

        notifier.stop();
        assert!(!notifier.is_running());
        assert!(notifier.tick(&mut store, &mut host, t0 + Duration::from_secs(600), now).is_empty());
    }
}
