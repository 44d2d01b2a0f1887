use super::task::Task;

const MS_PER_HOUR: f64 = 3_600_000.0;

/// Points lost per hour of lateness
pub const PENALTY_PER_HOUR: f64 = 5.0;

/// Completion score for a task: 100 when finished on or before the due
/// instant, minus 5 points per hour late, floored at 0.
///
/// Returns `None` for pending tasks and tasks without both a due date and
/// a due time.
pub fn calculate_efficiency(task: &Task) -> Option<f64> {
    if !task.completed {
        return None;
    }
    let due = task.due_instant()?;
    let completed_at = task.completion_time?;

    let delta_ms = completed_at.signed_duration_since(due).num_milliseconds();
    if delta_ms <= 0 {
        return Some(100.0);
    }

    let delay_hours = delta_ms as f64 / MS_PER_HOUR;
    let efficiency = (100.0 - PENALTY_PER_HOUR * delay_hours).max(0.0);
    Some(round_one_decimal(efficiency))
}

/// Round to one decimal place
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
