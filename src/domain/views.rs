use super::efficiency::{calculate_efficiency, round_one_decimal};
use super::enums::{Category, Priority, StatusFilter, Theme};
use super::task::Task;

/// Active list filters. `None` means "all".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskFilter {
    pub status: StatusFilter,
    pub priority: Option<Priority>,
    pub category: Option<Category>,
}

impl TaskFilter {
    /// Check whether a task passes every active filter
    pub fn matches(&self, task: &Task) -> bool {
        let status_match = match self.status {
            StatusFilter::All => true,
            StatusFilter::Pending => !task.completed,
            StatusFilter::Completed => task.completed,
        };
        let priority_match = self.priority.map_or(true, |p| p == task.priority);
        let category_match = self.category.map_or(true, |c| c == task.category);

        status_match && priority_match && category_match
    }
}

/// Tasks passing the filter, in source order
pub fn filter_tasks<'a>(tasks: &'a [Task], filter: &TaskFilter) -> Vec<&'a Task> {
    tasks.iter().filter(|task| filter.matches(task)).collect()
}

/// Aggregate counters over the unfiltered collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

pub fn compute_stats(tasks: &[Task]) -> TaskStats {
    let completed = tasks.iter().filter(|t| t.completed).count();
    TaskStats {
        total: tasks.len(),
        completed,
        pending: tasks.len() - completed,
    }
}

/// Mean efficiency over completed tasks.
///
/// Completed tasks without a score count as 0 but still sit in the
/// denominator. `None` when nothing is completed.
pub fn overall_efficiency(tasks: &[Task]) -> Option<f64> {
    let completed: Vec<&Task> = tasks.iter().filter(|t| t.completed).collect();
    if completed.is_empty() {
        return None;
    }

    let total: f64 = completed
        .iter()
        .map(|task| calculate_efficiency(task).unwrap_or(0.0))
        .sum();

    Some(round_one_decimal(total / completed.len() as f64))
}

/// Colour band for an overall efficiency score.
///
/// The 70-90 band shares `Neutral` with "no score yet".
pub fn theme_for(efficiency: Option<f64>) -> Theme {
    match efficiency {
        None => Theme::Neutral,
        Some(e) if e < 60.0 => Theme::Red,
        Some(e) if e < 70.0 => Theme::Yellow,
        Some(e) if e < 90.0 => Theme::Neutral,
        Some(_) => Theme::Green,
    }
}

/// Everything the shell needs for one render, derived from a snapshot
#[derive(Debug, Clone)]
pub struct Dashboard<'a> {
    pub visible: Vec<&'a Task>,
    pub stats: TaskStats,
    pub efficiency: Option<f64>,
    pub theme: Theme,
}

pub fn build_dashboard<'a>(tasks: &'a [Task], filter: &TaskFilter) -> Dashboard<'a> {
    let efficiency = overall_efficiency(tasks);
    Dashboard {
        visible: filter_tasks(tasks, filter),
        stats: compute_stats(tasks),
        efficiency,
        theme: theme_for(efficiency),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TaskDraft;
    use chrono::{Duration, Local};
    use pretty_assertions::assert_eq;

    fn task(id: u64, priority: Priority, category: Category, completed: bool) -> Task {
        let draft = TaskDraft {
            name: format!("Task {}", id),
            due_date: None,
            due_time: None,
            timezone: "Local".to_string(),
            priority,
            category,
        };
        let task = Task::from_draft(id, draft, Local::now());
        if completed {
            task.toggled(Local::now())
        } else {
            task
        }
    }

    fn scored(id: u64, late_by: Duration) -> Task {
        let draft = TaskDraft {
            name: format!("Scored {}", id),
            due_date: Some("2024-06-01".to_string()),
            due_time: Some("12:00".to_string()),
            timezone: "Local".to_string(),
            priority: Priority::Low,
            category: Category::FollowUp,
        };
        let task = Task::from_draft(id, draft, Local::now());
        let due = task.due_instant().unwrap();
        task.toggled(due + late_by)
    }

    fn sample() -> Vec<Task> {
        // Newest first
        vec![
            task(6, Priority::Low, Category::FollowUp, false),
            task(5, Priority::High, Category::TakeAction, true),
            task(4, Priority::Medium, Category::SelfWork, true),
            task(3, Priority::High, Category::SelfWork, false),
            task(2, Priority::High, Category::FollowUp, true),
            task(1, Priority::Low, Category::SelfWork, true),
        ]
    }

    fn ids(tasks: &[&Task]) -> Vec<u64> {
        tasks.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_default_filter_keeps_everything() {
        let tasks = sample();
        let visible = filter_tasks(&tasks, &TaskFilter::default());
        assert_eq!(ids(&visible), vec![6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_completed_high_is_intersection_in_order() {
        let tasks = sample();
        let filter = TaskFilter {
            status: StatusFilter::Completed,
            priority: Some(Priority::High),
            category: None,
        };
        assert_eq!(ids(&filter_tasks(&tasks, &filter)), vec![5, 2]);
    }

    #[test]
    fn test_pending_filter() {
        let tasks = sample();
        let filter = TaskFilter {
            status: StatusFilter::Pending,
            ..TaskFilter::default()
        };
        assert_eq!(ids(&filter_tasks(&tasks, &filter)), vec![6, 3]);
    }

    #[test]
    fn test_category_filter_combines_with_priority() {
        let tasks = sample();
        let filter = TaskFilter {
            status: StatusFilter::All,
            priority: Some(Priority::High),
            category: Some(Category::SelfWork),
        };
        assert_eq!(ids(&filter_tasks(&tasks, &filter)), vec![3]);
    }

    #[test]
    fn test_stats_ignore_filters() {
        let mut tasks = sample();
        let filter = TaskFilter {
            status: StatusFilter::Completed,
            priority: Some(Priority::High),
            category: Some(Category::TakeAction),
        };
        let before = build_dashboard(&tasks, &filter);
        assert_eq!(before.stats, TaskStats { total: 6, completed: 4, pending: 2 });
        let visible_before = before.visible.len();

        // Fails every filter, still counted
        tasks.insert(0, task(7, Priority::Low, Category::FollowUp, false));
        let after = build_dashboard(&tasks, &filter);
        assert_eq!(after.stats, TaskStats { total: 7, completed: 4, pending: 3 });
        assert_eq!(after.visible.len(), visible_before);
    }

    #[test]
    fn test_overall_efficiency_none_without_completed() {
        let tasks = vec![task(1, Priority::Low, Category::SelfWork, false)];
        assert_eq!(overall_efficiency(&tasks), None);
        assert_eq!(overall_efficiency(&[]), None);
    }

    #[test]
    fn test_overall_efficiency_counts_unscored_as_zero() {
        let tasks = vec![
            scored(3, Duration::zero()),                      // 100
            scored(2, Duration::hours(1)),                    // 95
            task(1, Priority::High, Category::SelfWork, true), // no due date -> 0
        ];
        // (100 + 95 + 0) / 3 = 65.0
        assert_eq!(overall_efficiency(&tasks), Some(65.0));
    }

    #[test]
    fn test_overall_efficiency_ignores_pending() {
        let tasks = vec![
            scored(2, Duration::minutes(30)), // 97.5
            task(1, Priority::High, Category::SelfWork, false),
        ];
        assert_eq!(overall_efficiency(&tasks), Some(97.5));
    }

    #[test]
    fn test_overall_efficiency_rounds() {
        let tasks = vec![
            scored(3, Duration::zero()),
            scored(2, Duration::zero()),
            task(1, Priority::High, Category::SelfWork, true),
        ];
        // 200 / 3 = 66.666...
        assert_eq!(overall_efficiency(&tasks), Some(66.7));
    }

    #[test]
    fn test_theme_bands() {
        assert_eq!(theme_for(None), Theme::Neutral);
        assert_eq!(theme_for(Some(0.0)), Theme::Red);
        assert_eq!(theme_for(Some(59.9)), Theme::Red);
        assert_eq!(theme_for(Some(60.0)), Theme::Yellow);
        assert_eq!(theme_for(Some(69.9)), Theme::Yellow);
        assert_eq!(theme_for(Some(70.0)), Theme::Neutral);
        assert_eq!(theme_for(Some(89.9)), Theme::Neutral);
        assert_eq!(theme_for(Some(90.0)), Theme::Green);
        assert_eq!(theme_for(Some(100.0)), Theme::Green);
    }

    #[test]
    fn test_dashboard_theme_follows_efficiency() {
        let tasks = vec![scored(1, Duration::hours(10))]; // 50
        let dashboard = build_dashboard(&tasks, &TaskFilter::default());
        assert_eq!(dashboard.efficiency, Some(50.0));
        assert_eq!(dashboard.theme, Theme::Red);
    }
}
