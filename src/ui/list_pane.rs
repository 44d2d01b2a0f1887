use crate::domain::{calculate_efficiency, Task, Theme};
use crate::ui::styles::{
    border_style, default_style, done_style, hint_style, overdue_style, priority_style, selected_style,
    title_style,
};
use chrono::{DateTime, Local};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Shown when the filtered view is empty
pub const EMPTY_MESSAGE: &str = "No tasks match your filters. Create one to get started! 🚀";

/// Render the task list
pub fn render_list_pane(
    f: &mut Frame,
    tasks: &[&Task],
    selected_index: usize,
    theme: Theme,
    use_emoji: bool,
    area: Rect,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(theme))
        .title(Span::styled(format!(" Tasks ({}) ", tasks.len()), title_style(theme)));

    if tasks.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(EMPTY_MESSAGE, hint_style())))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let now = Local::now();
    let items: Vec<ListItem> = tasks
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let line = create_task_line(task, use_emoji, now);
            let style = if idx == selected_index {
                selected_style()
            } else {
                default_style()
            };
            ListItem::new(line).style(style)
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

/// Create a single line for a task
/// Format: [✓] Pay bills  🔴 High  ⚡ Take action  📅 2024-05-01 14:30 (Europe/Madrid)  ⭐ 95%
fn create_task_line(task: &Task, use_emoji: bool, now: DateTime<Local>) -> Line<'static> {
    let mut spans = Vec::new();

    let checkbox = if task.completed { "[✓] " } else { "[ ] " };
    spans.push(Span::raw(checkbox.to_string()));

    if task.completed {
        spans.push(Span::styled(task.name.clone(), done_style()));
    } else {
        spans.push(Span::raw(task.name.clone()));
    }
    spans.push(Span::raw("  ".to_string()));

    let priority = if use_emoji {
        format!("{} {}", task.priority.symbol(), task.priority.name())
    } else {
        task.priority.name().to_string()
    };
    spans.push(Span::styled(priority, priority_style(task.priority)));
    spans.push(Span::raw("  ".to_string()));

    let category = if use_emoji {
        format!("{} {}", task.category.symbol(), task.category.to_tag())
    } else {
        task.category.to_tag().to_string()
    };
    spans.push(Span::raw(category));

    if let Some(due) = task.due_label() {
        let overdue = !task.completed && task.due_instant().is_some_and(|d| d < now);
        let text = format!("  📅 {} ({})", due, task.timezone);
        if overdue {
            spans.push(Span::styled(text, overdue_style()));
        } else {
            spans.push(Span::raw(text));
        }
    }

    if let Some(efficiency) = calculate_efficiency(task) {
        spans.push(Span::raw(format!("  ⭐ {}%", efficiency)));
    }

    spans.push(Span::styled(format!("  · added {}", task.created_at), hint_style()));

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Priority, TaskDraft};
    use chrono::Duration;

    fn task(completed_late_by: Option<Duration>) -> Task {
        let draft = TaskDraft {
            name: "Test task".to_string(),
            due_date: Some("2024-05-01".to_string()),
            due_time: Some("14:30".to_string()),
            timezone: "Europe/Madrid".to_string(),
            priority: Priority::High,
            category: Category::TakeAction,
        };
        let task = Task::from_draft(1, draft, Local::now());
        match completed_late_by {
            Some(late) => {
                let due = task.due_instant().unwrap();
                task.toggled(due + late)
            }
            None => task,
        }
    }

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_create_task_line() {
        let line = create_task_line(&task(None), true, Local::now());
        let line_str = text(&line);
        assert!(line_str.starts_with("[ ] Test task"));
        assert!(line_str.contains("🔴 High"));
        assert!(line_str.contains("⚡ Take action"));
        assert!(line_str.contains("2024-05-01 14:30 (Europe/Madrid)"));
        assert!(!line_str.contains('⭐'));
    }

    #[test]
    fn test_completed_line_shows_efficiency() {
        let line = create_task_line(&task(Some(Duration::hours(1))), false, Local::now());
        let line_str = text(&line);
        assert!(line_str.starts_with("[✓] Test task"));
        assert!(line_str.contains("⭐ 95%"));
        assert!(line_str.contains("  High  Take action"));
    }
}
