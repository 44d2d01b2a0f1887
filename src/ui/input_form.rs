use crate::app::{
    InputFormState, FIELD_CATEGORY, FIELD_DATE, FIELD_NAME, FIELD_PRIORITY, FIELD_TIME, FIELD_TIMEZONE,
};
use crate::ui::{
    layout::create_modal_area,
    styles::{error_style, modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// One labelled form row: label line plus "> value" line
fn field_lines(form: &InputFormState, field: usize, label: &str, value: String, is_choice: bool) -> [Line<'static>; 2] {
    let editing = form.editing_field == field;
    let label_line = if editing {
        Line::raw(format!("{} (editing)", label))
    } else {
        Line::raw(label.to_string())
    };

    let cursor = match (editing, is_choice) {
        (true, false) => Span::styled("█", modal_title_style()),
        (true, true) => Span::styled("  ◀ ▶", modal_title_style()),
        _ => Span::raw(""),
    };
    let value_line = Line::from(vec![
        Span::raw("> "),
        Span::styled(value, modal_title_style()),
        cursor,
    ]);

    [label_line, value_line]
}

/// Render the input form for adding tasks
pub fn render_input_form(f: &mut Frame, form: &InputFormState, error: Option<&str>, area: Rect) {
    let modal_area = create_modal_area(area);

    // Clear the area behind the form
    f.render_widget(Clear, modal_area);

    let priority = format!("{} {}", form.priority.symbol(), form.priority.name());
    let category = format!("{} {}", form.category.symbol(), form.category.to_tag());

    let rows = [
        (FIELD_NAME, "Task name:", form.name.clone(), false),
        (FIELD_DATE, "Due date (YYYY-MM-DD):", form.due_date.clone(), false),
        (FIELD_TIME, "Due time (HH:MM):", form.due_time.clone(), false),
        (FIELD_TIMEZONE, "Timezone:", form.timezone.clone(), false),
        (FIELD_PRIORITY, "Priority:", priority, true),
        (FIELD_CATEGORY, "Category:", category, true),
    ];

    let mut lines = Vec::new();
    for (field, label, value, is_choice) in rows {
        lines.extend(field_lines(form, field, label, value, is_choice));
    }

    lines.push(Line::raw(""));
    match error {
        Some(message) => lines.push(Line::from(Span::styled(message.to_string(), error_style()))),
        None => lines.push(Line::raw("Tab to switch fields  ·  Enter to add  ·  Esc to cancel")),
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" Add Task ", modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}
