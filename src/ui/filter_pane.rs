use crate::domain::{TaskFilter, Theme};
use crate::ui::styles::{border_style, modal_title_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Labels for the three selectors, "All" when a selector is off
pub fn filter_labels(filter: &TaskFilter, use_emoji: bool) -> [String; 3] {
    let priority = match filter.priority {
        Some(p) if use_emoji => format!("{} {}", p.symbol(), p.name()),
        Some(p) => p.name().to_string(),
        None => "All".to_string(),
    };
    let category = match filter.category {
        Some(c) if use_emoji => format!("{} {}", c.symbol(), c.to_tag()),
        Some(c) => c.to_tag().to_string(),
        None => "All Categories".to_string(),
    };
    [filter.status.label().to_string(), priority, category]
}

/// Render the filter bar
pub fn render_filter_pane(f: &mut Frame, filter: &TaskFilter, theme: Theme, use_emoji: bool, area: Rect) {
    let [status, priority, category] = filter_labels(filter, use_emoji);

    let line = Line::from(vec![
        Span::raw(" Status: "),
        Span::styled(status, modal_title_style()),
        Span::raw("   Priority: "),
        Span::styled(priority, modal_title_style()),
        Span::raw("   Category: "),
        Span::styled(category, modal_title_style()),
    ]);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(theme))
            .title(Span::styled(" Filters ", title_style(theme))),
    );
    f.render_widget(paragraph, area);
}
