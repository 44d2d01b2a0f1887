use crate::domain::{Dashboard, Theme};
use crate::ui::{
    layout::split_header,
    styles::{border_style, hint_style, stat_value_style, title_style},
};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Efficiency as shown on the card, "-%" before anything is completed
pub fn format_efficiency(efficiency: Option<f64>) -> String {
    match efficiency {
        Some(value) => format!("{}%", value),
        None => "-%".to_string(),
    }
}

/// Render the title block and the stat cards
pub fn render_stats_pane(f: &mut Frame, dashboard: &Dashboard, area: Rect) {
    let theme = dashboard.theme;
    let (title_area, cards) = split_header(area);

    let title = Paragraph::new(vec![
        Line::from(Span::styled("✅ Do it!", title_style(theme))),
        Line::from(Span::styled(
            "Organize and manage your tasks efficiently",
            hint_style(),
        )),
    ])
    .block(Block::default().borders(Borders::ALL).border_style(border_style(theme)));
    f.render_widget(title, title_area);

    let stats = dashboard.stats;
    render_card(f, cards[0], theme, &format_efficiency(dashboard.efficiency), "Overall Efficiency");
    render_card(f, cards[1], theme, &stats.total.to_string(), "Total Tasks");
    render_card(
        f,
        cards[2],
        theme,
        &stats.completed.to_string(),
        &format!("Completed · {} pending", stats.pending),
    );
}

fn render_card(f: &mut Frame, area: Rect, theme: Theme, value: &str, label: &str) {
    let card = Paragraph::new(vec![
        Line::from(Span::styled(value.to_string(), stat_value_style(theme))),
        Line::from(Span::styled(label.to_string(), hint_style())),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).border_style(border_style(theme)));
    f.render_widget(card, area);
}
