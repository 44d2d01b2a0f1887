use crate::domain::{Priority, Theme};
use ratatui::style::{Color, Modifier, Style};

/// Default text style
pub fn default_style() -> Style {
    Style::default().fg(Color::White)
}

/// Selected row highlight style
pub fn selected_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::LightCyan)
        .add_modifier(Modifier::BOLD)
}

/// Accent colour for the efficiency theme
pub fn theme_color(theme: Theme) -> Color {
    match theme {
        Theme::Neutral => Color::Cyan,
        Theme::Red => Color::Red,
        Theme::Yellow => Color::Yellow,
        Theme::Green => Color::Green,
    }
}

/// Title style for panes, tinted by theme
pub fn title_style(theme: Theme) -> Style {
    Style::default()
        .fg(theme_color(theme))
        .add_modifier(Modifier::BOLD)
}

/// Border style, tinted by theme
pub fn border_style(theme: Theme) -> Style {
    Style::default().fg(theme_color(theme))
}

/// Big number in a stat card
pub fn stat_value_style(theme: Theme) -> Style {
    Style::default()
        .fg(theme_color(theme))
        .add_modifier(Modifier::BOLD)
}

pub fn priority_style(priority: Priority) -> Style {
    match priority {
        Priority::High => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        Priority::Medium => Style::default().fg(Color::Yellow),
        Priority::Low => Style::default().fg(Color::Green),
    }
}

/// Modal background style
pub fn modal_bg_style() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

/// Modal title style
pub fn modal_title_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Keybinding hint style
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Error message style
pub fn error_style() -> Style {
    Style::default()
        .fg(Color::Red)
        .add_modifier(Modifier::BOLD)
}

/// Done/completed task style
pub fn done_style() -> Style {
    Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::CROSSED_OUT)
}

/// Overdue due-date style
pub fn overdue_style() -> Style {
    Style::default().fg(Color::Red)
}
