use crate::domain::UiMode;
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, ui_mode: UiMode, area: Rect) {
    let hints = match ui_mode {
        UiMode::Normal => Line::from(vec![
            Span::raw(" ↑/↓ select   "),
            Span::raw("Enter done/undo   "),
            Span::raw("a add   "),
            Span::raw("x delete   "),
            Span::raw("s status   "),
            Span::raw("p priority   "),
            Span::raw("c category   "),
            Span::raw("f clear filters   "),
            Span::raw("q quit"),
        ]),
        UiMode::AddingTask => Line::from(vec![
            Span::raw(" Tab/↓ next field   "),
            Span::raw("Shift+Tab/↑ previous   "),
            Span::raw("←/→ change choice   "),
            Span::raw("Enter add   "),
            Span::raw("Esc cancel"),
        ]),
    };

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}
