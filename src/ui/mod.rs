pub mod filter_pane;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod stats_pane;
pub mod styles;

use crate::app::AppState;
use filter_pane::render_filter_pane;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::render_list_pane;
use ratatui::Frame;
use stats_pane::render_stats_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);
    let dashboard = app.dashboard();
    let use_emoji = app.config.use_emoji;

    render_keybindings(f, app.ui_mode, layout.keybindings_area);
    render_stats_pane(f, &dashboard, layout.header_area);
    render_filter_pane(f, &app.filter, dashboard.theme, use_emoji, layout.filter_area);
    render_list_pane(
        f,
        &dashboard.visible,
        app.selected_index,
        dashboard.theme,
        use_emoji,
        layout.list_area,
    );

    // Render input form if active
    if let Some(form) = &app.input_form {
        render_input_form(f, form, app.status_message.as_deref(), size);
    }
}
