use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of the add-task form modal
pub const MODAL_HEIGHT: u16 = 18;

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub header_area: Rect,
    pub filter_area: Rect,
    pub list_area: Rect,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Header: title and stats cards
/// - Filter bar
/// - Task list takes the rest
pub fn create_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Keybindings bar
            Constraint::Length(5), // Header + stats
            Constraint::Length(3), // Filters
            Constraint::Min(0),    // Task list
        ])
        .split(area);

    MainLayout {
        keybindings_area: chunks[0],
        header_area: chunks[1],
        filter_area: chunks[2],
        list_area: chunks[3],
    }
}

/// Split the header into the title block and three stat cards
pub fn split_header(area: Rect) -> (Rect, [Rect; 3]) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // Title
            Constraint::Percentage(20), // Efficiency
            Constraint::Percentage(20), // Total
            Constraint::Percentage(20), // Completed / pending
        ])
        .split(area);

    (chunks[0], [chunks[1], chunks[2], chunks[3]])
}

/// Create a centered modal area
pub fn create_modal_area(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Length(MODAL_HEIGHT),
            Constraint::Percentage(20),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}
