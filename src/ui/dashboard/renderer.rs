//! Dashboard main renderer

use super::components::{edit_modal, footer, header, logs, search_bar, table};
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Percentage(30),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);
    search_bar::render_search_bar(f, main_chunks[1], state);
    table::render_user_table(f, main_chunks[2], state);
    logs::render_logs_panel(f, main_chunks[3], state);
    footer::render_footer(f, main_chunks[4]);

    // The edit modal floats above everything else while open.
    if let Some(draft) = &state.edit {
        edit_modal::render_edit_modal(f, draft);
    }
}
