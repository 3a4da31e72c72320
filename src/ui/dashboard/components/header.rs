//! Dashboard header component
//!
//! Renders the title and the selection summary line

use super::super::state::DashboardState;
use crate::events::Phase;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render header with title and selection summary.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title_text = format!("USER ADMIN v{} - {}", version, state.environment);

    let title = Paragraph::new(title_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let summary_text = match state.phase {
        Phase::Loading => "Loading...".to_string(),
        Phase::Idle => format!(
            "{} of {} row(s) selected",
            state.selected_count(),
            state.users.len()
        ),
    };
    let summary_color = match state.phase {
        Phase::Loading => Color::LightYellow,
        Phase::Idle => Color::DarkGray,
    };

    let summary = Paragraph::new(summary_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(summary_color));
    f.render_widget(summary, header_chunks[1]);
}
