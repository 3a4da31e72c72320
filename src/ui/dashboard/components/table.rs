//! Dashboard user table component
//!
//! Renders the filtered user list with selection markers; while a fetch is
//! in flight, a loading indicator replaces the table body

use super::super::state::DashboardState;
use super::super::utils::get_role_color;
use crate::events::Phase;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Row, Table, TableState};

pub fn render_user_table(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let block = Block::default()
        .title("USERS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    if state.phase == Phase::Loading {
        let loading = Paragraph::new("Loading users...")
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::LightYellow)
                    .add_modifier(Modifier::BOLD),
            )
            .block(block);
        f.render_widget(loading, area);
        return;
    }

    let filtered = state.filtered_users();

    if filtered.is_empty() {
        let empty_text = if state.users.is_empty() {
            "No users. Press [r] to reload."
        } else {
            "No users match the current search."
        };
        let empty = Paragraph::new(empty_text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let header = Row::new(["", "Name", "Email", "Role"])
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

    let rows: Vec<Row> = filtered
        .iter()
        .map(|user| {
            let marker = if state.is_selected(&user.id) {
                "[x]"
            } else {
                "[ ]"
            };
            Row::new(vec![
                marker.to_string(),
                user.name.clone(),
                user.email.clone(),
                user.role.to_string(),
            ])
            .style(Style::default().fg(get_role_color(user.role)))
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(3),
            Constraint::Percentage(30),
            Constraint::Percentage(45),
            Constraint::Percentage(25),
        ],
    )
    .header(header)
    .block(block)
    .row_highlight_style(
        Style::default()
            .bg(Color::Rgb(40, 50, 60))
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("> ");

    let mut table_state = TableState::default().with_selected(Some(state.cursor));
    f.render_stateful_widget(table, area, &mut table_state);
}
