//! Edit modal component
//!
//! Renders the centered update-user overlay. The modal works on a scratch
//! copy of the record; nothing in the table changes until the edit commits.

use super::super::state::EditDraft;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph};

/// Centered rect taking the given percentage of the frame.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

pub fn render_edit_modal(f: &mut Frame, draft: &EditDraft) {
    let area = centered_rect(50, 40, f.area());
    f.render_widget(Clear, area);

    let label_style = Style::default().fg(Color::DarkGray);
    let lines = vec![
        Line::from(vec![
            Span::styled("Name:  ", label_style),
            Span::raw(format!("{}_", draft.name)),
        ]),
        Line::from(vec![
            Span::styled("Email: ", label_style),
            Span::styled(
                format!("{} (read-only)", draft.email),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(vec![
            Span::styled("Role:  ", label_style),
            Span::styled(
                format!("< {} >", draft.role),
                Style::default()
                    .fg(Color::LightMagenta)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] Save  [Tab] Role  [Esc] Cancel",
            Style::default().fg(Color::Cyan),
        )),
    ];

    let modal = Paragraph::new(lines).block(
        Block::default()
            .title("UPDATE USER")
            .borders(Borders::ALL)
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(Color::LightYellow))
            .padding(Padding::uniform(1)),
    );
    f.render_widget(modal, area);
}
