//! Dashboard search bar component
//!
//! Shows the active search column and text, highlighted while typing

use super::super::state::{DashboardState, InputMode};

use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_search_bar(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let searching = state.input_mode == InputMode::Search;

    // Trailing underscore doubles as a cursor while typing.
    let text = if searching {
        format!("Search by {}: {}_", state.search_column, state.search_text)
    } else {
        format!("Search by {}: {}", state.search_column, state.search_text)
    };

    let border_color = if searching {
        Color::LightYellow
    } else {
        Color::DarkGray
    };

    let search_bar = Paragraph::new(text)
        .style(if searching {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        })
        .block(
            Block::default()
                .title("SEARCH [/ to type, Tab for column]")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border_color)),
        );
    f.render_widget(search_bar, area);
}
