use crate::app::App;
use crate::models::Personality;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw_settings(f: &mut Frame, app: &App) {
    let size = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(Personality::ALL.len() as u16 + 2),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(size);

    let mut personality_lines = Vec::new();
    for personality in Personality::ALL {
        let selected = personality == app.orchestrator.personality();
        let marker = if selected { "● " } else { "○ " };
        let style = if selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        personality_lines.push(Line::from(Span::styled(
            format!("{}{}", marker, personality.label()),
            style,
        )));
    }
    f.render_widget(
        Paragraph::new(personality_lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Personality (p to cycle) "),
        ),
        chunks[0],
    );

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("● {}", app.orchestrator.language().label()),
            Style::default().fg(Color::Yellow),
        )))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Response language (l to toggle) "),
        ),
        chunks[1],
    );

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Esc to return to chat",
            Style::default().fg(Color::DarkGray),
        ))),
        chunks[2],
    );
}
