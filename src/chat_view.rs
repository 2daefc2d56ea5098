use crate::app::App;
use crate::models::Role;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use std::sync::Arc;
use textwrap::wrap;
use tokio::sync::Mutex;
use unicode_width::UnicodeWidthStr;

pub fn draw_chat(f: &mut Frame, app: &mut App) {
    let size = f.area();
    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(32), Constraint::Min(1)])
        .split(size);

    draw_sidebar(f, app, horizontal_chunks[0]);

    let chat_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(horizontal_chunks[1]);

    draw_messages(f, app, chat_chunks[0]);
    app.status_indicator.render(f, chat_chunks[1]);
    draw_input(f, app, chat_chunks[2]);
}

fn draw_sidebar(f: &mut Frame, app: &App, area: Rect) {
    let active_id = app.orchestrator.store().active_id();
    let mut lines = Vec::new();
    for (idx, session) in app.orchestrator.store().sessions().iter().enumerate() {
        let is_active = Some(session.id.as_str()) == active_id;
        let marker = if is_active { "▸ " } else { "  " };
        let title_style = if idx == app.sidebar_selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else if is_active {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Yellow)),
            Span::styled(session.title.clone(), title_style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", session.preview),
            Style::default().fg(Color::DarkGray),
        )));
    }
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "No consultations yet",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let sidebar = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::RIGHT)
            .title(Span::styled(
                " JurisPro ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
    );
    f.render_widget(sidebar, area);
}

fn draw_messages(f: &mut Frame, app: &mut App, area: Rect) {
    let wrap_width = area.width.saturating_sub(2).max(10) as usize;
    let mut lines = Vec::new();

    if let Some(session) = app.orchestrator.store().active() {
        for message in &session.messages {
            if !lines.is_empty() {
                lines.push(Line::from(""));
            }
            let (label, label_color) = match message.role {
                Role::User => ("You", Color::Cyan),
                Role::Model => ("JurisPro", Color::Yellow),
            };
            lines.push(Line::from(vec![
                Span::styled(
                    label,
                    Style::default()
                        .fg(label_color)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", message.timestamp.format("%H:%M")),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
            for wrapped in wrap(&message.content, wrap_width) {
                lines.push(Line::from(Span::raw(wrapped.into_owned())));
            }
        }
    } else {
        lines.push(Line::from(Span::styled(
            "Start a consultation: type a legal question and press Enter.",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let total_lines = lines.len() as u16;
    let max_scroll = total_lines.saturating_sub(area.height);
    if app.stick_to_bottom || app.chat_scroll > max_scroll {
        app.chat_scroll = max_scroll;
    }

    let messages = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.chat_scroll, 0));
    f.render_widget(messages, area);
}

fn draw_input(f: &mut Frame, app: &App, area: Rect) {
    let separator = "─".repeat(area.width as usize);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            separator,
            Style::default().fg(Color::DarkGray),
        ))),
        Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: 1,
        },
    );

    let prefix = if app.orchestrator.is_generating() {
        "… "
    } else {
        "→ "
    };
    let input = Line::from(vec![
        Span::styled(prefix, Style::default().fg(Color::DarkGray)),
        Span::styled(&app.input, Style::default().fg(Color::White)),
    ]);

    let visible_width = area.width.saturating_sub(2);
    let text_width = app.input.as_str().width() as u16;
    let scroll_offset = text_width.saturating_sub(visible_width);

    f.render_widget(
        Paragraph::new(input).scroll((0, scroll_offset)),
        Rect {
            x: area.x,
            y: area.y + 1,
            width: area.width,
            height: 1,
        },
    );

    let hints = format!(
        "{} · {} · Ctrl+N new · Ctrl+J/K sessions · Ctrl+S settings · Ctrl+C quit",
        app.orchestrator.personality().label(),
        app.orchestrator.language().label()
    );
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hints,
            Style::default().fg(Color::DarkGray),
        ))),
        Rect {
            x: area.x,
            y: area.y + 2,
            width: area.width,
            height: 1,
        },
    );
}

/// Runs the full send pipeline off the event loop: mutate under lock, await
/// the generator unlocked, re-lock to record the response.
pub async fn submit_chat_message(app: Arc<Mutex<App>>, text: String) {
    let (pending, client) = {
        let mut guard = app.lock().await;
        let pending = match guard.orchestrator.begin_send(&text) {
            Ok(pending) => pending,
            Err(e) => {
                log::warn!("send rejected: {}", e);
                return;
            }
        };
        guard.status_indicator.set_thinking(true);
        guard.status_indicator.set_status("Consulting legal core...");
        guard.scroll_to_bottom();
        (pending, guard.client.clone())
    };

    let response = client
        .generate(
            &pending.prompt,
            &pending.history,
            pending.personality,
            pending.language,
        )
        .await;

    let mut guard = app.lock().await;
    if let Err(e) = guard.orchestrator.resolve_send(&pending, response) {
        log::error!("failed to record response: {}", e);
    }
    guard.status_indicator.set_thinking(false);
    guard.status_indicator.clear_status();
    guard.scroll_to_bottom();
}
