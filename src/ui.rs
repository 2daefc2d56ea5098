// src/ui.rs

use crate::api::GeminiClient;
use crate::app::{App, AppScreen};
use crate::chat_view::draw_chat;
use crate::key_handlers::{handle_chat_input, handle_quit_confirm_input, handle_settings_input};
use crate::settings_view::draw_settings;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};
use std::{error::Error, io, sync::Arc, time::Duration};
use tokio::sync::{mpsc, Mutex};

/// Runs the terminal UI until the user quits.
pub async fn run_ui(client: GeminiClient) -> Result<(), Box<dyn Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app_arc = Arc::new(Mutex::new(App::new(client)));
    let res = run_app(&mut terminal, app_arc).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        eprintln!("{:?}", err);
    }
    res
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app_arc: Arc<Mutex<App>>,
) -> Result<(), Box<dyn Error>> {
    // Input reader task feeding the event loop
    let (tx, mut rx) = mpsc::channel::<CEvent>(100);
    tokio::spawn(async move {
        loop {
            if event::poll(Duration::from_millis(100)).unwrap_or(false) {
                if let Ok(ev) = event::read() {
                    if tx.send(ev).await.is_err() {
                        break;
                    }
                }
            }
            tokio::task::yield_now().await;
        }
    });

    loop {
        {
            let mut guard = app_arc.lock().await;
            if guard.screen == AppScreen::Quit {
                break;
            }
            guard.status_indicator.update_spinner();
            terminal.draw(|f| draw(f, &mut guard))?;
        }

        let ev = tokio::time::timeout(Duration::from_millis(50), rx.recv()).await;
        if let Ok(Some(CEvent::Key(key))) = ev {
            let mut guard = app_arc.lock().await;
            match guard.screen {
                AppScreen::Chat => handle_chat_input(key, &mut guard, app_arc.clone()),
                AppScreen::Settings => handle_settings_input(key, &mut guard),
                AppScreen::QuitConfirm => handle_quit_confirm_input(key, &mut guard),
                AppScreen::Quit => break,
            }
        }
    }
    Ok(())
}

fn draw(f: &mut Frame, app: &mut App) {
    match app.screen {
        AppScreen::Settings => draw_settings(f, app),
        AppScreen::QuitConfirm => {
            draw_chat(f, app);
            draw_quit_confirm(f);
        }
        _ => draw_chat(f, app),
    }
}

fn draw_quit_confirm(f: &mut Frame) {
    let size = f.area();
    let width = 34.min(size.width);
    let height = 3.min(size.height);
    let area = Rect {
        x: (size.width.saturating_sub(width)) / 2,
        y: (size.height.saturating_sub(height)) / 2,
        width,
        height,
    };
    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::raw("Quit JurisPro? "),
            Span::styled("y", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::raw("/"),
            Span::styled("n", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        ]))
        .block(Block::default().borders(Borders::ALL)),
        area,
    );
}
