use crate::app::{App, AppScreen};
use crate::chat_view::submit_chat_message;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::Mutex;

pub fn handle_chat_input(key: KeyEvent, app: &mut App, app_arc: Arc<Mutex<App>>) {
    match key.code {
        KeyCode::Enter => {
            // Overlapping sends are rejected by the orchestrator too; this
            // check keeps the input buffer intact while generating.
            if app.orchestrator.is_generating() {
                return;
            }
            let text = app.input.drain(..).collect::<String>();
            if !text.trim().is_empty() {
                tokio::spawn(submit_chat_message(app_arc, text));
            }
        }
        KeyCode::Esc => {
            app.screen = AppScreen::QuitConfirm;
        }
        KeyCode::PageUp => app.scroll_up(),
        KeyCode::PageDown => app.scroll_down(),
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'c' => app.screen = AppScreen::QuitConfirm,
                    'n' => app.new_session(),
                    'j' => app.select_next_session(),
                    'k' => app.select_prev_session(),
                    's' => app.screen = AppScreen::Settings,
                    'u' => app.scroll_up(),
                    'd' => app.scroll_down(),
                    _ => {}
                }
            } else {
                app.input.push(c);
            }
        }
        _ => {}
    }
}

pub fn handle_settings_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Esc => {
            app.screen = AppScreen::Chat;
        }
        KeyCode::Char('p') => {
            let next = app.orchestrator.personality().next();
            app.orchestrator.set_personality(next);
        }
        KeyCode::Char('l') => {
            let toggled = app.orchestrator.language().toggle();
            app.orchestrator.set_language(toggled);
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.screen = AppScreen::QuitConfirm;
        }
        _ => {}
    }
}

pub fn handle_quit_confirm_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => {
            app.screen = AppScreen::Quit;
        }
        KeyCode::Char('n') | KeyCode::Esc => {
            app.screen = AppScreen::Chat;
        }
        _ => {}
    }
}
