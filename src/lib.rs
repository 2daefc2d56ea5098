// src/lib.rs

pub mod api;
pub mod app;
pub mod chat_view;
pub mod config;
pub mod constants;
pub mod errors;
pub mod key_handlers;
pub mod logging;
pub mod models;
pub mod orchestrator;
pub mod session;
pub mod settings_view;
pub mod status_indicator;
pub mod ui;

pub use app::{App, AppScreen};
