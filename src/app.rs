use crate::api::GeminiClient;
use crate::orchestrator::Orchestrator;
use crate::session::SessionStore;
use crate::status_indicator::StatusIndicator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppScreen {
    Chat,
    Settings,
    QuitConfirm,
    Quit,
}

pub struct App {
    pub screen: AppScreen,
    pub orchestrator: Orchestrator,
    pub client: GeminiClient,
    pub input: String,
    pub chat_scroll: u16,
    pub stick_to_bottom: bool,
    pub sidebar_selected: usize,
    pub status_indicator: StatusIndicator,
}

impl App {
    pub fn new(client: GeminiClient) -> App {
        App {
            screen: AppScreen::Chat,
            orchestrator: Orchestrator::new(SessionStore::with_seed_history()),
            client,
            input: String::new(),
            chat_scroll: 0,
            stick_to_bottom: true,
            sidebar_selected: 0,
            status_indicator: StatusIndicator::new(),
        }
    }

    pub fn scroll_up(&mut self) {
        self.stick_to_bottom = false;
        self.chat_scroll = self.chat_scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.chat_scroll = self.chat_scroll.saturating_add(1);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.stick_to_bottom = true;
        self.chat_scroll = u16::MAX;
    }

    /// Creates and activates a fresh session from the sidebar.
    pub fn new_session(&mut self) {
        let id = self.orchestrator.store_mut().create_session();
        // select of a just-created id cannot fail
        let _ = self.orchestrator.store_mut().select_session(&id);
        self.sidebar_selected = 0;
        self.scroll_to_bottom();
    }

    pub fn select_next_session(&mut self) {
        let count = self.orchestrator.store().sessions().len();
        if count == 0 {
            return;
        }
        self.sidebar_selected = (self.sidebar_selected + 1) % count;
        self.activate_selected();
    }

    pub fn select_prev_session(&mut self) {
        let count = self.orchestrator.store().sessions().len();
        if count == 0 {
            return;
        }
        self.sidebar_selected = (self.sidebar_selected + count - 1) % count;
        self.activate_selected();
    }

    fn activate_selected(&mut self) {
        let id = self
            .orchestrator
            .store()
            .sessions()
            .get(self.sidebar_selected)
            .map(|s| s.id.clone());
        if let Some(id) = id {
            let _ = self.orchestrator.store_mut().select_session(&id);
            self.scroll_to_bottom();
        }
    }
}
