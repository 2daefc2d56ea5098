// src/orchestrator.rs

use crate::api::GeminiClient;
use crate::errors::{JurisError, JurisResult};
use crate::models::{Language, Message, Personality, Role};
use crate::session::SessionStore;

/// Observable phase of the send pipeline. Exactly one send may be in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendPhase {
    Idle,
    AwaitingResponse,
}

/// Snapshot handed out by `begin_send`: everything the generator needs, taken
/// before the user message was appended. `history` deliberately excludes the
/// new prompt, which the generator receives separately.
#[derive(Debug, Clone)]
pub struct PendingSend {
    pub session_id: String,
    pub prompt: String,
    pub history: Vec<Message>,
    pub personality: Personality,
    pub language: Language,
}

/// Coordinates the session store and the response generator. Owns the store;
/// all mutations go through its append operation.
#[derive(Debug)]
pub struct Orchestrator {
    store: SessionStore,
    personality: Personality,
    language: Language,
    phase: SendPhase,
}

impl Orchestrator {
    pub fn new(store: SessionStore) -> Self {
        Orchestrator {
            store,
            personality: Personality::Lawyer,
            language: Language::English,
            phase: SendPhase::Idle,
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut SessionStore {
        &mut self.store
    }

    pub fn personality(&self) -> Personality {
        self.personality
    }

    /// Affects only subsequent generations; prior messages are untouched.
    pub fn set_personality(&mut self, personality: Personality) {
        self.personality = personality;
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn is_generating(&self) -> bool {
        self.phase == SendPhase::AwaitingResponse
    }

    /// First half of the send pipeline: creates and activates a session when
    /// none is active, snapshots its history, appends the user message, and
    /// enters `AwaitingResponse`. A send issued while another is in flight is
    /// rejected rather than queued.
    pub fn begin_send(&mut self, text: &str) -> JurisResult<PendingSend> {
        if self.phase == SendPhase::AwaitingResponse {
            return Err(JurisError::session_error("a send is already in flight"));
        }
        let text = text.trim();
        if text.is_empty() {
            return Err(JurisError::session_error("cannot send an empty message"));
        }

        let session_id = match self.store.active_id() {
            Some(id) => id.to_string(),
            None => {
                let id = self.store.create_session();
                self.store.select_session(&id)?;
                id
            }
        };

        let history = self
            .store
            .session(&session_id)
            .map(|s| s.messages.clone())
            .unwrap_or_default();

        self.store
            .append_messages(&session_id, vec![Message::new(Role::User, text)])?;
        self.phase = SendPhase::AwaitingResponse;

        Ok(PendingSend {
            session_id,
            prompt: text.to_string(),
            history,
            personality: self.personality,
            language: self.language,
        })
    }

    /// Second half: appends the generated text as a model message and returns
    /// to `Idle`. The generator never raises, so this always runs; the
    /// session-existence error only fires if state was corrupted in between.
    pub fn resolve_send(
        &mut self,
        pending: &PendingSend,
        response_text: impl Into<String>,
    ) -> JurisResult<()> {
        let result = self
            .store
            .append_messages(&pending.session_id, vec![Message::new(Role::Model, response_text)]);
        self.phase = SendPhase::Idle;
        result
    }

    /// Full pipeline in one call. The TUI drives `begin_send`/`resolve_send`
    /// separately so the event loop stays responsive across the await.
    pub async fn send(&mut self, text: &str, client: &GeminiClient) -> JurisResult<()> {
        let pending = self.begin_send(text)?;
        let response = client
            .generate(
                &pending.prompt,
                &pending.history,
                pending.personality,
                pending.language,
            )
            .await;
        self.resolve_send(&pending, response)
    }
}
