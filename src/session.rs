// src/session.rs

use crate::constants::{
    NEW_SESSION_PREVIEW, NEW_SESSION_TITLE, PREVIEW_MAX_CHARS, TITLE_MAX_CHARS,
};
use crate::errors::{JurisError, JurisResult};
use crate::models::{ChatSession, Message, Role};
use chrono::{Duration, Utc};
use uuid::Uuid;

/// In-memory collection of chat sessions, most-recent-first, plus the active
/// pointer. The store is the single owner of all session and message values;
/// everything else mutates through it.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: Vec<ChatSession>,
    active_id: Option<String>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with the demo consultation shown on first launch.
    pub fn with_seed_history() -> Self {
        let now = Utc::now();
        let seed = ChatSession {
            id: Uuid::new_v4().to_string(),
            title: "Land Dispute Consultation".to_string(),
            preview: "Regarding Section 144...".to_string(),
            updated_at: now - Duration::seconds(99),
            messages: vec![
                Message {
                    id: Uuid::new_v4().to_string(),
                    role: Role::User,
                    content: "What is Section 144?".to_string(),
                    timestamp: now - Duration::seconds(100),
                },
                Message {
                    id: Uuid::new_v4().to_string(),
                    role: Role::Model,
                    content: "Section 144 of the Code of Criminal Procedure (CrPC) empowers an \
                              Executive Magistrate to issue orders in urgent cases of nuisance \
                              or apprehended danger..."
                        .to_string(),
                    timestamp: now - Duration::seconds(99),
                },
            ],
        };
        Self {
            sessions: vec![seed],
            active_id: None,
        }
    }

    /// Allocates a new empty session at the front of the list and returns its
    /// id. Infallible.
    pub fn create_session(&mut self) -> String {
        let session = ChatSession {
            id: Uuid::new_v4().to_string(),
            title: NEW_SESSION_TITLE.to_string(),
            preview: NEW_SESSION_PREVIEW.to_string(),
            updated_at: Utc::now(),
            messages: Vec::new(),
        };
        let id = session.id.clone();
        self.sessions.insert(0, session);
        id
    }

    /// Appends messages to the named session, bumps its `updated_at`, derives
    /// its title from the first message ever appended, and refreshes the
    /// preview from the last one. An unknown id is an explicit error.
    pub fn append_messages(&mut self, session_id: &str, messages: Vec<Message>) -> JurisResult<()> {
        if messages.is_empty() {
            return Ok(());
        }

        let session = self
            .sessions
            .iter_mut()
            .find(|s| s.id == session_id)
            .ok_or_else(|| {
                JurisError::session_error(format!("append to nonexistent session {session_id}"))
            })?;

        if session.messages.is_empty() {
            session.title = truncate_chars(&messages[0].content, TITLE_MAX_CHARS);
        }
        if let Some(last) = messages.last() {
            session.preview = truncate_chars(&last.content, PREVIEW_MAX_CHARS);
        }
        session.updated_at = Utc::now();
        session.messages.extend(messages);
        Ok(())
    }

    /// Points the active pointer at an existing session.
    pub fn select_session(&mut self, session_id: &str) -> JurisResult<()> {
        if self.sessions.iter().any(|s| s.id == session_id) {
            self.active_id = Some(session_id.to_string());
            Ok(())
        } else {
            Err(JurisError::session_error(format!(
                "select of nonexistent session {session_id}"
            )))
        }
    }

    pub fn clear_active(&mut self) {
        self.active_id = None;
    }

    pub fn active(&self) -> Option<&ChatSession> {
        let id = self.active_id.as_deref()?;
        self.sessions.iter().find(|s| s.id == id)
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    pub fn session(&self, session_id: &str) -> Option<&ChatSession> {
        self.sessions.iter().find(|s| s.id == session_id)
    }

    pub fn sessions(&self) -> &[ChatSession] {
        &self.sessions
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_session_inserts_at_front() {
        let mut store = SessionStore::new();
        let first = store.create_session();
        let second = store.create_session();
        assert_eq!(store.sessions()[0].id, second);
        assert_eq!(store.sessions()[1].id, first);
    }

    #[test]
    fn test_append_increases_count_and_updated_at() {
        let mut store = SessionStore::new();
        let id = store.create_session();
        let before = store.session(&id).unwrap().updated_at;

        let batch = vec![
            Message::new(Role::User, "What is bail?"),
            Message::new(Role::Model, "Bail is..."),
            Message::new(Role::User, "And anticipatory bail?"),
        ];
        store.append_messages(&id, batch).unwrap();

        let session = store.session(&id).unwrap();
        assert_eq!(session.messages.len(), 3);
        assert!(session.updated_at >= before);
    }

    #[test]
    fn test_title_derived_from_first_message_only() {
        let mut store = SessionStore::new();
        let id = store.create_session();
        let long = "What are the penalties under the Digital Security Act 2018?";
        store
            .append_messages(&id, vec![Message::new(Role::User, long)])
            .unwrap();

        let title = store.session(&id).unwrap().title.clone();
        assert_eq!(title, long.chars().take(30).collect::<String>());

        store
            .append_messages(&id, vec![Message::new(Role::Model, "The penalties are...")])
            .unwrap();
        assert_eq!(store.session(&id).unwrap().title, title);
    }

    #[test]
    fn test_preview_tracks_last_message() {
        let mut store = SessionStore::new();
        let id = store.create_session();
        assert_eq!(store.session(&id).unwrap().preview, NEW_SESSION_PREVIEW);

        store
            .append_messages(&id, vec![Message::new(Role::User, "Hello")])
            .unwrap();
        assert_eq!(store.session(&id).unwrap().preview, "Hello");
    }

    #[test]
    fn test_append_to_unknown_session_is_an_error() {
        let mut store = SessionStore::new();
        let result = store.append_messages("no-such-id", vec![Message::new(Role::User, "hi")]);
        assert!(result.is_err());
    }

    #[test]
    fn test_select_unknown_session_is_an_error() {
        let mut store = SessionStore::new();
        assert!(store.select_session("no-such-id").is_err());
        assert!(store.active().is_none());
    }

    #[test]
    fn test_active_pointer_follows_selection() {
        let mut store = SessionStore::new();
        let id = store.create_session();
        store.select_session(&id).unwrap();
        assert_eq!(store.active().unwrap().id, id);
        store.clear_active();
        assert!(store.active().is_none());
    }

    #[test]
    fn test_seed_history_has_demo_consultation() {
        let store = SessionStore::with_seed_history();
        let session = &store.sessions()[0];
        assert_eq!(session.title, "Land Dispute Consultation");
        assert_eq!(session.messages.len(), 2);
        assert_eq!(session.messages[0].role, Role::User);
        assert_eq!(session.messages[1].role, Role::Model);
    }
}
