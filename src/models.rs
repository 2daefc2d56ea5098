// src/models.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Attribution of a single chat turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl Role {
    /// Wire name used by the generateContent API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }
}

/// One utterance within a session. Immutable once created.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Message {
            id: Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// A titled, ordered conversation thread.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatSession {
    pub id: String,
    pub title: String,
    pub preview: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub updated_at: DateTime<Utc>,
    pub messages: Vec<Message>,
}

/// Named response styles. Each maps to a fixed instruction fragment folded
/// into the system instruction for the next generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Personality {
    Lawyer,
    Judge,
    Researcher,
    Student,
    Professional,
    Short,
    Detailed,
}

impl Personality {
    pub const ALL: [Personality; 7] = [
        Personality::Lawyer,
        Personality::Judge,
        Personality::Researcher,
        Personality::Student,
        Personality::Professional,
        Personality::Short,
        Personality::Detailed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Personality::Lawyer => "Lawyer",
            Personality::Judge => "Judge",
            Personality::Researcher => "Legal Researcher",
            Personality::Student => "Law Student",
            Personality::Professional => "Professional",
            Personality::Short => "Short Answer Mode",
            Personality::Detailed => "Detailed Answer Mode",
        }
    }

    pub fn instruction(&self) -> &'static str {
        match self {
            Personality::Lawyer => {
                "Act as a defense or prosecution lawyer. Focus on arguments, loopholes, precedents, and strategy."
            }
            Personality::Judge => {
                "Act as a Judge. Be neutral, weigh evidence, cite sentencing guidelines, and deliver a balanced verdict or opinion."
            }
            Personality::Researcher => {
                "Act as a Legal Researcher. Focus on deep citations, historical context, cross-jurisdictional comparisons, and academic precision."
            }
            Personality::Student => {
                "Act as a top-tier Law Student. Explain concepts clearly, break down complex legalese into learnable parts."
            }
            Personality::Professional => {
                "Act as a Corporate Legal Consultant. Focus on compliance, risk mitigation, and business impact."
            }
            Personality::Short => {
                "Provide concise, direct answers. Bullet points preferred. No fluff."
            }
            Personality::Detailed => {
                "Provide exhaustive detail. Include all possible interpretations, exceptions, and procedural steps."
            }
        }
    }

    pub fn next(&self) -> Personality {
        let idx = Personality::ALL.iter().position(|p| p == self).unwrap_or(0);
        Personality::ALL[(idx + 1) % Personality::ALL.len()]
    }
}

/// Response-language hint applied to every generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    English,
    Bangla,
}

impl Language {
    pub fn label(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Bangla => "Bangla",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            Language::English => "Output primarily in English unless requested otherwise.",
            Language::Bangla => "Output primarily in Bangla unless requested otherwise.",
        }
    }

    pub fn toggle(&self) -> Language {
        match self {
            Language::English => Language::Bangla,
            Language::Bangla => Language::English,
        }
    }
}

/// Details of each generation API call, for diagnostics only.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiCallLog {
    pub timestamp: DateTime<Utc>,
    pub endpoint: String,
    pub request_summary: String,
    pub response_status: u16,
    pub response_time_ms: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_names() {
        assert_eq!(Role::User.as_str(), "user");
        assert_eq!(Role::Model.as_str(), "model");
    }

    #[test]
    fn test_personality_cycle_covers_all_modes() {
        let mut seen = vec![Personality::Lawyer];
        let mut current = Personality::Lawyer;
        for _ in 0..Personality::ALL.len() - 1 {
            current = current.next();
            seen.push(current);
        }
        assert_eq!(seen, Personality::ALL.to_vec());
        assert_eq!(current.next(), Personality::Lawyer);
    }

    #[test]
    fn test_language_toggle() {
        assert_eq!(Language::English.toggle(), Language::Bangla);
        assert_eq!(Language::Bangla.toggle(), Language::English);
    }
}
