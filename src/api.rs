use crate::config::get_config;
use crate::constants::{
    CREATOR_IDENTITY, EMPTY_RESPONSE_APOLOGY, GEMINI_API_BASE, IDENTITY_TRIGGER,
    MISSING_KEY_RESPONSE, SERVICE_ERROR_RESPONSE, SYSTEM_INSTRUCTION_BASE,
};
use crate::errors::{JurisError, JurisResult};
use crate::logging::log_api_call;
use crate::models::{ApiCallLog, Language, Message, Personality};
use chrono::Utc;
use reqwest::Client;
use serde_json::{json, Value};

/// Client for the Gemini generateContent API. Stateless with respect to
/// application state: it reads its inputs and the remote service, and never
/// touches the session store.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
    temperature: f32,
    max_output_tokens: u32,
}

impl GeminiClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        model: impl Into<String>,
        temperature: f32,
        max_output_tokens: u32,
    ) -> Self {
        GeminiClient {
            client: Client::new(),
            base_url: base_url.into(),
            api_key,
            model: model.into(),
            temperature,
            max_output_tokens,
        }
    }

    pub fn from_config() -> Self {
        let config = get_config();
        Self::new(
            GEMINI_API_BASE,
            config.api_key,
            config.model,
            config.temperature,
            config.max_output_tokens,
        )
    }

    /// Generates a legal response for `prompt` given the prior `history`.
    /// Always returns text: configuration and service failures are mapped to
    /// fixed user-facing strings, with the root cause logged for diagnostics.
    pub async fn generate(
        &self,
        prompt: &str,
        history: &[Message],
        personality: Personality,
        language: Language,
    ) -> String {
        // Strict identity check, before any network call
        if prompt.trim() == IDENTITY_TRIGGER {
            return CREATOR_IDENTITY.to_string();
        }

        let api_key = match self.api_key.as_deref() {
            Some(key) => key,
            None => return MISSING_KEY_RESPONSE.to_string(),
        };

        match self
            .request_completion(api_key, prompt, history, personality, language)
            .await
        {
            Ok(Some(text)) => text,
            Ok(None) => EMPTY_RESPONSE_APOLOGY.to_string(),
            Err(e) => {
                log::error!("Gemini API error: {}", e);
                SERVICE_ERROR_RESPONSE.to_string()
            }
        }
    }

    async fn request_completion(
        &self,
        api_key: &str,
        prompt: &str,
        history: &[Message],
        personality: Personality,
        language: Language,
    ) -> JurisResult<Option<String>> {
        let mut contents: Vec<Value> = history
            .iter()
            .map(|m| {
                json!({
                    "role": m.role.as_str(),
                    "parts": [{ "text": m.content }]
                })
            })
            .collect();
        contents.push(json!({
            "role": "user",
            "parts": [{ "text": prompt }]
        }));

        let payload = json!({
            "systemInstruction": {
                "parts": [{ "text": build_system_instruction(personality, language) }]
            },
            "contents": contents,
            "generationConfig": {
                "temperature": self.temperature,
                "maxOutputTokens": self.max_output_tokens
            }
        });

        let endpoint = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let start_time = std::time::Instant::now();

        let response = self
            .client
            .post(&endpoint)
            .header("x-goog-api-key", api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| JurisError::api_error(format!("Request failed: {}", e)))?;

        let status = response.status();
        log_api_call(&ApiCallLog {
            timestamp: Utc::now(),
            endpoint: endpoint.clone(),
            request_summary: "generate_legal_response".to_string(),
            response_status: status.as_u16(),
            response_time_ms: start_time.elapsed().as_millis(),
        });

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(JurisError::api_error(format!(
                "API returned error: {} - {}",
                status, error_text
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| JurisError::api_error(format!("Failed to parse API response: {}", e)))?;

        if let Some(error) = body["error"].as_object() {
            return Err(JurisError::api_error(format!(
                "{}: {}",
                error["status"].as_str().unwrap_or("unknown"),
                error["message"].as_str().unwrap_or("no message")
            )));
        }

        let text = body["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);
        Ok(text)
    }
}

/// System instruction = base rules + personality mode + language hint.
pub fn build_system_instruction(personality: Personality, language: Language) -> String {
    format!(
        "{}\n\nMODE: {}\nLANGUAGE: {}",
        SYSTEM_INSTRUCTION_BASE,
        personality.instruction(),
        language.hint()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_MAX_OUTPUT_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
    use crate::models::Role;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str, api_key: Option<&str>) -> GeminiClient {
        GeminiClient::new(
            base_url,
            api_key.map(str::to_string),
            DEFAULT_MODEL,
            DEFAULT_TEMPERATURE,
            DEFAULT_MAX_OUTPUT_TOKENS,
        )
    }

    fn generate_path() -> String {
        format!("/v1beta/models/{}:generateContent", DEFAULT_MODEL)
    }

    fn candidate_body(text: &str) -> Value {
        json!({
            "candidates": [{
                "content": { "parts": [{ "text": text }], "role": "model" }
            }]
        })
    }

    #[tokio::test]
    async fn test_identity_override_skips_service() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body("nope")))
            .expect(0)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri(), Some("test-key"));
        let response = client
            .generate(
                "  Who created you?  ",
                &[],
                Personality::Lawyer,
                Language::English,
            )
            .await;
        assert_eq!(response, CREATOR_IDENTITY);
    }

    #[tokio::test]
    async fn test_missing_key_returns_diagnostic_without_network() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body("nope")))
            .expect(0)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri(), None);
        let response = client
            .generate("What is bail?", &[], Personality::Lawyer, Language::English)
            .await;
        assert_eq!(response, MISSING_KEY_RESPONSE);
    }

    #[tokio::test]
    async fn test_successful_generation_passes_text_through() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(generate_path()))
            .and(header("x-goog-api-key", "test-key"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(candidate_body("Section 144 restricts assembly.")),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let history = vec![Message::new(Role::User, "Earlier question")];
        let client = test_client(&mock_server.uri(), Some("test-key"));
        let response = client
            .generate(
                "What is Section 144?",
                &history,
                Personality::Lawyer,
                Language::English,
            )
            .await;
        assert_eq!(response, "Section 144 restricts assembly.");
    }

    #[tokio::test]
    async fn test_service_error_maps_to_fixed_string() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("quota exceeded"))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri(), Some("test-key"));
        let response = client
            .generate("What is bail?", &[], Personality::Judge, Language::Bangla)
            .await;
        assert_eq!(response, SERVICE_ERROR_RESPONSE);
    }

    #[tokio::test]
    async fn test_empty_candidate_maps_to_apology() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri(), Some("test-key"));
        let response = client
            .generate("What is bail?", &[], Personality::Short, Language::English)
            .await;
        assert_eq!(response, EMPTY_RESPONSE_APOLOGY);
    }

    #[test]
    fn test_language_toggle_changes_only_language_line() {
        let english = build_system_instruction(Personality::Researcher, Language::English);
        let bangla = build_system_instruction(Personality::Researcher, Language::Bangla);

        assert!(english.contains(Personality::Researcher.instruction()));
        assert!(bangla.contains(Personality::Researcher.instruction()));
        assert!(english.ends_with(&format!("LANGUAGE: {}", Language::English.hint())));
        assert!(bangla.ends_with(&format!("LANGUAGE: {}", Language::Bangla.hint())));

        let english_without_hint = english.replace(Language::English.hint(), "");
        let bangla_without_hint = bangla.replace(Language::Bangla.hint(), "");
        assert_eq!(english_without_hint, bangla_without_hint);
    }

    #[test]
    fn test_personality_changes_only_mode_line() {
        let lawyer = build_system_instruction(Personality::Lawyer, Language::English);
        let judge = build_system_instruction(Personality::Judge, Language::English);
        assert!(lawyer.contains(&format!("MODE: {}", Personality::Lawyer.instruction())));
        assert!(judge.contains(&format!("MODE: {}", Personality::Judge.instruction())));
    }
}
