use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error};

use crate::config::ProviderConfig;
use crate::error::ProviderError;
use crate::providers::traits::{ChatTurn, GenerationProvider, Role};

/// The key travels in a header so it never appears in a request URL.
const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Clone)]
pub struct GeminiProvider {
    config: ProviderConfig,
    client: Client,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl Content {
    fn text(role: Option<&'static str>, text: impl Into<String>) -> Self {
        Self {
            role,
            parts: vec![Part { text: text.into() }],
        }
    }
}

fn role_name(role: Role) -> &'static str {
    match role {
        Role::User => "user",
        Role::Model => "model",
    }
}

impl GeminiProvider {
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    pub fn with_client(config: ProviderConfig, client: Client) -> Self {
        Self { config, client }
    }

    fn generation_config(&self, schema: Option<&Value>) -> Option<GenerationConfig> {
        let config = GenerationConfig {
            response_mime_type: schema.map(|_| "application/json"),
            response_schema: schema.cloned(),
            temperature: self.config.temperature,
        };

        if config.response_schema.is_none() && config.temperature.is_none() {
            None
        } else {
            Some(config)
        }
    }

    async fn generate_content(&self, request: GenerateContentRequest) -> Result<String, ProviderError> {
        let url = self.config.generate_content_url();
        debug!(model = %self.config.model, turns = request.contents.len(), "sending generateContent request");

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, self.config.api_key.as_str())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                let err = ProviderError::from(e);
                error!(kind = err.kind(), "Gemini API request failed: {}", err);
                err
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(kind = "service", status = status.as_u16(), "Gemini API error: {}", body);
            return Err(ProviderError::Service {
                status: status.as_u16(),
                body,
            });
        }

        let body: GenerateContentResponse = response.json().await.map_err(|e| {
            let err = ProviderError::from(e);
            error!(kind = err.kind(), "Failed to parse Gemini response: {}", err);
            err
        })?;

        let text: String = body
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            error!(kind = "empty_reply", "Gemini returned no text");
            return Err(ProviderError::EmptyReply);
        }

        Ok(text)
    }
}

#[async_trait]
impl GenerationProvider for GeminiProvider {
    async fn generate_json(&self, prompt: &str, schema: &Value) -> Result<String, ProviderError> {
        let request = GenerateContentRequest {
            contents: vec![Content::text(Some("user"), prompt)],
            system_instruction: None,
            generation_config: self.generation_config(Some(schema)),
        };

        self.generate_content(request).await
    }

    async fn chat(
        &self,
        system_instruction: &str,
        history: &[ChatTurn],
        message: &str,
    ) -> Result<String, ProviderError> {
        let mut contents: Vec<Content> = history
            .iter()
            .map(|turn| Content::text(Some(role_name(turn.role)), turn.text.clone()))
            .collect();
        contents.push(Content::text(Some("user"), message));

        let request = GenerateContentRequest {
            contents,
            system_instruction: Some(Content::text(None, system_instruction)),
            generation_config: self.generation_config(None),
        };

        self.generate_content(request).await
    }

    fn get_model_info(&self) -> String {
        self.config.model.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::food::analysis::synergy::SynergyAnalyzer;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider_for(server: &MockServer) -> GeminiProvider {
        let config = ProviderConfig::new(
            "test-key".to_string(),
            "test-model".to_string(),
            &format!("{}/v1beta", server.uri()),
            None,
        )
        .unwrap();
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(5))
            .build()
            .unwrap();
        GeminiProvider::with_client(config, client)
    }

    fn reply(text: &str) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": text }] }
            }]
        }))
    }

    #[tokio::test]
    async fn generate_json_forwards_schema_and_key() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/test-model:generateContent"))
            .and(header("x-goog-api-key", "test-key"))
            .and(body_partial_json(json!({
                "generationConfig": {
                    "responseMimeType": "application/json",
                    "responseSchema": { "type": "OBJECT" }
                }
            })))
            .respond_with(reply("{\"ok\":true}"))
            .expect(1)
            .mount(&server)
            .await;

        let text = provider_for(&server)
            .generate_json("analyze", &json!({ "type": "OBJECT" }))
            .await
            .unwrap();

        assert_eq!(text, "{\"ok\":true}");

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests[0].url.query(), None);
    }

    #[tokio::test]
    async fn chat_sends_history_then_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({
                "systemInstruction": { "parts": [{ "text": "be simple" }] },
                "contents": [
                    { "role": "user", "parts": [{ "text": "hi" }] },
                    { "role": "model", "parts": [{ "text": "hello" }] },
                    { "role": "user", "parts": [{ "text": "spinach?" }] }
                ]
            })))
            .respond_with(reply("Add lemon."))
            .expect(1)
            .mount(&server)
            .await;

        let history = vec![ChatTurn::user("hi"), ChatTurn::model("hello")];
        let text = provider_for(&server)
            .chat("be simple", &history, "spinach?")
            .await
            .unwrap();

        assert_eq!(text, "Add lemon.");
    }

    #[tokio::test]
    async fn multi_part_replies_are_joined() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{ "content": { "parts": [{ "text": "{\"a\":" }, { "text": "1}" }] } }]
            })))
            .mount(&server)
            .await;

        let text = provider_for(&server)
            .generate_json("p", &json!({}))
            .await
            .unwrap();
        assert_eq!(text, "{\"a\":1}");
    }

    #[tokio::test]
    async fn error_status_is_a_service_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403).set_body_string("API key not valid"))
            .mount(&server)
            .await;

        let err = provider_for(&server)
            .chat("sys", &[], "hello")
            .await
            .unwrap_err();

        match err {
            ProviderError::Service { status, body } => {
                assert_eq!(status, 403);
                assert!(body.contains("API key"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn missing_candidates_is_an_empty_reply() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
            .mount(&server)
            .await;

        let err = provider_for(&server)
            .chat("sys", &[], "hello")
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::EmptyReply));
    }

    #[tokio::test]
    async fn non_json_body_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = provider_for(&server)
            .generate_json("p", &json!({}))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "malformed_response");
    }

    #[tokio::test]
    async fn unreachable_host_is_a_network_error() {
        let config = ProviderConfig::new(
            "k".to_string(),
            "m".to_string(),
            "http://127.0.0.1:1/v1beta",
            None,
        )
        .unwrap();

        let err = GeminiProvider::new(config)
            .chat("sys", &[], "hello")
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "network");
    }

    #[tokio::test]
    async fn api_key_never_appears_in_errors() {
        let config = ProviderConfig::new(
            "SECRET-KEY-123".to_string(),
            "m".to_string(),
            "http://127.0.0.1:1/v1beta",
            None,
        )
        .unwrap();
        let provider = GeminiProvider::new(config);

        let err = provider.chat("sys", &[], "hello").await.unwrap_err();
        assert_eq!(err.kind(), "network");
        assert!(!err.to_string().contains("SECRET-KEY-123"), "{}", err);

        let analyzer = SynergyAnalyzer::new(std::sync::Arc::new(provider));
        let err = analyzer.analyze_synergy(&["a", "b"]).await.unwrap_err();
        assert!(!err.cause().to_string().contains("SECRET-KEY-123"));
    }

    #[test]
    fn model_info_reports_configured_model() {
        let config =
            ProviderConfig::new("k".into(), "gemini-2.5-flash".into(), "http://localhost", None)
                .unwrap();
        assert_eq!(GeminiProvider::new(config).get_model_info(), "gemini-2.5-flash");
    }
}
