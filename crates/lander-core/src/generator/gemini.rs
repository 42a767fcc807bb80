//! Gemini API client for campaign generation.
//!
//! Sends the copywriting prompt to `models/{model}:generateContent` with a
//! JSON response schema, and parses the returned text into a
//! [`GeneratedCampaign`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use super::prompt::{build_prompt, response_schema, EXPECTED_BENEFITS};
use super::{parse_campaign, CampaignGenerator, GeneratedCampaign, GeneratorError};
use crate::config::{api_key_from_env, GeneratorConfig};

const API_KEY_HEADER: &str = "x-goog-api-key";
const JSON_MIME_TYPE: &str = "application/json";

/// Client for the Gemini `generateContent` endpoint.
#[derive(Clone)]
pub struct GeminiClient {
    config: GeneratorConfig,
    api_key: Option<String>,
    client: reqwest::Client,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<RequestPart>,
}

#[derive(Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: Value,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate.
    fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

impl GeminiClient {
    /// Create a client that reads the API key from the environment on each call.
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            api_key: None,
            client: reqwest::Client::new(),
        }
    }

    /// Use a fixed API key instead of the environment.
    pub fn with_api_key(mut self, api_key: &str) -> Self {
        self.api_key = Some(api_key.to_string());
        self
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }

    fn resolve_api_key(&self) -> Option<String> {
        match &self.api_key {
            Some(key) if key.trim().is_empty() => None,
            Some(key) => Some(key.trim().to_string()),
            None => api_key_from_env(),
        }
    }

    fn build_request(seed_headline: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![RequestPart {
                    text: build_prompt(seed_headline),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: JSON_MIME_TYPE.to_string(),
                response_schema: response_schema(),
            },
        }
    }
}

#[async_trait]
impl CampaignGenerator for GeminiClient {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn generate(&self, seed_headline: &str) -> Result<GeneratedCampaign, GeneratorError> {
        let api_key = self.resolve_api_key().ok_or(GeneratorError::MissingApiKey)?;
        let request = Self::build_request(seed_headline);

        debug!(model = %self.config.model, seed = seed_headline, "Calling Gemini generateContent");
        let response = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeneratorError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body: GenerateContentResponse = response.json().await?;
        let text = body.text().ok_or(GeneratorError::EmptyResponse)?;
        let campaign = parse_campaign(&text)?;

        if campaign.benefits.len() != EXPECTED_BENEFITS {
            warn!(
                expected = EXPECTED_BENEFITS,
                actual = campaign.benefits.len(),
                "Model returned an unexpected number of benefits"
            );
        }
        debug!(headline = %campaign.headline, "Campaign generated");

        Ok(campaign)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::Path, http::HeaderMap, http::StatusCode, routing::post, Json, Router};
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    const CAMPAIGN_TEXT: &str = r#"  {"headline":"New Head","subheadline":"New Sub","buttonText":"Buy","benefits":["a","b","c"],"socialProof":[{"quote":"Wow","author":"Ann"}]}
"#;

    #[derive(Default)]
    struct Captured {
        path: Option<String>,
        api_key: Option<String>,
        body: Option<Value>,
    }

    /// Serve a fixed response on an ephemeral port and record the request.
    async fn spawn_fake_gemini(
        status: StatusCode,
        response: Value,
    ) -> (String, Arc<Mutex<Captured>>) {
        let captured = Arc::new(Mutex::new(Captured::default()));
        let sink = captured.clone();

        let app = Router::new().route(
            "/v1beta/models/{action}",
            post(move |Path(action): Path<String>, headers: HeaderMap, Json(body): Json<Value>| {
                let sink = sink.clone();
                let response = response.clone();
                async move {
                    let mut c = sink.lock().unwrap();
                    c.path = Some(action);
                    c.api_key = headers
                        .get(API_KEY_HEADER)
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string);
                    c.body = Some(body);
                    (status, Json(response))
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{}", addr), captured)
    }

    fn client_for(base_url: &str) -> GeminiClient {
        GeminiClient::new(GeneratorConfig::new(base_url, "test-model").unwrap()).with_api_key("secret")
    }

    fn text_response(text: &str) -> Value {
        json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": text }] },
                "finishReason": "STOP"
            }]
        })
    }

    #[tokio::test]
    async fn test_generate_sends_schema_and_parses_response() {
        let (url, captured) = spawn_fake_gemini(StatusCode::OK, text_response(CAMPAIGN_TEXT)).await;

        let campaign = client_for(&url).generate("Sell Socks").await.unwrap();
        assert_eq!(campaign.headline, "New Head");
        assert_eq!(campaign.benefits, vec!["a", "b", "c"]);
        assert_eq!(campaign.social_proof[0].quote, "Wow");

        let c = captured.lock().unwrap();
        assert_eq!(c.path.as_deref(), Some("test-model:generateContent"));
        assert_eq!(c.api_key.as_deref(), Some("secret"));
        let body = c.body.as_ref().unwrap();
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(body["generationConfig"]["responseSchema"], response_schema());
        let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(prompt.contains("Sell Socks"));
    }

    #[tokio::test]
    async fn test_generate_joins_split_text_parts() {
        let (head, tail) = CAMPAIGN_TEXT.split_at(40);
        let response = json!({
            "candidates": [{ "content": { "parts": [{ "text": head }, { "text": tail }] } }]
        });
        let (url, _) = spawn_fake_gemini(StatusCode::OK, response).await;

        let campaign = client_for(&url).generate("x").await.unwrap();
        assert_eq!(campaign.subheadline, "New Sub");
    }

    #[tokio::test]
    async fn test_generate_reports_http_error() {
        let (url, _) = spawn_fake_gemini(
            StatusCode::FORBIDDEN,
            json!({ "error": { "message": "API key not valid" } }),
        )
        .await;

        match client_for(&url).generate("x").await {
            Err(GeneratorError::Api { status, body }) => {
                assert_eq!(status, 403);
                assert!(body.contains("API key not valid"));
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_generate_reports_malformed_and_schema_errors() {
        let (url, _) = spawn_fake_gemini(StatusCode::OK, text_response("not json")).await;
        let err = client_for(&url).generate("x").await.unwrap_err();
        assert!(matches!(err, GeneratorError::MalformedJson(_)));

        let (url, _) = spawn_fake_gemini(StatusCode::OK, text_response(r#"{"headline":"h"}"#)).await;
        let err = client_for(&url).generate("x").await.unwrap_err();
        assert!(matches!(err, GeneratorError::SchemaViolation(_)));
    }

    #[tokio::test]
    async fn test_generate_reports_empty_candidates() {
        let (url, _) = spawn_fake_gemini(
            StatusCode::OK,
            json!({ "promptFeedback": { "blockReason": "SAFETY" } }),
        )
        .await;
        let err = client_for(&url).generate("x").await.unwrap_err();
        assert!(matches!(err, GeneratorError::EmptyResponse));
    }

    #[tokio::test]
    async fn test_generate_without_key_makes_no_request() {
        let (url, captured) = spawn_fake_gemini(StatusCode::OK, text_response(CAMPAIGN_TEXT)).await;
        let client = GeminiClient::new(GeneratorConfig::new(&url, "m").unwrap()).with_api_key("  ");

        let err = client.generate("x").await.unwrap_err();
        assert!(matches!(err, GeneratorError::MissingApiKey));
        assert!(captured.lock().unwrap().path.is_none());
    }

    #[tokio::test]
    async fn test_generate_reports_transport_error() {
        // Bind then drop a listener to get a port with nothing behind it.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client_for(&format!("http://{}", addr)).generate("x").await.unwrap_err();
        assert!(matches!(err, GeneratorError::Transport(_)));
    }
}
