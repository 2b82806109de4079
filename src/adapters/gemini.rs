use crate::domain::model::{Content, GenerationConfig};
use crate::domain::ports::{ConfigProvider, TextGenerator};
use crate::utils::error::{Result, StudioError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-1.0-pro";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: &'a [Content],
    generation_config: &'a GenerationConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
    status: Option<String>,
}

/// 透過 generateContent 端點呼叫 Gemini
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(base_url: &str, api_key: &str, model: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let api_key = config
            .api_key()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| StudioError::MissingConfigError {
                field: "api.api_key".to_string(),
            })?;

        Self::new(
            config.base_url(),
            api_key,
            config.model(),
            Duration::from_secs(config.timeout_seconds()),
        )
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, contents: &[Content], config: &GenerationConfig) -> Result<String> {
        let body = GenerateContentRequest {
            contents,
            generation_config: config,
        };

        tracing::debug!(
            "Sending {} message(s) to model {} at {}",
            contents.len(),
            self.model,
            self.base_url
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Model response status: {}", status);

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<ErrorEnvelope>(&text) {
                Ok(envelope) => match envelope.error.status {
                    Some(code) => format!("{} ({})", envelope.error.message, code),
                    None => envelope.error.message,
                },
                Err(_) if text.trim().is_empty() => status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string(),
                Err(_) => text,
            };
            return Err(StudioError::RemoteError {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        extract_text(parsed)
    }
}

fn extract_text(response: GenerateContentResponse) -> Result<String> {
    let Some(candidate) = response.candidates.into_iter().next() else {
        let reason = response
            .prompt_feedback
            .and_then(|f| f.block_reason)
            .map(|r| format!("prompt blocked ({})", r))
            .unwrap_or_else(|| "no candidates returned".to_string());
        return Err(StudioError::EmptyResponse { reason });
    };

    let text = candidate.content.map(|c| c.text()).unwrap_or_default();
    if text.trim().is_empty() {
        let reason = match candidate.finish_reason {
            Some(r) => format!("candidate finished with {}", r),
            None => "candidate contained no text".to_string(),
        };
        return Err(StudioError::EmptyResponse { reason });
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn client_for(server: &MockServer) -> GeminiClient {
        GeminiClient::new(
            &server.base_url(),
            "test-key",
            DEFAULT_MODEL,
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let client = GeminiClient::new(
            "https://example.com/",
            "k",
            "gemini-1.0-pro",
            Duration::from_secs(1),
        )
        .unwrap();
        assert_eq!(
            client.endpoint(),
            "https://example.com/v1beta/models/gemini-1.0-pro:generateContent"
        );
    }

    #[tokio::test]
    async fn test_generate_sends_contents_and_config() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/v1beta/models/gemini-1.0-pro:generateContent")
                .header("x-goog-api-key", "test-key")
                .json_body(serde_json::json!({
                    "contents": [
                        {"role": "user", "parts": [{"text": "hello"}]}
                    ],
                    "generationConfig": {
                        "temperature": 0.9,
                        "topP": 1.0,
                        "maxOutputTokens": 2048,
                        "responseMimeType": "text/plain"
                    }
                }));
            then.status(200).json_body(serde_json::json!({
                "candidates": [{
                    "content": {"role": "model", "parts": [{"text": "Hi "}, {"text": "there"}]},
                    "finishReason": "STOP"
                }]
            }));
        });

        let client = client_for(&server);
        let text = client
            .generate(&[Content::user("hello")], &GenerationConfig::default())
            .await
            .unwrap();

        api_mock.assert();
        assert_eq!(text, "Hi there");
    }

    #[tokio::test]
    async fn test_remote_error_uses_api_message() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST);
            then.status(400).json_body(serde_json::json!({
                "error": {
                    "code": 400,
                    "message": "API key not valid.",
                    "status": "INVALID_ARGUMENT"
                }
            }));
        });

        let err = client_for(&server)
            .generate(&[Content::user("hello")], &GenerationConfig::default())
            .await
            .unwrap_err();

        api_mock.assert();
        match err {
            StudioError::RemoteError { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "API key not valid. (INVALID_ARGUMENT)");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_blocked_prompt_is_empty_response() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST);
            then.status(200).json_body(serde_json::json!({
                "promptFeedback": {"blockReason": "SAFETY"}
            }));
        });

        let err = client_for(&server)
            .generate(&[Content::user("hello")], &GenerationConfig::default())
            .await
            .unwrap_err();

        match err {
            StudioError::EmptyResponse { reason } => assert!(reason.contains("SAFETY")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_candidate_without_text() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST);
            then.status(200).json_body(serde_json::json!({
                "candidates": [{"finishReason": "MAX_TOKENS"}]
            }));
        });

        let err = client_for(&server)
            .generate(&[Content::user("hello")], &GenerationConfig::default())
            .await
            .unwrap_err();

        assert!(matches!(err, StudioError::EmptyResponse { .. }));
        assert!(err.to_string().contains("MAX_TOKENS"));
    }
}
