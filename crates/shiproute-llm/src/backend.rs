//! LLM backend trait and the OpenAI chat-completion client.
//!
//! `OpenAiBackend` talks to `{base_url}/v1/chat/completions`, so any
//! OpenAI-compatible endpoint (Azure proxies, LMStudio, vLLM, …) works by
//! changing the base URL. One request per call: no retry, no streaming, and
//! no client-side timeout.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const OPENAI_BASE_URL: &str = "https://api.openai.com";

// ── Error ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("API error [{status}]: {message}")]
    ApiError { status: u16, message: String },
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

// ── Request / Response ────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: String,   // "system" | "user" | "assistant"
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: "system".to_string(), content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: "user".to_string(), content: content.into() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmRequest {
    pub messages: Vec<Message>,
    pub model: Option<String>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmResponse {
    pub content: String,
    pub model: String,
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

// ── Trait ─────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait LlmBackend: Send + Sync {
    async fn complete(&self, req: LlmRequest) -> Result<LlmResponse, LlmError>;
    fn model_id(&self) -> &str;
}

// ── Helper: parse OpenAI-style response ──────────────────────────────────────

fn parse_openai_response(json: &serde_json::Value, fallback_model: &str) -> Result<LlmResponse, LlmError> {
    let content = json["choices"][0]["message"]["content"]
        .as_str()
        .ok_or_else(|| LlmError::MalformedResponse("no choices[0].message.content".to_string()))?
        .to_string();

    Ok(LlmResponse {
        content,
        model: json["model"]
            .as_str()
            .unwrap_or(fallback_model)
            .to_string(),
        prompt_tokens:     json["usage"]["prompt_tokens"].as_u64().unwrap_or(0) as u32,
        completion_tokens: json["usage"]["completion_tokens"].as_u64().unwrap_or(0) as u32,
    })
}

async fn check_response_status(resp: reqwest::Response) -> Result<serde_json::Value, LlmError> {
    let status = resp.status().as_u16();
    let text = resp.text().await?;
    let body: serde_json::Value = match serde_json::from_str(&text) {
        Ok(v) => v,
        Err(_) if status >= 400 => {
            return Err(LlmError::ApiError { status, message: text.trim().to_string() });
        }
        Err(e) => return Err(e.into()),
    };
    if status >= 400 {
        let msg = body["error"]["message"]
            .as_str()
            .or_else(|| body["message"].as_str())
            .unwrap_or("unknown API error")
            .to_string();
        return Err(LlmError::ApiError { status, message: msg });
    }
    Ok(body)
}

// ── OpenAI ────────────────────────────────────────────────────────────────────

pub struct OpenAiBackend {
    pub model: String,
    pub base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl OpenAiBackend {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            base_url: OPENAI_BASE_URL.to_string(),
            api_key: api_key.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl LlmBackend for OpenAiBackend {
    async fn complete(&self, req: LlmRequest) -> Result<LlmResponse, LlmError> {
        let body = serde_json::json!({
            "model":       req.model.as_deref().unwrap_or(&self.model),
            "messages":    req.messages,
            "max_tokens":  req.max_tokens.unwrap_or(2048),
            "temperature": req.temperature.unwrap_or(1.0),
        });
        let resp = self.client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;
        let json = check_response_status(resp).await?;
        parse_openai_response(&json, &self.model)
    }

    fn model_id(&self) -> &str { &self.model }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::post, Json, Router};
    use std::sync::{Arc, Mutex};

    type Captured = Arc<Mutex<Option<(Option<String>, serde_json::Value)>>>;

    /// Serve `reply` from a loopback chat-completion endpoint; capture the request.
    async fn fake_openai(status: StatusCode, reply: serde_json::Value) -> (String, Captured) {
        let captured: Captured = Arc::new(Mutex::new(None));
        let sink = captured.clone();
        let app = Router::new().route(
            "/v1/chat/completions",
            post(move |headers: axum::http::HeaderMap, Json(body): Json<serde_json::Value>| {
                let sink = sink.clone();
                let reply = reply.clone();
                async move {
                    let auth = headers
                        .get("authorization")
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string);
                    *sink.lock().unwrap() = Some((auth, body));
                    (status, Json(reply))
                }
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{addr}"), captured)
    }

    fn request() -> LlmRequest {
        LlmRequest {
            messages: vec![Message::system("role"), Message::user("question")],
            model: None,
            max_tokens: Some(2048),
            temperature: Some(1.0),
        }
    }

    #[test]
    fn test_openai_backend_defaults() {
        let b = OpenAiBackend::new("sk-test", "gpt-4o");
        assert_eq!(b.model_id(), "gpt-4o");
        assert_eq!(b.endpoint(), "https://api.openai.com/v1/chat/completions");
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let b = OpenAiBackend::new("sk-test", "gpt-4o").with_base_url("http://localhost:1234/");
        assert_eq!(b.endpoint(), "http://localhost:1234/v1/chat/completions");
    }

    #[test]
    fn test_parse_missing_content_is_malformed() {
        let json = serde_json::json!({"choices": []});
        assert!(matches!(
            parse_openai_response(&json, "gpt-4o"),
            Err(LlmError::MalformedResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_complete_sends_chat_body_and_reads_first_choice() {
        let (url, captured) = fake_openai(StatusCode::OK, serde_json::json!({
            "model": "gpt-4o-2024-08-06",
            "choices": [{"message": {"role": "assistant", "content": "Ramai."}}],
            "usage": {"prompt_tokens": 12, "completion_tokens": 3}
        })).await;

        let backend = OpenAiBackend::new("sk-test", "gpt-4o").with_base_url(url);
        let resp = backend.complete(request()).await.unwrap();
        assert_eq!(resp.content, "Ramai.");
        assert_eq!(resp.model, "gpt-4o-2024-08-06");
        assert_eq!(resp.completion_tokens, 3);

        let (auth, body) = captured.lock().unwrap().clone().unwrap();
        assert_eq!(auth.as_deref(), Some("Bearer sk-test"));
        assert_eq!(body["model"], "gpt-4o");
        assert_eq!(body["max_tokens"], 2048);
        assert_eq!(body["temperature"], 1.0);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "question");
    }

    #[tokio::test]
    async fn test_api_error_status_is_reported() {
        let (url, _) = fake_openai(StatusCode::UNAUTHORIZED, serde_json::json!({
            "error": {"message": "Incorrect API key provided"}
        })).await;

        let backend = OpenAiBackend::new("sk-bad", "gpt-4o").with_base_url(url);
        match backend.complete(request()).await {
            Err(LlmError::ApiError { status, message }) => {
                assert_eq!(status, 401);
                assert_eq!(message, "Incorrect API key provided");
            }
            other => panic!("expected ApiError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_http_error() {
        // Bind then drop to get a port nothing listens on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let backend = OpenAiBackend::new("sk-test", "gpt-4o").with_base_url(format!("http://{addr}"));
        assert!(matches!(backend.complete(request()).await, Err(LlmError::Http(_))));
    }
}
