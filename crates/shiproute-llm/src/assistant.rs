//! Narrative assistant — the single seam between the dashboard and the LLM.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::backend::{LlmBackend, LlmError, LlmRequest, Message};

#[async_trait]
pub trait NarrativeAssistant: Send + Sync {
    /// Send one system + user exchange and return the trimmed reply.
    async fn analyze(&self, prompt: &str, system_role: &str) -> Result<String, LlmError>;
}

/// `NarrativeAssistant` backed by a chat-completion `LlmBackend`.
pub struct LlmAssistant {
    backend: Arc<dyn LlmBackend>,
    max_tokens: u32,
    temperature: f32,
}

impl LlmAssistant {
    pub fn new(backend: Arc<dyn LlmBackend>, max_tokens: u32, temperature: f32) -> Self {
        Self { backend, max_tokens, temperature }
    }
}

#[async_trait]
impl NarrativeAssistant for LlmAssistant {
    async fn analyze(&self, prompt: &str, system_role: &str) -> Result<String, LlmError> {
        let req = LlmRequest {
            messages: vec![Message::system(system_role), Message::user(prompt)],
            model: None,
            max_tokens: Some(self.max_tokens),
            temperature: Some(self.temperature),
        };

        match self.backend.complete(req).await {
            Ok(resp) => {
                info!(
                    model = %resp.model,
                    prompt_tokens = resp.prompt_tokens,
                    completion_tokens = resp.completion_tokens,
                    "Analysis completed"
                );
                Ok(resp.content.trim().to_string())
            }
            Err(e) => {
                warn!(model = self.backend.model_id(), error = %e, "Analysis request failed");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::LlmResponse;
    use std::sync::Mutex;

    /// Records the request and answers with a canned completion.
    struct CannedBackend {
        reply: String,
        seen: Mutex<Option<LlmRequest>>,
    }

    #[async_trait]
    impl LlmBackend for CannedBackend {
        async fn complete(&self, req: LlmRequest) -> Result<LlmResponse, LlmError> {
            *self.seen.lock().unwrap() = Some(req);
            Ok(LlmResponse {
                content: self.reply.clone(),
                model: "canned".to_string(),
                prompt_tokens: 0,
                completion_tokens: 0,
            })
        }

        fn model_id(&self) -> &str { "canned" }
    }

    struct FailingBackend;

    #[async_trait]
    impl LlmBackend for FailingBackend {
        async fn complete(&self, _req: LlmRequest) -> Result<LlmResponse, LlmError> {
            Err(LlmError::ApiError { status: 429, message: "quota exceeded".to_string() })
        }

        fn model_id(&self) -> &str { "failing" }
    }

    #[tokio::test]
    async fn test_analyze_builds_two_messages_and_trims() {
        let backend = Arc::new(CannedBackend {
            reply: "\n  Analisis selesai.  \n".to_string(),
            seen: Mutex::new(None),
        });
        let assistant = LlmAssistant::new(backend.clone(), 2048, 1.0);

        let text = assistant.analyze("Bagaimana rute ini?", "Anda adalah ahli.").await.unwrap();
        assert_eq!(text, "Analisis selesai.");

        let req = backend.seen.lock().unwrap().clone().unwrap();
        assert_eq!(req.messages, vec![
            Message::system("Anda adalah ahli."),
            Message::user("Bagaimana rute ini?"),
        ]);
        assert_eq!(req.max_tokens, Some(2048));
        assert_eq!(req.temperature, Some(1.0));
    }

    #[tokio::test]
    async fn test_analyze_passes_service_errors_through() {
        let assistant = LlmAssistant::new(Arc::new(FailingBackend), 2048, 1.0);
        let err = assistant.analyze("q", "role").await.unwrap_err();
        assert_eq!(err.to_string(), "API error [429]: quota exceeded");
    }
}
