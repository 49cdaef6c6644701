//! shiproute-llm — narrative assistant bridge.
//!
//!   backend    — `LlmBackend` trait and the OpenAI chat-completion client
//!   assistant  — `NarrativeAssistant`, the one-method seam the dashboard calls
//!   prompt     — system role text and the templated route prompts

pub mod assistant;
pub mod backend;
pub mod prompt;

pub use assistant::{LlmAssistant, NarrativeAssistant};
pub use backend::{LlmBackend, LlmError, LlmRequest, LlmResponse, Message, OpenAiBackend};
pub use prompt::AnalysisRequest;
