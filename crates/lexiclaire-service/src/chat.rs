//! Document chat prompts
//!
//! A question is answered against the analyzed text of one document. The
//! prompt carries a bounded window of the conversation so far; the model
//! call itself belongs to a [`TextGenerator`] supplied by the caller.

use serde::{Deserialize, Serialize};
use shared_types::text::truncate_chars;
use shared_types::{ChatMessage, Limits, Speaker};
use tracing::debug;

use crate::config::ServiceConfig;
use crate::error::ServiceError;

pub const SYSTEM_PROMPT: &str = "You are a helpful legal assistant. Answer based ONLY on the provided document text. If the answer is not found in the text, say you cannot find it.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub question: String,
    #[serde(default)]
    pub history: Vec<ChatMessage>,
    #[serde(default)]
    pub document_id: String,
    pub analyzed_text: String,
}

/// Produces an answer for a fully rendered prompt
pub trait TextGenerator {
    fn generate(&self, prompt: &str) -> Result<String, ServiceError>;
}

/// The last `max_turns` messages of a conversation
pub fn window_history(history: &[ChatMessage], max_turns: usize) -> &[ChatMessage] {
    &history[history.len().saturating_sub(max_turns)..]
}

/// One `SPEAKER: content` line per message
pub fn render_turns(history: &[ChatMessage]) -> String {
    history
        .iter()
        .map(|m| format!("{}: {}", m.speaker.label(), m.content))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatPrompt {
    pub system: String,
    pub document: String,
    pub turns: String,
    pub question: String,
}

impl ChatPrompt {
    pub fn render(&self) -> String {
        format!(
            "{}\n\nDOCUMENT:\n{}\n\nHISTORY:\n{}\n\nQUESTION:\n{}",
            self.system, self.document, self.turns, self.question
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct ChatService {
    limits: Limits,
}

impl ChatService {
    pub fn new(config: &ServiceConfig) -> Self {
        Self {
            limits: config.limits,
        }
    }

    pub fn build_prompt(&self, request: &ChatRequest) -> ChatPrompt {
        let history = window_history(&request.history, self.limits.max_history_turns);
        debug!(
            "Chat prompt keeps {} of {} history turns",
            history.len(),
            request.history.len()
        );
        ChatPrompt {
            system: SYSTEM_PROMPT.to_string(),
            document: truncate_chars(&request.analyzed_text, self.limits.max_input_chars)
                .to_string(),
            turns: render_turns(history),
            question: request.question.clone(),
        }
    }

    /// Answer a question through the given generator
    pub fn ask(
        &self,
        request: &ChatRequest,
        generator: &dyn TextGenerator,
    ) -> Result<ChatMessage, ServiceError> {
        let prompt = self.build_prompt(request).render();
        let content = generator.generate(&prompt)?;
        Ok(ChatMessage {
            speaker: Speaker::Ai,
            content,
        })
    }
}
