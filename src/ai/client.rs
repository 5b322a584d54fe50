//! LLM (`OpenAI`) API client module
//!
//! Encapsulates the single chat-completion call that turns a transcript
//! into a summary.

use openai_api_rs::v1::api::OpenAIClient;
use openai_api_rs::v1::chat_completion::{
    self as chat_completion, ChatCompletionRequest, Content, MessageRole,
};
use tracing::info;

use crate::errors::BotError;

/// Fixed sampling temperature for summary generation.
const TEMPERATURE: f64 = 0.7;

/// LLM API client for generating summaries
pub struct LlmClient {
    api_key: String,
    model: String,
}

impl LlmClient {
    #[must_use]
    pub fn new(api_key: String, model: String) -> Self {
        Self { api_key, model }
    }

    /// Issue exactly one chat completion for `system_prompt` and return
    /// the first choice's content verbatim.
    ///
    /// # Errors
    ///
    /// Returns an error if the `OpenAI` client cannot be constructed, the
    /// API call fails, or the response carries no usable choice.
    pub async fn generate_summary(&self, system_prompt: String) -> Result<String, BotError> {
        info!(
            "Generating summary with model {} ({} prompt chars)",
            self.model,
            system_prompt.len()
        );

        let mut client = OpenAIClient::builder()
            .with_api_key(self.api_key.clone())
            .build()
            .map_err(|e| BotError::OpenAIError(format!("Failed to create OpenAI client: {}", e)))?;

        let chat_req = ChatCompletionRequest::new(
            self.model.clone(),
            vec![chat_completion::ChatCompletionMessage {
                role: MessageRole::system,
                content: Content::Text(system_prompt),
                name: None,
                tool_calls: None,
                tool_call_id: None,
            }],
        )
        .temperature(TEMPERATURE);

        let result = client.chat_completion(chat_req).await?;

        result
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| BotError::OpenAIError("Completion response had no content".to_string()))
    }
}
