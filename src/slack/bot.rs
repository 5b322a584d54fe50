use super::client::SlackApiClient;
use crate::ai::LlmClient;
use crate::core::config::AppConfig;

/// The bot's two external capabilities, composed once at startup and
/// passed explicitly to whatever needs them.
pub struct ChannelBot {
    slack: SlackApiClient,
    llm: LlmClient,
}

impl ChannelBot {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        let slack = SlackApiClient::new(config.slack_bot_token.clone());
        let llm = LlmClient::new(config.openai_api_key.clone(), config.openai_model.clone());

        Self { slack, llm }
    }

    /// Get a reference to the Slack Web API client
    #[must_use]
    pub fn slack(&self) -> &SlackApiClient {
        &self.slack
    }

    /// Get a reference to the LLM client
    #[must_use]
    pub fn llm(&self) -> &LlmClient {
        &self.llm
    }
}
