use std::env;

/// Model used when `OPENAI_MODEL` is not set.
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";

/// DM prompt shown above the channel select menu when `SELECT_PROMPT_TEXT`
/// is not set.
pub const DEFAULT_SELECT_PROMPT_TEXT: &str = "Pick a channel to summarize:";

/// Reply used when the 24-hour window holds no qualifying messages and
/// `NO_UPDATE_TEXT` is not set.
pub const DEFAULT_NO_UPDATE_TEXT: &str = "No updates in the last 24 hours.";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub slack_bot_token: String,
    pub slack_app_token: String,
    pub openai_api_key: String,
    pub openai_model: String,
    pub select_prompt_text: String,
    pub no_update_text: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            slack_bot_token: env::var("SLACK_BOT_TOKEN")
                .map_err(|e| format!("SLACK_BOT_TOKEN: {}", e))?,
            slack_app_token: env::var("SLACK_APP_TOKEN")
                .map_err(|e| format!("SLACK_APP_TOKEN: {}", e))?,
            openai_api_key: env::var("OPENAI_API_KEY")
                .map_err(|e| format!("OPENAI_API_KEY: {}", e))?,
            openai_model: env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_MODEL.to_string()),
            select_prompt_text: env::var("SELECT_PROMPT_TEXT")
                .unwrap_or_else(|_| DEFAULT_SELECT_PROMPT_TEXT.to_string()),
            no_update_text: env::var("NO_UPDATE_TEXT")
                .unwrap_or_else(|_| DEFAULT_NO_UPDATE_TEXT.to_string()),
        })
    }
}
