//! Socket Mode event handlers
//!
//! One handler per trigger surface: direct messages (channel listing)
//! and `block_actions` interactions (summarization). The listener
//! acknowledges each envelope when a handler returns, so handlers log
//! business failures and return `Ok` instead of propagating them.

pub mod actions;
pub mod message;

use crate::core::config::AppConfig;
use crate::slack::bot::ChannelBot;

/// Shared, read-only state handed to every Socket Mode callback.
pub struct BotState {
    pub bot: ChannelBot,
    pub config: AppConfig,
    /// The bot's own user id, resolved once at startup; used to ignore
    /// the bot's own DM traffic.
    pub bot_user_id: String,
}
