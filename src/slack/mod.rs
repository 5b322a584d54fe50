//! All Slack-specific functionality

pub mod bot;
pub mod client;
pub mod response_builder;

// Re-export main types for convenience
pub use bot::ChannelBot;
pub use client::{HistoryMessage, SlackApiClient, UserRecord};
pub use response_builder::CHANNEL_SELECT_ACTION_ID;
