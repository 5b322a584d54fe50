//! Slack Web API client module
//!
//! Encapsulates the Web API methods the bot relies on. Responses
//! deserialize into the narrow shapes used downstream; cursor-paginated
//! methods consume every page before returning.

use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use std::time::Duration;

use crate::core::models::ChannelOption;
use crate::errors::BotError;

static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .expect("Failed to create HTTP client")
});

const SLACK_API_BASE: &str = "https://slack.com/api";

/// Page size requested from cursor-paginated methods.
const PAGE_LIMIT: &str = "200";

#[derive(Debug, Deserialize)]
struct ResponseMetadata {
    next_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChannelEntry {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    is_member: bool,
}

#[derive(Debug, Deserialize)]
struct ConversationsListResponse {
    ok: bool,
    error: Option<String>,
    #[serde(default)]
    channels: Vec<ChannelEntry>,
    response_metadata: Option<ResponseMetadata>,
}

#[derive(Debug, Deserialize)]
struct ConversationsMembersResponse {
    ok: bool,
    error: Option<String>,
    #[serde(default)]
    members: Vec<String>,
    response_metadata: Option<ResponseMetadata>,
}

/// A raw history record, reduced to the fields the transcript needs.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryMessage {
    pub ts: String,
    pub user: Option<String>,
    pub text: Option<String>,
    pub bot_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ConversationsHistoryResponse {
    ok: bool,
    error: Option<String>,
    #[serde(default)]
    messages: Vec<HistoryMessage>,
    response_metadata: Option<ResponseMetadata>,
}

/// The `users.info` fields the summarizer filters on.
#[derive(Debug, Clone, Deserialize)]
pub struct UserRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub is_bot: bool,
}

#[derive(Debug, Deserialize)]
struct UsersInfoResponse {
    ok: bool,
    error: Option<String>,
    user: Option<UserRecord>,
}

#[derive(Debug, Deserialize)]
struct AuthTestResponse {
    ok: bool,
    error: Option<String>,
    user_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PostMessageResponse {
    ok: bool,
    error: Option<String>,
}

fn api_error(method: &str, error: Option<String>) -> BotError {
    BotError::ApiError(format!(
        "{} error: {}",
        method,
        error.unwrap_or_else(|| "unknown".to_string())
    ))
}

/// Slack Web API client
pub struct SlackApiClient {
    token: String,
}

impl SlackApiClient {
    #[must_use]
    pub fn new(token: String) -> Self {
        Self { token }
    }

    async fn get_json<T>(&self, method: &str, query: &[(&str, String)]) -> Result<T, BotError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let resp = HTTP_CLIENT
            .get(format!("{SLACK_API_BASE}/{method}"))
            .bearer_auth(&self.token)
            .query(query)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(BotError::ApiError(format!(
                "{} HTTP {}",
                method,
                resp.status()
            )));
        }

        // Decoded from the body text so a malformed payload surfaces as a
        // parse failure rather than a transport failure.
        let body = resp.text().await?;
        Ok(serde_json::from_str::<T>(&body)?)
    }

    /// Resolve the bot's own user id via `auth.test`.
    pub async fn bot_user_id(&self) -> Result<String, BotError> {
        let resp: AuthTestResponse = self.get_json("auth.test", &[]).await?;
        if !resp.ok {
            return Err(api_error("auth.test", resp.error));
        }
        resp.user_id
            .ok_or_else(|| BotError::ApiError("auth.test returned no user_id".to_string()))
    }

    /// Public and private channels the bot has joined, across all pages,
    /// in the order Slack returned them.
    pub async fn list_member_channels(&self) -> Result<Vec<ChannelOption>, BotError> {
        let mut channels = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let mut query = vec![
                ("types", "public_channel,private_channel".to_string()),
                ("limit", PAGE_LIMIT.to_string()),
            ];
            if let Some(c) = &cursor {
                query.push(("cursor", c.clone()));
            }

            let resp: ConversationsListResponse =
                self.get_json("conversations.list", &query).await?;
            if !resp.ok {
                return Err(api_error("conversations.list", resp.error));
            }

            // is_member is filtered client-side; conversations.list has no
            // server-side flag for it.
            channels.extend(
                resp.channels
                    .into_iter()
                    .filter(|c| c.is_member)
                    .map(|c| ChannelOption {
                        name: c.name,
                        id: c.id,
                    }),
            );

            cursor = resp
                .response_metadata
                .and_then(|m| m.next_cursor)
                .filter(|c| !c.is_empty());
            if cursor.is_none() {
                return Ok(channels);
            }
        }
    }

    /// All member user ids of a channel, across all pages.
    pub async fn channel_members(&self, channel_id: &str) -> Result<Vec<String>, BotError> {
        let mut members = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let mut query = vec![
                ("channel", channel_id.to_string()),
                ("limit", PAGE_LIMIT.to_string()),
            ];
            if let Some(c) = &cursor {
                query.push(("cursor", c.clone()));
            }

            let resp: ConversationsMembersResponse =
                self.get_json("conversations.members", &query).await?;
            if !resp.ok {
                return Err(api_error("conversations.members", resp.error));
            }

            members.extend(resp.members);

            cursor = resp
                .response_metadata
                .and_then(|m| m.next_cursor)
                .filter(|c| !c.is_empty());
            if cursor.is_none() {
                return Ok(members);
            }
        }
    }

    /// Message history of a channel bounded by `oldest`, across all
    /// pages, in the order Slack returned them.
    pub async fn channel_history(
        &self,
        channel_id: &str,
        oldest: &str,
    ) -> Result<Vec<HistoryMessage>, BotError> {
        let mut messages = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let mut query = vec![
                ("channel", channel_id.to_string()),
                ("oldest", oldest.to_string()),
                ("limit", PAGE_LIMIT.to_string()),
            ];
            if let Some(c) = &cursor {
                query.push(("cursor", c.clone()));
            }

            let resp: ConversationsHistoryResponse =
                self.get_json("conversations.history", &query).await?;
            if !resp.ok {
                return Err(api_error("conversations.history", resp.error));
            }

            messages.extend(resp.messages);

            cursor = resp
                .response_metadata
                .and_then(|m| m.next_cursor)
                .filter(|c| !c.is_empty());
            if cursor.is_none() {
                return Ok(messages);
            }
        }
    }

    /// Fetch a user's profile record via `users.info`.
    pub async fn user_info(&self, user_id: &str) -> Result<UserRecord, BotError> {
        let query = [("user", user_id.to_string())];
        let resp: UsersInfoResponse = self.get_json("users.info", &query).await?;
        if !resp.ok {
            return Err(api_error("users.info", resp.error));
        }
        resp.user
            .ok_or_else(|| BotError::ApiError("users.info returned no user".to_string()))
    }

    /// Post a Block Kit message into a conversation.
    pub async fn post_blocks(
        &self,
        channel_id: &str,
        text_fallback: &str,
        blocks: &Value,
    ) -> Result<(), BotError> {
        let payload = json!({
            "channel": channel_id,
            "text": text_fallback,
            "blocks": blocks,
        });

        let resp = HTTP_CLIENT
            .post(format!("{SLACK_API_BASE}/chat.postMessage"))
            .bearer_auth(&self.token)
            .json(&payload)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(BotError::ApiError(format!(
                "chat.postMessage HTTP {}",
                resp.status()
            )));
        }

        let body = resp.text().await?;
        let body: PostMessageResponse = serde_json::from_str(&body)?;
        if !body.ok {
            return Err(api_error("chat.postMessage", body.error));
        }

        Ok(())
    }
}
