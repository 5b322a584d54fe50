//! Block Kit payloads for the two replies the bot sends.

use serde_json::{Value, json};

use crate::core::models::ChannelOption;

/// Interactive identifier correlating a select-menu click back to the
/// channel picker message.
pub const CHANNEL_SELECT_ACTION_ID: &str = "channel_select";

/// Build the DM reply offering the accessible channels as a static
/// select. Zero options is a valid, not erroneous, payload.
#[must_use]
pub fn channel_select_blocks(prompt_text: &str, channels: &[ChannelOption]) -> Value {
    let options: Vec<Value> = channels
        .iter()
        .map(|c| {
            json!({
                "text": { "type": "plain_text", "text": c.name },
                "value": c.id,
            })
        })
        .collect();

    json!([
        {
            "type": "section",
            "text": { "type": "mrkdwn", "text": prompt_text },
            "accessory": {
                "type": "static_select",
                "placeholder": {
                    "type": "plain_text",
                    "text": "Select a channel",
                    "emoji": true
                },
                "options": options,
                "action_id": CHANNEL_SELECT_ACTION_ID
            }
        }
    ])
}

/// Build the summary reply: the result text in a single code block.
#[must_use]
pub fn summary_blocks(summary: &str) -> Value {
    json!([
        {
            "type": "section",
            "text": { "type": "mrkdwn", "text": format!("```{summary}```") }
        }
    ])
}
