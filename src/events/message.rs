//! Direct-message handler: replies with the channel select menu.

use std::sync::Arc;

use slack_morphism::hyper_tokio::SlackHyperClient;
use slack_morphism::prelude::*;
use tracing::{error, info};

use super::BotState;
use crate::lister::accessible_channels;
use crate::slack::response_builder::channel_select_blocks;

/// Push-event callback registered with the Socket Mode listener.
pub async fn on_push_event(
    event: SlackPushEventCallback,
    _client: Arc<SlackHyperClient>,
    states: SlackClientEventsUserState,
) -> UserCallbackResult<()> {
    if let SlackEventCallbackBody::Message(message) = event.event {
        handle_direct_message(message, states).await;
    }

    // Returning acknowledges the envelope regardless of outcome.
    Ok(())
}

async fn handle_direct_message(message: SlackMessageEvent, states: SlackClientEventsUserState) {
    // Edits, deletes, joins and other subtyped records are not DM triggers.
    if message.subtype.is_some() {
        return;
    }

    let state = {
        let state_guard = states.read().await;
        match state_guard.get_user_state::<Arc<BotState>>() {
            Some(state) => state.clone(),
            None => {
                error!("Bot state missing from the listener environment");
                return;
            }
        }
    };

    let Some(user_id) = message.sender.user.as_ref().map(|u| u.0.clone()) else {
        return;
    };
    if user_id == state.bot_user_id {
        return;
    }

    let Some(channel_id) = message.origin.channel.as_ref().map(|c| c.0.clone()) else {
        return;
    };
    // Conversation scope is DMs only.
    if !channel_id.starts_with('D') {
        return;
    }

    match accessible_channels(state.bot.slack(), &user_id).await {
        Ok(channels) => {
            info!(
                "Offering {} channel(s) to user {}",
                channels.len(),
                user_id
            );

            let blocks = channel_select_blocks(&state.config.select_prompt_text, &channels);
            if let Err(e) = state
                .bot
                .slack()
                .post_blocks(&channel_id, &state.config.select_prompt_text, &blocks)
                .await
            {
                error!("Failed to post channel selection to {}: {}", channel_id, e);
            }
        }
        Err(e) => {
            error!("Failed to list channels for user {}: {}", user_id, e);
        }
    }
}
