//! Interaction handler: a `channel_select` pick triggers summarization.

use std::sync::Arc;

use slack_morphism::hyper_tokio::SlackHyperClient;
use slack_morphism::prelude::*;
use tracing::error;

use super::BotState;
use crate::slack::response_builder::{CHANNEL_SELECT_ACTION_ID, summary_blocks};
use crate::summarizer::summarize_channel;

/// Interaction callback registered with the Socket Mode listener.
pub async fn on_interaction_event(
    event: SlackInteractionEvent,
    _client: Arc<SlackHyperClient>,
    states: SlackClientEventsUserState,
) -> UserCallbackResult<()> {
    let SlackInteractionEvent::BlockActions(block_actions) = event else {
        // Other interaction kinds are acknowledged without processing.
        return Ok(());
    };

    let state = {
        let state_guard = states.read().await;
        match state_guard.get_user_state::<Arc<BotState>>() {
            Some(state) => state.clone(),
            None => {
                error!("Bot state missing from the listener environment");
                return Ok(());
            }
        }
    };

    // The DM conversation the picker message lives in.
    let Some(channel_id) = block_actions.channel.as_ref().map(|c| c.id.0.clone()) else {
        return Ok(());
    };

    let selected_channel = block_actions
        .actions
        .as_deref()
        .unwrap_or_default()
        .iter()
        .find_map(|action| {
            if action.action_id.0 == CHANNEL_SELECT_ACTION_ID {
                action.selected_option.as_ref().map(|o| o.value.clone())
            } else {
                None
            }
        });
    let Some(selected_channel) = selected_channel else {
        return Ok(());
    };

    match summarize_channel(&state.bot, &selected_channel, &state.config.no_update_text).await {
        Ok(summary) => {
            let blocks = summary_blocks(&summary);
            if let Err(e) = state
                .bot
                .slack()
                .post_blocks(&channel_id, &summary, &blocks)
                .await
            {
                error!("Failed to post summary to {}: {}", channel_id, e);
            }
        }
        Err(e) => {
            // Logged and swallowed; the user gets no reply beyond the
            // envelope acknowledgment.
            error!("Error: {}", e);
        }
    }

    Ok(())
}
