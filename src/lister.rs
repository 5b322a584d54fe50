//! Access-scoped channel listing.
//!
//! Given a requesting user, produces the subset of bot-joined channels
//! that the user is also a member of, in the order Slack returned them.

use std::future::Future;

use tracing::warn;

use crate::core::models::ChannelOption;
use crate::errors::BotError;
use crate::slack::client::SlackApiClient;

/// Channels the requesting user may pick: bot-joined channels whose
/// member list contains the user.
///
/// # Errors
///
/// Returns an error only when the bot's own channel list cannot be
/// fetched; per-channel membership failures exclude that channel
/// instead of failing the listing.
pub async fn accessible_channels(
    slack: &SlackApiClient,
    user_id: &str,
) -> Result<Vec<ChannelOption>, BotError> {
    let candidates = slack.list_member_channels().await?;

    Ok(approve_channels(candidates, user_id, |channel_id| async move {
        slack.channel_members(&channel_id).await
    })
    .await)
}

/// Keep the candidates whose member list contains `user_id`, preserving
/// order. `fetch_members` is injected so tests can substitute a fake
/// membership source.
pub async fn approve_channels<F, Fut>(
    candidates: Vec<ChannelOption>,
    user_id: &str,
    mut fetch_members: F,
) -> Vec<ChannelOption>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<Vec<String>, BotError>>,
{
    let mut approved = Vec::with_capacity(candidates.len());

    for channel in candidates {
        match fetch_members(channel.id.clone()).await {
            Ok(members) => {
                if members.iter().any(|m| m == user_id) {
                    approved.push(channel);
                }
            }
            Err(e) => {
                // A failed lookup means "not accessible", not a failed listing.
                warn!("Membership lookup failed for channel {}: {}", channel.id, e);
            }
        }
    }

    approved
}
