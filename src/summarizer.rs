//! Transcript assembly and summary orchestration.
//!
//! Fetches the selected channel's last 24 hours, filters it down to
//! human-authored messages, and either returns the configured "no
//! updates" sentinel or the text of a single chat completion.

use std::future::Future;

use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use tracing::{error, info};

use crate::ai::prompt_builder::build_summary_prompt;
use crate::core::models::{TranscriptEntry, TranscriptOutcome};
use crate::errors::BotError;
use crate::slack::bot::ChannelBot;
use crate::slack::client::{HistoryMessage, SlackApiClient, UserRecord};
use crate::utils::filters::filter_user_messages;

/// Lookback window of a summary request, in hours.
pub const WINDOW_HOURS: i64 = 24;

/// What to do with an assembled transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryPlan {
    /// Reply with the configured sentinel; the generation capability is
    /// not invoked.
    Sentinel,
    /// Issue one generation call with this system prompt.
    Generate(String),
}

/// Decide between the sentinel reply and a generation call.
#[must_use]
pub fn plan_summary(outcome: &TranscriptOutcome) -> SummaryPlan {
    match outcome {
        TranscriptOutcome::Messages(entries) => SummaryPlan::Generate(build_summary_prompt(entries)),
        TranscriptOutcome::Empty | TranscriptOutcome::FetchFailed => SummaryPlan::Sentinel,
    }
}

/// Slack timestamp of the window start: `now` minus the lookback.
#[must_use]
pub fn window_start_ts(now: DateTime<Utc>) -> String {
    (now - Duration::hours(WINDOW_HOURS)).timestamp().to_string()
}

/// Render a Slack message timestamp ("1690000000.123456") to local time
/// at second precision. Falls back to the raw value if it does not parse.
#[must_use]
pub fn format_message_ts(ts: &str) -> String {
    ts.split('.')
        .next()
        .and_then(|s| s.parse::<i64>().ok())
        .and_then(|secs| Local.timestamp_opt(secs, 0).single())
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| ts.to_string())
}

/// Resolve authors and build transcript entries in message order.
///
/// Messages whose author is deleted or a bot are dropped. `lookup_user`
/// is injected so tests can substitute a fake profile source.
///
/// # Errors
///
/// A failed profile lookup aborts the whole transcript; the caller's
/// top-level handler decides what that means for the user.
pub async fn build_transcript<F, Fut>(
    messages: Vec<HistoryMessage>,
    mut lookup_user: F,
) -> Result<Vec<TranscriptEntry>, BotError>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<UserRecord, BotError>>,
{
    let mut entries = Vec::new();

    for msg in filter_user_messages(messages) {
        let (Some(user_id), Some(text)) = (msg.user, msg.text) else {
            continue;
        };

        let record = lookup_user(user_id).await?;
        if record.deleted || record.is_bot {
            continue;
        }

        entries.push(TranscriptEntry {
            username: record.name,
            text,
            ts: format_message_ts(&msg.ts),
        });
    }

    Ok(entries)
}

/// Classify a channel window into a [`TranscriptOutcome`].
///
/// A history-fetch failure degrades to `FetchFailed` (rendered like an
/// empty window) instead of propagating. `fetch_history` and
/// `lookup_user` are injected so tests can substitute fake sources.
///
/// # Errors
///
/// Returns an error when an author profile cannot be resolved.
pub async fn assemble_transcript<H, HFut, F, Fut>(
    channel_id: &str,
    oldest: &str,
    mut fetch_history: H,
    lookup_user: F,
) -> Result<TranscriptOutcome, BotError>
where
    H: FnMut(String, String) -> HFut,
    HFut: Future<Output = Result<Vec<HistoryMessage>, BotError>>,
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<UserRecord, BotError>>,
{
    let messages = match fetch_history(channel_id.to_string(), oldest.to_string()).await {
        Ok(messages) => messages,
        Err(e) => {
            error!(
                "Error retrieving conversation history for channel {}: {}",
                channel_id, e
            );
            return Ok(TranscriptOutcome::FetchFailed);
        }
    };

    let entries = build_transcript(messages, lookup_user).await?;

    if entries.is_empty() {
        Ok(TranscriptOutcome::Empty)
    } else {
        Ok(TranscriptOutcome::Messages(entries))
    }
}

/// [`assemble_transcript`] wired to the live Web API client, with the
/// window starting [`WINDOW_HOURS`] before now.
///
/// # Errors
///
/// Returns an error when an author profile cannot be resolved.
pub async fn assemble_channel_transcript(
    slack: &SlackApiClient,
    channel_id: &str,
) -> Result<TranscriptOutcome, BotError> {
    let oldest = window_start_ts(Utc::now());

    assemble_transcript(
        channel_id,
        &oldest,
        |channel_id, oldest| async move { slack.channel_history(&channel_id, &oldest).await },
        |user_id| async move { slack.user_info(&user_id).await },
    )
    .await
}

/// Run the whole pipeline for one selection: assemble, plan, and either
/// return the sentinel or the first completion's text verbatim.
///
/// # Errors
///
/// Returns an error when a profile lookup or the generation call fails;
/// a history-fetch failure is not an error here and yields the sentinel.
pub async fn summarize_channel(
    bot: &ChannelBot,
    channel_id: &str,
    no_update_text: &str,
) -> Result<String, BotError> {
    let outcome = assemble_channel_transcript(bot.slack(), channel_id).await?;

    if let TranscriptOutcome::Messages(entries) = &outcome {
        info!(
            "Summarizing {} message(s) from channel {}",
            entries.len(),
            channel_id
        );
    }

    match plan_summary(&outcome) {
        SummaryPlan::Sentinel => Ok(no_update_text.to_string()),
        SummaryPlan::Generate(prompt) => bot.llm().generate_summary(prompt).await,
    }
}
