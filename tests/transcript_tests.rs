use std::collections::HashMap;

use chrono::{DateTime, Local, TimeZone, Utc};
use recap::core::models::TranscriptOutcome;
use recap::errors::BotError;
use recap::slack::client::{HistoryMessage, UserRecord};
use recap::summarizer::{
    SummaryPlan, assemble_transcript, build_transcript, format_message_ts, plan_summary,
    window_start_ts,
};

fn msg(ts: &str, user: Option<&str>, text: Option<&str>, bot_id: Option<&str>) -> HistoryMessage {
    serde_json::from_value(serde_json::json!({
        "ts": ts,
        "user": user,
        "text": text,
        "bot_id": bot_id,
    }))
    .expect("history message should deserialize")
}

fn user(name: &str, deleted: bool, is_bot: bool) -> UserRecord {
    serde_json::from_value(serde_json::json!({
        "name": name,
        "deleted": deleted,
        "is_bot": is_bot,
    }))
    .expect("user record should deserialize")
}

fn profiles(entries: &[(&str, UserRecord)]) -> HashMap<String, UserRecord> {
    entries
        .iter()
        .map(|(id, record)| ((*id).to_string(), record.clone()))
        .collect()
}

fn local_ts(secs: i64) -> String {
    Local
        .timestamp_opt(secs, 0)
        .single()
        .expect("timestamp should map to local time")
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

#[tokio::test]
async fn excludes_bot_marked_and_incomplete_messages() {
    let messages = vec![
        msg("1700000000.000100", Some("U1"), Some("hello"), None),
        msg("1700000060.000200", None, Some("integration ping"), Some("B42")),
        msg("1700000120.000300", Some("U2"), None, None),
        msg("1700000180.000400", None, Some("orphan text"), None),
        msg("1700000240.000500", Some("U2"), Some("shipping today"), None),
    ];
    let known = profiles(&[
        ("U1", user("alice", false, false)),
        ("U2", user("bob", false, false)),
    ]);

    let entries = build_transcript(messages, |id| {
        let record = known.get(&id).cloned();
        async move { record.ok_or_else(|| BotError::ApiError("users.info error: user_not_found".to_string())) }
    })
    .await
    .expect("transcript should build");

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].username, "alice");
    assert_eq!(entries[0].text, "hello");
    assert_eq!(entries[1].username, "bob");
    assert_eq!(entries[1].text, "shipping today");
}

#[tokio::test]
async fn excludes_deleted_and_bot_authors() {
    let messages = vec![
        msg("1700000000.000100", Some("U1"), Some("still here"), None),
        msg("1700000060.000200", Some("U2"), Some("I left last year"), None),
        msg("1700000120.000300", Some("U3"), Some("beep boop"), None),
    ];
    let known = profiles(&[
        ("U1", user("alice", false, false)),
        ("U2", user("ghost", true, false)),
        ("U3", user("reminder-bot", false, true)),
    ]);

    let entries = build_transcript(messages, |id| {
        let record = known.get(&id).cloned();
        async move { record.ok_or_else(|| BotError::ApiError("users.info error: user_not_found".to_string())) }
    })
    .await
    .expect("transcript should build");

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].username, "alice");
}

#[tokio::test]
async fn preserves_message_order_and_formats_timestamps() {
    let messages = vec![
        msg("1700000300.000100", Some("U1"), Some("later message"), None),
        msg("1700000000.000200", Some("U1"), Some("earlier message"), None),
    ];
    let known = profiles(&[("U1", user("alice", false, false))]);

    let entries = build_transcript(messages, |id| {
        let record = known.get(&id).cloned();
        async move { record.ok_or_else(|| BotError::ApiError("users.info error: user_not_found".to_string())) }
    })
    .await
    .expect("transcript should build");

    // API return order, not re-sorted.
    assert_eq!(entries[0].text, "later message");
    assert_eq!(entries[1].text, "earlier message");
    assert_eq!(entries[0].ts, local_ts(1_700_000_300));
    assert_eq!(entries[1].ts, local_ts(1_700_000_000));
}

#[tokio::test]
async fn profile_lookup_failure_aborts_the_transcript() {
    let messages = vec![msg("1700000000.000100", Some("U404"), Some("hello"), None)];

    let result = build_transcript(messages, |_id| async move {
        Err::<UserRecord, _>(BotError::ApiError("users.info error: user_not_found".to_string()))
    })
    .await;

    assert!(result.is_err());
}

#[test]
fn format_message_ts_is_second_precision_local_time() {
    assert_eq!(format_message_ts("1700000000.123456"), local_ts(1_700_000_000));
    // Unparseable input falls back to the raw value.
    assert_eq!(format_message_ts("not-a-ts"), "not-a-ts");
}

#[test]
fn window_start_is_24_hours_before_now() {
    let now: DateTime<Utc> = Utc.timestamp_opt(1_700_086_400, 0).single().unwrap();
    assert_eq!(window_start_ts(now), "1700000000");
}

#[tokio::test]
async fn failed_history_fetch_degrades_to_fetch_failed() {
    let outcome = assemble_transcript(
        "C1",
        "1700000000",
        |_channel, _oldest| async move {
            Err::<Vec<HistoryMessage>, _>(BotError::ApiError(
                "conversations.history error: channel_not_found".to_string(),
            ))
        },
        |_id| async move {
            Err::<UserRecord, _>(BotError::ApiError(
                "users.info error: user_not_found".to_string(),
            ))
        },
    )
    .await
    .expect("a failed fetch classifies the window instead of erroring");

    // The degraded window takes the sentinel path, not the generation path.
    assert_eq!(outcome, TranscriptOutcome::FetchFailed);
    assert_eq!(plan_summary(&outcome), SummaryPlan::Sentinel);
}

#[tokio::test]
async fn window_without_qualifying_messages_classifies_as_empty() {
    let messages = vec![msg("1700000000.000100", None, Some("app post"), Some("B1"))];

    let outcome = assemble_transcript(
        "C1",
        "1700000000",
        |_channel, _oldest| {
            let messages = messages.clone();
            async move { Ok(messages) }
        },
        |_id| async move {
            Err::<UserRecord, _>(BotError::ApiError(
                "users.info error: user_not_found".to_string(),
            ))
        },
    )
    .await
    .expect("transcript should classify");

    assert_eq!(outcome, TranscriptOutcome::Empty);
}

#[test]
fn empty_and_failed_windows_plan_the_sentinel() {
    assert_eq!(plan_summary(&TranscriptOutcome::Empty), SummaryPlan::Sentinel);
    assert_eq!(plan_summary(&TranscriptOutcome::FetchFailed), SummaryPlan::Sentinel);
}

#[test]
fn nonempty_window_plans_exactly_one_generation() {
    let entries = vec![recap::core::models::TranscriptEntry {
        username: "alice".to_string(),
        text: "shipping today".to_string(),
        ts: "2023-11-14 22:13:20".to_string(),
    }];

    match plan_summary(&TranscriptOutcome::Messages(entries)) {
        SummaryPlan::Generate(prompt) => {
            assert!(prompt.contains("'2023-11-14 22:13:20': alice said: 'shipping today'"));
        }
        SummaryPlan::Sentinel => panic!("non-empty transcript must plan a generation call"),
    }
}
