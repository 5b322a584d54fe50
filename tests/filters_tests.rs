use recap::slack::client::HistoryMessage;
use recap::utils::filters::filter_user_messages;

fn msg(ts: &str, user: Option<&str>, text: Option<&str>, bot_id: Option<&str>) -> HistoryMessage {
    serde_json::from_value(serde_json::json!({
        "ts": ts,
        "user": user,
        "text": text,
        "bot_id": bot_id,
    }))
    .expect("history message should deserialize")
}

#[test]
fn drops_bot_marked_messages() {
    let messages = vec![
        msg("1.0", Some("U1"), Some("human"), None),
        msg("2.0", Some("U2"), Some("app post"), Some("B1")),
    ];

    let kept = filter_user_messages(messages);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].text.as_deref(), Some("human"));
}

#[test]
fn requires_author_and_text() {
    let messages = vec![
        msg("1.0", None, Some("no author"), None),
        msg("2.0", Some("U1"), None, None),
        msg("3.0", Some("U1"), Some("complete"), None),
    ];

    let kept = filter_user_messages(messages);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].ts, "3.0");
}

#[test]
fn preserves_order() {
    let messages = vec![
        msg("3.0", Some("U1"), Some("c"), None),
        msg("1.0", Some("U1"), Some("a"), None),
        msg("2.0", Some("U1"), Some("b"), None),
    ];

    let kept = filter_user_messages(messages);
    let order: Vec<&str> = kept.iter().map(|m| m.ts.as_str()).collect();
    assert_eq!(order, vec!["3.0", "1.0", "2.0"]);
}

#[test]
fn history_record_parses_from_wire_shape() {
    // Fields the bot does not use are ignored rather than rejected.
    let message: HistoryMessage = serde_json::from_value(serde_json::json!({
        "type": "message",
        "ts": "1700000000.000100",
        "user": "U1",
        "text": "hello",
        "team": "T1",
        "reactions": [{ "name": "thumbsup", "count": 2 }],
    }))
    .expect("wire record should deserialize");

    assert_eq!(message.ts, "1700000000.000100");
    assert_eq!(message.user.as_deref(), Some("U1"));
    assert!(message.bot_id.is_none());
}
