use crate::slack::client::HistoryMessage;

/// Filters a list of history records, retaining only those written by a
/// user account: no `bot_id` marker, and both an author id and text
/// present. Order is preserved.
#[must_use]
pub fn filter_user_messages(messages: Vec<HistoryMessage>) -> Vec<HistoryMessage> {
    messages
        .into_iter()
        .filter(|msg| msg.bot_id.is_none() && msg.user.is_some() && msg.text.is_some())
        .collect()
}
