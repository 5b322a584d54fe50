/// A channel offered in the select menu: bot-joined and containing the
/// requesting user. Lives for a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelOption {
    pub name: String,
    pub id: String,
}

/// One message of the window, ready to be formatted into the prompt.
/// `ts` is already rendered to second precision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub username: String,
    pub text: String,
    pub ts: String,
}

/// Result of assembling a channel transcript.
///
/// `Empty` and `FetchFailed` render identically to the user (the "no
/// updates" sentinel) but stay distinguishable for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptOutcome {
    Messages(Vec<TranscriptEntry>),
    Empty,
    FetchFailed,
}
