//! Prompt construction for the summary completion call.
//!
//! The transcript is rendered one line per message and embedded into a
//! single system-role instruction that pins down the output language and
//! the two-section structure.

use crate::core::models::TranscriptEntry;

/// Literal header of the summary section the model must emit.
pub const SUMMARY_HEADER: &str = "【概要】";

/// Literal header of the action-items section the model must emit.
pub const ACTION_ITEMS_HEADER: &str = "【アクションアイテム】";

/// Render one transcript entry to its prompt line.
#[must_use]
pub fn format_transcript_line(entry: &TranscriptEntry) -> String {
    format!("'{}': {} said: '{}'", entry.ts, entry.username, entry.text)
}

/// Render the whole transcript, one line per entry, in the order given.
#[must_use]
pub fn format_transcript(entries: &[TranscriptEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&format_transcript_line(entry));
        out.push('\n');
    }
    out
}

/// Build the system-role prompt embedding the transcript.
#[must_use]
pub fn build_summary_prompt(entries: &[TranscriptEntry]) -> String {
    let transcript = format_transcript(entries);
    let structure_example = format!(
        "{SUMMARY_HEADER}\n- Summary 1\n- Summary 2\n- Summary 3\n\n{ACTION_ITEMS_HEADER}\n- Action item 1\n- Action item 2\n"
    );

    [
        "This chat log format is one line per message in the format \"'Time-stamp': Speaker name said: 'Message'\".",
        "The `\\n` within the message represents a line break.",
        "The user understands Japanese only.",
        "So, the assistant needs to speak in Japanese.",
        "Do not include greeting/salutation/polite expressions in the summary.",
        "Additionally, the output must follow a fixed format: it starts with the summary section, followed by the action items, like",
        structure_example.as_str(),
        "Please use the following text input as the input chat log:",
        transcript.as_str(),
        "Please make sure the output text is written in Japanese.",
    ]
    .join("\n")
}
