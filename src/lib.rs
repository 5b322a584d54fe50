/// recap - a Slack chatbot that summarizes the last 24 hours of a channel on request.
///
/// A user sends the bot a direct message and receives a select menu listing
/// the channels both the bot and that user belong to. Picking a channel
/// fetches its message history for the preceding 24 hours, filters out bot
/// and deleted authors, and asks ChatGPT for a summary with action items.
///
/// # Architecture
///
/// The system uses:
/// - slack-morphism for the Socket Mode event transport
/// - reqwest against the Slack Web API for channel/member/history lookups
/// - openai-api-rs for ChatGPT integration
/// - Tokio for the async runtime
///
/// # Example
///
/// ```no_run
/// use recap::core::config::AppConfig;
/// use recap::slack::bot::ChannelBot;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Set up structured logging
///     recap::setup_logging();
///
///     // Create a dummy AppConfig for the example
///     let config = AppConfig {
///         slack_bot_token: "xoxb-dummy".to_string(),
///         slack_app_token: "xapp-dummy".to_string(),
///         openai_api_key: "dummy_openai_key".to_string(),
///         openai_model: "gpt-3.5-turbo".to_string(),
///         select_prompt_text: "Pick a channel to summarize:".to_string(),
///         no_update_text: "No updates in the last 24 hours.".to_string(),
///     };
///
///     let bot = ChannelBot::new(&config);
///
///     // Channels the user U123 may pick from
///     let channels = recap::lister::accessible_channels(bot.slack(), "U123").await?;
///     println!("{} channel(s) available", channels.len());
///
///     // Summarize one of them
///     if let Some(channel) = channels.first() {
///         let summary =
///             recap::summarizer::summarize_channel(&bot, &channel.id, &config.no_update_text)
///                 .await?;
///         println!("{summary}");
///     }
///
///     Ok(())
/// }
/// ```
// Module declarations
pub mod ai;
pub mod core;
pub mod errors;
pub mod events;
pub mod lister;
pub mod slack;
pub mod summarizer;
pub mod utils;

/// Configure structured logging for the bot process.
///
/// Sets up tracing-subscriber with a fmt layer writing to stderr. Call once
/// at process start, before any handler runs.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry().with(fmt_layer).init();
}
