use std::sync::Arc;

use anyhow::{Context, Result};
use slack_morphism::hyper_tokio::SlackClientHyperConnector;
use slack_morphism::prelude::*;
use tracing::info;

use recap::core::config::AppConfig;
use recap::events::{BotState, actions, message};
use recap::slack::bot::ChannelBot;

#[tokio::main]
async fn main() -> Result<()> {
    recap::setup_logging();

    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {}", e))?;
    let bot = ChannelBot::new(&config);

    let bot_user_id = bot
        .slack()
        .bot_user_id()
        .await
        .context("failed to resolve bot user id via auth.test")?;
    info!("Slack bot user id resolved: {}", bot_user_id);

    let state = Arc::new(BotState {
        bot,
        config: config.clone(),
        bot_user_id,
    });

    // The listener owns its own client for the persistent WebSocket;
    // Web API calls go through the reqwest-based client in BotState.
    let listener_client = Arc::new(SlackClient::new(
        SlackClientHyperConnector::new().context("failed to create Slack socket mode connector")?,
    ));

    let callbacks = SlackSocketModeListenerCallbacks::new()
        .with_push_events(message::on_push_event)
        .with_interaction_events(actions::on_interaction_event);

    let listener_environment = Arc::new(
        SlackClientEventsListenerEnvironment::new(listener_client).with_user_state(state),
    );

    let listener = SlackClientSocketModeListener::new(
        &SlackClientSocketModeConfig::new(),
        listener_environment,
        callbacks,
    );

    let app_token = SlackApiToken::new(SlackApiTokenValue(config.slack_app_token.clone()));
    listener
        .listen_for(&app_token)
        .await
        .context("failed to start Slack socket mode listener")?;
    info!("Socket mode connected; waiting for events");

    listener.serve().await;

    Ok(())
}
