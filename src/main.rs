use std::sync::Arc;

use pocketbot::error::Result;
use pocketbot::handler::Handler;
use pocketbot::{BotConfig, BotState, logging};
use serenity::model::gateway::GatewayIntents;
use serenity::prelude::*;
use tracing::error;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; the variables may come from the real environment.
    dotenv::dotenv().ok();
    logging::init();

    let config = BotConfig::from_env().inspect_err(|e| error!(error = %e, "startup aborted"))?;
    let token = config.token.clone();
    let state = Arc::new(BotState::new(config));

    // Slash commands need no privileged intents; GUILDS keeps the guild cache warm for /serverinfo.
    let intents = GatewayIntents::non_privileged();

    let mut client = Client::builder(&token, intents)
        .event_handler(Handler::new(state))
        .await?;

    if let Err(why) = client.start().await {
        error!(error = ?why, "client error");
        return Err(why.into());
    }
    Ok(())
}
