//! Shared, read-only state handed to the event handler when the client is built.

use crate::commands::CommandRegistry;
use crate::config::BotConfig;
use crate::constants::OWNER_ID;
use serenity::model::id::UserId;

pub struct BotState {
    pub config: BotConfig,
    /// Every command the bot answers to, keyed by name.
    pub registry: CommandRegistry,
    /// The only user allowed to run `/sync`.
    pub owner_id: UserId,
}

impl BotState {
    pub fn new(config: BotConfig) -> Self {
        Self {
            config,
            registry: CommandRegistry::standard(),
            owner_id: UserId::new(OWNER_ID),
        }
    }
}
