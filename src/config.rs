//! Process configuration read from the environment (optionally seeded from `.env`).

use crate::error::{BotError, Result};
use serenity::model::id::GuildId;

/// Where slash commands get registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncScope {
    /// A single guild; updates show up almost immediately.
    Guild(GuildId),
    /// Every guild the bot is in; propagation can take a while.
    Global,
}

#[derive(Debug, Clone)]
pub struct BotConfig {
    pub token: String,
    /// Raw `GUILD_ID` value. Parsed when a sync happens so that a typo shows up
    /// as a sync failure instead of keeping the bot offline.
    pub guild_id: Option<String>,
}

impl BotConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; `from_env` passes `std::env::var`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup("DISCORD_TOKEN")
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(BotError::MissingToken)?;
        let guild_id = lookup("GUILD_ID")
            .map(|g| g.trim().to_string())
            .filter(|g| !g.is_empty());
        Ok(Self { token, guild_id })
    }

    pub fn sync_scope(&self) -> Result<SyncScope> {
        let Some(raw) = self.guild_id.as_deref() else {
            return Ok(SyncScope::Global);
        };
        match raw.parse::<u64>() {
            Ok(id) if id != 0 => Ok(SyncScope::Guild(GuildId::new(id))),
            _ => Err(BotError::InvalidGuildId(raw.to_string())),
        }
    }
}
