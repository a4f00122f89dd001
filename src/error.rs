//! Crate-wide error type.
//!
//! Command handlers turn expected failures (bad input, missing permission,
//! failed platform call) into replies themselves; whatever still escapes as a
//! `BotError` is logged by the dispatcher and answered with a generic message.

#[derive(Debug, thiserror::Error)]
pub enum BotError {
    #[error("missing DISCORD_TOKEN (set it in the environment or in .env)")]
    MissingToken,

    #[error("GUILD_ID `{0}` is not a valid guild id")]
    InvalidGuildId(String),

    #[error("missing required option `{0}`")]
    MissingOption(&'static str),

    #[error("discord error: {0}")]
    Discord(#[from] serenity::Error),
}

pub type Result<T> = std::result::Result<T, BotError>;
