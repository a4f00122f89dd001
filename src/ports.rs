//! Narrow async interfaces the command handlers talk to.
//!
//! The serenity-backed implementations live in [`crate::discord`]; tests swap in
//! recording fakes so handler behaviour can be checked without a gateway.

use crate::config::SyncScope;
use crate::error::Result;
use crate::reply::Reply;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serenity::model::id::{GuildId, MessageId};

/// Answers the interaction currently being handled.
#[async_trait]
pub trait Responder: Send + Sync {
    /// Send the initial response.
    async fn reply(&self, reply: Reply) -> Result<()>;
    /// Acknowledge now and answer later through [`Responder::followup`].
    async fn defer(&self, ephemeral: bool) -> Result<()>;
    /// Send a message after the interaction has been acknowledged.
    async fn followup(&self, reply: Reply) -> Result<()>;
}

/// Pushes the bot's command set to Discord.
#[async_trait]
pub trait CommandRegistrar: Send + Sync {
    /// Returns the names of the commands Discord now has registered for `scope`.
    async fn sync(&self, scope: SyncScope) -> Result<Vec<String>>;
}

/// Deletes recent messages in the invocation's channel.
#[async_trait]
pub trait MessagePurger: Send + Sync {
    /// Returns how many messages were actually removed, which may be fewer than `limit`.
    async fn purge(&self, limit: u8) -> Result<usize>;
}

/// Raw message operations on one channel, used by [`crate::commands::purge::purge_channel`].
#[async_trait]
pub trait ChannelMessages: Send + Sync {
    /// Newest first: `(id, created_at unix seconds)`.
    async fn recent(&self, limit: u8) -> Result<Vec<(MessageId, i64)>>;
    /// Bulk delete; Discord wants 2..=100 ids, all younger than two weeks.
    async fn delete_bulk(&self, ids: &[MessageId]) -> Result<()>;
    async fn delete_one(&self, id: MessageId) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildSummary {
    pub name: String,
    pub id: GuildId,
    pub member_count: u64,
    pub created_at: DateTime<Utc>,
}

#[async_trait]
pub trait GuildDirectory: Send + Sync {
    async fn summary(&self, guild_id: GuildId) -> Result<GuildSummary>;
}
