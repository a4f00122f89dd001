//! serenity-backed implementations of the handler ports.

use crate::commands::CommandRegistry;
use crate::commands::purge::purge_channel;
use crate::config::SyncScope;
use crate::error::Result;
use crate::ports::{
    ChannelMessages, CommandRegistrar, GuildDirectory, GuildSummary, MessagePurger, Responder,
};
use crate::reply::Reply;
use crate::util::snowflake_created_at;
use async_trait::async_trait;
use chrono::Utc;
use serenity::builder::{CreateInteractionResponse, CreateInteractionResponseMessage, GetMessages};
use serenity::http::Http;
use serenity::model::application::{Command, CommandInteraction};
use serenity::model::id::{ChannelId, GuildId, MessageId};
use serenity::prelude::Context;
use std::sync::Arc;
use tracing::debug;

/// Responds to one slash command interaction.
pub struct InteractionResponder<'a> {
    http: &'a Arc<Http>,
    interaction: &'a CommandInteraction,
}

impl<'a> InteractionResponder<'a> {
    pub fn new(http: &'a Arc<Http>, interaction: &'a CommandInteraction) -> Self {
        Self { http, interaction }
    }
}

#[async_trait]
impl Responder for InteractionResponder<'_> {
    async fn reply(&self, reply: Reply) -> Result<()> {
        self.interaction
            .create_response(self.http, CreateInteractionResponse::Message(reply.to_message()))
            .await?;
        Ok(())
    }

    async fn defer(&self, ephemeral: bool) -> Result<()> {
        self.interaction
            .create_response(
                self.http,
                CreateInteractionResponse::Defer(
                    CreateInteractionResponseMessage::new().ephemeral(ephemeral),
                ),
            )
            .await?;
        Ok(())
    }

    async fn followup(&self, reply: Reply) -> Result<()> {
        // The first follow-up after a defer replaces the "thinking..." placeholder.
        self.interaction
            .create_followup(self.http, reply.to_followup())
            .await?;
        Ok(())
    }
}

/// Overwrites the guild or global command list with the registry's commands.
pub struct HttpRegistrar<'a> {
    http: &'a Arc<Http>,
    registry: &'a CommandRegistry,
}

impl<'a> HttpRegistrar<'a> {
    pub fn new(http: &'a Arc<Http>, registry: &'a CommandRegistry) -> Self {
        Self { http, registry }
    }
}

#[async_trait]
impl CommandRegistrar for HttpRegistrar<'_> {
    async fn sync(&self, scope: SyncScope) -> Result<Vec<String>> {
        let commands = self.registry.create_commands();
        let registered = match scope {
            SyncScope::Guild(guild_id) => guild_id.set_commands(self.http, commands).await?,
            SyncScope::Global => Command::set_global_commands(self.http, commands).await?,
        };
        Ok(registered.into_iter().map(|c| c.name).collect())
    }
}

pub struct ChannelPurger<'a> {
    http: &'a Arc<Http>,
    channel_id: ChannelId,
}

impl<'a> ChannelPurger<'a> {
    pub fn new(http: &'a Arc<Http>, channel_id: ChannelId) -> Self {
        Self { http, channel_id }
    }
}

#[async_trait]
impl ChannelMessages for ChannelPurger<'_> {
    async fn recent(&self, limit: u8) -> Result<Vec<(MessageId, i64)>> {
        let messages = self
            .channel_id
            .messages(self.http, GetMessages::new().limit(limit))
            .await?;
        Ok(messages
            .iter()
            .map(|m| (m.id, m.timestamp.unix_timestamp()))
            .collect())
    }

    async fn delete_bulk(&self, ids: &[MessageId]) -> Result<()> {
        self.channel_id.delete_messages(self.http, ids).await?;
        Ok(())
    }

    async fn delete_one(&self, id: MessageId) -> Result<()> {
        self.channel_id.delete_message(self.http, id).await?;
        Ok(())
    }
}

#[async_trait]
impl MessagePurger for ChannelPurger<'_> {
    async fn purge(&self, limit: u8) -> Result<usize> {
        let deleted = purge_channel(self, limit, Utc::now().timestamp()).await?;
        debug!(target: "purge", channel_id = self.channel_id.get(), limit, deleted);
        Ok(deleted)
    }
}

/// Reads guild details from the gateway cache, falling back to the REST API.
pub struct CacheGuildDirectory<'a> {
    ctx: &'a Context,
}

impl<'a> CacheGuildDirectory<'a> {
    pub fn new(ctx: &'a Context) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl GuildDirectory for CacheGuildDirectory<'_> {
    async fn summary(&self, guild_id: GuildId) -> Result<GuildSummary> {
        let cached = self.ctx.cache.guild(guild_id).map(|guild| GuildSummary {
            name: guild.name.clone(),
            id: guild.id,
            member_count: guild.member_count,
            created_at: snowflake_created_at(guild.id.get()),
        });
        if let Some(summary) = cached {
            return Ok(summary);
        }

        let partial = guild_id.to_partial_guild_with_counts(&self.ctx.http).await?;
        Ok(GuildSummary {
            name: partial.name,
            id: partial.id,
            member_count: partial.approximate_member_count.unwrap_or_default(),
            created_at: snowflake_created_at(partial.id.get()),
        })
    }
}
