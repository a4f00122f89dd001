//! `/serverinfo`: basic guild stats, no privileged intents needed.

use super::{CommandDescriptor, HandlerFuture};
use crate::discord::{CacheGuildDirectory, InteractionResponder};
use crate::error::Result;
use crate::model::BotState;
use crate::ports::{GuildDirectory, GuildSummary, Responder};
use crate::reply::Reply;
use serenity::model::application::CommandInteraction;
use serenity::model::id::GuildId;
use serenity::prelude::Context;
use tracing::warn;

pub const NOT_IN_GUILD: &str = "This only works in servers.";

pub fn descriptor() -> CommandDescriptor {
    CommandDescriptor {
        name: "serverinfo",
        description: "Show basic info about this server",
        options: &[],
        handler: handle,
    }
}

pub fn format_summary(summary: &GuildSummary) -> String {
    format!(
        "**Server:** {}\n**ID:** {}\n**Members:** {}\n**Created:** {}",
        summary.name,
        summary.id,
        summary.member_count,
        summary.created_at.format("%Y-%m-%d"),
    )
}

pub async fn execute(
    responder: &dyn Responder,
    directory: &dyn GuildDirectory,
    guild_id: Option<GuildId>,
) -> Result<()> {
    let Some(guild_id) = guild_id else {
        return responder.reply(Reply::public(NOT_IN_GUILD)).await;
    };
    let reply = match directory.summary(guild_id).await {
        Ok(summary) => Reply::private(format_summary(&summary)),
        Err(e) => {
            warn!(command = "serverinfo", guild_id = guild_id.get(), error = %e, "guild_lookup_failed");
            Reply::private(format!("❌ Could not load server info: {e}"))
        }
    };
    responder.reply(reply).await
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) -> Result<()> {
    let responder = InteractionResponder::new(&ctx.http, interaction);
    let directory = CacheGuildDirectory::new(ctx);
    execute(&responder, &directory, interaction.guild_id).await
}

fn handle<'a>(
    ctx: &'a Context,
    interaction: &'a CommandInteraction,
    _state: &'a BotState,
) -> HandlerFuture<'a> {
    Box::pin(run_slash(ctx, interaction))
}
