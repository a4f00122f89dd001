//! `/sync`: owner-only manual re-registration of the slash commands.
//!
//! The same registration path runs once at startup from the ready handler.

use super::{CommandDescriptor, HandlerFuture};
use crate::config::{BotConfig, SyncScope};
use crate::discord::{HttpRegistrar, InteractionResponder};
use crate::error::Result;
use crate::model::BotState;
use crate::ports::{CommandRegistrar, Responder};
use crate::reply::Reply;
use serenity::model::application::CommandInteraction;
use serenity::model::id::UserId;
use serenity::prelude::Context;
use tracing::{error, info};

pub const DENIED: &str = "❌ You are not allowed to use this.";

pub fn descriptor() -> CommandDescriptor {
    CommandDescriptor {
        name: "sync",
        description: "Force sync commands (owner only)",
        options: &[],
        handler: handle,
    }
}

/// Registers every command for the configured scope.
pub async fn sync_all(
    registrar: &dyn CommandRegistrar,
    config: &BotConfig,
) -> Result<(SyncScope, Vec<String>)> {
    let scope = config.sync_scope()?;
    let names = registrar.sync(scope).await?;
    Ok((scope, names))
}

pub fn synced_message(scope: SyncScope, count: usize) -> String {
    match scope {
        SyncScope::Guild(guild_id) => format!("✅ Synced {count} commands to guild {guild_id}"),
        SyncScope::Global => format!("✅ Synced {count} global commands"),
    }
}

pub async fn execute(
    responder: &dyn Responder,
    registrar: &dyn CommandRegistrar,
    caller: UserId,
    owner: UserId,
    config: &BotConfig,
) -> Result<()> {
    if caller != owner {
        return responder.reply(Reply::private(DENIED)).await;
    }

    responder.defer(true).await?;
    let reply = match sync_all(registrar, config).await {
        Ok((scope, names)) => {
            info!(command = "sync", ?scope, registered = ?names, "commands_synced");
            Reply::private(synced_message(scope, names.len()))
        }
        Err(e) => {
            error!(command = "sync", error = %e, "sync_failed");
            Reply::private(format!("❌ Sync failed: `{e}`"))
        }
    };
    responder.followup(reply).await
}

pub async fn run_slash(
    ctx: &Context,
    interaction: &CommandInteraction,
    state: &BotState,
) -> Result<()> {
    let responder = InteractionResponder::new(&ctx.http, interaction);
    let registrar = HttpRegistrar::new(&ctx.http, &state.registry);
    execute(
        &responder,
        &registrar,
        interaction.user.id,
        state.owner_id,
        &state.config,
    )
    .await
}

fn handle<'a>(
    ctx: &'a Context,
    interaction: &'a CommandInteraction,
    state: &'a BotState,
) -> HandlerFuture<'a> {
    Box::pin(run_slash(ctx, interaction, state))
}
