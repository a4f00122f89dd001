//! `/purge`: delete the last N messages in the current channel (moderators only).

use super::{CommandDescriptor, HandlerFuture, OptionKind, OptionSpec};
use crate::constants::{
    BULK_DELETE_MARGIN_SECS, BULK_DELETE_MAX_AGE_DAYS, MAX_PURGE_COUNT, MIN_PURGE_COUNT,
};
use crate::discord::{ChannelPurger, InteractionResponder};
use crate::error::{BotError, Result};
use crate::model::BotState;
use crate::ports::{ChannelMessages, MessagePurger, Responder};
use crate::reply::Reply;
use crate::util::integer_option;
use serenity::model::application::CommandInteraction;
use serenity::model::id::MessageId;
use serenity::model::permissions::Permissions;
use serenity::prelude::Context;
use tracing::{info, warn};

pub const MISSING_PERMISSION: &str = "You need **Manage Messages**.";
pub const OUT_OF_RANGE: &str = "Pick 1–100.";

const OPTIONS: &[OptionSpec] = &[OptionSpec {
    name: "count",
    description: "How many recent messages to delete (1–100)",
    kind: OptionKind::Integer,
    required: true,
}];

pub fn descriptor() -> CommandDescriptor {
    CommandDescriptor {
        name: "purge",
        description: "Delete recent messages (requires Manage Messages)",
        options: OPTIONS,
        handler: handle,
    }
}

/// `count` as a deletion limit, or `None` when it is outside 1..=100.
pub fn validate_count(count: i64) -> Option<u8> {
    if (MIN_PURGE_COUNT..=MAX_PURGE_COUNT).contains(&count) {
        u8::try_from(count).ok()
    } else {
        None
    }
}

/// Splits `(id, created_at)` pairs into bulk-deletable ids and ids that must go one by one.
pub fn split_by_age(messages: &[(MessageId, i64)], now: i64) -> (Vec<MessageId>, Vec<MessageId>) {
    let cutoff = now - BULK_DELETE_MAX_AGE_DAYS * 24 * 60 * 60 + BULK_DELETE_MARGIN_SECS;
    let mut bulk = Vec::with_capacity(messages.len());
    let mut single = Vec::new();
    for &(id, created_at) in messages {
        if created_at > cutoff {
            bulk.push(id);
        } else {
            single.push(id);
        }
    }
    (bulk, single)
}

/// Deletes up to `limit` recent messages and returns how many actually went away.
///
/// A rejected bulk request falls back to single deletes for the same ids, and
/// old messages are still attempted. Errors only surface when nothing was deleted.
pub async fn purge_channel(channel: &dyn ChannelMessages, limit: u8, now: i64) -> Result<usize> {
    let messages = channel.recent(limit).await?;
    let (bulk, stale) = split_by_age(&messages, now);

    let mut deleted = 0;
    let mut last_error = None;
    let mut one_by_one = Vec::with_capacity(messages.len());
    match bulk.as_slice() {
        [] => {}
        [only] => one_by_one.push(*only),
        ids => match channel.delete_bulk(ids).await {
            Ok(()) => deleted += ids.len(),
            Err(e) => {
                warn!(target: "purge", count = ids.len(), error = %e, "bulk delete rejected, retrying one by one");
                one_by_one.extend_from_slice(ids);
                last_error = Some(e);
            }
        },
    }
    one_by_one.extend(stale);

    for id in one_by_one {
        match channel.delete_one(id).await {
            Ok(()) => deleted += 1,
            Err(e) => {
                warn!(target: "purge", message_id = id.get(), error = %e, "single delete failed");
                last_error = Some(e);
            }
        }
    }

    match last_error {
        Some(e) if deleted == 0 => Err(e),
        _ => Ok(deleted),
    }
}

/// Interaction members carry permissions resolved for the invoking channel
/// (role grants plus channel overwrites), so a channel-level deny is honoured.
pub fn can_manage_messages(resolved: Option<Permissions>) -> bool {
    resolved.is_some_and(|perms| perms.manage_messages())
}

pub async fn execute(
    responder: &dyn Responder,
    purger: &dyn MessagePurger,
    allowed: bool,
    count: Option<i64>,
) -> Result<()> {
    if !allowed {
        return responder.reply(Reply::private(MISSING_PERMISSION)).await;
    }
    let count = count.ok_or(BotError::MissingOption("count"))?;
    let Some(limit) = validate_count(count) else {
        return responder.reply(Reply::private(OUT_OF_RANGE)).await;
    };

    // Fetching and deleting can exceed the 3s acknowledgment window.
    responder.defer(true).await?;
    let reply = match purger.purge(limit).await {
        Ok(deleted) => {
            info!(command = "purge", requested = limit, deleted, "purge_done");
            Reply::private(format!("🧹 Deleted {deleted} messages."))
        }
        Err(e) => {
            warn!(command = "purge", error = %e, "purge_failed");
            Reply::private(format!("❌ Purge failed: {e}"))
        }
    };
    responder.followup(reply).await
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) -> Result<()> {
    let can_manage =
        can_manage_messages(interaction.member.as_ref().and_then(|member| member.permissions));
    let responder = InteractionResponder::new(&ctx.http, interaction);
    let purger = ChannelPurger::new(&ctx.http, interaction.channel_id);
    execute(
        &responder,
        &purger,
        can_manage,
        integer_option(&interaction.data.options, "count"),
    )
    .await
}

fn handle<'a>(
    ctx: &'a Context,
    interaction: &'a CommandInteraction,
    _state: &'a BotState,
) -> HandlerFuture<'a> {
    Box::pin(run_slash(ctx, interaction))
}
