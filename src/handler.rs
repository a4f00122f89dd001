use crate::commands::{CommandRegistry, HandlerFn, sync};
use crate::config::SyncScope;
use crate::constants::GENERIC_FAILURE;
use crate::discord::{HttpRegistrar, InteractionResponder};
use crate::error::Result;
use crate::model::BotState;
use crate::ports::Responder;
use crate::reply::Reply;
use serenity::async_trait;
use serenity::client::Context;
use serenity::model::application::{CommandInteraction, Interaction};
use serenity::model::gateway::Ready;
use serenity::prelude::EventHandler;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, error, info, warn};

pub struct Handler {
    state: Arc<BotState>,
    /// `ready` fires again after a gateway reconnect; only register once per process.
    registered: AtomicBool,
}

impl Handler {
    pub fn new(state: Arc<BotState>) -> Self {
        Self {
            state,
            registered: AtomicBool::new(false),
        }
    }

    async fn register_commands(&self, ctx: &Context) {
        let registrar = HttpRegistrar::new(&ctx.http, &self.state.registry);
        match sync::sync_all(&registrar, &self.state.config).await {
            Ok((scope, names)) => {
                match scope {
                    SyncScope::Guild(guild_id) => {
                        info!("{} commands synced to guild {}", names.len(), guild_id)
                    }
                    // Global commands can take a while to show up in clients.
                    SyncScope::Global => {
                        info!("{} global commands synced", names.len())
                    }
                }
                for name in &names {
                    info!("  - {}", name);
                }
            }
            Err(e) => error!(error = %e, "startup command registration failed"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// No command with that name is registered; nothing was sent.
    Unknown,
    Completed,
    /// The handler returned an error and the user got the generic failure reply.
    Failed,
}

/// Look `name` up in the registry and run its handler through `run`.
///
/// Handler errors are logged and answered once, privately, via `responder`.
pub async fn run_registered<F, Fut>(
    registry: &CommandRegistry,
    name: &str,
    responder: &dyn Responder,
    run: F,
) -> DispatchOutcome
where
    F: FnOnce(HandlerFn) -> Fut,
    Fut: Future<Output = Result<()>>,
{
    let Some(descriptor) = registry.get(name) else {
        warn!(command = name, "unknown_command");
        return DispatchOutcome::Unknown;
    };
    match run(descriptor.handler).await {
        Ok(()) => DispatchOutcome::Completed,
        Err(e) => {
            error!(command = name, error = %e, "command_failed");
            respond_failure(responder, name).await;
            DispatchOutcome::Failed
        }
    }
}

/// Send the generic failure message. The interaction may already be
/// acknowledged, so a rejected response is retried as a follow-up.
pub async fn respond_failure(responder: &dyn Responder, command: &str) {
    if responder.reply(Reply::private(GENERIC_FAILURE)).await.is_err()
        && let Err(e) = responder.followup(Reply::private(GENERIC_FAILURE)).await
    {
        warn!(command, error = %e, "error_reply_failed");
    }
}

/// Route one slash command to its registered handler.
pub async fn dispatch(ctx: &Context, command: &CommandInteraction, state: &BotState) {
    let responder = InteractionResponder::new(&ctx.http, command);
    let outcome = run_registered(&state.registry, &command.data.name, &responder, |handler| {
        handler(ctx, command, state)
    })
    .await;
    debug!(command = %command.data.name, user_id = command.user.id.get(), ?outcome, "dispatched");
}

#[async_trait]
impl EventHandler for Handler {
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        if let Interaction::Command(command) = &interaction {
            dispatch(&ctx, command, &self.state).await;
        }
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("Logged in as {} (ID: {})", ready.user.tag(), ready.user.id);
        if self.registered.swap(true, Ordering::SeqCst) {
            return;
        }
        self.register_commands(&ctx).await;
    }
}
