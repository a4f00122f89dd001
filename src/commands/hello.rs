use super::{CommandDescriptor, HandlerFuture, OptionKind, OptionSpec};
use crate::discord::InteractionResponder;
use crate::error::{BotError, Result};
use crate::model::BotState;
use crate::ports::Responder;
use crate::reply::Reply;
use crate::util::string_option;
use serenity::model::application::CommandInteraction;
use serenity::prelude::Context;

const OPTIONS: &[OptionSpec] = &[OptionSpec {
    name: "name",
    description: "Who should I greet?",
    kind: OptionKind::String,
    required: true,
}];

pub fn descriptor() -> CommandDescriptor {
    CommandDescriptor {
        name: "hello",
        description: "Say hello to someone",
        options: OPTIONS,
        handler: handle,
    }
}

pub fn greeting(name: &str) -> Reply {
    Reply::public(format!("Hey {name}! 👋"))
}

pub async fn execute(responder: &dyn Responder, name: &str) -> Result<()> {
    responder.reply(greeting(name)).await
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) -> Result<()> {
    let name = string_option(&interaction.data.options, "name")
        .ok_or(BotError::MissingOption("name"))?;
    let responder = InteractionResponder::new(&ctx.http, interaction);
    execute(&responder, name).await
}

fn handle<'a>(
    ctx: &'a Context,
    interaction: &'a CommandInteraction,
    _state: &'a BotState,
) -> HandlerFuture<'a> {
    Box::pin(run_slash(ctx, interaction))
}
