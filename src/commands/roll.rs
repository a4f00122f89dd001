//! `/roll`: a single die with a configurable number of sides.

use super::{CommandDescriptor, HandlerFuture, OptionKind, OptionSpec};
use crate::constants::{DEFAULT_DIE_SIDES, MAX_DIE_SIDES, MIN_DIE_SIDES};
use crate::discord::InteractionResponder;
use crate::error::Result;
use crate::model::BotState;
use crate::ports::Responder;
use crate::reply::Reply;
use crate::util::integer_option;
use rand::Rng;
use serenity::model::application::CommandInteraction;
use serenity::prelude::Context;

const OPTIONS: &[OptionSpec] = &[OptionSpec {
    name: "sides",
    description: "Number of sides on the die (2–100000)",
    kind: OptionKind::Integer,
    required: false,
}];

pub fn descriptor() -> CommandDescriptor {
    CommandDescriptor {
        name: "roll",
        description: "Roll a die",
        options: OPTIONS,
        handler: handle,
    }
}

/// Builds the `/roll` answer. The RNG is only touched when `sides` is in range.
pub fn roll<R: Rng + ?Sized>(sides: Option<i64>, rng: &mut R) -> Reply {
    let sides = sides.unwrap_or(DEFAULT_DIE_SIDES);
    if !(MIN_DIE_SIDES..=MAX_DIE_SIDES).contains(&sides) {
        return Reply::public(format!(
            "Choose between {MIN_DIE_SIDES} and {MAX_DIE_SIDES} sides."
        ));
    }
    let result = rng.random_range(1..=sides);
    Reply::public(format!("🎲 You rolled **{result}** (1–{sides})"))
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) -> Result<()> {
    // ThreadRng is !Send; keep it out of the awaited section.
    let reply = roll(
        integer_option(&interaction.data.options, "sides"),
        &mut rand::rng(),
    );
    InteractionResponder::new(&ctx.http, interaction)
        .reply(reply)
        .await
}

fn handle<'a>(
    ctx: &'a Context,
    interaction: &'a CommandInteraction,
    _state: &'a BotState,
) -> HandlerFuture<'a> {
    Box::pin(run_slash(ctx, interaction))
}
