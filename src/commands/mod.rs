// src/commands/mod.rs
// Command modules plus the registry that maps a slash command name to its handler.

pub mod hello;
pub mod purge;
pub mod roll;
pub mod serverinfo;
pub mod sync;

use crate::error::Result;
use crate::model::BotState;
use serenity::builder::{CreateCommand, CreateCommandOption};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::prelude::Context;
use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;

pub type HandlerFuture<'a> = Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>;
pub type HandlerFn =
    for<'a> fn(&'a Context, &'a CommandInteraction, &'a BotState) -> HandlerFuture<'a>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    String,
    Integer,
}

impl OptionKind {
    fn as_serenity(self) -> CommandOptionType {
        match self {
            Self::String => CommandOptionType::String,
            Self::Integer => CommandOptionType::Integer,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: OptionKind,
    pub required: bool,
}

/// Everything needed to register one slash command and run it.
#[derive(Clone, Copy)]
pub struct CommandDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub options: &'static [OptionSpec],
    pub handler: HandlerFn,
}

impl CommandDescriptor {
    pub fn to_create_command(&self) -> CreateCommand {
        self.options.iter().fold(
            CreateCommand::new(self.name).description(self.description),
            |cmd, opt| {
                cmd.add_option(
                    CreateCommandOption::new(opt.kind.as_serenity(), opt.name, opt.description)
                        .required(opt.required),
                )
            },
        )
    }
}

impl std::fmt::Debug for CommandDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandDescriptor")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// Name-keyed set of commands, built once at startup.
#[derive(Debug, Default, Clone)]
pub struct CommandRegistry {
    commands: BTreeMap<&'static str, CommandDescriptor>,
}

impl CommandRegistry {
    /// The bot's full command set.
    pub fn standard() -> Self {
        let mut registry = Self::default();
        for descriptor in [
            sync::descriptor(),
            hello::descriptor(),
            serverinfo::descriptor(),
            roll::descriptor(),
            purge::descriptor(),
        ] {
            let added = registry.insert(descriptor);
            debug_assert!(added, "duplicate command name: {}", descriptor.name);
        }
        registry
    }

    /// Adds a command. Returns `false` and keeps the existing entry if the name is taken.
    pub fn insert(&mut self, descriptor: CommandDescriptor) -> bool {
        if self.commands.contains_key(descriptor.name) {
            return false;
        }
        self.commands.insert(descriptor.name, descriptor);
        true
    }

    pub fn get(&self, name: &str) -> Option<&CommandDescriptor> {
        self.commands.get(name)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.commands.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Builders handed to Discord's bulk-overwrite endpoints.
    pub fn create_commands(&self) -> Vec<CreateCommand> {
        self.commands
            .values()
            .map(CommandDescriptor::to_create_command)
            .collect()
    }
}
