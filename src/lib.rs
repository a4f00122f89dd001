// Library entry so integration tests can reach the command handlers and ports.
// The binary (`main.rs`) only wires configuration, logging and the serenity client.
pub mod commands;
pub mod config;
pub mod constants;
pub mod discord;
pub mod error;
pub mod handler;
pub mod logging;
pub mod model;
pub mod ports;
pub mod reply;
pub mod util;

pub use config::{BotConfig, SyncScope};
pub use error::BotError;
pub use model::BotState;
