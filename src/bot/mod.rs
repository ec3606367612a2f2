//! Discord bot integration: gateway client, event handling, slash commands.

pub mod commands;
pub mod start;
