//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! Discord-facing layer (bot commands, scheduler) and the data (repository) layer.
//! Services are responsible for:
//!
//! - **Status classification**: Talking to the upstream account-status API
//! - **Polling**: Deciding per account whether to re-check, notify, or skip
//! - **Notification**: Building and delivering Discord embeds

pub mod checker;
pub mod notification;
pub mod status;

#[cfg(test)]
mod test;
