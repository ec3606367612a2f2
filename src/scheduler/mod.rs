//! Background jobs driving the account poller.

pub mod account_checks;
