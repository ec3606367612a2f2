//! Domain models shared across the service and data layers.
//!
//! Entities store statuses and notification targets as plain strings; the
//! typed enums here are the only place those strings are interpreted.

pub mod account;
