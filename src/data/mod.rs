//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally; all database
//! queries, inserts, updates, and deletes are performed through these repositories.

pub mod account;
pub mod status_change;

pub use account::AccountRepository;
pub use status_change::StatusChangeRepository;
