//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle foreign key relationships,
//! making tests more concise and maintainable.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let account = factory::account::create_account(&db, "111", "222").await?;
//!
//!     // Record a status transition for it
//!     let change = factory::status_change::create_status_change(&db, account.id, "permaban").await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory::account::AccountFactory;
//!
//! let account = AccountFactory::new(&db, "111", "222")
//!     .title("Main")
//!     .last_status("good")
//!     .expired_cookie(true)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `account` - Create tracked account entities
//! - `status_change` - Create status-change log entries
//! - `helpers` - Shared utilities (unique ID generation)

pub mod account;
pub mod helpers;
pub mod status_change;

// Re-export commonly used factory functions for concise usage
pub use account::create_account;
pub use status_change::create_status_change;
