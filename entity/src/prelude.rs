pub use super::account::Entity as Account;
pub use super::status_change::Entity as StatusChange;
