//! Domain layer - Core resource records and error taxonomy.
//!
//! This crate contains pure domain types with no infrastructure dependencies.
//! Both resource services and the gateway build on these types.

pub mod error;
pub mod item;
pub mod user;

pub use error::{DomainError, DomainResult, OptionExt};
pub use item::Item;
pub use user::User;
