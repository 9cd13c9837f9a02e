//! `wigstock-core`: shared building blocks.
//!
//! Identifiers and the domain error model. No IO.

pub mod error;
pub mod id;

pub use error::DomainError;
pub use id::{ItemId, UserId};
