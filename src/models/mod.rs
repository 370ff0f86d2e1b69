//! Shared types used across all modules.
//!
//! The fetcher, state reducer and components import the user record from
//! here rather than reaching into each other's internals.

pub mod user;

pub use user::{Address, Company, Geo, User};

/// Identifier of a user on the users resource.
pub type UserId = u32;
