//! randuser — random user widget (library crate).
//!
//! Re-exports public modules for the terminal front-end and integration tests.

pub mod components;
pub mod config;
pub mod constants;
pub mod env;
pub mod fetcher;
pub mod models;
pub mod state;
pub mod throttle;
