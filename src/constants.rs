//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names,
//! and widget defaults so a rename only requires changing this file.

use std::time::Duration;

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "randuser";

/// Crate version, baked in at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Directory name under `~/.config/` for global config.
pub const CONFIG_DIR: &str = "randuser";

/// Global config filename inside [`CONFIG_DIR`].
pub const CONFIG_FILENAME: &str = "config.toml";

/// Users resource; a single user lives at `{USERS_URL}/{id}`.
pub const USERS_URL: &str = "https://jsonplaceholder.typicode.com/users";

/// Minimum time between two executed button activations.
pub const DEFAULT_THROTTLE: Duration = Duration::from_millis(1000);

/// Smallest user id drawn by the fetcher.
pub const MIN_USER_ID: u32 = 1;

/// Largest user id drawn by the fetcher (inclusive).
pub const MAX_USER_ID: u32 = 10;

// ── Widget text ─────────────────────────────────────────────────────

pub const HEADER_TEXT: &str = "Get a random user";
pub const BUTTON_LABEL: &str = "get random user";
pub const COLUMN_USERNAME: &str = "Username";
pub const COLUMN_PHONE: &str = "Phone number";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_BASE_URL: &str = "RANDUSER_BASE_URL";
pub const ENV_THROTTLE_MS: &str = "RANDUSER_THROTTLE_MS";
pub const ENV_TIMEOUT_SECS: &str = "RANDUSER_TIMEOUT_SECS";
pub const ENV_LOG: &str = "RANDUSER_LOG";
