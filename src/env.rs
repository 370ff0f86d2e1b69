//! Environment variable abstraction for testability.
//!
//! Config loading reads `RANDUSER_*` overrides through [`Env`], so tests can
//! supply a fixed map instead of touching the process environment.

use std::collections::HashMap;
use std::str::FromStr;

/// Environment variable reader.
#[derive(Clone, Debug)]
pub struct Env {
    overrides: Option<HashMap<String, String>>,
}

/// A variable was present but could not be parsed into the wanted type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidVar {
    pub name: String,
    pub value: String,
}

impl Env {
    /// Create an `Env` that reads from the real process environment.
    pub fn real() -> Self {
        Self { overrides: None }
    }

    /// Create an `Env` backed by explicit key-value pairs.
    #[cfg(test)]
    pub fn mock(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            overrides: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Look up an environment variable by name.
    pub fn var(&self, name: &str) -> Result<String, std::env::VarError> {
        match &self.overrides {
            Some(map) => map.get(name).cloned().ok_or(std::env::VarError::NotPresent),
            None => std::env::var(name),
        }
    }

    /// Look up and parse a variable. Absent (or blank) yields `Ok(None)`.
    pub fn parsed<T: FromStr>(&self, name: &str) -> Result<Option<T>, InvalidVar> {
        let Ok(raw) = self.var(name) else {
            return Ok(None);
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        trimmed.parse().map(Some).map_err(|_| InvalidVar {
            name: name.to_string(),
            value: raw.clone(),
        })
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::real()
    }
}
