//! Random-user fetching.
//!
//! [`UserSource`] decouples the widget from the HTTP client so the root
//! container can be driven by a canned source in tests, and [`IdPicker`]
//! decides which user a click asks for.

pub mod http;

use std::cell::Cell;
use std::ops::RangeInclusive;

use async_trait::async_trait;
use rand::Rng;
use thiserror::Error;

use crate::models::{User, UserId};

pub use http::HttpUserSource;

/// Errors from fetching a user. None of these ever reach the UI; the root
/// container logs them and keeps its state.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request for user {id} failed: {source}")]
    Network {
        id: UserId,
        #[source]
        source: reqwest::Error,
    },

    #[error("request for user {id} returned {status}")]
    Status {
        id: UserId,
        status: reqwest::StatusCode,
    },

    #[error("response for user {id} is not a user record: {source}")]
    Parse {
        id: UserId,
        #[source]
        source: serde_json::Error,
    },

    #[error("asked for user {requested} but received user {received}")]
    IdMismatch { requested: UserId, received: UserId },
}

/// Something that can produce the user with a given id.
#[async_trait]
pub trait UserSource: Send + Sync {
    async fn fetch_user(&self, id: UserId) -> Result<User, FetchError>;
}

/// Fetch `id` from `source` and check the record really is that user.
///
/// The cache is keyed by the requested id, so a record carrying another
/// id is refused rather than cached under the wrong key.
pub async fn fetch_checked(source: &dyn UserSource, id: UserId) -> Result<User, FetchError> {
    let user = source.fetch_user(id).await?;
    if user.id != id {
        return Err(FetchError::IdMismatch {
            requested: id,
            received: user.id,
        });
    }
    Ok(user)
}

/// Chooses the id a click asks for.
pub trait IdPicker {
    fn pick(&self) -> UserId;
}

/// Uniform draw from an inclusive range.
#[derive(Debug, Clone)]
pub struct RandomIds {
    range: RangeInclusive<UserId>,
}

impl RandomIds {
    /// An empty range (`min > max`) is normalised to the single id `min`.
    pub fn new(min: UserId, max: UserId) -> Self {
        Self {
            range: min..=max.max(min),
        }
    }
}

impl Default for RandomIds {
    fn default() -> Self {
        Self::new(crate::constants::MIN_USER_ID, crate::constants::MAX_USER_ID)
    }
}

impl IdPicker for RandomIds {
    fn pick(&self) -> UserId {
        rand::thread_rng().gen_range(self.range.clone())
    }
}

/// Replays a fixed sequence of ids, wrapping around at the end.
#[derive(Debug)]
pub struct FixedIds {
    ids: Vec<UserId>,
    next: Cell<usize>,
}

impl FixedIds {
    pub fn new(ids: impl Into<Vec<UserId>>) -> Self {
        let ids = ids.into();
        assert!(!ids.is_empty(), "FixedIds needs at least one id");
        Self {
            ids,
            next: Cell::new(0),
        }
    }
}

impl IdPicker for FixedIds {
    fn pick(&self) -> UserId {
        let i = self.next.get();
        self.next.set((i + 1) % self.ids.len());
        self.ids[i]
    }
}
