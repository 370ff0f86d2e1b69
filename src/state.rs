//! Widget state and its pure update function.
//!
//! The root container owns one [`AppState`] and replaces it wholesale on
//! every [`Event`]. The cache map is shared behind an [`Arc`]; a fetch
//! produces a fresh map instead of editing the old one, so pointer
//! identity tells observers whether the cache changed.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::models::{User, UserId};

/// Session cache: user id to the record fetched for it.
pub type UserCache = Arc<BTreeMap<UserId, User>>;

/// Everything the root container remembers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub cache: UserCache,
    pub current: Option<User>,
}

/// Something that happened to the widget.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A click resolved to an id already in the cache.
    CacheHit(UserId),
    /// A fetch completed with a user.
    Fetched(User),
}

/// High-level widget status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    NoUser,
    UserLoaded,
}

impl AppState {
    /// Look up a cached user.
    pub fn cached(&self, id: UserId) -> Option<&User> {
        self.cache.get(&id)
    }

    pub fn status(&self) -> Status {
        match self.current {
            Some(_) => Status::UserLoaded,
            None => Status::NoUser,
        }
    }

    /// Compute the state after `event`. `self` is left untouched.
    pub fn apply(&self, event: Event) -> AppState {
        match event {
            Event::CacheHit(id) => match self.cache.get(&id) {
                Some(user) => AppState {
                    cache: Arc::clone(&self.cache),
                    current: Some(user.clone()),
                },
                None => self.clone(),
            },
            Event::Fetched(user) => {
                let mut cache = BTreeMap::clone(&self.cache);
                cache.insert(user.id, user.clone());
                AppState {
                    cache: Arc::new(cache),
                    current: Some(user),
                }
            }
        }
    }
}
