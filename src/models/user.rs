//! The user record served by the users resource.

use serde::{Deserialize, Serialize};

/// A single user, exactly as the users resource encodes it.
///
/// Treated as an immutable value: the widget clones it into the cache and
/// the current-user slot but never edits a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub email: String,
    pub name: String,
    pub phone: String,
    pub username: String,
    pub website: String,
    pub company: Company,
    pub address: Address,
}

/// Employer details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Business slogan.
    pub bs: String,
    #[serde(rename = "catchPhrase")]
    pub catch_phrase: String,
    pub name: String,
}

/// Postal address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: Geo,
}

/// Coordinates; the resource sends them as strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}
