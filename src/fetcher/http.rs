//! [`UserSource`] backed by the users HTTP resource.

use async_trait::async_trait;

use super::{FetchError, UserSource};
use crate::config::ApiConfig;
use crate::models::{User, UserId};

/// Fetches users with `GET {base_url}/{id}`.
#[derive(Debug, Clone)]
pub struct HttpUserSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpUserSource {
    /// Build a source from the `[api]` config section.
    pub fn new(config: &ApiConfig) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("randuser/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self::with_client(builder.build()?, &config.base_url))
    }

    /// Use an existing client.
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The URL a user is fetched from.
    pub fn user_url(&self, id: UserId) -> String {
        format!("{}/{id}", self.base_url)
    }
}

#[async_trait]
impl UserSource for HttpUserSource {
    async fn fetch_user(&self, id: UserId) -> Result<User, FetchError> {
        let url = self.user_url(id);
        tracing::info!(%url, "fetching user");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| FetchError::Network { id, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { id, status });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Network { id, source })?;

        serde_json::from_slice(&body).map_err(|source| FetchError::Parse { id, source })
    }
}
