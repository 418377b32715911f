//! Geo service client
//!
//! Thin delegation for state/country lookups.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::{DomainError, DomainResult, GeoClient, State};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatePayload {
    id: i64,
    name: String,
    country: String,
}

pub struct GeoHttpClient {
    http: Client,
    base_url: String,
}

impl GeoHttpClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl GeoClient for GeoHttpClient {
    async fn states_by_country(&self, name: &str) -> DomainResult<Vec<State>> {
        let response = self
            .http
            .get(format!("{}/api/v1/states", self.base_url))
            .query(&[("name", name)])
            .send()
            .await
            .map_err(|e| DomainError::Remote(format!("geo: {}", e)))?;

        if !response.status().is_success() {
            return Err(DomainError::Remote(format!(
                "geo responded with status {}",
                response.status()
            )));
        }

        let payload: Vec<StatePayload> = response
            .json()
            .await
            .map_err(|e| DomainError::Remote(format!("geo: {}", e)))?;

        Ok(payload
            .into_iter()
            .map(|s| State {
                id: s.id,
                name: s.name,
                country: s.country,
            })
            .collect())
    }
}
