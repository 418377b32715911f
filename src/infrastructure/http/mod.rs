//! HTTP clients for the sibling microservices
//!
//! - `area_client`: free-area and private-area services
//! - `geo_client`: state/country lookup service

pub mod area_client;
pub mod geo_client;

pub use area_client::{FreeAreaHttpClient, PrivateAreaHttpClient};
pub use geo_client::GeoHttpClient;

use std::time::Duration;

/// Build the shared reqwest client used by every sibling-service client.
///
/// A slow sibling still blocks the calling operation; the timeout bounds
/// how long.
pub fn build_http_client(timeout: Duration) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder().timeout(timeout).build()
}
