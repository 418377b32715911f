//! Free-area / private-area service clients
//!
//! Implements the `FreeAreaClient` and `PrivateAreaClient` ports over the
//! sibling services' REST APIs. The wire format is camelCase JSON.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::domain::{
    DomainError, DomainResult, FreeArea, FreeAreaClient, PrincipalPhoto, PrivateArea,
    PrivateAreaClient, PublicContent,
};

// ── Wire payloads ───────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PrincipalPhotoPayload {
    id: i64,
    url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PublicContentPayload {
    id: i64,
    content: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FreeAreaPayload {
    id: i64,
    is_enabled: bool,
    #[serde(default)]
    principal_photos: Vec<PrincipalPhotoPayload>,
    #[serde(default)]
    public_content: Vec<PublicContentPayload>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PrivateAreaPayload {
    id: i64,
    is_enabled: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateAreaPayload {
    is_enabled: bool,
}

impl From<FreeAreaPayload> for FreeArea {
    fn from(p: FreeAreaPayload) -> Self {
        FreeArea {
            id: p.id,
            is_enabled: p.is_enabled,
            principal_photos: p
                .principal_photos
                .into_iter()
                .map(|photo| PrincipalPhoto {
                    id: photo.id,
                    url: photo.url,
                })
                .collect(),
            public_content: p
                .public_content
                .into_iter()
                .map(|content| PublicContent {
                    id: content.id,
                    content: content.content,
                })
                .collect(),
        }
    }
}

impl From<PrivateAreaPayload> for PrivateArea {
    fn from(p: PrivateAreaPayload) -> Self {
        PrivateArea {
            id: p.id,
            is_enabled: p.is_enabled,
        }
    }
}

// ── Error mapping ───────────────────────────────────────────────

fn transport_err(service: &str, e: reqwest::Error) -> DomainError {
    DomainError::Remote(format!("{}: {}", service, e))
}

async fn expect_success(
    service: &str,
    entity: &'static str,
    id: Option<i64>,
    response: reqwest::Response,
) -> DomainResult<reqwest::Response> {
    match response.status() {
        status if status.is_success() => Ok(response),
        StatusCode::NOT_FOUND => Err(DomainError::NotFound {
            entity,
            field: "id",
            value: id.map(|v| v.to_string()).unwrap_or_default(),
        }),
        status => Err(DomainError::Remote(format!(
            "{} responded with status {}",
            service, status
        ))),
    }
}

// ── Free-area client ────────────────────────────────────────────

pub struct FreeAreaHttpClient {
    http: Client,
    base_url: String,
}

impl FreeAreaHttpClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/v1/free-area{}", self.base_url, path)
    }
}

#[async_trait]
impl FreeAreaClient for FreeAreaHttpClient {
    async fn find_all(&self) -> DomainResult<Vec<FreeArea>> {
        let response = self
            .http
            .get(self.url(""))
            .send()
            .await
            .map_err(|e| transport_err("free-area", e))?;
        let payload: Vec<FreeAreaPayload> = expect_success("free-area", "FreeArea", None, response)
            .await?
            .json()
            .await
            .map_err(|e| transport_err("free-area", e))?;
        Ok(payload.into_iter().map(FreeArea::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<FreeArea> {
        let response = self
            .http
            .get(self.url(&format!("/{}", id)))
            .send()
            .await
            .map_err(|e| transport_err("free-area", e))?;
        let payload: FreeAreaPayload =
            expect_success("free-area", "FreeArea", Some(id), response)
                .await?
                .json()
                .await
                .map_err(|e| transport_err("free-area", e))?;
        Ok(payload.into())
    }

    async fn create(&self, is_enabled: bool) -> DomainResult<FreeArea> {
        let response = self
            .http
            .post(self.url(""))
            .json(&CreateAreaPayload { is_enabled })
            .send()
            .await
            .map_err(|e| transport_err("free-area", e))?;
        let payload: FreeAreaPayload = expect_success("free-area", "FreeArea", None, response)
            .await?
            .json()
            .await
            .map_err(|e| transport_err("free-area", e))?;
        Ok(payload.into())
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        let response = self
            .http
            .delete(self.url(&format!("/{}", id)))
            .send()
            .await
            .map_err(|e| transport_err("free-area", e))?;
        expect_success("free-area", "FreeArea", Some(id), response).await?;
        Ok(())
    }
}

// ── Private-area client ─────────────────────────────────────────

pub struct PrivateAreaHttpClient {
    http: Client,
    base_url: String,
}

impl PrivateAreaHttpClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/v1/private-area{}", self.base_url, path)
    }
}

#[async_trait]
impl PrivateAreaClient for PrivateAreaHttpClient {
    async fn find_all(&self) -> DomainResult<Vec<PrivateArea>> {
        let response = self
            .http
            .get(self.url(""))
            .send()
            .await
            .map_err(|e| transport_err("private-area", e))?;
        let payload: Vec<PrivateAreaPayload> =
            expect_success("private-area", "PrivateArea", None, response)
                .await?
                .json()
                .await
                .map_err(|e| transport_err("private-area", e))?;
        Ok(payload.into_iter().map(PrivateArea::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<PrivateArea> {
        let response = self
            .http
            .get(self.url(&format!("/{}", id)))
            .send()
            .await
            .map_err(|e| transport_err("private-area", e))?;
        let payload: PrivateAreaPayload =
            expect_success("private-area", "PrivateArea", Some(id), response)
                .await?
                .json()
                .await
                .map_err(|e| transport_err("private-area", e))?;
        Ok(payload.into())
    }

    async fn create(&self, is_enabled: bool) -> DomainResult<PrivateArea> {
        let response = self
            .http
            .post(self.url(""))
            .json(&CreateAreaPayload { is_enabled })
            .send()
            .await
            .map_err(|e| transport_err("private-area", e))?;
        let payload: PrivateAreaPayload =
            expect_success("private-area", "PrivateArea", None, response)
                .await?
                .json()
                .await
                .map_err(|e| transport_err("private-area", e))?;
        Ok(payload.into())
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        let response = self
            .http
            .delete(self.url(&format!("/{}", id)))
            .send()
            .await
            .map_err(|e| transport_err("private-area", e))?;
        expect_success("private-area", "PrivateArea", Some(id), response).await?;
        Ok(())
    }
}
