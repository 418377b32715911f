//! User DTOs
//!
//! The wire format is camelCase JSON, matching the platform's other
//! services.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::{EnrichedUser, FreeArea, Preference, PrivateArea, User};

// ── Area representations ────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrincipalPhotoDto {
    pub id: i64,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicContentDto {
    pub id: i64,
    pub content: String,
}

/// Public profile area owned by the free-area service
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FreeAreaDto {
    pub id: i64,
    pub is_enabled: bool,
    pub principal_photos: Vec<PrincipalPhotoDto>,
    pub public_content: Vec<PublicContentDto>,
}

/// Gated profile area owned by the private-area service
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrivateAreaDto {
    pub id: i64,
    pub is_enabled: bool,
}

impl From<FreeArea> for FreeAreaDto {
    fn from(area: FreeArea) -> Self {
        Self {
            id: area.id,
            is_enabled: area.is_enabled,
            principal_photos: area
                .principal_photos
                .into_iter()
                .map(|p| PrincipalPhotoDto { id: p.id, url: p.url })
                .collect(),
            public_content: area
                .public_content
                .into_iter()
                .map(|c| PublicContentDto {
                    id: c.id,
                    content: c.content,
                })
                .collect(),
        }
    }
}

impl From<PrivateArea> for PrivateAreaDto {
    fn from(area: PrivateArea) -> Self {
        Self {
            id: area.id,
            is_enabled: area.is_enabled,
        }
    }
}

// ── User representations ────────────────────────────────────────

/// A user's stated matching criteria
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceDto {
    pub age_from: Option<i64>,
    pub age_to: Option<i64>,
    pub sex_preference: Option<String>,
}

impl From<Preference> for PreferenceDto {
    fn from(p: Preference) -> Self {
        Self {
            age_from: p.age_from,
            age_to: p.age_to,
            sex_preference: p.sex_preference,
        }
    }
}

/// User API representation, enriched with area details.
///
/// The password hash never leaves the service.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub birthdate: NaiveDate,
    pub age: i64,
    pub sex: String,
    pub city: String,
    pub country: String,
    pub description: String,
    pub is_enabled: bool,
    pub register_date: NaiveDate,
    pub free_area_id: i64,
    pub private_area_id: i64,
    pub preference: PreferenceDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_area: Option<FreeAreaDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_area: Option<PrivateAreaDto>,
}

impl From<EnrichedUser> for UserDto {
    fn from(enriched: EnrichedUser) -> Self {
        let EnrichedUser {
            user,
            free_area,
            private_area,
        } = enriched;
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            birthdate: user.birthdate,
            age: user.age,
            sex: user.sex,
            city: user.city,
            country: user.country,
            description: user.description,
            is_enabled: user.is_enabled,
            register_date: user.register_date,
            free_area_id: user.free_area_id,
            private_area_id: user.private_area_id,
            preference: user.preference.into(),
            free_area: free_area.map(FreeAreaDto::from),
            private_area: private_area.map(PrivateAreaDto::from),
        }
    }
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        EnrichedUser {
            user,
            free_area: None,
            private_area: None,
        }
        .into()
    }
}

// ── Requests ────────────────────────────────────────────────────

/// Create user request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(length(min = 5, message = "Username should have at least 5 characters"))]
    pub username: String,
    #[validate(email(message = "Please provide a valid email address"))]
    pub email: String,
    #[validate(length(min = 5, message = "Password should have at least 5 characters"))]
    pub password: String,
    pub birthdate: NaiveDate,
    #[validate(length(min = 1, message = "Sex cannot be empty"))]
    pub sex: String,
    #[validate(length(min = 1, message = "City cannot be empty"))]
    pub city: String,
    #[validate(length(min = 1, message = "Country cannot be empty"))]
    pub country: String,
    #[serde(default)]
    pub description: String,
    pub age_from: Option<i64>,
    pub age_to: Option<i64>,
    pub sex_preference: Option<String>,
}

/// Update user request
///
/// The service-side field gate decides acceptance; empty fields here come
/// back as a single generic 400, not a field-level report.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub free_area_id: i64,
    pub username: String,
    pub email: String,
    pub password: String,
    pub city: String,
    pub country: String,
    pub description: Option<String>,
}

// ── Filter ──────────────────────────────────────────────────────

/// Filtered-search shape.
///
/// Serves both as the query parameters (`ageFrom`/`ageTo` required, the
/// rest optional predicates) and as the enriched result row, where the
/// identity fields and area details are populated.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct FilterDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub age_from: i64,
    pub age_to: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_area: Option<FreeAreaDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_area: Option<PrivateAreaDto>,
}

impl FilterDto {
    /// Result row for one matched user: the user's own attributes plus the
    /// resolved area details.
    pub fn from_enriched(enriched: EnrichedUser) -> Self {
        let EnrichedUser {
            user,
            free_area,
            private_area,
        } = enriched;
        Self {
            id: Some(user.id),
            username: Some(user.username),
            email: Some(user.email),
            age_from: user.preference.age_from.unwrap_or_default(),
            age_to: user.preference.age_to.unwrap_or_default(),
            sex: Some(user.sex),
            city: Some(user.city),
            country: Some(user.country),
            is_enabled: Some(user.is_enabled),
            free_area: free_area.map(FreeAreaDto::from),
            private_area: private_area.map(PrivateAreaDto::from),
        }
    }
}
