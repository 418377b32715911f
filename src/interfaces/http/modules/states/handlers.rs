//! State lookup handler
//!
//! Thin delegation to the geo sibling service.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::GeoClient;
use crate::infrastructure::http::GeoHttpClient;
use crate::interfaces::http::common::ApiResponse;

#[derive(Clone)]
pub struct StateHandlerState {
    pub geo: Arc<GeoHttpClient>,
}

/// A state/province of a country
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StateDto {
    pub id: i64,
    pub name: String,
    pub country: String,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct StatesQuery {
    /// Country name to look up states for
    pub name: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/states",
    tag = "States",
    params(StatesQuery),
    responses(
        (status = 200, description = "States for the country", body = [StateDto]),
        (status = 502, description = "Geo service failed")
    )
)]
pub async fn search_states(
    State(state): State<StateHandlerState>,
    Query(query): Query<StatesQuery>,
) -> Result<Json<Vec<StateDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.geo.states_by_country(&query.name).await {
        Ok(states) => Ok(Json(
            states
                .into_iter()
                .map(|s| StateDto {
                    id: s.id,
                    name: s.name,
                    country: s.country,
                })
                .collect(),
        )),
        Err(e) => Err((
            StatusCode::BAD_GATEWAY,
            Json(ApiResponse::error(e.to_string())),
        )),
    }
}
