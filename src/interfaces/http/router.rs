//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    routing::get,
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::infrastructure::http::GeoHttpClient;
use crate::interfaces::http::common::{ApiResponse, PageParams, PaginatedResponse};
use crate::interfaces::http::modules::{health, states, users};

use users::{AppUserService, UserHandlerState};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Users
        users::list_users,
        users::get_user,
        users::get_user_by_email,
        users::get_user_by_username,
        users::filter_users,
        users::create_user,
        users::update_user,
        users::delete_user,
        // States
        states::search_states,
    ),
    components(
        schemas(
            // Common
            ApiResponse<String>,
            ApiResponse<users::UserDto>,
            PaginatedResponse<users::FilterDto>,
            PageParams,
            // Users
            users::UserDto,
            users::PreferenceDto,
            users::FreeAreaDto,
            users::PrivateAreaDto,
            users::PrincipalPhotoDto,
            users::PublicContentDto,
            users::CreateUserRequest,
            users::UpdateUserRequest,
            users::FilterDto,
            // States
            states::StateDto,
            // Health
            health::HealthResponse,
            health::ComponentHealth,
        )
    ),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Users", description = "User CRUD, filtered search and area enrichment"),
        (name = "States", description = "State/country lookups delegated to the geo service"),
    ),
    info(
        title = "Amora Users Service API",
        version = "1.0.0",
        description = "REST API for managing platform users and their free/private areas",
        license(name = "MIT"),
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(
    db: DatabaseConnection,
    user_service: Arc<AppUserService>,
    geo_client: Arc<GeoHttpClient>,
) -> Router {
    let user_state = UserHandlerState { user_service };

    let state_state = states::StateHandlerState { geo: geo_client };

    let health_state = health::HealthState {
        db,
        started_at: Arc::new(Instant::now()),
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // User routes
    let user_routes = Router::new()
        .route("/", get(users::list_users).post(users::create_user))
        .route("/filter", get(users::filter_users))
        .route("/email/{email}", get(users::get_user_by_email))
        .route("/username/{username}", get(users::get_user_by_username))
        .route(
            "/{id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .with_state(user_state);

    // State lookup routes
    let state_routes = Router::new()
        .route("/", get(states::search_states))
        .with_state(state_state);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    // Build router
    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health
        .route("/health", get(health::health_check).with_state(health_state))
        // Users
        .nest("/api/v1/users", user_routes)
        // States
        .nest("/api/v1/states", state_routes)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
