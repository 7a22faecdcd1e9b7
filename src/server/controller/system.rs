use axum::{
    http::{StatusCode, Uri},
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::model::api::{ApiEndpointsDto, ApiIndexDto, HealthDto, RouteNotFoundDto};

/// Tag for grouping service endpoints in OpenAPI documentation
pub static SYSTEM_TAG: &str = "sistema";

/// Describe the API and its main endpoints.
#[utoipa::path(
    get,
    path = "/",
    tag = SYSTEM_TAG,
    responses(
        (status = 200, description = "API index", body = ApiIndexDto)
    ),
)]
pub async fn index() -> impl IntoResponse {
    Json(ApiIndexDto {
        message: "API Sistema de Registro de Conductores".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: ApiEndpointsDto {
            drivers: "/api/conductores (GET, POST)".to_string(),
            documentation: "/api/docs".to_string(),
            lookup: "/api/conductores/{licencia} (GET)".to_string(),
            update: "/api/conductores/{licencia} (PUT)".to_string(),
            delete: "/api/conductores/{licencia} (DELETE)".to_string(),
        },
    })
}

/// Liveness probe.
///
/// Does not touch the database.
#[utoipa::path(
    get,
    path = "/health",
    tag = SYSTEM_TAG,
    responses(
        (status = 200, description = "Service is up", body = HealthDto)
    ),
)]
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthDto {
            status: "OK".to_string(),
            timestamp: Utc::now(),
        }),
    )
}

/// Fallback for unmatched routes, echoing the requested path and query.
pub async fn fallback(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(RouteNotFoundDto {
            error: "Ruta no encontrada".to_string(),
            route: uri.to_string(),
        }),
    )
}
