use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{driver, system},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Driver Registry API",
        description = "Registro y consulta de conductores"
    ),
    tags(
        (name = "conductores", description = "Driver registration and lookup"),
        (name = "sistema", description = "Service index and health")
    )
)]
struct ApiDoc;

/// Builds the application router.
///
/// Registers every documented endpoint, serves Swagger UI at `/api/docs` backed by
/// `/api/openapi.json`, and answers unmatched routes with a JSON 404.
///
/// # Arguments
/// - `state` - Shared application state
/// - `cors` - CORS policy applied to every response
pub fn router(state: AppState, cors: CorsLayer) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(system::index))
        .routes(routes!(system::health))
        .routes(routes!(driver::create_driver, driver::list_drivers))
        .routes(routes!(driver::search_drivers))
        .routes(routes!(driver::get_driver_stats))
        .routes(routes!(driver::get_drivers_registered_between))
        .routes(routes!(
            driver::get_driver,
            driver::update_driver,
            driver::delete_driver
        ))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", api))
        .fallback(system::fallback)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
