use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        driver::{
            CreateDriverDto, DeletedDriverDto, DriverMessageDto, DriverNotFoundDto, DriverRangeDto,
            DriverSearchDto, DriverStatsDto, DuplicateLicenseDto, PaginatedDriversDto, UpdateDriverDto,
            UpdatedDriverDto,
        },
    },
    server::{
        error::AppError,
        model::driver::{DriverCandidate, DriverPatch, ListDriversParams},
        service::driver::DriverService,
        state::AppState,
    },
};

/// Tag for grouping driver endpoints in OpenAPI documentation
pub static DRIVER_TAG: &str = "conductores";

#[derive(Deserialize)]
pub struct ListDriversQuery {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    #[serde(rename = "ordenar")]
    pub sort: Option<String>,
}

#[derive(Deserialize)]
pub struct RegisteredBetweenQuery {
    #[serde(rename = "desde")]
    pub from: NaiveDate,
    #[serde(rename = "hasta")]
    pub to: NaiveDate,
}

/// Register a new driver.
///
/// Validates the payload, normalizes it (trimmed values, upper-cased license) and stores
/// it with today's registration date.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Driver fields (nombre, apellido, licencia, telefono)
///
/// # Returns
/// - `201 Created` - Driver registered
/// - `400 Bad Request` - One or more fields failed validation
/// - `409 Conflict` - License already registered
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/conductores",
    tag = DRIVER_TAG,
    request_body = CreateDriverDto,
    responses(
        (status = 201, description = "Driver registered", body = DriverMessageDto),
        (status = 400, description = "Invalid driver data", body = ValidationErrorDto),
        (status = 409, description = "License already registered", body = DuplicateLicenseDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_driver(
    State(state): State<AppState>,
    Json(payload): Json<CreateDriverDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = DriverService::new(&state.db);

    let driver = service.register(DriverCandidate::from_dto(payload)).await?;

    Ok((
        StatusCode::CREATED,
        Json(DriverMessageDto {
            message: "Conductor registrado exitosamente".to_string(),
            driver: driver.into_dto(),
        }),
    ))
}

/// List drivers with pagination.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Page size, offset and ordering (`<column> [ASC|DESC]`)
///
/// # Returns
/// - `200 OK` - Page of drivers with total count
/// - `400 Bad Request` - Unknown sort column or direction
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/conductores",
    tag = DRIVER_TAG,
    params(
        ("limit" = Option<u64>, Query, description = "Page size (default: 100, max: 1000)"),
        ("offset" = Option<u64>, Query, description = "Rows to skip (default: 0)"),
        ("ordenar" = Option<String>, Query, description = "Sort order, e.g. `nombre ASC` (default: `fecha_registro DESC`)")
    ),
    responses(
        (status = 200, description = "Page of drivers", body = PaginatedDriversDto),
        (status = 400, description = "Invalid sort order or offset", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_drivers(
    State(state): State<AppState>,
    Query(query): Query<ListDriversQuery>,
) -> Result<impl IntoResponse, AppError> {
    let params = ListDriversParams::from_query(query.limit, query.offset, query.sort.as_deref())?;

    let service = DriverService::new(&state.db);
    let page = service.list(params).await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

/// Search drivers by first or last name.
///
/// Case-insensitive substring match. The term must be at least two characters long.
///
/// # Returns
/// - `200 OK` - Matching drivers
/// - `400 Bad Request` - Term too short
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/conductores/buscar/{termino}",
    tag = DRIVER_TAG,
    params(
        ("termino" = String, Path, description = "Search term, at least 2 characters")
    ),
    responses(
        (status = 200, description = "Matching drivers", body = DriverSearchDto),
        (status = 400, description = "Search term too short", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_drivers(
    State(state): State<AppState>,
    Path(term): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = DriverService::new(&state.db);

    let result = service.search(&term).await?;

    Ok((StatusCode::OK, Json(result.into_dto())))
}

/// Get registration statistics.
///
/// # Returns
/// - `200 OK` - Total drivers and registrations over the last 7 and 30 days
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/conductores/stats",
    tag = DRIVER_TAG,
    responses(
        (status = 200, description = "Registration statistics", body = DriverStatsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_driver_stats(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = DriverService::new(&state.db);

    let stats = service.stats(Utc::now()).await?;

    Ok((StatusCode::OK, Json(stats.into_dto())))
}

/// List drivers registered within a date range.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Inclusive `desde` and `hasta` dates (YYYY-MM-DD)
///
/// # Returns
/// - `200 OK` - Drivers in the range, newest first
/// - `400 Bad Request` - `desde` is after `hasta`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/conductores/registrados",
    tag = DRIVER_TAG,
    params(
        ("desde" = NaiveDate, Query, description = "First registration date, inclusive"),
        ("hasta" = NaiveDate, Query, description = "Last registration date, inclusive")
    ),
    responses(
        (status = 200, description = "Drivers in range", body = DriverRangeDto),
        (status = 400, description = "Invalid date range", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_drivers_registered_between(
    State(state): State<AppState>,
    Query(query): Query<RegisteredBetweenQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = DriverService::new(&state.db);

    let range = service.registered_between(query.from, query.to).await?;

    Ok((StatusCode::OK, Json(range.into_dto())))
}

/// Get a driver by license.
///
/// The license is matched case-insensitively.
///
/// # Returns
/// - `200 OK` - Driver found
/// - `404 Not Found` - No driver holds the license
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/conductores/{licencia}",
    tag = DRIVER_TAG,
    params(
        ("licencia" = String, Path, description = "Driver license")
    ),
    responses(
        (status = 200, description = "Driver found", body = DriverMessageDto),
        (status = 404, description = "Driver not found", body = DriverNotFoundDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_driver(
    State(state): State<AppState>,
    Path(license): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = DriverService::new(&state.db);

    let driver = service.get(&license).await?;

    Ok((
        StatusCode::OK,
        Json(DriverMessageDto {
            message: "Conductor encontrado".to_string(),
            driver: driver.into_dto(),
        }),
    ))
}

/// Update a driver's name, surname or phone.
///
/// Fields that are missing or blank keep their stored values. The license itself cannot
/// be changed.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `license` - License of the driver to update
/// - `payload` - Subset of nombre, apellido, telefono
///
/// # Returns
/// - `200 OK` - Driver before and after the update
/// - `400 Bad Request` - No field provided, or merged values failed validation
/// - `404 Not Found` - No driver holds the license
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/conductores/{licencia}",
    tag = DRIVER_TAG,
    params(
        ("licencia" = String, Path, description = "Driver license")
    ),
    request_body = UpdateDriverDto,
    responses(
        (status = 200, description = "Driver updated", body = UpdatedDriverDto),
        (status = 400, description = "Empty or invalid update", body = ErrorDto),
        (status = 404, description = "Driver not found", body = DriverNotFoundDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_driver(
    State(state): State<AppState>,
    Path(license): Path<String>,
    Json(payload): Json<UpdateDriverDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = DriverService::new(&state.db);

    let update = service
        .update(&license, DriverPatch::from_dto(payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(UpdatedDriverDto {
            message: "Conductor actualizado exitosamente".to_string(),
            before: update.before.into_dto(),
            after: update.after.into_dto(),
        }),
    ))
}

/// Delete a driver by license.
///
/// # Returns
/// - `200 OK` - Driver deleted, returned in the body
/// - `404 Not Found` - No driver holds the license
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/conductores/{licencia}",
    tag = DRIVER_TAG,
    params(
        ("licencia" = String, Path, description = "Driver license")
    ),
    responses(
        (status = 200, description = "Driver deleted", body = DeletedDriverDto),
        (status = 404, description = "Driver not found", body = DriverNotFoundDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_driver(
    State(state): State<AppState>,
    Path(license): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = DriverService::new(&state.db);

    let driver = service.delete(&license).await?;

    Ok((
        StatusCode::OK,
        Json(DeletedDriverDto {
            message: "Conductor eliminado exitosamente".to_string(),
            driver: driver.into_dto(),
        }),
    ))
}
