use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use thiserror::Error;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        driver::{DriverNotFoundDto, DuplicateLicenseDto},
    },
    server::model::driver::ExistingDriver,
};

/// Minimum number of characters in a search term.
pub const MIN_SEARCH_TERM_LEN: usize = 2;

/// Largest listing offset storage accepts as a signed 64-bit bind value.
pub const MAX_OFFSET: u64 = i64::MAX as u64;

/// Expected client-side failures of driver operations.
///
/// None of these indicate a server problem, so they are logged at debug level only.
#[derive(Error, Debug)]
pub enum DriverError {
    /// One or more fields failed validation.
    ///
    /// Results in 400 Bad Request listing every violation.
    #[error("Invalid driver data: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// An update request carried no non-blank field.
    ///
    /// Results in 400 Bad Request.
    #[error("Update requires at least one of nombre, apellido, telefono")]
    EmptyUpdate,

    /// Search term shorter than `MIN_SEARCH_TERM_LEN` characters after trimming.
    ///
    /// Results in 400 Bad Request. Rejected before any query runs.
    #[error("Search term '{0}' is too short")]
    InvalidSearchTerm(String),

    /// Listing order is not `<column> [ASC|DESC]` over a known column.
    ///
    /// Results in 400 Bad Request.
    #[error("Invalid sort order '{0}'")]
    InvalidSort(String),

    /// Listing offset beyond what storage can address.
    ///
    /// Results in 400 Bad Request.
    #[error("Invalid offset {0}")]
    InvalidOffset(u64),

    /// Date range whose start falls after its end.
    ///
    /// Results in 400 Bad Request.
    #[error("Invalid date range: {from} is after {to}")]
    InvalidDateRange { from: NaiveDate, to: NaiveDate },

    /// The storage unique constraint on the license rejected an insert.
    ///
    /// Results in 409 Conflict, including a summary of the registered driver when it
    /// could be loaded.
    #[error("A driver with license {license} already exists")]
    DuplicateLicense {
        license: String,
        existing: Option<ExistingDriver>,
    },

    /// No driver holds the requested license.
    ///
    /// Results in 404 Not Found.
    #[error("Driver with license {0} not found")]
    NotFound(String),
}

/// Converts driver errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For validation, empty update, search term, sort, offset and date range
///   errors
/// - 404 Not Found - For `NotFound`
/// - 409 Conflict - For `DuplicateLicense`
impl IntoResponse for DriverError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::Validation(details) => (
                StatusCode::BAD_REQUEST,
                Json(ValidationErrorDto {
                    error: "Datos inválidos".to_string(),
                    details,
                }),
            )
                .into_response(),
            Self::EmptyUpdate => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto::with_message(
                    "Datos insuficientes",
                    "Debe proporcionar al menos un campo para actualizar (nombre, apellido, telefono)",
                )),
            )
                .into_response(),
            Self::InvalidSearchTerm(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto::with_message(
                    "Término de búsqueda inválido",
                    format!(
                        "El término debe tener al menos {} caracteres",
                        MIN_SEARCH_TERM_LEN
                    ),
                )),
            )
                .into_response(),
            Self::InvalidSort(value) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto::with_message(
                    "Orden inválido",
                    format!(
                        "No se puede ordenar por '{}'. Use: id, nombre, apellido, licencia, telefono, fecha_registro, created_at o updated_at, seguido opcionalmente de ASC o DESC",
                        value
                    ),
                )),
            )
                .into_response(),
            Self::InvalidOffset(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto::with_message(
                    "Paginación inválida",
                    format!("El offset no puede ser mayor que {}", MAX_OFFSET),
                )),
            )
                .into_response(),
            Self::InvalidDateRange { .. } => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto::with_message(
                    "Rango de fechas inválido",
                    "La fecha inicial debe ser anterior o igual a la fecha final",
                )),
            )
                .into_response(),
            Self::DuplicateLicense { existing, .. } => (
                StatusCode::CONFLICT,
                Json(DuplicateLicenseDto {
                    error: "Conflicto".to_string(),
                    message: "Ya existe un conductor con esa licencia".to_string(),
                    existing: existing.map(ExistingDriver::into_dto),
                }),
            )
                .into_response(),
            Self::NotFound(license) => (
                StatusCode::NOT_FOUND,
                Json(DriverNotFoundDto {
                    error: "No encontrado".to_string(),
                    message: "Conductor no encontrado con la licencia proporcionada".to_string(),
                    license,
                }),
            )
                .into_response(),
        }
    }
}
