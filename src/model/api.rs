use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
    #[serde(
        rename = "mensaje",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub message: Option<String>,
}

impl ErrorDto {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: None,
        }
    }

    pub fn with_message(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: Some(message.into()),
        }
    }
}

/// Body returned when request fields fail validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorDto {
    pub error: String,
    #[serde(rename = "detalles")]
    pub details: Vec<String>,
}

/// Body returned for requests to routes that do not exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RouteNotFoundDto {
    pub error: String,
    #[serde(rename = "ruta")]
    pub route: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApiEndpointsDto {
    #[serde(rename = "conductores")]
    pub drivers: String,
    #[serde(rename = "documentacion")]
    pub documentation: String,
    #[serde(rename = "consultar")]
    pub lookup: String,
    #[serde(rename = "actualizar")]
    pub update: String,
    #[serde(rename = "eliminar")]
    pub delete: String,
}

/// API index served at the root path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApiIndexDto {
    #[serde(rename = "mensaje")]
    pub message: String,
    pub version: String,
    pub endpoints: ApiEndpointsDto,
}
