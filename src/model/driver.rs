use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DriverDto {
    pub id: i32,
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
    #[serde(rename = "licencia")]
    pub license: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    #[serde(rename = "fecha_registro")]
    pub registered_on: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Registration payload.
///
/// Every field is optional at the JSON level so that missing fields surface as
/// validation messages rather than deserialization failures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateDriverDto {
    #[serde(rename = "nombre", default)]
    pub first_name: Option<String>,
    #[serde(rename = "apellido", default)]
    pub last_name: Option<String>,
    #[serde(rename = "licencia", default)]
    pub license: Option<String>,
    #[serde(rename = "telefono", default)]
    pub phone: Option<String>,
}

/// Partial update payload. The license is not updatable and is ignored if sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateDriverDto {
    #[serde(rename = "nombre", default)]
    pub first_name: Option<String>,
    #[serde(rename = "apellido", default)]
    pub last_name: Option<String>,
    #[serde(rename = "telefono", default)]
    pub phone: Option<String>,
}

/// A driver wrapped with a human-readable message, used by create and lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DriverMessageDto {
    #[serde(rename = "mensaje")]
    pub message: String,
    #[serde(rename = "conductor")]
    pub driver: DriverDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdatedDriverDto {
    #[serde(rename = "mensaje")]
    pub message: String,
    #[serde(rename = "conductor_anterior")]
    pub before: DriverDto,
    #[serde(rename = "conductor_actualizado")]
    pub after: DriverDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DeletedDriverDto {
    #[serde(rename = "mensaje")]
    pub message: String,
    #[serde(rename = "conductor_eliminado")]
    pub driver: DriverDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedDriversDto {
    pub total: u64,
    #[serde(rename = "cantidad")]
    pub count: usize,
    /// One-based page number derived from `offset / limit`.
    #[serde(rename = "pagina")]
    pub page: u64,
    #[serde(rename = "por_pagina")]
    pub per_page: u64,
    #[serde(rename = "conductores")]
    pub drivers: Vec<DriverDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DriverSearchDto {
    #[serde(rename = "termino")]
    pub term: String,
    #[serde(rename = "cantidad")]
    pub count: usize,
    #[serde(rename = "conductores")]
    pub drivers: Vec<DriverDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DriverRangeDto {
    #[serde(rename = "desde")]
    pub from: NaiveDate,
    #[serde(rename = "hasta")]
    pub to: NaiveDate,
    #[serde(rename = "cantidad")]
    pub count: usize,
    #[serde(rename = "conductores")]
    pub drivers: Vec<DriverDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DriverStatsDto {
    #[serde(rename = "total_conductores")]
    pub total: u64,
    #[serde(rename = "registros_ultimos_7_dias")]
    pub last_7_days: u64,
    #[serde(rename = "registros_ultimos_30_dias")]
    pub last_30_days: u64,
    #[serde(rename = "fecha_consulta")]
    pub generated_at: DateTime<Utc>,
}

/// Body returned when no driver holds the requested license.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DriverNotFoundDto {
    pub error: String,
    #[serde(rename = "mensaje")]
    pub message: String,
    #[serde(rename = "licencia")]
    pub license: String,
}

/// Summary of the already-registered driver returned alongside a 409.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ExistingDriverDto {
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
    #[serde(rename = "fecha_registro")]
    pub registered_on: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DuplicateLicenseDto {
    pub error: String,
    #[serde(rename = "mensaje")]
    pub message: String,
    #[serde(
        rename = "conductor_existente",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub existing: Option<ExistingDriverDto>,
}
