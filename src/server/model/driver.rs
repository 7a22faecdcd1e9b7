//! Driver domain models and parameters.
//!
//! Provides the domain model for registered drivers along with the parameter types
//! used by the service and repository layers: the raw registration candidate, the
//! normalized create/update parameters, partial-update patches, and listing options.

use chrono::{DateTime, NaiveDate, Utc};
use std::str::FromStr;

use crate::{
    model::driver::{
        CreateDriverDto, DriverDto, DriverRangeDto, DriverSearchDto, DriverStatsDto,
        ExistingDriverDto, PaginatedDriversDto, UpdateDriverDto,
    },
    server::error::driver::{DriverError, MAX_OFFSET},
};

/// Default page size for driver listings.
pub const DEFAULT_LIMIT: u64 = 100;

/// Upper bound on page size for driver listings.
pub const MAX_LIMIT: u64 = 1000;

/// A registered driver.
#[derive(Debug, Clone, PartialEq)]
pub struct Driver {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    /// Upper-cased license, the business key used for lookups.
    pub license: String,
    pub phone: String,
    pub registered_on: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Driver {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::driver::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            license: entity.license,
            phone: entity.phone,
            registered_on: entity.registered_on,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts the domain model to a DTO for API responses.
    pub fn into_dto(self) -> DriverDto {
        DriverDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            license: self.license,
            phone: self.phone,
            registered_on: self.registered_on,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Summary of this driver for duplicate-license responses.
    pub fn summary(&self) -> ExistingDriver {
        ExistingDriver {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            registered_on: self.registered_on,
        }
    }
}

/// Name and registration date of a driver that already holds a license.
#[derive(Debug, Clone, PartialEq)]
pub struct ExistingDriver {
    pub first_name: String,
    pub last_name: String,
    pub registered_on: NaiveDate,
}

impl ExistingDriver {
    pub fn into_dto(self) -> ExistingDriverDto {
        ExistingDriverDto {
            first_name: self.first_name,
            last_name: self.last_name,
            registered_on: self.registered_on,
        }
    }
}

/// Unvalidated driver fields as received from a client.
///
/// Any field may be absent. Used as validator input for both registration and
/// updates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DriverCandidate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub license: Option<String>,
    pub phone: Option<String>,
}

impl DriverCandidate {
    pub fn from_dto(dto: CreateDriverDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            license: dto.license,
            phone: dto.phone,
        }
    }
}

/// Normalized parameters for inserting a driver.
///
/// Values are trimmed and the license is upper-cased before this is built.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateDriverParams {
    pub first_name: String,
    pub last_name: String,
    pub license: String,
    pub phone: String,
}

/// Columns written by an update. The license is never part of an update.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateDriverParams {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

/// Partial update as received from a client.
///
/// Blank values count as "not provided", so they keep the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DriverPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
}

impl DriverPatch {
    pub fn from_dto(dto: UpdateDriverDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            phone: dto.phone,
        }
    }

    /// True when no field carries a non-blank value.
    pub fn is_empty(&self) -> bool {
        [&self.first_name, &self.last_name, &self.phone]
            .iter()
            .all(|field| provided(field).is_none())
    }

    /// Fills unspecified fields from the stored driver and trims the rest.
    pub fn merge_onto(&self, existing: &Driver) -> UpdateDriverParams {
        UpdateDriverParams {
            first_name: provided(&self.first_name)
                .unwrap_or(&existing.first_name)
                .to_string(),
            last_name: provided(&self.last_name)
                .unwrap_or(&existing.last_name)
                .to_string(),
            phone: provided(&self.phone).unwrap_or(&existing.phone).to_string(),
        }
    }
}

fn provided(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Snapshot of a driver before and after an update.
#[derive(Debug, Clone, PartialEq)]
pub struct DriverUpdate {
    pub before: Driver,
    pub after: Driver,
}

/// Columns a listing may be ordered by.
///
/// Parsed from the Spanish column names the API exposes; anything outside this set is
/// rejected instead of being placed in the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverSortColumn {
    Id,
    FirstName,
    LastName,
    License,
    Phone,
    RegisteredOn,
    CreatedAt,
    UpdatedAt,
}

impl DriverSortColumn {
    pub fn column(self) -> entity::driver::Column {
        use entity::driver::Column;

        match self {
            Self::Id => Column::Id,
            Self::FirstName => Column::FirstName,
            Self::LastName => Column::LastName,
            Self::License => Column::License,
            Self::Phone => Column::Phone,
            Self::RegisteredOn => Column::RegisteredOn,
            Self::CreatedAt => Column::CreatedAt,
            Self::UpdatedAt => Column::UpdatedAt,
        }
    }

    fn from_api_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "id" => Some(Self::Id),
            "nombre" => Some(Self::FirstName),
            "apellido" => Some(Self::LastName),
            "licencia" => Some(Self::License),
            "telefono" => Some(Self::Phone),
            "fecha_registro" => Some(Self::RegisteredOn),
            "created_at" => Some(Self::CreatedAt),
            "updated_at" => Some(Self::UpdatedAt),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn order(self) -> sea_orm::Order {
        match self {
            Self::Asc => sea_orm::Order::Asc,
            Self::Desc => sea_orm::Order::Desc,
        }
    }
}

/// Validated ordering for driver listings, e.g. `fecha_registro DESC` or `nombre`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverSort {
    pub column: DriverSortColumn,
    pub direction: SortDirection,
}

impl Default for DriverSort {
    fn default() -> Self {
        Self {
            column: DriverSortColumn::RegisteredOn,
            direction: SortDirection::Desc,
        }
    }
}

impl FromStr for DriverSort {
    type Err = DriverError;

    /// Parses `<column>` or `<column> <ASC|DESC>`; the direction defaults to ascending.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || DriverError::InvalidSort(value.to_string());

        let mut parts = value.split_whitespace();
        let column = parts
            .next()
            .and_then(DriverSortColumn::from_api_name)
            .ok_or_else(invalid)?;

        let direction = match parts.next() {
            None => SortDirection::Asc,
            Some(dir) if dir.eq_ignore_ascii_case("asc") => SortDirection::Asc,
            Some(dir) if dir.eq_ignore_ascii_case("desc") => SortDirection::Desc,
            Some(_) => return Err(invalid()),
        };

        if parts.next().is_some() {
            return Err(invalid());
        }

        Ok(Self { column, direction })
    }
}

/// Resolved listing options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListDriversParams {
    pub limit: u64,
    pub offset: u64,
    pub sort: DriverSort,
}

impl Default for ListDriversParams {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
            sort: DriverSort::default(),
        }
    }
}

impl ListDriversParams {
    /// Applies defaults to raw query values and parses the sort order.
    ///
    /// The limit is clamped to `1..=MAX_LIMIT`. Offsets above `MAX_OFFSET` are rejected.
    pub fn from_query(
        limit: Option<u64>,
        offset: Option<u64>,
        sort: Option<&str>,
    ) -> Result<Self, DriverError> {
        let sort = match sort.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => raw.parse()?,
            None => DriverSort::default(),
        };

        let offset = offset.unwrap_or(0);
        if offset > MAX_OFFSET {
            return Err(DriverError::InvalidOffset(offset));
        }

        Ok(Self {
            limit: limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT),
            offset,
            sort,
        })
    }

    /// One-based page number for the current offset.
    pub fn page(&self) -> u64 {
        self.offset / self.limit + 1
    }
}

/// One page of drivers plus the total row count.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedDrivers {
    pub drivers: Vec<Driver>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

impl PaginatedDrivers {
    pub fn into_dto(self) -> PaginatedDriversDto {
        PaginatedDriversDto {
            total: self.total,
            count: self.drivers.len(),
            page: self.page,
            per_page: self.per_page,
            drivers: self.drivers.into_iter().map(Driver::into_dto).collect(),
        }
    }
}

/// Drivers whose name matched a search term.
#[derive(Debug, Clone, PartialEq)]
pub struct DriverSearch {
    /// The term as applied, after trimming.
    pub term: String,
    pub drivers: Vec<Driver>,
}

impl DriverSearch {
    pub fn into_dto(self) -> DriverSearchDto {
        DriverSearchDto {
            term: self.term,
            count: self.drivers.len(),
            drivers: self.drivers.into_iter().map(Driver::into_dto).collect(),
        }
    }
}

/// Drivers registered within an inclusive date range.
#[derive(Debug, Clone, PartialEq)]
pub struct DriverRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub drivers: Vec<Driver>,
}

impl DriverRange {
    pub fn into_dto(self) -> DriverRangeDto {
        DriverRangeDto {
            from: self.from,
            to: self.to,
            count: self.drivers.len(),
            drivers: self.drivers.into_iter().map(Driver::into_dto).collect(),
        }
    }
}

/// Registration counts over recent windows.
#[derive(Debug, Clone, PartialEq)]
pub struct DriverStats {
    pub total: u64,
    pub last_7_days: u64,
    pub last_30_days: u64,
    pub generated_at: DateTime<Utc>,
}

impl DriverStats {
    pub fn into_dto(self) -> DriverStatsDto {
        DriverStatsDto {
            total: self.total,
            last_7_days: self.last_7_days,
            last_30_days: self.last_30_days,
            generated_at: self.generated_at,
        }
    }
}
