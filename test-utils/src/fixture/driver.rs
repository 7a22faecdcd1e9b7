//! Driver fixtures for creating in-memory test data.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use entity::driver;

/// Default test driver first name.
pub const DEFAULT_FIRST_NAME: &str = "Ana";

/// Default test driver last name.
pub const DEFAULT_LAST_NAME: &str = "Gomez";

/// Default test driver license.
pub const DEFAULT_LICENSE: &str = "ABC123";

/// Default test driver phone.
pub const DEFAULT_PHONE: &str = "5551234";

/// Fixed registration date used by fixtures so assertions stay deterministic.
pub fn default_registered_on() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
}

/// Fixed audit timestamp used by fixtures.
pub fn default_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, 10, 30, 0).unwrap()
}

/// Creates a driver entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - first_name: `"Ana"`
/// - last_name: `"Gomez"`
/// - license: `"ABC123"`
/// - phone: `"5551234"`
/// - registered_on: `2025-01-15`
/// - created_at / updated_at: `2025-01-15T10:30:00Z`
pub fn entity() -> driver::Model {
    entity_builder().build()
}

/// Creates a driver entity builder for customization.
pub fn entity_builder() -> DriverEntityBuilder {
    DriverEntityBuilder::default()
}

/// Builder for creating customized driver entity models.
pub struct DriverEntityBuilder {
    id: i32,
    first_name: String,
    last_name: String,
    license: String,
    phone: String,
    registered_on: NaiveDate,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Default for DriverEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            first_name: DEFAULT_FIRST_NAME.to_string(),
            last_name: DEFAULT_LAST_NAME.to_string(),
            license: DEFAULT_LICENSE.to_string(),
            phone: DEFAULT_PHONE.to_string(),
            registered_on: default_registered_on(),
            created_at: default_timestamp(),
            updated_at: default_timestamp(),
        }
    }
}

impl DriverEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn license(mut self, license: impl Into<String>) -> Self {
        self.license = license.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn registered_on(mut self, registered_on: NaiveDate) -> Self {
        self.registered_on = registered_on;
        self
    }

    pub fn updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = updated_at;
        self
    }

    /// Builds the driver entity model.
    ///
    /// # Returns
    /// - `driver::Model` - In-memory driver entity with configured values
    pub fn build(self) -> driver::Model {
        driver::Model {
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
}
