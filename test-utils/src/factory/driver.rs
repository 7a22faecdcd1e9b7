//! Driver factory for creating test driver rows.
//!
//! This module provides factory methods for inserting driver entities with sensible
//! defaults. The factory supports customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test drivers with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::driver::DriverFactory;
///
/// let driver = DriverFactory::new(&db)
///     .first_name("Ana")
///     .last_name("Gomez")
///     .registered_on(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
///     .build()
///     .await?;
/// ```
pub struct DriverFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
    license: String,
    phone: String,
    registered_on: NaiveDate,
}

impl<'a> DriverFactory<'a> {
    /// Creates a new DriverFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"Driver{id}"`
    /// - last_name: `"Tester"`
    /// - license: `"LIC{id}"` where id is auto-incremented
    /// - phone: `"555{id}"`
    /// - registered_on: today (UTC)
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `DriverFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: format!("Driver{}", id),
            last_name: "Tester".to_string(),
            license: format!("LIC{}", id),
            phone: format!("555{:04}", id % 10_000),
            registered_on: Utc::now().date_naive(),
        }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    /// Sets the license. Stored exactly as given, so pass it upper-cased to
    /// mirror what the registration flow writes.
    pub fn license(mut self, license: impl Into<String>) -> Self {
        self.license = license.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Backdates the registration, for tests around date windows.
    pub fn registered_on(mut self, registered_on: NaiveDate) -> Self {
        self.registered_on = registered_on;
        self
    }

    /// Builds and inserts the driver entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::driver::Model)` - Created driver entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::driver::Model, DbErr> {
        let now = Utc::now();
        entity::driver::ActiveModel {
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            license: ActiveValue::Set(self.license),
            phone: ActiveValue::Set(self.phone),
            registered_on: ActiveValue::Set(self.registered_on),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a driver with default values.
///
/// Shorthand for `DriverFactory::new(db).build().await`.
pub async fn create_driver(db: &DatabaseConnection) -> Result<entity::driver::Model, DbErr> {
    DriverFactory::new(db).build().await
}
