use chrono::{DateTime, Days, NaiveDate, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::driver::DriverRepository,
    error::{driver::DriverError, AppError},
    model::driver::{
        CreateDriverParams, Driver, DriverCandidate, DriverPatch, DriverRange, DriverSearch,
        DriverStats, DriverUpdate, ExistingDriver, ListDriversParams, PaginatedDrivers, MAX_LIMIT,
    },
    util::validation::{normalize_license, validate, validate_search_term},
};

pub struct DriverService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DriverService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates and registers a new driver.
    ///
    /// Fields are trimmed and the license upper-cased before insert. When the license is
    /// already taken, the existing driver is loaded to enrich the conflict error.
    ///
    /// # Returns
    /// - `Ok(Driver)` - The registered driver
    /// - `Err(DriverError::Validation)` - One or more fields failed validation
    /// - `Err(DriverError::DuplicateLicense)` - License already registered
    pub async fn register(&self, candidate: DriverCandidate) -> Result<Driver, AppError> {
        let errors = validate(&candidate);
        if !errors.is_empty() {
            return Err(DriverError::Validation(errors).into());
        }

        let params = CreateDriverParams {
            first_name: trimmed(candidate.first_name),
            last_name: trimmed(candidate.last_name),
            license: normalize_license(candidate.license.as_deref().unwrap_or_default()),
            phone: trimmed(candidate.phone),
        };

        let repo = DriverRepository::new(self.db);

        match repo.create(params).await {
            Ok(driver) => {
                tracing::info!("Registered driver {} (id {})", driver.license, driver.id);
                Ok(driver)
            }
            Err(AppError::DriverErr(DriverError::DuplicateLicense { license, .. })) => {
                let existing = self.existing_summary(&license).await;

                Err(DriverError::DuplicateLicense { license, existing }.into())
            }
            Err(err) => Err(err),
        }
    }

    /// Loads the summary of the driver already holding `license`.
    ///
    /// A failed lookup is logged and yields `None`, so the conflict is still reported.
    pub(super) async fn existing_summary(&self, license: &str) -> Option<ExistingDriver> {
        match DriverRepository::new(self.db).get_by_license(license).await {
            Ok(driver) => driver.map(|driver| driver.summary()),
            Err(err) => {
                tracing::warn!("Failed to load driver holding license {}: {}", license, err);
                None
            }
        }
    }

    /// Gets one page of drivers along with the total count.
    pub async fn list(&self, params: ListDriversParams) -> Result<PaginatedDrivers, AppError> {
        let repo = DriverRepository::new(self.db);

        let drivers = repo.list_all(&params).await?;
        let total = repo.count().await?;

        Ok(PaginatedDrivers {
            drivers,
            total,
            page: params.page(),
            per_page: params.limit,
        })
    }

    /// Gets a driver by license, matching case-insensitively.
    pub async fn get(&self, license: &str) -> Result<Driver, AppError> {
        let license = normalize_license(license);
        let repo = DriverRepository::new(self.db);

        repo.get_by_license(&license)
            .await?
            .ok_or_else(|| DriverError::NotFound(license).into())
    }

    /// Searches first and last names for a term of at least two characters.
    pub async fn search(&self, term: &str) -> Result<DriverSearch, AppError> {
        let term = validate_search_term(term)?;
        let repo = DriverRepository::new(self.db);

        let drivers = repo.search(&term).await?;

        Ok(DriverSearch { term, drivers })
    }

    /// Applies a partial update to the driver holding `license`.
    ///
    /// Missing or blank fields keep their stored values. The merged record is validated
    /// before anything is written.
    ///
    /// # Returns
    /// - `Ok(DriverUpdate)` - Driver before and after the update
    /// - `Err(DriverError::EmptyUpdate)` - No field carried a value
    /// - `Err(DriverError::NotFound)` - No such driver, or it was deleted mid-update
    /// - `Err(DriverError::Validation)` - Merged values failed validation
    pub async fn update(
        &self,
        license: &str,
        patch: DriverPatch,
    ) -> Result<DriverUpdate, AppError> {
        if patch.is_empty() {
            return Err(DriverError::EmptyUpdate.into());
        }

        let license = normalize_license(license);
        let repo = DriverRepository::new(self.db);

        let Some(before) = repo.get_by_license(&license).await? else {
            return Err(DriverError::NotFound(license).into());
        };

        let params = patch.merge_onto(&before);

        let errors = validate(&DriverCandidate {
            first_name: Some(params.first_name.clone()),
            last_name: Some(params.last_name.clone()),
            license: Some(license.clone()),
            phone: Some(params.phone.clone()),
        });
        if !errors.is_empty() {
            return Err(DriverError::Validation(errors).into());
        }

        let Some(after) = repo.update(&license, params).await? else {
            return Err(DriverError::NotFound(license).into());
        };

        tracing::info!("Updated driver {}", license);

        Ok(DriverUpdate { before, after })
    }

    /// Deletes the driver holding `license` and returns it.
    pub async fn delete(&self, license: &str) -> Result<Driver, AppError> {
        let license = normalize_license(license);
        let repo = DriverRepository::new(self.db);

        let Some(driver) = repo.delete(&license).await? else {
            return Err(DriverError::NotFound(license).into());
        };

        tracing::info!("Deleted driver {} (id {})", driver.license, driver.id);

        Ok(driver)
    }

    /// Counts all drivers and those registered in the last 7 and 30 days relative to `now`.
    ///
    /// A window of N days covers registrations dated after `today - N`, so a driver
    /// registered exactly N days ago falls outside it. The windows are computed over the
    /// newest `MAX_LIMIT` registrations only.
    pub async fn stats(&self, now: DateTime<Utc>) -> Result<DriverStats, AppError> {
        let repo = DriverRepository::new(self.db);

        let total = repo.count().await?;
        let recent = repo
            .list_all(&ListDriversParams {
                limit: MAX_LIMIT,
                ..Default::default()
            })
            .await?;

        let today = now.date_naive();
        let days_ago = |days: u64| {
            today
                .checked_sub_days(Days::new(days))
                .unwrap_or(NaiveDate::MIN)
        };

        let registered_since = |cutoff: NaiveDate| {
            recent
                .iter()
                .filter(|driver| driver.registered_on > cutoff)
                .count() as u64
        };

        Ok(DriverStats {
            total,
            last_7_days: registered_since(days_ago(7)),
            last_30_days: registered_since(days_ago(30)),
            generated_at: now,
        })
    }

    /// Gets drivers registered between two dates, both inclusive.
    pub async fn registered_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<DriverRange, AppError> {
        if from > to {
            return Err(DriverError::InvalidDateRange { from, to }.into());
        }

        let repo = DriverRepository::new(self.db);
        let drivers = repo.get_registered_between(from, to).await?;

        Ok(DriverRange { from, to, drivers })
    }
}

fn trimmed(field: Option<String>) -> String {
    field.as_deref().unwrap_or_default().trim().to_string()
}
