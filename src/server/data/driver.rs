use chrono::{NaiveDate, Utc};
use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, SqlErr,
};

use crate::server::{
    error::{driver::DriverError, AppError},
    model::driver::{CreateDriverParams, Driver, ListDriversParams, UpdateDriverParams},
};

pub struct DriverRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DriverRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new driver registered today.
    ///
    /// Expects normalized params (trimmed, license upper-cased). Uniqueness of the license is
    /// left to the storage unique index, so there is no check-then-insert window.
    ///
    /// # Returns
    /// - `Ok(Driver)` - The stored row, including its generated id
    /// - `Err(AppError::DriverErr(DuplicateLicense))` - License already registered
    /// - `Err(AppError::DbErr)` - Any other storage failure
    pub async fn create(&self, params: CreateDriverParams) -> Result<Driver, AppError> {
        let now = Utc::now();
        let license = params.license.clone();

        let result = entity::driver::ActiveModel {
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            license: ActiveValue::Set(params.license),
            phone: ActiveValue::Set(params.phone),
            registered_on: ActiveValue::Set(now.date_naive()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await;

        match result {
            Ok(entity) => Ok(Driver::from_entity(entity)),
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(DriverError::DuplicateLicense {
                    license,
                    existing: None,
                }
                .into())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Gets one page of drivers in the requested order.
    ///
    /// Rows sharing a sort value are ordered by id in the same direction so consecutive
    /// pages never overlap.
    pub async fn list_all(&self, params: &ListDriversParams) -> Result<Vec<Driver>, DbErr> {
        let order = params.sort.direction.order();

        let entities = entity::prelude::Driver::find()
            .order_by(params.sort.column.column(), order.clone())
            .order_by(entity::driver::Column::Id, order)
            .limit(params.limit)
            .offset(params.offset)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Driver::from_entity).collect())
    }

    /// Gets a driver by its (upper-cased) license.
    pub async fn get_by_license(&self, license: &str) -> Result<Option<Driver>, DbErr> {
        let entity = entity::prelude::Driver::find()
            .filter(entity::driver::Column::License.eq(license))
            .one(self.db)
            .await?;

        Ok(entity.map(Driver::from_entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Driver>, DbErr> {
        let entity = entity::prelude::Driver::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Driver::from_entity))
    }

    /// Case-insensitive substring search over first and last names.
    ///
    /// Uses `LOWER(col) LIKE` so the query runs unchanged on Postgres and SQLite. Results
    /// are ordered by first name, then last name.
    ///
    /// SQLite's `LOWER` folds ASCII letters only, so there a stored "Ángel" is not found by
    /// "ángel". Accented letters already in the same case still match. Postgres folds both.
    pub async fn search(&self, term: &str) -> Result<Vec<Driver>, DbErr> {
        use entity::driver::Column;

        let pattern = format!("%{}%", term.to_lowercase());
        let first_name = Expr::expr(Func::lower(Expr::col(Column::FirstName)));
        let last_name = Expr::expr(Func::lower(Expr::col(Column::LastName)));

        let entities = entity::prelude::Driver::find()
            .filter(
                Condition::any()
                    .add(first_name.like(pattern.as_str()))
                    .add(last_name.like(pattern.as_str())),
            )
            .order_by_asc(Column::FirstName)
            .order_by_asc(Column::LastName)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Driver::from_entity).collect())
    }

    /// Overwrites the mutable columns of the driver holding `license` and bumps `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Some(Driver))` - The row as stored after the update
    /// - `Ok(None)` - No row matched, e.g. it was deleted concurrently
    /// - `Err(DbErr)` - Database error
    pub async fn update(
        &self,
        license: &str,
        params: UpdateDriverParams,
    ) -> Result<Option<Driver>, DbErr> {
        let result = entity::prelude::Driver::update_many()
            .set(entity::driver::ActiveModel {
                first_name: ActiveValue::Set(params.first_name),
                last_name: ActiveValue::Set(params.last_name),
                phone: ActiveValue::Set(params.phone),
                updated_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            })
            .filter(entity::driver::Column::License.eq(license))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.get_by_license(license).await
    }

    /// Deletes the driver holding `license`.
    ///
    /// # Returns
    /// - `Ok(Some(Driver))` - The row that was removed
    /// - `Ok(None)` - No such driver, or it was removed between the read and the delete
    /// - `Err(DbErr)` - Database error
    pub async fn delete(&self, license: &str) -> Result<Option<Driver>, DbErr> {
        let Some(driver) = self.get_by_license(license).await? else {
            return Ok(None);
        };

        let result = entity::prelude::Driver::delete_many()
            .filter(entity::driver::Column::License.eq(license))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        Ok(Some(driver))
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Driver::find().count(self.db).await
    }

    /// Checks whether a license is registered without loading the row.
    pub async fn exists_by_license(&self, license: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Driver::find()
            .filter(entity::driver::Column::License.eq(license))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets drivers registered within `from..=to`, newest first.
    pub async fn get_registered_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Driver>, DbErr> {
        let entities = entity::prelude::Driver::find()
            .filter(entity::driver::Column::RegisteredOn.between(from, to))
            .order_by_desc(entity::driver::Column::RegisteredOn)
            .order_by_desc(entity::driver::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Driver::from_entity).collect())
    }
}
