//! Database repository layer.
//!
//! Repositories wrap a borrowed `DatabaseConnection` and perform the SQL operations for
//! one table each. They use SeaORM entity models internally and return domain models, so
//! the service layer never sees entity types.

pub mod driver;

#[cfg(test)]
mod test;
