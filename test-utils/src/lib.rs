//! Driver Registry Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the driver
//! registry. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, plus factories and fixtures for driver records.
//!
//! # Overview
//!
//! The test utilities consist of these main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Inserts driver rows with sensible defaults
//! - **fixture**: Builds driver entity models in memory, without a database
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_driver_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_driver_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     let driver = factory::driver::create_driver(db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
