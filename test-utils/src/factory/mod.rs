//! Factory methods for creating test data.
//!
//! Factories insert driver rows with sensible defaults, reducing boilerplate in tests.
//! Every factory-created driver gets a unique license so several can coexist in one
//! database without tripping the unique constraint.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let driver = factory::driver::create_driver(&db).await?;
//!
//! // Customize through the builder
//! let driver = factory::driver::DriverFactory::new(&db)
//!     .first_name("Ana")
//!     .license("ABC123")
//!     .build()
//!     .await?;
//! ```

pub mod driver;
pub mod helpers;

pub use driver::create_driver;
