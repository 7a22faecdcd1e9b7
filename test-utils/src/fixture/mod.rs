//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for
//! unit tests of conversions and business logic that take entity models directly.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let driver = fixture::driver::entity();
//!
//! let other = fixture::driver::entity_builder()
//!     .license("XYZ999")
//!     .build();
//! ```

pub mod driver;
