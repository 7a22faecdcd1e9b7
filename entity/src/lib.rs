//! SeaORM entity models for the driver registry schema.

pub mod prelude;

pub mod driver;
