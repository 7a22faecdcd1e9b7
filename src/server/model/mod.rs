//! Domain models and operation parameters used between the service and data layers.

pub mod driver;
