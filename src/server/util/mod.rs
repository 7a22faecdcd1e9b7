//! Shared helpers used across the service layer.

pub mod validation;
