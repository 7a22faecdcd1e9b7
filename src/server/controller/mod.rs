//! HTTP request handlers.
//!
//! Controllers extract path, query and body data, hand it to the service layer as domain
//! parameters, and convert the results back into DTOs. Every handler carries a
//! `#[utoipa::path]` annotation so it appears in the generated OpenAPI document.

pub mod driver;
pub mod system;
