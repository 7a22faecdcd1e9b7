//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer. They
//! are responsible for:
//!
//! - **Business Logic**: Validation, normalization and partial-update merging
//! - **Orchestration**: Coordinating repository calls for a single use case
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Error Mapping**: Turning absent rows into domain not-found errors

pub mod driver;
