//! Data transfer objects exchanged over the HTTP API.
//!
//! Field names on the wire are Spanish (`nombre`, `licencia`, ...) to stay compatible
//! with existing API clients; the Rust side uses English names and serde renames.

pub mod api;
pub mod driver;
