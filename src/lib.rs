//! Driver registry HTTP API.
//!
//! A CRUD service for registering and querying drivers by license, backed by a single
//! relational table.

pub mod model;
pub mod server;
