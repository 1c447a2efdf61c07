//! `restlab-core` — request and payload model for the mock data endpoints.
//!
//! This crate is pure: no HTTP, no token lookups.

pub mod error;
pub mod payload;
pub mod request;

pub use error::{DomainError, DomainResult};
pub use payload::{HeartRate, Payload, ResourceKind, StockPrice, Weather};
pub use request::{QueryByDateRequest, ValidatedQuery};
