//! `restlab-auth` — static token authorization.
//!
//! This crate is intentionally decoupled from HTTP: it knows about tokens and
//! identities, not requests.

pub mod authorize;
pub mod directory;
pub mod identity;

pub use authorize::{AuthError, authorize};
pub use directory::TokenDirectory;
pub use identity::Identity;
