use thiserror::Error;

use crate::{Identity, TokenDirectory};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid token")]
    InvalidToken,
}

/// Resolve `token` to the identity that owns it.
///
/// - No IO
/// - No caching, expiry or revocation
/// - Linear scan in directory order
pub fn authorize<'a>(
    directory: &'a TokenDirectory,
    token: &str,
) -> Result<&'a Identity, AuthError> {
    match directory.lookup(token) {
        Some(identity) => {
            tracing::debug!(email = identity.email(), "token accepted");
            Ok(identity)
        }
        None => Err(AuthError::InvalidToken),
    }
}
