//! Inbound query body and its presence validation.

use serde::Deserialize;

use crate::error::{DomainError, DomainResult};

/// Raw body accepted by every mock data endpoint.
///
/// Both fields are optional at the decoding layer so that a missing field is
/// reported by [`QueryByDateRequest::validate`] rather than by the JSON decoder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QueryByDateRequest {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

/// A request whose required fields are known to be present.
///
/// The date format is not checked; any non-empty string is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedQuery {
    date: String,
    token: String,
}

impl QueryByDateRequest {
    pub fn new(date: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            date: Some(date.into()),
            token: Some(token.into()),
        }
    }

    /// Check that `date` and `token` are present and non-empty.
    ///
    /// `date` is checked first, so a body missing both reports `date`.
    pub fn validate(self) -> DomainResult<ValidatedQuery> {
        let date = required(self.date, "date")?;
        let token = required(self.token, "token")?;
        Ok(ValidatedQuery { date, token })
    }
}

impl ValidatedQuery {
    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

fn required(value: Option<String>, field: &'static str) -> DomainResult<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(DomainError::missing_field(field)),
    }
}
