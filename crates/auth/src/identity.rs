/// A caller known to the token directory.
///
/// Immutable once built. The token is kept out of `Debug` output so identities
/// can be logged freely.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Identity {
    email: String,
    token: String,
}

impl Identity {
    pub fn new(email: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            token: token.into(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

impl core::fmt::Debug for Identity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Identity")
            .field("email", &self.email)
            .field("token", &"<redacted>")
            .finish()
    }
}

impl core::fmt::Display for Identity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.email)
    }
}
