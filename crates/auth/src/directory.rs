//! In-memory token directory.

use crate::Identity;

/// Read-only, insertion-ordered mapping from token to identity.
///
/// Built once at startup and shared behind an `Arc`; there is no mutation API.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenDirectory {
    entries: Vec<Identity>,
}

impl TokenDirectory {
    pub fn new(entries: Vec<Identity>) -> Self {
        Self { entries }
    }

    /// The two demo users the service ships with.
    pub fn builtin() -> Self {
        Self::new(vec![
            Identity::new("jane.doe@example.com", "2347FD2F854ECC36E6BD335DDD88F"),
            Identity::new("john.smith@example.com", "82C89F7F83E5BFA34297FC9E59985"),
        ])
    }

    /// First identity (in insertion order) holding `token`.
    pub fn lookup(&self, token: &str) -> Option<&Identity> {
        self.entries.iter().find(|identity| identity.token() == token)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<Identity> for TokenDirectory {
    fn from_iter<I: IntoIterator<Item = Identity>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_two_users() {
        let dir = TokenDirectory::builtin();
        assert_eq!(dir.len(), 2);
        assert!(dir.lookup("2347FD2F854ECC36E6BD335DDD88F").is_some());
        assert!(dir.lookup("82C89F7F83E5BFA34297FC9E59985").is_some());
    }

    #[test]
    fn lookup_is_exact_match() {
        let dir = TokenDirectory::builtin();
        assert!(dir.lookup("2347fd2f854ecc36e6bd335ddd88f").is_none());
        assert!(dir.lookup("2347FD2F854ECC36E6BD335DDD88").is_none());
        assert!(dir.lookup("").is_none());
    }

    #[test]
    fn first_match_wins_on_duplicate_tokens() {
        let dir: TokenDirectory = [
            Identity::new("first@example.com", "T"),
            Identity::new("second@example.com", "T"),
        ]
        .into_iter()
        .collect();

        assert_eq!(dir.lookup("T").map(Identity::email), Some("first@example.com"));
    }

    #[test]
    fn empty_directory_matches_nothing() {
        let dir = TokenDirectory::default();
        assert!(dir.is_empty());
        assert!(dir.lookup("anything").is_none());
    }
}
