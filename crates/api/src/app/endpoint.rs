use restlab_core::ResourceKind;

/// How a route surfaces a request that fails presence validation.
///
/// Token failures are not affected by the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorPolicy {
    /// 400 with a JSON error body.
    ClientError,
    /// 500 with a JSON error body.
    ServerError,
    /// 200 with the body `"Invalid request"`.
    MaskedOk,
}

impl ErrorPolicy {
    pub const fn all() -> &'static [ErrorPolicy] {
        &[
            ErrorPolicy::ClientError,
            ErrorPolicy::ServerError,
            ErrorPolicy::MaskedOk,
        ]
    }

    /// Numeric suffix of the compatibility route using this policy.
    pub fn variant(&self) -> u8 {
        match self {
            ErrorPolicy::ClientError => 1,
            ErrorPolicy::ServerError => 2,
            ErrorPolicy::MaskedOk => 3,
        }
    }
}

/// Per-route handler configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Endpoint {
    pub kind: ResourceKind,
    pub policy: ErrorPolicy,
    numbered: bool,
}

impl Endpoint {
    /// `/<kind>`: validation and token failures are both client errors.
    pub fn unified(kind: ResourceKind) -> Self {
        Self {
            kind,
            policy: ErrorPolicy::ClientError,
            numbered: false,
        }
    }

    /// `/<kind><n>` compatibility route.
    pub fn variant(kind: ResourceKind, policy: ErrorPolicy) -> Self {
        Self {
            kind,
            policy,
            numbered: true,
        }
    }

    pub fn path(&self) -> String {
        if self.numbered {
            format!("/{}{}", self.kind, self.policy.variant())
        } else {
            format!("/{}", self.kind)
        }
    }

    /// Every served endpoint: one unified route plus three numbered ones per kind.
    pub fn all() -> Vec<Endpoint> {
        ResourceKind::all()
            .iter()
            .flat_map(|kind| {
                std::iter::once(Endpoint::unified(*kind)).chain(
                    ErrorPolicy::all()
                        .iter()
                        .map(move |policy| Endpoint::variant(*kind, *policy)),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_follow_kind_and_variant() {
        assert_eq!(Endpoint::unified(ResourceKind::Weather).path(), "/weather");
        assert_eq!(
            Endpoint::variant(ResourceKind::StockPrice, ErrorPolicy::ServerError).path(),
            "/stockPrice2"
        );
        assert_eq!(
            Endpoint::variant(ResourceKind::HeartRate, ErrorPolicy::MaskedOk).path(),
            "/heartRate3"
        );
    }

    #[test]
    fn twelve_distinct_routes() {
        let mut paths: Vec<_> = Endpoint::all().iter().map(Endpoint::path).collect();
        assert_eq!(paths.len(), 12);
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), 12);
    }
}
