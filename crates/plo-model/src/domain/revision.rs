use serde::{Deserialize, Serialize};

/// Opaque optimistic-concurrency token attached to every snapshot.
///
/// A commit succeeds only while the store's current token still equals the
/// one read at fetch time. Consumers compare tokens for equality and never
/// interpret the inner value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Revision(u64);

impl Revision {
    /// Token assigned to a freshly created object.
    pub const fn initial() -> Self {
        Self(1)
    }

    /// Next token after a successful write.
    pub const fn bump(self) -> Self {
        Self(self.0 + 1)
    }
}

impl Default for Revision {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::Revision;

    #[test]
    fn initial_is_default() {
        assert_eq!(Revision::default(), Revision::initial());
    }

    #[test]
    fn bump_produces_a_different_token() {
        let first = Revision::initial();
        let second = first.bump();

        assert_ne!(first, second);
        assert_ne!(second, second.bump());
    }

    #[test]
    fn serde_transparent_roundtrip() {
        let rev = Revision::initial().bump();
        let json = serde_json::to_string(&rev).unwrap();
        let back: Revision = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rev);
    }
}
