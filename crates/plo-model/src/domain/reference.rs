use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Namespaced identifier of a workload unit.
///
/// Immutable once constructed; the core treats it as opaque beyond equality
/// and ordering. Displayed as `namespace/name`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRef {
    namespace: String,
    name: String,
}

impl ResourceRef {
    /// Create a new reference from namespace and name.
    pub fn new<N, M>(namespace: N, name: M) -> Self
    where
        N: Into<String>,
        M: Into<String>,
    {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Get the namespace.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Get the resource name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

impl FromStr for ResourceRef {
    type Err = ModelError;

    /// Parse a `namespace/name` pair.
    ///
    /// Both segments must be non-empty and the separator must appear
    /// exactly once.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(2, '/');
        let namespace = parts.next().unwrap_or_default();
        let name = parts.next().unwrap_or_default();

        if namespace.is_empty() || name.is_empty() || name.contains('/') {
            return Err(ModelError::InvalidReference(s.to_string()));
        }
        Ok(Self::new(namespace, name))
    }
}

#[cfg(test)]
mod tests {
    use super::ResourceRef;
    use crate::error::ModelError;

    #[test]
    fn new_sets_namespace_and_name() {
        let reference = ResourceRef::new("default", "web-1");
        assert_eq!(reference.namespace(), "default");
        assert_eq!(reference.name(), "web-1");
    }

    #[test]
    fn display_joins_with_slash() {
        let reference = ResourceRef::new("default", "web-1");
        assert_eq!(reference.to_string(), "default/web-1");
    }

    #[test]
    fn parse_accepts_namespace_name() {
        let reference: ResourceRef = "default/web-1".parse().unwrap();
        assert_eq!(reference, ResourceRef::new("default", "web-1"));
    }

    #[test]
    fn parse_rejects_malformed_input() {
        for bad in ["", "no-separator", "ns/", "/name", "a/b/c"] {
            let res = bad.parse::<ResourceRef>();
            assert!(
                matches!(res, Err(ModelError::InvalidReference(_))),
                "expected InvalidReference for {bad:?}"
            );
        }
    }

    #[test]
    fn equality_and_ordering() {
        let a = ResourceRef::new("default", "web-1");
        let b = ResourceRef::new("default", "web-1");
        let c = ResourceRef::new("default", "web-2");

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a < c);
    }

    #[test]
    fn serde_roundtrip_json() {
        let reference = ResourceRef::new("default", "web-1");
        let json = serde_json::to_string(&reference).unwrap();
        assert!(json.contains("\"namespace\":\"default\""));
        assert!(json.contains("\"name\":\"web-1\""));

        let back: ResourceRef = serde_json::from_str(&json).unwrap();
        assert_eq!(back, reference);
    }
}
