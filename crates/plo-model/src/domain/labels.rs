use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Structured key–value labels based on [`BTreeMap`].
///
/// Always constructed non-nil: there is no "absent map" state, so callers
/// never need a lazy-initialization step before inserting.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Labels(BTreeMap<String, String>);

impl Labels {
    /// Create an empty set of labels.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Returns `true` if no labels are present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of labels present.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Insert or overwrite a label.
    ///
    /// Returns `self` for chaining.
    pub fn insert<K, V>(&mut self, key: K, val: V) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.0.insert(key.into(), val.into());
        self
    }

    /// Remove a label, returning its previous value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    /// Returns `true` if the key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Get the value for a key, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(|s| s.as_str())
    }

    /// Iterate through all labels as `(&str, &str)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Labels
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Labels;

    #[test]
    fn new_labels_are_empty() {
        let labels = Labels::new();
        assert!(labels.is_empty());
        assert_eq!(labels.len(), 0);
    }

    #[test]
    fn insert_and_get() {
        let mut labels = Labels::new();
        labels.insert("app", "web");
        assert_eq!(labels.get("app"), Some("web"));
        assert!(labels.contains("app"));
        assert!(!labels.contains("tier"));
    }

    #[test]
    fn remove_returns_previous_value() {
        let mut labels = Labels::new();
        labels.insert("app", "web");

        assert_eq!(labels.remove("app"), Some("web".to_string()));
        assert_eq!(labels.remove("app"), None);
        assert!(labels.is_empty());
    }

    #[test]
    fn insert_overwrites_existing_key() {
        let mut labels = Labels::new();
        labels.insert("app", "web").insert("app", "api");
        assert_eq!(labels.get("app"), Some("api"));
        assert_eq!(labels.len(), 1);
    }

    #[test]
    fn from_iterator_collects_pairs() {
        let labels: Labels = [("a", "1"), ("b", "2")].into_iter().collect();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels.get("b"), Some("2"));
    }

    #[test]
    fn serde_transparent_roundtrip() {
        let mut labels = Labels::new();
        labels.insert("app", "web");

        let json = serde_json::to_string(&labels).unwrap();
        assert_eq!(json, r#"{"app":"web"}"#);

        let back: Labels = serde_json::from_str(&json).unwrap();
        assert_eq!(back, labels);
    }
}
