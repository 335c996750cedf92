//! Ordered attribute maps for paragraphs, macros, and XML elements.

use indexmap::IndexMap;

/// A name-to-value attribute map that remembers insertion order.
///
/// Iteration yields entries in the order they were inserted, which is what
/// lets macro serialization produce byte-identical output for the same map.
/// An empty map is a valid, common case.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Parameters(IndexMap<String, String>);

impl Parameters {
    /// Create an empty parameter map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Look up a value by attribute name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Insert an attribute, keeping the position of an existing name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl FromIterator<(String, String)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(entries: I) -> Self {
        Self(entries.into_iter().collect())
    }
}

impl<const N: usize> From<[(&str, &str); N]> for Parameters {
    fn from(entries: [(&str, &str); N]) -> Self {
        entries
            .into_iter()
            .map(|(name, value)| (name.to_owned(), value.to_owned()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_preserved() {
        let mut parameters = Parameters::new();
        parameters.insert("zebra", "1");
        parameters.insert("alpha", "2");
        parameters.insert("mango", "3");

        let names: Vec<&str> = parameters.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["zebra", "alpha", "mango"]);
    }

    #[test]
    fn test_reinsert_keeps_position() {
        let mut parameters = Parameters::from([("a", "1"), ("b", "2")]);
        parameters.insert("a", "updated");

        let entries: Vec<_> = parameters.iter().collect();
        assert_eq!(entries, vec![("a", "updated"), ("b", "2")]);
    }

    #[test]
    fn test_get_and_len() {
        let parameters = Parameters::from([("src", "img.png")]);
        assert_eq!(parameters.get("src"), Some("img.png"));
        assert_eq!(parameters.get("missing"), None);
        assert_eq!(parameters.len(), 1);
        assert!(!parameters.is_empty());
        assert!(Parameters::new().is_empty());
    }
}
