//! Ordered request parameters

use rust_decimal::Decimal;
use serde_json::{Map, Value};

/// Ordered key/value parameters for one API call
///
/// Keys keep insertion order, so the same logical request always serializes
/// identically apart from its nonce. Decimal quantities are stored as JSON
/// strings to avoid float rounding.
#[derive(Clone, Default)]
pub struct RequestParams {
    entries: Map<String, Value>,
}

impl RequestParams {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing (in place) any previous value for `key`
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Insert a decimal as its exact string form
    pub fn insert_decimal(&mut self, key: impl Into<String>, value: Decimal) {
        self.entries.insert(key.into(), Value::String(value.to_string()));
    }

    /// Builder form of [`insert`](Self::insert)
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert only when `value` is present
    pub fn with_opt<V: Into<Value>>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.insert(key, value);
        }
        self
    }

    /// Insert a decimal only when present
    pub fn with_decimal_opt(mut self, key: impl Into<String>, value: Option<Decimal>) -> Self {
        if let Some(value) = value {
            self.insert_decimal(key, value);
        }
        self
    }

    /// Look up a value by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// No parameters set
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Borrow the underlying ordered JSON object
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.entries
    }

    /// Render as URL query pairs
    ///
    /// Strings are used verbatim; numbers and booleans use their JSON text.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|(key, value)| {
                let text = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (key.clone(), text)
            })
            .collect()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for RequestParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

impl std::fmt::Debug for RequestParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // values may carry order details; keys are enough for diagnostics
        f.debug_struct("RequestParams")
            .field("keys", &self.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_insertion_order_preserved() {
        let params = RequestParams::new()
            .with("zebra", 1)
            .with("alpha", "2")
            .with("middle", true);

        assert_eq!(params.keys().collect::<Vec<_>>(), vec!["zebra", "alpha", "middle"]);
    }

    #[test]
    fn test_replace_keeps_position() {
        let params = RequestParams::new()
            .with("a", 1)
            .with("b", 2)
            .with("a", 3);

        assert_eq!(params.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(params.get("a"), Some(&Value::from(3)));
    }

    #[test]
    fn test_same_entries_different_order_render_differently() {
        let forward = RequestParams::new().with("a", 1).with("b", 2);
        let reverse = RequestParams::new().with("b", 2).with("a", 1);

        assert_eq!(forward.get("a"), reverse.get("a"));
        assert_ne!(forward.to_query_pairs(), reverse.to_query_pairs());
    }

    #[test]
    fn test_optional_fields_omitted() {
        let params = RequestParams::new()
            .with("size", 15)
            .with_opt("order_book_unit", None::<String>)
            .with_decimal_opt("price", None);

        assert_eq!(params.len(), 1);
        assert!(params.get("order_book_unit").is_none());
    }

    #[test]
    fn test_decimal_stored_as_string() {
        let params = RequestParams::new().with_decimal_opt("qty", Some(dec!(0.00010000)));
        assert_eq!(params.get("qty"), Some(&Value::String("0.00010000".to_string())));
    }

    #[test]
    fn test_query_pairs() {
        let params: RequestParams = vec![("size", Value::from(15)), ("interval", Value::from("1m"))]
            .into_iter()
            .collect();

        assert_eq!(
            params.to_query_pairs(),
            vec![
                ("size".to_string(), "15".to_string()),
                ("interval".to_string(), "1m".to_string()),
            ]
        );
    }

    #[test]
    fn test_debug_hides_values() {
        let params = RequestParams::new().with("user_order_id", "my-secret-order");
        let debug = format!("{:?}", params);
        assert!(debug.contains("user_order_id"));
        assert!(!debug.contains("my-secret-order"));
    }
}
