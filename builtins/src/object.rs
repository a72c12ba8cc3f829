//! Object key/value helpers
//!
//! A [`Record`] stands in for a plain string-keyed object. It is a
//! persistent map: `insert` returns a new record and leaves the original
//! untouched, with unchanged entries shared between the two.
//!
//! ## Example
//!
//! ```
//! use builtins::object::{entries, keys, values, Record};
//!
//! let person = Record::new().insert("name", "Ada").insert("born", "1815");
//! assert_eq!(keys(&person), vec!["born", "name"]);
//! assert_eq!(values(&person), vec!["1815", "Ada"]);
//! assert_eq!(
//!     entries(&person),
//!     vec![("born".to_string(), "1815"), ("name".to_string(), "Ada")]
//! );
//! ```

use im::OrdMap;
use tracing::debug;

/// Persistent string-keyed record. Keys iterate in ascending order.
#[derive(Debug, Clone, PartialEq)]
pub struct Record<V> {
    fields: OrdMap<String, V>,
}

impl<V> Default for Record<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Record<V> {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: OrdMap::new(),
        }
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<V: Clone> Record<V> {
    /// Returns a new record with `key` set to `value`; an existing field is replaced.
    #[must_use]
    pub fn insert(&self, key: impl Into<String>, value: V) -> Self {
        Self {
            fields: self.fields.update(key.into(), value),
        }
    }

    /// Looks up a field.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.fields.get(key)
    }

    /// Iterates over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &V)> {
        self.fields.iter()
    }
}

impl<K: Into<String>, V: Clone> FromIterator<(K, V)> for Record<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(pairs: I) -> Self {
        from_entries(pairs)
    }
}

/// Field names in key order.
pub fn keys<V: Clone>(record: &Record<V>) -> Vec<String> {
    record.iter().map(|(key, _)| key.clone()).collect()
}

/// Field values in key order.
pub fn values<V: Clone>(record: &Record<V>) -> Vec<V> {
    record.iter().map(|(_, value)| value.clone()).collect()
}

/// `(key, value)` pairs in key order.
pub fn entries<V: Clone>(record: &Record<V>) -> Vec<(String, V)> {
    record
        .iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Builds a record from pairs. When a key repeats, the last value wins.
///
/// # Example
/// ```
/// use builtins::object::{from_entries, values};
/// let record = from_entries([("a", 1), ("b", 2), ("a", 3)]);
/// assert_eq!(record.get("a"), Some(&3));
/// assert_eq!(values(&record), vec![3, 2]);
/// ```
pub fn from_entries<K, V, I>(pairs: I) -> Record<V>
where
    K: Into<String>,
    V: Clone,
    I: IntoIterator<Item = (K, V)>,
{
    let mut seen = 0usize;
    let record = pairs.into_iter().fold(Record::new(), |record, (key, value)| {
        seen += 1;
        record.insert(key, value)
    });
    if seen > record.len() {
        debug!(
            pairs = seen,
            fields = record.len(),
            "duplicate keys collapsed while building record"
        );
    }
    record
}
