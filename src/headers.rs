//! Framework-agnostic HTTP header collection.

use std::collections::HashMap;

/// An owned set of HTTP request headers.
///
/// Header names match case-insensitively and a name may carry several
/// values, kept in the order they were added. Values are stored verbatim.
///
/// `HeaderSet` holds plain owned data so it does not couple to any web
/// framework. Framework code copies its request headers in, either through
/// [`append`](Self::append) / `FromIterator`, or with the `http` feature,
/// `From<&http::HeaderMap>`.
///
/// # Examples
///
/// ```
/// use apikey_auth::HeaderSet;
///
/// let mut headers = HeaderSet::new();
/// headers.append("Authorization", "ApiKey my-secret-key");
/// headers.append("X-Forwarded-For", "10.0.0.1");
/// headers.append("x-forwarded-for", "10.0.0.2");
///
/// assert_eq!(headers.get("authorization"), Some("ApiKey my-secret-key"));
/// assert_eq!(headers.get_all("X-FORWARDED-FOR").len(), 2);
/// assert_eq!(headers.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderSet {
    /// Lowercased header name -> values in insertion order
    entries: HashMap<String, Vec<String>>,
}

impl HeaderSet {
    /// Creates an empty header set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value for `name`, after any values already present.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries
            .entry(normalize(name.into()))
            .or_default()
            .push(value.into());
    }

    /// Sets `name` to a single value, dropping any previous values.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(normalize(name.into()), vec![value.into()]);
    }

    /// Returns the first value for `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.get_all(name).first().map(String::as_str)
    }

    /// Returns every value for `name`, or an empty slice.
    pub fn get_all(&self, name: &str) -> &[String] {
        self.entries
            .get(&name.to_ascii_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns true if `name` has at least one value.
    pub fn contains(&self, name: &str) -> bool {
        !self.get_all(name).is_empty()
    }

    /// Number of distinct header names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no headers are present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn normalize(mut name: String) -> String {
    name.make_ascii_lowercase();
    name
}

impl<K, V> Extend<(K, V)> for HeaderSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.append(name, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for HeaderSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = HeaderSet::new();
        headers.extend(iter);
        headers
    }
}

/// Stands in for a header value that is not visible ASCII.
///
/// A single token with no whitespace, so it never parses as a credential.
#[cfg(feature = "http")]
pub(crate) const UNDECODABLE_VALUE: &str = "\u{FFFD}";

/// Copies headers out of an `http` request.
///
/// Every value keeps its position. Values that are not visible ASCII cannot
/// be represented as `&str` and are stored as `U+FFFD`, so an undecodable
/// first `Authorization` value is still the one that gets checked (and
/// rejected).
#[cfg(feature = "http")]
impl From<&http::HeaderMap> for HeaderSet {
    fn from(map: &http::HeaderMap) -> Self {
        let mut headers = HeaderSet::new();
        for (name, value) in map {
            let value = value.to_str().unwrap_or(UNDECODABLE_VALUE);
            headers.append(name.as_str(), value);
        }
        headers
    }
}
