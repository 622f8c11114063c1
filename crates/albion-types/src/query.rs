//! Query string and path segment encoding.

use std::fmt::Display;
use url::form_urlencoded;

/// Insertion-ordered query parameters.
///
/// Values are stored in their string form. Numbers go through `Display`,
/// which never produces scientific notation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Creates an empty parameter list.
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Appends a key/value pair.
    pub fn append(&mut self, key: impl Into<String>, value: impl Display) -> &mut Self {
        self.pairs.push((key.into(), value.to_string()));
        self
    }

    /// Appends a key/value pair if `value` is present.
    pub fn append_opt<V: Display>(&mut self, key: impl Into<String>, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.append(key, value);
        }
        self
    }

    /// Appends every pair from a parameter object.
    pub fn extend_from(&mut self, params: &impl ToQuery) -> &mut Self {
        params.append_to(self);
        self
    }

    /// Returns true if no pairs have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Looks up the first value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Encodes the pairs as `application/x-www-form-urlencoded`, without a
    /// leading `?`.
    #[must_use]
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.pairs {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.append(key, value);
        }
        params
    }
}

/// A parameter object that can be flattened into a query string.
pub trait ToQuery {
    /// Appends this object's present fields to `query`, in field order.
    fn append_to(&self, query: &mut QueryParams);

    /// Collects this object's fields into a fresh parameter list.
    fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        self.append_to(&mut query);
        query
    }
}

impl<T: ToQuery> ToQuery for Option<T> {
    fn append_to(&self, query: &mut QueryParams) {
        if let Some(params) = self {
            params.append_to(query);
        }
    }
}

impl<T: ToQuery + ?Sized> ToQuery for &T {
    fn append_to(&self, query: &mut QueryParams) {
        (**self).append_to(query);
    }
}

/// Percent-encodes an identifier for use as a single URL path segment.
///
/// Spaces become `%20` and reserved characters such as `/`, `?` and `#` are
/// escaped, so an identifier cannot add or split path segments.
///
/// The dot-only identifiers `.` and `..` have no escaped form: URL parsers
/// treat `%2E` like `.`, so they pass through unchanged and are resolved as
/// dot segments when the request is sent.
#[must_use]
pub fn encode_path_segment(segment: &str) -> String {
    // byte_serialize escapes '+' itself, so every '+' left in the output is a space.
    form_urlencoded::byte_serialize(segment.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
