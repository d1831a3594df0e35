//! Ordered query parameter collection.

/// An ordered, string-keyed multimap of query parameters.
///
/// Parameters are sent in insertion order and a key may appear more than
/// once, so `?page=1&pageSize=5` is always rendered in that order.
/// `Display` renders a percent-encoded query string.
///
/// # Example
///
/// ```rust
/// use billbee_api::clients::QueryParams;
///
/// let mut query = QueryParams::new();
/// query.append("page", 1);
/// query.append("pageSize", 50);
///
/// assert_eq!(query.get("pageSize"), Some("50"));
/// assert_eq!(query.to_string(), "page=1&pageSize=50");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// Creates an empty parameter collection.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Builds the `page` / `pageSize` pair used by every paged endpoint.
    #[must_use]
    pub fn paging(page: u32, page_size: u32) -> Self {
        let mut query = Self::new();
        query.append("page", page);
        query.append("pageSize", page_size);
        query
    }

    /// Appends a parameter, keeping any existing values for the same key.
    pub fn append(&mut self, key: impl Into<String>, value: impl ToString) {
        self.0.push((key.into(), value.to_string()));
    }

    /// Builder-style variant of [`append`](Self::append).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.append(key, value);
        self
    }

    /// Returns the first value stored for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns every value stored for `key`, in insertion order.
    #[must_use]
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.0
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Returns the number of key/value pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no parameters are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the pairs as a slice, suitable for `reqwest::RequestBuilder::query`.
    #[must_use]
    pub fn as_pairs(&self) -> &[(String, String)] {
        &self.0
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.to_string()))
                .collect(),
        )
    }
}

impl std::fmt::Display for QueryParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (key, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(
                f,
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )?;
        }
        Ok(())
    }
}
