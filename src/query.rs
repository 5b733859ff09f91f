//! Query parameter access
//!
//! The query string is decoded as `application/x-www-form-urlencoded`: `+`
//! becomes a space and `%XX` escapes are decoded in both keys and values, so
//! `path=%2Fapi` yields `/api`.
//!
//! Pairs are kept in link order and repeated keys are all retained; lookups
//! return the first occurrence. Keys with an empty value (`pqv=` or a bare
//! `pqv`) are retained too, which is what lets [`Query::contains`] tell a
//! present-but-empty parameter apart from a missing one.

use serde::{Deserialize, Serialize};

/// Decoded query parameters of a link, in order of appearance
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    /// Decode a raw query string (the part after `?`, without the `?`)
    ///
    /// # Example
    ///
    /// ```rust
    /// use vless2xray::Query;
    ///
    /// let q = Query::parse("path=%2Fapi&pqv=&type=xhttp&type=tcp");
    /// assert_eq!(q.first("path"), Some("/api"));
    /// assert_eq!(q.first("type"), Some("xhttp"));
    /// assert!(q.contains("pqv"));
    /// assert!(!q.contains("mode"));
    /// ```
    pub fn parse(raw: &str) -> Self {
        let pairs = url::form_urlencoded::parse(raw.as_bytes())
            .into_owned()
            .collect();
        Query { pairs }
    }

    /// First value of `key`, if the key appears at all
    pub fn first(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// First value of `key`, or `default` when the key is absent
    ///
    /// An empty value is still a value: `sid=` yields `""`, not `default`.
    pub fn get_or(&self, key: &str, default: &str) -> String {
        self.first(key).unwrap_or(default).to_string()
    }

    /// Whether `key` appears in the query, regardless of its value
    pub fn contains(&self, key: &str) -> bool {
        self.first(key).is_some()
    }

    /// Number of decoded pairs, duplicates included
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the query has no pairs
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
