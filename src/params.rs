use std::borrow::Cow;

use percent_encoding::{percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// RFC 3986 unreserved characters stay literal: ALPHA / DIGIT / "-" / "." / "_" / "~".
const OAUTH_ESCAPE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encodes `input` the way OAuth 1.0a expects (uppercase hex, RFC 3986).
pub fn escape(input: &str) -> Cow<'_, str> {
    percent_encode(input.as_bytes(), OAUTH_ESCAPE_SET).into()
}

/// Parameter container used to build OAuth base strings and headers.
///
/// Values are escaped exactly once, on [`add`](OrderedParams::add). Keys are
/// kept as given. Insertion order is preserved; [`keys`](OrderedParams::keys)
/// and [`sorted_pairs`](OrderedParams::sorted_pairs) return a sorted view
/// without reordering the container.
///
/// The same key may be added more than once, and every pair is kept.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct OrderedParams {
    pairs: Vec<(String, String)>,
}

impl OrderedParams {
    pub fn new() -> Self {
        Default::default()
    }

    /// Escapes `value` and appends the pair.
    pub fn add<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: AsRef<str>,
    {
        let escaped = escape(value.as_ref()).into_owned();
        self.add_escaped(key.into(), escaped);
    }

    // value must already be escaped
    fn add_escaped(&mut self, key: String, value: String) {
        self.pairs.push((key, value));
    }

    /// Returns the stored (escaped) value of the first pair named `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Keys in ascending byte order. Equal keys keep their insertion order.
    pub fn keys(&self) -> Vec<&str> {
        self.sorted_pairs().into_iter().map(|(k, _)| k).collect()
    }

    /// Pairs in ascending key byte order. Equal keys keep their insertion order.
    pub fn sorted_pairs(&self) -> Vec<(&str, &str)> {
        let mut sorted = self
            .pairs
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect::<Vec<_>>();
        // stable sort on the key alone
        sorted.sort_by(|a, b| a.0.cmp(b.0));
        sorted
    }

    /// Drops every pair named `key`.
    pub fn remove(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    /// Pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// The copy is built from the sorted view, so its insertion order is the
/// canonical order. Values are carried over without being escaped again.
impl Clone for OrderedParams {
    fn clone(&self) -> Self {
        let mut cloned = OrderedParams::new();
        for (key, value) in self.sorted_pairs() {
            cloned.add_escaped(key.to_string(), value.to_string());
        }
        cloned
    }
}
