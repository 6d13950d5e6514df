use dioxus::router::routable::FromQuery;
use std::fmt;

/// Ordered URL query parameters.
///
/// Keeps pairs in the order they appeared so rebuilding the query string
/// round-trips cleanly, which is what lets unrelated parameters survive a
/// search navigation untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a query string, with or without the leading `?`.
    ///
    /// Segments without `=` become keys with an empty value. Values are
    /// percent-decoded; undecodable values are kept as-is.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs = query
            .split('&')
            .filter(|segment| !segment.is_empty())
            .map(|segment| {
                let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
                (decode_component(key), decode_component(value))
            })
            .collect();
        Self { pairs }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set `key` to `value`, replacing the first occurrence in place and
    /// dropping any duplicates, like `URLSearchParams.set`.
    pub fn set(&mut self, key: &str, value: &str) {
        if let Some(index) = self.pairs.iter().position(|(k, _)| k == key) {
            self.pairs[index].1 = value.to_string();
            let mut seen = false;
            self.pairs.retain(|(k, _)| {
                if k == key {
                    if seen {
                        return false;
                    }
                    seen = true;
                }
                true
            });
        } else {
            self.pairs.push((key.to_string(), value.to_string()));
        }
    }

    pub fn remove(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    pub fn with(&self, key: &str, value: &str) -> Self {
        let mut params = self.clone();
        params.set(key, value);
        params
    }

    pub fn without(&self, key: &str) -> Self {
        let mut params = self.clone();
        params.remove(key);
        params
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The full query string including the leading `?`, or `""` when there
    /// are no parameters. This is the form appended to a path for
    /// navigation.
    pub fn to_query_string(&self) -> String {
        if self.pairs.is_empty() {
            String::new()
        } else {
            format!("?{}", self)
        }
    }
}

fn decode_component(raw: &str) -> String {
    // Query strings use `+` for spaces, which percent-decoding alone
    // leaves untouched
    let raw = raw.replace('+', " ");
    urlencoding::decode(&raw)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| raw.clone())
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (key, value)) in self.pairs.iter().enumerate() {
            if index > 0 {
                write!(f, "&")?;
            }
            write!(f, "{}={}", urlencoding::encode(key), urlencoding::encode(value))?;
        }
        Ok(())
    }
}

impl FromQuery for QueryParams {
    fn from_query(query: &str) -> Self {
        Self::parse(query)
    }
}
