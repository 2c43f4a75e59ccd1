//! External view-state binding for the search term.
//!
//! On the web the binding is backed by the page URL (`?search=...`, written with
//! replace-state so no history entry is added). Natively and in tests it is a plain
//! in-memory query string.

/// Query parameter that carries the search term.
pub const SEARCH_PARAM: &str = "search";

/// Two-way binding between the search term and some outer view state.
pub trait ViewStateBinding {
    /// Current search term, empty when the parameter is absent.
    fn read(&self) -> String;

    /// Replace the stored search term.
    fn write(&mut self, term: &str);
}

/// In-memory `path?query` location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryStringBinding {
    path: String,
    params: Vec<(String, String)>,
}

impl QueryStringBinding {
    pub fn new() -> Self {
        Self {
            path: "/".to_string(),
            params: Vec::new(),
        }
    }

    /// Parse a location such as `/?search=ann&tab=2`.
    pub fn parse(location: &str) -> Self {
        let (path, query) = match location.split_once('?') {
            Some((path, query)) => (path, query),
            None => (location, ""),
        };

        Self {
            path: if path.is_empty() { "/" } else { path }.to_string(),
            params: parse_query(query),
        }
    }

    /// Simulate a navigation to another location.
    pub fn navigate(&mut self, location: &str) {
        *self = Self::parse(location);
    }

    /// Render back to `path?query`.
    pub fn location(&self) -> String {
        if self.params.is_empty() {
            return self.path.clone();
        }
        format!("{}?{}", self.path, encode_query(&self.params))
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn set_param(&mut self, name: &str, value: &str) {
        match self.params.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.params.push((name.to_string(), value.to_string())),
        }
    }
}

impl Default for QueryStringBinding {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewStateBinding for QueryStringBinding {
    fn read(&self) -> String {
        self.param(SEARCH_PARAM).unwrap_or_default().to_string()
    }

    fn write(&mut self, term: &str) {
        self.set_param(SEARCH_PARAM, term);
    }
}

/// Split a raw query string (without the leading `?`) into decoded pairs.
///
/// `+` decodes to a space, matching `URLSearchParams`.
pub fn parse_query(query: &str) -> Vec<(String, String)> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}

pub fn encode_query(params: &[(String, String)]) -> String {
    params
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}
