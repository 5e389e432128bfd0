//! Path templates, query strings and URL assembly.
//!
//! Path templates carry `{name}` placeholders that are filled positionally,
//! in the order they appear. Each argument is percent-encoded as a single
//! path segment, so `"a/b"` becomes `a%2Fb` and never adds a segment.
//!
//! URL parsing collapses `.` and `..` segments, including their `%2E`
//! spellings, so an argument of exactly `.` or `..` cannot be sent as given
//! and is rejected instead of silently reaching another endpoint.

use url::Url;

use crate::error::{HarnessError, Result};

/// Fills the `{name}` placeholders of `template` with `params`, in order.
///
/// # Errors
///
/// Returns [`HarnessError::InvalidInput`] if the number of placeholders does
/// not match the number of parameters, a placeholder is not closed, or a
/// parameter is a dot segment (`.` or `..`).
///
/// # Examples
///
/// ```
/// use dif_api_harness::transport::path::expand_path;
///
/// let path = expand_path("/api/distributors/{id}/warehouses", &["ss"]).unwrap();
/// assert_eq!(path, "/api/distributors/ss/warehouses");
///
/// assert!(expand_path("/api/orders/{orderId}", &[]).is_err());
/// assert!(expand_path("/api/orders/{orderId}", &[".."]).is_err());
/// ```
pub fn expand_path(template: &str, params: &[&str]) -> Result<String> {
    let placeholders = count_placeholders(template)?;
    if placeholders != params.len() {
        return Err(HarnessError::InvalidInput(format!(
            "path template {template} expects {placeholders} parameter(s), got {}",
            params.len()
        )));
    }
    if let Some(dot) = params.iter().find(|p| matches!(**p, "." | "..")) {
        return Err(HarnessError::InvalidInput(format!(
            "path parameter '{dot}' is a dot segment and would change the path of {template}"
        )));
    }

    let mut expanded = String::with_capacity(template.len());
    let mut rest = template;
    let mut params = params.iter();
    while let Some(open) = rest.find('{') {
        expanded.push_str(&rest[..open]);
        // Closed: count_placeholders already checked every '{'.
        let close = rest[open..].find('}').map_or(rest.len(), |i| open + i);
        if let Some(param) = params.next() {
            expanded.push_str(&urlencoding::encode(param));
        }
        rest = rest.get(close + 1..).unwrap_or_default();
    }
    expanded.push_str(rest);
    Ok(expanded)
}

fn count_placeholders(template: &str) -> Result<usize> {
    let mut count = 0;
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        let Some(close) = rest[open..].find('}') else {
            return Err(HarnessError::InvalidInput(format!(
                "unclosed placeholder in path template {template}"
            )));
        };
        count += 1;
        rest = &rest[open + close + 1..];
    }
    Ok(count)
}

/// Ordered query-string parameters.
///
/// Keys keep insertion order. Optional values that are `None` are never
/// added, so an absent filter produces no key at all rather than `key=`.
///
/// # Examples
///
/// ```
/// use dif_api_harness::transport::QueryParams;
///
/// let mut query = QueryParams::new();
/// query.push("skus", "A,B").push_opt("distributorId", None::<&str>);
/// assert_eq!(query.encode(), "skus=A,B");
/// ```
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

    /// Appends a parameter.
    pub fn push(&mut self, key: impl Into<String>, value: impl ToString) -> &mut Self {
        self.pairs.push((key.into(), value.to_string()));
        self
    }

    /// Appends a parameter only when `value` is present.
    pub fn push_opt<V: ToString>(
        &mut self,
        key: impl Into<String>,
        value: Option<V>,
    ) -> &mut Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    /// Returns true if no parameters were added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns the value of the first parameter named `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Encodes the parameters as a query string without the leading `?`.
    ///
    /// Commas inside a value are kept literally so that a joined list stays
    /// a single, readable value.
    #[must_use]
    pub fn encode(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), encode_list_value(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

fn encode_list_value(value: &str) -> String {
    value.split(',').map(urlencoding::encode).collect::<Vec<_>>().join(",")
}

/// Joins `base` with an already-expanded path and a query string.
///
/// Any path on `base` is kept as a prefix. An empty `query` adds no `?`.
///
/// # Errors
///
/// Returns [`HarnessError::InvalidBaseUrl`] if the joined URL does not parse.
pub fn build_url(base: &Url, path: &str, query: &QueryParams) -> Result<Url> {
    let joined = format!("{}{path}", base.as_str().trim_end_matches('/'));
    let mut url = Url::parse(&joined)
        .map_err(|e| HarnessError::InvalidBaseUrl(format!("cannot join {path} to {base}: {e}")))?;
    if !query.is_empty() {
        url.set_query(Some(&query.encode()));
    }
    Ok(url)
}
