use http::{Extensions, HeaderMap, HeaderName, HeaderValue, Method};
use smallvec::SmallVec;
use std::fmt;

use crate::router::{ParamVec, MAX_INLINE_PARAMS};

/// Query string parameters as an ordered multi-map.
///
/// Repeated keys are kept as separate entries in arrival order, so
/// `?tag=a&tag=b` yields two values for `tag`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: SmallVec<[(String, String); MAX_INLINE_PARAMS]>,
}

impl QueryParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw query string (without the leading `?`), URL-decoding names and values.
    #[must_use]
    pub fn parse(query: &str) -> Self {
        let pairs = url::form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Self { pairs }
    }

    /// First value for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Every value for `name`, in order.
    pub fn get_all<'q>(&'q self, name: &'q str) -> impl Iterator<Item = &'q str> + 'q {
        self.pairs
            .iter()
            .filter(move |(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == name)
    }

    /// Add a value under `name`, keeping any values already present.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((name.into(), value.into()));
    }

    /// Append captured path parameters.
    ///
    /// A capture whose name already exists as a query key becomes an extra value for
    /// that key; existing values are never replaced.
    pub fn extend_params(&mut self, params: ParamVec) {
        self.pairs
            .extend(params.into_iter().map(|(k, v)| (k.to_string(), v)));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Re-encode as an `application/x-www-form-urlencoded` query string.
    #[must_use]
    pub fn encode(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (k, v) in &self.pairs {
            serializer.append_pair(k, v);
        }
        serializer.finish()
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Error building a [`Request`] from raw parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// The method is not a valid HTTP token.
    InvalidMethod {
        /// The rejected method text
        method: String,
    },
    /// The request target is not an origin-form path (`/path?query`).
    InvalidTarget {
        /// The rejected target
        target: String,
    },
    /// A header name or value is not valid HTTP.
    InvalidHeader {
        /// The rejected header name
        name: String,
    },
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::InvalidMethod { method } => {
                write!(f, "invalid HTTP method '{method}'")
            }
            RequestError::InvalidTarget { target } => {
                write!(
                    f,
                    "invalid request target '{target}': expected a path starting with '/'"
                )
            }
            RequestError::InvalidHeader { name } => write!(f, "invalid header '{name}'"),
        }
    }
}

impl std::error::Error for RequestError {}

/// An inbound request as seen by filters and handlers.
///
/// `query` starts out as the parsed query string; the dispatcher appends captured
/// path parameters to it before any filter runs. `extensions` carries typed values
/// from filters to handlers (e.g. the request id).
#[derive(Debug)]
pub struct Request {
    /// HTTP method (any token, standard or extension)
    pub method: Method,
    /// Request path without the query string, exactly as received
    pub path: String,
    /// Query parameters followed by captured path parameters
    pub query: QueryParams,
    /// Request headers
    pub headers: HeaderMap,
    /// Raw request body
    pub body: Vec<u8>,
    /// Per-request typed state
    pub extensions: Extensions,
}

impl Request {
    /// Build a request from a method and an origin-form target (`/path?query`).
    #[must_use]
    pub fn new(method: Method, target: &str) -> Self {
        let (path, query) = match target.split_once('?') {
            Some((path, query)) => (path, QueryParams::parse(query)),
            None => (target, QueryParams::new()),
        };
        Self {
            method,
            path: path.to_owned(),
            query,
            headers: HeaderMap::new(),
            body: Vec::new(),
            extensions: Extensions::new(),
        }
    }

    /// Build a request from raw method text and target, validating both.
    pub fn from_target(method: &str, target: &str) -> Result<Self, RequestError> {
        let method =
            Method::from_bytes(method.as_bytes()).map_err(|_| RequestError::InvalidMethod {
                method: method.to_owned(),
            })?;
        if !target.starts_with('/') {
            return Err(RequestError::InvalidTarget {
                target: target.to_owned(),
            });
        }
        Ok(Self::new(method, target))
    }

    /// Add a header, validating name and value.
    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self, RequestError> {
        let invalid = || RequestError::InvalidHeader {
            name: name.to_owned(),
        };
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
        let header_value = HeaderValue::from_str(value).map_err(|_| invalid())?;
        self.headers.append(header_name, header_value);
        Ok(self)
    }

    #[must_use]
    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Header value as text, if present and valid UTF-8.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// The request path and the current query, re-encoded.
    #[must_use]
    pub fn uri(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query.encode())
        }
    }
}
