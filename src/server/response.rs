use http::header::CONTENT_TYPE;
use http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use serde_json::Value;

/// Outgoing response channel that filters and handlers write to.
///
/// The hosting server supplies the concrete sink; [`Response`] is the buffered one
/// used by [`crate::dispatcher::Dispatcher::handle`] and in tests.
pub trait ResponseSink {
    /// Set the response status code.
    fn set_status(&mut self, status: u16);

    /// Set a header, replacing earlier values for the same name.
    fn insert_header(&mut self, name: HeaderName, value: HeaderValue);

    /// Append bytes to the response body.
    fn write(&mut self, chunk: &[u8]);

    /// Write a plain-text response with the given status.
    fn text(&mut self, status: u16, body: &str) {
        self.insert_header(
            CONTENT_TYPE,
            HeaderValue::from_static("text/plain; charset=utf-8"),
        );
        self.set_status(status);
        self.write(body.as_bytes());
    }

    /// Write a JSON response with the given status.
    fn json(&mut self, status: u16, body: &Value) {
        self.insert_header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        self.set_status(status);
        self.write(body.to_string().as_bytes());
    }
}

/// Buffered response.
///
/// The status starts at 200 and is only changed by an explicit `set_status`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// HTTP status code
    pub status: u16,
    /// HTTP response headers
    pub headers: HeaderMap,
    /// Response body
    pub body: Vec<u8>,
}

impl Default for Response {
    fn default() -> Self {
        Self {
            status: StatusCode::OK.as_u16(),
            headers: HeaderMap::new(),
            body: Vec::new(),
        }
    }
}

impl Response {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Body as UTF-8 text (lossy).
    #[must_use]
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Header value as text, if present and valid UTF-8.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Canonical reason phrase for the status (`""` when unknown).
    #[must_use]
    pub fn reason(&self) -> &'static str {
        status_reason(self.status)
    }
}

impl ResponseSink for Response {
    fn set_status(&mut self, status: u16) {
        self.status = status;
    }

    fn insert_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers.insert(name, value);
    }

    fn write(&mut self, chunk: &[u8]) {
        self.body.extend_from_slice(chunk);
    }
}

pub(crate) fn status_reason(status: u16) -> &'static str {
    StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("")
}
