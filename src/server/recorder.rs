//! Per-request status capture and access logging.

use http::{HeaderName, HeaderValue, StatusCode};
use std::sync::Arc;
use tracing::info;

use super::request::Request;
use super::response::ResponseSink;

/// Access-log callback, invoked once per request with the final status.
pub type RequestLogFn = Arc<dyn Fn(u16, &Request) + Send + Sync>;

/// Default access log: prints `<status> - <path>` to stdout.
pub fn default_request_log(status: u16, req: &Request) {
    println!("{status} - {}", req.path);
}

/// Access log that emits a `tracing` event instead of printing.
pub fn tracing_request_log(status: u16, req: &Request) {
    info!(
        status = status,
        method = %req.method,
        path = %req.path,
        "Request completed"
    );
}

/// Wraps the response sink for one request and remembers the status written.
///
/// Every write is forwarded unchanged. The last explicit `set_status` wins; if none
/// happened the request is logged as 200. [`StatusRecorder::flush`] consumes the
/// recorder, so the log callback fires exactly once.
pub struct StatusRecorder<'a> {
    inner: &'a mut dyn ResponseSink,
    log: &'a (dyn Fn(u16, &Request) + Send + Sync),
    status: Option<u16>,
}

impl<'a> StatusRecorder<'a> {
    pub fn new(
        inner: &'a mut dyn ResponseSink,
        log: &'a (dyn Fn(u16, &Request) + Send + Sync),
    ) -> Self {
        Self {
            inner,
            log,
            status: None,
        }
    }

    /// The last status set explicitly, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// The status that will be logged.
    #[must_use]
    pub fn final_status(&self) -> u16 {
        self.status.unwrap_or(StatusCode::OK.as_u16())
    }

    /// Emit the access log record for `req`.
    pub fn flush(self, req: &Request) {
        (self.log)(self.final_status(), req);
    }
}

impl ResponseSink for StatusRecorder<'_> {
    fn set_status(&mut self, status: u16) {
        self.status = Some(status);
        self.inner.set_status(status);
    }

    fn insert_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.inner.insert_header(name, value);
    }

    fn write(&mut self, chunk: &[u8]) {
        self.inner.write(chunk);
    }
}
