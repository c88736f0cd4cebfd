//! Request and response types shared by the dispatcher, filters and handlers.
//!
//! The network listener that produces requests is supplied by the host; this module
//! only defines what a request looks like once parsed and how responses are written.

mod recorder;
pub mod request;
pub mod response;

pub use recorder::{
    default_request_log, tracing_request_log, RequestLogFn, StatusRecorder,
};
pub use request::{QueryParams, Request, RequestError};
pub use response::{Response, ResponseSink};
