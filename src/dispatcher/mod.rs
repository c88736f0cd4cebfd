//! # Dispatcher Module
//!
//! Resolves a request to a handler and runs the filter/handler/logging pipeline.
//!
//! ## Lifecycle
//!
//! Setup and serving are separate types:
//!
//! 1. **Setup**: a [`RouterBuilder`] collects routes, before-filters, an optional
//!    not-found handler and the access-log callback.
//! 2. **Serving**: [`RouterBuilder::build`] produces a [`Dispatcher`], which is
//!    immutable and `Send + Sync`. Hosts share it behind an `Arc` and call
//!    [`Dispatcher::serve`] once per request from as many threads as they like.
//!
//! ## Request Flow
//!
//! 1. The response sink is wrapped in a [`crate::server::StatusRecorder`]
//! 2. Routes for the request method are tried in registration order
//! 3. On the first match, captures are appended to the query parameters
//! 4. Before-filters run; if all continue, the handler runs
//! 5. Without a match the not-found handler (or a plain 404) answers
//! 6. The recorder is flushed: one access-log call with the final status
//!
//! ## Example
//!
//! ```rust
//! use http::Method;
//! use waypost::dispatcher::Dispatcher;
//! use waypost::server::{Request, ResponseSink};
//!
//! let mut builder = Dispatcher::builder();
//! builder.get("/users/:id", |res: &mut dyn ResponseSink, req: &Request| {
//!     let id = req.query.get("id").unwrap_or_default();
//!     res.write(id.as_bytes());
//! });
//! builder.log_with(|_status, _req: &Request| {});
//! let dispatcher = builder.build();
//!
//! let res = dispatcher.handle(Request::new(Method::GET, "/users/42"));
//! assert_eq!(res.status, 200);
//! assert_eq!(res.body_text(), "42");
//! ```
//!
//! ## Error Handling
//!
//! Nothing in dispatch returns an error: a missing route is the not-found path.
//! Handler panics are not caught and propagate to the host.

mod builder;
mod core;

pub use builder::RouterBuilder;
pub use core::{Dispatcher, NOT_FOUND_BODY, NOT_FOUND_STATUS};
