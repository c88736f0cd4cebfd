//! # waypost
//!
//! **waypost** is a small, ordered HTTP request dispatcher. It maps a method and path
//! to a registered handler, extracts `:name` path segments as parameters, runs a
//! chain of global before-filters and reports the final response status of every
//! request to an access-log callback.
//!
//! ## Architecture
//!
//! - **[`router`]** - Path templates, segment matching and the per-method route table
//! - **[`middleware`]** - Before-filters that can short-circuit a request
//! - **[`dispatcher`]** - The setup-phase builder and the immutable dispatcher
//! - **[`server`]** - Request/response types, the status recorder and access logs
//! - **[`handlers`]** - The handler trait and ready-made handlers
//! - **[`manifest`]** - TOML route manifests for the `waypost` binary
//! - **[`runtime_config`]** / **[`logging`]** - Environment configuration and `tracing` setup
//!
//! ### Request Handling Flow
//!
//! ```text
//! host listener
//!     → Dispatcher::serve(request, sink)
//!         → StatusRecorder wraps sink
//!         → RouteTable::find(method, path)        first registered match wins
//!             match:    captures appended to request.query
//!                       FilterChain::run          any `false` skips the handler
//!                       handler.call
//!             no match: not-found handler or `404 page not found`
//!         → StatusRecorder::flush                 exactly one access-log call
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use http::Method;
//! use waypost::dispatcher::Dispatcher;
//! use waypost::server::{Request, ResponseSink};
//!
//! let mut builder = Dispatcher::builder();
//! builder.get("/users/:id", |res: &mut dyn ResponseSink, req: &Request| {
//!     res.text(200, req.query.get("id").unwrap_or("?"));
//! });
//! builder.add_before_filter(|res: &mut dyn ResponseSink, req: &mut Request| {
//!     if req.header("authorization").is_none() {
//!         res.text(401, "unauthorized");
//!         return false;
//!     }
//!     true
//! });
//! builder.log_with(|status, req: &Request| println!("{status} - {}", req.path));
//!
//! let dispatcher = builder.build();
//! let res = dispatcher.handle(Request::new(Method::GET, "/users/42"));
//! assert_eq!(res.status, 401);
//! ```
//!
//! ## Concurrency
//!
//! A [`dispatcher::Dispatcher`] is immutable and `Send + Sync`; share it behind an
//! `Arc` and call `serve` from any number of threads. Registration is only possible
//! on the builder, before the dispatcher exists.

pub mod cli;
pub mod dispatcher;
pub mod echo;
pub mod handlers;
pub mod ids;
pub mod logging;
pub mod manifest;
pub mod middleware;
pub mod router;
pub mod runtime_config;
pub mod server;

pub use dispatcher::{Dispatcher, RouterBuilder};
pub use handlers::Handler;
pub use middleware::BeforeFilter;
pub use server::{Request, Response, ResponseSink};
