//! # Router Module
//!
//! Path matching and route resolution.
//!
//! ## Overview
//!
//! The router is responsible for:
//! - Compiling `/`-delimited templates (`/users/:id`) into segment patterns
//! - Keeping one ordered route list per HTTP method
//! - Matching request paths and extracting named segments
//!
//! ## Matching rules
//!
//! 1. The request path is split on `/`; a different segment count is an immediate miss.
//! 2. Literal segments compare exactly (case-sensitive, no decoding or normalisation).
//! 3. `:name` segments match any text and bind it to `name`.
//! 4. Routes are tried in registration order and the first match wins.
//!
//! ## Example
//!
//! ```rust
//! use http::Method;
//! use std::sync::Arc;
//! use waypost::router::{Route, RouteTable};
//! use waypost::server::{Request, ResponseSink};
//!
//! fn show_user(res: &mut dyn ResponseSink, _req: &Request) {
//!     res.write(b"user");
//! }
//!
//! let mut table = RouteTable::new();
//! table.register(Method::GET, Arc::new(Route::new("/users/:id", show_user)));
//!
//! let (route, params) = table.find(&Method::GET, "/users/42").unwrap();
//! assert_eq!(route.template(), "/users/:id");
//! assert_eq!(params[0].1, "42");
//! ```

mod core;
mod pattern;

pub use core::{Route, RouteTable};
pub use pattern::{
    ParamVec, PathPattern, Segment, CAPTURE_MARKER, DELIMITER, MAX_INLINE_PARAMS,
};
