//! # CLI Module
//!
//! Command-line access to the dispatcher, driven by a route manifest
//! (see [`crate::manifest`]).
//!
//! ## Commands
//!
//! ### `routes`
//!
//! ```bash
//! waypost routes routes.toml
//! ```
//!
//! Prints every registration as `METHOD template`, methods sorted by name and routes
//! in registration order.
//!
//! ### `dispatch`
//!
//! ```bash
//! waypost dispatch routes.toml GET '/users/42?sort=asc' -H 'accept: application/json'
//! ```
//!
//! Runs one request through the full pipeline (matching, before-filters, handler or
//! 404, access log) and prints the status line, headers and body.
//!
//! Options:
//! - `-H, --header <NAME: VALUE>` - Request header (repeatable)
//! - `-b, --body <TEXT>` - Request body
//! - `--request-id` - Install the `x-request-id` before-filter

mod commands;

pub use commands::{run_cli, Cli, Commands};
