//! Dispatcher core module - hot path for request dispatch.
//!
//! Per request the dispatcher moves through
//! `Matching → Filtering → (Handling | Aborted) → Flushed`, or
//! `NoMatch → NotFound → Flushed` when no route matches. Every path ends in exactly
//! one flush of the status recorder and therefore one access-log call.

#![deny(clippy::inefficient_to_string)]
#![deny(clippy::format_push_string)]
#![deny(clippy::unnecessary_to_owned)]

use http::Method;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::builder::RouterBuilder;
use crate::handlers::Handler;
use crate::middleware::FilterChain;
use crate::router::RouteTable;
use crate::server::{Request, RequestLogFn, Response, ResponseSink, StatusRecorder};

/// Status written when no route matches and no not-found handler is configured.
pub const NOT_FOUND_STATUS: u16 = 404;

/// Body written when no route matches and no not-found handler is configured.
pub const NOT_FOUND_BODY: &str = "404 page not found";

/// Immutable request dispatcher.
///
/// Built once by [`RouterBuilder::build`] and then shared (typically behind an
/// `Arc`) by every request-handling thread. Nothing here is mutated while serving, so
/// no locking is involved.
pub struct Dispatcher {
    table: RouteTable,
    filters: FilterChain,
    not_found: Option<Arc<dyn Handler>>,
    log: RequestLogFn,
}

impl Dispatcher {
    /// Start building a dispatcher.
    #[must_use]
    pub fn builder() -> RouterBuilder {
        RouterBuilder::new()
    }

    pub(super) fn from_parts(
        table: RouteTable,
        filters: FilterChain,
        not_found: Option<Arc<dyn Handler>>,
        log: RequestLogFn,
    ) -> Self {
        Self {
            table,
            filters,
            not_found,
            log,
        }
    }

    /// Dispatch one request, writing the response to `sink`.
    ///
    /// On a match, captured path parameters are appended to `req.query` (existing
    /// values with the same name are kept), the before-filters run and, unless one of
    /// them stopped the chain, the route's handler is called. Otherwise the not-found
    /// handler or the default 404 answers. The access log is called exactly once.
    pub fn serve(&self, req: &mut Request, sink: &mut dyn ResponseSink) {
        let mut recorder = StatusRecorder::new(sink, self.log.as_ref());

        debug!(method = %req.method, path = %req.path, "Route match attempt");

        match self.table.find(&req.method, &req.path) {
            Some((route, params)) => {
                info!(
                    method = %req.method,
                    path = %req.path,
                    route_pattern = %route.template(),
                    path_params = ?params,
                    "Route matched"
                );
                req.query.extend_params(params);

                if self.filters.run(&mut recorder, req) {
                    route.handler().call(&mut recorder, req);
                }
            }
            None => {
                warn!(method = %req.method, path = %req.path, "No route matched");
                match &self.not_found {
                    Some(handler) => handler.call(&mut recorder, req),
                    None => recorder.text(NOT_FOUND_STATUS, NOT_FOUND_BODY),
                }
            }
        }

        recorder.flush(req);
    }

    /// Dispatch `req` into a buffered [`Response`].
    #[must_use]
    pub fn handle(&self, mut req: Request) -> Response {
        let mut res = Response::new();
        self.serve(&mut req, &mut res);
        res
    }

    #[must_use]
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// `(method, template)` for every registration; see [`RouteTable::entries`].
    #[must_use]
    pub fn routes(&self) -> Vec<(Method, String)> {
        self.table.entries()
    }

    /// Log the routing table via `tracing`.
    pub fn dump_routes(&self) {
        self.table.dump();
    }
}
