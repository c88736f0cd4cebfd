//! Router core module - hot path for request routing.
//!
//! Matching is a linear scan of one method bucket in registration order. The first
//! route whose pattern matches wins; there is no specificity ranking.

#![deny(clippy::inefficient_to_string)]
#![deny(clippy::format_push_string)]
#![deny(clippy::unnecessary_to_owned)]

use http::Method;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

use super::pattern::{ParamVec, PathPattern};
use crate::handlers::Handler;

/// A compiled path pattern bound to a handler.
///
/// Routes are immutable once created and are shared (`Arc<Route>`) between method
/// buckets, so a GET route registered under HEAD is the very same value.
pub struct Route {
    pattern: PathPattern,
    handler: Arc<dyn Handler>,
}

impl Route {
    /// Compile `template` and bind it to `handler`.
    pub fn new<H>(template: &str, handler: H) -> Self
    where
        H: Handler + 'static,
    {
        Self::with_shared_handler(template, Arc::new(handler))
    }

    /// Like [`Route::new`] for a handler that is already shared.
    #[must_use]
    pub fn with_shared_handler(template: &str, handler: Arc<dyn Handler>) -> Self {
        Self {
            pattern: PathPattern::compile(template),
            handler,
        }
    }

    #[must_use]
    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    #[must_use]
    pub fn template(&self) -> &str {
        self.pattern.template()
    }

    #[must_use]
    pub fn handler(&self) -> &dyn Handler {
        self.handler.as_ref()
    }

    /// Match a request path; see [`PathPattern::match_path`].
    #[inline]
    #[must_use]
    pub fn match_path(&self, path: &str) -> Option<ParamVec> {
        self.pattern.match_path(path)
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("template", &self.pattern.template())
            .finish_non_exhaustive()
    }
}

/// HTTP method → routes in registration order.
///
/// The method set is open: extension methods such as `PURGE` get their own bucket
/// like any standard method. Entries are only ever appended.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: HashMap<Method, Vec<Arc<Route>>>,
}

impl RouteTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `route` to the bucket for `method`.
    ///
    /// Duplicate templates are kept; the earlier registration always wins at lookup.
    pub fn register(&mut self, method: Method, route: Arc<Route>) {
        debug!(method = %method, template = %route.template(), "Route registered");
        self.routes.entry(method).or_default().push(route);
    }

    /// Routes for `method` in registration order; empty for unknown methods.
    #[must_use]
    pub fn lookup(&self, method: &Method) -> &[Arc<Route>] {
        self.routes.get(method).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First route for `method` whose pattern matches `path`, with its captures.
    #[must_use]
    pub fn find<'t>(&'t self, method: &Method, path: &str) -> Option<(&'t Arc<Route>, ParamVec)> {
        self.lookup(method)
            .iter()
            .find_map(|route| route.match_path(path).map(|params| (route, params)))
    }

    /// Total number of registrations across all methods.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.values().all(Vec::is_empty)
    }

    /// `(method, template)` pairs, methods sorted by name, routes in registration order.
    #[must_use]
    pub fn entries(&self) -> Vec<(Method, String)> {
        let mut methods: Vec<&Method> = self.routes.keys().collect();
        methods.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        methods
            .into_iter()
            .flat_map(|method| {
                self.lookup(method)
                    .iter()
                    .map(move |route| (method.clone(), route.template().to_owned()))
            })
            .collect()
    }

    /// Log the routing table at `info` level.
    pub fn dump(&self) {
        let entries = self.entries();
        info!(routes_count = entries.len(), "Routing table");
        for (method, template) in &entries {
            info!(method = %method, template = %template, "Route");
        }
    }
}
