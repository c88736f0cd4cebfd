use http::Method;
use std::sync::Arc;
use tracing::info;

use super::core::Dispatcher;
use crate::handlers::Handler;
use crate::middleware::{BeforeFilter, FilterChain};
use crate::router::{Route, RouteTable};
use crate::server::{default_request_log, Request, RequestLogFn};

/// Setup-phase collector for routes, filters, the not-found handler and the access log.
///
/// Everything is mutable here and nothing can serve requests. [`RouterBuilder::build`]
/// freezes the configuration into an immutable [`Dispatcher`], so registration can
/// never race with request handling.
pub struct RouterBuilder {
    table: RouteTable,
    filters: FilterChain,
    not_found: Option<Arc<dyn Handler>>,
    log: RequestLogFn,
}

impl Default for RouterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RouterBuilder {
    /// Empty builder logging with [`default_request_log`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: RouteTable::new(),
            filters: FilterChain::new(),
            not_found: None,
            log: Arc::new(default_request_log),
        }
    }

    /// Register `handler` for `method` requests matching `template`.
    ///
    /// Returns the shared route so it can be registered under further methods with
    /// [`RouterBuilder::add_route`].
    pub fn add<H>(&mut self, method: Method, template: &str, handler: H) -> Arc<Route>
    where
        H: Handler + 'static,
    {
        let route = Arc::new(Route::new(template, handler));
        self.add_route(method, Arc::clone(&route));
        route
    }

    /// Register an existing route under `method`.
    pub fn add_route(&mut self, method: Method, route: Arc<Route>) {
        self.table.register(method, route);
    }

    /// Register under GET and, with the very same route, under HEAD.
    pub fn get<H>(&mut self, template: &str, handler: H) -> Arc<Route>
    where
        H: Handler + 'static,
    {
        let route = self.add(Method::GET, template, handler);
        self.add_route(Method::HEAD, Arc::clone(&route));
        route
    }

    pub fn post<H>(&mut self, template: &str, handler: H) -> Arc<Route>
    where
        H: Handler + 'static,
    {
        self.add(Method::POST, template, handler)
    }

    pub fn put<H>(&mut self, template: &str, handler: H) -> Arc<Route>
    where
        H: Handler + 'static,
    {
        self.add(Method::PUT, template, handler)
    }

    pub fn patch<H>(&mut self, template: &str, handler: H) -> Arc<Route>
    where
        H: Handler + 'static,
    {
        self.add(Method::PATCH, template, handler)
    }

    pub fn delete<H>(&mut self, template: &str, handler: H) -> Arc<Route>
    where
        H: Handler + 'static,
    {
        self.add(Method::DELETE, template, handler)
    }

    /// Append a global before-filter.
    pub fn add_before_filter<F>(&mut self, filter: F)
    where
        F: BeforeFilter + 'static,
    {
        self.filters.add(Arc::new(filter));
    }

    /// Handler used when no route matches, instead of the plain-text 404.
    pub fn not_found<H>(&mut self, handler: H)
    where
        H: Handler + 'static,
    {
        self.not_found = Some(Arc::new(handler));
    }

    /// Replace the access-log callback.
    pub fn log_with<F>(&mut self, log: F)
    where
        F: Fn(u16, &Request) + Send + Sync + 'static,
    {
        self.log = Arc::new(log);
    }

    /// Replace the access-log callback with an already shared one.
    pub fn log_with_shared(&mut self, log: RequestLogFn) {
        self.log = log;
    }

    /// Routes registered so far.
    #[must_use]
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Freeze into a dispatcher.
    #[must_use]
    pub fn build(self) -> Dispatcher {
        info!(
            routes_count = self.table.len(),
            filters_count = self.filters.len(),
            custom_not_found = self.not_found.is_some(),
            "Dispatcher built"
        );
        Dispatcher::from_parts(self.table, self.filters, self.not_found, self.log)
    }
}
