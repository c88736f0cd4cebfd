use std::sync::Arc;
use tracing::debug;

use crate::server::{Request, ResponseSink};

/// A global hook run before the matched route's handler.
///
/// Returning `false` stops the chain: later filters and the handler are skipped, but
/// the request is still logged with whatever status the filter set.
pub trait BeforeFilter: Send + Sync {
    fn before(&self, res: &mut dyn ResponseSink, req: &mut Request) -> bool;
}

impl<F> BeforeFilter for F
where
    F: Fn(&mut dyn ResponseSink, &mut Request) -> bool + Send + Sync,
{
    fn before(&self, res: &mut dyn ResponseSink, req: &mut Request) -> bool {
        self(res, req)
    }
}

/// Ordered list of before-filters shared by every route.
#[derive(Clone, Default)]
pub struct FilterChain {
    filters: Vec<Arc<dyn BeforeFilter>>,
}

impl FilterChain {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, filter: Arc<dyn BeforeFilter>) {
        self.filters.push(filter);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Run the filters in registration order; `true` means the handler should run.
    pub fn run(&self, res: &mut dyn ResponseSink, req: &mut Request) -> bool {
        for (index, filter) in self.filters.iter().enumerate() {
            if !filter.before(res, req) {
                debug!(
                    filter_index = index,
                    method = %req.method,
                    path = %req.path,
                    "Before-filter halted request"
                );
                return false;
            }
        }
        true
    }
}
