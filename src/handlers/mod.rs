//! Route handlers.
//!
//! Anything implementing [`Handler`] can be bound to a route or used as the not-found
//! fallback. Plain functions and closures with the signature
//! `Fn(&mut dyn ResponseSink, &Request)` implement it automatically.

mod static_response;

pub use static_response::StaticResponse;

use crate::server::{Request, ResponseSink};

/// A request handler.
///
/// Handlers run on whichever thread the host calls the dispatcher from, so they must
/// be `Send + Sync`. A panicking handler is not caught here.
pub trait Handler: Send + Sync {
    fn call(&self, res: &mut dyn ResponseSink, req: &Request);
}

impl<F> Handler for F
where
    F: Fn(&mut dyn ResponseSink, &Request) + Send + Sync,
{
    fn call(&self, res: &mut dyn ResponseSink, req: &Request) {
        self(res, req);
    }
}
