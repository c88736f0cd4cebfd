use http::{HeaderName, HeaderValue};

use super::BeforeFilter;
use crate::ids::RequestId;
use crate::server::{Request, ResponseSink};

/// Header carrying the request id in both directions.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Tags every request with a [`RequestId`].
///
/// A valid ULID in the incoming `x-request-id` header is reused; anything else is
/// replaced by a fresh id. The id is stored in the request extensions for handlers
/// and echoed on the response. Never stops the chain.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestIdFilter;

impl BeforeFilter for RequestIdFilter {
    fn before(&self, res: &mut dyn ResponseSink, req: &mut Request) -> bool {
        let id = RequestId::from_header_or_new(req.header(REQUEST_ID_HEADER));
        if let Ok(value) = HeaderValue::from_str(&id.to_string()) {
            res.insert_header(HeaderName::from_static(REQUEST_ID_HEADER), value);
        }
        req.extensions.insert(id);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::Response;
    use http::Method;

    #[test]
    fn test_assigns_fresh_id() {
        let mut req = Request::new(Method::GET, "/");
        let mut res = Response::new();

        assert!(RequestIdFilter.before(&mut res, &mut req));

        let id = req.extensions.get::<RequestId>().copied().unwrap();
        assert_eq!(res.header(REQUEST_ID_HEADER), Some(id.to_string().as_str()));
    }

    #[test]
    fn test_reuses_incoming_id() {
        let incoming = RequestId::new();
        let mut req = Request::new(Method::GET, "/")
            .with_header(REQUEST_ID_HEADER, &incoming.to_string())
            .unwrap();
        let mut res = Response::new();

        RequestIdFilter.before(&mut res, &mut req);

        assert_eq!(req.extensions.get::<RequestId>(), Some(&incoming));
    }
}
