use http::header::CONTENT_TYPE;
use http::HeaderValue;

use super::Handler;
use crate::server::{Request, ResponseSink};

/// Handler that always answers with the same status, content type and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticResponse {
    status: u16,
    content_type: Option<HeaderValue>,
    body: Vec<u8>,
}

impl StaticResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            content_type: None,
            body: body.into(),
        }
    }

    /// Set the `content-type` header sent with the body.
    #[must_use]
    pub fn with_content_type(mut self, content_type: HeaderValue) -> Self {
        self.content_type = Some(content_type);
        self
    }

    #[must_use]
    pub fn status(&self) -> u16 {
        self.status
    }
}

impl Handler for StaticResponse {
    fn call(&self, res: &mut dyn ResponseSink, _req: &Request) {
        if let Some(content_type) = &self.content_type {
            res.insert_header(CONTENT_TYPE, content_type.clone());
        }
        res.set_status(self.status);
        res.write(&self.body);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::Response;
    use http::Method;

    #[test]
    fn test_static_response_writes_everything() {
        let handler = StaticResponse::new(202, "accepted")
            .with_content_type(HeaderValue::from_static("text/plain"));
        let req = Request::new(Method::POST, "/jobs");
        let mut res = Response::new();

        handler.call(&mut res, &req);

        assert_eq!(res.status, 202);
        assert_eq!(res.body_text(), "accepted");
        assert_eq!(res.header("content-type"), Some("text/plain"));
    }
}
