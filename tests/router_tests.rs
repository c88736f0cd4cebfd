//! Route registration through the builder and resolution through the table.

use http::Method;
use std::sync::Arc;
use waypost::dispatcher::Dispatcher;
use waypost::router::{Route, RouteTable};
use waypost::server::{Request, ResponseSink};

fn noop(_res: &mut dyn ResponseSink, _req: &Request) {}

fn params_of(table: &RouteTable, method: Method, path: &str) -> Option<Vec<(String, String)>> {
    table.find(&method, path).map(|(_, params)| {
        params
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    })
}

#[test]
fn test_get_registration_shares_route_with_head() {
    let mut builder = Dispatcher::builder();
    let route = builder.get("/status", noop);

    let head = builder.table().lookup(&Method::HEAD);
    assert_eq!(head.len(), 1);
    assert!(Arc::ptr_eq(&route, &head[0]));
    assert!(Arc::ptr_eq(&route, &builder.table().lookup(&Method::GET)[0]));
}

#[test]
fn test_head_request_reaches_get_handler() {
    let mut builder = Dispatcher::builder();
    builder.get("/ping", |res: &mut dyn ResponseSink, req: &Request| {
        res.text(200, req.method.as_str());
    });
    builder.log_with(|_status, _req: &Request| {});
    let dispatcher = builder.build();

    let res = dispatcher.handle(Request::new(Method::HEAD, "/ping"));
    assert_eq!(res.status, 200);
    assert_eq!(res.body_text(), "HEAD");
}

#[test]
fn test_other_verbs_do_not_register_head() {
    let mut builder = Dispatcher::builder();
    builder.post("/a", noop);
    builder.put("/a", noop);
    builder.patch("/a", noop);
    builder.delete("/a", noop);

    let table = builder.table();
    assert!(table.lookup(&Method::HEAD).is_empty());
    assert_eq!(table.len(), 4);
}

#[test]
fn test_add_route_under_several_methods() {
    let mut builder = Dispatcher::builder();
    let route = Arc::new(Route::new("/things/:id", noop));
    builder.add_route(Method::PUT, Arc::clone(&route));
    builder.add_route(Method::PATCH, Arc::clone(&route));

    let dispatcher = builder.build();
    assert_eq!(
        dispatcher.routes(),
        vec![
            (Method::PATCH, "/things/:id".to_string()),
            (Method::PUT, "/things/:id".to_string()),
        ]
    );
}

#[test]
fn test_builder_table_resolution() {
    let mut builder = Dispatcher::builder();
    builder.get("/", noop);
    builder.get("/repos/:owner/:repo", noop);
    builder.get("/repos/:owner/:repo/issues/:number", noop);

    let table = builder.table();
    assert_eq!(params_of(table, Method::GET, "/"), Some(vec![]));
    assert_eq!(
        params_of(table, Method::GET, "/repos/acme/waypost"),
        Some(vec![
            ("owner".to_string(), "acme".to_string()),
            ("repo".to_string(), "waypost".to_string()),
        ])
    );
    assert_eq!(
        params_of(table, Method::GET, "/repos/acme/waypost/issues/7"),
        Some(vec![
            ("owner".to_string(), "acme".to_string()),
            ("repo".to_string(), "waypost".to_string()),
            ("number".to_string(), "7".to_string()),
        ])
    );
    assert_eq!(params_of(table, Method::GET, "/repos/acme"), None);
    assert_eq!(params_of(table, Method::POST, "/"), None);
}

#[test]
fn test_trailing_slash_is_a_different_path() {
    let mut builder = Dispatcher::builder();
    builder.get("/users", noop);

    let table = builder.table();
    assert!(table.find(&Method::GET, "/users").is_some());
    assert!(table.find(&Method::GET, "/users/").is_none());
}

#[test]
fn test_percent_encoded_segments_are_not_decoded() {
    let mut builder = Dispatcher::builder();
    builder.get("/files/:name", |res: &mut dyn ResponseSink, req: &Request| {
        res.text(200, req.query.get("name").unwrap_or(""));
    });
    builder.log_with(|_status, _req: &Request| {});
    let dispatcher = builder.build();

    let res = dispatcher.handle(Request::new(Method::GET, "/files/a%20b"));
    assert_eq!(res.body_text(), "a%20b");
}

#[test]
fn test_routes_listing_is_stable() {
    let mut builder = Dispatcher::builder();
    builder.post("/b", noop);
    builder.get("/a", noop);
    builder.get("/c/:id", noop);
    let dispatcher = builder.build();

    assert_eq!(
        dispatcher.routes(),
        vec![
            (Method::GET, "/a".to_string()),
            (Method::GET, "/c/:id".to_string()),
            (Method::HEAD, "/a".to_string()),
            (Method::HEAD, "/c/:id".to_string()),
            (Method::POST, "/b".to_string()),
        ]
    );
}
