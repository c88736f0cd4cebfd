use serde_json::{json, Map, Value};

use crate::server::{Request, ResponseSink};

/// Echoes the request back as JSON: method, path, query (captures included) and body.
///
/// Query values are grouped by name, each name mapping to its list of values, so a
/// capture that shares a name with a query parameter shows up as a second value.
pub fn echo_handler(res: &mut dyn ResponseSink, req: &Request) {
    let mut query = Map::new();
    for (k, v) in req.query.iter() {
        if let Value::Array(values) = query
            .entry(k.to_owned())
            .or_insert_with(|| Value::Array(Vec::new()))
        {
            values.push(Value::String(v.to_owned()));
        }
    }

    res.json(
        200,
        &json!({
            "method": req.method.as_str(),
            "path": req.path,
            "query": query,
            "body": String::from_utf8_lossy(&req.body),
        }),
    );
}
