//! Per-request context.
//!
//! A [`RequestContext`] is built once from the inbound request and handed
//! through the middleware chain to the handler. Method, path, headers, body
//! and query are fixed at construction; the attribute bag is the only mutable
//! part and is how middleware passes derived values (the authenticated
//! `user`) forward.

use std::collections::HashMap;
use std::sync::OnceLock;

use axum::body::Bytes;
use axum::http::{HeaderMap, HeaderName, HeaderValue, Method, Uri, request::Parts};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::warn;

use schoolrun_auth::Claims;

/// Attribute key holding the decoded token claims.
pub const USER_ATTRIBUTE: &str = "user";

#[derive(Debug)]
pub struct RequestContext {
    method: Method,
    path: String,
    headers: HeaderMap,
    raw_body: Bytes,
    query: HashMap<String, String>,
    body: OnceLock<Map<String, Value>>,
    attributes: HashMap<String, Value>,
}

impl RequestContext {
    pub fn new(method: Method, uri: &Uri, headers: HeaderMap, raw_body: Bytes) -> Self {
        let query = uri
            .query()
            .map(|q| {
                url::form_urlencoded::parse(q.as_bytes())
                    .into_owned()
                    .collect()
            })
            .unwrap_or_default();

        Self {
            method,
            path: uri.path().to_string(),
            headers,
            raw_body,
            query,
            body: OnceLock::new(),
            attributes: HashMap::new(),
        }
    }

    pub fn from_parts(parts: Parts, raw_body: Bytes) -> Self {
        Self::new(parts.method, &parts.uri, parts.headers, raw_body)
    }

    /// Adds a header; used when building contexts by hand.
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Request path with the query string stripped.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Case-insensitive header lookup. Values that are not visible ASCII are
    /// treated as absent.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn raw_body(&self) -> &Bytes {
        &self.raw_body
    }

    /// The JSON body as an object, parsed on first access.
    ///
    /// A missing, malformed or non-object body yields an empty map.
    pub fn body(&self) -> &Map<String, Value> {
        self.body.get_or_init(|| {
            match serde_json::from_slice::<Value>(&self.raw_body) {
                Ok(Value::Object(map)) => map,
                _ => Map::new(),
            }
        })
    }

    /// A single body field deserialized into `T`; `None` when absent, `null`
    /// or of the wrong shape.
    pub fn body_field<T>(&self, key: &str) -> Option<T>
    where
        T: DeserializeOwned,
    {
        match self.body().get(key) {
            None | Some(Value::Null) => None,
            Some(value) => serde_json::from_value(value.clone()).ok(),
        }
    }

    pub fn query(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }

    pub fn query_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.query(key).unwrap_or(default)
    }

    pub fn query_all(&self) -> &HashMap<String, String> {
        &self.query
    }

    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    pub fn attribute_or(&self, key: &str, default: Value) -> Value {
        self.attributes.get(key).cloned().unwrap_or(default)
    }

    /// Stores an attribute for later steps. The `user` key is reserved for
    /// the authentication middleware; attempts to set it here are refused
    /// and `false` is returned.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<Value>) -> bool {
        let key = key.into();
        if key == USER_ATTRIBUTE {
            warn!("Refused to overwrite the reserved `user` attribute");
            return false;
        }
        self.attributes.insert(key, value.into());
        true
    }

    pub(crate) fn set_user(&mut self, claims: Claims) {
        self.attributes
            .insert(USER_ATTRIBUTE.to_string(), Value::from(claims));
    }

    /// The authenticated user's claims, if the auth middleware ran.
    pub fn user(&self) -> Option<Claims> {
        self.attributes
            .get(USER_ATTRIBUTE)
            .and_then(Value::as_object)
            .map(|map| Claims::from(map.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;
    use serde_json::json;

    fn context(method: Method, uri: &str, body: &str) -> RequestContext {
        RequestContext::new(
            method,
            &uri.parse::<Uri>().unwrap(),
            HeaderMap::new(),
            Bytes::from(body.to_string()),
        )
    }

    #[test]
    fn test_path_strips_query_string() {
        let ctx = context(Method::GET, "/api/admin/users?page=2&q=a%20b", "");
        assert_eq!(ctx.path(), "/api/admin/users");
        assert_eq!(ctx.query("page"), Some("2"));
        assert_eq!(ctx.query("q"), Some("a b"));
        assert_eq!(ctx.query_or("limit", "20"), "20");
        assert_eq!(ctx.query_all().len(), 2);
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let ctx = context(Method::GET, "/", "").with_header(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer abc"),
        );
        assert_eq!(ctx.header("authorization"), Some("Bearer abc"));
        assert_eq!(ctx.header("AUTHORIZATION"), Some("Bearer abc"));
        assert_eq!(ctx.header("Authorization"), Some("Bearer abc"));
        assert_eq!(ctx.header("x-missing"), None);
    }

    #[test]
    fn test_body_parses_object() {
        let ctx = context(Method::POST, "/login", r#"{"email":"a@b.c","lat":1.5}"#);
        assert_eq!(ctx.body().get("email"), Some(&json!("a@b.c")));
        assert_eq!(ctx.body_field::<f64>("lat"), Some(1.5));
        assert_eq!(ctx.body_field::<String>("password"), None);
    }

    #[test]
    fn test_malformed_or_non_object_body_is_empty() {
        for raw in ["", "not json", "[1,2,3]", "\"text\"", "42", "{\"a\":"] {
            let ctx = context(Method::POST, "/register", raw);
            assert!(ctx.body().is_empty(), "body {raw:?} should be empty");
            assert_eq!(ctx.raw_body().as_ref(), raw.as_bytes());
        }
    }

    #[test]
    fn test_body_field_wrong_type_is_none() {
        let ctx = context(Method::POST, "/", r#"{"lat":"north","lng":null}"#);
        assert_eq!(ctx.body_field::<f64>("lat"), None);
        assert_eq!(ctx.body_field::<f64>("lng"), None);
    }

    #[test]
    fn test_attributes_with_default() {
        let mut ctx = context(Method::GET, "/", "");
        assert_eq!(ctx.attribute("trace"), None);
        assert_eq!(ctx.attribute_or("trace", json!("none")), json!("none"));

        assert!(ctx.set_attribute("trace", "abc"));
        assert_eq!(ctx.attribute("trace"), Some(&json!("abc")));
    }

    #[test]
    fn test_user_attribute_is_reserved() {
        let mut ctx = context(Method::GET, "/", "");
        assert!(!ctx.set_attribute(USER_ATTRIBUTE, json!({ "role": "admin" })));
        assert!(ctx.user().is_none());

        ctx.set_user(Claims::new("u-1", "driver"));
        let user = ctx.user().unwrap();
        assert_eq!(user.role(), Some("driver"));
        assert_eq!(ctx.attribute(USER_ATTRIBUTE).unwrap()["uuid"], "u-1");
    }
}
