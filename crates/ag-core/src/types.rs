use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// HTTP verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
            Method::Put => write!(f, "PUT"),
            Method::Delete => write!(f, "DELETE"),
        }
    }
}

/// One outgoing call: verb, path, optional JSON body, optional query pairs.
/// Ephemeral, one per call site.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
    pub query: Vec<(String, String)>,
}

impl RequestDescriptor {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            query: Vec::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        let mut d = Self::new(Method::Post, path);
        d.body = Some(body);
        d
    }

    pub fn put(path: impl Into<String>, body: Value) -> Self {
        let mut d = Self::new(Method::Put, path);
        d.body = Some(body);
        d
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }
}

/// What a transport hands back: status code plus the body parsed as JSON
/// (`Null` when empty or unparsable).
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Value,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Server-supplied `"message"` field, if present.
    pub fn message(&self) -> Option<&str> {
        self.body.get("message").and_then(|m| m.as_str())
    }
}

/// Metadata describing the signed-in actor, cached for display purposes only.
/// Never drives authorization decisions client-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Principal(pub Value);

impl Principal {
    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(|v| v.as_str())
    }

    pub fn role(&self) -> Option<&str> {
        self.0.get("role").and_then(|v| v.as_str())
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

/// Parsed login/register response: the token (when the server issued one)
/// plus the full payload for principal caching.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub token: Option<String>,
    pub payload: Value,
}

impl LoginOutcome {
    pub fn from_payload(payload: Value) -> Self {
        let token = payload
            .get("token")
            .and_then(|t| t.as_str())
            .map(String::from);
        Self { token, payload }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_method_display() {
        assert_eq!(Method::Get.to_string(), "GET");
        assert_eq!(Method::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_descriptor_builders() {
        let d = RequestDescriptor::get("/api/categories");
        assert_eq!(d.method, Method::Get);
        assert_eq!(d.path, "/api/categories");
        assert!(d.body.is_none());

        let d = RequestDescriptor::put("/api/brands/42", json!({"name": "X"}));
        assert_eq!(d.method, Method::Put);
        assert_eq!(d.body, Some(json!({"name": "X"})));
    }

    #[test]
    fn test_descriptor_query() {
        let d = RequestDescriptor::get("/api/admin/users")
            .with_query("page", "1")
            .with_query("limit", "10");
        assert_eq!(d.query.len(), 2);
        assert_eq!(d.query[0], ("page".into(), "1".into()));
    }

    #[test]
    fn test_raw_response_success() {
        assert!(RawResponse { status: 200, body: Value::Null }.is_success());
        assert!(RawResponse { status: 204, body: Value::Null }.is_success());
        assert!(!RawResponse { status: 401, body: Value::Null }.is_success());
    }

    #[test]
    fn test_raw_response_message() {
        let r = RawResponse { status: 401, body: json!({"message": "jwt expired"}) };
        assert_eq!(r.message(), Some("jwt expired"));
        let r = RawResponse { status: 500, body: Value::Null };
        assert_eq!(r.message(), None);
    }

    #[test]
    fn test_login_outcome_token() {
        let out = LoginOutcome::from_payload(json!({"token": "abc123", "name": "Ada"}));
        assert_eq!(out.token.as_deref(), Some("abc123"));

        let out = LoginOutcome::from_payload(json!({"message": "invalid credentials"}));
        assert!(out.token.is_none());
    }

    #[test]
    fn test_principal_accessors() {
        let p = Principal(json!({"name": "Ada", "role": "admin"}));
        assert_eq!(p.name(), Some("Ada"));
        assert_eq!(p.role(), Some("admin"));
        let p = Principal(json!({}));
        assert_eq!(p.name(), None);
    }
}
