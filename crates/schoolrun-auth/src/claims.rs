//! Token payload claims.
//!
//! A token payload is an open JSON object. Two claims are mandatory for
//! issuing: the identity (`uuid`) and the role (`role`). The token service
//! adds `iat` and `exp`; callers may add any other fields.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const IDENTITY_CLAIM: &str = "uuid";
pub const ROLE_CLAIM: &str = "role";
pub const ISSUED_AT_CLAIM: &str = "iat";
pub const EXPIRES_AT_CLAIM: &str = "exp";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claims(Map<String, Value>);

impl Claims {
    /// Claims carrying an identity and a role.
    pub fn new(identity: impl Into<String>, role: impl Into<String>) -> Self {
        let mut map = Map::new();
        map.insert(IDENTITY_CLAIM.to_string(), Value::String(identity.into()));
        map.insert(ROLE_CLAIM.to_string(), Value::String(role.into()));
        Self(map)
    }

    /// Adds a caller-supplied claim.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn identity(&self) -> Option<&str> {
        self.get(IDENTITY_CLAIM).and_then(Value::as_str)
    }

    pub fn role(&self) -> Option<&str> {
        self.get(ROLE_CLAIM).and_then(Value::as_str)
    }

    pub fn issued_at(&self) -> Option<i64> {
        self.get(ISSUED_AT_CLAIM).and_then(Value::as_i64)
    }

    pub fn expires_at(&self) -> Option<i64> {
        self.get(EXPIRES_AT_CLAIM).and_then(Value::as_i64)
    }
}

impl From<Map<String, Value>> for Claims {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Claims> for Value {
    fn from(claims: Claims) -> Self {
        Value::Object(claims.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_sets_identity_and_role() {
        let claims = Claims::new("3fa85f64-5717-4562-b3fc-2c963f66afa6", "admin");
        assert_eq!(claims.identity(), Some("3fa85f64-5717-4562-b3fc-2c963f66afa6"));
        assert_eq!(claims.role(), Some("admin"));
        assert_eq!(claims.issued_at(), None);
    }

    #[test]
    fn test_extra_claims() {
        let claims = Claims::new("u-1", "driver").with("school", "north");
        assert_eq!(claims.get("school"), Some(&json!("north")));
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let claims = Claims::new("u-1", "parent").with("exp", 10);
        let value = serde_json::to_value(&claims).unwrap();
        assert_eq!(value, json!({ "uuid": "u-1", "role": "parent", "exp": 10 }));

        let back: Claims = serde_json::from_value(value).unwrap();
        assert_eq!(back.expires_at(), Some(10));
    }

    #[test]
    fn test_non_string_role_is_absent() {
        let claims = Claims::from(
            json!({ "uuid": 7, "role": ["admin"] })
                .as_object()
                .cloned()
                .unwrap(),
        );
        assert_eq!(claims.identity(), None);
        assert_eq!(claims.role(), None);
    }
}
