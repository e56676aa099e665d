use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::roles::UserRole;

/// A stored account. The password hash never leaves the server.
#[derive(Debug, Clone)]
pub struct User {
    pub uuid: Uuid,
    pub role: UserRole,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            uuid: self.uuid,
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
            created_at: self.created_at,
        }
    }
}

/// Public view of a [`User`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub uuid: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

/// Input for creating an account; the password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub role: UserRole,
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
    pub role: UserRole,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountStatus {
    #[serde(rename = "hasAccount")]
    pub has_account: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverLocation {
    pub uuid: Uuid,
    pub lat: f64,
    pub lng: f64,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            uuid: Uuid::new_v4(),
            role: UserRole::Student,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password_hash: "$2b$12$hash".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_profile_omits_password_hash() {
        let user = sample_user();
        let json = serde_json::to_value(user.profile()).unwrap();
        assert_eq!(json["email"], "ada@example.com");
        assert_eq!(json["role"], "student");
        assert!(json.get("password_hash").is_none());
    }

    #[test]
    fn test_account_status_wire_name() {
        let json = serde_json::to_string(&AccountStatus { has_account: false }).unwrap();
        assert_eq!(json, r#"{"hasAccount":false}"#);
    }
}
