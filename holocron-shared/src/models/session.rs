use serde::{Deserialize, Serialize};

/// Profile fields kept for the signed-in user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionUser {
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
}

/// Request body for `/api/login` and `/api/users`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
}

impl Credentials {
    /// Email/password credentials.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            first_name: None,
        }
    }
}

/// Successful login or signup response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthPayload {
    pub access_token: String,
    #[serde(flatten)]
    pub user: SessionUser,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn auth_payload_flattens_user_fields() {
        let payload: AuthPayload = serde_json::from_value(json!({
            "access_token": "abc",
            "email": "leia@rebellion.com",
            "first_name": "Leia",
            "id": 7
        }))
        .unwrap();

        assert_eq!(payload.access_token, "abc");
        assert_eq!(payload.user.first_name.as_deref(), Some("Leia"));
    }

    #[test]
    fn credentials_omit_absent_first_name() {
        let body = serde_json::to_value(Credentials::new("a@b.c", "pw")).unwrap();
        assert_eq!(body, json!({"email": "a@b.c", "password": "pw"}));
    }
}
