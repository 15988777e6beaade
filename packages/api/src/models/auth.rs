//! Request and response bodies of the session endpoints.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use super::UserInfo;

/// The one status literal the backend uses to report a successful login or
/// signup. Anything else, including misspellings, is a failure.
pub const SUCCESS_STATUS: &str = "success";

/// Body of `POST /login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Body of `POST /adminlogin`. Admin accounts sign in by email.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminLoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /signup`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SignupRequest {
    pub firstname: String,
    pub lastname: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirmpassword: String,
}

/// Response of the login and signup endpoints.
///
/// `user` is a full record for logins; signup only echoes a partial one, so
/// it is never trusted and the session is re-read from `/me` instead. A
/// partial record decodes as `None` rather than failing the whole response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AuthResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, skip_serializing, deserialize_with = "complete_user")]
    pub user: Option<UserInfo>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum UserRecord {
    Complete(UserInfo),
    Partial(IgnoredAny),
}

fn complete_user<'de, D>(deserializer: D) -> Result<Option<UserInfo>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<UserRecord>::deserialize(deserializer)? {
        Some(UserRecord::Complete(user)) => Some(user),
        Some(UserRecord::Partial(_)) | None => None,
    })
}

impl AuthResponse {
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some(SUCCESS_STATUS)
    }
}

/// Response of `GET /me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MeResponse {
    #[serde(default)]
    pub user: Option<UserInfo>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Generic `{ message, status }` body, used for `/logout` and error bodies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_success() {
        let res: AuthResponse = serde_json::from_str(
            r#"{"message":"Login successful","status":"success","access_token":"t","user":{"username":"jdoe","email":"j@doe.io","role":"guest","firstname":"Jane","lastname":"Doe"}}"#,
        )
        .unwrap();
        assert!(res.is_success());
        assert_eq!(res.user.unwrap().username, "jdoe");
    }

    #[test]
    fn test_misspelled_status_is_not_success() {
        let res: AuthResponse = serde_json::from_str(
            r#"{"message":"Signup succesfull","status":"succes","user":{"firstname":"A","lastname":"B","email":"a@b.io"}}"#,
        )
        .unwrap();
        assert!(!res.is_success());
        assert!(res.user.is_none());
    }

    #[test]
    fn test_partial_login_user_is_dropped() {
        let res: AuthResponse = serde_json::from_str(
            r#"{"status":"success","user":{"email":"a@b.io"}}"#,
        )
        .unwrap();
        assert!(res.is_success());
        assert!(res.user.is_none());
    }

    #[test]
    fn test_me_with_partial_user_fails_to_decode() {
        let res = serde_json::from_str::<MeResponse>(r#"{"user":{"email":"a@b.io"}}"#);
        assert!(res.is_err());
    }

    #[test]
    fn test_missing_status() {
        let res: AuthResponse =
            serde_json::from_str(r#"{"message":"Both username and password required"}"#).unwrap();
        assert!(!res.is_success());
        assert_eq!(
            res.message.as_deref(),
            Some("Both username and password required")
        );
    }

    #[test]
    fn test_me_without_user() {
        let res: MeResponse =
            serde_json::from_str(r#"{"message":"No token provided","user":null}"#).unwrap();
        assert!(res.user.is_none());
    }
}
