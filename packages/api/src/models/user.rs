//! # User model for authenticated hotel accounts
//!
//! [`UserInfo`] is the record the backend returns from `/me`, `/login` and
//! `/adminlogin`. The backend does not send an `id`, so it is optional. Every
//! other key must be present or the record fails to decode. Names and role
//! come from nullable columns: a `null` name decodes to an empty string and a
//! `null` role to [`Role::Guest`], the column default.
//!
//! [`Role`] mirrors the `role` column of the backend's `loginusers` table.
//! Roles this client does not know about decode to [`Role::Unknown`] and grant
//! nothing.

use serde::{Deserialize, Deserializer, Serialize};

/// Account role as reported by the backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Guest,
    Admin,
    Staff,
    Superadmin,
    #[serde(other)]
    Unknown,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Guest => "guest",
            Role::Admin => "admin",
            Role::Staff => "staff",
            Role::Superadmin => "superadmin",
            Role::Unknown => "unknown",
        }
    }
}

/// User information returned by the session endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub username: String,
    #[serde(deserialize_with = "null_as_default")]
    pub firstname: String,
    #[serde(deserialize_with = "null_as_default")]
    pub lastname: String,
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub role: Role,
}

impl UserInfo {
    /// First name, falling back to the username when the backend has none.
    pub fn display_name(&self) -> &str {
        if self.firstname.is_empty() {
            &self.username
        } else {
            &self.firstname
        }
    }

    /// "First Last", trimmed when either half is missing.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
            .trim()
            .to_string()
    }
}

/// Decode an explicit `null` as the type's default. The key itself is still
/// required.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
