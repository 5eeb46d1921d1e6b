//! User records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::de::null_default;

/// A user account. List and single endpoints share this shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "null_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub email: String,
    #[serde(deserialize_with = "null_default")]
    pub external_auth_id: String,
    #[serde(deserialize_with = "null_default")]
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_default")]
    pub profile_url: String,
    #[serde(deserialize_with = "null_default")]
    pub edit_url: String,
    #[serde(deserialize_with = "null_default")]
    pub avatar_url: String,
    #[serde(deserialize_with = "null_default")]
    pub roles: Vec<Role>,
}

/// Role membership of a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Role {
    #[serde(deserialize_with = "null_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_default")]
    pub display_name: String,
}
