//! User endpoints.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use bs_core::error::BsResult;
use bs_models::User;

use super::{is_false, is_zero};
use crate::client::ApiClient;
use crate::form::{json_body, Form, FormBody};
use crate::query::{with_query, QueryParams};
use crate::response::{parse_multiple, parse_single};

/// Parameters for creating or updating a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserParams {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub email: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub external_auth_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub language: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<i64>,
    #[serde(skip_serializing_if = "is_false")]
    pub send_invite: bool,
}

#[async_trait]
impl Form for UserParams {
    async fn form(&self) -> BsResult<FormBody> {
        json_body(self)
    }
}

/// Options for deleting a user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserDeleteParams {
    /// Hand the deleted user's content over to this user.
    #[serde(skip_serializing_if = "is_zero")]
    pub migrate_ownership_id: i64,
}

#[async_trait]
impl Form for UserDeleteParams {
    async fn form(&self) -> BsResult<FormBody> {
        json_body(self)
    }
}

impl ApiClient {
    /// List users, optionally paged, sorted and filtered.
    pub async fn list_users(&self, params: Option<&QueryParams>) -> BsResult<Vec<User>> {
        let raw = self.get(&with_query("/users", params)).await?;
        parse_multiple(&raw)
    }

    /// Get a single user.
    pub async fn get_user(&self, id: i64) -> BsResult<User> {
        let raw = self.get(&format!("/users/{id}")).await?;
        parse_single(&raw)
    }

    /// Create a user.
    pub async fn create_user(&self, params: &UserParams) -> BsResult<User> {
        let raw = self.post("/users", params).await?;
        parse_single(&raw)
    }

    /// Update a user.
    pub async fn update_user(&self, id: i64, params: &UserParams) -> BsResult<User> {
        let raw = self.put(&format!("/users/{id}"), params).await?;
        parse_single(&raw)
    }

    /// Delete a user, optionally migrating their content to another user.
    pub async fn delete_user(&self, id: i64, params: Option<UserDeleteParams>) -> BsResult<bool> {
        let params = params.unwrap_or_default();
        self.delete(&format!("/users/{id}"), &params).await?;
        Ok(true)
    }
}
