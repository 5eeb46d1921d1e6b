//! Recycle bin endpoints.

use serde::Deserialize;

use bs_core::error::{BsError, BsResult};
use bs_models::RecycleBinItem;

use crate::client::ApiClient;
use crate::form::Blank;
use crate::response::parse_multiple;

/// Counts default to zero when the key is absent.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RestoreCount {
    restore_count: i64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DeleteCount {
    delete_count: i64,
}

impl ApiClient {
    /// List the items in the recycle bin.
    pub async fn list_recycle_bin_items(&self) -> BsResult<Vec<RecycleBinItem>> {
        let raw = self.get("/recycle-bin").await?;
        parse_multiple(&raw)
    }

    /// Restore an item, returning how many records came back.
    pub async fn restore_recycle_bin_item(&self, id: i64) -> BsResult<i64> {
        let raw = self.put(&format!("/recycle-bin/{id}"), &Blank).await?;
        let resp: RestoreCount = serde_json::from_slice(&raw)
            .map_err(|e| BsError::Decode(format!("invalid restore response: {e}")))?;
        Ok(resp.restore_count)
    }

    /// Permanently delete an item, returning how many records were removed.
    pub async fn delete_recycle_bin_item(&self, id: i64) -> BsResult<i64> {
        let raw = self.delete(&format!("/recycle-bin/{id}"), &Blank).await?;
        let resp: DeleteCount = serde_json::from_slice(&raw)
            .map_err(|e| BsError::Decode(format!("invalid delete response: {e}")))?;
        Ok(resp.delete_count)
    }
}
