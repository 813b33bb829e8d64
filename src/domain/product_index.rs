use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{ProductId, SyncStatus};

/// Catalog entry mirrored from the external product source.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductIndex {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Free-text classification.
    pub category: Option<String>,
    /// Manual ranking override, the primary sort key.
    pub admin_priority: i32,
    pub popularity_score: f64,
    pub sync_status: SyncStatus,
    pub created_at: NaiveDateTime,
}

/// Record written by the sync process.
#[derive(Clone, Debug)]
pub struct NewProductIndex {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub category: Option<String>,
    pub admin_priority: i32,
    pub popularity_score: f64,
    pub sync_status: SyncStatus,
    pub created_at: NaiveDateTime,
}

impl NewProductIndex {
    #[must_use]
    pub fn new(
        id: ProductId,
        name: String,
        description: Option<String>,
        category: Option<String>,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            name: name.trim().to_string(),
            description: description
                .map(|s| s.trim().to_string())
                .unwrap_or_default(),
            category: category
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            admin_priority: 0,
            popularity_score: 0.0,
            sync_status: SyncStatus::Pending,
            created_at,
        }
    }

    #[must_use]
    pub fn with_ranking(mut self, admin_priority: i32, popularity_score: f64) -> Self {
        self.admin_priority = admin_priority;
        self.popularity_score = popularity_score;
        self
    }

    #[must_use]
    pub fn with_status(mut self, sync_status: SyncStatus) -> Self {
        self.sync_status = sync_status;
        self
    }
}
