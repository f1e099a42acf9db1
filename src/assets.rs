//! Asset catalogue seam
//!
//! Same deal as the auth seam: handlers depend on [`AssetStore`], and the
//! shipped [`MockAssetStore`] fabricates records without touching object
//! storage. Nothing is retained between requests, so listing is always
//! empty no matter what was "uploaded" before.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::ident::IdGenerator;
use crate::types::Asset;
use crate::Result;

/// Fields a caller may supply when creating an asset
#[derive(Debug, Clone, Default)]
pub struct NewAsset {
    pub name: Option<String>,
}

#[async_trait]
pub trait AssetStore: Send + Sync {
    /// List all stored assets
    async fn list(&self) -> Result<Vec<Asset>>;

    /// Record a new asset and return it
    async fn create(&self, asset: NewAsset) -> Result<Asset>;
}

/// Mock store: empty listings, fabricated creation records
pub struct MockAssetStore {
    ids: Arc<IdGenerator>,
}

impl MockAssetStore {
    pub fn new(ids: Arc<IdGenerator>) -> Self {
        Self { ids }
    }
}

#[async_trait]
impl AssetStore for MockAssetStore {
    async fn list(&self) -> Result<Vec<Asset>> {
        Ok(Vec::new())
    }

    async fn create(&self, asset: NewAsset) -> Result<Asset> {
        let id = self.ids.next_id();
        let name = asset
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| "untitled".to_string());

        Ok(Asset {
            url: format!("https://cdn.example.com/assets/{id}"),
            id,
            name,
            content_type: "application/octet-stream".to_string(),
            size: 0,
            created_at: Utc::now(),
        })
    }
}
