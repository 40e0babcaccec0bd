use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::domain::{Folio, OrderDraft, OrderRecord};

/// Remote order store consumed by the lifecycle controller. Every call is an
/// outbound request; implementations must not block the caller.
///
/// The store is expected to enforce the write-once total rule on its side as
/// well, so two clients that both observed `total == 0` cannot both win the
/// `update_total` race.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persist a validated draft. The store assigns the folio.
    async fn create_order(&self, draft: OrderDraft) -> Result<OrderRecord, StoreError>;
    async fn get_by_folio(&self, folio: &str) -> Result<Option<OrderRecord>, StoreError>;
    async fn update_total(&self, folio: &Folio, amount: f64) -> Result<(), StoreError>;
    async fn finalize(&self, folio: &Folio, end_time: DateTime<Utc>) -> Result<(), StoreError>;
    async fn delete_order(&self, folio: &Folio) -> Result<(), StoreError>;
    async fn list_orders(&self) -> Result<Vec<OrderRecord>, StoreError>;
}

/// Error enumeration for order-store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("order not found")]
    NotFound,
    #[error("store rejected the write: {0}")]
    Rejected(String),
    #[error("order store unavailable: {0}")]
    Unavailable(String),
}

/// External content store holding uploaded evidence images. Returns an
/// opaque URL-like reference on success.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn upload_image(&self, bytes: &[u8]) -> Result<String, UploadError>;
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("image upload failed: {0}")]
    Failed(String),
}
