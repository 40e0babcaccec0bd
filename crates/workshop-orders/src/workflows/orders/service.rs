use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use super::domain::{Folio, OrderDraft, OrderRecord, OrderStatus};
use super::repository::{OrderStore, StoreError};
use super::validation::{validate_order_draft, DraftViolation};

/// Largest total amount the shop accepts for a single order.
pub const MAX_TOTAL: f64 = 1_000_000.0;

/// Lifecycle controller for work orders: the only write path to the remote
/// store. Guards run before any outbound request, so a rejected transition
/// never leaves the store half-updated.
pub struct OrderService<S> {
    store: Arc<S>,
}

impl<S> OrderService<S>
where
    S: OrderStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Create a new order from a draft. Validation violations block the
    /// submission outright; no remote call is made.
    pub async fn create(&self, draft: OrderDraft) -> Result<OrderRecord, OrderServiceError> {
        let violations = validate_order_draft(&draft, Utc::now());
        if !violations.is_empty() {
            return Err(OrderServiceError::Validation(violations));
        }

        let record = self.store.create_order(draft).await?;
        info!(folio = %record.folio, "order created");
        Ok(record)
    }

    /// Hydrate a fresh editable draft from a stored record. Read-only: the
    /// stored record is never mutated through this path.
    pub async fn find_by_folio(&self, folio: &str) -> Result<OrderDraft, OrderServiceError> {
        let record = self.fetch(folio).await?;
        Ok(OrderDraft::hydrate(&record))
    }

    /// Fetch the stored record itself, for listings and report compilation.
    pub async fn get(&self, folio: &str) -> Result<OrderRecord, OrderServiceError> {
        self.fetch(folio).await
    }

    /// Record the order total. Allowed exactly once per order: the stored
    /// total must still be the unset sentinel, and the amount must be a
    /// finite positive number within the accepted bound.
    pub async fn set_total(
        &self,
        folio: &str,
        amount: f64,
    ) -> Result<OrderRecord, OrderServiceError> {
        let mut record = self.fetch(folio).await?;

        if record.total_is_set() {
            return Err(GuardViolation::TotalAlreadySet.into());
        }
        if !amount.is_finite() || amount <= 0.0 || amount > MAX_TOTAL {
            return Err(GuardViolation::InvalidAmount(amount).into());
        }

        self.store.update_total(&record.folio, amount).await?;
        record.total = amount;
        info!(folio = %record.folio, amount, "order total captured");
        Ok(record)
    }

    /// Move a pending order to its terminal Completed state, stamping the
    /// end time. Orders may be created with a scheduled future start, so the
    /// stamp is clamped to never fall before `start_time`. A second call is
    /// rejected without touching the store, so the transition never produces
    /// two end-time writes.
    pub async fn finalize(&self, folio: &str) -> Result<OrderRecord, OrderServiceError> {
        let mut record = self.fetch(folio).await?;

        if record.status == OrderStatus::Completed {
            return Err(GuardViolation::AlreadyCompleted.into());
        }

        let end_time = Utc::now().max(record.start_time);
        self.store.finalize(&record.folio, end_time).await?;
        record.status = OrderStatus::Completed;
        record.end_time = Some(end_time);
        info!(folio = %record.folio, "order finalized");
        Ok(record)
    }

    /// Remove the order from the store. No soft delete, no undo.
    pub async fn delete(&self, folio: &str) -> Result<(), OrderServiceError> {
        let folio = non_empty_folio(folio)?;
        self.store.delete_order(&Folio(folio.to_string())).await?;
        info!(%folio, "order deleted");
        Ok(())
    }

    pub async fn list(&self) -> Result<Vec<OrderRecord>, OrderServiceError> {
        Ok(self.store.list_orders().await?)
    }

    async fn fetch(&self, folio: &str) -> Result<OrderRecord, OrderServiceError> {
        let folio = non_empty_folio(folio)?;
        self.store
            .get_by_folio(folio)
            .await?
            .ok_or(OrderServiceError::NotFound)
    }
}

fn non_empty_folio(folio: &str) -> Result<&str, OrderServiceError> {
    let trimmed = folio.trim();
    if trimmed.is_empty() {
        return Err(OrderServiceError::Validation(vec![
            DraftViolation::MissingFolio,
        ]));
    }
    Ok(trimmed)
}

/// State-machine rejections: surfaced distinctly from validation errors and
/// raised before any remote call is attempted.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum GuardViolation {
    #[error("order total has already been set")]
    TotalAlreadySet,
    #[error("total must be a finite positive amount of at most 1000000, got {0}")]
    InvalidAmount(f64),
    #[error("order is already completed")]
    AlreadyCompleted,
}

/// Error raised by the order lifecycle controller.
#[derive(Debug, thiserror::Error)]
pub enum OrderServiceError {
    #[error("draft validation failed")]
    Validation(Vec<DraftViolation>),
    #[error(transparent)]
    Guard(#[from] GuardViolation),
    #[error("order not found")]
    NotFound,
    #[error(transparent)]
    Store(#[from] StoreError),
}
