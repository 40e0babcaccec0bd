use async_trait::async_trait;
use chrono::{DateTime, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use workshop_orders::workflows::orders::{
    ContentStore, Folio, OrderDraft, OrderRecord, OrderStatus, OrderStore, StoreError, UploadError,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// In-process stand-in for the remote order store. Besides folio assignment
/// it enforces the server-side halves of the lifecycle guards: the total is
/// write-once and Completed is terminal, independent of any client-side
/// check.
#[derive(Default)]
pub(crate) struct InMemoryOrderStore {
    records: Mutex<HashMap<String, OrderRecord>>,
    sequence: AtomicU64,
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn create_order(&self, draft: OrderDraft) -> Result<OrderRecord, StoreError> {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        let folio = Folio(format!("OS-{id:05}"));
        let record = OrderRecord {
            folio: folio.clone(),
            client: draft.client,
            vehicle: draft.vehicle,
            technician_name: draft.technician_name,
            service_name: draft.service_name,
            activity_description: draft.activity_description,
            supplies_used: draft.supplies_used,
            observations: draft.observations,
            start_time: draft.start_time,
            end_time: None,
            total: OrderRecord::UNSET_TOTAL,
            status: OrderStatus::Pending,
            delivery_checklist: draft.delivery_checklist,
        };
        let mut records = self.records.lock().expect("store mutex poisoned");
        records.insert(folio.0, record.clone());
        Ok(record)
    }

    async fn get_by_folio(&self, folio: &str) -> Result<Option<OrderRecord>, StoreError> {
        let records = self.records.lock().expect("store mutex poisoned");
        Ok(records.get(folio).cloned())
    }

    async fn update_total(&self, folio: &Folio, amount: f64) -> Result<(), StoreError> {
        let mut records = self.records.lock().expect("store mutex poisoned");
        let record = records.get_mut(&folio.0).ok_or(StoreError::NotFound)?;
        if record.total_is_set() {
            return Err(StoreError::Rejected("total already set".to_string()));
        }
        record.total = amount;
        Ok(())
    }

    async fn finalize(&self, folio: &Folio, end_time: DateTime<Utc>) -> Result<(), StoreError> {
        let mut records = self.records.lock().expect("store mutex poisoned");
        let record = records.get_mut(&folio.0).ok_or(StoreError::NotFound)?;
        if record.status == OrderStatus::Completed {
            return Err(StoreError::Rejected("order already completed".to_string()));
        }
        record.status = OrderStatus::Completed;
        record.end_time = Some(end_time);
        Ok(())
    }

    async fn delete_order(&self, folio: &Folio) -> Result<(), StoreError> {
        let mut records = self.records.lock().expect("store mutex poisoned");
        records.remove(&folio.0).ok_or(StoreError::NotFound)?;
        Ok(())
    }

    async fn list_orders(&self) -> Result<Vec<OrderRecord>, StoreError> {
        let records = self.records.lock().expect("store mutex poisoned");
        let mut all: Vec<_> = records.values().cloned().collect();
        all.sort_by(|a, b| a.folio.0.cmp(&b.folio.0));
        Ok(all)
    }
}

/// In-process content store returning opaque references for uploaded
/// evidence images.
#[derive(Default)]
pub(crate) struct InMemoryContentStore {
    uploads: Mutex<Vec<usize>>,
}

#[async_trait]
impl ContentStore for InMemoryContentStore {
    async fn upload_image(&self, bytes: &[u8]) -> Result<String, UploadError> {
        if bytes.is_empty() {
            return Err(UploadError::Failed("empty image payload".to_string()));
        }
        let mut uploads = self.uploads.lock().expect("upload mutex poisoned");
        uploads.push(bytes.len());
        Ok(format!("mem://evidence/{:04}", uploads.len()))
    }
}
