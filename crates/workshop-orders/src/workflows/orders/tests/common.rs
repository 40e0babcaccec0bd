use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use crate::workflows::orders::domain::{
    ClientRef, DeliveryChecklist, Folio, OrderDraft, OrderRecord, OrderStatus, VehicleRef,
};
use crate::workflows::orders::repository::{OrderStore, StoreError};
use crate::workflows::orders::service::OrderService;

pub(super) fn client() -> ClientRef {
    ClientRef {
        id: Some("client-001".to_string()),
        full_name: "Ana Robles".to_string(),
        phone: "5512345678".to_string(),
        email: "ana@example.com".to_string(),
    }
}

pub(super) fn walk_in_client() -> ClientRef {
    ClientRef {
        id: None,
        full_name: "Pedro Lima".to_string(),
        phone: "5587654321".to_string(),
        email: String::new(),
    }
}

pub(super) fn vehicle() -> VehicleRef {
    VehicleRef {
        vin: "1HGCM82633A004352".to_string(),
        plate: "ABC1234".to_string(),
        make: "Honda".to_string(),
        model: "Accord".to_string(),
        year: 2019,
        odometer: 84_500,
    }
}

pub(super) fn draft() -> OrderDraft {
    OrderDraft {
        client: client(),
        vehicle: vehicle(),
        technician_name: "Luis Mora".to_string(),
        service_name: "Brake service".to_string(),
        activity_description: "Replace front brake pads and resurface rotors".to_string(),
        supplies_used: "Brake pads, brake fluid".to_string(),
        observations: "Customer reports squealing".to_string(),
        start_time: Utc::now() + Duration::minutes(30),
        delivery_checklist: DeliveryChecklist {
            documents: true,
            keys: true,
            ..DeliveryChecklist::default()
        },
    }
}

pub(super) fn short_vin_draft() -> OrderDraft {
    let mut draft = draft();
    draft.vehicle.vin = "SHORTVIN".to_string();
    draft
}

pub(super) fn build_service() -> (OrderService<MemoryOrderStore>, Arc<MemoryOrderStore>) {
    let store = Arc::new(MemoryOrderStore::default());
    (OrderService::new(store.clone()), store)
}

/// In-memory stand-in for the remote order store. Mirrors the server-side
/// guards the real store is expected to enforce: write-once total and a
/// terminal Completed status.
#[derive(Default)]
pub(super) struct MemoryOrderStore {
    records: Mutex<HashMap<String, OrderRecord>>,
    sequence: AtomicU64,
}

impl MemoryOrderStore {
    pub(super) fn stored_count(&self) -> usize {
        self.records.lock().expect("store mutex poisoned").len()
    }

    pub(super) fn stored(&self, folio: &str) -> Option<OrderRecord> {
        self.records
            .lock()
            .expect("store mutex poisoned")
            .get(folio)
            .cloned()
    }
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
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
        self.records
            .lock()
            .expect("store mutex poisoned")
            .insert(folio.0, record.clone());
        Ok(record)
    }

    async fn get_by_folio(&self, folio: &str) -> Result<Option<OrderRecord>, StoreError> {
        Ok(self
            .records
            .lock()
            .expect("store mutex poisoned")
            .get(folio)
            .cloned())
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

/// Store double that fails every operation, for remote-failure paths.
pub(super) struct UnavailableOrderStore;

#[async_trait]
impl OrderStore for UnavailableOrderStore {
    async fn create_order(&self, _draft: OrderDraft) -> Result<OrderRecord, StoreError> {
        Err(StoreError::Unavailable("store offline".to_string()))
    }

    async fn get_by_folio(&self, _folio: &str) -> Result<Option<OrderRecord>, StoreError> {
        Err(StoreError::Unavailable("store offline".to_string()))
    }

    async fn update_total(&self, _folio: &Folio, _amount: f64) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("store offline".to_string()))
    }

    async fn finalize(&self, _folio: &Folio, _end_time: DateTime<Utc>) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("store offline".to_string()))
    }

    async fn delete_order(&self, _folio: &Folio) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("store offline".to_string()))
    }

    async fn list_orders(&self) -> Result<Vec<OrderRecord>, StoreError> {
        Err(StoreError::Unavailable("store offline".to_string()))
    }
}
