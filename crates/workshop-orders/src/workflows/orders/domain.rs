use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// External-facing order identifier assigned by the order store, distinct
/// from any internal row id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Folio(pub String);

impl std::fmt::Display for Folio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Client reference. `id == None` marks a walk-in (unregistered) client, in
/// which case a phone number is mandatory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRef {
    #[serde(default)]
    pub id: Option<String>,
    pub full_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

impl ClientRef {
    pub fn is_walk_in(&self) -> bool {
        self.id.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleRef {
    pub vin: String,
    pub plate: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub odometer: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Completed,
}

impl OrderStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Completed => "Completed",
        }
    }
}

/// Hand-back checklist captured at delivery. Unrelated to the inspection
/// checklist: five boolean flags, no ratings, no evidence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryChecklist {
    #[serde(default)]
    pub documents: bool,
    #[serde(default)]
    pub keys: bool,
    #[serde(default)]
    pub tools: bool,
    #[serde(default)]
    pub accessories: bool,
    #[serde(default)]
    pub fuel: bool,
}

impl DeliveryChecklist {
    pub const fn flags(self) -> [(&'static str, bool); 5] {
        [
            ("Documents", self.documents),
            ("Keys", self.keys),
            ("Tools", self.tools),
            ("Accessories", self.accessories),
            ("Fuel", self.fuel),
        ]
    }
}

/// In-memory, editable representation of an order before it is persisted, or
/// freshly hydrated from a stored record by folio search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub client: ClientRef,
    pub vehicle: VehicleRef,
    pub technician_name: String,
    pub service_name: String,
    pub activity_description: String,
    pub supplies_used: String,
    #[serde(default)]
    pub observations: String,
    pub start_time: DateTime<Utc>,
    #[serde(default)]
    pub delivery_checklist: DeliveryChecklist,
}

impl OrderDraft {
    /// Read-only hydration used by folio search: the returned draft
    /// pre-populates a new editing/printing session and never feeds back
    /// into the stored record.
    pub fn hydrate(record: &OrderRecord) -> Self {
        Self {
            client: record.client.clone(),
            vehicle: record.vehicle.clone(),
            technician_name: record.technician_name.clone(),
            service_name: record.service_name.clone(),
            activity_description: record.activity_description.clone(),
            supplies_used: record.supplies_used.clone(),
            observations: record.observations.clone(),
            start_time: record.start_time,
            delivery_checklist: record.delivery_checklist,
        }
    }
}

/// Persisted work order aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub folio: Folio,
    pub client: ClientRef,
    pub vehicle: VehicleRef,
    pub technician_name: String,
    pub service_name: String,
    pub activity_description: String,
    pub supplies_used: String,
    pub observations: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub total: f64,
    pub status: OrderStatus,
    pub delivery_checklist: DeliveryChecklist,
}

impl OrderRecord {
    /// Sentinel meaning "total has not been captured yet".
    pub const UNSET_TOTAL: f64 = 0.0;

    pub fn total_is_set(&self) -> bool {
        self.total != Self::UNSET_TOTAL
    }

    pub fn view(&self) -> OrderView {
        OrderView {
            folio: self.folio.0.clone(),
            client_name: self.client.full_name.clone(),
            plate: self.vehicle.plate.clone(),
            service_name: self.service_name.clone(),
            status: self.status,
            status_label: self.status.label(),
            total: self.total,
            start_time: self.start_time,
            end_time: self.end_time,
        }
    }
}

/// Flattened representation of an order for API responses and listings.
#[derive(Debug, Clone, Serialize)]
pub struct OrderView {
    pub folio: String,
    pub client_name: String,
    pub plate: String,
    pub service_name: String,
    pub status: OrderStatus,
    pub status_label: &'static str,
    pub total: f64,
    pub start_time: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
}
