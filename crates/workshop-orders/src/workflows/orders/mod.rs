//! Work-order lifecycle: draft validation, the Pending → Completed state
//! machine, and the remote store boundary.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    ClientRef, DeliveryChecklist, Folio, OrderDraft, OrderRecord, OrderStatus, OrderView,
    VehicleRef,
};
pub use repository::{ContentStore, OrderStore, StoreError, UploadError};
pub use router::order_router;
pub use service::{GuardViolation, OrderService, OrderServiceError, MAX_TOTAL};
pub use validation::{validate_contact, validate_order_draft, validate_vehicle_ids, DraftViolation};
