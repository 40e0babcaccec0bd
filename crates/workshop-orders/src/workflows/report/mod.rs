//! Printable report compilation: pure projections from captured order and
//! checklist state into fixed-layout paginated documents. Nothing in this
//! module reads or writes the order or content stores.

mod checklist;
mod document;
mod evidence;
mod order;

pub use checklist::{compile_checklist_report, ClientVehicleSummary};
pub use document::{
    report_file_name, Block, ChecklistRow, DeliveryFlagRow, Document, FieldRow, LegendEntry, Page,
    ReportKind, EMPTY_FIELD_PLACEHOLDER, FALLBACK_CLIENT_NAME, PAGE_CAPACITY_UNITS,
    SHOP_LETTERHEAD,
};
pub use evidence::{compile_evidence_report, NO_EVIDENCE_SENTENCE, NO_OBSERVATIONS_PLACEHOLDER};
pub use order::compile_order_report;
