use serde::{Deserialize, Serialize};

use super::document::{
    Block, ChecklistRow, Document, FieldRow, LegendEntry, ReportKind, EMPTY_FIELD_PLACEHOLDER,
    SHOP_LETTERHEAD,
};
use crate::workflows::inspection::{ChecklistSnapshot, InspectionElement};

/// Client and vehicle summary printed at the head of a checklist report.
/// Checklist sessions are not tied to a persisted order, so the summary
/// travels with the snapshot instead of being looked up.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientVehicleSummary {
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub vin: String,
    #[serde(default)]
    pub plate: String,
    #[serde(default)]
    pub make: String,
    #[serde(default)]
    pub model: String,
}

const LEGEND: [LegendEntry; 3] = [
    LegendEntry {
        label: "Good",
        description: "Component works correctly and shows no relevant wear.",
    },
    LegendEntry {
        label: "Fair",
        description: "Component works but shows wear; service recommended.",
    },
    LegendEntry {
        label: "Poor",
        description: "Component is damaged or unsafe and needs attention.",
    },
];

/// Compile the inspection checklist report: one table row per catalog
/// element (all 22, rated or not), the three-level legend, the general
/// observations block, and the two signature blocks.
pub fn compile_checklist_report(
    snapshot: &ChecklistSnapshot,
    info: &ClientVehicleSummary,
    general_observations: &str,
) -> Document {
    let rows = InspectionElement::ordered()
        .into_iter()
        .map(|element| {
            let item = snapshot.item(element);
            ChecklistRow {
                element,
                element_label: element.label(),
                condition_label: item.condition.label(),
                note: item.note.clone(),
            }
        })
        .collect();

    let blocks = vec![
        Block::Letterhead {
            shop_name: SHOP_LETTERHEAD,
            document_title: ReportKind::Checklist.title(),
            reference: info.plate.clone(),
        },
        Block::FieldGroup {
            title: "Client & vehicle",
            rows: vec![
                FieldRow::new("Client", &info.client_name),
                FieldRow::new("Phone", &info.phone),
                FieldRow::new("VIN", &info.vin),
                FieldRow::new("Plate", &info.plate),
                FieldRow::new("Make", &info.make),
                FieldRow::new("Model", &info.model),
            ],
        },
        Block::ChecklistTable { rows },
        Block::Legend {
            entries: LEGEND.to_vec(),
        },
        Block::Paragraph {
            title: "General observations",
            text: if general_observations.trim().is_empty() {
                EMPTY_FIELD_PLACEHOLDER.to_string()
            } else {
                general_observations.to_string()
            },
        },
        Block::Signatures {
            left: "Technician signature",
            right: "Client signature",
        },
    ];

    let client_name = if info.client_name.trim().is_empty() {
        None
    } else {
        Some(info.client_name.as_str())
    };

    Document::assemble(ReportKind::Checklist, client_name, blocks)
}
