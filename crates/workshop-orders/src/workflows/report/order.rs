use super::document::{
    Block, DeliveryFlagRow, Document, FieldRow, ReportKind, EMPTY_FIELD_PLACEHOLDER,
    SHOP_LETTERHEAD,
};
use crate::workflows::orders::domain::OrderRecord;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Compile the full service-order report: letterhead, client, vehicle,
/// service, and time-control field groups, the observation block, the
/// five-flag delivery checklist, and the two signature blocks. Deterministic
/// in the record; no store access.
pub fn compile_order_report(order: &OrderRecord) -> Document {
    let client = &order.client;
    let vehicle = &order.vehicle;

    let blocks = vec![
        Block::Letterhead {
            shop_name: SHOP_LETTERHEAD,
            document_title: ReportKind::Order.title(),
            reference: order.folio.0.clone(),
        },
        Block::FieldGroup {
            title: "Client",
            rows: vec![
                FieldRow::new("Name", &client.full_name),
                FieldRow::new("Phone", &client.phone),
                FieldRow::new("Email", &client.email),
            ],
        },
        Block::FieldGroup {
            title: "Vehicle",
            rows: vec![
                FieldRow::new("VIN", &vehicle.vin),
                FieldRow::new("Plate", &vehicle.plate),
                FieldRow::new("Model", &vehicle.model),
                FieldRow::new("Make", &vehicle.make),
            ],
        },
        Block::FieldGroup {
            title: "Service",
            rows: vec![
                FieldRow::new("Service", &order.service_name),
                FieldRow::new("Technician", &order.technician_name),
                FieldRow::new("Activity", &order.activity_description),
                FieldRow::new("Supplies used", &order.supplies_used),
                FieldRow::new("Status", order.status.label()),
                FieldRow::new("Total", &format_total(order)),
            ],
        },
        Block::FieldGroup {
            title: "Time control",
            rows: vec![
                FieldRow::new(
                    "Start",
                    &order.start_time.format(TIME_FORMAT).to_string(),
                ),
                FieldRow::new(
                    "End",
                    &order
                        .end_time
                        .map(|end| end.format(TIME_FORMAT).to_string())
                        .unwrap_or_default(),
                ),
            ],
        },
        Block::Paragraph {
            title: "Observations",
            text: if order.observations.trim().is_empty() {
                EMPTY_FIELD_PLACEHOLDER.to_string()
            } else {
                order.observations.clone()
            },
        },
        Block::DeliveryFlags {
            rows: order
                .delivery_checklist
                .flags()
                .into_iter()
                .map(|(label, delivered)| DeliveryFlagRow { label, delivered })
                .collect(),
        },
        Block::Signatures {
            left: "Technician signature",
            right: "Client signature",
        },
    ];

    Document::assemble(ReportKind::Order, Some(&client.full_name), blocks)
}

fn format_total(order: &OrderRecord) -> String {
    if order.total_is_set() {
        format!("${:.2}", order.total)
    } else {
        String::new()
    }
}
