use crate::infra::{InMemoryContentStore, InMemoryOrderStore};
use chrono::{Duration, Utc};
use clap::Args;
use std::sync::Arc;
use workshop_orders::error::AppError;
use workshop_orders::workflows::inspection::{ChecklistSnapshot, Condition};
use workshop_orders::workflows::orders::{
    ClientRef, DeliveryChecklist, OrderDraft, OrderService, VehicleRef,
};
use workshop_orders::workflows::report::{
    compile_checklist_report, compile_evidence_report, compile_order_report, ClientVehicleSummary,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoReportArgs {
    /// Client name printed on the sample documents
    #[arg(long, default_value = "Ana Robles")]
    pub(crate) client_name: String,
    /// Attach sample evidence to a couple of checklist elements
    #[arg(long)]
    pub(crate) with_evidence: bool,
}

/// Drive the full lifecycle against the in-memory store and print the three
/// compiled report documents as JSON.
pub(crate) async fn run_demo_report(args: DemoReportArgs) -> Result<(), AppError> {
    let store = Arc::new(InMemoryOrderStore::default());
    let service = OrderService::new(store);

    let draft = sample_draft(&args.client_name);
    let summary = ClientVehicleSummary {
        client_name: draft.client.full_name.clone(),
        phone: draft.client.phone.clone(),
        vin: draft.vehicle.vin.clone(),
        plate: draft.vehicle.plate.clone(),
        make: draft.vehicle.make.clone(),
        model: draft.vehicle.model.clone(),
    };

    let record = service.create(draft).await?;
    service.set_total(&record.folio.0, 1_850.0).await?;
    let completed = service.finalize(&record.folio.0).await?;

    let mut snapshot = demo_snapshot();
    if args.with_evidence {
        let content = InMemoryContentStore::default();
        for element in ["brakes", "front_tires"] {
            snapshot
                .attach_evidence(element, b"demo-image-bytes", &content)
                .await?;
        }
    }

    let order_report = compile_order_report(&completed);
    let checklist_report =
        compile_checklist_report(&snapshot, &summary, "Front brake wear close to limit.");
    let evidence_report = compile_evidence_report(&snapshot, Some(&summary.client_name));

    for document in [&order_report, &checklist_report, &evidence_report] {
        println!("{}", serde_json::to_string_pretty(document)?);
    }

    Ok(())
}

fn sample_draft(client_name: &str) -> OrderDraft {
    OrderDraft {
        client: ClientRef {
            id: Some("client-001".to_string()),
            full_name: client_name.to_string(),
            phone: "5512345678".to_string(),
            email: "client@example.com".to_string(),
        },
        vehicle: VehicleRef {
            vin: "1HGCM82633A004352".to_string(),
            plate: "ABC1234".to_string(),
            make: "Honda".to_string(),
            model: "Accord".to_string(),
            year: 2019,
            odometer: 84_500,
        },
        technician_name: "Luis Mora".to_string(),
        service_name: "Brake service".to_string(),
        activity_description: "Replace front brake pads and resurface rotors".to_string(),
        supplies_used: "Brake pads, brake fluid".to_string(),
        observations: "Customer reports squealing at low speed".to_string(),
        start_time: Utc::now() + Duration::minutes(15),
        delivery_checklist: DeliveryChecklist {
            documents: true,
            keys: true,
            fuel: true,
            ..DeliveryChecklist::default()
        },
    }
}

fn demo_snapshot() -> ChecklistSnapshot {
    let mut snapshot = ChecklistSnapshot::new();
    for (element, condition, note) in [
        ("brakes", Condition::Poor, "pads below 2mm"),
        ("front_tires", Condition::Fair, "outer edge wear"),
        ("battery", Condition::Good, ""),
        ("engine_oil", Condition::Good, ""),
    ] {
        snapshot
            .set_condition(element, condition)
            .expect("element is in the catalog");
        if !note.is_empty() {
            snapshot
                .set_note(element, note)
                .expect("element is in the catalog");
        }
    }
    snapshot
}
