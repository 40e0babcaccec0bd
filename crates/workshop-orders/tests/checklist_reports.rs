use async_trait::async_trait;

use workshop_orders::workflows::inspection::{
    ChecklistSnapshot, Condition, InspectionElement,
};
use workshop_orders::workflows::orders::{ContentStore, UploadError};
use workshop_orders::workflows::report::{
    compile_checklist_report, compile_evidence_report, Block, ClientVehicleSummary, ReportKind,
    EMPTY_FIELD_PLACEHOLDER, NO_EVIDENCE_SENTENCE, NO_OBSERVATIONS_PLACEHOLDER,
};

struct StaticContentStore;

#[async_trait]
impl ContentStore for StaticContentStore {
    async fn upload_image(&self, _bytes: &[u8]) -> Result<String, UploadError> {
        Ok("https://content.example/evidence/1.jpg".to_string())
    }
}

fn summary() -> ClientVehicleSummary {
    ClientVehicleSummary {
        client_name: "Marta Esquivel".to_string(),
        phone: "3312345678".to_string(),
        vin: "3VWFE21C04M000123".to_string(),
        plate: "XYZ9876".to_string(),
        make: "Volkswagen".to_string(),
        model: "Jetta".to_string(),
    }
}

fn checklist_rows(document: &workshop_orders::workflows::report::Document) -> Vec<(&str, &str)> {
    document
        .blocks()
        .filter_map(|block| match block {
            Block::ChecklistTable { rows } => Some(rows),
            _ => None,
        })
        .flatten()
        .map(|row| (row.condition_label, row.note.as_str()))
        .collect()
}

fn evidence_blocks(
    document: &workshop_orders::workflows::report::Document,
) -> Vec<(&'static str, String, String)> {
    document
        .blocks()
        .filter_map(|block| match block {
            Block::Evidence {
                element_label,
                image_ref,
                note,
            } => Some((*element_label, image_ref.clone(), note.clone())),
            _ => None,
        })
        .collect()
}

#[test]
fn all_unrated_snapshot_still_prints_every_row_blank() {
    let snapshot = ChecklistSnapshot::new();
    let document = compile_checklist_report(&snapshot, &summary(), "");

    let rows = checklist_rows(&document);
    assert_eq!(rows.len(), 22);
    for (condition, note) in rows {
        assert_eq!(condition, "");
        assert_eq!(note, "");
    }

    // Empty general observations still print a placeholder block.
    let placeholder_paragraph = document.blocks().any(|block| {
        matches!(block, Block::Paragraph { title, text }
            if *title == "General observations" && text == EMPTY_FIELD_PLACEHOLDER)
    });
    assert!(placeholder_paragraph);
}

#[test]
fn rated_elements_show_their_labels_in_catalog_order() {
    let mut snapshot = ChecklistSnapshot::new();
    snapshot
        .set_condition("brakes", Condition::Poor)
        .expect("brakes in catalog");
    snapshot
        .set_note("brakes", "pads below 2mm")
        .expect("brakes in catalog");
    snapshot
        .set_condition("horn", Condition::Good)
        .expect("horn in catalog");

    let document = compile_checklist_report(&snapshot, &summary(), "Vehicle ok overall");
    let rows = checklist_rows(&document);
    assert_eq!(rows.len(), 22);

    let brakes_index = InspectionElement::ordered()
        .iter()
        .position(|element| *element == InspectionElement::Brakes)
        .expect("brakes in catalog");
    assert_eq!(rows[brakes_index], ("Poor", "pads below 2mm"));

    let legend_present = document
        .blocks()
        .any(|block| matches!(block, Block::Legend { entries } if entries.len() == 3));
    assert!(legend_present, "three-level legend must print");
}

#[test]
fn evidence_report_without_evidence_is_the_fixed_sentence() {
    let snapshot = ChecklistSnapshot::new();
    let document = compile_evidence_report(&snapshot, None);

    assert_eq!(document.kind, ReportKind::Evidence);
    assert_eq!(document.file_name, "EvidenceReport_Cliente");
    assert!(evidence_blocks(&document).is_empty());

    let notices: Vec<_> = document
        .blocks()
        .filter_map(|block| match block {
            Block::Notice { text } => Some(*text),
            _ => None,
        })
        .collect();
    assert_eq!(notices, vec![NO_EVIDENCE_SENTENCE]);
}

#[tokio::test]
async fn evidence_on_one_of_twenty_two_elements_yields_one_block() {
    let mut snapshot = ChecklistSnapshot::new();
    snapshot
        .attach_evidence("spare_tire", b"image-bytes", &StaticContentStore)
        .await
        .expect("upload succeeds");

    let document = compile_evidence_report(&snapshot, Some("Marta Esquivel"));
    assert_eq!(document.file_name, "EvidenceReport_Marta Esquivel");

    let blocks = evidence_blocks(&document);
    assert_eq!(blocks.len(), 1);
    let (label, image_ref, note) = &blocks[0];
    assert_eq!(*label, InspectionElement::SpareTire.label());
    assert_eq!(image_ref, "https://content.example/evidence/1.jpg");
    assert_eq!(note, NO_OBSERVATIONS_PLACEHOLDER);

    // No fallback sentence when evidence exists.
    assert!(!document
        .blocks()
        .any(|block| matches!(block, Block::Notice { .. })));
}

#[tokio::test]
async fn evidence_note_prints_when_present() {
    let mut snapshot = ChecklistSnapshot::new();
    snapshot
        .attach_evidence("bodywork", b"image-bytes", &StaticContentStore)
        .await
        .expect("upload succeeds");
    snapshot
        .set_note("bodywork", "scratch on rear door")
        .expect("bodywork in catalog");

    let document = compile_evidence_report(&snapshot, None);
    let blocks = evidence_blocks(&document);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].2, "scratch on rear door");
}

#[test]
fn reports_are_deterministic_for_the_same_input() {
    let mut snapshot = ChecklistSnapshot::new();
    snapshot
        .set_condition("steering", Condition::Fair)
        .expect("steering in catalog");

    let first = compile_checklist_report(&snapshot, &summary(), "obs");
    let second = compile_checklist_report(&snapshot, &summary(), "obs");
    assert_eq!(first, second);
}
