use super::document::{Block, Document, ReportKind, SHOP_LETTERHEAD};
use crate::workflows::inspection::ChecklistSnapshot;

/// Printed once, alone, when no checklist element carries evidence.
pub const NO_EVIDENCE_SENTENCE: &str =
    "No photographic evidence was captured during this inspection.";

/// Note placeholder for evidence items whose note was left empty.
pub const NO_OBSERVATIONS_PLACEHOLDER: &str = "No observations recorded.";

/// Compile the evidence-only report: one block per checklist item carrying
/// an evidence reference, in catalog order. Items without evidence never
/// appear; a snapshot without any evidence yields the single fixed sentence.
pub fn compile_evidence_report(
    snapshot: &ChecklistSnapshot,
    client_name: Option<&str>,
) -> Document {
    let mut blocks = vec![Block::Letterhead {
        shop_name: SHOP_LETTERHEAD,
        document_title: ReportKind::Evidence.title(),
        reference: String::new(),
    }];

    let mut any = false;
    for item in snapshot.evidence_items() {
        let image_ref = match &item.evidence_ref {
            Some(reference) => reference.clone(),
            None => continue,
        };
        any = true;
        blocks.push(Block::Evidence {
            element_label: item.element.label(),
            image_ref,
            note: if item.note.trim().is_empty() {
                NO_OBSERVATIONS_PLACEHOLDER.to_string()
            } else {
                item.note.clone()
            },
        });
    }

    if !any {
        blocks.push(Block::Notice {
            text: NO_EVIDENCE_SENTENCE,
        });
    }

    Document::assemble(ReportKind::Evidence, client_name, blocks)
}
