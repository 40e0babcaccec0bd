use serde::Serialize;

use crate::workflows::inspection::InspectionElement;

/// Glyph printed in place of any absent optional text field. Rows are never
/// omitted from the fixed layout.
pub const EMPTY_FIELD_PLACEHOLDER: &str = "—";

/// Client-name fallback used when deriving filenames for anonymous orders.
pub const FALLBACK_CLIENT_NAME: &str = "Cliente";

/// Vertical layout budget of one page, in abstract row units.
pub const PAGE_CAPACITY_UNITS: usize = 40;

pub const SHOP_LETTERHEAD: &str = "Servicio Automotriz — Taller Mecánico";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    Order,
    Checklist,
    Evidence,
}

impl ReportKind {
    pub const fn file_stem(self) -> &'static str {
        match self {
            Self::Order => "OrderReport",
            Self::Checklist => "ChecklistReport",
            Self::Evidence => "EvidenceReport",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Order => "Service Order Report",
            Self::Checklist => "Vehicle Inspection Checklist",
            Self::Evidence => "Inspection Evidence Report",
        }
    }
}

/// `<ReportKind>_<ClientName-or-"Cliente">`.
pub fn report_file_name(kind: ReportKind, client_name: Option<&str>) -> String {
    let name = client_name
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(FALLBACK_CLIENT_NAME);
    format!("{}_{}", kind.file_stem(), name)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldRow {
    pub label: &'static str,
    pub value: String,
}

impl FieldRow {
    /// Blank-fills absent values; the row itself always prints.
    pub fn new(label: &'static str, value: &str) -> Self {
        let value = if value.trim().is_empty() {
            EMPTY_FIELD_PLACEHOLDER.to_string()
        } else {
            value.to_string()
        };
        Self { label, value }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChecklistRow {
    pub element: InspectionElement,
    pub element_label: &'static str,
    pub condition_label: &'static str,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub label: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeliveryFlagRow {
    pub label: &'static str,
    pub delivered: bool,
}

/// Layout blocks of the fixed report templates.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Letterhead {
        shop_name: &'static str,
        document_title: &'static str,
        reference: String,
    },
    FieldGroup {
        title: &'static str,
        rows: Vec<FieldRow>,
    },
    Paragraph {
        title: &'static str,
        text: String,
    },
    ChecklistTable {
        rows: Vec<ChecklistRow>,
    },
    Legend {
        entries: Vec<LegendEntry>,
    },
    DeliveryFlags {
        rows: Vec<DeliveryFlagRow>,
    },
    Evidence {
        element_label: &'static str,
        image_ref: String,
        note: String,
    },
    Signatures {
        left: &'static str,
        right: &'static str,
    },
    Notice {
        text: &'static str,
    },
}

impl Block {
    /// Height in layout units on the fixed page grid.
    fn height_units(&self) -> usize {
        match self {
            Block::Letterhead { .. } => 3,
            Block::FieldGroup { rows, .. } => 1 + rows.len(),
            Block::Paragraph { .. } => 4,
            Block::ChecklistTable { rows } => 1 + rows.len(),
            Block::Legend { entries } => 1 + entries.len(),
            Block::DeliveryFlags { rows } => 1 + rows.len(),
            Block::Evidence { .. } => 12,
            Block::Signatures { .. } => 6,
            Block::Notice { .. } => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub number: usize,
    pub blocks: Vec<Block>,
}

/// A compiled, ready-to-render report document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub kind: ReportKind,
    pub title: &'static str,
    pub file_name: String,
    pub pages: Vec<Page>,
}

impl Document {
    /// Lay blocks onto fixed-capacity pages in order. A block that does not
    /// fit on the current page starts the next one; oversized blocks get a
    /// page of their own rather than being dropped.
    pub(super) fn assemble(kind: ReportKind, client_name: Option<&str>, blocks: Vec<Block>) -> Self {
        let mut pages: Vec<Page> = Vec::new();
        let mut current: Vec<Block> = Vec::new();
        let mut used = 0usize;

        for block in blocks {
            let height = block.height_units();
            if !current.is_empty() && used + height > PAGE_CAPACITY_UNITS {
                pages.push(Page {
                    number: pages.len() + 1,
                    blocks: std::mem::take(&mut current),
                });
                used = 0;
            }
            used += height;
            current.push(block);
        }
        if !current.is_empty() {
            pages.push(Page {
                number: pages.len() + 1,
                blocks: current,
            });
        }

        Self {
            kind,
            title: kind.title(),
            file_name: report_file_name(kind, client_name),
            pages,
        }
    }

    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.pages.iter().flat_map(|page| page.blocks.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_falls_back_to_fixed_client_placeholder() {
        assert_eq!(
            report_file_name(ReportKind::Evidence, None),
            "EvidenceReport_Cliente"
        );
        assert_eq!(
            report_file_name(ReportKind::Order, Some("  ")),
            "OrderReport_Cliente"
        );
        assert_eq!(
            report_file_name(ReportKind::Checklist, Some("Ana Robles")),
            "ChecklistReport_Ana Robles"
        );
    }

    #[test]
    fn empty_field_rows_print_the_placeholder() {
        let row = FieldRow::new("Email", "   ");
        assert_eq!(row.value, EMPTY_FIELD_PLACEHOLDER);
        let row = FieldRow::new("Email", "ana@example.com");
        assert_eq!(row.value, "ana@example.com");
    }

    #[test]
    fn assemble_splits_blocks_across_fixed_pages() {
        let blocks: Vec<Block> = (0..7)
            .map(|i| Block::Evidence {
                element_label: "Brakes",
                image_ref: format!("mem://evidence/{i}"),
                note: String::new(),
            })
            .collect();

        let document = Document::assemble(ReportKind::Evidence, None, blocks);
        // 12 units each against a 40-unit page: three blocks per page.
        assert_eq!(document.pages.len(), 3);
        assert_eq!(document.pages[0].blocks.len(), 3);
        assert_eq!(document.pages[2].blocks.len(), 1);
        assert_eq!(document.pages[2].number, 3);
    }
}
