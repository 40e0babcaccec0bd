use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::catalog::{Condition, InspectionElement};
use crate::workflows::orders::repository::{ContentStore, UploadError};

/// One rated entry of the inspection checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub element: InspectionElement,
    pub condition: Condition,
    #[serde(default)]
    pub note: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence_ref: Option<String>,
}

impl ChecklistItem {
    fn unrated(element: InspectionElement) -> Self {
        Self {
            element,
            condition: Condition::Unrated,
            note: String::new(),
            evidence_ref: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ChecklistError {
    #[error("unknown checklist element: {0}")]
    UnknownElement(String),
    #[error(transparent)]
    Upload(#[from] UploadError),
}

/// Per-session inspection checklist. Always complete: one entry per catalog
/// element, keyed in catalog order. Created all-Unrated, mutated per element
/// by user action, and discarded when the session ends (or exported through
/// a report). Not persisted by the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistSnapshot {
    items: BTreeMap<InspectionElement, ChecklistItem>,
}

impl Default for ChecklistSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

impl ChecklistSnapshot {
    pub fn new() -> Self {
        let items = InspectionElement::ordered()
            .into_iter()
            .map(|element| (element, ChecklistItem::unrated(element)))
            .collect();
        Self { items }
    }

    pub fn set_condition(&mut self, name: &str, condition: Condition) -> Result<(), ChecklistError> {
        let element = Self::resolve(name)?;
        self.item_mut(element).condition = condition;
        Ok(())
    }

    /// Replace the note. No length constraint.
    pub fn set_note(&mut self, name: &str, text: &str) -> Result<(), ChecklistError> {
        let element = Self::resolve(name)?;
        self.item_mut(element).note = text.to_string();
        Ok(())
    }

    /// Upload an evidence image and store the returned reference on the
    /// item. The one operation here with an observable side effect; on
    /// upload failure the item keeps its previous evidence reference.
    pub async fn attach_evidence<C>(
        &mut self,
        name: &str,
        image: &[u8],
        content: &C,
    ) -> Result<String, ChecklistError>
    where
        C: ContentStore + ?Sized,
    {
        let element = Self::resolve(name)?;
        let reference = content.upload_image(image).await?;
        self.item_mut(element).evidence_ref = Some(reference.clone());
        Ok(reference)
    }

    /// The entry for one catalog element. Snapshots deserialized with gaps
    /// read back as unrated rather than failing.
    pub fn item(&self, element: InspectionElement) -> ChecklistItem {
        self.items
            .get(&element)
            .cloned()
            .unwrap_or_else(|| ChecklistItem::unrated(element))
    }

    /// Items in catalog order.
    pub fn items(&self) -> impl Iterator<Item = &ChecklistItem> {
        self.items.values()
    }

    /// Items carrying an evidence reference, in catalog order.
    pub fn evidence_items(&self) -> impl Iterator<Item = &ChecklistItem> {
        self.items
            .values()
            .filter(|item| item.evidence_ref.is_some())
    }

    fn resolve(name: &str) -> Result<InspectionElement, ChecklistError> {
        InspectionElement::parse(name)
            .ok_or_else(|| ChecklistError::UnknownElement(name.to_string()))
    }

    fn item_mut(&mut self, element: InspectionElement) -> &mut ChecklistItem {
        self.items
            .entry(element)
            .or_insert_with(|| ChecklistItem::unrated(element))
    }
}
