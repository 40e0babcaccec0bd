//! Pure validation rules for draft input. Nothing here touches the store:
//! every check reports a violation value and the caller decides whether to
//! block submission.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::domain::OrderDraft;

pub const VIN_LENGTH: usize = 17;
pub const PLATE_LENGTH: usize = 7;
pub const PHONE_DIGITS: usize = 10;
pub const MIN_ACTIVITY_CHARS: usize = 10;
pub const VEHICLE_YEAR_RANGE: std::ops::RangeInclusive<i32> = 1900..=2100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum DraftViolation {
    #[error("email address is malformed")]
    InvalidEmail,
    #[error("phone number must be exactly 10 digits")]
    InvalidPhone,
    #[error("vin must be exactly 17 characters")]
    InvalidVin,
    #[error("plate must be exactly 7 characters")]
    InvalidPlate,
    #[error("vehicle year must fall between 1900 and 2100")]
    YearOutOfRange,
    #[error("activity description must be at least 10 characters")]
    ActivityTooShort,
    #[error("supplies used must not be empty")]
    MissingSupplies,
    #[error("start time must not be in the past")]
    StartTimeInPast,
    #[error("walk-in clients require a phone number")]
    WalkInPhoneMissing,
    #[error("folio must not be empty")]
    MissingFolio,
}

/// Shape check mirroring `^[^\s@]+@[^\s@]+\.[^\s@]+$`: one `@`, no
/// whitespace, and a dot with text on both sides in the domain part.
fn is_well_formed_email(value: &str) -> bool {
    let mut parts = value.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return false,
    };

    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }
    if domain.chars().any(char::is_whitespace) {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

fn is_ten_digit_phone(value: &str) -> bool {
    value.len() == PHONE_DIGITS && value.chars().all(|c| c.is_ascii_digit())
}

/// Contact check over optional fields; empty strings count as absent.
pub fn validate_contact(email: &str, phone: &str) -> Result<(), DraftViolation> {
    if !phone.is_empty() && !is_ten_digit_phone(phone) {
        return Err(DraftViolation::InvalidPhone);
    }
    if !email.is_empty() && !is_well_formed_email(email) {
        return Err(DraftViolation::InvalidEmail);
    }
    Ok(())
}

/// Both identifiers are mandatory with exact lengths, for registered and
/// walk-in clients alike.
pub fn validate_vehicle_ids(vin: &str, plate: &str) -> Result<(), DraftViolation> {
    if vin.chars().count() != VIN_LENGTH {
        return Err(DraftViolation::InvalidVin);
    }
    if plate.chars().count() != PLATE_LENGTH {
        return Err(DraftViolation::InvalidPlate);
    }
    Ok(())
}

/// Full-draft validation. Collects every violation instead of stopping at
/// the first so the whole form can be annotated in one pass.
pub fn validate_order_draft(draft: &OrderDraft, now: DateTime<Utc>) -> Vec<DraftViolation> {
    let mut violations = Vec::new();

    if let Err(violation) = validate_vehicle_ids(&draft.vehicle.vin, &draft.vehicle.plate) {
        violations.push(violation);
        // Report the second identifier too when both are bad.
        if matches!(violations.last(), Some(DraftViolation::InvalidVin))
            && draft.vehicle.plate.chars().count() != PLATE_LENGTH
        {
            violations.push(DraftViolation::InvalidPlate);
        }
    }

    if !VEHICLE_YEAR_RANGE.contains(&draft.vehicle.year) {
        violations.push(DraftViolation::YearOutOfRange);
    }

    if let Err(violation) = validate_contact(&draft.client.email, &draft.client.phone) {
        violations.push(violation);
    }

    if draft.client.is_walk_in() && draft.client.phone.trim().is_empty() {
        violations.push(DraftViolation::WalkInPhoneMissing);
    }

    if draft.activity_description.trim().chars().count() < MIN_ACTIVITY_CHARS {
        violations.push(DraftViolation::ActivityTooShort);
    }

    if draft.supplies_used.trim().is_empty() {
        violations.push(DraftViolation::MissingSupplies);
    }

    if draft.start_time < now {
        violations.push(DraftViolation::StartTimeInPast);
    }

    violations
}
