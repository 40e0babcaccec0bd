use chrono::{Duration, Utc};

use super::common::*;
use crate::workflows::orders::validation::{
    validate_contact, validate_order_draft, validate_vehicle_ids, DraftViolation,
};

#[test]
fn contact_accepts_absent_optional_fields() {
    assert_eq!(validate_contact("", ""), Ok(()));
    assert_eq!(validate_contact("ana@example.com", "5512345678"), Ok(()));
}

#[test]
fn contact_rejects_short_or_non_numeric_phone() {
    assert_eq!(
        validate_contact("", "55123"),
        Err(DraftViolation::InvalidPhone)
    );
    assert_eq!(
        validate_contact("", "55-1234-678"),
        Err(DraftViolation::InvalidPhone)
    );
}

#[test]
fn contact_rejects_malformed_email_shapes() {
    for email in [
        "plainaddress",
        "@missing-local.com",
        "no-domain@",
        "two@@signs.com",
        "spaces in@local.com",
        "missing@dot",
        "trailing@dot.",
    ] {
        assert_eq!(
            validate_contact(email, ""),
            Err(DraftViolation::InvalidEmail),
            "email {email:?} should be rejected"
        );
    }
}

#[test]
fn vehicle_ids_require_exact_lengths() {
    assert_eq!(
        validate_vehicle_ids("1HGCM82633A004352", "ABC1234"),
        Ok(())
    );
    assert_eq!(
        validate_vehicle_ids("1HGCM82633A00435", "ABC1234"),
        Err(DraftViolation::InvalidVin)
    );
    assert_eq!(
        validate_vehicle_ids("1HGCM82633A004352", "ABC123"),
        Err(DraftViolation::InvalidPlate)
    );
    assert_eq!(
        validate_vehicle_ids("", ""),
        Err(DraftViolation::InvalidVin)
    );
}

#[test]
fn valid_draft_produces_no_violations() {
    let violations = validate_order_draft(&draft(), Utc::now());
    assert!(violations.is_empty(), "unexpected violations: {violations:?}");
}

#[test]
fn draft_violations_are_all_collected() {
    let mut draft = draft();
    draft.client = walk_in_client();
    draft.client.phone = String::new();
    draft.activity_description = "too short".to_string();
    draft.supplies_used = "   ".to_string();
    draft.start_time = Utc::now() - Duration::hours(2);

    let violations = validate_order_draft(&draft, Utc::now());
    assert!(violations.contains(&DraftViolation::WalkInPhoneMissing));
    assert!(violations.contains(&DraftViolation::ActivityTooShort));
    assert!(violations.contains(&DraftViolation::MissingSupplies));
    assert!(violations.contains(&DraftViolation::StartTimeInPast));
    assert_eq!(violations.len(), 4);
}

#[test]
fn bad_vin_and_plate_are_both_reported() {
    let mut draft = draft();
    draft.vehicle.vin = "X".to_string();
    draft.vehicle.plate = "YY".to_string();

    let violations = validate_order_draft(&draft, Utc::now());
    assert!(violations.contains(&DraftViolation::InvalidVin));
    assert!(violations.contains(&DraftViolation::InvalidPlate));
}

#[test]
fn vehicle_year_must_stay_in_range() {
    let mut draft = draft();
    draft.vehicle.year = 1899;
    assert!(validate_order_draft(&draft, Utc::now()).contains(&DraftViolation::YearOutOfRange));

    draft.vehicle.year = 2101;
    assert!(validate_order_draft(&draft, Utc::now()).contains(&DraftViolation::YearOutOfRange));

    draft.vehicle.year = 2100;
    assert!(!validate_order_draft(&draft, Utc::now()).contains(&DraftViolation::YearOutOfRange));
}

#[test]
fn walk_in_with_phone_passes() {
    let mut draft = draft();
    draft.client = walk_in_client();
    let violations = validate_order_draft(&draft, Utc::now());
    assert!(violations.is_empty(), "unexpected violations: {violations:?}");
}
