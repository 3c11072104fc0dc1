// Copyright (C) 2026 ASR Roofing
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for API error translation.

use asr_po_domain::{DomainError, PoNumber, PoStatus};

use crate::{ApiError, AuthError, translate_domain_error};

#[test]
fn test_work_order_error_maps_to_field() {
    let err = PoNumber::new("01", "CP", 10_000, 1).unwrap_err();

    match ApiError::from(err) {
        ApiError::InvalidInput { field, message } => {
            assert_eq!(field, "work_order_number");
            assert!(message.contains("10000"));
        }
        other => panic!("Expected InvalidInput, got: {other:?}"),
    }
}

#[test]
fn test_field_names_for_input_errors() {
    let cases = [
        (DomainError::InvalidLeaderId(String::from("A1")), "leader_id"),
        (
            DomainError::InvalidDivisionCode(String::from("C1")),
            "division_code",
        ),
        (DomainError::InvalidPoStatus(String::from("Open")), "status"),
        (DomainError::UnknownRole(String::from("CEO")), "role"),
        (
            DomainError::UnknownPermission(String::from("po:fly")),
            "permission",
        ),
    ];

    for (err, expected_field) in cases {
        match translate_domain_error(&err) {
            ApiError::InvalidInput { field, .. } => assert_eq!(field, expected_field),
            other => panic!("Expected InvalidInput, got: {other:?}"),
        }
    }
}

#[test]
fn test_lifecycle_violation_is_rule_violation() {
    let err = PoStatus::Paid
        .validate_transition(PoStatus::Cancelled)
        .unwrap_err();

    match ApiError::from(err) {
        ApiError::DomainRuleViolation { rule, message } => {
            assert_eq!(rule, "po_lifecycle");
            assert!(message.contains("terminal"));
        }
        other => panic!("Expected DomainRuleViolation, got: {other:?}"),
    }
}

#[test]
fn test_auth_error_conversion_preserves_fields() {
    let err = AuthError::Unauthorized {
        action: String::from("user:manage"),
        required_role: String::from("ADMIN"),
    };

    assert_eq!(
        ApiError::from(err).to_string(),
        "Unauthorized: 'user:manage' requires ADMIN role"
    );
}

#[test]
fn test_translation_borrows_the_domain_error() {
    let err = DomainError::InvalidPoStatus(String::from("Archived"));

    let translated = translate_domain_error(&err);

    assert_eq!(translated, ApiError::from(err.clone()));
    assert_eq!(
        translated.to_string(),
        format!("Invalid input for field 'status': {err}")
    );
}
