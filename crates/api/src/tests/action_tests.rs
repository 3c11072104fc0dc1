// Copyright (C) 2026 ASR Roofing
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for status-gated PO action availability.

use asr_po_domain::PoStatus;

use crate::{AvailableActions, PoAction, available_actions, available_actions_for_status};

use super::helpers::{ALL_ROLE_LABELS, DIVISION_1, DIVISION_2};

fn actions_of(available: &AvailableActions) -> Vec<PoAction> {
    available.iter().collect()
}

#[test]
fn test_submitted_po_is_approvable_across_divisions_and_amounts() {
    let actions = available_actions(
        "USER",
        Some(DIVISION_1),
        Some(DIVISION_2),
        PoStatus::Submitted,
        100_000.0,
    );

    assert!(actions.contains(PoAction::Approve));
    assert!(actions.contains(PoAction::Reject));
}

#[test]
fn test_paid_po_cannot_be_cancelled_or_edited() {
    let actions = available_actions(
        "ADMIN",
        Some(DIVISION_1),
        Some(DIVISION_1),
        PoStatus::Paid,
        500.0,
    );

    assert!(!actions.contains(PoAction::Cancel));
    assert!(!actions.contains(PoAction::Edit));
    assert_eq!(actions_of(&actions), vec![PoAction::View, PoAction::Export]);
}

#[test]
fn test_draft_always_offers_edit_and_never_issue() {
    for role in ALL_ROLE_LABELS {
        let actions = available_actions(role, None, None, PoStatus::Draft, 1.0);
        assert!(actions.contains(PoAction::Edit), "{role}");
        assert!(!actions.contains(PoAction::Issue), "{role}");
    }
}

#[test]
fn test_cancelled_never_offers_cancel() {
    for role in ALL_ROLE_LABELS {
        let actions = available_actions(role, None, None, PoStatus::Cancelled, 1.0);
        assert!(!actions.contains(PoAction::Cancel), "{role}");
    }
}

#[test]
fn test_actions_per_status() {
    use PoAction::{Approve, Cancel, Edit, Export, Issue, Reject, View};

    let expected: [(PoStatus, Vec<PoAction>); 9] = [
        (PoStatus::Draft, vec![View, Edit, Cancel, Export]),
        (
            PoStatus::Submitted,
            vec![View, Approve, Reject, Cancel, Export],
        ),
        (PoStatus::Approved, vec![View, Issue, Cancel, Export]),
        (PoStatus::Rejected, vec![View, Edit, Cancel, Export]),
        (PoStatus::Issued, vec![View, Cancel, Export]),
        (PoStatus::Received, vec![View, Cancel, Export]),
        (PoStatus::Invoiced, vec![View, Cancel, Export]),
        (PoStatus::Paid, vec![View, Export]),
        (PoStatus::Cancelled, vec![View, Export]),
    ];

    for (status, actions) in expected {
        let available = available_actions("DIVISION_LEADER", None, None, status, 10.0);
        assert_eq!(actions_of(&available), actions, "{status}");
    }
}

#[test]
fn test_result_ignores_role_division_and_amount() {
    for status in PoStatus::ALL {
        let baseline = available_actions(
            "ADMIN",
            Some(DIVISION_1),
            Some(DIVISION_1),
            status,
            0.0,
        );
        for role in ALL_ROLE_LABELS {
            for (user_division, po_division) in [
                (Some(DIVISION_1), Some(DIVISION_1)),
                (Some(DIVISION_1), Some(DIVISION_2)),
                (None, Some(DIVISION_2)),
                (None, None),
            ] {
                for amount in [0.0, 2_500.0, 25_000.0, 25_000.01, 1_000_000.0] {
                    let actions =
                        available_actions(role, user_division, po_division, status, amount);
                    assert_eq!(actions, baseline, "{role} {status} {amount}");
                }
            }
        }
    }
}

#[test]
fn test_status_string_dispatch() {
    let actions = available_actions_for_status("USER", None, None, "Approved", 10.0);
    assert!(actions.contains(PoAction::Issue));
}

#[test]
fn test_unknown_status_string_is_read_only() {
    for status in ["", "approved", "Pending", "Draft "] {
        let actions = available_actions_for_status("ADMIN", None, None, status, 10.0);
        assert_eq!(
            actions_of(&actions),
            vec![PoAction::View, PoAction::Export],
            "{status:?}"
        );
    }
}
