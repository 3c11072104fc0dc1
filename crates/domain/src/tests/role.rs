// Copyright (C) 2026 ASR Roofing
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CanonicalRole, DomainError, Role, is_admin, normalize_role, role_display_name};

#[test]
fn test_admin_tier_roles() {
    assert_eq!(normalize_role("ADMIN"), CanonicalRole::Admin);
    assert_eq!(
        normalize_role("DIRECTOR_OF_SYSTEMS_INTEGRATIONS"),
        CanonicalRole::Admin
    );
    assert_eq!(normalize_role("MAJORITY_OWNER"), CanonicalRole::Admin);
}

#[test]
fn test_user_tier_roles() {
    assert_eq!(normalize_role("USER"), CanonicalRole::User);
    assert_eq!(normalize_role("DIVISION_LEADER"), CanonicalRole::User);
    assert_eq!(normalize_role("OPERATIONS_MANAGER"), CanonicalRole::User);
    assert_eq!(normalize_role("ACCOUNTING"), CanonicalRole::User);
}

#[test]
fn test_unknown_roles_fall_back_to_user() {
    for input in ["", "admin", "Admin", " ADMIN", "SUPERUSER", "\u{0}", "ADMIN;DROP"] {
        assert_eq!(normalize_role(input), CanonicalRole::User, "input: {input:?}");
        assert!(!is_admin(input), "input: {input:?}");
    }
}

#[test]
fn test_is_admin() {
    assert!(is_admin("ADMIN"));
    assert!(is_admin("MAJORITY_OWNER"));
    assert!(!is_admin("DIVISION_LEADER"));
    assert!(!is_admin("USER"));
}

#[test]
fn test_role_display_names() {
    assert_eq!(
        role_display_name("DIRECTOR_OF_SYSTEMS_INTEGRATIONS"),
        "Director of Systems Integrations"
    );
    assert_eq!(role_display_name("DIVISION_LEADER"), "Division Leader");
    assert_eq!(role_display_name("OPERATIONS_MANAGER"), "Operations Manager");
    assert_eq!(role_display_name("ACCOUNTING"), "Accounting");
    assert_eq!(role_display_name("MAJORITY_OWNER"), "Majority Owner");
}

#[test]
fn test_role_display_name_passes_unknown_through() {
    assert_eq!(role_display_name("FOREMAN"), "FOREMAN");
    assert_eq!(role_display_name(""), "");
}

#[test]
fn test_role_label_round_trip() {
    for role in Role::ALL {
        assert_eq!(role.as_str().parse::<Role>(), Ok(role));
        assert_eq!(role.to_string(), role.as_str());
    }
}

#[test]
fn test_unknown_role_parse_error() {
    assert_eq!(
        "division_leader".parse::<Role>(),
        Err(DomainError::UnknownRole(String::from("division_leader")))
    );
}

#[test]
fn test_role_serde_labels() {
    let json: String = serde_json::to_string(&Role::DirectorOfSystemsIntegrations).unwrap();
    assert_eq!(json, "\"DIRECTOR_OF_SYSTEMS_INTEGRATIONS\"");

    let json: String = serde_json::to_string(&CanonicalRole::User).unwrap();
    assert_eq!(json, "\"USER\"");
}
