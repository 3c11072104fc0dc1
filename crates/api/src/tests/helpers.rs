// Copyright (C) 2026 ASR Roofing
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use asr_po_domain::{PoStatus, Role};

use crate::{AuthenticatedActor, PoSnapshot};

pub const DIVISION_1: &str = "div-001";
pub const DIVISION_2: &str = "div-002";

/// Every legacy role label plus a label no user record should carry.
pub const ALL_ROLE_LABELS: [&str; 8] = [
    "DIRECTOR_OF_SYSTEMS_INTEGRATIONS",
    "MAJORITY_OWNER",
    "DIVISION_LEADER",
    "OPERATIONS_MANAGER",
    "ACCOUNTING",
    "USER",
    "ADMIN",
    "NOT_A_ROLE",
];

pub fn create_test_actor(role: Role) -> AuthenticatedActor {
    AuthenticatedActor::new(
        format!("{}-1", role.as_str().to_lowercase()),
        role.as_str().to_string(),
        Some(String::from(DIVISION_1)),
    )
}

pub fn create_test_actor_from_label(label: &str) -> AuthenticatedActor {
    AuthenticatedActor::new(
        String::from("actor-1"),
        label.to_string(),
        Some(String::from(DIVISION_1)),
    )
}

pub fn create_test_admin() -> AuthenticatedActor {
    create_test_actor(Role::Admin)
}

pub fn create_test_user() -> AuthenticatedActor {
    create_test_actor(Role::User)
}

pub fn create_test_po(status: PoStatus) -> PoSnapshot {
    PoSnapshot::new(status, Some(String::from(DIVISION_1)), 5_000.0)
}

pub fn create_foreign_po(status: PoStatus, total_amount: f64) -> PoSnapshot {
    PoSnapshot::new(status, Some(String::from(DIVISION_2)), total_amount)
}
