// Copyright (C) 2026 ASR Roofing
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod division;
mod error;
mod permission;
mod po_number;
mod po_status;
mod role;

#[cfg(test)]
mod tests;

pub use division::{
    Division, UNKNOWN_DIVISION_CODE, UNKNOWN_LEADER_ID, division_code_for_name,
    leader_id_from_code, leader_name,
};
pub use error::{DomainError, PoNumberParseError};
pub use permission::{Permission, has_permission, has_permission_token};
pub use po_number::{
    MAX_WORK_ORDER_NUMBER, PoNumber, decode_po_number, encode_po_number, is_valid_po_number,
};
pub use po_status::PoStatus;
pub use role::{CanonicalRole, Role, is_admin, normalize_role, role_display_name};
