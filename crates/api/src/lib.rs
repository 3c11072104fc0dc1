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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod auth;
mod capabilities;
mod display;
mod error;
mod thresholds;

#[cfg(test)]
mod tests;

pub use auth::{ApprovalDecision, AuthenticatedActor, AuthorizationService};
pub use capabilities::{
    AvailableActions, PoAction, PoSnapshot, available_actions, available_actions_for_status,
};
pub use display::{DisplaySegment, PoNumberDisplay, SegmentKind, render_po_number};
pub use error::{ApiError, AuthError, translate_domain_error};
pub use thresholds::{
    ApprovalThresholds, DEFAULT_OPERATIONS_MANAGER_LIMIT, DEFAULT_OWNER_APPROVAL_THRESHOLD,
};
