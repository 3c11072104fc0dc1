// Copyright (C) 2026 ASR Roofing
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Dollar thresholds attached to PO approval.
//!
//! These values are advisory. They drive banners and flags shown next to a
//! PO ("requires owner approval"), but no authorization decision in this
//! crate consults them. Every role may currently approve any PO of any
//! amount.

use serde::{Deserialize, Serialize};

/// Default owner co-approval threshold, in dollars.
pub const DEFAULT_OWNER_APPROVAL_THRESHOLD: f64 = 25_000.0;

/// Default operations-manager purchasing limit, in dollars.
pub const DEFAULT_OPERATIONS_MANAGER_LIMIT: f64 = 2_500.0;

/// Approval thresholds, in dollars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ApprovalThresholds {
    /// Amount above which an operations manager's PO is flagged.
    pub operations_manager_limit: f64,
    /// Amount above which a PO is flagged for owner co-approval.
    pub owner_approval_required: f64,
}

impl Default for ApprovalThresholds {
    fn default() -> Self {
        Self {
            operations_manager_limit: DEFAULT_OPERATIONS_MANAGER_LIMIT,
            owner_approval_required: DEFAULT_OWNER_APPROVAL_THRESHOLD,
        }
    }
}

impl ApprovalThresholds {
    /// Returns true if `amount` is strictly above the owner threshold.
    #[must_use]
    pub fn requires_owner_approval(&self, amount: f64) -> bool {
        amount > self.owner_approval_required
    }

    /// Returns true if `amount` is strictly above the operations-manager limit.
    #[must_use]
    pub fn exceeds_operations_manager_limit(&self, amount: f64) -> bool {
        amount > self.operations_manager_limit
    }
}
