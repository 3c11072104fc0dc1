// Copyright (C) 2026 ASR Roofing
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! PO action availability for authorization-aware UI gating.
//!
//! Available actions tell a client which controls to enable for a PO.
//! They are computed from the PO's status and the actor's permissions.
//! Division and amount are accepted so call sites keep a stable shape, but
//! they do not restrict anything: every role may act on every division's
//! POs at any amount.

use std::collections::{BTreeSet, btree_set};
use std::str::FromStr;

use asr_po_domain::{Permission, PoStatus, has_permission};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;

/// An action a user may take on a purchase order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoAction {
    /// Open the PO.
    View,
    /// Change the PO's contents.
    Edit,
    /// Approve a submitted PO.
    Approve,
    /// Send a submitted PO back for rework.
    Reject,
    /// Send an approved PO to the vendor.
    Issue,
    /// Withdraw the PO.
    Cancel,
    /// Download the PO.
    Export,
}

impl PoAction {
    /// Every action, in display order.
    pub const ALL: [Self; 7] = [
        Self::View,
        Self::Edit,
        Self::Approve,
        Self::Reject,
        Self::Issue,
        Self::Cancel,
        Self::Export,
    ];

    /// Returns the lowercase action name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Edit => "edit",
            Self::Approve => "approve",
            Self::Reject => "reject",
            Self::Issue => "issue",
            Self::Cancel => "cancel",
            Self::Export => "export",
        }
    }

    /// Returns the permission an actor must hold to take this action.
    #[must_use]
    pub const fn required_permission(&self) -> Permission {
        match self {
            Self::View => Permission::PoRead,
            Self::Edit => Permission::PoEdit,
            Self::Approve | Self::Reject => Permission::PoApprove,
            Self::Issue => Permission::PoIssue,
            Self::Cancel => Permission::PoCancel,
            Self::Export => Permission::PoExport,
        }
    }

    /// Returns the status this action moves a PO into, if it changes status.
    #[must_use]
    pub const fn target_status(&self) -> Option<PoStatus> {
        match self {
            Self::Approve => Some(PoStatus::Approved),
            Self::Reject => Some(PoStatus::Rejected),
            Self::Issue => Some(PoStatus::Issued),
            Self::Cancel => Some(PoStatus::Cancelled),
            Self::View | Self::Edit | Self::Export => None,
        }
    }

    /// Returns true if a PO in `status` offers this action.
    #[must_use]
    pub const fn is_available_in(&self, status: PoStatus) -> bool {
        match self {
            Self::View | Self::Export => true,
            Self::Edit => status.is_editable(),
            Self::Approve | Self::Reject => matches!(status, PoStatus::Submitted),
            Self::Issue => matches!(status, PoStatus::Approved),
            Self::Cancel => !status.is_terminal(),
        }
    }
}

impl FromStr for PoAction {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| ApiError::InvalidInput {
                field: String::from("action"),
                message: format!("Unknown PO action: '{s}'"),
            })
    }
}

impl std::fmt::Display for PoAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The parts of a stored PO record that authorization looks at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoSnapshot {
    /// The PO's current lifecycle status.
    pub status: PoStatus,
    /// The division that owns the PO.
    pub division_id: Option<String>,
    /// The PO's total, in dollars.
    pub total_amount: f64,
}

impl PoSnapshot {
    /// Creates a snapshot.
    #[must_use]
    pub const fn new(status: PoStatus, division_id: Option<String>, total_amount: f64) -> Self {
        Self {
            status,
            division_id,
            total_amount,
        }
    }
}

/// The set of actions available on a PO, ordered for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AvailableActions(BTreeSet<PoAction>);

impl AvailableActions {
    /// Returns true if `action` is available.
    #[must_use]
    pub fn contains(&self, action: PoAction) -> bool {
        self.0.contains(&action)
    }

    /// Iterates the available actions in display order.
    pub fn iter(&self) -> std::iter::Copied<btree_set::Iter<'_, PoAction>> {
        self.0.iter().copied()
    }

    /// Returns the number of available actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no action is available.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a AvailableActions {
    type Item = PoAction;
    type IntoIter = std::iter::Copied<btree_set::Iter<'a, PoAction>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<PoAction> for AvailableActions {
    fn from_iter<I: IntoIterator<Item = PoAction>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Computes the actions `role` may take on a PO.
///
/// An action is available when the PO's status offers it and the role
/// holds the action's permission. The division ids and amount do not
/// change the result.
///
/// # Arguments
///
/// * `role` - The actor's stored role label
/// * `user_division_id` - The actor's division, if any
/// * `po_division_id` - The PO's division, if any
/// * `status` - The PO's current status
/// * `amount` - The PO's total, in dollars
#[must_use]
pub fn available_actions(
    role: &str,
    _user_division_id: Option<&str>,
    _po_division_id: Option<&str>,
    status: PoStatus,
    _amount: f64,
) -> AvailableActions {
    let actions: AvailableActions = PoAction::ALL
        .into_iter()
        .filter(|action| action.is_available_in(status))
        .filter(|action| has_permission(role, action.required_permission()))
        .collect();

    debug!(
        role,
        status = %status,
        actions = actions.len(),
        "Computed available PO actions"
    );

    actions
}

/// Computes available actions from an untrusted status string.
///
/// An unrecognized status yields only the actions every status offers
/// (`view` and `export`).
#[must_use]
pub fn available_actions_for_status(
    role: &str,
    user_division_id: Option<&str>,
    po_division_id: Option<&str>,
    status: &str,
    amount: f64,
) -> AvailableActions {
    match status.parse::<PoStatus>() {
        Ok(status) => available_actions(role, user_division_id, po_division_id, status, amount),
        Err(err) => {
            debug!(error = %err, "Unrecognized PO status; offering read-only actions");
            [PoAction::View, PoAction::Export]
                .into_iter()
                .filter(|action| has_permission(role, action.required_permission()))
                .collect()
        }
    }
}
