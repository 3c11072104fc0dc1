// Copyright (C) 2026 ASR Roofing
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Purchase order lifecycle states and transitions.
//!
//! The lifecycle is:
//!
//! ```text
//! Draft -> Submitted -> Approved -> Issued -> Received -> Invoiced -> Paid
//!              |
//!              +-> Rejected -> Draft | Submitted
//! ```
//!
//! Any non-terminal state may move to `Cancelled`. `Paid` and `Cancelled`
//! are terminal.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The lifecycle state of a purchase order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PoStatus {
    /// Being prepared; fully editable.
    Draft,
    /// Awaiting an approval decision.
    Submitted,
    /// Approved and ready to be issued to the vendor.
    Approved,
    /// Sent back for rework; editable again.
    Rejected,
    /// Issued to the vendor.
    Issued,
    /// Goods or services received.
    Received,
    /// Vendor invoice recorded.
    Invoiced,
    /// Invoice paid.
    Paid,
    /// Withdrawn before completion.
    Cancelled,
}

impl PoStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 9] = [
        Self::Draft,
        Self::Submitted,
        Self::Approved,
        Self::Rejected,
        Self::Issued,
        Self::Received,
        Self::Invoiced,
        Self::Paid,
        Self::Cancelled,
    ];

    /// Returns the string representation used in storage and over the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Submitted => "Submitted",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::Issued => "Issued",
            Self::Received => "Received",
            Self::Invoiced => "Invoiced",
            Self::Paid => "Paid",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Returns true if no further transition is possible.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Paid | Self::Cancelled)
    }

    /// Returns true if the PO's contents may be edited in this state.
    #[must_use]
    pub const fn is_editable(&self) -> bool {
        matches!(self, Self::Draft | Self::Rejected)
    }

    /// Checks if a transition from this state to `target` is valid.
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        if matches!(target, Self::Cancelled) {
            return !self.is_terminal();
        }
        matches!(
            (self, target),
            (Self::Draft, Self::Submitted)
                | (Self::Submitted, Self::Approved | Self::Rejected)
                | (Self::Rejected, Self::Draft | Self::Submitted)
                | (Self::Approved, Self::Issued)
                | (Self::Issued, Self::Received)
                | (Self::Received, Self::Invoiced)
                | (Self::Invoiced, Self::Paid)
        )
    }

    /// Validates a transition from this state to `target`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatusTransition` if the lifecycle does
    /// not allow the move.
    pub fn validate_transition(&self, target: Self) -> Result<(), DomainError> {
        if self.can_transition_to(target) {
            return Ok(());
        }

        let reason: &str = if self.is_terminal() {
            "cannot transition from terminal state"
        } else {
            "transition not permitted by PO lifecycle rules"
        };
        Err(DomainError::InvalidStatusTransition {
            from: self.as_str().to_string(),
            to: target.as_str().to_string(),
            reason: reason.to_string(),
        })
    }
}

impl FromStr for PoStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| DomainError::InvalidPoStatus(s.to_string()))
    }
}

impl std::fmt::Display for PoStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
