// Copyright (C) 2026 ASR Roofing
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors that can occur while constructing or validating domain values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Work order number does not fit the four-digit field of a PO number.
    #[error("Work order number {value} is out of range. Must be between 0 and {max}")]
    WorkOrderOutOfRange {
        /// The rejected work order number.
        value: u32,
        /// The largest encodable work order number.
        max: u32,
    },
    /// Leader identifier is empty or contains non-digit characters.
    #[error("Invalid leader id: '{0}'. Must be one or more ASCII digits")]
    InvalidLeaderId(String),
    /// Division code is empty or contains non-letter characters.
    #[error("Invalid division code: '{0}'. Must be one or more ASCII letters")]
    InvalidDivisionCode(String),
    /// PO status string is not one of the known lifecycle states.
    #[error("Invalid PO status: '{0}'")]
    InvalidPoStatus(String),
    /// Role string is not one of the known legacy roles.
    #[error("Unknown role: '{0}'")]
    UnknownRole(String),
    /// Permission token is not part of the permission matrix.
    #[error("Unknown permission: '{0}'")]
    UnknownPermission(String),
    /// A PO status transition is not permitted by the lifecycle.
    #[error("Invalid status transition from {from} to {to}: {reason}")]
    InvalidStatusTransition {
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
        /// Why the transition was refused.
        reason: String,
    },
}

/// Reasons a string failed to parse as a PO number.
///
/// Parse failures are expected on display paths, so this type is cheap to
/// construct and carries no allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PoNumberParseError {
    /// The input has no leading leader-id digits.
    #[error("missing leader id")]
    MissingLeaderId,
    /// No division letters follow the leader id.
    #[error("missing division code")]
    MissingDivisionCode,
    /// The work order segment is absent or not exactly four digits.
    #[error("work order number must be exactly 4 digits")]
    InvalidWorkOrder,
    /// The `-` separator does not follow the work order number.
    #[error("missing '-' separator after work order number")]
    MissingSeparator,
    /// The purchase sequence is absent, non-numeric, zero-padded, or too large.
    #[error("invalid purchase sequence")]
    InvalidSequence,
}
