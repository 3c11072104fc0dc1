// Copyright (C) 2026 ASR Roofing
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use asr_po_domain::DomainError;
use thiserror::Error;

/// Authorization errors.
///
/// Identity is resolved upstream, so the only failure here is a missing
/// permission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Authorization failed.
    #[error("Unauthorized: '{action}' requires {required_role} role")]
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
}

/// API-level errors.
///
/// These are distinct from domain errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Authorization failed - the actor does not have permission.
    #[error("Unauthorized: '{action}' requires {required_role} role")]
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
    /// The action is not available in the PO's current status.
    #[error("Action '{action}' is not available for a PO in status {status}")]
    ActionNotAvailable {
        /// The action that was attempted.
        action: String,
        /// The PO's current status.
        status: String,
    },
    /// A domain rule was violated.
    #[error("Domain rule violation ({rule}): {message}")]
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        let AuthError::Unauthorized {
            action,
            required_role,
        } = err;
        Self::Unauthorized {
            action,
            required_role,
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        translate_domain_error(&err)
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: &DomainError) -> ApiError {
    let message: String = err.to_string();
    match err {
        DomainError::WorkOrderOutOfRange { .. } => ApiError::InvalidInput {
            field: String::from("work_order_number"),
            message,
        },
        DomainError::InvalidLeaderId(_) => ApiError::InvalidInput {
            field: String::from("leader_id"),
            message,
        },
        DomainError::InvalidDivisionCode(_) => ApiError::InvalidInput {
            field: String::from("division_code"),
            message,
        },
        DomainError::InvalidPoStatus(_) => ApiError::InvalidInput {
            field: String::from("status"),
            message,
        },
        DomainError::UnknownRole(_) => ApiError::InvalidInput {
            field: String::from("role"),
            message,
        },
        DomainError::UnknownPermission(_) => ApiError::InvalidInput {
            field: String::from("permission"),
            message,
        },
        DomainError::InvalidStatusTransition { .. } => ApiError::DomainRuleViolation {
            rule: String::from("po_lifecycle"),
            message,
        },
    }
}
