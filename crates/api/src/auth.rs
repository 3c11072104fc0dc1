// Copyright (C) 2026 ASR Roofing
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authorization checks for authenticated actors.
//!
//! Authentication happens upstream. This module receives an already
//! resolved identity (role label and division) and answers whether that
//! identity may perform an operation.

use asr_po_domain::{CanonicalRole, Permission, Role, has_permission, normalize_role};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::capabilities::{PoAction, PoSnapshot};
use crate::error::{ApiError, AuthError};

/// An authenticated user as seen by the authorization layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedActor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The role label stored on the user record.
    pub role: String,
    /// The division the actor belongs to, if any.
    pub division_id: Option<String>,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `role` - The stored role label; unknown labels are accepted and
    ///   treated as `USER`
    /// * `division_id` - The actor's division, if any
    #[must_use]
    pub fn new(id: String, role: String, division_id: Option<String>) -> Self {
        if Role::parse(&role).is_none() {
            debug!(actor_id = %id, role = %role, "Unknown role label; treating as USER");
        }
        Self {
            id,
            role,
            division_id,
        }
    }

    /// Returns the actor's canonical role.
    #[must_use]
    pub fn canonical_role(&self) -> CanonicalRole {
        normalize_role(&self.role)
    }

    /// Returns true if the actor is an administrator.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.canonical_role() == CanonicalRole::Admin
    }

    /// Returns true if the actor holds `permission`.
    #[must_use]
    pub fn has_permission(&self, permission: Permission) -> bool {
        has_permission(&self.role, permission)
    }
}

/// Outcome of an approval check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalDecision {
    /// Whether the actor may approve.
    pub can_approve: bool,
    /// Why approval is refused, when it is.
    pub reason: Option<String>,
}

/// Authorization service for enforcing role-based access control.
///
/// All checks are pure functions of the actor and the PO snapshot.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Checks that an actor holds a permission.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Unauthorized` naming the permission and the
    /// lowest role that holds it.
    pub fn authorize(actor: &AuthenticatedActor, permission: Permission) -> Result<(), AuthError> {
        if actor.has_permission(permission) {
            return Ok(());
        }

        let required_role: CanonicalRole = if permission.is_administrative() {
            CanonicalRole::Admin
        } else {
            CanonicalRole::User
        };
        debug!(
            actor_id = %actor.id,
            role = %actor.role,
            permission = %permission,
            "Permission denied"
        );
        Err(AuthError::Unauthorized {
            action: permission.as_str().to_string(),
            required_role: required_role.as_str().to_string(),
        })
    }

    /// Checks if an actor may manage user accounts.
    ///
    /// Only administrators may manage users.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is not an administrator.
    pub fn authorize_manage_users(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::authorize(actor, Permission::UserManage)
    }

    /// Checks if an actor may edit system settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is not an administrator.
    pub fn authorize_edit_settings(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::authorize(actor, Permission::SettingsEdit)
    }

    /// Returns true if the actor may create a PO charged to `target_division`.
    ///
    /// Any actor holding `po:create` may create in any division.
    #[must_use]
    pub fn can_create_po_in_division(
        actor: &AuthenticatedActor,
        _target_division: Option<&str>,
    ) -> bool {
        actor.has_permission(Permission::PoCreate)
            && actor.has_permission(Permission::PoCreateAnyDivision)
    }

    /// Decides whether the actor may approve a PO.
    ///
    /// Approval is not limited by division or amount. The owner threshold
    /// in `ApprovalThresholds` is advisory and is not consulted here.
    #[must_use]
    pub fn can_approve_po(actor: &AuthenticatedActor, _po: &PoSnapshot) -> ApprovalDecision {
        if actor.has_permission(Permission::PoApprove) {
            ApprovalDecision {
                can_approve: true,
                reason: None,
            }
        } else {
            ApprovalDecision {
                can_approve: false,
                reason: Some(format!(
                    "Role '{}' does not hold {}",
                    actor.role,
                    Permission::PoApprove
                )),
            }
        }
    }

    /// Returns true if the actor may edit the PO in its current status.
    #[must_use]
    pub fn can_edit_po(actor: &AuthenticatedActor, po: &PoSnapshot) -> bool {
        Self::can_take(actor, po, PoAction::Edit)
    }

    /// Returns true if the actor may cancel the PO in its current status.
    #[must_use]
    pub fn can_cancel_po(actor: &AuthenticatedActor, po: &PoSnapshot) -> bool {
        Self::can_take(actor, po, PoAction::Cancel)
    }

    /// Returns true if the actor may issue the PO in its current status.
    #[must_use]
    pub fn can_issue_po(actor: &AuthenticatedActor, po: &PoSnapshot) -> bool {
        Self::can_take(actor, po, PoAction::Issue)
    }

    /// Returns true if the actor may see every field of the PO.
    #[must_use]
    pub fn can_view_full_po_details(actor: &AuthenticatedActor, po: &PoSnapshot) -> bool {
        Self::can_take(actor, po, PoAction::View)
    }

    /// Returns true if the actor can do nothing to the PO beyond viewing
    /// and exporting it.
    #[must_use]
    pub fn is_read_only_for_po(actor: &AuthenticatedActor, po: &PoSnapshot) -> bool {
        ![
            PoAction::Edit,
            PoAction::Approve,
            PoAction::Reject,
            PoAction::Issue,
            PoAction::Cancel,
        ]
        .into_iter()
        .any(|action| Self::can_take(actor, po, action))
    }

    /// Returns true if the actor may reassign users between divisions.
    #[must_use]
    pub fn can_modify_division_assignments(actor: &AuthenticatedActor) -> bool {
        actor.has_permission(Permission::DivisionModifyAssignments)
    }

    /// Checks that the actor may take `action` on the PO right now.
    ///
    /// This is the gate route handlers run before mutating a PO.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` if the actor lacks the action's
    /// permission, and `ApiError::ActionNotAvailable` if the PO's status
    /// does not offer the action.
    pub fn authorize_po_action(
        actor: &AuthenticatedActor,
        po: &PoSnapshot,
        action: PoAction,
    ) -> Result<(), ApiError> {
        Self::authorize(actor, action.required_permission())?;

        if !action.is_available_in(po.status) {
            debug!(
                actor_id = %actor.id,
                action = %action,
                status = %po.status,
                "PO action not available in current status"
            );
            return Err(ApiError::ActionNotAvailable {
                action: action.as_str().to_string(),
                status: po.status.as_str().to_string(),
            });
        }

        Ok(())
    }

    fn can_take(actor: &AuthenticatedActor, po: &PoSnapshot, action: PoAction) -> bool {
        action.is_available_in(po.status) && actor.has_permission(action.required_permission())
    }
}
