// Copyright (C) 2026 ASR Roofing
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Permission tokens.
//!
//! Permissions are a closed set. Each has a stable `resource:action` token
//! that is used in storage, over the wire, and in UI code.

use crate::error::DomainError;
use crate::role::normalize_role;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A capability that a role may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Permission {
    /// Create a PO.
    PoCreate,
    /// Create a PO charged to any division.
    PoCreateAnyDivision,
    /// View a PO.
    PoRead,
    /// View POs from every division.
    PoReadAllDivisions,
    /// Edit a draft or rejected PO.
    PoEdit,
    /// Approve or reject a submitted PO.
    PoApprove,
    /// Approve POs in the actor's own division.
    PoApproveOwnDivision,
    /// Issue an approved PO to the vendor.
    PoIssue,
    /// Cancel a PO that is not yet terminal.
    PoCancel,
    /// Export a PO.
    PoExport,
    /// Delete a PO record.
    PoDelete,
    /// Create a work order.
    WorkOrderCreate,
    /// View a work order.
    WorkOrderRead,
    /// Edit a work order.
    WorkOrderEdit,
    /// Approve a work order.
    WorkOrderApprove,
    /// Cancel a work order.
    WorkOrderCancel,
    /// Export a work order.
    WorkOrderExport,
    /// Add a vendor.
    VendorCreate,
    /// View vendors.
    VendorRead,
    /// Edit a vendor.
    VendorEdit,
    /// Remove a vendor.
    VendorDelete,
    /// Create a project.
    ProjectCreate,
    /// View projects.
    ProjectRead,
    /// Edit a project.
    ProjectEdit,
    /// Remove a project.
    ProjectDelete,
    /// View reports.
    ReportView,
    /// Export reports.
    ReportExport,
    /// Change system settings.
    SettingsEdit,
    /// Create, edit and deactivate user accounts.
    UserManage,
    /// Move users between divisions.
    DivisionModifyAssignments,
}

impl Permission {
    /// Every permission, grouped by resource.
    pub const ALL: [Self; 30] = [
        Self::PoCreate,
        Self::PoCreateAnyDivision,
        Self::PoRead,
        Self::PoReadAllDivisions,
        Self::PoEdit,
        Self::PoApprove,
        Self::PoApproveOwnDivision,
        Self::PoIssue,
        Self::PoCancel,
        Self::PoExport,
        Self::PoDelete,
        Self::WorkOrderCreate,
        Self::WorkOrderRead,
        Self::WorkOrderEdit,
        Self::WorkOrderApprove,
        Self::WorkOrderCancel,
        Self::WorkOrderExport,
        Self::VendorCreate,
        Self::VendorRead,
        Self::VendorEdit,
        Self::VendorDelete,
        Self::ProjectCreate,
        Self::ProjectRead,
        Self::ProjectEdit,
        Self::ProjectDelete,
        Self::ReportView,
        Self::ReportExport,
        Self::SettingsEdit,
        Self::UserManage,
        Self::DivisionModifyAssignments,
    ];

    /// Returns the `resource:action` token.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PoCreate => "po:create",
            Self::PoCreateAnyDivision => "po:create:any_division",
            Self::PoRead => "po:read",
            Self::PoReadAllDivisions => "po:read:all_divisions",
            Self::PoEdit => "po:edit",
            Self::PoApprove => "po:approve",
            Self::PoApproveOwnDivision => "po:approve:own_division",
            Self::PoIssue => "po:issue",
            Self::PoCancel => "po:cancel",
            Self::PoExport => "po:export",
            Self::PoDelete => "po:delete",
            Self::WorkOrderCreate => "workorder:create",
            Self::WorkOrderRead => "workorder:read",
            Self::WorkOrderEdit => "workorder:edit",
            Self::WorkOrderApprove => "workorder:approve",
            Self::WorkOrderCancel => "workorder:cancel",
            Self::WorkOrderExport => "workorder:export",
            Self::VendorCreate => "vendor:create",
            Self::VendorRead => "vendor:read",
            Self::VendorEdit => "vendor:edit",
            Self::VendorDelete => "vendor:delete",
            Self::ProjectCreate => "project:create",
            Self::ProjectRead => "project:read",
            Self::ProjectEdit => "project:edit",
            Self::ProjectDelete => "project:delete",
            Self::ReportView => "report:view",
            Self::ReportExport => "report:export",
            Self::SettingsEdit => "settings:edit",
            Self::UserManage => "user:manage",
            Self::DivisionModifyAssignments => "division:modify_assignments",
        }
    }

    /// Returns true for permissions reserved to administrators.
    ///
    /// Every other permission is part of day-to-day operations and is held
    /// by all authenticated users.
    #[must_use]
    pub const fn is_administrative(&self) -> bool {
        match self {
            Self::SettingsEdit
            | Self::UserManage
            | Self::DivisionModifyAssignments
            | Self::PoDelete => true,
            Self::PoCreate
            | Self::PoCreateAnyDivision
            | Self::PoRead
            | Self::PoReadAllDivisions
            | Self::PoEdit
            | Self::PoApprove
            | Self::PoApproveOwnDivision
            | Self::PoIssue
            | Self::PoCancel
            | Self::PoExport
            | Self::WorkOrderCreate
            | Self::WorkOrderRead
            | Self::WorkOrderEdit
            | Self::WorkOrderApprove
            | Self::WorkOrderCancel
            | Self::WorkOrderExport
            | Self::VendorCreate
            | Self::VendorRead
            | Self::VendorEdit
            | Self::VendorDelete
            | Self::ProjectCreate
            | Self::ProjectRead
            | Self::ProjectEdit
            | Self::ProjectDelete
            | Self::ReportView
            | Self::ReportExport => false,
        }
    }
}

impl FromStr for Permission {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| DomainError::UnknownPermission(s.to_string()))
    }
}

impl TryFrom<String> for Permission {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Permission> for &'static str {
    fn from(permission: Permission) -> Self {
        permission.as_str()
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Checks whether a role string holds a permission.
///
/// The role is normalized first, so legacy and unknown role strings are
/// handled the same way everywhere.
#[must_use]
pub fn has_permission(role: &str, permission: Permission) -> bool {
    normalize_role(role).grants(permission)
}

/// Checks whether a role string holds a permission given by its token.
///
/// Unknown tokens are never granted.
#[must_use]
pub fn has_permission_token(role: &str, token: &str) -> bool {
    token
        .parse::<Permission>()
        .is_ok_and(|permission| has_permission(role, permission))
}
