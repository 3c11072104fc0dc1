// Copyright (C) 2026 ASR Roofing
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Legacy roles and their two-tier canonical form.
//!
//! User records carry one of several historical role labels. Authorization
//! only distinguishes administrators from everyone else, so every label is
//! collapsed into a [`CanonicalRole`] before any permission check.

use crate::error::DomainError;
use crate::permission::Permission;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A role label as stored on a user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Runs the system; administrative.
    DirectorOfSystemsIntegrations,
    /// Company owner; administrative.
    MajorityOwner,
    /// Leads a division.
    DivisionLeader,
    /// Day-to-day operations.
    OperationsManager,
    /// Invoicing and payment.
    Accounting,
    /// Standard account.
    User,
    /// Administrative account.
    Admin,
}

impl Role {
    /// Every known role label.
    pub const ALL: [Self; 7] = [
        Self::DirectorOfSystemsIntegrations,
        Self::MajorityOwner,
        Self::DivisionLeader,
        Self::OperationsManager,
        Self::Accounting,
        Self::User,
        Self::Admin,
    ];

    /// Returns the stored label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DirectorOfSystemsIntegrations => "DIRECTOR_OF_SYSTEMS_INTEGRATIONS",
            Self::MajorityOwner => "MAJORITY_OWNER",
            Self::DivisionLeader => "DIVISION_LEADER",
            Self::OperationsManager => "OPERATIONS_MANAGER",
            Self::Accounting => "ACCOUNTING",
            Self::User => "USER",
            Self::Admin => "ADMIN",
        }
    }

    /// Returns the label shown to people.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::DirectorOfSystemsIntegrations => "Director of Systems Integrations",
            Self::MajorityOwner => "Majority Owner",
            Self::DivisionLeader => "Division Leader",
            Self::OperationsManager => "Operations Manager",
            Self::Accounting => "Accounting",
            Self::User => "User",
            Self::Admin => "Administrator",
        }
    }

    /// Returns the canonical tier of this role.
    #[must_use]
    pub const fn canonical(&self) -> CanonicalRole {
        match self {
            Self::Admin | Self::DirectorOfSystemsIntegrations | Self::MajorityOwner => {
                CanonicalRole::Admin
            }
            Self::User | Self::DivisionLeader | Self::OperationsManager | Self::Accounting => {
                CanonicalRole::User
            }
        }
    }

    /// Looks up a role by its exact, case-sensitive label.
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.as_str() == label)
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| DomainError::UnknownRole(s.to_string()))
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two authorization tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CanonicalRole {
    /// Administrators: every permission.
    Admin,
    /// Everyone else: every non-administrative permission.
    User,
}

impl CanonicalRole {
    /// Returns `"ADMIN"` or `"USER"`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::User => "USER",
        }
    }

    /// Returns true if this tier holds `permission`.
    #[must_use]
    pub const fn grants(&self, permission: Permission) -> bool {
        match self {
            Self::Admin => true,
            Self::User => !permission.is_administrative(),
        }
    }

    /// Returns every permission held by this tier, in table order.
    pub fn permissions(self) -> impl Iterator<Item = Permission> {
        Permission::ALL
            .into_iter()
            .filter(move |permission| self.grants(*permission))
    }
}

impl std::fmt::Display for CanonicalRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Collapses any role string into its canonical tier.
///
/// Unknown strings, including the empty string, are treated as `User` so a
/// typo or stale label can never grant administrative access.
#[must_use]
pub fn normalize_role(role: &str) -> CanonicalRole {
    Role::parse(role).map_or(CanonicalRole::User, |r| r.canonical())
}

/// Returns true if `role` normalizes to `Admin`.
#[must_use]
pub fn is_admin(role: &str) -> bool {
    normalize_role(role) == CanonicalRole::Admin
}

/// Returns the display name for a role label, or the label itself if unknown.
#[must_use]
pub fn role_display_name(role: &str) -> &str {
    Role::parse(role).map_or(role, |r| r.display_name())
}
