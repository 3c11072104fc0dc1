// Copyright (C) 2026 ASR Roofing
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Division and division-leader lookup tables.
//!
//! These tables feed the letter and leader segments of generated PO
//! numbers and the verbose PO number description. They are read-only and
//! compiled into the binary.

use serde::{Deserialize, Serialize};

/// Division code used when a division name is not recognized.
pub const UNKNOWN_DIVISION_CODE: &str = "XX";

/// Leader id used when a leader code is not recognized.
pub const UNKNOWN_LEADER_ID: &str = "00";

/// A cost-center division of the company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Division {
    /// Capital expenditures.
    Capex,
    /// Roofing.
    Roofing,
    /// General contracting.
    GeneralContracting,
    /// Subcontractor management.
    SubcontractorManagement,
    /// Repairs.
    Repairs,
    /// Specialty trades.
    SpecialtyTrades,
}

impl Division {
    /// Every division, in table order.
    pub const ALL: [Self; 6] = [
        Self::Capex,
        Self::Roofing,
        Self::GeneralContracting,
        Self::SubcontractorManagement,
        Self::Repairs,
        Self::SpecialtyTrades,
    ];

    /// Returns the two-letter code embedded in PO numbers.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Capex => "CP",
            Self::Roofing => "RF",
            Self::GeneralContracting => "GC",
            Self::SubcontractorManagement => "SM",
            Self::Repairs => "RP",
            Self::SpecialtyTrades => "ST",
        }
    }

    /// Returns the human-readable division name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Capex => "CAPEX",
            Self::Roofing => "Roofing",
            Self::GeneralContracting => "General Contracting",
            Self::SubcontractorManagement => "Subcontractor Management",
            Self::Repairs => "Repairs",
            Self::SpecialtyTrades => "Specialty Trades",
        }
    }

    /// Looks up a division by its PO-number code.
    ///
    /// Matching is case-insensitive.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.code().eq_ignore_ascii_case(code))
    }

    /// Looks up a division by its exact display name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.name() == name)
    }
}

/// Returns the PO-number code for a division name, or `"XX"` if unknown.
#[must_use]
pub fn division_code_for_name(name: &str) -> &'static str {
    Division::from_name(name).map_or(UNKNOWN_DIVISION_CODE, |d| d.code())
}

/// Maps a division-leader code (`O1`..`O6`) to its two-digit leader id.
///
/// Unknown codes map to `"00"`.
#[must_use]
pub fn leader_id_from_code(code: &str) -> &'static str {
    match code {
        "O1" => "01",
        "O2" => "02",
        "O3" => "03",
        "O4" => "04",
        "O5" => "05",
        "O6" => "06",
        _ => UNKNOWN_LEADER_ID,
    }
}

/// Returns the display name of the owner behind a leader id.
#[must_use]
pub fn leader_name(leader_id: &str) -> Option<&'static str> {
    match leader_id {
        "01" => Some("Owner 1 (CAPEX)"),
        "02" => Some("Owner 2 (Repairs)"),
        "03" => Some("Owner 3 (Roofing)"),
        "04" => Some("Owner 4 (General Contracting)"),
        "05" => Some("Owner 5 (Subcontractor Management)"),
        "06" => Some("Owner 6 (Specialty Trades)"),
        _ => None,
    }
}
