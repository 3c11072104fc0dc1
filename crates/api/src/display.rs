// Copyright (C) 2026 ASR Roofing
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Render-ready PO number decomposition.
//!
//! UI code colors each segment of a PO number and shows a tooltip. Strings
//! that are not well-formed PO numbers (legacy numbers, free text) are
//! rendered unchanged as plain text instead.

use asr_po_domain::PoNumber;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// The meaning of one displayed segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    /// Leader id digits.
    Leader,
    /// Division code letters.
    Division,
    /// Zero-padded work order number.
    WorkOrder,
    /// The `-` between work order and sequence.
    Separator,
    /// Purchase sequence number.
    Sequence,
}

/// One contiguous piece of a displayed PO number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySegment {
    /// What the segment holds.
    pub kind: SegmentKind,
    /// The segment's exact text.
    pub text: String,
}

impl DisplaySegment {
    fn new(kind: SegmentKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// How a PO number string should be shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum PoNumberDisplay {
    /// A well-formed PO number split into its segments.
    Decomposed {
        /// Segments whose texts concatenate to the original string.
        segments: Vec<DisplaySegment>,
        /// Short description for hover text.
        tooltip: String,
    },
    /// Anything else, shown verbatim.
    PlainText {
        /// The original string.
        text: String,
    },
}

impl PoNumberDisplay {
    /// Returns the full text being displayed.
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Decomposed { segments, .. } => segments.iter().map(|s| s.text.as_str()).collect(),
            Self::PlainText { text } => text.clone(),
        }
    }

    /// Returns true if the string was recognized as a PO number.
    #[must_use]
    pub const fn is_decomposed(&self) -> bool {
        matches!(self, Self::Decomposed { .. })
    }
}

/// Prepares a PO number string for display.
///
/// Never fails: unparseable input comes back as `PlainText` holding the
/// input unmodified.
#[must_use]
pub fn render_po_number(code: &str) -> PoNumberDisplay {
    match PoNumber::parse(code) {
        Ok(po) => PoNumberDisplay::Decomposed {
            segments: vec![
                DisplaySegment::new(SegmentKind::Leader, po.leader_id()),
                DisplaySegment::new(SegmentKind::Division, po.division_code()),
                DisplaySegment::new(SegmentKind::WorkOrder, po.padded_work_order()),
                DisplaySegment::new(SegmentKind::Separator, "-"),
                DisplaySegment::new(SegmentKind::Sequence, po.purchase_sequence().to_string()),
            ],
            tooltip: po.tooltip(),
        },
        Err(err) => {
            trace!(code, error = %err, "Rendering PO number as plain text");
            PoNumberDisplay::PlainText {
                text: code.to_string(),
            }
        }
    }
}
