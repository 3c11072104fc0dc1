// Copyright (C) 2026 ASR Roofing
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Structured PO numbers.
//!
//! A PO number packs four fields into one string:
//!
//! ```text
//! {leader_id}{division_code}{work_order:04}-{purchase_sequence}
//! 01         CP             2345           -1
//! ```
//!
//! There is no delimiter between the leader id and the division code. The
//! boundary is found by character class: the leader id is the leading run
//! of ASCII digits and the division code is the run of ASCII letters that
//! follows it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::division::{Division, leader_name};
use crate::error::{DomainError, PoNumberParseError};

/// The largest work order number that fits the four-digit field.
pub const MAX_WORK_ORDER_NUMBER: u32 = 9999;

/// Width of the zero-padded work order segment.
const WORK_ORDER_WIDTH: usize = 4;

/// A decoded PO number.
///
/// Values can only be built through [`PoNumber::new`] or
/// [`PoNumber::parse`], so every `PoNumber` encodes to a string that parses
/// back to an equal value. Serde uses the encoded string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PoNumber {
    leader_id: String,
    division_code: String,
    work_order_number: u32,
    purchase_sequence: u32,
}

impl PoNumber {
    /// Creates a PO number from its components.
    ///
    /// # Arguments
    ///
    /// * `leader_id` - One or more ASCII digits identifying the division leader
    /// * `division_code` - One or more ASCII letters identifying the division
    /// * `work_order_number` - The work order number, at most 9999
    /// * `purchase_sequence` - The PO sequence within the work order
    ///
    /// # Errors
    ///
    /// Returns `DomainError::WorkOrderOutOfRange` if the work order number
    /// does not fit four digits, and `DomainError::InvalidLeaderId` or
    /// `DomainError::InvalidDivisionCode` if a text field has the wrong
    /// character class.
    pub fn new(
        leader_id: &str,
        division_code: &str,
        work_order_number: u32,
        purchase_sequence: u32,
    ) -> Result<Self, DomainError> {
        if work_order_number > MAX_WORK_ORDER_NUMBER {
            return Err(DomainError::WorkOrderOutOfRange {
                value: work_order_number,
                max: MAX_WORK_ORDER_NUMBER,
            });
        }
        if leader_id.is_empty() || !leader_id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::InvalidLeaderId(leader_id.to_string()));
        }
        if division_code.is_empty() || !division_code.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(DomainError::InvalidDivisionCode(division_code.to_string()));
        }

        Ok(Self {
            leader_id: leader_id.to_string(),
            division_code: division_code.to_string(),
            work_order_number,
            purchase_sequence,
        })
    }

    /// Parses a PO number string.
    ///
    /// Only the canonical form is accepted: a four-digit work order segment
    /// and a purchase sequence without leading zeros. This keeps
    /// `parse(s).encode() == s` for every accepted `s`.
    ///
    /// # Errors
    ///
    /// Returns a `PoNumberParseError` describing the first segment that does
    /// not match. This function never panics.
    pub fn parse(code: &str) -> Result<Self, PoNumberParseError> {
        let mut scanner = Scanner::new(code);

        let leader_id = scanner.take_while(|b| b.is_ascii_digit());
        if leader_id.is_empty() {
            return Err(PoNumberParseError::MissingLeaderId);
        }

        let division_code = scanner.take_while(|b| b.is_ascii_alphabetic());
        if division_code.is_empty() {
            return Err(PoNumberParseError::MissingDivisionCode);
        }

        let work_order = scanner.take_while(|b| b.is_ascii_digit());
        if work_order.len() != WORK_ORDER_WIDTH {
            return Err(PoNumberParseError::InvalidWorkOrder);
        }
        let work_order_number: u32 = work_order
            .parse()
            .map_err(|_| PoNumberParseError::InvalidWorkOrder)?;

        if !scanner.eat(b'-') {
            return Err(PoNumberParseError::MissingSeparator);
        }

        let sequence = scanner.rest();
        if sequence.is_empty()
            || !sequence.bytes().all(|b| b.is_ascii_digit())
            || (sequence.len() > 1 && sequence.starts_with('0'))
        {
            return Err(PoNumberParseError::InvalidSequence);
        }
        let purchase_sequence: u32 = sequence
            .parse()
            .map_err(|_| PoNumberParseError::InvalidSequence)?;

        Ok(Self {
            leader_id: leader_id.to_string(),
            division_code: division_code.to_string(),
            work_order_number,
            purchase_sequence,
        })
    }

    /// Returns the leader id segment.
    #[must_use]
    pub fn leader_id(&self) -> &str {
        &self.leader_id
    }

    /// Returns the division code segment.
    #[must_use]
    pub fn division_code(&self) -> &str {
        &self.division_code
    }

    /// Returns the work order number.
    #[must_use]
    pub const fn work_order_number(&self) -> u32 {
        self.work_order_number
    }

    /// Returns the purchase sequence within the work order.
    #[must_use]
    pub const fn purchase_sequence(&self) -> u32 {
        self.purchase_sequence
    }

    /// Returns the zero-padded work order segment.
    #[must_use]
    pub fn padded_work_order(&self) -> String {
        format!("{:0width$}", self.work_order_number, width = WORK_ORDER_WIDTH)
    }

    /// Encodes this PO number to its canonical string form.
    #[must_use]
    pub fn encode(&self) -> String {
        self.to_string()
    }

    /// Returns the short tooltip description of this PO number.
    #[must_use]
    pub fn tooltip(&self) -> String {
        format!(
            "Leader {}, Division {}, Work Order {}, Purchase #{}",
            self.leader_id, self.division_code, self.work_order_number, self.purchase_sequence
        )
    }

    /// Returns a verbose description using the leader and division tables.
    ///
    /// Unknown leaders and divisions are described as such rather than
    /// failing.
    #[must_use]
    pub fn describe(&self) -> String {
        let leader: &str = leader_name(&self.leader_id).unwrap_or("Unknown Leader");
        let division: &str =
            Division::from_code(&self.division_code).map_or("Unknown Division", |d| d.name());
        format!(
            "{leader} | {division} | WO-{} | Purchase #{}",
            self.work_order_number, self.purchase_sequence
        )
    }
}

impl fmt::Display for PoNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{:0width$}-{}",
            self.leader_id,
            self.division_code,
            self.work_order_number,
            self.purchase_sequence,
            width = WORK_ORDER_WIDTH
        )
    }
}

impl FromStr for PoNumber {
    type Err = PoNumberParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PoNumber {
    type Error = PoNumberParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PoNumber> for String {
    fn from(po: PoNumber) -> Self {
        po.encode()
    }
}

/// Builds and encodes a PO number in one step.
///
/// # Errors
///
/// Returns the same errors as [`PoNumber::new`].
pub fn encode_po_number(
    leader_id: &str,
    division_code: &str,
    work_order_number: u32,
    purchase_sequence: u32,
) -> Result<String, DomainError> {
    PoNumber::new(leader_id, division_code, work_order_number, purchase_sequence)
        .map(|po| po.encode())
}

/// Returns true if `code` is a well-formed PO number.
#[must_use]
pub fn is_valid_po_number(code: &str) -> bool {
    PoNumber::parse(code).is_ok()
}

/// Returns the tooltip description of `code`, or `None` if it does not parse.
#[must_use]
pub fn decode_po_number(code: &str) -> Option<String> {
    PoNumber::parse(code).ok().map(|po| po.tooltip())
}

/// Byte cursor over an ASCII-segmented string.
///
/// Every split point falls on an ASCII byte, so slicing never lands inside
/// a multi-byte character.
struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn take_while(&mut self, pred: impl Fn(u8) -> bool) -> &'a str {
        let start: usize = self.pos;
        let bytes: &[u8] = self.input.as_bytes();
        while self.pos < bytes.len() && pred(bytes[self.pos]) {
            self.pos += 1;
        }
        &self.input[start..self.pos]
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.input.as_bytes().get(self.pos) == Some(&byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }
}
