// Copyright (C) 2026 ASR Roofing
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DomainError, PoNumber, PoNumberParseError, decode_po_number, encode_po_number,
    is_valid_po_number,
};

#[test]
fn test_encode_pads_work_order() {
    let encoded: String = encode_po_number("01", "CP", 1, 1).unwrap();
    assert_eq!(encoded, "01CP0001-1");
}

#[test]
fn test_encode_full_width_values() {
    assert_eq!(encode_po_number("01", "CP", 2345, 1).unwrap(), "01CP2345-1");
    assert_eq!(encode_po_number("03", "GC", 9999, 99).unwrap(), "03GC9999-99");
    assert_eq!(encode_po_number("02", "RF", 0, 0).unwrap(), "02RF0000-0");
}

#[test]
fn test_encode_rejects_work_order_over_four_digits() {
    let result = encode_po_number("01", "CP", 10_000, 1);
    assert_eq!(
        result,
        Err(DomainError::WorkOrderOutOfRange {
            value: 10_000,
            max: 9999,
        })
    );
}

#[test]
fn test_new_rejects_malformed_leader_id() {
    assert!(matches!(
        PoNumber::new("OM", "CP", 1, 1),
        Err(DomainError::InvalidLeaderId(_))
    ));
    assert!(matches!(
        PoNumber::new("", "CP", 1, 1),
        Err(DomainError::InvalidLeaderId(_))
    ));
}

#[test]
fn test_new_rejects_malformed_division_code() {
    assert!(matches!(
        PoNumber::new("01", "C1", 1, 1),
        Err(DomainError::InvalidDivisionCode(_))
    ));
    assert!(matches!(
        PoNumber::new("01", "", 1, 1),
        Err(DomainError::InvalidDivisionCode(_))
    ));
}

#[test]
fn test_parse_canonical_po_number() {
    let po: PoNumber = PoNumber::parse("01CP0001-1").unwrap();
    assert_eq!(po.leader_id(), "01");
    assert_eq!(po.division_code(), "CP");
    assert_eq!(po.work_order_number(), 1);
    assert_eq!(po.purchase_sequence(), 1);
    assert_eq!(po.padded_work_order(), "0001");
}

#[test]
fn test_parse_variable_width_segments() {
    let po: PoNumber = "123ABC0042-17".parse().unwrap();
    assert_eq!(po.leader_id(), "123");
    assert_eq!(po.division_code(), "ABC");
    assert_eq!(po.work_order_number(), 42);
    assert_eq!(po.purchase_sequence(), 17);
}

#[test]
fn test_parse_of_encode_is_identity() {
    let cases = [
        ("01", "CP", 1, 1),
        ("02", "RF", 0, 0),
        ("03", "GC", 9999, 4_294_967_295),
        ("7", "ST", 120, 12),
        ("0042", "abc", 5, 300),
    ];

    for (leader, division, work_order, sequence) in cases {
        let po: PoNumber = PoNumber::new(leader, division, work_order, sequence).unwrap();
        assert_eq!(PoNumber::parse(&po.encode()), Ok(po));
    }
}

#[test]
fn test_encode_of_parse_is_identity() {
    let inputs = ["01CP0001-1", "02rf0000-0", "123ABC0042-17", "9Z9999-4294967295"];

    for input in inputs {
        let po: PoNumber = PoNumber::parse(input).unwrap();
        assert_eq!(po.encode(), input);
        assert_eq!(po.to_string(), input);
    }
}

#[test]
fn test_parse_failures_are_values() {
    let cases = [
        ("", PoNumberParseError::MissingLeaderId),
        ("not-a-po", PoNumberParseError::MissingLeaderId),
        ("CP0001-1", PoNumberParseError::MissingLeaderId),
        ("01-0001-1", PoNumberParseError::MissingDivisionCode),
        ("01\u{c7}P0001-1", PoNumberParseError::MissingDivisionCode),
        ("01CP-1", PoNumberParseError::InvalidWorkOrder),
        ("01CP12-1", PoNumberParseError::InvalidWorkOrder),
        ("01CP00001-1", PoNumberParseError::InvalidWorkOrder),
        ("01CP0001", PoNumberParseError::MissingSeparator),
        ("01CP0001_1", PoNumberParseError::MissingSeparator),
        ("01CP0001\u{2014}1", PoNumberParseError::MissingSeparator),
        ("01CP0001-", PoNumberParseError::InvalidSequence),
        ("01CP0001-01", PoNumberParseError::InvalidSequence),
        ("01CP0001-1x", PoNumberParseError::InvalidSequence),
        ("01CP2345-1bn23", PoNumberParseError::InvalidSequence),
        ("01CP0001--1", PoNumberParseError::InvalidSequence),
        ("01CP0001-99999999999", PoNumberParseError::InvalidSequence),
    ];

    for (input, expected) in cases {
        assert_eq!(PoNumber::parse(input), Err(expected), "input: {input:?}");
        assert!(!is_valid_po_number(input), "input: {input:?}");
    }
}

#[test]
fn test_decode_po_number_tooltip() {
    assert_eq!(
        decode_po_number("01CP0012-1").as_deref(),
        Some("Leader 01, Division CP, Work Order 12, Purchase #1")
    );
    assert_eq!(decode_po_number("not-a-po"), None);
    assert_eq!(decode_po_number(""), None);
}

#[test]
fn test_describe_uses_lookup_tables() {
    let po: PoNumber = PoNumber::parse("01CP2345-1").unwrap();
    assert_eq!(po.describe(), "Owner 1 (CAPEX) | CAPEX | WO-2345 | Purchase #1");

    let po: PoNumber = PoNumber::parse("03rf0007-2").unwrap();
    assert_eq!(po.describe(), "Owner 3 (Roofing) | Roofing | WO-7 | Purchase #2");

    let po: PoNumber = PoNumber::parse("77ZZ0001-3").unwrap();
    assert_eq!(
        po.describe(),
        "Unknown Leader | Unknown Division | WO-1 | Purchase #3"
    );
}

#[test]
fn test_serde_uses_encoded_form() {
    let po: PoNumber = PoNumber::new("04", "SM", 1234, 5).unwrap();
    let json: String = serde_json::to_string(&po).unwrap();
    assert_eq!(json, "\"04SM1234-5\"");

    let back: PoNumber = serde_json::from_str(&json).unwrap();
    assert_eq!(back, po);

    assert!(serde_json::from_str::<PoNumber>("\"01CP-1\"").is_err());
}
