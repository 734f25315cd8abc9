/*
 * SPDX-FileCopyrightText: 2025 TestForge <dev@testforge.dev>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for entity enums

use entity::test_case::TestCaseKind;
use std::str::FromStr;

#[test]
fn test_test_case_kind_from_str() {
    assert_eq!(
        TestCaseKind::from_str("images").unwrap(),
        TestCaseKind::Images
    );
    assert_eq!(
        TestCaseKind::from_str("requirements").unwrap(),
        TestCaseKind::Requirements
    );

    assert!(TestCaseKind::from_str("Images").is_err());
    assert!(TestCaseKind::from_str("").is_err());
}

#[test]
fn test_test_case_kind_wire_format() {
    assert_eq!(
        serde_json::to_string(&TestCaseKind::Images).unwrap(),
        "\"images\""
    );
    assert_eq!(
        serde_json::to_string(&TestCaseKind::Requirements).unwrap(),
        "\"requirements\""
    );

    let kind: TestCaseKind = serde_json::from_str("\"requirements\"").unwrap();
    assert_eq!(kind, TestCaseKind::Requirements);
}
