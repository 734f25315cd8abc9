/*
 * SPDX-FileCopyrightText: 2025 TestForge <dev@testforge.dev>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for input validation and parsing functions

extern crate core as testforge_core;
use testforge_core::input::*;

#[test]
fn test_port_in_range() {
    let port = port_in_range("8000").unwrap();
    assert_eq!(port, 8000);

    let port = port_in_range("65535").unwrap();
    assert_eq!(port, 65535);

    let port = port_in_range("65536").unwrap_err();
    assert_eq!(port, "port not in range 1-65535");

    let port = port_in_range("0").unwrap_err();
    assert_eq!(port, "port not in range 1-65535");
}

#[test]
fn test_greater_than_zero() {
    let num = greater_than_zero::<u64>("1").unwrap();
    assert_eq!(num, 1);

    let num = greater_than_zero::<u64>("0").unwrap_err();
    assert_eq!(num, "`0` is not larger than 0");

    let num = greater_than_zero::<i32>("-1").unwrap_err();
    assert_eq!(num, "`-1` is not larger than 0");

    let num = greater_than_zero::<u64>("a").unwrap_err();
    assert_eq!(num, "`a` is not a valid number");
}

#[test]
fn test_check_display_name() {
    assert!(check_display_name("Checkout Flow").is_ok());
    assert!(check_display_name("a").is_ok());

    let err = check_display_name("").unwrap_err();
    assert_eq!(err, "Name cannot be empty");

    let err = check_display_name("   ").unwrap_err();
    assert_eq!(err, "Name cannot be empty");

    let err = check_display_name("\t\n").unwrap_err();
    assert_eq!(err, "Name cannot be empty");

    assert!(check_display_name(&"x".repeat(200)).is_ok());
    assert!(check_display_name(&"x".repeat(201)).is_err());
}

#[test]
fn test_normalize_tags() {
    let tags = normalize_tags(vec![
        " payments ".to_string(),
        "critical".to_string(),
        "payments".to_string(),
        "".to_string(),
        "  ".to_string(),
    ])
    .unwrap();
    assert_eq!(tags, vec!["payments".to_string(), "critical".to_string()]);

    let tags = normalize_tags(vec![]).unwrap();
    assert!(tags.is_empty());

    let too_many: Vec<String> = (0..33).map(|i| format!("tag-{}", i)).collect();
    assert!(normalize_tags(too_many).is_err());
}
