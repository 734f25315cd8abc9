/*
 * SPDX-FileCopyrightText: 2025 TestForge <dev@testforge.dev>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for the server configuration and shared response types

extern crate core as testforge_core;
use clap::Parser;
use testforge_core::types::*;

#[test]
fn test_cli_defaults() {
    let cli = Cli::try_parse_from(["testforge-server"]).unwrap();

    assert_eq!(cli.log_level, "info");
    assert_eq!(cli.ip, "127.0.0.1");
    assert_eq!(cli.port, 8000);
    assert_eq!(cli.generator_url, "http://127.0.0.1:8090");
    assert_eq!(cli.generator_timeout, 120);
    assert!(!cli.report_errors);
    assert!(cli.database_url.is_none());
}

#[test]
fn test_cli_rejects_invalid_port() {
    assert!(Cli::try_parse_from(["testforge-server", "--port", "0"]).is_err());
    assert!(Cli::try_parse_from(["testforge-server", "--port", "65536"]).is_err());
    assert!(Cli::try_parse_from(["testforge-server", "--port", "8080"]).is_ok());
}

#[test]
fn test_cli_rejects_invalid_generator_timeout() {
    assert!(Cli::try_parse_from(["testforge-server", "--generator-timeout", "0"]).is_err());
    assert!(Cli::try_parse_from(["testforge-server", "--generator-timeout", "30"]).is_ok());
}

#[test]
fn test_error_response_serialization() {
    let res = ErrorResponse {
        error: "Project not found".to_string(),
    };

    let json = serde_json::to_string(&res).unwrap();
    assert_eq!(json, "{\"error\":\"Project not found\"}");
}
