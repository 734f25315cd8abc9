/*
 * SPDX-FileCopyrightText: 2025 TestForge <dev@testforge.dev>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::input::{greater_than_zero, port_in_range};
use clap::Parser;
use entity::*;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(name = "TestForge", display_name = "TestForge", bin_name = "testforge-server", author = "TestForge", version, about, long_about = None)]
pub struct Cli {
    #[arg(long, env = "TESTFORGE_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
    #[arg(long, env = "TESTFORGE_IP", default_value = "127.0.0.1")]
    pub ip: String,
    #[arg(long, env = "TESTFORGE_PORT", value_parser = port_in_range, default_value_t = 8000)]
    pub port: u16,
    #[arg(long, env = "TESTFORGE_DATABASE_URL")]
    pub database_url: Option<String>,
    #[arg(long, env = "TESTFORGE_DATABASE_URL_FILE")]
    pub database_url_file: Option<String>,
    #[arg(
        long,
        env = "TESTFORGE_GENERATOR_URL",
        default_value = "http://127.0.0.1:8090"
    )]
    pub generator_url: String,
    #[arg(long, env = "TESTFORGE_GENERATOR_TIMEOUT", value_parser = greater_than_zero::<u64>, default_value = "120")]
    pub generator_timeout: u64,
    #[arg(long, env = "TESTFORGE_REPORT_ERRORS", default_value = "false")]
    pub report_errors: bool,
}

#[derive(Debug)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub cli: Cli,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct HealthResponse {
    pub status: String,
}

pub type EModule = module::Entity;
pub type EProject = project::Entity;
pub type ETestCase = test_case::Entity;

pub type MModule = module::Model;
pub type MProject = project::Model;
pub type MTestCase = test_case::Model;

pub type AModule = module::ActiveModel;
pub type AProject = project::ActiveModel;
pub type ATestCase = test_case::ActiveModel;

pub type CModule = module::Column;
pub type CProject = project::Column;
pub type CTestCase = test_case::Column;

pub type RModule = module::Relation;
pub type RProject = project::Relation;
pub type RTestCase = test_case::Relation;
