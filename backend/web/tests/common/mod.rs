/*
 * SPDX-FileCopyrightText: 2025 TestForge <dev@testforge.dev>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use app_core::types::*;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};
use std::sync::Arc;

pub fn create_mock_cli() -> Cli {
    Cli {
        log_level: "info".to_string(),
        ip: "127.0.0.1".to_string(),
        port: 8000,
        database_url: Some("mock://test".to_string()),
        database_url_file: None,
        generator_url: "http://127.0.0.1:8090".to_string(),
        generator_timeout: 120,
        report_errors: false,
    }
}

pub fn create_state_with_db(db: DatabaseConnection) -> Arc<ServerState> {
    Arc::new(ServerState {
        db,
        cli: create_mock_cli(),
    })
}

pub fn create_mock_state() -> Arc<ServerState> {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<entity::project::Model>::new()])
        .into_connection();

    create_state_with_db(db)
}
