/*
 * SPDX-FileCopyrightText: 2025 TestForge <dev@testforge.dev>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod common;

use axum::extract::{Query, State};
use axum::Json;
use chrono::NaiveDate;
use sea_orm::{DatabaseBackend, MockDatabase};
use web::endpoints::modules::*;
use web::error::WebError;

fn naive_date() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 8, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

#[test]
fn test_make_module_request_serialization() {
    let request = MakeModuleRequest {
        project_id: 1,
        name: "Payment Gateway".to_string(),
        url: Some("https://staging.example.com/payments".to_string()),
        description: None,
        tags: Some(vec!["payments".to_string(), "critical".to_string()]),
    };

    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["project_id"], 1);
    assert_eq!(json["name"], "Payment Gateway");
    assert_eq!(json["tags"][1], "critical");
    assert!(json["description"].is_null());
}

#[test]
fn test_module_list_query_optional_filter() {
    let query: ModuleListQuery = serde_json::from_str(r#"{"project_id": 3}"#).unwrap();
    assert_eq!(query.project_id, Some(3));

    let query: ModuleListQuery = serde_json::from_str("{}").unwrap();
    assert!(query.project_id.is_none());
}

#[tokio::test]
async fn test_post_module_unknown_project() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<entity::project::Model>::new()])
        .into_connection();
    let state = common::create_state_with_db(db);

    let res = post(
        State(state),
        Json(MakeModuleRequest {
            project_id: 99,
            name: "Payment Gateway".to_string(),
            url: None,
            description: None,
            tags: None,
        }),
    )
    .await;

    assert!(matches!(res, Err(WebError::NotFound(_))));
}

#[tokio::test]
async fn test_post_module_rejects_invalid_url() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![entity::project::Model {
            id: 1,
            name: "Checkout Flow".to_string(),
            description: "".to_string(),
            created_at: naive_date(),
            updated_at: naive_date(),
        }]])
        .into_connection();
    let state = common::create_state_with_db(db);

    let res = post(
        State(state),
        Json(MakeModuleRequest {
            project_id: 1,
            name: "Payment Gateway".to_string(),
            url: Some("not a url".to_string()),
            description: None,
            tags: None,
        }),
    )
    .await;

    assert!(matches!(res, Err(WebError::BadRequest(_))));
}

#[tokio::test]
async fn test_get_modules_filtered_by_project() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![entity::module::Model {
            id: 7,
            project_id: 3,
            name: "Payment Gateway".to_string(),
            url: None,
            description: None,
            tags: None,
            created_at: naive_date(),
            updated_at: naive_date(),
        }]])
        .into_connection();
    let state = common::create_state_with_db(db);

    let Json(modules) = get(State(state), Query(ModuleListQuery { project_id: Some(3) }))
        .await
        .unwrap();

    assert_eq!(modules.len(), 1);
    assert_eq!(modules[0].project_id, 3);
}
