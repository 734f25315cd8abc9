/*
 * SPDX-FileCopyrightText: 2025 TestForge <dev@testforge.dev>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod common;

use axum::extract::{Path, State};
use axum::Json;
use chrono::NaiveDate;
use sea_orm::{DatabaseBackend, MockDatabase};
use web::endpoints::projects::*;
use web::error::WebError;

fn naive_date() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 8, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

#[test]
fn test_make_project_request_serialization() {
    let request = MakeProjectRequest {
        name: "Checkout Flow".to_string(),
        description: "Comprehensive testing for the checkout flow".to_string(),
    };

    let json = serde_json::to_string(&request).unwrap();
    assert!(json.contains("Checkout Flow"));
    assert!(json.contains("Comprehensive testing for the checkout flow"));
}

#[test]
fn test_make_project_request_description_defaults_to_empty() {
    let request: MakeProjectRequest =
        serde_json::from_str(r#"{"name": "Checkout Flow"}"#).unwrap();

    assert_eq!(request.name, "Checkout Flow");
    assert_eq!(request.description, "");
}

#[test]
fn test_patch_project_request_partial_fields() {
    let request: PatchProjectRequest =
        serde_json::from_str(r#"{"description": "updated"}"#).unwrap();

    assert!(request.name.is_none());
    assert_eq!(request.description.as_deref(), Some("updated"));
}

#[tokio::test]
async fn test_post_project_rejects_empty_name() {
    let state = common::create_mock_state();

    let res = post(
        State(state),
        Json(MakeProjectRequest {
            name: "   ".to_string(),
            description: "".to_string(),
        }),
    )
    .await;

    assert!(matches!(res, Err(WebError::BadRequest(_))));
}

#[tokio::test]
async fn test_get_projects_returns_all_rows() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![
            entity::project::Model {
                id: 1,
                name: "Checkout Flow".to_string(),
                description: "".to_string(),
                created_at: naive_date(),
                updated_at: naive_date(),
            },
            entity::project::Model {
                id: 2,
                name: "Mobile Banking".to_string(),
                description: "Security testing".to_string(),
                created_at: naive_date(),
                updated_at: naive_date(),
            },
        ]])
        .into_connection();
    let state = common::create_state_with_db(db);

    let Json(projects) = get(State(state)).await.unwrap();

    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].name, "Checkout Flow");
    assert_eq!(projects[1].id, 2);
}

#[tokio::test]
async fn test_get_project_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<entity::project::Model>::new()])
        .into_connection();
    let state = common::create_state_with_db(db);

    let res = get_project(State(state), Path(42)).await;

    assert!(matches!(res, Err(WebError::NotFound(_))));
}
