/*
 * SPDX-FileCopyrightText: 2025 TestForge <dev@testforge.dev>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for the project, module and test case entities

use chrono::NaiveDate;
use entity::*;
use sea_orm::{DatabaseBackend, MockDatabase, entity::prelude::*};

fn naive_date() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 8, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

#[tokio::test]
async fn test_project_entity_basic() -> Result<(), DbErr> {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![project::Model {
            id: 1,
            name: "Checkout Flow".to_owned(),
            description: "Comprehensive testing for the checkout flow".to_owned(),
            created_at: naive_date(),
            updated_at: naive_date(),
        }]])
        .into_connection();

    let result = project::Entity::find_by_id(1_i64).one(&db).await?;

    assert!(result.is_some());
    let project = result.unwrap();
    assert_eq!(project.id, 1);
    assert_eq!(project.name, "Checkout Flow");
    assert_eq!(project.created_at, project.updated_at);

    Ok(())
}

#[tokio::test]
async fn test_module_entity_optional_fields() -> Result<(), DbErr> {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![module::Model {
            id: 7,
            project_id: 1,
            name: "Payment Gateway".to_owned(),
            url: None,
            description: None,
            tags: Some(vec!["payments".to_owned(), "critical".to_owned()]),
            created_at: naive_date(),
            updated_at: naive_date(),
        }]])
        .into_connection();

    let module = module::Entity::find_by_id(7_i64).one(&db).await?.unwrap();

    assert_eq!(module.project_id, 1);
    assert!(module.url.is_none());
    assert!(module.description.is_none());
    assert_eq!(module.tags.as_ref().unwrap().len(), 2);

    Ok(())
}

#[test]
fn test_test_case_serializes_kind_as_type() {
    let test_case = test_case::Model {
        id: 3,
        module_id: 7,
        name: "Declined card shows error".to_owned(),
        kind: test_case::TestCaseKind::Requirements,
        content: "Given a declined card...".to_owned(),
        created_at: naive_date(),
        updated_at: naive_date(),
    };

    let json = serde_json::to_value(&test_case).unwrap();
    assert_eq!(json["type"], "requirements");
    assert!(json.get("kind").is_none());

    let parsed: test_case::Model = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, test_case);
}
