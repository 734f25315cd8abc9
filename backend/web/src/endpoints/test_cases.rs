/*
 * SPDX-FileCopyrightText: 2025 TestForge <dev@testforge.dev>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use crate::generator;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use app_core::database::{get_module_by_id, get_test_case_by_id};
use app_core::input::check_display_name;
use app_core::types::*;
use entity::test_case::TestCaseKind;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeTestCaseRequest {
    pub module_id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TestCaseKind,
    pub content: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct PatchTestCaseRequest {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<TestCaseKind>,
    pub content: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct TestCaseListQuery {
    pub module_id: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum GenerateTestCasesRequest {
    Images(ImagesPayload),
    Requirements(RequirementsPayload),
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ImagesPayload {
    pub image_urls: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RequirementsPayload {
    pub text: String,
}

impl GenerateTestCasesRequest {
    pub fn kind(&self) -> TestCaseKind {
        match self {
            GenerateTestCasesRequest::Images(_) => TestCaseKind::Images,
            GenerateTestCasesRequest::Requirements(_) => TestCaseKind::Requirements,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        match self {
            GenerateTestCasesRequest::Images(payload) => {
                if payload.image_urls.is_empty() {
                    return Err("No images provided".to_string());
                }

                if payload.image_urls.iter().any(|u| u.trim().is_empty()) {
                    return Err("Image URL cannot be empty".to_string());
                }
            }
            GenerateTestCasesRequest::Requirements(payload) => {
                if payload.text.trim().is_empty() {
                    return Err("Requirements text cannot be empty".to_string());
                }
            }
        }

        Ok(())
    }
}

pub async fn get(
    state: State<Arc<ServerState>>,
    Query(query): Query<TestCaseListQuery>,
) -> WebResult<Json<Vec<MTestCase>>> {
    let mut select = ETestCase::find().order_by_asc(CTestCase::Id);

    if let Some(module_id) = query.module_id {
        select = select.filter(CTestCase::ModuleId.eq(module_id));
    }

    let test_cases = select.all(&state.db).await?;

    Ok(Json(test_cases))
}

pub async fn post(
    state: State<Arc<ServerState>>,
    Json(body): Json<MakeTestCaseRequest>,
) -> WebResult<(StatusCode, Json<MTestCase>)> {
    if let Err(e) = check_display_name(&body.name) {
        return Err(WebError::invalid_name("Test case", &e));
    }

    get_module_by_id(state.0.clone(), body.module_id)
        .await?
        .ok_or_else(|| WebError::not_found("Module"))?;

    let now = Utc::now().naive_utc();
    let test_case = ATestCase {
        id: NotSet,
        module_id: Set(body.module_id),
        name: Set(body.name.trim().to_string()),
        kind: Set(body.kind),
        content: Set(body.content),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let test_case = test_case.insert(&state.db).await?;

    Ok((StatusCode::CREATED, Json(test_case)))
}

pub async fn get_test_case(
    state: State<Arc<ServerState>>,
    Path(test_case): Path<i64>,
) -> WebResult<Json<MTestCase>> {
    let test_case = get_test_case_by_id(state.0.clone(), test_case)
        .await?
        .ok_or_else(|| WebError::not_found("Test case"))?;

    Ok(Json(test_case))
}

pub async fn put_test_case(
    state: State<Arc<ServerState>>,
    Path(test_case): Path<i64>,
    Json(body): Json<PatchTestCaseRequest>,
) -> WebResult<Json<MTestCase>> {
    let test_case = get_test_case_by_id(state.0.clone(), test_case)
        .await?
        .ok_or_else(|| WebError::not_found("Test case"))?;

    let mut atest_case: ATestCase = test_case.into();

    if let Some(name) = body.name {
        if let Err(e) = check_display_name(&name) {
            return Err(WebError::invalid_name("Test case", &e));
        }

        atest_case.name = Set(name.trim().to_string());
    }

    if let Some(kind) = body.kind {
        atest_case.kind = Set(kind);
    }

    if let Some(content) = body.content {
        atest_case.content = Set(content);
    }

    atest_case.updated_at = Set(Utc::now().naive_utc());
    let test_case = atest_case.update(&state.db).await?;

    Ok(Json(test_case))
}

pub async fn delete_test_case(
    state: State<Arc<ServerState>>,
    Path(test_case): Path<i64>,
) -> WebResult<StatusCode> {
    let test_case = get_test_case_by_id(state.0.clone(), test_case)
        .await?
        .ok_or_else(|| WebError::not_found("Test case"))?;

    let atest_case: ATestCase = test_case.into();
    atest_case.delete(&state.db).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn post_generate(
    state: State<Arc<ServerState>>,
    Path(module): Path<i64>,
    Json(body): Json<GenerateTestCasesRequest>,
) -> WebResult<(StatusCode, Json<MTestCase>)> {
    body.validate().map_err(WebError::BadRequest)?;

    let module = get_module_by_id(state.0.clone(), module)
        .await?
        .ok_or_else(|| WebError::not_found("Module"))?;

    let generated = generator::generate_test_case(Arc::clone(&state), &module, &body)
        .await
        .map_err(|e| {
            tracing::error!("Test case generation failed for module {}: {}", module.id, e);
            WebError::generation_failed()
        })?;

    let now = Utc::now().naive_utc();
    let test_case = ATestCase {
        id: NotSet,
        module_id: Set(module.id),
        name: Set(generated.name),
        kind: Set(body.kind()),
        content: Set(generated.content),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let test_case = test_case.insert(&state.db).await?;

    Ok((StatusCode::CREATED, Json(test_case)))
}
