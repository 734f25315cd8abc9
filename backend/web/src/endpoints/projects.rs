/*
 * SPDX-FileCopyrightText: 2025 TestForge <dev@testforge.dev>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use app_core::database::get_project_by_id;
use app_core::input::check_display_name;
use app_core::types::*;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeProjectRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct PatchProjectRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

pub async fn get(state: State<Arc<ServerState>>) -> WebResult<Json<Vec<MProject>>> {
    let projects = EProject::find()
        .order_by_asc(CProject::Id)
        .all(&state.db)
        .await?;

    Ok(Json(projects))
}

pub async fn post(
    state: State<Arc<ServerState>>,
    Json(body): Json<MakeProjectRequest>,
) -> WebResult<(StatusCode, Json<MProject>)> {
    if let Err(e) = check_display_name(&body.name) {
        return Err(WebError::invalid_name("Project", &e));
    }

    let now = Utc::now().naive_utc();
    let project = AProject {
        id: NotSet,
        name: Set(body.name.trim().to_string()),
        description: Set(body.description),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let project = project.insert(&state.db).await?;

    Ok((StatusCode::CREATED, Json(project)))
}

pub async fn get_project(
    state: State<Arc<ServerState>>,
    Path(project): Path<i64>,
) -> WebResult<Json<MProject>> {
    let project = get_project_by_id(state.0.clone(), project)
        .await?
        .ok_or_else(|| WebError::not_found("Project"))?;

    Ok(Json(project))
}

pub async fn put_project(
    state: State<Arc<ServerState>>,
    Path(project): Path<i64>,
    Json(body): Json<PatchProjectRequest>,
) -> WebResult<Json<MProject>> {
    let project = get_project_by_id(state.0.clone(), project)
        .await?
        .ok_or_else(|| WebError::not_found("Project"))?;

    let mut aproject: AProject = project.into();

    if let Some(name) = body.name {
        if let Err(e) = check_display_name(&name) {
            return Err(WebError::invalid_name("Project", &e));
        }

        aproject.name = Set(name.trim().to_string());
    }

    if let Some(description) = body.description {
        aproject.description = Set(description);
    }

    aproject.updated_at = Set(Utc::now().naive_utc());
    let project = aproject.update(&state.db).await?;

    Ok(Json(project))
}

pub async fn delete_project(
    state: State<Arc<ServerState>>,
    Path(project): Path<i64>,
) -> WebResult<StatusCode> {
    let project = get_project_by_id(state.0.clone(), project)
        .await?
        .ok_or_else(|| WebError::not_found("Project"))?;

    let aproject: AProject = project.into();
    aproject.delete(&state.db).await?;

    Ok(StatusCode::NO_CONTENT)
}
