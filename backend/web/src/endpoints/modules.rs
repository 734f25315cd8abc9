/*
 * SPDX-FileCopyrightText: 2025 TestForge <dev@testforge.dev>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use app_core::database::{get_module_by_id, get_project_by_id};
use app_core::input::{check_display_name, normalize_tags};
use app_core::types::*;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use url::Url;

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeModuleRequest {
    pub project_id: i64,
    pub name: String,
    pub url: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct PatchModuleRequest {
    pub name: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[derive(Deserialize, Debug)]
pub struct ModuleListQuery {
    pub project_id: Option<i64>,
}

fn check_module_url(url: &str) -> Result<String, WebError> {
    let parsed = Url::parse(url.trim())
        .map_err(|_| WebError::BadRequest("Invalid Module URL".to_string()))?;

    Ok(parsed.to_string())
}

pub async fn get(
    state: State<Arc<ServerState>>,
    Query(query): Query<ModuleListQuery>,
) -> WebResult<Json<Vec<MModule>>> {
    let mut select = EModule::find().order_by_asc(CModule::Id);

    if let Some(project_id) = query.project_id {
        select = select.filter(CModule::ProjectId.eq(project_id));
    }

    let modules = select.all(&state.db).await?;

    Ok(Json(modules))
}

pub async fn post(
    state: State<Arc<ServerState>>,
    Json(body): Json<MakeModuleRequest>,
) -> WebResult<(StatusCode, Json<MModule>)> {
    if let Err(e) = check_display_name(&body.name) {
        return Err(WebError::invalid_name("Module", &e));
    }

    get_project_by_id(state.0.clone(), body.project_id)
        .await?
        .ok_or_else(|| WebError::not_found("Project"))?;

    let url = match body.url {
        Some(url) if !url.trim().is_empty() => Some(check_module_url(&url)?),
        _ => None,
    };

    let tags = match body.tags {
        Some(tags) => {
            let tags = normalize_tags(tags).map_err(WebError::BadRequest)?;
            if tags.is_empty() { None } else { Some(tags) }
        }
        None => None,
    };

    let now = Utc::now().naive_utc();
    let module = AModule {
        id: NotSet,
        project_id: Set(body.project_id),
        name: Set(body.name.trim().to_string()),
        url: Set(url),
        description: Set(body.description),
        tags: Set(tags),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let module = module.insert(&state.db).await?;

    Ok((StatusCode::CREATED, Json(module)))
}

pub async fn get_module(
    state: State<Arc<ServerState>>,
    Path(module): Path<i64>,
) -> WebResult<Json<MModule>> {
    let module = get_module_by_id(state.0.clone(), module)
        .await?
        .ok_or_else(|| WebError::not_found("Module"))?;

    Ok(Json(module))
}

pub async fn put_module(
    state: State<Arc<ServerState>>,
    Path(module): Path<i64>,
    Json(body): Json<PatchModuleRequest>,
) -> WebResult<Json<MModule>> {
    let module = get_module_by_id(state.0.clone(), module)
        .await?
        .ok_or_else(|| WebError::not_found("Module"))?;

    let mut amodule: AModule = module.into();

    if let Some(name) = body.name {
        if let Err(e) = check_display_name(&name) {
            return Err(WebError::invalid_name("Module", &e));
        }

        amodule.name = Set(name.trim().to_string());
    }

    if let Some(url) = body.url {
        if url.trim().is_empty() {
            amodule.url = Set(None);
        } else {
            amodule.url = Set(Some(check_module_url(&url)?));
        }
    }

    if let Some(description) = body.description {
        amodule.description = Set(Some(description));
    }

    if let Some(tags) = body.tags {
        let tags = normalize_tags(tags).map_err(WebError::BadRequest)?;
        amodule.tags = Set(if tags.is_empty() { None } else { Some(tags) });
    }

    amodule.updated_at = Set(Utc::now().naive_utc());
    let module = amodule.update(&state.db).await?;

    Ok(Json(module))
}

pub async fn delete_module(
    state: State<Arc<ServerState>>,
    Path(module): Path<i64>,
) -> WebResult<StatusCode> {
    let module = get_module_by_id(state.0.clone(), module)
        .await?
        .ok_or_else(|| WebError::not_found("Module"))?;

    let amodule: AModule = module.into();
    amodule.delete(&state.db).await?;

    Ok(StatusCode::NO_CONTENT)
}
