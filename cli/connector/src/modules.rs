/*
 * SPDX-FileCopyrightText: 2025 TestForge <dev@testforge.dev>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::*;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ModuleResponse {
    pub id: i64,
    pub project_id: i64,
    pub name: String,
    pub url: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Serialize, Deserialize, Debug)]
struct MakeModuleRequest {
    pub project_id: i64,
    pub name: String,
    pub url: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Debug)]
struct PatchModuleRequest {
    pub name: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
}

pub async fn get(
    config: &RequestConfig,
    project_id: Option<i64>,
) -> Result<Vec<ModuleResponse>, String> {
    let endpoint = match project_id {
        Some(id) => format!("modules?project_id={}", id),
        None => "modules".to_string(),
    };

    let res = get_client(config, endpoint, RequestType::GET)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    parse_response(res).await
}

pub async fn post(
    config: &RequestConfig,
    project_id: i64,
    name: String,
    url: Option<String>,
    description: Option<String>,
    tags: Option<Vec<String>>,
) -> Result<ModuleResponse, String> {
    let req = MakeModuleRequest {
        project_id,
        name,
        url,
        description,
        tags,
    };

    let res = get_client(config, "modules".to_string(), RequestType::POST)
        .json(&req)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    parse_response(res).await
}

pub async fn get_module(config: &RequestConfig, module: i64) -> Result<ModuleResponse, String> {
    let res = get_client(config, format!("modules/{}", module), RequestType::GET)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    parse_response(res).await
}

pub async fn put_module(
    config: &RequestConfig,
    module: i64,
    name: Option<String>,
    url: Option<String>,
    description: Option<String>,
    tags: Option<Vec<String>>,
) -> Result<ModuleResponse, String> {
    let req = PatchModuleRequest {
        name,
        url,
        description,
        tags,
    };

    let res = get_client(config, format!("modules/{}", module), RequestType::PUT)
        .json(&req)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    parse_response(res).await
}

pub async fn delete_module(config: &RequestConfig, module: i64) -> Result<(), String> {
    let res = get_client(config, format!("modules/{}", module), RequestType::DELETE)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    parse_empty_response(res).await
}
