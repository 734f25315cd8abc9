/*
 * SPDX-FileCopyrightText: 2025 TestForge <dev@testforge.dev>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::*;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ProjectResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Serialize, Deserialize, Debug)]
struct MakeProjectRequest {
    pub name: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug)]
struct PatchProjectRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

pub async fn get(config: &RequestConfig) -> Result<Vec<ProjectResponse>, String> {
    let res = get_client(config, "projects".to_string(), RequestType::GET)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    parse_response(res).await
}

pub async fn post(
    config: &RequestConfig,
    name: String,
    description: String,
) -> Result<ProjectResponse, String> {
    let req = MakeProjectRequest { name, description };

    let res = get_client(config, "projects".to_string(), RequestType::POST)
        .json(&req)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    parse_response(res).await
}

pub async fn get_project(config: &RequestConfig, project: i64) -> Result<ProjectResponse, String> {
    let res = get_client(config, format!("projects/{}", project), RequestType::GET)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    parse_response(res).await
}

pub async fn put_project(
    config: &RequestConfig,
    project: i64,
    name: Option<String>,
    description: Option<String>,
) -> Result<ProjectResponse, String> {
    let req = PatchProjectRequest { name, description };

    let res = get_client(config, format!("projects/{}", project), RequestType::PUT)
        .json(&req)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    parse_response(res).await
}

pub async fn delete_project(config: &RequestConfig, project: i64) -> Result<(), String> {
    let res = get_client(config, format!("projects/{}", project), RequestType::DELETE)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    parse_empty_response(res).await
}
