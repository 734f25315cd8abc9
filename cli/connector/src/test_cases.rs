/*
 * SPDX-FileCopyrightText: 2025 TestForge <dev@testforge.dev>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::*;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TestCaseResponse {
    pub id: i64,
    pub module_id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Serialize, Deserialize, Debug)]
struct MakeTestCaseRequest {
    pub module_id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
}

#[derive(Serialize, Deserialize, Debug)]
struct PatchTestCaseRequest {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub content: Option<String>,
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

pub async fn get(
    config: &RequestConfig,
    module_id: Option<i64>,
) -> Result<Vec<TestCaseResponse>, String> {
    let endpoint = match module_id {
        Some(id) => format!("test-cases?module_id={}", id),
        None => "test-cases".to_string(),
    };

    let res = get_client(config, endpoint, RequestType::GET)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    parse_response(res).await
}

pub async fn post(
    config: &RequestConfig,
    module_id: i64,
    name: String,
    kind: String,
    content: String,
) -> Result<TestCaseResponse, String> {
    let req = MakeTestCaseRequest {
        module_id,
        name,
        kind,
        content,
    };

    let res = get_client(config, "test-cases".to_string(), RequestType::POST)
        .json(&req)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    parse_response(res).await
}

pub async fn get_test_case(
    config: &RequestConfig,
    test_case: i64,
) -> Result<TestCaseResponse, String> {
    let res = get_client(config, format!("test-cases/{}", test_case), RequestType::GET)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    parse_response(res).await
}

pub async fn put_test_case(
    config: &RequestConfig,
    test_case: i64,
    name: Option<String>,
    kind: Option<String>,
    content: Option<String>,
) -> Result<TestCaseResponse, String> {
    let req = PatchTestCaseRequest {
        name,
        kind,
        content,
    };

    let res = get_client(config, format!("test-cases/{}", test_case), RequestType::PUT)
        .json(&req)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    parse_response(res).await
}

pub async fn delete_test_case(config: &RequestConfig, test_case: i64) -> Result<(), String> {
    let res = get_client(
        config,
        format!("test-cases/{}", test_case),
        RequestType::DELETE,
    )
    .send()
    .await
    .map_err(|e| e.to_string())?;

    parse_empty_response(res).await
}

pub async fn post_generate(
    config: &RequestConfig,
    module: i64,
    request: &GenerateTestCasesRequest,
) -> Result<TestCaseResponse, String> {
    let res = get_client(
        config,
        format!("modules/{}/generate-test-cases", module),
        RequestType::POST,
    )
    .json(request)
    .send()
    .await
    .map_err(|e| e.to_string())?;

    parse_response(res).await
}
