/*
 * SPDX-FileCopyrightText: 2025 TestForge <dev@testforge.dev>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod cache;
pub mod modules;
pub mod projects;
pub mod queries;
pub mod test_cases;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct RequestConfig {
    pub server_url: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct HealthResponse {
    pub status: String,
}

pub type RequestType = reqwest::Method;

fn error_from_body(status: reqwest::StatusCode, bytes: &[u8]) -> String {
    match serde_json::from_slice::<ErrorResponse>(bytes) {
        Ok(error_res) => error_res.error,
        Err(_) => format!(
            "Server returned {}: {}",
            status,
            String::from_utf8_lossy(bytes)
        ),
    }
}

async fn parse_response<T: DeserializeOwned>(res: reqwest::Response) -> Result<T, String> {
    let status = res.status();
    let bytes = res
        .bytes()
        .await
        .map_err(|e| format!("Failed to read response body: {}", e))?;

    if !status.is_success() {
        return Err(error_from_body(status, &bytes));
    }

    serde_json::from_slice::<T>(&bytes).map_err(|e| format!("Unexpected response body: {}", e))
}

async fn parse_empty_response(res: reqwest::Response) -> Result<(), String> {
    let status = res.status();

    if status.is_success() {
        return Ok(());
    }

    let bytes = res
        .bytes()
        .await
        .map_err(|e| format!("Failed to read response body: {}", e))?;

    Err(error_from_body(status, &bytes))
}

// TODO: Better error handling for "connection refused"
fn get_client(
    config: &RequestConfig,
    endpoint: String,
    request_type: RequestType,
) -> reqwest::RequestBuilder {
    reqwest::Client::new()
        .request(request_type, format!("{}/{}", config.server_url, endpoint))
        .header("Content-Type", "application/json")
}

pub async fn health(config: &RequestConfig) -> Result<HealthResponse, String> {
    let res = get_client(config, "health".to_string(), RequestType::GET)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    parse_response(res).await
}
