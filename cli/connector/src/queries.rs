/*
 * SPDX-FileCopyrightText: 2025 TestForge <dev@testforge.dev>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Cached resource access.
//!
//! `QueryClient` is the one place command code talks to: reads go through
//! the query cache, mutations call straight through and invalidate the
//! affected resource. Every operation is at-most-once; a failed attempt is
//! reported and the caller re-issues it.

use crate::cache::{QueryCache, QueryKey, QueryScope};
use crate::modules::{self, ModuleResponse};
use crate::projects::{self, ProjectResponse};
use crate::test_cases::{self, GenerateTestCasesRequest, TestCaseResponse};
use crate::RequestConfig;
use std::time::Duration;

pub const PROJECTS: &str = "projects";
pub const MODULES: &str = "modules";
pub const TEST_CASES: &str = "test-cases";

const STALE_AFTER: Duration = Duration::from_secs(30);

pub struct QueryClient {
    config: RequestConfig,
    cache: QueryCache,
}

impl QueryClient {
    pub fn new(config: RequestConfig) -> Self {
        Self {
            config,
            cache: QueryCache::new(STALE_AFTER),
        }
    }

    fn check_id(id: i64) -> Result<(), String> {
        if id > 0 {
            Ok(())
        } else {
            Err(format!("Invalid identifier: {}", id))
        }
    }

    pub async fn projects(&self) -> Result<Vec<ProjectResponse>, String> {
        let key = QueryKey {
            resource: PROJECTS,
            scope: QueryScope::List(None),
        };

        if let Some(cached) = self.cache.get(&key) {
            return Ok(cached);
        }

        let projects = projects::get(&self.config).await?;
        self.cache.put(key, &projects);

        Ok(projects)
    }

    pub async fn project(&self, id: i64) -> Result<ProjectResponse, String> {
        Self::check_id(id)?;

        let key = QueryKey {
            resource: PROJECTS,
            scope: QueryScope::Item(id),
        };

        if let Some(cached) = self.cache.get(&key) {
            return Ok(cached);
        }

        let project = projects::get_project(&self.config, id).await?;
        self.cache.put(key, &project);

        Ok(project)
    }

    pub async fn create_project(
        &self,
        name: String,
        description: String,
    ) -> Result<ProjectResponse, String> {
        let project = projects::post(&self.config, name, description).await?;
        self.cache.invalidate(PROJECTS);

        Ok(project)
    }

    pub async fn update_project(
        &self,
        id: i64,
        name: Option<String>,
        description: Option<String>,
    ) -> Result<ProjectResponse, String> {
        Self::check_id(id)?;

        let project = projects::put_project(&self.config, id, name, description).await?;
        self.cache.invalidate(PROJECTS);

        Ok(project)
    }

    pub async fn delete_project(&self, id: i64) -> Result<(), String> {
        Self::check_id(id)?;

        projects::delete_project(&self.config, id).await?;
        self.cache.invalidate(PROJECTS);

        Ok(())
    }

    pub async fn modules(&self, project_id: Option<i64>) -> Result<Vec<ModuleResponse>, String> {
        let key = QueryKey {
            resource: MODULES,
            scope: QueryScope::List(project_id),
        };

        if let Some(cached) = self.cache.get(&key) {
            return Ok(cached);
        }

        let modules = modules::get(&self.config, project_id).await?;
        self.cache.put(key, &modules);

        Ok(modules)
    }

    pub async fn module(&self, id: i64) -> Result<ModuleResponse, String> {
        Self::check_id(id)?;

        let key = QueryKey {
            resource: MODULES,
            scope: QueryScope::Item(id),
        };

        if let Some(cached) = self.cache.get(&key) {
            return Ok(cached);
        }

        let module = modules::get_module(&self.config, id).await?;
        self.cache.put(key, &module);

        Ok(module)
    }

    pub async fn create_module(
        &self,
        project_id: i64,
        name: String,
        url: Option<String>,
        description: Option<String>,
        tags: Option<Vec<String>>,
    ) -> Result<ModuleResponse, String> {
        Self::check_id(project_id)?;

        let module =
            modules::post(&self.config, project_id, name, url, description, tags).await?;
        self.cache.invalidate(MODULES);

        Ok(module)
    }

    pub async fn update_module(
        &self,
        id: i64,
        name: Option<String>,
        url: Option<String>,
        description: Option<String>,
        tags: Option<Vec<String>>,
    ) -> Result<ModuleResponse, String> {
        Self::check_id(id)?;

        let module = modules::put_module(&self.config, id, name, url, description, tags).await?;
        self.cache.invalidate(MODULES);

        Ok(module)
    }

    pub async fn delete_module(&self, id: i64) -> Result<(), String> {
        Self::check_id(id)?;

        modules::delete_module(&self.config, id).await?;
        self.cache.invalidate(MODULES);

        Ok(())
    }

    pub async fn test_cases(&self, module_id: Option<i64>) -> Result<Vec<TestCaseResponse>, String> {
        let key = QueryKey {
            resource: TEST_CASES,
            scope: QueryScope::List(module_id),
        };

        if let Some(cached) = self.cache.get(&key) {
            return Ok(cached);
        }

        let test_cases = test_cases::get(&self.config, module_id).await?;
        self.cache.put(key, &test_cases);

        Ok(test_cases)
    }

    pub async fn test_case(&self, id: i64) -> Result<TestCaseResponse, String> {
        Self::check_id(id)?;

        let key = QueryKey {
            resource: TEST_CASES,
            scope: QueryScope::Item(id),
        };

        if let Some(cached) = self.cache.get(&key) {
            return Ok(cached);
        }

        let test_case = test_cases::get_test_case(&self.config, id).await?;
        self.cache.put(key, &test_case);

        Ok(test_case)
    }

    pub async fn create_test_case(
        &self,
        module_id: i64,
        name: String,
        kind: String,
        content: String,
    ) -> Result<TestCaseResponse, String> {
        Self::check_id(module_id)?;

        let test_case = test_cases::post(&self.config, module_id, name, kind, content).await?;
        self.cache.invalidate(TEST_CASES);

        Ok(test_case)
    }

    pub async fn update_test_case(
        &self,
        id: i64,
        name: Option<String>,
        kind: Option<String>,
        content: Option<String>,
    ) -> Result<TestCaseResponse, String> {
        Self::check_id(id)?;

        let test_case = test_cases::put_test_case(&self.config, id, name, kind, content).await?;
        self.cache.invalidate(TEST_CASES);

        Ok(test_case)
    }

    pub async fn delete_test_case(&self, id: i64) -> Result<(), String> {
        Self::check_id(id)?;

        test_cases::delete_test_case(&self.config, id).await?;
        self.cache.invalidate(TEST_CASES);

        Ok(())
    }

    pub async fn generate_test_cases(
        &self,
        module_id: i64,
        request: &GenerateTestCasesRequest,
    ) -> Result<TestCaseResponse, String> {
        Self::check_id(module_id)?;

        let test_case = test_cases::post_generate(&self.config, module_id, request).await?;
        self.cache.invalidate(TEST_CASES);

        Ok(test_case)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable_client() -> QueryClient {
        QueryClient::new(RequestConfig {
            server_url: "http://127.0.0.1:1".to_string(),
        })
    }

    #[tokio::test]
    async fn test_get_with_invalid_id_is_rejected_locally() {
        let client = unreachable_client();

        assert!(client.project(0).await.is_err());
        assert!(client.module(-4).await.is_err());
        assert!(client.test_case(0).await.is_err());
    }

    #[tokio::test]
    async fn test_mutation_with_invalid_parent_is_rejected_locally() {
        let client = unreachable_client();

        let res = client
            .create_module(0, "Payment Gateway".to_string(), None, None, None)
            .await;
        assert_eq!(res.unwrap_err(), "Invalid identifier: 0");
    }
}
