/*
 * SPDX-FileCopyrightText: 2025 TestForge <dev@testforge.dev>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Navigation scope.
//!
//! The CLI keeps the same tree-shaped navigation the dashboard has: project
//! list, the modules of one project, one module in detail. Each state
//! carries exactly the ids it needs; selecting a module without a project
//! scope is rejected before anything touches the network.

use crate::config::{set_get_value, ConfigKey};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    Projects,
    Modules { project: i64 },
    ModuleDetail { project: i64, module: i64 },
}

impl Scope {
    pub fn select_project(self, project: i64) -> Scope {
        Scope::Modules { project }
    }

    pub fn select_module(self, module: i64) -> Result<Scope, String> {
        match self {
            Scope::Modules { project } | Scope::ModuleDetail { project, .. } => {
                Ok(Scope::ModuleDetail { project, module })
            }
            Scope::Projects => Err(
                "No project selected. Use `testforge project select <id>` first.".to_string(),
            ),
        }
    }

    pub fn back(self) -> Scope {
        match self {
            Scope::Projects => Scope::Projects,
            Scope::Modules { .. } => Scope::Projects,
            Scope::ModuleDetail { project, .. } => Scope::Modules { project },
        }
    }

    pub fn project(self) -> Option<i64> {
        match self {
            Scope::Projects => None,
            Scope::Modules { project } | Scope::ModuleDetail { project, .. } => Some(project),
        }
    }

    pub fn module(self) -> Option<i64> {
        match self {
            Scope::ModuleDetail { module, .. } => Some(module),
            _ => None,
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Scope::Projects => write!(f, "projects"),
            Scope::Modules { project } => write!(f, "modules/{}", project),
            Scope::ModuleDetail { project, module } => {
                write!(f, "module/{}/{}", project, module)
            }
        }
    }
}

impl FromStr for Scope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('/').collect();

        match parts.as_slice() {
            ["projects"] => Ok(Scope::Projects),
            ["modules", project] => {
                let project = project
                    .parse()
                    .map_err(|_| format!("Invalid scope: {}", s))?;
                Ok(Scope::Modules { project })
            }
            ["module", project, module] => {
                let project = project
                    .parse()
                    .map_err(|_| format!("Invalid scope: {}", s))?;
                let module = module
                    .parse()
                    .map_err(|_| format!("Invalid scope: {}", s))?;
                Ok(Scope::ModuleDetail { project, module })
            }
            _ => Err(format!("Invalid scope: {}", s)),
        }
    }
}

pub fn load_scope() -> Scope {
    match set_get_value(ConfigKey::Scope, None, true) {
        Some(value) => Scope::from_str(&value).unwrap_or(Scope::Projects),
        None => Scope::Projects,
    }
}

pub fn save_scope(scope: Scope) {
    set_get_value(ConfigKey::Scope, Some(scope.to_string()), true);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_project_from_anywhere() {
        assert_eq!(
            Scope::Projects.select_project(3),
            Scope::Modules { project: 3 }
        );
        assert_eq!(
            Scope::ModuleDetail {
                project: 1,
                module: 2
            }
            .select_project(3),
            Scope::Modules { project: 3 }
        );
    }

    #[test]
    fn test_select_module_requires_project_scope() {
        assert!(Scope::Projects.select_module(7).is_err());

        assert_eq!(
            Scope::Modules { project: 3 }.select_module(7).unwrap(),
            Scope::ModuleDetail {
                project: 3,
                module: 7
            }
        );

        assert_eq!(
            Scope::ModuleDetail {
                project: 3,
                module: 7
            }
            .select_module(8)
            .unwrap(),
            Scope::ModuleDetail {
                project: 3,
                module: 8
            }
        );
    }

    #[test]
    fn test_back_pops_one_level() {
        let detail = Scope::ModuleDetail {
            project: 3,
            module: 7,
        };

        assert_eq!(detail.back(), Scope::Modules { project: 3 });
        assert_eq!(detail.back().back(), Scope::Projects);
        assert_eq!(Scope::Projects.back(), Scope::Projects);
    }

    #[test]
    fn test_scope_string_roundtrip() {
        for scope in [
            Scope::Projects,
            Scope::Modules { project: 3 },
            Scope::ModuleDetail {
                project: 3,
                module: 7,
            },
        ] {
            assert_eq!(Scope::from_str(&scope.to_string()).unwrap(), scope);
        }

        assert!(Scope::from_str("module/3").is_err());
        assert!(Scope::from_str("modules/abc").is_err());
        assert!(Scope::from_str("").is_err());
    }
}
