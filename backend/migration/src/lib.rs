/*
 * SPDX-FileCopyrightText: 2025 TestForge <dev@testforge.dev>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub use sea_orm_migration::prelude::*;

mod m20250821_000100_create_table_project;
mod m20250821_000200_create_table_module;
mod m20250821_000300_create_table_test_case;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250821_000100_create_table_project::Migration),
            Box::new(m20250821_000200_create_table_module::Migration),
            Box::new(m20250821_000300_create_table_test_case::Migration),
        ]
    }
}
