/*
 * SPDX-FileCopyrightText: 2025 TestForge <dev@testforge.dev>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Module::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Module::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Module::ProjectId).big_integer().not_null())
                    .col(ColumnDef::new(Module::Name).string().not_null())
                    .col(ColumnDef::new(Module::Url).string())
                    .col(ColumnDef::new(Module::Description).text())
                    .col(ColumnDef::new(Module::Tags).array(ColumnType::Text))
                    .col(ColumnDef::new(Module::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Module::UpdatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-module-project_id")
                            .from(Module::Table, Module::ProjectId)
                            .to(Project::Table, Project::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Module::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Module {
    Table,
    Id,
    ProjectId,
    Name,
    Url,
    Description,
    Tags,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Project {
    Table,
    Id,
}
