use sea_orm_migration::prelude::*;

use super::m20251019_000001_create_conductores_table::Conductores;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Listing defaults to newest registrations first
        manager
            .create_index(
                Index::create()
                    .name("idx_conductores_fecha")
                    .table(Conductores::Table)
                    .col((Conductores::FechaRegistro, IndexOrder::Desc))
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_conductores_fecha")
                    .table(Conductores::Table)
                    .to_owned(),
            )
            .await
    }
}
