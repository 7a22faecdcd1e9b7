use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Conductores::Table)
                    .if_not_exists()
                    .col(pk_auto(Conductores::Id))
                    .col(string_len(Conductores::Nombre, 50))
                    .col(string_len(Conductores::Apellido, 50))
                    .col(string_len_uniq(Conductores::Licencia, 20))
                    .col(string_len(Conductores::Telefono, 15))
                    .col(date(Conductores::FechaRegistro).default(Expr::current_date()))
                    .col(
                        timestamp_with_time_zone(Conductores::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Conductores::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Conductores::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Conductores {
    Table,
    Id,
    Nombre,
    Apellido,
    Licencia,
    Telefono,
    FechaRegistro,
    CreatedAt,
    UpdatedAt,
}
