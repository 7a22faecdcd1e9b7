use sea_orm::entity::prelude::*;

/// A registered driver, stored in the `conductores` table.
///
/// Column names keep the Spanish schema of existing deployments.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "conductores")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "nombre")]
    pub first_name: String,
    #[sea_orm(column_name = "apellido")]
    pub last_name: String,
    #[sea_orm(column_name = "licencia", unique)]
    pub license: String,
    #[sea_orm(column_name = "telefono")]
    pub phone: String,
    #[sea_orm(column_name = "fecha_registro")]
    pub registered_on: Date,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
