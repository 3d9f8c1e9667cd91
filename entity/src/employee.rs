use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub role_level: String,
    pub active: bool,
    /// Incoming/DAR/CPOE training flags
    #[sea_orm(column_type = "Json")]
    pub training: Json,
    pub hire_date: Option<Date>,
    pub end_date: Option<Date>,
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
