use sea_orm::entity::prelude::*;

/// One schedule grid cell, unique per (cycle, employee, column).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "assignments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub schedule_cycle_id: String,
    pub employee_id: String,
    pub column_key: String,
    pub value_type: String,
    pub value_text: String,
    #[sea_orm(column_type = "Json")]
    pub entity_codes: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
