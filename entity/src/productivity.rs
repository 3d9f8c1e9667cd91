use sea_orm::entity::prelude::*;

/// Per-entity workload counts recorded for a schedule cycle.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "productivity")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub schedule_cycle_id: String,
    pub entity_code: String,
    pub dar_count: i32,
    pub incoming_count: i32,
    pub cpoe_count: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
