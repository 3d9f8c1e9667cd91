use sea_orm::entity::prelude::*;

/// A dated staffing period with its ordered grid column configuration.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "schedule_cycles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    pub start_date: Date,
    pub end_date: Date,
    pub effective_date: Date,
    pub status: String,
    pub notes: Option<String>,
    #[sea_orm(column_type = "Json")]
    pub column_config: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
