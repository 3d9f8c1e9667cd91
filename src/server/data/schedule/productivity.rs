use migration::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryOrder};

use crate::server::model::db::ProductivityModel;

pub struct ProductivityRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProductivityRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<ProductivityModel>, DbErr> {
        entity::prelude::Productivity::find()
            .order_by_asc(entity::productivity::Column::ScheduleCycleId)
            .order_by_asc(entity::productivity::Column::EntityCode)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<ProductivityModel>, DbErr> {
        entity::prelude::Productivity::find_by_id(id.to_string())
            .one(self.db)
            .await
    }

    pub async fn upsert(&self, entry: ProductivityModel) -> Result<ProductivityModel, DbErr> {
        let id = entry.id.clone();
        let am = entity::productivity::ActiveModel {
            id: ActiveValue::Set(entry.id),
            schedule_cycle_id: ActiveValue::Set(entry.schedule_cycle_id),
            entity_code: ActiveValue::Set(entry.entity_code),
            dar_count: ActiveValue::Set(entry.dar_count),
            incoming_count: ActiveValue::Set(entry.incoming_count),
            cpoe_count: ActiveValue::Set(entry.cpoe_count),
        };

        entity::prelude::Productivity::insert(am)
            .on_conflict(
                OnConflict::column(entity::productivity::Column::Id)
                    .update_columns([
                        entity::productivity::Column::ScheduleCycleId,
                        entity::productivity::Column::EntityCode,
                        entity::productivity::Column::DarCount,
                        entity::productivity::Column::IncomingCount,
                        entity::productivity::Column::CpoeCount,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        self.get_by_id(&id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("productivity {}", id)))
    }

    pub async fn delete(&self, id: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::Productivity::delete_by_id(id.to_string())
            .exec(self.db)
            .await
    }
}
