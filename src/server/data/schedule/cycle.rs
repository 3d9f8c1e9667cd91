use migration::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryOrder};

use crate::server::model::db::ScheduleCycleModel;

pub struct ScheduleCycleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ScheduleCycleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Get all cycles ordered by start date
    pub async fn get_all(&self) -> Result<Vec<ScheduleCycleModel>, DbErr> {
        entity::prelude::ScheduleCycle::find()
            .order_by_asc(entity::schedule_cycle::Column::StartDate)
            .order_by_asc(entity::schedule_cycle::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<ScheduleCycleModel>, DbErr> {
        entity::prelude::ScheduleCycle::find_by_id(id.to_string())
            .one(self.db)
            .await
    }

    pub async fn upsert(&self, cycle: ScheduleCycleModel) -> Result<ScheduleCycleModel, DbErr> {
        let id = cycle.id.clone();
        let am = entity::schedule_cycle::ActiveModel {
            id: ActiveValue::Set(cycle.id),
            title: ActiveValue::Set(cycle.title),
            start_date: ActiveValue::Set(cycle.start_date),
            end_date: ActiveValue::Set(cycle.end_date),
            effective_date: ActiveValue::Set(cycle.effective_date),
            status: ActiveValue::Set(cycle.status),
            notes: ActiveValue::Set(cycle.notes),
            column_config: ActiveValue::Set(cycle.column_config),
        };

        entity::prelude::ScheduleCycle::insert(am)
            .on_conflict(
                OnConflict::column(entity::schedule_cycle::Column::Id)
                    .update_columns([
                        entity::schedule_cycle::Column::Title,
                        entity::schedule_cycle::Column::StartDate,
                        entity::schedule_cycle::Column::EndDate,
                        entity::schedule_cycle::Column::EffectiveDate,
                        entity::schedule_cycle::Column::Status,
                        entity::schedule_cycle::Column::Notes,
                        entity::schedule_cycle::Column::ColumnConfig,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        self.get_by_id(&id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("schedule cycle {}", id)))
    }

    /// Deletes a cycle, its assignments and productivity entries are kept
    pub async fn delete(&self, id: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::ScheduleCycle::delete_by_id(id.to_string())
            .exec(self.db)
            .await
    }
}
