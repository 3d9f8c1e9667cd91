use migration::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryOrder};

use crate::server::model::db::TimeOffModel;

pub struct TimeOffRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TimeOffRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Get all time off entries ordered by start date
    pub async fn get_all(&self) -> Result<Vec<TimeOffModel>, DbErr> {
        entity::prelude::TimeOff::find()
            .order_by_asc(entity::time_off::Column::StartDate)
            .order_by_asc(entity::time_off::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<TimeOffModel>, DbErr> {
        entity::prelude::TimeOff::find_by_id(id.to_string())
            .one(self.db)
            .await
    }

    pub async fn upsert(&self, time_off: TimeOffModel) -> Result<TimeOffModel, DbErr> {
        let id = time_off.id.clone();
        let am = entity::time_off::ActiveModel {
            id: ActiveValue::Set(time_off.id),
            employee_id: ActiveValue::Set(time_off.employee_id),
            start_date: ActiveValue::Set(time_off.start_date),
            end_date: ActiveValue::Set(time_off.end_date),
            kind: ActiveValue::Set(time_off.kind),
            note: ActiveValue::Set(time_off.note),
        };

        entity::prelude::TimeOff::insert(am)
            .on_conflict(
                OnConflict::column(entity::time_off::Column::Id)
                    .update_columns([
                        entity::time_off::Column::EmployeeId,
                        entity::time_off::Column::StartDate,
                        entity::time_off::Column::EndDate,
                        entity::time_off::Column::Kind,
                        entity::time_off::Column::Note,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        self.get_by_id(&id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("time off {}", id)))
    }

    pub async fn delete(&self, id: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::TimeOff::delete_by_id(id.to_string())
            .exec(self.db)
            .await
    }
}
