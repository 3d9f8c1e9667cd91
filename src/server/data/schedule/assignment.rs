use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::db::AssignmentModel;

pub struct AssignmentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AssignmentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<AssignmentModel>, DbErr> {
        entity::prelude::Assignment::find()
            .order_by_asc(entity::assignment::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_cycle(&self, cycle_id: &str) -> Result<Vec<AssignmentModel>, DbErr> {
        entity::prelude::Assignment::find()
            .filter(entity::assignment::Column::ScheduleCycleId.eq(cycle_id))
            .order_by_asc(entity::assignment::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<AssignmentModel>, DbErr> {
        entity::prelude::Assignment::find_by_id(id.to_string())
            .one(self.db)
            .await
    }

    /// Get the assignment of a grid cell
    pub async fn get_by_cell(
        &self,
        cycle_id: &str,
        employee_id: &str,
        column_key: &str,
    ) -> Result<Option<AssignmentModel>, DbErr> {
        entity::prelude::Assignment::find()
            .filter(entity::assignment::Column::ScheduleCycleId.eq(cycle_id))
            .filter(entity::assignment::Column::EmployeeId.eq(employee_id))
            .filter(entity::assignment::Column::ColumnKey.eq(column_key))
            .one(self.db)
            .await
    }

    /// Insert or replace the assignment of a grid cell
    ///
    /// Conflicts on the cell (cycle, employee, column) so the last write wins; an existing
    /// row keeps its ID and takes the new value.
    pub async fn upsert(&self, assignment: AssignmentModel) -> Result<AssignmentModel, DbErr> {
        let cycle_id = assignment.schedule_cycle_id.clone();
        let employee_id = assignment.employee_id.clone();
        let column_key = assignment.column_key.clone();

        entity::prelude::Assignment::insert(Self::active_model(assignment))
            .on_conflict(
                OnConflict::columns([
                    entity::assignment::Column::ScheduleCycleId,
                    entity::assignment::Column::EmployeeId,
                    entity::assignment::Column::ColumnKey,
                ])
                .update_columns([
                    entity::assignment::Column::ValueType,
                    entity::assignment::Column::ValueText,
                    entity::assignment::Column::EntityCodes,
                ])
                .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        self.get_by_cell(&cycle_id, &employee_id, &column_key)
            .await?
            .ok_or_else(|| {
                DbErr::RecordNotFound(format!(
                    "assignment {}/{}/{}",
                    cycle_id, employee_id, column_key
                ))
            })
    }

    /// Insert new assignments
    ///
    /// Pass a transaction as the connection to insert them together with other writes.
    pub async fn insert_many(&self, assignments: Vec<AssignmentModel>) -> Result<(), DbErr> {
        if assignments.is_empty() {
            return Ok(());
        }

        entity::prelude::Assignment::insert_many(assignments.into_iter().map(Self::active_model))
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::Assignment::delete_by_id(id.to_string())
            .exec(self.db)
            .await
    }

    fn active_model(assignment: AssignmentModel) -> entity::assignment::ActiveModel {
        entity::assignment::ActiveModel {
            id: ActiveValue::Set(assignment.id),
            schedule_cycle_id: ActiveValue::Set(assignment.schedule_cycle_id),
            employee_id: ActiveValue::Set(assignment.employee_id),
            column_key: ActiveValue::Set(assignment.column_key),
            value_type: ActiveValue::Set(assignment.value_type),
            value_text: ActiveValue::Set(assignment.value_text),
            entity_codes: ActiveValue::Set(assignment.entity_codes),
        }
    }
}
