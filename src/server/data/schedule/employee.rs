use migration::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryOrder};

use crate::server::model::db::EmployeeModel;

pub struct EmployeeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EmployeeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Get all employees ordered by name
    pub async fn get_all(&self) -> Result<Vec<EmployeeModel>, DbErr> {
        entity::prelude::Employee::find()
            .order_by_asc(entity::employee::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<EmployeeModel>, DbErr> {
        entity::prelude::Employee::find_by_id(id.to_string())
            .one(self.db)
            .await
    }

    pub async fn upsert(&self, employee: EmployeeModel) -> Result<EmployeeModel, DbErr> {
        let id = employee.id.clone();
        let am = entity::employee::ActiveModel {
            id: ActiveValue::Set(employee.id),
            name: ActiveValue::Set(employee.name),
            role_level: ActiveValue::Set(employee.role_level),
            active: ActiveValue::Set(employee.active),
            training: ActiveValue::Set(employee.training),
            hire_date: ActiveValue::Set(employee.hire_date),
            end_date: ActiveValue::Set(employee.end_date),
            notes: ActiveValue::Set(employee.notes),
        };

        entity::prelude::Employee::insert(am)
            .on_conflict(
                OnConflict::column(entity::employee::Column::Id)
                    .update_columns([
                        entity::employee::Column::Name,
                        entity::employee::Column::RoleLevel,
                        entity::employee::Column::Active,
                        entity::employee::Column::Training,
                        entity::employee::Column::HireDate,
                        entity::employee::Column::EndDate,
                        entity::employee::Column::Notes,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        self.get_by_id(&id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("employee {}", id)))
    }

    /// Deletes an employee, their assignments and time off are kept
    pub async fn delete(&self, id: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::Employee::delete_by_id(id.to_string())
            .exec(self.db)
            .await
    }
}
