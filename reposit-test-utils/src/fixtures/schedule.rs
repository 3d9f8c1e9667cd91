use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{
    error::TestError,
    fixtures::factory,
    model::{AssignmentModel, EmployeeModel, ScheduleCycleModel, TimeOffModel},
    TestSetup,
};

impl TestSetup {
    pub fn schedule<'a>(&'a mut self) -> ScheduleFixtures<'a> {
        ScheduleFixtures { setup: self }
    }
}

pub struct ScheduleFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> ScheduleFixtures<'a> {
    pub async fn insert_employee(&self, id: &str, name: &str) -> Result<EmployeeModel, TestError> {
        let model = factory::mock_employee_model(id, name);

        Ok(entity::employee::ActiveModel {
            id: ActiveValue::Set(model.id),
            name: ActiveValue::Set(model.name),
            role_level: ActiveValue::Set(model.role_level),
            active: ActiveValue::Set(model.active),
            training: ActiveValue::Set(model.training),
            hire_date: ActiveValue::Set(model.hire_date),
            end_date: ActiveValue::Set(model.end_date),
            notes: ActiveValue::Set(model.notes),
        }
        .insert(&self.setup.state.db)
        .await?)
    }

    pub async fn insert_cycle(
        &self,
        id: &str,
        start_date: NaiveDate,
        status: &str,
    ) -> Result<ScheduleCycleModel, TestError> {
        let model = factory::mock_cycle_model(id, start_date, status);

        Ok(entity::schedule_cycle::ActiveModel {
            id: ActiveValue::Set(model.id),
            title: ActiveValue::Set(model.title),
            start_date: ActiveValue::Set(model.start_date),
            end_date: ActiveValue::Set(model.end_date),
            effective_date: ActiveValue::Set(model.effective_date),
            status: ActiveValue::Set(model.status),
            notes: ActiveValue::Set(model.notes),
            column_config: ActiveValue::Set(model.column_config),
        }
        .insert(&self.setup.state.db)
        .await?)
    }

    pub async fn insert_assignment(
        &self,
        id: &str,
        cycle_id: &str,
        employee_id: &str,
        column_key: &str,
        value_text: &str,
    ) -> Result<AssignmentModel, TestError> {
        let model =
            factory::mock_assignment_model(id, cycle_id, employee_id, column_key, value_text);

        Ok(entity::assignment::ActiveModel {
            id: ActiveValue::Set(model.id),
            schedule_cycle_id: ActiveValue::Set(model.schedule_cycle_id),
            employee_id: ActiveValue::Set(model.employee_id),
            column_key: ActiveValue::Set(model.column_key),
            value_type: ActiveValue::Set(model.value_type),
            value_text: ActiveValue::Set(model.value_text),
            entity_codes: ActiveValue::Set(model.entity_codes),
        }
        .insert(&self.setup.state.db)
        .await?)
    }

    pub async fn insert_time_off(
        &self,
        id: &str,
        employee_id: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<TimeOffModel, TestError> {
        let model = factory::mock_time_off_model(id, employee_id, start_date, end_date);

        Ok(entity::time_off::ActiveModel {
            id: ActiveValue::Set(model.id),
            employee_id: ActiveValue::Set(model.employee_id),
            start_date: ActiveValue::Set(model.start_date),
            end_date: ActiveValue::Set(model.end_date),
            kind: ActiveValue::Set(model.kind),
            note: ActiveValue::Set(model.note),
        }
        .insert(&self.setup.state.db)
        .await?)
    }
}
