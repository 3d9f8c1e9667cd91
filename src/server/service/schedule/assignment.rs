use sea_orm::DatabaseConnection;

use crate::{
    model::schedule::{AssignmentDto, AssignmentHistoryDto, AssignmentValueType, SaveAssignmentDto},
    server::{
        data::{
            protocol::entity::CareEntityRepository,
            schedule::{
                assignment::AssignmentRepository, cycle::ScheduleCycleRepository,
                employee::EmployeeRepository,
            },
        },
        error::{schedule::ScheduleError, Error},
        model::db::AssignmentModel,
        service::schedule::{
            classify::{classify, extract_entity_codes},
            cycle::cycle_from_model,
            grid::build_history,
        },
        util::{
            id::new_id,
            json::{decode_or_default, encode},
        },
    },
};

pub fn assignment_from_model(model: AssignmentModel) -> Result<AssignmentDto, Error> {
    let value_type = model
        .value_type
        .parse::<AssignmentValueType>()
        .map_err(|_| ScheduleError::InvalidStoredValue {
            kind: "assignment value type",
            value: model.value_type.clone(),
        })?;

    Ok(AssignmentDto {
        entity_codes: decode_or_default(&model.entity_codes)?,
        id: model.id,
        schedule_cycle_id: model.schedule_cycle_id,
        employee_id: model.employee_id,
        column_key: model.column_key,
        value_type,
        value_text: model.value_text,
    })
}

/// Service for schedule grid cells.
pub struct AssignmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AssignmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Assignments of every cycle, or only of `cycle_id` when given
    pub async fn list(&self, cycle_id: Option<&str>) -> Result<Vec<AssignmentDto>, Error> {
        let repo = AssignmentRepository::new(self.db);

        let models = match cycle_id {
            Some(cycle_id) => repo.get_by_cycle(cycle_id).await?,
            None => repo.get_all().await?,
        };

        models.into_iter().map(assignment_from_model).collect()
    }

    /// Writes the value of a grid cell.
    ///
    /// The cell's existing assignment is overwritten in place, otherwise a new one is created.
    /// The value type is classified from the text and the entity codes are the known entity
    /// codes the text mentions; neither is taken from the caller.
    ///
    /// # Returns
    /// - `Err(ScheduleError::CycleNotFound)` - The cycle does not exist
    /// - `Err(ScheduleError::ColumnNotFound)` - The cycle has no column with the key
    /// - `Err(ScheduleError::EmployeeNotFound)` - The employee does not exist
    pub async fn save(&self, assignment: SaveAssignmentDto) -> Result<AssignmentDto, Error> {
        let cycle_repo = ScheduleCycleRepository::new(self.db);
        let cycle = match cycle_repo.get_by_id(&assignment.schedule_cycle_id).await? {
            Some(model) => cycle_from_model(model)?,
            None => {
                return Err(ScheduleError::CycleNotFound(assignment.schedule_cycle_id).into())
            }
        };

        if !cycle
            .column_config
            .iter()
            .any(|column| column.key == assignment.column_key)
        {
            return Err(ScheduleError::ColumnNotFound {
                cycle_id: cycle.id,
                key: assignment.column_key,
            }
            .into());
        }

        let employee_repo = EmployeeRepository::new(self.db);
        if employee_repo.get_by_id(&assignment.employee_id).await?.is_none() {
            return Err(ScheduleError::EmployeeNotFound(assignment.employee_id).into());
        }

        let known_codes = CareEntityRepository::new(self.db).get_codes().await?;
        let value_type = classify(&assignment.value_text);
        let entity_codes = extract_entity_codes(&assignment.value_text, &known_codes);

        let repo = AssignmentRepository::new(self.db);
        let model = repo
            .upsert(AssignmentModel {
                id: new_id(),
                schedule_cycle_id: assignment.schedule_cycle_id,
                employee_id: assignment.employee_id,
                column_key: assignment.column_key,
                value_type: value_type.as_str().to_string(),
                value_text: assignment.value_text,
                entity_codes: encode(&entity_codes)?,
            })
            .await?;

        assignment_from_model(model)
    }

    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        let repo = AssignmentRepository::new(self.db);

        let result = repo.delete(id).await?;
        if result.rows_affected == 0 {
            return Err(ScheduleError::AssignmentNotFound(id.to_string()).into());
        }

        Ok(())
    }

    /// Entity coverage history across every cycle
    pub async fn history(&self) -> Result<AssignmentHistoryDto, Error> {
        let assignments = self.list(None).await?;

        Ok(build_history(&assignments))
    }
}

#[cfg(test)]
mod tests;
