use sea_orm::DatabaseConnection;

use crate::{
    model::schedule::{SaveTimeOffDto, TimeOffDto},
    server::{
        data::schedule::{employee::EmployeeRepository, time_off::TimeOffRepository},
        error::{schedule::ScheduleError, Error},
        model::db::TimeOffModel,
        util::id::id_or_new,
    },
};

pub fn time_off_from_model(model: TimeOffModel) -> TimeOffDto {
    TimeOffDto {
        id: model.id,
        employee_id: model.employee_id,
        start_date: model.start_date,
        end_date: model.end_date,
        kind: model.kind,
        note: model.note,
    }
}

pub struct TimeOffService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TimeOffService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// All time off ordered by start date
    pub async fn list(&self) -> Result<Vec<TimeOffDto>, Error> {
        let repo = TimeOffRepository::new(self.db);

        Ok(repo
            .get_all()
            .await?
            .into_iter()
            .map(time_off_from_model)
            .collect())
    }

    pub async fn create(&self, time_off: SaveTimeOffDto) -> Result<TimeOffDto, Error> {
        let id = id_or_new(time_off.id.as_deref());

        self.store(id, time_off).await
    }

    pub async fn update(&self, id: &str, time_off: SaveTimeOffDto) -> Result<TimeOffDto, Error> {
        let repo = TimeOffRepository::new(self.db);
        if repo.get_by_id(id).await?.is_none() {
            return Err(ScheduleError::TimeOffNotFound(id.to_string()).into());
        }

        self.store(id.to_string(), time_off).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        let repo = TimeOffRepository::new(self.db);

        let result = repo.delete(id).await?;
        if result.rows_affected == 0 {
            return Err(ScheduleError::TimeOffNotFound(id.to_string()).into());
        }

        Ok(())
    }

    /// Validates and writes an entry.
    ///
    /// # Returns
    /// - `Err(ScheduleError::InvalidDateRange)` - The entry ends before it starts
    /// - `Err(ScheduleError::EmployeeNotFound)` - The employee does not exist
    async fn store(&self, id: String, time_off: SaveTimeOffDto) -> Result<TimeOffDto, Error> {
        if time_off.start_date > time_off.end_date {
            return Err(ScheduleError::InvalidDateRange {
                start: time_off.start_date.to_string(),
                end: time_off.end_date.to_string(),
            }
            .into());
        }

        let kind = time_off.kind.trim().to_string();
        if kind.is_empty() {
            return Err(ScheduleError::Required { field: "Type" }.into());
        }

        let employee_repo = EmployeeRepository::new(self.db);
        if employee_repo.get_by_id(&time_off.employee_id).await?.is_none() {
            return Err(ScheduleError::EmployeeNotFound(time_off.employee_id).into());
        }

        let repo = TimeOffRepository::new(self.db);
        let model = repo
            .upsert(TimeOffModel {
                id,
                employee_id: time_off.employee_id,
                start_date: time_off.start_date,
                end_date: time_off.end_date,
                kind,
                note: time_off.note.filter(|note| !note.trim().is_empty()),
            })
            .await?;

        Ok(time_off_from_model(model))
    }
}
