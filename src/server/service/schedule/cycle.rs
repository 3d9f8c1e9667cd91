use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::schedule::{
        CycleStatus, GridFilter, MoveDirection, SaveScheduleCycleDto, ScheduleCycleDto,
        ScheduleGridDto, UpdateColumnDto,
    },
    server::{
        data::schedule::{assignment::AssignmentRepository, cycle::ScheduleCycleRepository},
        error::{schedule::ScheduleError, Error},
        model::db::{AssignmentModel, ScheduleCycleModel},
        service::schedule::{
            assignment::AssignmentService,
            columns::{self, DEFAULT_DAR_COLUMNS, DEFAULT_INCOMING_COLUMNS},
            coverage::coverage_warnings,
            employee::EmployeeService,
            grid::build_grid,
            time_off::TimeOffService,
        },
        util::{
            id::{id_or_new, new_id},
            json::{decode_or_default, encode},
        },
    },
};

pub fn cycle_from_model(model: ScheduleCycleModel) -> Result<ScheduleCycleDto, Error> {
    let status = model
        .status
        .parse::<CycleStatus>()
        .map_err(|_| ScheduleError::InvalidStoredValue {
            kind: "cycle status",
            value: model.status.clone(),
        })?;

    Ok(ScheduleCycleDto {
        column_config: decode_or_default(&model.column_config)?,
        id: model.id,
        title: model.title,
        start_date: model.start_date,
        end_date: model.end_date,
        effective_date: model.effective_date,
        status,
        notes: model.notes,
    })
}

fn cycle_to_model(cycle: &ScheduleCycleDto) -> Result<ScheduleCycleModel, Error> {
    Ok(ScheduleCycleModel {
        id: cycle.id.clone(),
        title: cycle.title.clone(),
        start_date: cycle.start_date,
        end_date: cycle.end_date,
        effective_date: cycle.effective_date,
        status: cycle.status.as_str().to_string(),
        notes: cycle.notes.clone(),
        column_config: encode(&cycle.column_config)?,
    })
}

/// Service for schedule cycles and their grid.
///
/// Status changes between draft and published are unrestricted.
pub struct ScheduleCycleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScheduleCycleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// All cycles ordered by start date
    pub async fn list(&self) -> Result<Vec<ScheduleCycleDto>, Error> {
        let repo = ScheduleCycleRepository::new(self.db);

        repo.get_all()
            .await?
            .into_iter()
            .map(cycle_from_model)
            .collect()
    }

    pub async fn get(&self, id: &str) -> Result<ScheduleCycleDto, Error> {
        let repo = ScheduleCycleRepository::new(self.db);

        match repo.get_by_id(id).await? {
            Some(model) => cycle_from_model(model),
            None => Err(ScheduleError::CycleNotFound(id.to_string()).into()),
        }
    }

    /// The cycle shown by default.
    ///
    /// The published cycle with the latest effective date, or the earliest cycle when none is
    /// published.
    ///
    /// # Returns
    /// - `Err(ScheduleError::NoCycles)` - No cycle exists
    pub async fn active(&self) -> Result<ScheduleCycleDto, Error> {
        let cycles = self.list().await?;

        let published = cycles
            .iter()
            .filter(|cycle| cycle.status == CycleStatus::Published)
            .max_by_key(|cycle| cycle.effective_date)
            .cloned();

        match published.or_else(|| cycles.into_iter().next()) {
            Some(cycle) => Ok(cycle),
            None => Err(ScheduleError::NoCycles.into()),
        }
    }

    pub async fn create(&self, cycle: SaveScheduleCycleDto) -> Result<ScheduleCycleDto, Error> {
        let id = id_or_new(cycle.id.as_deref());

        self.store(id, cycle).await
    }

    pub async fn update(
        &self,
        id: &str,
        cycle: SaveScheduleCycleDto,
    ) -> Result<ScheduleCycleDto, Error> {
        let repo = ScheduleCycleRepository::new(self.db);
        if repo.get_by_id(id).await?.is_none() {
            return Err(ScheduleError::CycleNotFound(id.to_string()).into());
        }

        self.store(id.to_string(), cycle).await
    }

    /// Deletes a cycle, its assignments and productivity entries are kept
    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        let repo = ScheduleCycleRepository::new(self.db);

        let result = repo.delete(id).await?;
        if result.rows_affected == 0 {
            return Err(ScheduleError::CycleNotFound(id.to_string()).into());
        }

        Ok(())
    }

    pub async fn update_column(
        &self,
        id: &str,
        key: &str,
        update: UpdateColumnDto,
    ) -> Result<ScheduleCycleDto, Error> {
        let mut cycle = self.get(id).await?;

        if !columns::update_column(&mut cycle.column_config, key, update) {
            return Err(ScheduleError::ColumnNotFound {
                cycle_id: id.to_string(),
                key: key.to_string(),
            }
            .into());
        }

        self.save_model(&cycle).await
    }

    pub async fn move_column(
        &self,
        id: &str,
        key: &str,
        direction: MoveDirection,
    ) -> Result<ScheduleCycleDto, Error> {
        let mut cycle = self.get(id).await?;

        if !columns::move_column(&mut cycle.column_config, key, direction) {
            return Err(ScheduleError::ColumnNotFound {
                cycle_id: id.to_string(),
                key: key.to_string(),
            }
            .into());
        }

        self.save_model(&cycle).await
    }

    /// Copies a cycle and its assignments as a new draft titled "<title> (Copy)".
    ///
    /// The cycle and the assignments get new IDs and are written in one transaction.
    pub async fn copy(&self, id: &str) -> Result<ScheduleCycleDto, Error> {
        let source = self.get(id).await?;

        let copy = ScheduleCycleDto {
            id: new_id(),
            title: format!("{} (Copy)", source.title),
            status: CycleStatus::Draft,
            ..source
        };

        let assignments: Vec<AssignmentModel> = AssignmentRepository::new(self.db)
            .get_by_cycle(id)
            .await?
            .into_iter()
            .map(|assignment| AssignmentModel {
                id: new_id(),
                schedule_cycle_id: copy.id.clone(),
                ..assignment
            })
            .collect();

        let txn = self.db.begin().await?;

        let model = ScheduleCycleRepository::new(&txn)
            .upsert(cycle_to_model(&copy)?)
            .await?;
        let copied = assignments.len();
        AssignmentRepository::new(&txn)
            .insert_many(assignments)
            .await?;

        txn.commit().await?;

        tracing::debug!(
            "Copied schedule cycle {} to {} with {} assignments",
            id,
            model.id,
            copied
        );

        cycle_from_model(model)
    }

    /// Builds the filtered grid of a cycle with its coverage warnings
    pub async fn grid(&self, id: &str, filter: &GridFilter) -> Result<ScheduleGridDto, Error> {
        let cycle = self.get(id).await?;

        let employees = EmployeeService::new(self.db).list().await?;
        let assignments = AssignmentService::new(self.db).list(Some(id)).await?;
        let time_off = TimeOffService::new(self.db).list().await?;

        Ok(build_grid(cycle, &employees, &assignments, &time_off, filter))
    }

    pub async fn warnings(&self, id: &str) -> Result<Vec<String>, Error> {
        let cycle = self.get(id).await?;
        let assignments = AssignmentService::new(self.db).list(Some(id)).await?;

        Ok(coverage_warnings(&cycle.id, &assignments))
    }

    /// Validates and writes a cycle.
    ///
    /// # Returns
    /// - `Err(ScheduleError::Required)` - The title is blank
    /// - `Err(ScheduleError::InvalidDateRange)` - The cycle ends before it starts
    async fn store(
        &self,
        id: String,
        cycle: SaveScheduleCycleDto,
    ) -> Result<ScheduleCycleDto, Error> {
        let title = cycle.title.trim().to_string();
        if title.is_empty() {
            return Err(ScheduleError::Required { field: "Title" }.into());
        }

        if cycle.start_date > cycle.end_date {
            return Err(ScheduleError::InvalidDateRange {
                start: cycle.start_date.to_string(),
                end: cycle.end_date.to_string(),
            }
            .into());
        }

        let column_config = if cycle.column_config.is_empty() {
            columns::default_columns(DEFAULT_DAR_COLUMNS, DEFAULT_INCOMING_COLUMNS)
        } else {
            cycle.column_config
        };

        self.save_model(&ScheduleCycleDto {
            id,
            title,
            start_date: cycle.start_date,
            end_date: cycle.end_date,
            effective_date: cycle.effective_date,
            status: cycle.status,
            notes: cycle.notes.filter(|notes| !notes.trim().is_empty()),
            column_config,
        })
        .await
    }

    async fn save_model(&self, cycle: &ScheduleCycleDto) -> Result<ScheduleCycleDto, Error> {
        let repo = ScheduleCycleRepository::new(self.db);
        let model = repo.upsert(cycle_to_model(cycle)?).await?;

        cycle_from_model(model)
    }
}

#[cfg(test)]
mod tests;
