use sea_orm::DatabaseConnection;

use crate::{
    model::schedule::{EmployeeDto, RoleLevel, SaveEmployeeDto},
    server::{
        data::schedule::employee::EmployeeRepository,
        error::{schedule::ScheduleError, Error},
        model::db::EmployeeModel,
        util::{
            id::id_or_new,
            json::{decode_or_default, encode},
        },
    },
};

pub fn employee_from_model(model: EmployeeModel) -> Result<EmployeeDto, Error> {
    let role_level =
        model
            .role_level
            .parse::<RoleLevel>()
            .map_err(|_| ScheduleError::InvalidStoredValue {
                kind: "role level",
                value: model.role_level.clone(),
            })?;

    Ok(EmployeeDto {
        training: decode_or_default(&model.training)?,
        id: model.id,
        name: model.name,
        role_level,
        active: model.active,
        hire_date: model.hire_date,
        end_date: model.end_date,
        notes: model.notes,
    })
}

pub struct EmployeeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EmployeeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// All employees ordered by name, inactive ones included
    pub async fn list(&self) -> Result<Vec<EmployeeDto>, Error> {
        let repo = EmployeeRepository::new(self.db);

        repo.get_all()
            .await?
            .into_iter()
            .map(employee_from_model)
            .collect()
    }

    pub async fn get(&self, id: &str) -> Result<EmployeeDto, Error> {
        let repo = EmployeeRepository::new(self.db);

        match repo.get_by_id(id).await? {
            Some(model) => employee_from_model(model),
            None => Err(ScheduleError::EmployeeNotFound(id.to_string()).into()),
        }
    }

    pub async fn create(&self, employee: SaveEmployeeDto) -> Result<EmployeeDto, Error> {
        let id = id_or_new(employee.id.as_deref());

        self.store(id, employee).await
    }

    /// Replaces an existing employee.
    ///
    /// # Returns
    /// - `Err(ScheduleError::EmployeeNotFound)` - No employee with the given ID
    pub async fn update(&self, id: &str, employee: SaveEmployeeDto) -> Result<EmployeeDto, Error> {
        let repo = EmployeeRepository::new(self.db);
        if repo.get_by_id(id).await?.is_none() {
            return Err(ScheduleError::EmployeeNotFound(id.to_string()).into());
        }

        self.store(id.to_string(), employee).await
    }

    /// Deletes an employee, their assignments and time off are kept.
    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        let repo = EmployeeRepository::new(self.db);

        let result = repo.delete(id).await?;
        if result.rows_affected == 0 {
            return Err(ScheduleError::EmployeeNotFound(id.to_string()).into());
        }

        Ok(())
    }

    async fn store(&self, id: String, employee: SaveEmployeeDto) -> Result<EmployeeDto, Error> {
        let name = employee.name.trim().to_string();
        if name.is_empty() {
            return Err(ScheduleError::Required { field: "Name" }.into());
        }

        let repo = EmployeeRepository::new(self.db);
        let model = repo
            .upsert(EmployeeModel {
                id,
                name,
                role_level: employee.role_level.as_str().to_string(),
                active: employee.active,
                training: encode(&employee.training)?,
                hire_date: employee.hire_date,
                end_date: employee.end_date,
                notes: employee.notes.filter(|notes| !notes.trim().is_empty()),
            })
            .await?;

        employee_from_model(model)
    }
}
