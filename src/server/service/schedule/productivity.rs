use sea_orm::DatabaseConnection;

use crate::{
    model::schedule::{ProductivityDto, SaveProductivityDto},
    server::{
        data::schedule::{cycle::ScheduleCycleRepository, productivity::ProductivityRepository},
        error::{schedule::ScheduleError, Error},
        model::db::ProductivityModel,
        util::id::id_or_new,
    },
};

pub fn productivity_from_model(model: ProductivityModel) -> ProductivityDto {
    ProductivityDto {
        id: model.id,
        schedule_cycle_id: model.schedule_cycle_id,
        entity_code: model.entity_code,
        dar_count: model.dar_count,
        incoming_count: model.incoming_count,
        cpoe_count: model.cpoe_count,
    }
}

/// Service for per-entity workload counts of a cycle.
pub struct ProductivityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductivityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Entries of every cycle, or only of `cycle_id` when given
    pub async fn list(&self, cycle_id: Option<&str>) -> Result<Vec<ProductivityDto>, Error> {
        let repo = ProductivityRepository::new(self.db);

        Ok(repo
            .get_all()
            .await?
            .into_iter()
            .filter(|entry| cycle_id.is_none_or(|id| entry.schedule_cycle_id == id))
            .map(productivity_from_model)
            .collect())
    }

    pub async fn create(&self, entry: SaveProductivityDto) -> Result<ProductivityDto, Error> {
        let id = id_or_new(entry.id.as_deref());

        self.store(id, entry).await
    }

    pub async fn update(
        &self,
        id: &str,
        entry: SaveProductivityDto,
    ) -> Result<ProductivityDto, Error> {
        let repo = ProductivityRepository::new(self.db);
        if repo.get_by_id(id).await?.is_none() {
            return Err(ScheduleError::ProductivityNotFound(id.to_string()).into());
        }

        self.store(id.to_string(), entry).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        let repo = ProductivityRepository::new(self.db);

        let result = repo.delete(id).await?;
        if result.rows_affected == 0 {
            return Err(ScheduleError::ProductivityNotFound(id.to_string()).into());
        }

        Ok(())
    }

    async fn store(
        &self,
        id: String,
        entry: SaveProductivityDto,
    ) -> Result<ProductivityDto, Error> {
        let entity_code = entry.entity_code.trim().to_uppercase();
        if entity_code.is_empty() {
            return Err(ScheduleError::Required {
                field: "Entity code",
            }
            .into());
        }

        let cycle_repo = ScheduleCycleRepository::new(self.db);
        if cycle_repo.get_by_id(&entry.schedule_cycle_id).await?.is_none() {
            return Err(ScheduleError::CycleNotFound(entry.schedule_cycle_id).into());
        }

        let repo = ProductivityRepository::new(self.db);
        let model = repo
            .upsert(ProductivityModel {
                id,
                schedule_cycle_id: entry.schedule_cycle_id,
                entity_code,
                dar_count: entry.dar_count,
                incoming_count: entry.incoming_count,
                cpoe_count: entry.cpoe_count,
            })
            .await?;

        Ok(productivity_from_model(model))
    }
}
