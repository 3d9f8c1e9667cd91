use sea_orm::DatabaseConnection;

use crate::{
    model::protocol::{EntityDto, SaveEntityDto},
    server::{
        data::protocol::entity::CareEntityRepository,
        error::{content::ContentError, Error},
        model::db::CareEntityModel,
        util::id::id_or_new,
    },
};

pub fn entity_from_model(model: CareEntityModel) -> EntityDto {
    EntityDto {
        id: model.id,
        name: model.name,
        code: model.code,
        logo_url: model.logo_url,
    }
}

/// Service for care entities and the entity a staff member views the portal as.
pub struct EntityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EntityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// All entities ordered by name
    pub async fn list(&self) -> Result<Vec<EntityDto>, Error> {
        let repo = CareEntityRepository::new(self.db);

        Ok(repo
            .get_all()
            .await?
            .into_iter()
            .map(entity_from_model)
            .collect())
    }

    pub async fn get(&self, id: &str) -> Result<EntityDto, Error> {
        let repo = CareEntityRepository::new(self.db);

        match repo.get_by_id(id).await? {
            Some(model) => Ok(entity_from_model(model)),
            None => Err(ContentError::EntityNotFound(id.to_string()).into()),
        }
    }

    /// Creates an entity, using the submitted ID when one is given.
    pub async fn create(&self, entity: SaveEntityDto) -> Result<EntityDto, Error> {
        let id = id_or_new(entity.id.as_deref());

        self.store(id, entity).await
    }

    /// Replaces an existing entity.
    ///
    /// # Returns
    /// - `Err(ContentError::EntityNotFound)` - No entity with the given ID
    pub async fn update(&self, id: &str, entity: SaveEntityDto) -> Result<EntityDto, Error> {
        let repo = CareEntityRepository::new(self.db);
        if repo.get_by_id(id).await?.is_none() {
            return Err(ContentError::EntityNotFound(id.to_string()).into());
        }

        self.store(id.to_string(), entity).await
    }

    /// Deletes an entity. Exams keep any overrides or enabled entries naming it.
    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        let repo = CareEntityRepository::new(self.db);

        let result = repo.delete(id).await?;
        if result.rows_affected == 0 {
            return Err(ContentError::EntityNotFound(id.to_string()).into());
        }

        Ok(())
    }

    /// Determines the entity content is resolved for.
    ///
    /// An explicitly requested entity must exist. Otherwise the session selection is used
    /// when it still exists, falling back to the first entity by name. Returns `None` only
    /// when there are no entities.
    pub async fn current(
        &self,
        requested: Option<&str>,
        selected: Option<&str>,
    ) -> Result<Option<EntityDto>, Error> {
        let requested = requested.map(str::trim).filter(|id| !id.is_empty());
        if let Some(id) = requested {
            return Ok(Some(self.get(id).await?));
        }

        let repo = CareEntityRepository::new(self.db);
        if let Some(id) = selected {
            if let Some(model) = repo.get_by_id(id).await? {
                return Ok(Some(entity_from_model(model)));
            }
        }

        Ok(repo.get_all().await?.into_iter().next().map(entity_from_model))
    }

    async fn store(&self, id: String, entity: SaveEntityDto) -> Result<EntityDto, Error> {
        let name = entity.name.trim().to_string();
        if name.is_empty() {
            return Err(ContentError::Required { field: "Name" }.into());
        }

        let code = entity.code.trim().to_uppercase();
        if code.is_empty() {
            return Err(ContentError::Required { field: "Code" }.into());
        }

        let logo_url = entity
            .logo_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        let repo = CareEntityRepository::new(self.db);
        let model = repo
            .upsert(CareEntityModel {
                id,
                name,
                code,
                logo_url,
            })
            .await?;

        Ok(entity_from_model(model))
    }
}
