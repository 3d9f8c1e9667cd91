use migration::OnConflict;
use sea_orm::{
    ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryOrder, QuerySelect,
};

use crate::server::model::db::CareEntityModel;

pub struct CareEntityRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CareEntityRepository<'a, C> {
    /// Creates a new instance of [`CareEntityRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Get all entities ordered by name
    pub async fn get_all(&self) -> Result<Vec<CareEntityModel>, DbErr> {
        entity::prelude::CareEntity::find()
            .order_by_asc(entity::care_entity::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<CareEntityModel>, DbErr> {
        entity::prelude::CareEntity::find_by_id(id.to_string())
            .one(self.db)
            .await
    }

    /// Get the codes of all entities, used to extract entity codes from schedule cells
    pub async fn get_codes(&self) -> Result<Vec<String>, DbErr> {
        entity::prelude::CareEntity::find()
            .select_only()
            .column(entity::care_entity::Column::Code)
            .into_tuple::<String>()
            .all(self.db)
            .await
    }

    /// Insert or replace an entity by ID
    pub async fn upsert(&self, entity: CareEntityModel) -> Result<CareEntityModel, DbErr> {
        let id = entity.id.clone();
        let am = entity::care_entity::ActiveModel {
            id: ActiveValue::Set(entity.id),
            name: ActiveValue::Set(entity.name),
            code: ActiveValue::Set(entity.code),
            logo_url: ActiveValue::Set(entity.logo_url),
        };

        entity::prelude::CareEntity::insert(am)
            .on_conflict(
                OnConflict::column(entity::care_entity::Column::Id)
                    .update_columns([
                        entity::care_entity::Column::Name,
                        entity::care_entity::Column::Code,
                        entity::care_entity::Column::LogoUrl,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        self.get_by_id(&id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("entity {}", id)))
    }

    /// Deletes an entity
    ///
    /// Exams and assignments referring to the entity are left untouched.
    pub async fn delete(&self, id: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::CareEntity::delete_by_id(id.to_string())
            .exec(self.db)
            .await
    }
}
