use migration::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryOrder};

use crate::server::model::db::ExamModel;

pub struct ExamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ExamRepository<'a, C> {
    /// Creates a new instance of [`ExamRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Get all exams ordered by title
    pub async fn get_all(&self) -> Result<Vec<ExamModel>, DbErr> {
        entity::prelude::Exam::find()
            .order_by_asc(entity::exam::Column::Title)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<ExamModel>, DbErr> {
        entity::prelude::Exam::find_by_id(id.to_string())
            .one(self.db)
            .await
    }

    /// Insert or overwrite an exam document by ID
    ///
    /// `created_at` is kept from the existing row on conflict.
    pub async fn upsert(&self, exam: ExamModel) -> Result<ExamModel, DbErr> {
        let id = exam.id.clone();
        let am = entity::exam::ActiveModel {
            id: ActiveValue::Set(exam.id),
            title: ActiveValue::Set(exam.title),
            slug: ActiveValue::Set(exam.slug),
            modality: ActiveValue::Set(exam.modality),
            image_url: ActiveValue::Set(exam.image_url),
            enabled_entities: ActiveValue::Set(exam.enabled_entities),
            notes: ActiveValue::Set(exam.notes),
            cpt_codes: ActiveValue::Set(exam.cpt_codes),
            tags: ActiveValue::Set(exam.tags),
            variants: ActiveValue::Set(exam.variants),
            created_at: ActiveValue::Set(exam.created_at),
            updated_at: ActiveValue::Set(exam.updated_at),
            version: ActiveValue::Set(exam.version),
        };

        entity::prelude::Exam::insert(am)
            .on_conflict(
                OnConflict::column(entity::exam::Column::Id)
                    .update_columns([
                        entity::exam::Column::Title,
                        entity::exam::Column::Slug,
                        entity::exam::Column::Modality,
                        entity::exam::Column::ImageUrl,
                        entity::exam::Column::EnabledEntities,
                        entity::exam::Column::Notes,
                        entity::exam::Column::CptCodes,
                        entity::exam::Column::Tags,
                        entity::exam::Column::Variants,
                        entity::exam::Column::UpdatedAt,
                        entity::exam::Column::Version,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        self.get_by_id(&id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("exam {}", id)))
    }

    pub async fn delete(&self, id: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::Exam::delete_by_id(id.to_string())
            .exec(self.db)
            .await
    }
}
