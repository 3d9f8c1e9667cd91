use std::collections::BTreeSet;

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    model::protocol::{
        EntityDto, ExamDto, ExamSummaryDto, Modality, ResolvedExamDto, SaveExamDto, VariantDto,
    },
    server::{
        data::protocol::{entity::CareEntityRepository, exam::ExamRepository},
        error::{content::ContentError, Error},
        model::db::ExamModel,
        service::protocol::{resolve::resolve_exam, visibility::filter_exams},
        util::{
            id::{id_or_new, new_id, slugify},
            json::{decode_or_default, encode},
        },
    },
};

/// Decodes a stored exam row into its document form.
pub fn exam_from_model(model: ExamModel) -> Result<ExamDto, Error> {
    let modality =
        model
            .modality
            .parse::<Modality>()
            .map_err(|_| ContentError::InvalidStoredModality {
                id: model.id.clone(),
                modality: model.modality.clone(),
            })?;

    Ok(ExamDto {
        enabled_entities: decode_or_default(&model.enabled_entities)?,
        notes: decode_or_default(&model.notes)?,
        cpt_codes: decode_or_default(&model.cpt_codes)?,
        tags: decode_or_default(&model.tags)?,
        variants: decode_or_default(&model.variants)?,
        id: model.id,
        title: model.title,
        slug: model.slug,
        modality,
        image_url: model.image_url,
        created_at: model.created_at,
        updated_at: model.updated_at,
        version: model.version,
    })
}

/// Service for exam protocol documents.
///
/// Writes overwrite the whole document; the `version` counter is set on create and kept as
/// is afterwards, it is never compared before an overwrite.
pub struct ExamService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ExamService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Exams visible to the current entity matching the search term, ordered by title.
    pub async fn list(
        &self,
        term: Option<&str>,
        current_entity_id: Option<&str>,
    ) -> Result<Vec<ExamSummaryDto>, Error> {
        let exams = self.get_all().await?;

        Ok(filter_exams(exams, current_entity_id, term))
    }

    /// All exam documents ordered by title, regardless of visibility.
    pub async fn get_all(&self) -> Result<Vec<ExamDto>, Error> {
        let repo = ExamRepository::new(self.db);

        repo.get_all()
            .await?
            .into_iter()
            .map(exam_from_model)
            .collect()
    }

    /// The raw exam document as edited by administrators.
    ///
    /// # Returns
    /// - `Err(ContentError::ExamNotFound)` - No exam with the given ID
    pub async fn get(&self, id: &str) -> Result<ExamDto, Error> {
        let repo = ExamRepository::new(self.db);

        match repo.get_by_id(id).await? {
            Some(model) => exam_from_model(model),
            None => Err(ContentError::ExamNotFound(id.to_string()).into()),
        }
    }

    /// The exam resolved for display at the current entity.
    ///
    /// The detail view is not restricted by the exam's enabled entities.
    pub async fn get_resolved(
        &self,
        id: &str,
        variant_selector: Option<&str>,
        current_entity: Option<&EntityDto>,
    ) -> Result<ResolvedExamDto, Error> {
        let exam = self.get(id).await?;

        Ok(resolve_exam(&exam, variant_selector, current_entity))
    }

    /// Creates an exam with `version` 1.
    ///
    /// An exam with the submitted ID is overwritten, which keeps seeding idempotent.
    pub async fn create(&self, exam: SaveExamDto) -> Result<ExamDto, Error> {
        let now = Utc::now().naive_utc();
        let id = id_or_new(exam.id.as_deref());

        self.store(id, exam, now, 1).await
    }

    /// Overwrites an existing exam, keeping its creation time and version.
    pub async fn update(&self, id: &str, exam: SaveExamDto) -> Result<ExamDto, Error> {
        let existing = self.get(id).await?;

        self.store(id.to_string(), exam, existing.created_at, existing.version)
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        let repo = ExamRepository::new(self.db);

        let result = repo.delete(id).await?;
        if result.rows_affected == 0 {
            return Err(ContentError::ExamNotFound(id.to_string()).into());
        }

        Ok(())
    }

    async fn store(
        &self,
        id: String,
        exam: SaveExamDto,
        created_at: chrono::NaiveDateTime,
        version: i32,
    ) -> Result<ExamDto, Error> {
        let title = exam.title.trim().to_string();
        if title.is_empty() {
            return Err(ContentError::Required { field: "Title" }.into());
        }

        let slug = match exam.slug.as_deref().map(str::trim) {
            Some(slug) if !slug.is_empty() => slug.to_string(),
            _ => slugify(&title),
        };

        let variants = normalize_variants(exam.variants);
        self.check_entities_exist(&exam.enabled_entities, &variants)
            .await?;

        let image_url = exam
            .image_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        let model = ExamModel {
            id,
            title,
            slug,
            modality: exam.modality.as_str().to_string(),
            image_url,
            enabled_entities: encode(&exam.enabled_entities)?,
            notes: encode(&exam.notes)?,
            cpt_codes: encode(&clean_list(exam.cpt_codes))?,
            tags: encode(&clean_list(exam.tags))?,
            variants: encode(&variants)?,
            created_at,
            updated_at: Utc::now().naive_utc(),
            version,
        };

        let repo = ExamRepository::new(self.db);
        let stored = repo.upsert(model).await?;

        exam_from_model(stored)
    }

    /// Rejects enabled entities or override keys naming an entity that does not exist.
    async fn check_entities_exist(
        &self,
        enabled_entities: &[String],
        variants: &[VariantDto],
    ) -> Result<(), Error> {
        let referenced: BTreeSet<&str> = enabled_entities
            .iter()
            .map(String::as_str)
            .chain(
                variants
                    .iter()
                    .flat_map(|variant| variant.sections.iter())
                    .flat_map(|section| section.overrides.keys().map(String::as_str)),
            )
            .collect();

        if referenced.is_empty() {
            return Ok(());
        }

        let repo = CareEntityRepository::new(self.db);
        let known: BTreeSet<String> = repo.get_all().await?.into_iter().map(|e| e.id).collect();

        match referenced.into_iter().find(|id| !known.contains(*id)) {
            Some(unknown) => Err(ContentError::UnknownEntity(unknown.to_string()).into()),
            None => Ok(()),
        }
    }
}

/// Trims entries and drops blank ones.
fn clean_list(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .collect()
}

/// Generates IDs for variants and sections submitted without one.
fn normalize_variants(variants: Vec<VariantDto>) -> Vec<VariantDto> {
    variants
        .into_iter()
        .map(|mut variant| {
            if variant.id.trim().is_empty() {
                variant.id = new_id();
            }
            for section in variant.sections.iter_mut() {
                if section.id.trim().is_empty() {
                    section.id = new_id();
                }
            }
            variant
        })
        .collect()
}

#[cfg(test)]
mod tests;
