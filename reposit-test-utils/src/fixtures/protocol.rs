use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{
    error::TestError,
    fixtures::factory,
    model::{CareEntityModel, ExamModel},
    TestSetup,
};

impl TestSetup {
    pub fn protocol<'a>(&'a mut self) -> ProtocolFixtures<'a> {
        ProtocolFixtures { setup: self }
    }
}

pub struct ProtocolFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> ProtocolFixtures<'a> {
    pub async fn insert_entity(
        &self,
        id: &str,
        name: &str,
        code: &str,
    ) -> Result<CareEntityModel, TestError> {
        let model = factory::mock_entity_model(id, name, code);

        Ok(entity::care_entity::ActiveModel {
            id: ActiveValue::Set(model.id),
            name: ActiveValue::Set(model.name),
            code: ActiveValue::Set(model.code),
            logo_url: ActiveValue::Set(model.logo_url),
        }
        .insert(&self.setup.state.db)
        .await?)
    }

    pub async fn insert_exam(
        &self,
        id: &str,
        title: &str,
        modality: &str,
    ) -> Result<ExamModel, TestError> {
        self.insert_exam_model(factory::mock_exam_model(id, title, modality))
            .await
    }

    /// Insert an exam with a custom document, e.g. variants built with `serde_json::json!`
    pub async fn insert_exam_model(&self, model: ExamModel) -> Result<ExamModel, TestError> {
        Ok(entity::exam::ActiveModel {
            id: ActiveValue::Set(model.id),
            title: ActiveValue::Set(model.title),
            slug: ActiveValue::Set(model.slug),
            modality: ActiveValue::Set(model.modality),
            image_url: ActiveValue::Set(model.image_url),
            enabled_entities: ActiveValue::Set(model.enabled_entities),
            notes: ActiveValue::Set(model.notes),
            cpt_codes: ActiveValue::Set(model.cpt_codes),
            tags: ActiveValue::Set(model.tags),
            variants: ActiveValue::Set(model.variants),
            created_at: ActiveValue::Set(model.created_at),
            updated_at: ActiveValue::Set(model.updated_at),
            version: ActiveValue::Set(model.version),
        }
        .insert(&self.setup.state.db)
        .await?)
    }
}
