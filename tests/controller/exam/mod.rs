//! Tests for the exam listing, resolution and editing endpoints.

mod edit;
mod get;
mod list;

use std::collections::BTreeMap;

use super::*;
use reposit::model::protocol::{Modality, SaveExamDto, SectionDto, VariantDto};

/// Exam with one "routine" variant whose technique section is overridden for `thp`
fn save_exam(id: &str, title: &str, enabled_entities: &[&str]) -> SaveExamDto {
    SaveExamDto {
        id: Some(id.to_string()),
        title: title.to_string(),
        slug: None,
        modality: Modality::CT,
        image_url: None,
        enabled_entities: enabled_entities.iter().map(|id| id.to_string()).collect(),
        notes: Vec::new(),
        cpt_codes: vec!["74174".to_string()],
        tags: vec!["abdomen".to_string()],
        variants: vec![VariantDto {
            id: "routine".to_string(),
            name: "Routine".to_string(),
            sections: vec![SectionDto {
                id: "technique".to_string(),
                title: "Technique".to_string(),
                content: "Default technique".to_string(),
                overrides: BTreeMap::from([("thp".to_string(), "Plano technique".to_string())]),
            }],
        }],
    }
}

async fn setup() -> Result<TestSetup, TestError> {
    TestBuilder::new()
        .with_protocol_tables()
        .with_entity("thp", "Texas Health Plano", "THP")
        .with_entity("thr", "Texas Health Rockwall", "THR")
        .build()
        .await
}
