
use std::collections::BTreeMap;

use reposit_test_utils::prelude::*;

use crate::model::protocol::{Modality, SaveExamDto, SectionDto, VariantDto};

fn save_exam(title: &str) -> SaveExamDto {
    SaveExamDto {
        id: None,
        title: title.to_string(),
        slug: None,
        modality: Modality::CT,
        image_url: None,
        enabled_entities: Vec::new(),
        notes: Vec::new(),
        cpt_codes: Vec::new(),
        tags: Vec::new(),
        variants: Vec::new(),
    }
}

fn technique_variant(overrides: &[(&str, &str)]) -> VariantDto {
    VariantDto {
        id: "routine".to_string(),
        name: "Routine / Runoff".to_string(),
        sections: vec![SectionDto {
            id: "technique".to_string(),
            title: "Technique".to_string(),
            content: "IV Contrast: 100mL Omnipaque 350".to_string(),
            overrides: overrides
                .iter()
                .map(|(id, text)| (id.to_string(), text.to_string()))
                .collect::<BTreeMap<_, _>>(),
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
