
use std::collections::BTreeMap;

use chrono::Utc;

use crate::model::protocol::{EntityDto, ExamDto, Modality, SectionDto, VariantDto};

fn section(content: &str, overrides: &[(&str, &str)]) -> SectionDto {
    SectionDto {
        id: "technique".to_string(),
        title: "Technique".to_string(),
        content: content.to_string(),
        overrides: overrides
            .iter()
            .map(|(id, text)| (id.to_string(), text.to_string()))
            .collect::<BTreeMap<_, _>>(),
    }
}

fn entity(id: &str, name: &str) -> EntityDto {
    EntityDto {
        id: id.to_string(),
        name: name.to_string(),
        code: id.to_uppercase(),
        logo_url: None,
    }
}

fn variant(id: &str, sections: Vec<SectionDto>) -> VariantDto {
    VariantDto {
        id: id.to_string(),
        name: format!("Variant {}", id),
        sections,
    }
}

fn exam(variants: Vec<VariantDto>) -> ExamDto {
    let now = Utc::now().naive_utc();
    ExamDto {
        id: "cta-abdomen".to_string(),
        title: "CTA Abdomen and Pelvis".to_string(),
        slug: "cta-abdomen-pelvis".to_string(),
        modality: Modality::CT,
        image_url: None,
        enabled_entities: Vec::new(),
        notes: Vec::new(),
        cpt_codes: vec!["74174".to_string()],
        tags: vec!["abdomen".to_string()],
        variants,
        created_at: now,
        updated_at: now,
        version: 1,
    }
}
