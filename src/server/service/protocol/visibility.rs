//! Exam visibility per entity and the staff search.

use crate::model::protocol::{ExamDto, ExamSummaryDto};

/// An exam with no enabled entities is visible everywhere, otherwise only to the listed
/// entities. With no current entity only unrestricted exams are visible.
pub fn is_visible(enabled_entities: &[String], current_entity_id: Option<&str>) -> bool {
    if enabled_entities.is_empty() {
        return true;
    }

    match current_entity_id {
        Some(id) => enabled_entities.iter().any(|enabled| enabled == id),
        None => false,
    }
}

/// Case-insensitive substring match on title, modality, tags and CPT codes.
///
/// A blank search term matches every exam.
pub fn matches_search(exam: &ExamDto, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }

    exam.title.to_lowercase().contains(&term)
        || exam.modality.as_str().to_lowercase().contains(&term)
        || exam.tags.iter().any(|tag| tag.to_lowercase().contains(&term))
        || exam
            .cpt_codes
            .iter()
            .any(|code| code.to_lowercase().contains(&term))
}

/// Applies visibility and search to a list of exams, keeping the input order.
pub fn filter_exams(
    exams: Vec<ExamDto>,
    current_entity_id: Option<&str>,
    term: Option<&str>,
) -> Vec<ExamSummaryDto> {
    exams
        .into_iter()
        .filter(|exam| is_visible(&exam.enabled_entities, current_entity_id))
        .filter(|exam| term.map_or(true, |term| matches_search(exam, term)))
        .map(|exam| ExamSummaryDto {
            id: exam.id,
            title: exam.title,
            slug: exam.slug,
            modality: exam.modality,
            image_url: exam.image_url,
            cpt_codes: exam.cpt_codes,
            tags: exam.tags,
        })
        .collect()
}
