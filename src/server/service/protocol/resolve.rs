//! Override resolution of exam sections for the entity a staff member is viewing as.

use crate::model::protocol::{
    EntityDto, ExamDto, ResolvedExamDto, ResolvedSectionDto, SectionDto, VariantDto, VariantTabDto,
};

/// Returns the content to display for a section and whether it is an entity override.
///
/// An override is used when the current entity's ID is a key of the section's override map,
/// even when the override text is empty. Without a current entity the default content is
/// always returned.
pub fn resolve<'a>(section: &'a SectionDto, current_entity_id: Option<&str>) -> (&'a str, bool) {
    match current_entity_id.and_then(|id| section.overrides.get(id)) {
        Some(content) => (content.as_str(), true),
        None => (section.content.as_str(), false),
    }
}

/// Picks the variant to display.
///
/// The selector is matched against variant IDs first, then read as a zero based index.
/// Falls back to the first variant.
pub fn select_variant<'a>(
    variants: &'a [VariantDto],
    selector: Option<&str>,
) -> Option<&'a VariantDto> {
    let by_selector = selector.and_then(|selector| {
        variants
            .iter()
            .find(|variant| variant.id == selector)
            .or_else(|| {
                selector
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| variants.get(index))
            })
    });

    by_selector.or_else(|| variants.first())
}

/// Builds the staff view of an exam for the current entity.
pub fn resolve_exam(
    exam: &ExamDto,
    variant_selector: Option<&str>,
    current_entity: Option<&EntityDto>,
) -> ResolvedExamDto {
    let current_entity_id = current_entity.map(|entity| entity.id.as_str());
    let active_variant = select_variant(&exam.variants, variant_selector);

    let sections = active_variant
        .map(|variant| {
            variant
                .sections
                .iter()
                .map(|section| {
                    let (content, is_overridden) = resolve(section, current_entity_id);

                    ResolvedSectionDto {
                        id: section.id.clone(),
                        title: section.title.clone(),
                        content: content.to_string(),
                        is_overridden,
                        override_label: match (is_overridden, current_entity) {
                            (true, Some(entity)) => Some(format!("{} Specific", entity.name)),
                            _ => None,
                        },
                    }
                })
                .collect()
        })
        .unwrap_or_default();

    ResolvedExamDto {
        id: exam.id.clone(),
        title: exam.title.clone(),
        modality: exam.modality,
        image_url: exam.image_url.clone(),
        tags: exam.tags.clone(),
        cpt_codes: exam.cpt_codes.clone(),
        notes: exam.notes.clone(),
        viewing_for: current_entity.map(|entity| entity.name.clone()),
        variants: exam
            .variants
            .iter()
            .map(|variant| VariantTabDto {
                id: variant.id.clone(),
                name: variant.name.clone(),
            })
            .collect(),
        active_variant_id: active_variant.map(|variant| variant.id.clone()),
        sections,
    }
}

#[cfg(test)]
mod tests;
