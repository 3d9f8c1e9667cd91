/// Generates a new random record id.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Returns the given id when it is present and not blank, otherwise a new one.
pub fn id_or_new(id: Option<&str>) -> String {
    match id.map(str::trim) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => new_id(),
    }
}

/// Lower-cases a title and joins its alphanumeric runs with `-`.
///
/// `"CTA Abdomen & Pelvis"` becomes `"cta-abdomen-pelvis"`.
pub fn slugify(title: &str) -> String {
    title
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(|part| part.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}
