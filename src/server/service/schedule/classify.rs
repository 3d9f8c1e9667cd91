//! Classification of free-form schedule cell text.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::schedule::AssignmentValueType;

static UPPERCASE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z]{2,}").expect("uppercase run pattern is valid"));

static ENTITY_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z]{2,5}").expect("entity code pattern is valid"));

/// Classifies cell text, checked in order on the trimmed text:
///
/// 1. `x` in any case is [`AssignmentValueType::X`]
/// 2. a run of two or more capitals is [`AssignmentValueType::EntityList`]
/// 3. any other non-empty text is [`AssignmentValueType::Note`]
/// 4. empty text is [`AssignmentValueType::FreeText`]
///
/// Capitalized words that are not entity codes ("OK", "CPOE") also classify as entity lists.
pub fn classify(raw: &str) -> AssignmentValueType {
    let trimmed = raw.trim();

    if trimmed.eq_ignore_ascii_case("x") {
        AssignmentValueType::X
    } else if UPPERCASE_RUN.is_match(trimmed) {
        AssignmentValueType::EntityList
    } else if !trimmed.is_empty() {
        AssignmentValueType::Note
    } else {
        AssignmentValueType::FreeText
    }
}

/// Extracts the known entity codes mentioned in cell text, in order of first appearance.
pub fn extract_entity_codes(raw: &str, known_codes: &[String]) -> Vec<String> {
    let mut codes: Vec<String> = Vec::new();

    for candidate in ENTITY_CODE.find_iter(raw).map(|m| m.as_str()) {
        let is_known = known_codes.iter().any(|code| code == candidate);
        let is_new = !codes.iter().any(|code| code == candidate);
        if is_known && is_new {
            codes.push(candidate.to_string());
        }
    }

    codes
}
