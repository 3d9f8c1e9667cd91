//! Coverage warnings for the roles every cycle must staff.

use crate::model::schedule::AssignmentDto;

/// Roles every cycle needs covered with the warning shown while they are not
const REQUIRED_COVERAGE: [(&str, &str); 3] = [
    ("CPOE", "No CPOE assignee yet."),
    ("EMAIL_PRIMARY", "No 3P Email Primary assigned."),
    ("FLOAT", "No Float coverage assigned."),
];

/// Warnings for the required roles with no assignment of non-blank text in the cycle.
///
/// Assignments of other cycles are ignored, so the full assignment list can be passed.
pub fn coverage_warnings(cycle_id: &str, assignments: &[AssignmentDto]) -> Vec<String> {
    REQUIRED_COVERAGE
        .iter()
        .filter(|(column_key, _)| {
            !assignments.iter().any(|assignment| {
                assignment.schedule_cycle_id == cycle_id
                    && assignment.column_key == *column_key
                    && !assignment.value_text.trim().is_empty()
            })
        })
        .map(|(_, message)| message.to_string())
        .collect()
}
