//! Read views over a schedule cycle: the filtered grid and the entity coverage history.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::{
    model::schedule::{
        AssignmentDto, AssignmentHistoryDto, EmployeeDto, GridCellDto, GridFilter, GridRowDto,
        ScheduleCycleDto, ScheduleGridDto, TimeOffDto,
    },
    server::service::schedule::{
        columns::{is_column_visible, TEAM_MEMBER_KEY},
        coverage::coverage_warnings,
    },
};

/// Whether the inclusive ranges `[start_a, end_a]` and `[start_b, end_b]` share a day
pub fn dates_overlap(
    start_a: NaiveDate,
    end_a: NaiveDate,
    start_b: NaiveDate,
    end_b: NaiveDate,
) -> bool {
    start_a <= end_b && end_a >= start_b
}

/// Whether any time off of the employee overlaps the cycle
pub fn is_off_in_cycle(
    employee_id: &str,
    cycle: &ScheduleCycleDto,
    time_off: &[TimeOffDto],
) -> bool {
    time_off.iter().any(|entry| {
        entry.employee_id == employee_id
            && dates_overlap(entry.start_date, entry.end_date, cycle.start_date, cycle.end_date)
    })
}

pub fn find_assignment<'a>(
    assignments: &'a [AssignmentDto],
    cycle_id: &str,
    employee_id: &str,
    column_key: &str,
) -> Option<&'a AssignmentDto> {
    assignments.iter().find(|assignment| {
        assignment.schedule_cycle_id == cycle_id
            && assignment.employee_id == employee_id
            && assignment.column_key == column_key
    })
}

/// Builds the grid of a cycle.
///
/// Rows follow the order of `employees` and are kept when the person filter is a
/// case-insensitive substring of the name. Each row has one cell per visible column except
/// the team member column, whose value is the row's name. A cell is highlighted when the
/// highlight text is a case-insensitive substring of its value.
pub fn build_grid(
    cycle: ScheduleCycleDto,
    employees: &[EmployeeDto],
    assignments: &[AssignmentDto],
    time_off: &[TimeOffDto],
    filter: &GridFilter,
) -> ScheduleGridDto {
    let columns: Vec<_> = cycle
        .column_config
        .iter()
        .filter(|column| is_column_visible(column, filter.columns))
        .cloned()
        .collect();

    let person = filter
        .person
        .as_deref()
        .map(|person| person.trim().to_lowercase())
        .filter(|person| !person.is_empty());
    let highlight = filter
        .highlight
        .as_deref()
        .map(|highlight| highlight.trim().to_uppercase())
        .filter(|highlight| !highlight.is_empty());

    let rows = employees
        .iter()
        .filter(|employee| match &person {
            Some(person) => employee.name.to_lowercase().contains(person),
            None => true,
        })
        .map(|employee| {
            let cells = columns
                .iter()
                .filter(|column| column.key != TEAM_MEMBER_KEY)
                .map(|column| {
                    let assignment =
                        find_assignment(assignments, &cycle.id, &employee.id, &column.key);
                    let value_text = assignment
                        .map(|assignment| assignment.value_text.clone())
                        .unwrap_or_default();
                    let highlighted = match &highlight {
                        Some(highlight) => value_text.to_uppercase().contains(highlight),
                        None => false,
                    };

                    GridCellDto {
                        column_key: column.key.clone(),
                        value_type: assignment.map(|assignment| assignment.value_type),
                        value_text,
                        highlighted,
                    }
                })
                .collect();

            GridRowDto {
                employee_id: employee.id.clone(),
                name: employee.name.clone(),
                role_level: employee.role_level,
                active: employee.active,
                off: is_off_in_cycle(&employee.id, &cycle, time_off),
                cells,
            }
        })
        .collect();

    let warnings = coverage_warnings(&cycle.id, assignments);

    ScheduleGridDto {
        cycle,
        columns,
        rows,
        warnings,
    }
}

/// Maps each employee ID to the entity codes they covered and each code to the employee IDs
/// that covered it, across all cycles.
pub fn build_history(assignments: &[AssignmentDto]) -> AssignmentHistoryDto {
    let mut by_person: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    let mut by_entity: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

    for assignment in assignments {
        for code in &assignment.entity_codes {
            by_person
                .entry(assignment.employee_id.clone())
                .or_default()
                .insert(code.clone());
            by_entity
                .entry(code.clone())
                .or_default()
                .insert(assignment.employee_id.clone());
        }
    }

    AssignmentHistoryDto {
        by_person: by_person
            .into_iter()
            .map(|(key, values)| (key, values.into_iter().collect()))
            .collect(),
        by_entity: by_entity
            .into_iter()
            .map(|(key, values)| (key, values.into_iter().collect()))
            .collect(),
    }
}

#[cfg(test)]
mod tests;
