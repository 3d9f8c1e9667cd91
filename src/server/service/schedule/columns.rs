//! Grid column layout of a schedule cycle.

use crate::model::schedule::{
    ColumnDefinition, ColumnFilter, ColumnType, MoveDirection, UpdateColumnDto,
};

/// Key of the column holding employee names, it is never filtered out of the grid.
pub const TEAM_MEMBER_KEY: &str = "TEAM_MEMBER";
pub const CPOE_KEY: &str = "CPOE";

pub const DEFAULT_DAR_COLUMNS: usize = 5;
pub const DEFAULT_INCOMING_COLUMNS: usize = 1;

fn column(key: &str, label: &str, column_type: ColumnType) -> ColumnDefinition {
    ColumnDefinition {
        key: key.to_string(),
        label: label.to_string(),
        column_type,
        header_group_text: None,
    }
}

/// Column set of a new cycle: team member, the DAR columns, CPOE, the incoming columns, then
/// the cross-training, special project, email and float columns.
pub fn default_columns(dar_count: usize, incoming_count: usize) -> Vec<ColumnDefinition> {
    let mut columns = vec![column(TEAM_MEMBER_KEY, "TEAM MEMBER", ColumnType::Single)];

    for index in 1..=dar_count {
        columns.push(ColumnDefinition {
            header_group_text: Some(String::new()),
            ..column(
                &format!("DAR_{}", index),
                &format!("DAR {}", index),
                ColumnType::Dar,
            )
        });
    }

    columns.push(column(CPOE_KEY, "CPOE", ColumnType::Single));

    for index in 1..=incoming_count {
        let label = if incoming_count > 1 {
            format!("Incoming {}", index)
        } else {
            "New Incoming Items".to_string()
        };
        columns.push(ColumnDefinition {
            header_group_text: Some(String::new()),
            ..column(&format!("INCOMING_{}", index), &label, ColumnType::Incoming)
        });
    }

    columns.extend([
        column("CROSS_TRAINING", "Cross-Training", ColumnType::FreeText),
        column(
            "SPECIAL_PROJECTS",
            "Special Projects/Assignments",
            ColumnType::FreeText,
        ),
        column("EMAIL_PRIMARY", "3P Email (Primary)", ColumnType::Single),
        column("EMAIL_BACKUP", "3P Email (Backup)", ColumnType::Single),
        column("FLOAT", "Float", ColumnType::Single),
    ]);

    columns
}

/// Applies the given fields to the column with the key.
///
/// Returns `false` when no column has the key.
pub fn update_column(
    columns: &mut [ColumnDefinition],
    key: &str,
    update: UpdateColumnDto,
) -> bool {
    let Some(column) = columns.iter_mut().find(|column| column.key == key) else {
        return false;
    };

    if let Some(label) = update.label {
        column.label = label;
    }
    if let Some(column_type) = update.column_type {
        column.column_type = column_type;
    }
    if let Some(header_group_text) = update.header_group_text {
        column.header_group_text = Some(header_group_text);
    }

    true
}

/// Swaps the column with its neighbour in the given direction.
///
/// Moving the first column up or the last column down leaves the order unchanged. Returns
/// `false` when no column has the key.
pub fn move_column(columns: &mut [ColumnDefinition], key: &str, direction: MoveDirection) -> bool {
    let Some(index) = columns.iter().position(|column| column.key == key) else {
        return false;
    };

    let target = match direction {
        MoveDirection::Up => index.checked_sub(1),
        MoveDirection::Down => Some(index + 1).filter(|target| *target < columns.len()),
    };

    if let Some(target) = target {
        columns.swap(index, target);
    }

    true
}

/// Whether the column is shown under the grid column filter
pub fn is_column_visible(column: &ColumnDefinition, filter: ColumnFilter) -> bool {
    if column.key == TEAM_MEMBER_KEY {
        return true;
    }

    match filter {
        ColumnFilter::All => true,
        ColumnFilter::Dar => column.column_type == ColumnType::Dar,
        ColumnFilter::Incoming => column.column_type == ColumnType::Incoming,
        ColumnFilter::Cpoe => column.key == CPOE_KEY,
    }
}
