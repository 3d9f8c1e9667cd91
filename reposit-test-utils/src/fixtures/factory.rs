//! Factory functions for mock database models.
//!
//! Pure functions returning models with standard test values, without database access.

use chrono::{Duration, NaiveDate, Utc};
use serde_json::json;

use crate::model::{
    AssignmentModel, CareEntityModel, EmployeeModel, ExamModel, ScheduleCycleModel, TimeOffModel,
};

pub fn mock_entity_model(id: &str, name: &str, code: &str) -> CareEntityModel {
    CareEntityModel {
        id: id.to_string(),
        name: name.to_string(),
        code: code.to_string(),
        logo_url: None,
    }
}

/// Exam enabled for every entity with no variants, notes, codes or tags.
pub fn mock_exam_model(id: &str, title: &str, modality: &str) -> ExamModel {
    let now = Utc::now().naive_utc();
    ExamModel {
        id: id.to_string(),
        title: title.to_string(),
        slug: id.to_string(),
        modality: modality.to_string(),
        image_url: None,
        enabled_entities: json!([]),
        notes: json!([]),
        cpt_codes: json!([]),
        tags: json!([]),
        variants: json!([]),
        created_at: now,
        updated_at: now,
        version: 1,
    }
}

/// Active "CR I" employee with no training.
pub fn mock_employee_model(id: &str, name: &str) -> EmployeeModel {
    EmployeeModel {
        id: id.to_string(),
        name: name.to_string(),
        role_level: "CR I".to_string(),
        active: true,
        training: json!({ "incomingTrained": false, "darTrained": false, "cpoeTrained": false }),
        hire_date: None,
        end_date: None,
        notes: None,
    }
}

/// Six week cycle starting at `start_date` with one column of each kind.
pub fn mock_cycle_model(id: &str, start_date: NaiveDate, status: &str) -> ScheduleCycleModel {
    ScheduleCycleModel {
        id: id.to_string(),
        title: format!("Cycle {}", id),
        start_date,
        end_date: start_date + Duration::days(42),
        effective_date: start_date,
        status: status.to_string(),
        notes: None,
        column_config: json!([
            { "key": "TEAM_MEMBER", "label": "TEAM MEMBER", "type": "single" },
            { "key": "DAR_1", "label": "DAR 1", "type": "dar", "headerGroupText": "THP/THPS" },
            { "key": "CPOE", "label": "CPOE", "type": "single" },
            { "key": "INCOMING_1", "label": "New Incoming Items", "type": "incoming" },
            { "key": "EMAIL_PRIMARY", "label": "3P Email (Primary)", "type": "single" },
            { "key": "FLOAT", "label": "Float", "type": "single" }
        ]),
    }
}

/// Assignment stored as a note with no entity codes.
pub fn mock_assignment_model(
    id: &str,
    cycle_id: &str,
    employee_id: &str,
    column_key: &str,
    value_text: &str,
) -> AssignmentModel {
    AssignmentModel {
        id: id.to_string(),
        schedule_cycle_id: cycle_id.to_string(),
        employee_id: employee_id.to_string(),
        column_key: column_key.to_string(),
        value_type: "NOTE".to_string(),
        value_text: value_text.to_string(),
        entity_codes: json!([]),
    }
}

pub fn mock_time_off_model(
    id: &str,
    employee_id: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> TimeOffModel {
    TimeOffModel {
        id: id.to_string(),
        employee_id: employee_id.to_string(),
        start_date,
        end_date,
        kind: "PTO".to_string(),
        note: None,
    }
}
